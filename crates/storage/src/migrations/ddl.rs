//! SQLite DDL for schema operations.
//!
//! Enumerated codes, defaults and text lengths are enforced by the
//! application, so altering a field never touches the table.
//!
//! Column defaults are only a fallback for rows written outside the
//! application. They are taken from the end of the chain being run (see
//! [`final_default`]), but SQLite cannot change a column default after the
//! fact: a table created by an older build keeps the defaults it was created
//! with. The defaults in `SchemaState` are the authoritative ones.

use plant_catalog_core::schema::{FieldDef, FieldKind, SchemaState, fk_column, join_table};

/// Column type and constraints for `field`.
///
/// `NOT NULL` columns always carry a default so they can be added to
/// populated tables.
pub fn column_type(field: &FieldDef) -> String {
    match field.kind {
        FieldKind::AutoId => "INTEGER PRIMARY KEY AUTOINCREMENT".to_owned(),
        FieldKind::Text { required: true, .. } | FieldKind::Url { required: true } => {
            "TEXT NOT NULL DEFAULT ''".to_owned()
        },
        FieldKind::Text { required: false, .. } | FieldKind::Url { required: false } => {
            "TEXT".to_owned()
        },
        FieldKind::Choice { default, .. } => {
            format!("TEXT NOT NULL DEFAULT '{}'", default.unwrap_or_default())
        },
        FieldKind::Bool { default } => format!("INTEGER NOT NULL DEFAULT {}", i32::from(default)),
        FieldKind::PositiveInt { default } => {
            format!("INTEGER NOT NULL DEFAULT {default} CHECK ({} >= 0)", field.name)
        },
        FieldKind::OneToOne { .. } => "INTEGER".to_owned(),
    }
}

/// `field` carrying the default it has at the end of the chain in `latest`.
///
/// Only the default is swapped; a field missing from `latest` or whose kind
/// changed is returned unchanged.
pub fn final_default(latest: &SchemaState, entity: &str, field: FieldDef) -> FieldDef {
    let Ok(last) = latest.field(entity, field.name) else {
        return field;
    };
    let kind = match (field.kind, last.kind) {
        (FieldKind::Choice { choices, max_len, .. }, FieldKind::Choice { default, .. }) => {
            FieldKind::Choice { choices, default, max_len }
        },
        (FieldKind::Bool { .. }, FieldKind::Bool { default }) => FieldKind::Bool { default },
        (FieldKind::PositiveInt { .. }, FieldKind::PositiveInt { default }) => {
            FieldKind::PositiveInt { default }
        },
        (kind, _) => kind,
    };
    FieldDef { kind, ..field }
}

pub fn create_table(latest: &SchemaState, entity: &str, fields: &[FieldDef]) -> String {
    let columns: Vec<String> = fields
        .iter()
        .map(|f| format!("    {} {}", f.name, column_type(&final_default(latest, entity, *f))))
        .collect();
    format!("CREATE TABLE IF NOT EXISTS {entity} (\n{}\n)", columns.join(",\n"))
}

/// Unique index backing a one-to-one field. `None` for other kinds.
pub fn unique_index(entity: &str, field: &FieldDef) -> Option<String> {
    matches!(field.kind, FieldKind::OneToOne { .. }).then(|| {
        format!(
            "CREATE UNIQUE INDEX IF NOT EXISTS idx_{entity}_{name} ON {entity}({name})",
            name = field.name
        )
    })
}

/// Join table for `entity.relation`, cascading deletes from both sides.
pub fn create_join_table(entity: &str, relation: &str, to: &str) -> String {
    let table = join_table(entity, relation);
    let left = fk_column(entity);
    let right = fk_column(to);
    format!(
        "CREATE TABLE IF NOT EXISTS {table} (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    {left} INTEGER NOT NULL REFERENCES {entity}(id) ON DELETE CASCADE,
    {right} INTEGER NOT NULL REFERENCES {to}(id) ON DELETE CASCADE,
    UNIQUE ({left}, {right})
);
CREATE INDEX IF NOT EXISTS idx_{table}_{right} ON {table}({right});"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use plant_catalog_core::schema::{MIGRATIONS, PLANT};
    use plant_catalog_core::{HARDINESS_ZONES, PLANT_TYPES, PLANT_TYPES_INITIAL};

    #[test]
    fn column_types() {
        assert_eq!(column_type(&FieldDef::flag("is_evergreen")), "INTEGER NOT NULL DEFAULT 0");
        assert_eq!(column_type(&FieldDef::optional_text("medicinal_benefits", None)), "TEXT");
        assert_eq!(
            column_type(&FieldDef::choice("plant_type", PLANT_TYPES, Some("un"), 2)),
            "TEXT NOT NULL DEFAULT 'un'"
        );
        assert_eq!(column_type(&FieldDef::text("name", 50)), "TEXT NOT NULL DEFAULT ''");
        assert_eq!(
            column_type(&FieldDef::positive("spacing_min")),
            "INTEGER NOT NULL DEFAULT 0 CHECK (spacing_min >= 0)"
        );
    }

    #[test]
    fn defaults_come_from_end_of_chain() {
        let latest = SchemaState::replay(MIGRATIONS, MIGRATIONS.len()).unwrap();
        let initial = FieldDef::choice("plant_type", PLANT_TYPES_INITIAL, Some("pe"), 2);
        let field = final_default(&latest, PLANT, initial);
        assert_eq!(column_type(&field), "TEXT NOT NULL DEFAULT 'un'");
        // The code set is the one being created, not the final one.
        assert_eq!(field.choices(), Some(PLANT_TYPES_INITIAL));

        let sql = create_table(
            &latest,
            PLANT,
            &[FieldDef::id(), FieldDef::choice("hardiness_zone_low", HARDINESS_ZONES, Some("8b"), 3)],
        );
        assert!(sql.contains("hardiness_zone_low TEXT NOT NULL DEFAULT 'np'"), "{sql}");
    }

    #[test]
    fn unknown_field_keeps_its_default() {
        let latest = SchemaState::replay(MIGRATIONS, 1).unwrap();
        let field = final_default(&latest, "garden", FieldDef::positive("beds"));
        assert_eq!(field, FieldDef::positive("beds"));
    }

    #[test]
    fn join_table_names_both_sides() {
        let sql = create_join_table("nursery", "plants", "plant");
        assert!(sql.contains("CREATE TABLE IF NOT EXISTS nursery_plants"));
        assert!(sql.contains("nursery_id INTEGER NOT NULL REFERENCES nursery(id) ON DELETE CASCADE"));
        assert!(sql.contains("UNIQUE (nursery_id, plant_id)"));
    }

    #[test]
    fn only_one_to_one_gets_an_index() {
        assert!(unique_index("profile", &FieldDef::one_to_one("user_id", "user")).is_some());
        assert!(unique_index("profile", &FieldDef::text("name", 50)).is_none());
    }
}
