//! Drift audit for enumerated fields.
//!
//! When a migration redefines a code set, rows holding codes outside the new
//! set are reported. Stored values are never rewritten.

use plant_catalog_core::find_choice;
use plant_catalog_core::schema::FieldDef;
use rusqlite::Connection;
use serde::Serialize;

/// A stored code that fell outside its field's code set when a migration redefined it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DriftFinding {
    pub migration: &'static str,
    pub table: &'static str,
    pub field: &'static str,
    pub row_id: i64,
    pub code: String,
}

pub fn audit_choices(
    conn: &Connection,
    migration: &'static str,
    table: &'static str,
    field: &FieldDef,
) -> Result<Vec<DriftFinding>, rusqlite::Error> {
    let Some(choices) = field.choices() else {
        return Ok(Vec::new());
    };
    let mut stmt = conn.prepare(&format!("SELECT id, {} FROM {table} ORDER BY id", field.name))?;
    let rows = stmt.query_map([], |row| Ok((row.get::<_, i64>(0)?, row.get::<_, Option<String>>(1)?)))?;

    let mut findings = Vec::new();
    for row in rows {
        let (row_id, code) = row?;
        let code = code.unwrap_or_default();
        if find_choice(choices, &code).is_none() {
            tracing::warn!(
                migration,
                table,
                field = field.name,
                row_id,
                code = %code,
                "Stored code is not valid after migration"
            );
            findings.push(DriftFinding { migration, table, field: field.name, row_id, code });
        }
    }
    Ok(findings)
}
