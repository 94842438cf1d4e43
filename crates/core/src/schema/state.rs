//! Schema state obtained by replaying a prefix of the chain.

use std::collections::BTreeMap;

use super::field::{FieldDef, FieldKind, Migration, Operation};
use super::{MIGRATIONS, validate_chain};
use crate::choices::find_choice;
use crate::error::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Relation {
    pub name: &'static str,
    pub to: &'static str,
}

/// Shape of one entity at some chain position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntityState {
    /// Fields in column order.
    pub fields: Vec<FieldDef>,
    pub relations: Vec<Relation>,
}

impl EntityState {
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }

    #[must_use]
    pub fn column_names(&self) -> Vec<&'static str> {
        self.fields.iter().map(|f| f.name).collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaState {
    entities: BTreeMap<&'static str, EntityState>,
    position: usize,
}

impl SchemaState {
    /// Replays the first `upto` migrations of `chain`.
    pub fn replay(chain: &[Migration], upto: usize) -> Result<Self, CoreError> {
        validate_chain(chain)?;
        if upto > chain.len() {
            return Err(CoreError::BrokenChain(format!(
                "position {upto} is past the end of a {}-step chain",
                chain.len()
            )));
        }
        let mut state = Self::default();
        for migration in chain.iter().take(upto) {
            for op in migration.operations {
                state.apply(op)?;
            }
            state.position += 1;
        }
        Ok(state)
    }

    /// State after the whole shipped chain.
    pub fn latest() -> Result<Self, CoreError> {
        Self::replay(MIGRATIONS, MIGRATIONS.len())
    }

    /// Number of migrations folded into this state.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Folds one operation into the state.
    pub fn apply(&mut self, op: &Operation) -> Result<(), CoreError> {
        match *op {
            Operation::CreateEntity { entity, fields } => {
                if self.entities.contains_key(entity) {
                    return Err(CoreError::SchemaConflict(format!("{entity} already exists")));
                }
                self.entities
                    .insert(entity, EntityState { fields: fields.to_vec(), relations: Vec::new() });
            },
            Operation::AddField { entity, field } => {
                let state = self.entity_mut(entity)?;
                if state.field(field.name).is_some() {
                    return Err(CoreError::SchemaConflict(format!(
                        "{entity}.{} already exists",
                        field.name
                    )));
                }
                state.fields.push(field);
            },
            Operation::AlterField { entity, field } => {
                let state = self.entity_mut(entity)?;
                let slot = state.fields.iter_mut().find(|f| f.name == field.name).ok_or_else(
                    || CoreError::UnknownField {
                        entity: entity.to_owned(),
                        field: field.name.to_owned(),
                    },
                )?;
                *slot = field;
            },
            Operation::AddManyToMany { entity, relation, to } => {
                if !self.entities.contains_key(to) {
                    return Err(CoreError::UnknownEntity(to.to_owned()));
                }
                let state = self.entity_mut(entity)?;
                if state.relations.iter().any(|r| r.name == relation) {
                    return Err(CoreError::SchemaConflict(format!(
                        "{entity}.{relation} already exists"
                    )));
                }
                state.relations.push(Relation { name: relation, to });
            },
        }
        Ok(())
    }

    #[must_use]
    pub fn entity(&self, name: &str) -> Option<&EntityState> {
        self.entities.get(name)
    }

    pub fn entity_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entities.keys().copied()
    }

    pub fn field(&self, entity: &str, field: &str) -> Result<&FieldDef, CoreError> {
        self.entities
            .get(entity)
            .ok_or_else(|| CoreError::UnknownEntity(entity.to_owned()))?
            .field(field)
            .ok_or_else(|| CoreError::UnknownField {
                entity: entity.to_owned(),
                field: field.to_owned(),
            })
    }

    /// Default code or value of `entity.field`, rendered as text.
    pub fn default_of(&self, entity: &str, field: &str) -> Result<Option<String>, CoreError> {
        Ok(match self.field(entity, field)?.kind {
            FieldKind::Choice { default, .. } => default.map(ToOwned::to_owned),
            FieldKind::Bool { default } => Some(default.to_string()),
            FieldKind::PositiveInt { default } => Some(default.to_string()),
            FieldKind::AutoId
            | FieldKind::Text { .. }
            | FieldKind::Url { .. }
            | FieldKind::OneToOne { .. } => None,
        })
    }

    /// Checks a text or URL value against the field's length and presence rules.
    pub fn check_text(
        &self,
        entity: &'static str,
        field: &'static str,
        value: Option<&str>,
    ) -> Result<(), CoreError> {
        let (max_len, required) = match self.field(entity, field)?.kind {
            FieldKind::Text { max_len, required } => (max_len, required),
            FieldKind::Url { required } => (None, required),
            _ => return Ok(()),
        };
        let value = value.unwrap_or_default();
        if required && value.trim().is_empty() {
            return Err(CoreError::Required { entity, field });
        }
        let len = value.chars().count();
        match max_len {
            Some(max) if len > max => Err(CoreError::TooLong { entity, field, max, len }),
            _ => Ok(()),
        }
    }

    /// Checks that `code` belongs to the field's code set at this position.
    pub fn check_choice(
        &self,
        entity: &'static str,
        field: &'static str,
        code: &str,
    ) -> Result<(), CoreError> {
        let Some(choices) = self.field(entity, field)?.choices() else {
            return Ok(());
        };
        if find_choice(choices, code).is_some() {
            Ok(())
        } else {
            Err(CoreError::InvalidCode { entity, field, code: code.to_owned() })
        }
    }

    /// Label for a stored code, if it is valid at this position.
    #[must_use]
    pub fn label(&self, entity: &str, field: &str, code: &str) -> Option<&'static str> {
        let choices = self.field(entity, field).ok()?.choices()?;
        find_choice(choices, code).map(|c| c.label)
    }

    fn entity_mut(&mut self, entity: &str) -> Result<&mut EntityState, CoreError> {
        self.entities.get_mut(entity).ok_or_else(|| CoreError::UnknownEntity(entity.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{NURSERY, PLANT, PLANT_LINK, PROFILE};

    fn position_of(name: &str) -> usize {
        MIGRATIONS.iter().position(|m| m.name == name).map(|i| i + 1).unwrap()
    }

    #[test]
    fn empty_state_before_first_migration() {
        let state = SchemaState::replay(MIGRATIONS, 0).unwrap();
        assert_eq!(state.position(), 0);
        assert_eq!(state.entity_names().count(), 0);
    }

    #[test]
    fn latest_state_has_all_entities() {
        let state = SchemaState::latest().unwrap();
        assert_eq!(state.position(), MIGRATIONS.len());
        let names: Vec<_> = state.entity_names().collect();
        assert_eq!(names, vec![NURSERY, PLANT, PLANT_LINK, PROFILE]);
    }

    #[test]
    fn latest_plant_shape() {
        let state = SchemaState::latest().unwrap();
        let plant = state.entity(PLANT).unwrap();
        assert_eq!(plant.fields.len(), 36);
        let flags = plant.fields.iter().filter(|f| matches!(f.kind, FieldKind::Bool { .. })).count();
        assert_eq!(flags, 20);
        for name in ["exposure", "medicinal_benefits", "is_waterwise", "maturity_days"] {
            assert!(plant.field(name).is_some(), "missing {name}");
        }
    }

    #[test]
    fn relations_point_at_plants() {
        let state = SchemaState::latest().unwrap();
        for entity in [PLANT_LINK, NURSERY, PROFILE] {
            let relations = &state.entity(entity).unwrap().relations;
            assert_eq!(relations, &vec![Relation { name: "plants", to: PLANT }]);
        }
        assert!(state.entity(PLANT).unwrap().relations.is_empty());
    }

    #[test]
    fn plant_type_validity_depends_on_position() {
        let before_removal = SchemaState::replay(MIGRATIONS, 1).unwrap();
        assert!(before_removal.check_choice(PLANT, "plant_type", "un").is_ok());

        let removed = SchemaState::replay(MIGRATIONS, position_of("0003_alter_plant_plant_type"))
            .unwrap();
        assert!(matches!(
            removed.check_choice(PLANT, "plant_type", "un"),
            Err(CoreError::InvalidCode { .. })
        ));
        assert!(removed.check_choice(PLANT, "plant_type", "tp").is_err());

        let latest = SchemaState::latest().unwrap();
        assert!(latest.check_choice(PLANT, "plant_type", "un").is_ok());
        assert!(latest.check_choice(PLANT, "plant_type", "tp").is_ok());
    }

    #[test]
    fn full_to_partial_sun_is_transient() {
        let added = SchemaState::replay(MIGRATIONS, position_of("0005_alter_plant_exposure"))
            .unwrap();
        assert!(added.check_choice(PLANT, "exposure", "fp").is_ok());
        assert_eq!(added.label(PLANT, "exposure", "fp"), Some("Full to Partial Sun"));

        let latest = SchemaState::latest().unwrap();
        assert!(latest.check_choice(PLANT, "exposure", "fp").is_err());
        assert_eq!(latest.label(PLANT, "exposure", "fp"), None);
    }

    #[test]
    fn exposure_unknown_before_it_was_added() {
        let state = SchemaState::replay(MIGRATIONS, 3).unwrap();
        assert!(matches!(
            state.check_choice(PLANT, "exposure", "fs"),
            Err(CoreError::UnknownField { .. })
        ));
    }

    #[test]
    fn plant_type_default_moves_from_perennial_to_unknown() {
        let before = SchemaState::replay(MIGRATIONS, position_of("0016_alter_plant_plant_type"))
            .unwrap();
        assert_eq!(before.default_of(PLANT, "plant_type").unwrap().as_deref(), Some("pe"));
        let latest = SchemaState::latest().unwrap();
        assert_eq!(latest.default_of(PLANT, "plant_type").unwrap().as_deref(), Some("un"));
    }

    #[test]
    fn link_title_widened() {
        let initial = SchemaState::replay(MIGRATIONS, 1).unwrap();
        let title = "x".repeat(60);
        assert!(matches!(
            initial.check_text(PLANT_LINK, "title", Some(&title)),
            Err(CoreError::TooLong { max: 50, len: 60, .. })
        ));
        let latest = SchemaState::latest().unwrap();
        assert!(latest.check_text(PLANT_LINK, "title", Some(&title)).is_ok());
        assert!(latest.check_choice(PLANT_LINK, "link_type", "nu").is_ok());
    }

    #[test]
    fn required_text_rejects_blank() {
        let latest = SchemaState::latest().unwrap();
        assert_eq!(
            latest.check_text(PLANT, "name_common", Some("  ")),
            Err(CoreError::Required { entity: PLANT, field: "name_common" })
        );
        assert!(latest.check_text(PLANT, "name_scientific", None).is_ok());
    }

    #[test]
    fn replay_past_end_fails() {
        assert!(SchemaState::replay(MIGRATIONS, MIGRATIONS.len() + 1).is_err());
    }

    #[test]
    fn conflicting_operations_are_rejected() {
        let mut state = SchemaState::latest().unwrap();
        let dup = Operation::AddField { entity: PLANT, field: FieldDef::flag("is_hybrid") };
        assert!(matches!(state.apply(&dup), Err(CoreError::SchemaConflict(_))));
        let missing = Operation::AlterField { entity: PLANT, field: FieldDef::flag("nope") };
        assert!(matches!(state.apply(&missing), Err(CoreError::UnknownField { .. })));
        let orphan = Operation::AddField { entity: "garden", field: FieldDef::flag("x") };
        assert!(matches!(state.apply(&orphan), Err(CoreError::UnknownEntity(_))));
    }
}
