//! Declarative schema history.
//!
//! The schema is never written down in its final form. It is the result of
//! replaying [`MIGRATIONS`], an append-only linear chain of operations, and
//! code validity for enumerated fields is relative to the position reached.

mod chain;
mod field;
mod state;

pub use chain::{MIGRATIONS, validate_chain};
pub use field::{FieldDef, FieldKind, Migration, Operation};
pub use state::{EntityState, Relation, SchemaState};

pub const PLANT: &str = "plant";
pub const PLANT_LINK: &str = "plant_link";
pub const NURSERY: &str = "nursery";
pub const PROFILE: &str = "profile";

/// Name of the many-to-many relation every satellite entity keeps to plants.
pub const PLANTS_RELATION: &str = "plants";

/// Join table backing `entity.relation`.
#[must_use]
pub fn join_table(entity: &str, relation: &str) -> String {
    format!("{entity}_{relation}")
}

/// Foreign-key column pointing at `entity` inside a join table.
#[must_use]
pub fn fk_column(entity: &str) -> String {
    format!("{entity}_id")
}
