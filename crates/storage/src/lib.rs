//! Storage layer for plant-catalog
//!
//! SQLite storage behind an r2d2 pool. Opening a store replays the migration
//! chain; every write is validated against the resulting schema. The
//! normalized legacy schema lives in [`legacy`] and never touches the pool.

mod error;
pub mod legacy;
mod migrations;
mod pagination;
mod storage;
#[cfg(test)]
mod tests;
mod traits;

pub use error::{StorageError, StorageResult};
pub use migrations::{
    AppliedMigration, DriftFinding, MigrationReport, applied_migrations, run_chain, run_migrations,
};
pub use pagination::{Page, PageMeta, PageRequest};
pub use storage::{SchemaStatus, Storage};
pub use traits::{NurseryStore, PlantLinkStore, PlantStore, ProfileStore};
