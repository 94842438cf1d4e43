//! Normalized legacy schema: `plant_types`, `plants` and `plant_urls`.
//!
//! Kept for reference and never reconciled with the main catalog tables.
//! Works on a plain [`rusqlite::Connection`], outside the pool.

mod dump;
mod setup;

pub use dump::dump_all_tables;
pub use rusqlite::Connection;
pub use setup::{
    InitReport, LEGACY_TABLES, PLANT_TYPE_SEED, SEED_AUTHOR, create_database, initialize,
    open_database,
};

use chrono::{DateTime, Utc};
use rusqlite::{OptionalExtension as _, TransactionBehavior, params};
use serde::Serialize;

use crate::error::StorageResult;

/// Kind of a stored plant URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UrlType {
    Image,
    Info,
}

impl UrlType {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match *self {
            Self::Image => "image",
            Self::Info => "info",
        }
    }
}

/// The fourteen insertable columns of a legacy `plants` row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyPlant {
    pub plant_type_id: i64,
    pub scientific_name: String,
    pub common_name: String,
    pub description: String,
    pub germination_days_start: i64,
    pub germination_days_end: i64,
    /// Fahrenheit.
    pub germination_temp_start: i64,
    pub germination_temp_end: i64,
    pub hardiness_zone_start: i64,
    pub hardiness_zone_end: i64,
    pub days_to_harvest: i64,
    pub days_to_maturation: i64,
    pub created_on: DateTime<Utc>,
    pub created_by: String,
}

/// Result of [`insert_plant`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted(i64),
    /// A plant with the same scientific name already exists; nothing was written.
    SkippedDuplicate,
}

/// A legacy plant joined with its type name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegacyPlantRow {
    pub id: i64,
    pub plant_type: Option<String>,
    pub scientific_name: String,
    pub common_name: String,
}

pub(crate) fn timestamp(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M:%S%.6f").to_string()
}

/// Inserts `plant` unless its scientific name is already stored.
///
/// The existence check and the insert share an IMMEDIATE transaction, so two
/// writers cannot both pass the check.
pub fn insert_plant(conn: &mut Connection, plant: &LegacyPlant) -> StorageResult<InsertOutcome> {
    let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
    let existing = tx
        .query_row(
            "SELECT id FROM plants WHERE scientific_name = ?1 LIMIT 1",
            [&plant.scientific_name],
            |row| row.get::<_, i64>(0),
        )
        .optional()?;
    if let Some(id) = existing {
        tracing::warn!(
            scientific_name = %plant.scientific_name,
            existing_id = id,
            "Plant with this scientific name already exists, skipping insert"
        );
        return Ok(InsertOutcome::SkippedDuplicate);
    }

    tx.execute(
        "INSERT INTO plants (
            plant_type_id, scientific_name, common_name, description,
            germination_days_start, germination_days_end,
            germination_temp_start, germination_temp_end,
            hardiness_zone_start, hardiness_zone_end,
            days_to_harvest, days_to_maturation, created_on, created_by
         ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)",
        params![
            plant.plant_type_id,
            plant.scientific_name,
            plant.common_name,
            plant.description,
            plant.germination_days_start,
            plant.germination_days_end,
            plant.germination_temp_start,
            plant.germination_temp_end,
            plant.hardiness_zone_start,
            plant.hardiness_zone_end,
            plant.days_to_harvest,
            plant.days_to_maturation,
            timestamp(plant.created_on),
            plant.created_by,
        ],
    )?;
    let id = tx.last_insert_rowid();
    tx.commit()?;
    tracing::info!(id, scientific_name = %plant.scientific_name, "Inserted legacy plant");
    Ok(InsertOutcome::Inserted(id))
}

pub fn insert_plant_url(
    conn: &Connection,
    plant_id: i64,
    url: &str,
    description: &str,
    url_type: UrlType,
    created_by: &str,
) -> StorageResult<i64> {
    conn.execute(
        "INSERT INTO plant_urls (plant_id, url, description, url_type, created_on, created_by)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![plant_id, url, description, url_type.as_str(), timestamp(Utc::now()), created_by],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Id of the `plant_types` row named `type_name`.
pub fn plant_type_id(conn: &Connection, type_name: &str) -> StorageResult<Option<i64>> {
    Ok(conn
        .query_row("SELECT id FROM plant_types WHERE type = ?1", [type_name], |row| row.get(0))
        .optional()?)
}

/// Plants whose type is `type_name`, ordered by common name.
pub fn plants_by_type(conn: &Connection, type_name: &str) -> StorageResult<Vec<LegacyPlantRow>> {
    let mut stmt = conn.prepare(
        "SELECT p.id, t.type, p.scientific_name, p.common_name
           FROM plants p
           JOIN plant_types t ON t.id = p.plant_type_id
          WHERE t.type = ?1
          ORDER BY p.common_name, p.id",
    )?;
    let rows = stmt.query_map([type_name], |row| {
        Ok(LegacyPlantRow {
            id: row.get(0)?,
            plant_type: row.get(1)?,
            scientific_name: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
            common_name: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
        })
    })?;
    Ok(rows.collect::<Result<Vec<_>, _>>()?)
}

/// User tables, by name. SQLite's internal `sqlite_*` tables are left out.
pub fn list_tables(conn: &Connection) -> StorageResult<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT name FROM sqlite_master
          WHERE type = 'table' AND name NOT LIKE 'sqlite\\_%' ESCAPE '\\'
          ORDER BY name",
    )?;
    let names = stmt.query_map([], |row| row.get(0))?;
    Ok(names.collect::<Result<Vec<_>, _>>()?)
}

/// The sample plant inserted by the demo command.
#[must_use]
pub fn sample_rose(plant_type_id: i64) -> LegacyPlant {
    LegacyPlant {
        plant_type_id,
        scientific_name: "Rosa chinensis".to_owned(),
        common_name: "China Rose".to_owned(),
        description: "A beautiful rose with red petals.".to_owned(),
        germination_days_start: 7,
        germination_days_end: 14,
        germination_temp_start: 70,
        germination_temp_end: 75,
        hardiness_zone_start: 5,
        hardiness_zone_end: 9,
        days_to_harvest: 60,
        days_to_maturation: 90,
        created_on: Utc::now(),
        created_by: SEED_AUTHOR.to_owned(),
    }
}
