use std::path::Path;

use chrono::Utc;
use rusqlite::{Connection, OpenFlags, params};

use super::timestamp;
use crate::error::StorageResult;
use crate::migrations::table_exists;

/// Author recorded on seeded rows.
pub const SEED_AUTHOR: &str = "catalog-admin";

/// Rows written into a freshly created `plant_types` table.
pub const PLANT_TYPE_SEED: &[&str] = &["flower", "fruit", "vegetable", "tree"];

const PLANT_TYPES_SQL: &str = "
CREATE TABLE IF NOT EXISTS plant_types (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    type TEXT UNIQUE,
    created_on DATE,
    created_by TEXT
)";

// scientific_name is unique by convention only; insert_plant enforces it.
const PLANTS_SQL: &str = "
CREATE TABLE IF NOT EXISTS plants (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    plant_type_id INTEGER,
    scientific_name TEXT,
    common_name TEXT,
    description TEXT,
    germination_days_start INTEGER,
    germination_days_end INTEGER,
    germination_temp_start INTEGER,
    germination_temp_end INTEGER,
    hardiness_zone_start INTEGER,
    hardiness_zone_end INTEGER,
    days_to_harvest INTEGER,
    days_to_maturation INTEGER,
    created_on DATE,
    created_by TEXT,
    FOREIGN KEY(plant_type_id) REFERENCES plant_types(id)
)";

const PLANT_URLS_SQL: &str = "
CREATE TABLE IF NOT EXISTS plant_urls (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    plant_id INTEGER,
    url TEXT,
    description TEXT,
    url_type TEXT CHECK(url_type IN ('image', 'info')),
    created_on DATE,
    created_by TEXT,
    FOREIGN KEY(plant_id) REFERENCES plants(id)
)";

/// Legacy tables in creation order.
pub const LEGACY_TABLES: &[(&str, &str)] =
    &[("plant_types", PLANT_TYPES_SQL), ("plants", PLANTS_SQL), ("plant_urls", PLANT_URLS_SQL)];

/// What [`initialize`] did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InitReport {
    pub created: Vec<&'static str>,
    /// Tables whose creation failed. Initialization carried on without them.
    pub failed: Vec<&'static str>,
    /// Seed rows written into `plant_types`.
    pub seeded: usize,
}

/// Opens an existing database file read-only.
///
/// Nothing is created or seeded; a missing file is an error.
pub fn open_database(path: &Path) -> StorageResult<Connection> {
    let flags = OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX;
    Ok(Connection::open_with_flags(path, flags)?)
}

/// Opens (or creates) the database file and initializes the legacy tables.
pub fn create_database(path: &Path) -> StorageResult<Connection> {
    let conn = Connection::open(path)?;
    let report = initialize(&conn)?;
    if !report.created.is_empty() {
        tracing::info!(path = %path.display(), created = ?report.created, "Database created successfully");
    }
    Ok(conn)
}

/// Creates each missing legacy table.
///
/// Every table is checked on its own, so unrelated tables in the file do not
/// stop initialization. A creation failure is logged and the next table is
/// tried. `plant_types` is seeded only when this call created it.
pub fn initialize(conn: &Connection) -> StorageResult<InitReport> {
    let mut report = InitReport::default();
    for &(table, sql) in LEGACY_TABLES {
        if table_exists(conn, table)? {
            tracing::debug!(table, "Legacy table already present");
            continue;
        }
        if let Err(e) = conn.execute_batch(sql) {
            tracing::warn!(table, error = %e, "Error creating table");
            report.failed.push(table);
            continue;
        }
        report.created.push(table);
        if table == "plant_types" {
            report.seeded = seed_plant_types(conn)?;
        }
    }
    Ok(report)
}

fn seed_plant_types(conn: &Connection) -> StorageResult<usize> {
    let created_on = timestamp(Utc::now());
    let mut stmt =
        conn.prepare("INSERT INTO plant_types (type, created_on, created_by) VALUES (?1, ?2, ?3)")?;
    let mut seeded = 0;
    for plant_type in PLANT_TYPE_SEED {
        seeded += stmt.execute(params![plant_type, created_on, SEED_AUTHOR])?;
    }
    tracing::info!(seeded, "Seeded plant types");
    Ok(seeded)
}
