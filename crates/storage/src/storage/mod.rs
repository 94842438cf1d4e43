//! `SQLite` storage implementation.
//!
//! All methods are synchronous; async callers go through `spawn_blocking`.

// SQLite uses i64 for ids and counts, Rust uses u32/u64/usize
#![allow(
    clippy::as_conversions,
    clippy::cast_possible_wrap,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "SQLite i64 <-> Rust integer conversions are bounded by row counts and page limits"
)]

mod duplicate;
mod links;
mod nurseries;
mod plants;
mod profiles;

use std::path::Path;
use std::sync::Arc;

use plant_catalog_core::schema::{MIGRATIONS, SchemaState};
use plant_catalog_core::{DB_POOL_SIZE_ENV, env_parse_with_default};
use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::{Connection, OptionalExtension as _};
use serde::Serialize;

use crate::error::{StorageError, StorageResult};
use crate::migrations::{self, AppliedMigration, MigrationReport};

/// Type alias for pooled connection
pub(crate) type PooledConn = PooledConnection<SqliteConnectionManager>;

/// Main storage struct wrapping `SQLite` connection pool
#[derive(Clone, Debug)]
pub struct Storage {
    pub(crate) pool: Pool<SqliteConnectionManager>,
    /// Schema in effect after migrations, used to validate every write.
    schema: Arc<SchemaState>,
}

/// Applied versus known migrations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaStatus {
    pub applied: usize,
    pub target: usize,
    pub migrations: Vec<AppliedMigration>,
}

/// Get a connection from the pool
pub(crate) fn get_conn(pool: &Pool<SqliteConnectionManager>) -> StorageResult<PooledConn> {
    Ok(pool.get()?)
}

/// Maps a stored value that does not fit its domain type to `DataCorruption`.
///
/// Other errors convert as usual.
pub(crate) fn decode_error(table: &str) -> impl Fn(rusqlite::Error) -> StorageError + '_ {
    move |err| match err {
        rusqlite::Error::FromSqlConversionFailure(..)
        | rusqlite::Error::IntegralValueOutOfRange(..)
        | rusqlite::Error::InvalidColumnType(..) => {
            tracing::error!(table, error = %err, "Stored row cannot be decoded");
            StorageError::DataCorruption {
                context: format!("undecodable {table} row"),
                source: Box::new(err),
            }
        },
        other => other.into(),
    }
}

/// Collects every row, failing on the first one that cannot be decoded.
///
/// A listing never silently drops a row, so page totals stay truthful.
pub(crate) fn collect_rows<T>(
    table: &str,
    rows: impl Iterator<Item = rusqlite::Result<T>>,
) -> StorageResult<Vec<T>> {
    rows.map(|row| row.map_err(decode_error(table))).collect()
}

/// Coerce a reference to `ToSql` trait object (avoids trivial cast lint)
pub(crate) fn coerce_to_sql<T: rusqlite::ToSql>(val: &T) -> &dyn rusqlite::ToSql {
    val
}

/// Fails with `NotFound` unless `table` has a row with `id`.
pub(crate) fn ensure_exists(
    conn: &Connection,
    table: &'static str,
    id: i64,
) -> StorageResult<()> {
    conn.query_row(&format!("SELECT 1 FROM {table} WHERE id = ?1"), [id], |_| Ok(()))
        .optional()?
        .ok_or_else(|| StorageError::not_found(table, id))
}

/// Numbered placeholders `?1, ?2, ..` for `n` values.
pub(crate) fn placeholders(n: usize) -> String {
    (1..=n).map(|i| format!("?{i}")).collect::<Vec<_>>().join(", ")
}

/// Connection initializer for integrity and concurrency settings
fn init_connection(conn: &mut Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(
        "PRAGMA foreign_keys = ON;
         PRAGMA busy_timeout = 30000;
         PRAGMA journal_mode = WAL;
         PRAGMA synchronous = NORMAL;",
    )?;
    Ok(())
}

fn db_pool_size() -> u32 {
    env_parse_with_default(DB_POOL_SIZE_ENV, 8u32).max(1)
}

impl Storage {
    /// Create new storage instance with `SQLite` connection pool
    pub fn new(db_path: &Path) -> StorageResult<Self> {
        Self::open(db_path).map(|(storage, _)| storage)
    }

    /// Opens the database, migrating it to the end of the chain.
    pub fn open(db_path: &Path) -> StorageResult<(Self, MigrationReport)> {
        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let manager = SqliteConnectionManager::file(db_path).with_init(init_connection);

        let pool_size = db_pool_size();
        let pool = Pool::builder().max_size(pool_size).build(manager)?;

        // Run migrations on first connection
        let mut conn = get_conn(&pool)?;
        let report = migrations::run_migrations(&mut conn)?;
        drop(conn);

        let schema = Arc::new(SchemaState::latest()?);
        tracing::info!(pool_size, position = schema.position(), "Storage initialized with connection pool");

        Ok((Self { pool, schema }, report))
    }

    /// Schema the store validates records against.
    #[must_use]
    pub fn schema(&self) -> &SchemaState {
        &self.schema
    }

    pub fn schema_status(&self) -> StorageResult<SchemaStatus> {
        let conn = get_conn(&self.pool)?;
        let applied = migrations::applied_migrations(&conn)?;
        Ok(SchemaStatus { applied: applied.len(), target: MIGRATIONS.len(), migrations: applied })
    }
}
