//! Migration sequencer.
//!
//! Applies the declarative chain from `plant_catalog_core::schema` to a
//! SQLite database. The applied position is kept in `PRAGMA user_version`
//! and in the `schema_migrations` ledger; both must agree with the chain
//! prefix before anything new runs.

#![allow(
    clippy::redundant_pub_crate,
    reason = "migrations module is private, pub(crate) is intentional"
)]

mod audit;
mod column_helpers;
mod ddl;

pub use audit::DriftFinding;
pub(crate) use column_helpers::table_exists;

use chrono::Utc;
use plant_catalog_core::schema::{MIGRATIONS, Migration, Operation, SchemaState};
use rusqlite::{Connection, params};
use serde::Serialize;

use crate::error::{StorageError, StorageResult};
use column_helpers::add_column_if_not_exists;

const LEDGER_SQL: &str = "
CREATE TABLE IF NOT EXISTS schema_migrations (
    position INTEGER PRIMARY KEY,
    name TEXT NOT NULL UNIQUE,
    applied_at TEXT NOT NULL
);
";

/// Outcome of one migration run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MigrationReport {
    /// Position before the run.
    pub from: usize,
    /// Position after the run.
    pub to: usize,
    pub applied: Vec<&'static str>,
    pub drift: Vec<DriftFinding>,
}

impl MigrationReport {
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.applied.is_empty()
    }
}

/// One ledger row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppliedMigration {
    pub position: i64,
    pub name: String,
    pub applied_at: String,
}

pub fn run_migrations(conn: &mut Connection) -> StorageResult<MigrationReport> {
    run_chain(conn, MIGRATIONS)
}

/// Brings the database to the end of `chain`.
///
/// Each pending migration runs in its own transaction. The first failure
/// rolls that migration back and stops the run; earlier ones stay applied.
pub fn run_chain(conn: &mut Connection, chain: &[Migration]) -> StorageResult<MigrationReport> {
    let latest = SchemaState::replay(chain, chain.len())?;
    conn.execute_batch(LEDGER_SQL)?;

    let current = applied_position(conn, chain)?;
    tracing::info!("Database schema position: {} (target: {})", current, chain.len());

    let mut report = MigrationReport { from: current, to: current, ..MigrationReport::default() };
    for (index, migration) in chain.iter().enumerate().skip(current) {
        let position = index + 1;
        tracing::info!("Running migration {}: {}", position, migration.name);

        let tx = conn.transaction()?;
        for op in migration.operations {
            apply_operation(&tx, &latest, op).map_err(|e| {
                StorageError::Migration(format!(
                    "{} failed at '{}': {e}",
                    migration.name,
                    op.describe()
                ))
            })?;
            if let Operation::AlterField { entity, field } = *op {
                report.drift.extend(audit::audit_choices(&tx, migration.name, entity, &field)?);
            }
        }
        tx.execute(
            "INSERT INTO schema_migrations (position, name, applied_at) VALUES (?1, ?2, ?3)",
            params![to_sql_position(position)?, migration.name, Utc::now().to_rfc3339()],
        )?;
        tx.pragma_update(None, "user_version", to_sql_position(position)?)?;
        tx.commit()?;

        report.applied.push(migration.name);
        report.to = position;
    }

    if report.is_noop() {
        tracing::debug!("Database schema up to date");
    } else {
        tracing::info!(
            applied = report.applied.len(),
            drift = report.drift.len(),
            "Database schema up to date (position {})",
            report.to
        );
    }
    Ok(report)
}

/// Ledger rows in order.
pub fn applied_migrations(conn: &Connection) -> StorageResult<Vec<AppliedMigration>> {
    let mut stmt = conn
        .prepare("SELECT position, name, applied_at FROM schema_migrations ORDER BY position")?;
    let rows = stmt.query_map([], |row| {
        Ok(AppliedMigration { position: row.get(0)?, name: row.get(1)?, applied_at: row.get(2)? })
    })?;
    Ok(rows.collect::<Result<Vec<_>, _>>()?)
}

/// Number of chain entries already applied, after checking the ledger is a prefix of `chain`.
fn applied_position(conn: &Connection, chain: &[Migration]) -> StorageResult<usize> {
    let version: i64 = conn.pragma_query_value(None, "user_version", |row| row.get(0))?;
    let ledger = applied_migrations(conn)?;

    if to_sql_position(ledger.len())? != version {
        return Err(StorageError::Migration(format!(
            "ledger records {} migrations but user_version is {version}",
            ledger.len()
        )));
    }
    if ledger.len() > chain.len() {
        return Err(StorageError::Migration(format!(
            "database is at position {} but this build only knows {} migrations",
            ledger.len(),
            chain.len()
        )));
    }
    for (applied, expected) in ledger.iter().zip(chain) {
        if applied.name != expected.name {
            return Err(StorageError::Migration(format!(
                "applied migration {} is '{}', expected '{}'",
                applied.position, applied.name, expected.name
            )));
        }
    }
    Ok(ledger.len())
}

fn apply_operation(
    conn: &Connection,
    latest: &SchemaState,
    op: &Operation,
) -> Result<(), rusqlite::Error> {
    match *op {
        Operation::CreateEntity { entity, fields } => {
            conn.execute_batch(&ddl::create_table(latest, entity, fields))?;
            for sql in fields.iter().filter_map(|f| ddl::unique_index(entity, f)) {
                conn.execute_batch(&sql)?;
            }
        },
        Operation::AddField { entity, field } => {
            let col_type = ddl::column_type(&ddl::final_default(latest, entity, field));
            if !add_column_if_not_exists(conn, entity, field.name, &col_type)? {
                tracing::debug!(entity, field = field.name, "Column already present, skipping");
            }
            if let Some(sql) = ddl::unique_index(entity, &field) {
                conn.execute_batch(&sql)?;
            }
        },
        Operation::AlterField { entity, field } => {
            tracing::debug!(entity, field = field.name, "Field redefined, no DDL needed");
        },
        Operation::AddManyToMany { entity, relation, to } => {
            conn.execute_batch(&ddl::create_join_table(entity, relation, to))?;
        },
    }
    Ok(())
}

fn to_sql_position(position: usize) -> StorageResult<i64> {
    i64::try_from(position)
        .map_err(|_| StorageError::Migration(format!("position {position} out of range")))
}
