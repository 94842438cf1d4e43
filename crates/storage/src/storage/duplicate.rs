//! Batch duplication shared by every duplicable entity.

use plant_catalog_core::Duplicable;
use plant_catalog_core::schema::SchemaState;
use rusqlite::Connection;

use crate::error::{StorageError, StorageResult};

/// A duplicable record stored in its own table.
pub(crate) trait TableRecord: Duplicable {
    fn load(conn: &Connection, id: i64) -> StorageResult<Option<Self>>;

    /// Inserts `record` as given, returning it with its new id.
    fn insert(conn: &Connection, record: &Self) -> StorageResult<Self>;
}

/// Copies every selected record in one transaction.
///
/// Only the marked field is checked against the schema; every other value is
/// copied verbatim, including codes that have since left their field's code
/// set. A missing id or a marked value past the field's max length rolls back
/// the whole batch. Associations are not copied.
pub(crate) fn duplicate_records<T: TableRecord>(
    conn: &mut Connection,
    schema: &SchemaState,
    ids: &[i64],
) -> StorageResult<Vec<T>> {
    let tx = conn.transaction()?;
    let mut copies = Vec::with_capacity(ids.len());
    for &id in ids {
        let original = T::load(&tx, id)?.ok_or_else(|| StorageError::not_found(T::ENTITY, id))?;
        let copy = original.as_copy();
        schema.check_text(T::ENTITY, T::MARKED_FIELD, Some(copy.marked_value()))?;
        let copy = T::insert(&tx, &copy)?;
        tracing::debug!(entity = T::ENTITY, from = id, to = ?copy.id(), "Duplicated record");
        copies.push(copy);
    }
    tx.commit()?;
    tracing::info!(entity = T::ENTITY, count = copies.len(), "Duplicated selected records");
    Ok(copies)
}
