use plant_catalog_core::Nursery;
use plant_catalog_core::schema::{NURSERY, PLANT};
use rusqlite::{Connection, OptionalExtension as _, Row, params};

use super::duplicate::{TableRecord, duplicate_records};
use super::{Storage, collect_rows, decode_error, ensure_exists, get_conn};
use crate::error::{StorageError, StorageResult};
use crate::traits::NurseryStore;

pub(super) fn row_to_nursery(row: &Row<'_>) -> rusqlite::Result<Nursery> {
    Ok(Nursery { id: Some(row.get("id")?), name: row.get("name")?, url: row.get("url")? })
}

impl TableRecord for Nursery {
    fn load(conn: &Connection, id: i64) -> StorageResult<Option<Self>> {
        conn.query_row("SELECT * FROM nursery WHERE id = ?1", [id], row_to_nursery)
            .optional()
            .map_err(decode_error(NURSERY))
    }

    fn insert(conn: &Connection, record: &Self) -> StorageResult<Self> {
        conn.execute(
            "INSERT INTO nursery (name, url) VALUES (?1, ?2)",
            params![record.name, record.url],
        )?;
        let mut saved = record.clone();
        saved.id = Some(conn.last_insert_rowid());
        Ok(saved)
    }
}

impl NurseryStore for Storage {
    fn save_nursery(&self, nursery: &Nursery) -> StorageResult<Nursery> {
        let conn = get_conn(&self.pool)?;
        nursery.validate(self.schema())?;
        let Some(id) = nursery.id else {
            return Nursery::insert(&conn, nursery);
        };
        let affected = conn.execute(
            "UPDATE nursery SET name = ?1, url = ?2 WHERE id = ?3",
            params![nursery.name, nursery.url, id],
        )?;
        if affected == 0 {
            return Err(StorageError::not_found(NURSERY, id));
        }
        Ok(nursery.clone())
    }

    fn get_nursery(&self, id: i64) -> StorageResult<Option<Nursery>> {
        let conn = get_conn(&self.pool)?;
        Nursery::load(&conn, id)
    }

    fn delete_nursery(&self, id: i64) -> StorageResult<bool> {
        let conn = get_conn(&self.pool)?;
        Ok(conn.execute("DELETE FROM nursery WHERE id = ?1", [id])? > 0)
    }

    fn list_nurseries(&self) -> StorageResult<Vec<Nursery>> {
        let conn = get_conn(&self.pool)?;
        let mut stmt = conn.prepare("SELECT * FROM nursery ORDER BY name, id")?;
        let rows = stmt.query_map([], row_to_nursery)?;
        collect_rows(NURSERY, rows)
    }

    fn stock_plants(&self, nursery_id: i64, plant_ids: &[i64]) -> StorageResult<usize> {
        let mut conn = get_conn(&self.pool)?;
        let tx = conn.transaction()?;
        ensure_exists(&tx, NURSERY, nursery_id)?;
        let mut added = 0;
        for &plant_id in plant_ids {
            ensure_exists(&tx, PLANT, plant_id)?;
            added += tx.execute(
                "INSERT OR IGNORE INTO nursery_plants (nursery_id, plant_id) VALUES (?1, ?2)",
                params![nursery_id, plant_id],
            )?;
        }
        tx.commit()?;
        Ok(added)
    }

    fn duplicate_nurseries(&self, ids: &[i64]) -> StorageResult<Vec<Nursery>> {
        let mut conn = get_conn(&self.pool)?;
        duplicate_records(&mut conn, self.schema(), ids)
    }
}
