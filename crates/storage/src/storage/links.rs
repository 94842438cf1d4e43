use plant_catalog_core::PlantLink;
use plant_catalog_core::schema::{PLANT, PLANT_LINK};
use rusqlite::{Connection, OptionalExtension as _, Row, params};

use super::duplicate::{TableRecord, duplicate_records};
use super::{Storage, collect_rows, decode_error, ensure_exists, get_conn};
use crate::error::{StorageError, StorageResult};
use crate::traits::PlantLinkStore;

pub(super) fn row_to_link(row: &Row<'_>) -> rusqlite::Result<PlantLink> {
    Ok(PlantLink {
        id: Some(row.get("id")?),
        title: row.get("title")?,
        url: row.get("url")?,
        link_type: row.get("link_type")?,
    })
}

impl TableRecord for PlantLink {
    fn load(conn: &Connection, id: i64) -> StorageResult<Option<Self>> {
        conn.query_row("SELECT * FROM plant_link WHERE id = ?1", [id], row_to_link)
            .optional()
            .map_err(decode_error(PLANT_LINK))
    }

    fn insert(conn: &Connection, record: &Self) -> StorageResult<Self> {
        conn.execute(
            "INSERT INTO plant_link (title, url, link_type) VALUES (?1, ?2, ?3)",
            params![record.title, record.url, record.link_type],
        )?;
        let mut saved = record.clone();
        saved.id = Some(conn.last_insert_rowid());
        Ok(saved)
    }
}

impl PlantLinkStore for Storage {
    fn save_link(&self, link: &PlantLink) -> StorageResult<PlantLink> {
        let conn = get_conn(&self.pool)?;
        link.validate(self.schema())?;
        let Some(id) = link.id else {
            return PlantLink::insert(&conn, link);
        };
        let affected = conn.execute(
            "UPDATE plant_link SET title = ?1, url = ?2, link_type = ?3 WHERE id = ?4",
            params![link.title, link.url, link.link_type, id],
        )?;
        if affected == 0 {
            return Err(StorageError::not_found(PLANT_LINK, id));
        }
        Ok(link.clone())
    }

    fn get_link(&self, id: i64) -> StorageResult<Option<PlantLink>> {
        let conn = get_conn(&self.pool)?;
        PlantLink::load(&conn, id)
    }

    fn delete_link(&self, id: i64) -> StorageResult<bool> {
        let conn = get_conn(&self.pool)?;
        Ok(conn.execute("DELETE FROM plant_link WHERE id = ?1", [id])? > 0)
    }

    fn list_links(&self) -> StorageResult<Vec<PlantLink>> {
        let conn = get_conn(&self.pool)?;
        let mut stmt = conn.prepare("SELECT * FROM plant_link ORDER BY link_type, title, id")?;
        let rows = stmt.query_map([], row_to_link)?;
        collect_rows(PLANT_LINK, rows)
    }

    fn link_plants(&self, link_id: i64, plant_ids: &[i64]) -> StorageResult<usize> {
        let mut conn = get_conn(&self.pool)?;
        let tx = conn.transaction()?;
        ensure_exists(&tx, PLANT_LINK, link_id)?;
        let mut added = 0;
        for &plant_id in plant_ids {
            ensure_exists(&tx, PLANT, plant_id)?;
            added += tx.execute(
                "INSERT OR IGNORE INTO plant_link_plants (plant_link_id, plant_id) VALUES (?1, ?2)",
                params![link_id, plant_id],
            )?;
        }
        tx.commit()?;
        Ok(added)
    }

    fn duplicate_links(&self, ids: &[i64]) -> StorageResult<Vec<PlantLink>> {
        let mut conn = get_conn(&self.pool)?;
        duplicate_records(&mut conn, self.schema(), ids)
    }
}
