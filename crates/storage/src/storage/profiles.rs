use plant_catalog_core::schema::{PLANT, PROFILE};
use plant_catalog_core::{Plant, Profile};
use rusqlite::{OptionalExtension as _, Row, params};

use super::plants::row_to_plant;
use super::{Storage, collect_rows, decode_error, ensure_exists, get_conn};
use crate::error::{StorageError, StorageResult};
use crate::traits::ProfileStore;

fn row_to_profile(row: &Row<'_>) -> rusqlite::Result<Profile> {
    Ok(Profile { id: Some(row.get("id")?), name: row.get("name")?, user_id: row.get("user_id")? })
}

impl ProfileStore for Storage {
    fn save_profile(&self, profile: &Profile) -> StorageResult<Profile> {
        profile.validate(self.schema())?;
        let conn = get_conn(&self.pool)?;
        let mut saved = profile.clone();
        match profile.id {
            None => {
                conn.execute(
                    "INSERT INTO profile (name, user_id) VALUES (?1, ?2)",
                    params![profile.name, profile.user_id],
                )?;
                saved.id = Some(conn.last_insert_rowid());
            },
            Some(id) => {
                let affected = conn.execute(
                    "UPDATE profile SET name = ?1, user_id = ?2 WHERE id = ?3",
                    params![profile.name, profile.user_id, id],
                )?;
                if affected == 0 {
                    return Err(StorageError::not_found(PROFILE, id));
                }
            },
        }
        Ok(saved)
    }

    fn get_profile(&self, id: i64) -> StorageResult<Option<Profile>> {
        let conn = get_conn(&self.pool)?;
        conn.query_row("SELECT * FROM profile WHERE id = ?1", [id], row_to_profile)
            .optional()
            .map_err(decode_error(PROFILE))
    }

    fn add_plant(&self, profile_id: i64, plant_id: i64) -> StorageResult<bool> {
        let conn = get_conn(&self.pool)?;
        ensure_exists(&conn, PROFILE, profile_id)?;
        ensure_exists(&conn, PLANT, plant_id)?;
        let added = conn.execute(
            "INSERT OR IGNORE INTO profile_plants (profile_id, plant_id) VALUES (?1, ?2)",
            params![profile_id, plant_id],
        )?;
        Ok(added > 0)
    }

    fn remove_plant(&self, profile_id: i64, plant_id: i64) -> StorageResult<bool> {
        let conn = get_conn(&self.pool)?;
        let removed = conn.execute(
            "DELETE FROM profile_plants WHERE profile_id = ?1 AND plant_id = ?2",
            params![profile_id, plant_id],
        )?;
        Ok(removed > 0)
    }

    fn profile_plants(&self, profile_id: i64) -> StorageResult<Vec<Plant>> {
        let conn = get_conn(&self.pool)?;
        ensure_exists(&conn, PROFILE, profile_id)?;
        let mut stmt = conn.prepare(
            "SELECT p.* FROM plant p
               JOIN profile_plants j ON j.plant_id = p.id
              WHERE j.profile_id = ?1
              ORDER BY p.name_common, p.id",
        )?;
        let rows = stmt.query_map([profile_id], row_to_plant)?;
        collect_rows(PLANT, rows)
    }
}
