use plant_catalog_core::schema::{NURSERY, PLANT, PLANT_LINK};
use plant_catalog_core::{Nursery, Plant, PlantFlag, PlantLink};
use rusqlite::{Connection, OptionalExtension as _, Row, ToSql, params};

use super::duplicate::{TableRecord, duplicate_records};
use super::links::row_to_link;
use super::nurseries::row_to_nursery;
use super::{Storage, coerce_to_sql, collect_rows, decode_error, get_conn, placeholders};
use crate::error::{StorageError, StorageResult};
use crate::pagination::{Page, PageRequest};
use crate::traits::PlantStore;

/// Column/value pairs for every stored plant field except `id`.
fn plant_values(plant: &Plant) -> Vec<(&'static str, &dyn ToSql)> {
    let mut values = vec![
        ("name_common", coerce_to_sql(&plant.name_common)),
        ("name_scientific", coerce_to_sql(&plant.name_scientific)),
        ("plant_type", coerce_to_sql(&plant.plant_type)),
        ("exposure", coerce_to_sql(&plant.exposure)),
        ("description", coerce_to_sql(&plant.description)),
        ("hardiness_zone_low", coerce_to_sql(&plant.hardiness_zone_low)),
        ("hardiness_zone_high", coerce_to_sql(&plant.hardiness_zone_high)),
        ("spacing_min", coerce_to_sql(&plant.spacing_min)),
        ("spacing_max", coerce_to_sql(&plant.spacing_max)),
        ("height_min", coerce_to_sql(&plant.height_min)),
        ("height_max", coerce_to_sql(&plant.height_max)),
        ("suggested_container_size", coerce_to_sql(&plant.suggested_container_size)),
        ("medicinal_benefits", coerce_to_sql(&plant.medicinal_benefits)),
        ("germination_days", coerce_to_sql(&plant.germination_days)),
        ("maturity_days", coerce_to_sql(&plant.maturity_days)),
    ];
    values.extend(PlantFlag::ALL.iter().map(|f| (f.column(), coerce_to_sql(plant.flag_ref(*f)))));
    values
}

pub(super) fn row_to_plant(row: &Row<'_>) -> rusqlite::Result<Plant> {
    let mut plant = Plant::builder(row.get::<_, String>("name_common")?).build();
    plant.id = Some(row.get("id")?);
    plant.name_scientific = row.get("name_scientific")?;
    plant.plant_type = row.get("plant_type")?;
    plant.exposure = row.get("exposure")?;
    plant.description = row.get::<_, Option<String>>("description")?.unwrap_or_default();
    plant.hardiness_zone_low = row.get("hardiness_zone_low")?;
    plant.hardiness_zone_high = row.get("hardiness_zone_high")?;
    plant.spacing_min = row.get("spacing_min")?;
    plant.spacing_max = row.get("spacing_max")?;
    plant.height_min = row.get("height_min")?;
    plant.height_max = row.get("height_max")?;
    plant.suggested_container_size = row.get("suggested_container_size")?;
    plant.medicinal_benefits = row.get("medicinal_benefits")?;
    plant.germination_days = row.get("germination_days")?;
    plant.maturity_days = row.get("maturity_days")?;
    for flag in PlantFlag::ALL {
        plant.set_flag(*flag, row.get(flag.column())?);
    }
    Ok(plant)
}

fn insert_row(conn: &Connection, plant: &Plant) -> rusqlite::Result<i64> {
    let values = plant_values(plant);
    let columns: Vec<&str> = values.iter().map(|(column, _)| *column).collect();
    let sql = format!(
        "INSERT INTO plant ({}) VALUES ({})",
        columns.join(", "),
        placeholders(values.len())
    );
    let params: Vec<&dyn ToSql> = values.iter().map(|(_, value)| *value).collect();
    conn.execute(&sql, params.as_slice())?;
    Ok(conn.last_insert_rowid())
}

fn update_row(conn: &Connection, id: i64, plant: &Plant) -> rusqlite::Result<usize> {
    let values = plant_values(plant);
    let assignments: Vec<String> = values
        .iter()
        .enumerate()
        .map(|(i, (column, _))| format!("{column} = ?{}", i + 1))
        .collect();
    let sql =
        format!("UPDATE plant SET {} WHERE id = ?{}", assignments.join(", "), values.len() + 1);
    let mut params: Vec<&dyn ToSql> = values.iter().map(|(_, value)| *value).collect();
    params.push(&id);
    conn.execute(&sql, params.as_slice())
}

impl TableRecord for Plant {
    fn load(conn: &Connection, id: i64) -> StorageResult<Option<Self>> {
        conn.query_row("SELECT * FROM plant WHERE id = ?1", [id], row_to_plant)
            .optional()
            .map_err(decode_error(PLANT))
    }

    fn insert(conn: &Connection, record: &Self) -> StorageResult<Self> {
        let mut saved = record.clone();
        saved.id = Some(insert_row(conn, record)?);
        Ok(saved)
    }
}

impl PlantStore for Storage {
    fn save_plant(&self, plant: &Plant) -> StorageResult<Plant> {
        plant.validate(self.schema())?;
        let conn = get_conn(&self.pool)?;
        match plant.id {
            None => Plant::insert(&conn, plant),
            Some(id) => {
                if update_row(&conn, id, plant)? == 0 {
                    return Err(StorageError::not_found(PLANT, id));
                }
                Ok(plant.clone())
            },
        }
    }

    fn get_plant(&self, id: i64) -> StorageResult<Option<Plant>> {
        let conn = get_conn(&self.pool)?;
        Plant::load(&conn, id)
    }

    fn delete_plant(&self, id: i64) -> StorageResult<bool> {
        let conn = get_conn(&self.pool)?;
        let affected = conn.execute("DELETE FROM plant WHERE id = ?1", [id])?;
        Ok(affected > 0)
    }

    fn list_plants(&self, request: PageRequest) -> StorageResult<Page<Plant>> {
        let conn = get_conn(&self.pool)?;
        let total: i64 = conn.query_row("SELECT COUNT(*) FROM plant", [], |row| row.get(0))?;
        let offset = i64::try_from(request.offset()).unwrap_or(i64::MAX);
        let mut stmt = conn.prepare(
            "SELECT * FROM plant ORDER BY name_common ASC, id ASC LIMIT ?1 OFFSET ?2",
        )?;
        let rows = stmt.query_map(params![i64::from(request.page_size), offset], row_to_plant)?;
        let data = collect_rows(PLANT, rows)?;
        Ok(Page::new(data, total as u64, request))
    }

    fn duplicate_plants(&self, ids: &[i64]) -> StorageResult<Vec<Plant>> {
        let mut conn = get_conn(&self.pool)?;
        duplicate_records(&mut conn, self.schema(), ids)
    }

    fn plant_links(&self, plant_id: i64) -> StorageResult<Vec<PlantLink>> {
        let conn = get_conn(&self.pool)?;
        let mut stmt = conn.prepare(
            "SELECT l.* FROM plant_link l
               JOIN plant_link_plants j ON j.plant_link_id = l.id
              WHERE j.plant_id = ?1
              ORDER BY l.link_type, l.title, l.id",
        )?;
        let rows = stmt.query_map([plant_id], row_to_link)?;
        collect_rows(PLANT_LINK, rows)
    }

    fn plant_nurseries(&self, plant_id: i64) -> StorageResult<Vec<Nursery>> {
        let conn = get_conn(&self.pool)?;
        let mut stmt = conn.prepare(
            "SELECT n.* FROM nursery n
               JOIN nursery_plants j ON j.nursery_id = n.id
              WHERE j.plant_id = ?1
              ORDER BY n.name, n.id",
        )?;
        let rows = stmt.query_map([plant_id], row_to_nursery)?;
        collect_rows(NURSERY, rows)
    }
}
