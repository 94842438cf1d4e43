use anyhow::Result;
use plant_catalog_service::{AdminService, CatalogService};
use plant_catalog_storage::Storage;
use std::path::Path;
use std::sync::Arc;

fn open(db_path: &Path) -> Result<Arc<Storage>> {
    Ok(Arc::new(Storage::new(db_path)?))
}

pub(crate) fn list(db_path: &Path, page: Option<i64>, page_size: Option<i64>) -> Result<()> {
    let catalog = CatalogService::new(open(db_path)?);
    let plants = catalog.list_plants(page, page_size)?;
    println!("{}", serde_json::to_string_pretty(&plants)?);
    Ok(())
}

pub(crate) fn get(db_path: &Path, id: i64) -> Result<()> {
    let catalog = CatalogService::new(open(db_path)?);
    let detail = catalog.get_plant(id)?;
    println!("{}", serde_json::to_string_pretty(&detail)?);
    Ok(())
}

pub(crate) fn duplicate(db_path: &Path, entity: &str, ids: &[i64]) -> Result<()> {
    let admin = AdminService::new(open(db_path)?);
    let outcome = admin.run(entity, plant_catalog_service::DUPLICATE_SELECTED, ids)?;
    println!("{}", serde_json::to_string_pretty(&outcome)?);
    Ok(())
}

pub(crate) fn actions(db_path: &Path) -> Result<()> {
    let admin = AdminService::new(open(db_path)?);
    for action in admin.actions() {
        println!("{:<8} {:<20} {}", action.entity.as_str(), action.name, action.description);
    }
    Ok(())
}
