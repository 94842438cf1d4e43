use std::sync::Arc;

use plant_catalog_core::schema::PLANT;
use plant_catalog_core::{Nursery, Plant, PlantDetail, PlantLink, default_page_size};
use plant_catalog_storage::{
    NurseryStore as _, Page, PageRequest, PlantLinkStore as _, PlantStore as _, SchemaStatus,
    Storage, StorageError,
};

use crate::ServiceError;

/// Read side of the catalog: listing and detail lookups.
pub struct CatalogService {
    storage: Arc<Storage>,
    page_size: u32,
}

impl CatalogService {
    /// Uses the page size from `PLANT_CATALOG_PAGE_SIZE`, or the built-in default.
    #[must_use]
    pub fn new(storage: Arc<Storage>) -> Self {
        Self::with_page_size(storage, default_page_size())
    }

    #[must_use]
    pub const fn with_page_size(storage: Arc<Storage>, page_size: u32) -> Self {
        Self { storage, page_size }
    }

    #[must_use]
    pub const fn page_size(&self) -> u32 {
        self.page_size
    }

    /// One page of plants ordered by common name.
    ///
    /// Missing or non-positive arguments fall back to page 1 and the default
    /// size. A page past the end comes back empty.
    pub fn list_plants(
        &self,
        page: Option<i64>,
        page_size: Option<i64>,
    ) -> Result<Page<Plant>, ServiceError> {
        let request = PageRequest::new(page, page_size, self.page_size);
        tracing::debug!(page = request.page, page_size = request.page_size, "Listing plants");
        Ok(self.storage.list_plants(request)?)
    }

    /// The plant with its links and nurseries, or `NotFound`.
    pub fn get_plant(&self, id: i64) -> Result<PlantDetail, ServiceError> {
        let plant = self
            .storage
            .get_plant(id)?
            .ok_or_else(|| StorageError::NotFound { entity: PLANT, id: id.to_string() })?;
        let links = self.storage.plant_links(id)?;
        let nurseries = self.storage.plant_nurseries(id)?;
        Ok(PlantDetail { plant, links, nurseries })
    }

    pub fn list_links(&self) -> Result<Vec<PlantLink>, ServiceError> {
        Ok(self.storage.list_links()?)
    }

    pub fn list_nurseries(&self) -> Result<Vec<Nursery>, ServiceError> {
        Ok(self.storage.list_nurseries()?)
    }

    pub fn schema_status(&self) -> Result<SchemaStatus, ServiceError> {
        Ok(self.storage.schema_status()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plant_catalog_storage::{PlantLinkStore as _, PlantStore as _};
    use tempfile::TempDir;

    fn service(page_size: u32) -> (CatalogService, Arc<Storage>, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let storage = Arc::new(Storage::new(&temp_dir.path().join("catalog.db")).unwrap());
        (CatalogService::with_page_size(Arc::clone(&storage), page_size), storage, temp_dir)
    }

    #[test]
    fn missing_plant_is_not_found() {
        let (service, _storage, _temp_dir) = service(10);
        let err = service.get_plant(12345).unwrap_err();
        assert!(err.is_not_found(), "unexpected: {err}");
    }

    #[test]
    fn detail_includes_links() {
        let (service, storage, _temp_dir) = service(10);
        let plant = storage.save_plant(&Plant::builder("Yarrow").build()).unwrap();
        let link = storage
            .save_link(&PlantLink::new("Yarrow notes", "https://example.org/yarrow", "mg"))
            .unwrap();
        storage.link_plants(link.id.unwrap(), &[plant.id.unwrap()]).unwrap();

        let detail = service.get_plant(plant.id.unwrap()).unwrap();
        assert_eq!(detail.plant, plant);
        assert_eq!(detail.links, vec![link]);
        assert!(detail.nurseries.is_empty());
    }

    #[test]
    fn configured_page_size_is_the_default() {
        let (service, storage, _temp_dir) = service(2);
        for name in ["Aster", "Basil", "Catmint"] {
            storage.save_plant(&Plant::builder(name).build()).unwrap();
        }
        let page = service.list_plants(None, None).unwrap();
        assert_eq!(page.data.len(), 2);
        assert_eq!(page.pagination.page_size, 2);
        assert!(page.pagination.has_next);

        let page = service.list_plants(Some(-4), Some(50)).unwrap();
        assert_eq!(page.pagination.page, 1);
        assert_eq!(page.data.len(), 3);
    }
}
