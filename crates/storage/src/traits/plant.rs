use plant_catalog_core::{Nursery, Plant, PlantLink};

use crate::error::StorageResult;
use crate::pagination::{Page, PageRequest};

/// Plant persistence.
pub trait PlantStore: Send + Sync {
    /// Insert when `plant.id` is `None`, update otherwise. Returns the saved record.
    fn save_plant(&self, plant: &Plant) -> StorageResult<Plant>;

    fn get_plant(&self, id: i64) -> StorageResult<Option<Plant>>;

    /// Delete plant and its association rows. Returns `true` if a row was deleted.
    fn delete_plant(&self, id: i64) -> StorageResult<bool>;

    /// Plants ordered by common name, then id.
    fn list_plants(&self, request: PageRequest) -> StorageResult<Page<Plant>>;

    /// Copies each selected plant with a marked common name, in one transaction.
    fn duplicate_plants(&self, ids: &[i64]) -> StorageResult<Vec<Plant>>;

    /// Links associated with a plant, ordered by type then title.
    fn plant_links(&self, plant_id: i64) -> StorageResult<Vec<PlantLink>>;

    /// Nurseries stocking a plant, ordered by name.
    fn plant_nurseries(&self, plant_id: i64) -> StorageResult<Vec<Nursery>>;
}
