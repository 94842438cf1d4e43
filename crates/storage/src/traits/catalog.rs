use plant_catalog_core::{Nursery, Plant, PlantLink, Profile};

use crate::error::StorageResult;

/// Reference link persistence.
pub trait PlantLinkStore: Send + Sync {
    fn save_link(&self, link: &PlantLink) -> StorageResult<PlantLink>;

    fn get_link(&self, id: i64) -> StorageResult<Option<PlantLink>>;

    fn delete_link(&self, id: i64) -> StorageResult<bool>;

    /// All links ordered by type code, then title.
    fn list_links(&self) -> StorageResult<Vec<PlantLink>>;

    /// Associates the link with plants. Existing pairs are kept. Returns the number of new pairs.
    fn link_plants(&self, link_id: i64, plant_ids: &[i64]) -> StorageResult<usize>;

    fn duplicate_links(&self, ids: &[i64]) -> StorageResult<Vec<PlantLink>>;
}

/// Nursery persistence.
pub trait NurseryStore: Send + Sync {
    fn save_nursery(&self, nursery: &Nursery) -> StorageResult<Nursery>;

    fn get_nursery(&self, id: i64) -> StorageResult<Option<Nursery>>;

    fn delete_nursery(&self, id: i64) -> StorageResult<bool>;

    /// All nurseries ordered by name.
    fn list_nurseries(&self) -> StorageResult<Vec<Nursery>>;

    /// Records that the nursery stocks the given plants. Returns the number of new pairs.
    fn stock_plants(&self, nursery_id: i64, plant_ids: &[i64]) -> StorageResult<usize>;

    fn duplicate_nurseries(&self, ids: &[i64]) -> StorageResult<Vec<Nursery>>;
}

/// Profile persistence.
pub trait ProfileStore: Send + Sync {
    fn save_profile(&self, profile: &Profile) -> StorageResult<Profile>;

    fn get_profile(&self, id: i64) -> StorageResult<Option<Profile>>;

    /// Returns `false` if the plant was already in the profile.
    fn add_plant(&self, profile_id: i64, plant_id: i64) -> StorageResult<bool>;

    /// Returns `false` if the plant was not in the profile.
    fn remove_plant(&self, profile_id: i64, plant_id: i64) -> StorageResult<bool>;

    /// Plants in the profile ordered by common name.
    fn profile_plants(&self, profile_id: i64) -> StorageResult<Vec<Plant>>;
}
