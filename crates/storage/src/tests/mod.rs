//! Test utilities and module declarations for storage tests.

use crate::Storage;
use crate::traits::PlantStore as _;
use plant_catalog_core::Plant;
use tempfile::TempDir;

#[expect(clippy::unwrap_used, reason = "test code")]
pub fn create_test_storage() -> (Storage, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("test.db");
    let storage = Storage::new(&db_path).unwrap();
    (storage, temp_dir)
}

#[expect(clippy::unwrap_used, reason = "test code")]
pub fn insert_plant(storage: &Storage, name_common: &str) -> Plant {
    storage.save_plant(&Plant::builder(name_common).build()).unwrap()
}

mod duplicate_tests;
