use plant_catalog_core::schema::MIGRATIONS;
use plant_catalog_core::{CoreError, Nursery, Plant, PlantFlag, PlantLink};
use rusqlite::Connection;
use tempfile::TempDir;

use super::{create_test_storage, insert_plant};
use crate::{Storage, StorageError, run_chain};
use crate::pagination::PageRequest;
use crate::traits::{NurseryStore as _, PlantLinkStore as _, PlantStore as _};

#[test]
fn test_duplicate_plant_marks_copy() {
    let (storage, _temp_dir) = create_test_storage();
    let original = storage
        .save_plant(
            &Plant::builder("Tomato")
                .plant_type("an")
                .maturity_days(75)
                .flag(PlantFlag::HeatTolerant)
                .build(),
        )
        .unwrap();

    let copies = storage.duplicate_plants(&[original.id.unwrap()]).unwrap();
    assert_eq!(copies.len(), 1);
    let copy = &copies[0];
    assert_eq!(copy.name_common, "[COPY] Tomato");
    assert_ne!(copy.id, original.id);
    assert_eq!(copy.maturity_days, 75);
    assert!(copy.heat_tolerant);

    let stored_copy = storage.get_plant(copy.id.unwrap()).unwrap().unwrap();
    assert_eq!(&stored_copy, copy);
    let stored_original = storage.get_plant(original.id.unwrap()).unwrap().unwrap();
    assert_eq!(stored_original, original);
}

#[test]
fn test_duplicate_of_copy_is_marked_twice() {
    let (storage, _temp_dir) = create_test_storage();
    let original = insert_plant(&storage, "Tomato");
    let copy = storage.duplicate_plants(&[original.id.unwrap()]).unwrap().remove(0);
    let copy_of_copy = storage.duplicate_plants(&[copy.id.unwrap()]).unwrap().remove(0);
    assert_eq!(copy_of_copy.name_common, "[COPY] [COPY] Tomato");
}

#[test]
fn test_duplicate_batch_returns_one_copy_per_selection() {
    let (storage, _temp_dir) = create_test_storage();
    let ids: Vec<i64> = ["Aster", "Basil", "Catmint"]
        .iter()
        .map(|name| insert_plant(&storage, name).id.unwrap())
        .collect();
    let copies = storage.duplicate_plants(&ids).unwrap();
    let names: Vec<_> = copies.iter().map(|p| p.name_common.as_str()).collect();
    assert_eq!(names, vec!["[COPY] Aster", "[COPY] Basil", "[COPY] Catmint"]);
    assert_eq!(storage.list_plants(PageRequest::default()).unwrap().pagination.total, 6);
}

#[test]
fn test_missing_id_rolls_back_batch() {
    let (storage, _temp_dir) = create_test_storage();
    let plant = insert_plant(&storage, "Sage");
    let err = storage.duplicate_plants(&[plant.id.unwrap(), 9999]).unwrap_err();
    assert!(matches!(err, StorageError::NotFound { entity: "plant", ref id } if id == "9999"));
    assert_eq!(storage.list_plants(PageRequest::default()).unwrap().pagination.total, 1);
}

#[test]
fn test_marked_name_too_long_fails() {
    let (storage, _temp_dir) = create_test_storage();
    let plant = insert_plant(&storage, &"a".repeat(95));
    let err = storage.duplicate_plants(&[plant.id.unwrap()]).unwrap_err();
    assert!(matches!(err, StorageError::Invalid(CoreError::TooLong { len: 102, .. })));
}

#[test]
fn test_duplicate_keeps_code_dropped_from_code_set() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("drifted.db");
    {
        let mut conn = Connection::open(&path).unwrap();
        run_chain(&mut conn, &MIGRATIONS[..5]).unwrap();
        conn.execute("INSERT INTO plant (name_common, exposure) VALUES ('Lantana', 'fp')", [])
            .unwrap();
    }
    let (storage, report) = Storage::open(&path).unwrap();
    assert_eq!(report.drift.len(), 1);
    assert_eq!(report.drift[0].code, "fp");

    let copy = storage.duplicate_plants(&[1]).unwrap().remove(0);
    assert_eq!(copy.name_common, "[COPY] Lantana");
    assert_eq!(copy.exposure, "fp");
    assert_eq!(storage.get_plant(copy.id.unwrap()).unwrap().unwrap().exposure, "fp");

    // Editing still goes through full validation.
    let err = storage.save_plant(&copy).unwrap_err();
    assert!(matches!(err, StorageError::Invalid(CoreError::InvalidCode { field: "exposure", .. })));
}

#[test]
fn test_associations_are_not_copied() {
    let (storage, _temp_dir) = create_test_storage();
    let plant = insert_plant(&storage, "Lavender");
    let link = storage
        .save_link(&PlantLink::new("Lavender guide", "https://example.org/lavender", "bk"))
        .unwrap();
    storage.link_plants(link.id.unwrap(), &[plant.id.unwrap()]).unwrap();

    let copy = storage.duplicate_plants(&[plant.id.unwrap()]).unwrap().remove(0);
    assert!(storage.plant_links(copy.id.unwrap()).unwrap().is_empty());

    let link_copy = storage.duplicate_links(&[link.id.unwrap()]).unwrap().remove(0);
    assert_eq!(link_copy.title, "[COPY] Lavender guide");
    assert_eq!(link_copy.link_type, "bk");
    assert_eq!(storage.plant_links(plant.id.unwrap()).unwrap().len(), 1);
}

#[test]
fn test_duplicate_nursery_marks_name() {
    let (storage, _temp_dir) = create_test_storage();
    let nursery =
        storage.save_nursery(&Nursery::new("Green Acres").with_url("https://green.example")).unwrap();
    let copy = storage.duplicate_nurseries(&[nursery.id.unwrap()]).unwrap().remove(0);
    assert_eq!(copy.name, "[COPY] Green Acres");
    assert_eq!(copy.url.as_deref(), Some("https://green.example"));
    assert_eq!(storage.list_nurseries().unwrap().len(), 2);
}
