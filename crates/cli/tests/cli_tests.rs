use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn plant_catalog(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("plant-catalog").unwrap();
    cmd.env_remove("PLANT_CATALOG_DB")
        .env_remove("RUST_LOG")
        .arg("--db")
        .arg(temp_dir.path().join("catalog.db"));
    cmd
}

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("plant-catalog").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Plant catalog with an evolving schema"));
}

#[test]
fn test_cli_serve_help() {
    let mut cmd = Command::cargo_bin("plant-catalog").unwrap();
    cmd.arg("serve").arg("--help").assert().success().stdout(predicate::str::contains("port"));
}

#[test]
fn test_migrate_then_noop() {
    let temp_dir = TempDir::new().unwrap();
    plant_catalog(&temp_dir)
        .arg("migrate")
        .assert()
        .success()
        .stdout(predicate::str::contains("0019_profile_user_plants"));
    plant_catalog(&temp_dir)
        .arg("migrate")
        .assert()
        .success()
        .stdout(predicate::str::contains("already up to date at position 19"));
}

#[test]
fn test_list_on_empty_catalog() {
    let temp_dir = TempDir::new().unwrap();
    plant_catalog(&temp_dir)
        .args(["list", "--page", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"total\": 0"))
        .stdout(predicate::str::contains("\"has_next\": false"));
}

#[test]
fn test_get_missing_plant_fails() {
    let temp_dir = TempDir::new().unwrap();
    plant_catalog(&temp_dir)
        .args(["get", "42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_duplicate_requires_existing_ids() {
    let temp_dir = TempDir::new().unwrap();
    plant_catalog(&temp_dir)
        .args(["duplicate", "plant", "7"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
    plant_catalog(&temp_dir)
        .args(["duplicate", "garden", "7"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown entity"));
}

#[test]
fn test_actions_lists_duplicate_for_every_kind() {
    let temp_dir = TempDir::new().unwrap();
    plant_catalog(&temp_dir)
        .arg("actions")
        .assert()
        .success()
        .stdout(predicate::str::contains("plant"))
        .stdout(predicate::str::contains("nursery"))
        .stdout(predicate::str::contains("Duplicate selected items"));
}

#[test]
fn test_legacy_demo_inserts_and_dumps() {
    let temp_dir = TempDir::new().unwrap();
    let legacy_db = temp_dir.path().join("gardening.db");

    let mut cmd = Command::cargo_bin("plant-catalog").unwrap();
    cmd.args(["legacy", "demo"])
        .arg(&legacy_db)
        .assert()
        .success()
        .stdout(predicate::str::contains("Inserted sample plant"))
        .stdout(predicate::str::contains("China Rose"))
        .stdout(predicate::str::contains("plant_types"));

    let mut cmd = Command::cargo_bin("plant-catalog").unwrap();
    cmd.args(["legacy", "demo"])
        .arg(&legacy_db)
        .assert()
        .success()
        .stdout(predicate::str::contains("Sample plant already present"));

    let mut cmd = Command::cargo_bin("plant-catalog").unwrap();
    cmd.args(["legacy", "tables"])
        .arg(&legacy_db)
        .assert()
        .success()
        .stdout(predicate::str::contains("plant_urls"))
        .stdout(predicate::str::contains("sqlite_").not());
}

#[test]
fn test_legacy_inspection_leaves_file_untouched() {
    let temp_dir = TempDir::new().unwrap();
    let other_db = temp_dir.path().join("other.db");
    std::fs::write(&other_db, b"").unwrap();

    for command in ["tables", "dump"] {
        let mut cmd = Command::cargo_bin("plant-catalog").unwrap();
        cmd.args(["legacy", command])
            .arg(&other_db)
            .assert()
            .success()
            .stdout(predicate::str::contains("plant_types").not());
    }
    assert_eq!(std::fs::metadata(&other_db).unwrap().len(), 0);

    let missing = temp_dir.path().join("missing.db");
    let mut cmd = Command::cargo_bin("plant-catalog").unwrap();
    cmd.args(["legacy", "tables"])
        .arg(&missing)
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot open"));
    assert!(!missing.exists());
}
