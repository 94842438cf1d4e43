//! Brings the catalog database to the end of the migration chain.

use anyhow::Result;
use plant_catalog_storage::Storage;
use std::path::Path;

pub(crate) fn run(db_path: &Path) -> Result<()> {
    let (_storage, report) = Storage::open(db_path)?;
    if report.is_noop() {
        println!("Schema already up to date at position {}", report.to);
        return Ok(());
    }
    for finding in &report.drift {
        println!(
            "  drift: {}.{} row {} holds '{}' (after {})",
            finding.table, finding.field, finding.row_id, finding.code, finding.migration
        );
    }
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
