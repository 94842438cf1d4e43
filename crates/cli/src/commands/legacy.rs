//! Commands over the normalized legacy database.

use anyhow::{Context as _, Result};
use plant_catalog_storage::legacy::{
    self, InsertOutcome, create_database, dump_all_tables, insert_plant, list_tables,
    open_database, sample_rose,
};
use std::io::Write as _;

use crate::LegacyCommand;

pub(crate) fn run(command: LegacyCommand) -> Result<()> {
    match command {
        LegacyCommand::Init { path } => {
            let conn = create_database(&path)?;
            println!("Tables: {}", list_tables(&conn)?.join(", "));
        },
        LegacyCommand::Tables { path } => {
            let conn = open_database(&path)
                .with_context(|| format!("cannot open {}", path.display()))?;
            for table in list_tables(&conn)? {
                println!("{table}");
            }
        },
        LegacyCommand::Dump { path } => {
            let conn = open_database(&path)
                .with_context(|| format!("cannot open {}", path.display()))?;
            dump(&conn)?;
        },
        LegacyCommand::Demo { path } => {
            let mut conn = create_database(&path)?;
            let flower = legacy::plant_type_id(&conn, "flower")?
                .context("plant type 'flower' is missing from plant_types")?;
            match insert_plant(&mut conn, &sample_rose(flower))? {
                InsertOutcome::Inserted(id) => println!("Inserted sample plant {id}"),
                InsertOutcome::SkippedDuplicate => println!("Sample plant already present"),
            }
            println!("Tables: {}", list_tables(&conn)?.join(", "));
            dump(&conn)?;
        },
    }
    Ok(())
}

fn dump(conn: &legacy::Connection) -> Result<()> {
    let mut out = std::io::stdout().lock();
    dump_all_tables(conn, &mut out)?;
    out.flush()?;
    Ok(())
}
