mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use plant_catalog_core::DB_PATH_ENV;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "plant-catalog")]
#[command(about = "Plant catalog with an evolving schema", long_about = None)]
struct Cli {
    /// Catalog database file. Falls back to $PLANT_CATALOG_DB, then the user data directory.
    #[arg(long, global = true)]
    db: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API
    Serve {
        #[arg(short, long, default_value = "8000")]
        port: u16,
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
    },
    /// Apply pending schema migrations and print what ran
    Migrate,
    /// List plants, one page at a time
    List {
        #[arg(short, long)]
        page: Option<i64>,
        #[arg(short = 's', long)]
        page_size: Option<i64>,
    },
    /// Show a plant with its links and nurseries
    Get { id: i64 },
    /// Duplicate records of one entity kind (plant, link, nursery)
    Duplicate {
        entity: String,
        #[arg(required = true)]
        ids: Vec<i64>,
    },
    /// List registered admin actions
    Actions,
    /// Work with a normalized legacy database file
    Legacy {
        #[command(subcommand)]
        command: LegacyCommand,
    },
}

#[derive(Subcommand)]
pub(crate) enum LegacyCommand {
    /// Create missing tables and seed plant types
    Init { path: PathBuf },
    /// Print user table names of an existing file (read-only)
    Tables { path: PathBuf },
    /// Print every table of an existing file as aligned text (read-only)
    Dump { path: PathBuf },
    /// Init, insert the sample rose, then dump
    Demo { path: PathBuf },
}

/// `--db`, then `$PLANT_CATALOG_DB`, then `<data dir>/plant-catalog/catalog.db`.
pub(crate) fn get_db_path(cli_db: Option<PathBuf>) -> PathBuf {
    cli_db
        .or_else(|| std::env::var_os(DB_PATH_ENV).filter(|v| !v.is_empty()).map(PathBuf::from))
        .unwrap_or_else(|| {
            dirs::data_local_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("plant-catalog")
                .join("catalog.db")
        })
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Legacy { command } => commands::legacy::run(command)?,
        Commands::Serve { port, host } => {
            commands::serve::run(&get_db_path(cli.db), port, &host).await?;
        },
        Commands::Migrate => commands::migrate::run(&get_db_path(cli.db))?,
        Commands::List { page, page_size } => {
            commands::catalog::list(&get_db_path(cli.db), page, page_size)?;
        },
        Commands::Get { id } => commands::catalog::get(&get_db_path(cli.db), id)?,
        Commands::Duplicate { entity, ids } => {
            commands::catalog::duplicate(&get_db_path(cli.db), &entity, &ids)?;
        },
        Commands::Actions => commands::catalog::actions(&get_db_path(cli.db))?,
    }

    Ok(())
}
