use anyhow::Result;
use plant_catalog_http::{AppState, create_router};
use plant_catalog_storage::Storage;
use std::path::Path;
use std::sync::Arc;

pub(crate) async fn run(db_path: &Path, port: u16, host: &str) -> Result<()> {
    let (storage, report) = Storage::open(db_path)?;
    if !report.is_noop() {
        tracing::info!(from = report.from, to = report.to, "Applied pending migrations");
    }
    let state = Arc::new(AppState::new(Arc::new(storage)));

    let router = create_router(state);
    let addr = format!("{host}:{port}");
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
