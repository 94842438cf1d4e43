use axum::Json;
use axum::extract::State;
use std::sync::Arc;

use plant_catalog_core::{Nursery, PlantLink};
use plant_catalog_storage::SchemaStatus;

use crate::blocking::blocking_json;
use crate::{ApiError, AppState};

pub async fn list_links(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<PlantLink>>, ApiError> {
    let catalog = Arc::clone(&state.catalog_service);
    blocking_json(move || catalog.list_links()).await
}

pub async fn list_nurseries(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Nursery>>, ApiError> {
    let catalog = Arc::clone(&state.catalog_service);
    blocking_json(move || catalog.list_nurseries()).await
}

pub async fn schema_status(
    State(state): State<Arc<AppState>>,
) -> Result<Json<SchemaStatus>, ApiError> {
    let catalog = Arc::clone(&state.catalog_service);
    blocking_json(move || catalog.schema_status()).await
}
