use axum::Json;
use axum::extract::{Path, Query, State};
use std::sync::Arc;

use plant_catalog_core::schema::PLANT;
use plant_catalog_core::{Plant, PlantDetail};
use plant_catalog_storage::Page;

use crate::blocking::blocking_json;
use crate::query_types::PageQuery;
use crate::{ApiError, AppState};

pub async fn list_plants(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Page<Plant>>, ApiError> {
    let catalog = Arc::clone(&state.catalog_service);
    let (page, page_size) = (query.page(), query.page_size());
    blocking_json(move || catalog.list_plants(page, page_size)).await
}

/// Non-numeric ids are reported the same way as ids with no row.
pub async fn get_plant(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<PlantDetail>, ApiError> {
    let plant_id: i64 =
        id.parse().map_err(|_| ApiError::NotFound(format!("{PLANT} '{id}' not found")))?;
    let catalog = Arc::clone(&state.catalog_service);
    blocking_json(move || catalog.get_plant(plant_id)).await
}
