use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use std::sync::Arc;

use plant_catalog_service::ActionOutcome;

use crate::blocking::blocking_result;
use crate::query_types::ActionRequest;
use crate::response_types::ActionsResponse;
use crate::{ApiError, AppState};

pub async fn list_actions(State(state): State<Arc<AppState>>) -> Json<ActionsResponse> {
    Json(state.admin_service.actions().into_iter().collect())
}

pub async fn run_action(
    State(state): State<Arc<AppState>>,
    Path((entity, action)): Path<(String, String)>,
    Json(req): Json<ActionRequest>,
) -> Result<(StatusCode, Json<ActionOutcome>), ApiError> {
    tracing::debug!(%entity, %action, selected = req.ids.len(), "Admin action requested");
    let admin = Arc::clone(&state.admin_service);
    let outcome = blocking_result(move || admin.run(&entity, &action, &req.ids)).await?;
    Ok((StatusCode::CREATED, Json(outcome)))
}
