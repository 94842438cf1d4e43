//! Helpers for running blocking service calls in async handlers.
//!
//! Spawns the call on the blocking pool, maps join failures to
//! `ApiError::Internal` and the call's own error through `Into<ApiError>`.

use axum::Json;
use serde::Serialize;
use tokio::task::spawn_blocking;

use crate::ApiError;

/// Runs a blocking closure and wraps its value in `Json`.
///
/// # Example
/// ```ignore
/// pub async fn list_links(
///     State(state): State<Arc<AppState>>,
/// ) -> Result<Json<Vec<PlantLink>>, ApiError> {
///     let catalog = Arc::clone(&state.catalog_service);
///     blocking_json(move || catalog.list_links()).await
/// }
/// ```
pub async fn blocking_json<T, E, F>(f: F) -> Result<Json<T>, ApiError>
where
    F: FnOnce() -> Result<T, E> + Send + 'static,
    T: Send + 'static + Serialize,
    E: Into<ApiError> + Send + 'static,
{
    blocking_result(f).await.map(Json)
}

/// Runs a blocking closure and returns the raw value.
pub async fn blocking_result<T, E, F>(f: F) -> Result<T, ApiError>
where
    F: FnOnce() -> Result<T, E> + Send + 'static,
    T: Send + 'static,
    E: Into<ApiError> + Send + 'static,
{
    spawn_blocking(f)
        .await
        .map_err(|e| {
            tracing::error!("Join error: {}", e);
            ApiError::Internal(anyhow::anyhow!("blocking task failed: {e}"))
        })?
        .map_err(Into::into)
}
