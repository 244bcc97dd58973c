// HTTP request handlers
use crate::domain::dashboard::{DashboardNameEntry, VisualizationEntry};
use crate::infrastructure::http_response::ApiError;
use crate::presentation::app_state::AppState;
use axum::{
    Json,
    extract::{Path, State},
};
use std::sync::Arc;

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Rendering info for one dashboard
pub async fn dashboard_thumbnail(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<serde_json::Value>, ApiError> {
    match state.catalog_service.thumbnail_info(&id).await? {
        Some(info) => Ok(Json(info)),
        None => {
            tracing::debug!("No dashboard file for {}", id);
            Err(ApiError::NotFound)
        }
    }
}

/// List file names and titles of all dashboards
pub async fn list_dashboard_names(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<DashboardNameEntry>>, ApiError> {
    let names = state.catalog_service.list_names().await?;
    Ok(Json(names))
}

/// Rendering info for every dashboard
pub async fn list_dashboard_infos(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<serde_json::Value>>, ApiError> {
    let infos = state.catalog_service.list_infos().await?;
    Ok(Json(infos))
}

/// Flat list of visualizations across all dashboards
pub async fn list_visualizations(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<VisualizationEntry>>, ApiError> {
    let entries = state.visualization_service.list_visualizations().await?;
    Ok(Json(entries))
}

/// Whether a dashboard with this name already exists
pub async fn is_duplicate_name(
    Path(name): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<bool>, ApiError> {
    let exists = state.catalog_service.is_duplicate_name(&name).await?;
    Ok(Json(exists))
}
