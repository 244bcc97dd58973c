// Router assembly - routes plus cross-cutting layers
use crate::infrastructure::config::ImageSettings;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    dashboard_thumbnail, health_check, is_duplicate_name, list_dashboard_infos,
    list_dashboard_names, list_visualizations,
};
use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub fn build_router(state: Arc<AppState>, images: &ImageSettings) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/dashboards/names", get(list_dashboard_names))
        .route("/dashboards/infos/all", get(list_dashboard_infos))
        .route("/dashboards/visualizations/all", get(list_visualizations))
        .route("/dashboards/:id/thumbnail", get(dashboard_thumbnail))
        .route("/isduplicatename/:name", get(is_duplicate_name))
        .nest_service(&images.route, ServeDir::new(&images.directory))
        .with_state(state)
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
