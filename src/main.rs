// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use crate::application::catalog_service::CatalogService;
use crate::application::document_loader::DocumentLoader;
use crate::application::visualization_service::VisualizationService;
use crate::infrastructure::config::load_app_config;
use crate::infrastructure::dashboard_directory::DashboardDirectory;
use crate::infrastructure::rdash_loader::RdashLoader;
use crate::presentation::app_state::AppState;
use crate::presentation::router::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    // Load configuration
    let app_config = load_app_config()?;

    // Dashboard folder and loader (infrastructure layer)
    let directory = Arc::new(DashboardDirectory::new(
        app_config.dashboards.directory.clone(),
        &app_config.dashboards.extension,
    ));
    let loader: Arc<dyn DocumentLoader> = Arc::new(RdashLoader::new());
    let concurrency = app_config.dashboards.scan_concurrency;

    // Create services (application layer)
    let catalog_service = CatalogService::new(directory.clone(), loader.clone(), concurrency);
    let visualization_service = VisualizationService::new(directory, loader, concurrency);

    let state = Arc::new(AppState {
        catalog_service,
        visualization_service,
    });

    // Build router (presentation layer)
    let router = build_router(state, &app_config.images);

    let addr = app_config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(
        dashboards = %app_config.dashboards.directory.display(),
        "Starting dashboard-thumbnails service on {}",
        listener.local_addr()?
    );

    axum::serve(listener, router).await?;

    Ok(())
}
