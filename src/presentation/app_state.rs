// Application state for HTTP handlers
use crate::application::catalog_service::CatalogService;
use crate::application::visualization_service::VisualizationService;

#[derive(Clone)]
pub struct AppState {
    pub catalog_service: CatalogService,
    pub visualization_service: VisualizationService,
}
