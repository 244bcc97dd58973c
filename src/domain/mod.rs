// Domain layer - Dashboard and visualization models
pub mod dashboard;
pub mod dashboard_id;
pub mod visualization;
