// Dashboard domain model
use super::visualization::VisualizationName;
use serde::Serialize;

/// A dashboard file as reported by a document loader.
#[derive(Debug)]
pub struct DashboardDocument {
    pub title: Option<String>,
    /// Visualizations in document order. A malformed one does not spoil the rest.
    pub visualizations: Vec<Result<VisualizationDescriptor, VisualizationError>>,
}

impl DashboardDocument {
    pub fn new(
        title: Option<String>,
        visualizations: Vec<Result<VisualizationDescriptor, VisualizationError>>,
    ) -> Self {
        Self {
            title,
            visualizations,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VisualizationDescriptor {
    pub id: String,
    pub title: Option<String>,
    pub type_name: String,
}

impl VisualizationDescriptor {
    pub fn new(id: String, title: Option<String>, type_name: String) -> Self {
        Self {
            id,
            title,
            type_name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("visualization {} is malformed: {reason}", .id.as_deref().unwrap_or("<unknown>"))]
pub struct VisualizationError {
    pub id: Option<String>,
    pub reason: String,
}

impl VisualizationError {
    pub fn new(id: Option<String>, reason: impl Into<String>) -> Self {
        Self {
            id,
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardNameEntry {
    pub dashboard_file_name: String,
    pub dashboard_title: Option<String>,
}

impl DashboardNameEntry {
    pub fn new(dashboard_file_name: String, dashboard_title: Option<String>) -> Self {
        Self {
            dashboard_file_name,
            dashboard_title,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualizationEntry {
    pub dashboard_file_name: String,
    pub dashboard_title: Option<String>,
    pub viz_id: String,
    pub viz_title: Option<String>,
    pub viz_chart_type: String,
    pub viz_image_url: String,
}

impl VisualizationEntry {
    pub fn new(
        dashboard_file_name: String,
        dashboard_title: Option<String>,
        descriptor: VisualizationDescriptor,
    ) -> Self {
        let name = VisualizationName::from_type_name(&descriptor.type_name);
        Self {
            dashboard_file_name,
            dashboard_title,
            viz_id: descriptor.id,
            viz_title: descriptor.title,
            viz_chart_type: name.display_name,
            viz_image_url: name.image_url,
        }
    }
}
