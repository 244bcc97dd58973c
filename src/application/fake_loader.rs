// In-memory loader for service and handler tests
use crate::application::document_loader::DocumentLoader;
use crate::domain::dashboard::{DashboardDocument, VisualizationDescriptor, VisualizationError};
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::Path;

/// Serves documents keyed by file stem; stems without an entry fail to load
#[derive(Debug, Clone, Default)]
pub struct FakeLoader {
    documents: HashMap<String, FakeDocument>,
}

#[derive(Debug, Clone)]
pub struct FakeDocument {
    pub title: Option<String>,
    pub visualizations: Vec<Result<VisualizationDescriptor, VisualizationError>>,
}

impl FakeLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(
        mut self,
        stem: &str,
        title: Option<&str>,
        visualizations: Vec<Result<VisualizationDescriptor, VisualizationError>>,
    ) -> Self {
        self.documents.insert(
            stem.to_string(),
            FakeDocument {
                title: title.map(str::to_string),
                visualizations,
            },
        );
        self
    }

    fn lookup(&self, path: &Path) -> anyhow::Result<&FakeDocument> {
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default();
        self.documents
            .get(stem)
            .ok_or_else(|| anyhow::anyhow!("cannot read {}", path.display()))
    }
}

pub fn viz(id: &str, type_name: &str) -> Result<VisualizationDescriptor, VisualizationError> {
    Ok(VisualizationDescriptor::new(
        id.to_string(),
        Some(format!("{} title", id)),
        type_name.to_string(),
    ))
}

pub fn broken_viz(id: &str) -> Result<VisualizationDescriptor, VisualizationError> {
    Err(VisualizationError::new(Some(id.to_string()), "missing settings"))
}

#[async_trait]
impl DocumentLoader for FakeLoader {
    async fn load_document(&self, path: &Path) -> anyhow::Result<DashboardDocument> {
        let doc = self.lookup(path)?;
        Ok(DashboardDocument::new(
            doc.title.clone(),
            doc.visualizations.clone(),
        ))
    }

    async fn thumbnail_info(&self, path: &Path, name: &str) -> anyhow::Result<serde_json::Value> {
        let doc = self.lookup(path)?;
        Ok(serde_json::json!({ "id": name, "title": doc.title }))
    }
}
