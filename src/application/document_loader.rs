// Loader trait for dashboard file access
use crate::domain::dashboard::DashboardDocument;
use crate::infrastructure::dashboard_directory::DashboardFile;
use async_trait::async_trait;
use futures::{StreamExt, stream};
use std::path::Path;
use std::sync::Arc;

#[async_trait]
pub trait DocumentLoader: Send + Sync {
    /// Open a dashboard file and read its title and visualizations
    async fn load_document(&self, path: &Path) -> anyhow::Result<DashboardDocument>;

    /// Rendering info used by clients to draw a dashboard thumbnail
    async fn thumbnail_info(&self, path: &Path, name: &str) -> anyhow::Result<serde_json::Value>;
}

/// Load every file with at most `concurrency` loads in flight; output keeps input order
pub async fn load_documents(
    loader: &Arc<dyn DocumentLoader>,
    files: Vec<DashboardFile>,
    concurrency: usize,
) -> Vec<(DashboardFile, anyhow::Result<DashboardDocument>)> {
    stream::iter(files)
        .map(|file| {
            let loader = Arc::clone(loader);
            async move {
                let result = loader.load_document(&file.path).await;
                (file, result)
            }
        })
        .buffered(concurrency.max(1))
        .collect()
        .await
}
