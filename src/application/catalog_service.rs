// Catalog service - Use cases for listing and looking up dashboards
use crate::application::document_loader::{DocumentLoader, load_documents};
use crate::domain::dashboard::DashboardNameEntry;
use crate::domain::dashboard_id::{DashboardId, InvalidDashboardId};
use crate::infrastructure::dashboard_directory::{DashboardDirectory, DashboardFile};
use futures::{StreamExt, stream};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("invalid dashboard id: {0}")]
    InvalidIdentifier(#[from] InvalidDashboardId),

    #[error("failed to read dashboard directory {}: {source}", .path.display())]
    DirectoryUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to load dashboard {}: {reason:#}", .path.display())]
    Loader { path: PathBuf, reason: anyhow::Error },
}

#[derive(Clone)]
pub struct CatalogService {
    directory: Arc<DashboardDirectory>,
    loader: Arc<dyn DocumentLoader>,
    concurrency: usize,
}

impl CatalogService {
    pub fn new(
        directory: Arc<DashboardDirectory>,
        loader: Arc<dyn DocumentLoader>,
        concurrency: usize,
    ) -> Self {
        Self {
            directory,
            loader,
            concurrency,
        }
    }

    /// File names and titles of every readable dashboard, sorted by file name
    pub async fn list_names(&self) -> Result<Vec<DashboardNameEntry>, CatalogError> {
        let files = list_dashboard_files(&self.directory).await?;
        let loaded = load_documents(&self.loader, files, self.concurrency).await;

        let mut names = Vec::with_capacity(loaded.len());
        for (file, result) in loaded {
            match result {
                Ok(document) => names.push(DashboardNameEntry::new(file.name, document.title)),
                Err(e) => {
                    tracing::warn!(
                        path = %file.path.display(),
                        "Error reading dashboard: {:#}",
                        e
                    );
                }
            }
        }

        tracing::debug!("Listed {} dashboard names", names.len());
        Ok(names)
    }

    /// Rendering info of every readable dashboard, sorted by file name
    pub async fn list_infos(&self) -> Result<Vec<serde_json::Value>, CatalogError> {
        let files = list_dashboard_files(&self.directory).await?;

        let loaded: Vec<(DashboardFile, anyhow::Result<serde_json::Value>)> = stream::iter(files)
            .map(|file| {
                let loader = Arc::clone(&self.loader);
                async move {
                    let result = loader.thumbnail_info(&file.path, &file.name).await;
                    (file, result)
                }
            })
            .buffered(self.concurrency.max(1))
            .collect()
            .await;

        let mut infos = Vec::with_capacity(loaded.len());
        for (file, result) in loaded {
            match result {
                Ok(info) => infos.push(info),
                Err(e) => {
                    tracing::warn!(
                        path = %file.path.display(),
                        "Error reading dashboard info: {:#}",
                        e
                    );
                }
            }
        }

        Ok(infos)
    }

    /// Rendering info of one dashboard, or None when no such file exists
    pub async fn thumbnail_info(
        &self,
        raw_id: &str,
    ) -> Result<Option<serde_json::Value>, CatalogError> {
        let id = DashboardId::parse(raw_id)?;
        if !self.directory.contains(&id).await {
            return Ok(None);
        }

        let path = self.directory.resolve(&id);
        let result = self.loader.thumbnail_info(&path, id.as_str()).await;
        result
            .map(Some)
            .map_err(|reason| CatalogError::Loader { path, reason })
    }

    pub async fn is_duplicate_name(&self, raw_name: &str) -> Result<bool, CatalogError> {
        let id = DashboardId::parse(raw_name)?;
        Ok(self.directory.contains(&id).await)
    }
}

pub(crate) async fn list_dashboard_files(
    directory: &DashboardDirectory,
) -> Result<Vec<DashboardFile>, CatalogError> {
    directory.list_files().await.map_err(|source| {
        tracing::error!(
            path = %directory.root().display(),
            "Error reading dashboard directory: {}",
            source
        );
        CatalogError::DirectoryUnreadable {
            path: directory.root().to_path_buf(),
            source,
        }
    })
}
