// Visualization service - Use case for the cross-dashboard visualization catalog
use crate::application::catalog_service::{CatalogError, list_dashboard_files};
use crate::application::document_loader::{DocumentLoader, load_documents};
use crate::domain::dashboard::{DashboardDocument, VisualizationEntry};
use crate::infrastructure::dashboard_directory::{DashboardDirectory, DashboardFile};
use std::sync::Arc;

#[derive(Clone)]
pub struct VisualizationService {
    directory: Arc<DashboardDirectory>,
    loader: Arc<dyn DocumentLoader>,
    concurrency: usize,
}

impl VisualizationService {
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

    /// One entry per visualization across all dashboards, ordered by file then document order
    pub async fn list_visualizations(&self) -> Result<Vec<VisualizationEntry>, CatalogError> {
        let files = list_dashboard_files(&self.directory).await?;
        let loaded = load_documents(&self.loader, files, self.concurrency).await;

        let mut entries = Vec::new();
        for (file, result) in loaded {
            match result {
                Ok(document) => entries.extend(Self::entries_for(&file, document)),
                Err(e) => {
                    tracing::warn!(
                        path = %file.path.display(),
                        "Error processing dashboard: {:#}",
                        e
                    );
                }
            }
        }

        tracing::debug!("Collected {} visualizations", entries.len());
        Ok(entries)
    }

    fn entries_for(file: &DashboardFile, document: DashboardDocument) -> Vec<VisualizationEntry> {
        let mut entries = Vec::with_capacity(document.visualizations.len());

        for visualization in document.visualizations {
            match visualization {
                Ok(descriptor) => {
                    entries.push(VisualizationEntry::new(
                        file.name.clone(),
                        document.title.clone(),
                        descriptor,
                    ));
                }
                Err(e) => {
                    tracing::warn!(
                        path = %file.path.display(),
                        viz_id = e.id.as_deref().unwrap_or("<unknown>"),
                        "Error processing visualization: {}",
                        e.reason
                    );
                }
            }
        }

        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::fake_loader::{FakeLoader, broken_viz, viz};
    use crate::application::log_capture::LogCapture;
    use std::fs;

    #[tokio::test]
    async fn test_list_visualizations_skips_broken_visualization() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Sales.rdash"), b"").unwrap();
        let loader = FakeLoader::new().with_document(
            "Sales",
            Some("Sales Overview"),
            vec![
                viz("w1", "BarChartVisualization"),
                broken_viz("w2"),
                viz("w3", "Gauge"),
            ],
        );
        let service = VisualizationService::new(
            Arc::new(DashboardDirectory::new(dir.path(), "rdash")),
            Arc::new(loader),
            2,
        );
        let logs = LogCapture::default();
        let _guard = logs.install();

        let entries = service.list_visualizations().await.unwrap();

        assert_eq!(logs.count("WARN", "Error processing visualization"), 1);
        assert_eq!(logs.count("WARN", "missing settings"), 1);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].viz_id, "w1");
        assert_eq!(entries[0].viz_chart_type, "Bar Chart");
        assert_eq!(entries[0].viz_image_url, "BarChart.png");
        assert_eq!(entries[0].dashboard_title.as_deref(), Some("Sales Overview"));
        assert_eq!(entries[1].viz_id, "w3");
        assert_eq!(entries[1].viz_chart_type, "Gauge");
    }

    #[tokio::test]
    async fn test_list_visualizations_skips_unreadable_files() {
        let dir = tempfile::tempdir().unwrap();
        for file in ["Alpha.rdash", "Beta.rdash", "Corrupt.rdash", "Ignored.json"] {
            fs::write(dir.path().join(file), b"").unwrap();
        }
        let loader = FakeLoader::new()
            .with_document("Beta", None, vec![viz("b1", "PieChartVisualization")])
            .with_document("Alpha", Some("Alpha"), vec![viz("a1", "GridVisualization")])
            .with_document("Ignored", None, vec![viz("i1", "GridVisualization")]);
        let service = VisualizationService::new(
            Arc::new(DashboardDirectory::new(dir.path(), "rdash")),
            Arc::new(loader),
            4,
        );

        let entries = service.list_visualizations().await.unwrap();

        let ids: Vec<&str> = entries.iter().map(|e| e.viz_id.as_str()).collect();
        assert_eq!(ids, vec!["a1", "b1"]);
        assert_eq!(entries[1].dashboard_file_name, "Beta");
    }

    #[tokio::test]
    async fn test_list_visualizations_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let service = VisualizationService::new(
            Arc::new(DashboardDirectory::new(dir.path().join("gone"), "rdash")),
            Arc::new(FakeLoader::new()),
            4,
        );

        assert!(matches!(
            service.list_visualizations().await,
            Err(CatalogError::DirectoryUnreadable { .. })
        ));
    }
}
