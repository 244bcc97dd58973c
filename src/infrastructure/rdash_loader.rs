// Rdash loader implementation - reads the dashboard document out of .rdash archives
use crate::application::document_loader::DocumentLoader;
use crate::domain::dashboard::{DashboardDocument, VisualizationDescriptor, VisualizationError};
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

const ZIP_MAGIC: [u8; 4] = *b"PK\x03\x04";
const CHART_VISUALIZATION: &str = "ChartVisualization";

#[derive(Debug, Clone, Default)]
pub struct RdashLoader;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct RawDashboard {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    widgets: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct RawWidget {
    id: String,
    #[serde(default)]
    title: Option<String>,
    visualization_settings: RawVisualizationSettings,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct RawVisualizationSettings {
    #[serde(rename = "_type")]
    kind: String,
    #[serde(default)]
    chart_type: Option<String>,
}

impl RdashLoader {
    pub fn new() -> Self {
        Self
    }

    /// Read the raw dashboard JSON, either from inside a zip archive or from a bare JSON file
    fn read_document_json(path: &Path) -> Result<serde_json::Value> {
        let mut file =
            File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;

        let mut magic = [0u8; 4];
        let is_archive = match file.read_exact(&mut magic) {
            Ok(()) => magic == ZIP_MAGIC,
            Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => false,
            Err(e) => return Err(e).context("Failed to read dashboard header"),
        };
        file.seek(SeekFrom::Start(0))?;

        if !is_archive {
            return serde_json::from_reader(std::io::BufReader::new(file))
                .with_context(|| format!("Failed to parse dashboard JSON in {}", path.display()));
        }

        let mut archive = zip::ZipArchive::new(file)
            .with_context(|| format!("Failed to open archive {}", path.display()))?;

        let entry_name = archive
            .file_names()
            .find(|name| name.to_ascii_lowercase().ends_with(".json"))
            .map(str::to_string)
            .with_context(|| format!("No dashboard document inside {}", path.display()))?;

        let entry = archive
            .by_name(&entry_name)
            .with_context(|| format!("Failed to read {} from {}", entry_name, path.display()))?;

        serde_json::from_reader(std::io::BufReader::new(entry))
            .with_context(|| format!("Failed to parse {} in {}", entry_name, path.display()))
    }

    fn parse_document(raw: serde_json::Value) -> Result<DashboardDocument> {
        let dashboard: RawDashboard =
            serde_json::from_value(raw).context("Dashboard document has an unexpected shape")?;

        let visualizations = dashboard
            .widgets
            .into_iter()
            .map(Self::parse_widget)
            .collect();

        Ok(DashboardDocument::new(dashboard.title, visualizations))
    }

    fn parse_widget(raw: serde_json::Value) -> Result<VisualizationDescriptor, VisualizationError> {
        let id = raw.get("Id").and_then(|v| v.as_str()).map(str::to_string);

        let widget: RawWidget = serde_json::from_value(raw)
            .map_err(|e| VisualizationError::new(id, e.to_string()))?;

        let type_name = Self::visualization_type_name(&widget.visualization_settings);
        Ok(VisualizationDescriptor::new(widget.id, widget.title, type_name))
    }

    /// Map settings to a visualization type name
    /// - "GridVisualizationSettingsType" becomes "GridVisualization"
    /// - "ChartVisualizationSettingsType" with ChartType "Bar" becomes "BarChartVisualization"
    fn visualization_type_name(settings: &RawVisualizationSettings) -> String {
        let base = settings
            .kind
            .strip_suffix("SettingsType")
            .unwrap_or(&settings.kind);

        match settings.chart_type.as_deref() {
            Some(chart_type) if base == CHART_VISUALIZATION && !chart_type.is_empty() => {
                format!("{}{}", chart_type, CHART_VISUALIZATION)
            }
            _ => base.to_string(),
        }
    }

    async fn read_blocking(path: &Path) -> Result<serde_json::Value> {
        let path: PathBuf = path.to_path_buf();
        tokio::task::spawn_blocking(move || Self::read_document_json(&path))
            .await
            .context("Dashboard reader task failed")?
    }
}

#[async_trait]
impl DocumentLoader for RdashLoader {
    async fn load_document(&self, path: &Path) -> Result<DashboardDocument> {
        let raw = Self::read_blocking(path).await?;
        Self::parse_document(raw).with_context(|| format!("Invalid dashboard {}", path.display()))
    }

    async fn thumbnail_info(&self, path: &Path, name: &str) -> Result<serde_json::Value> {
        let raw = Self::read_blocking(path).await?;
        Ok(serde_json::json!({
            "id": name,
            "info": raw,
        }))
    }
}
