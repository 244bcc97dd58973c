// Dashboard folder access - enumeration and id-to-path resolution
use crate::domain::dashboard_id::DashboardId;
use std::io;
use std::path::{Path, PathBuf};

/// A dashboard file found in the folder, named by its file stem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardFile {
    pub name: String,
    pub path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct DashboardDirectory {
    root: PathBuf,
    extension: String,
}

impl DashboardDirectory {
    pub fn new(root: impl Into<PathBuf>, extension: &str) -> Self {
        Self {
            root: root.into(),
            extension: extension.trim_start_matches('.').to_string(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// List dashboard files (non-recursive), sorted by name. The extension
    /// match is exact so every listed name resolves back to the same file.
    pub async fn list_files(&self) -> io::Result<Vec<DashboardFile>> {
        let mut entries = tokio::fs::read_dir(&self.root).await?;
        let mut files = Vec::new();

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if !self.has_dashboard_extension(&path) {
                continue;
            }
            // Follows symlinks, unlike DirEntry::file_type
            match tokio::fs::metadata(&path).await {
                Ok(meta) if meta.is_file() => {}
                Ok(_) => continue,
                Err(e) => {
                    tracing::warn!(path = %path.display(), "Skipping unreadable entry: {}", e);
                    continue;
                }
            }
            let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
                tracing::warn!(path = %path.display(), "Skipping file with non UTF-8 name");
                continue;
            };
            let name = name.to_string();
            files.push(DashboardFile { name, path });
        }

        files.sort_by(|a, b| a.name.cmp(&b.name));
        tracing::debug!("Found {} dashboard files in {}", files.len(), self.root.display());
        Ok(files)
    }

    pub fn resolve(&self, id: &DashboardId) -> PathBuf {
        self.root.join(format!("{}.{}", id, self.extension))
    }

    pub async fn contains(&self, id: &DashboardId) -> bool {
        tokio::fs::metadata(self.resolve(id))
            .await
            .map(|meta| meta.is_file())
            .unwrap_or(false)
    }

    fn has_dashboard_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext == self.extension)
    }
}
