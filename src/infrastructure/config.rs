use serde::Deserialize;
use std::path::{Path, PathBuf};

const ENV_PREFIX: &str = "THUMBNAILS";
// First path segments owned by the API routes
const RESERVED_SEGMENTS: [&str; 3] = ["dashboards", "isduplicatename", "healthz"];

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerSettings,
    pub dashboards: DashboardSettings,
    pub images: ImageSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardSettings {
    pub directory: PathBuf,
    pub extension: String,
    pub scan_concurrency: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ImageSettings {
    pub directory: PathBuf,
    pub route: String,
}

impl ImageSettings {
    /// Reject routes the router cannot nest a file service under
    fn validate(&self) -> anyhow::Result<()> {
        let route = self.route.as_str();
        if !route.starts_with('/') || route.ends_with('/') {
            anyhow::bail!(
                "images.route must start with '/' and not end with '/', got {:?}",
                route
            );
        }
        if route.contains(['*', ':', '{', '}']) {
            anyhow::bail!("images.route must be a literal path, got {:?}", route);
        }
        let first = route
            .trim_start_matches('/')
            .split('/')
            .next()
            .unwrap_or_default();
        if RESERVED_SEGMENTS.contains(&first) {
            anyhow::bail!("images.route {:?} collides with an API route", route);
        }
        Ok(())
    }
}

impl ServerSettings {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

pub fn load_app_config() -> anyhow::Result<AppConfig> {
    load_app_config_from(Path::new("config/server.toml"))
}

/// Defaults, then the optional file, then THUMBNAILS_* environment overrides
pub fn load_app_config_from(path: &Path) -> anyhow::Result<AppConfig> {
    let settings = config::Config::builder()
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 7122)?
        .set_default("dashboards.directory", "Dashboards")?
        .set_default("dashboards.extension", "rdash")?
        .set_default("dashboards.scan_concurrency", 4)?
        .set_default("images.directory", "Images")?
        .set_default("images.route", "/Images")?
        .add_source(config::File::from(path).required(false))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let mut app_config: AppConfig = settings.try_deserialize()?;
    if app_config.dashboards.scan_concurrency == 0 {
        tracing::warn!("dashboards.scan_concurrency must be at least 1, using 1");
        app_config.dashboards.scan_concurrency = 1;
    }
    app_config.images.validate()?;
    Ok(app_config)
}
