use metrics_exporter_prometheus::PrometheusHandle;
use staff_registry::config::DirectoryConfig;
use staff_registry::error::AppError;
use staff_registry::workforce::{DirectoryClient, SharedRegistry};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Directory client plus the URL used when a request does not name one.
#[derive(Clone)]
pub(crate) struct DirectoryState {
    pub(crate) client: DirectoryClient,
    pub(crate) default_url: Option<String>,
}

impl DirectoryState {
    pub(crate) fn from_config(config: &DirectoryConfig) -> Result<Self, AppError> {
        Ok(Self {
            client: DirectoryClient::new(config.timeout())?,
            default_url: config.api_url.clone(),
        })
    }

    pub(crate) fn resolve_url(&self, requested: Option<String>) -> Result<String, AppError> {
        requested
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .or_else(|| self.default_url.clone())
            .ok_or(AppError::MissingDirectoryUrl)
    }
}

#[derive(Clone)]
pub(crate) struct FetchState {
    pub(crate) registry: SharedRegistry,
    pub(crate) directory: DirectoryState,
}
