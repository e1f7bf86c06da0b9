use std::time::Duration;

use reqwest::header::ACCEPT;
use tracing::{debug, info};

use super::translator::{decode_entries, translate_entries, DirectoryEntry};
use super::DirectoryError;
use crate::workforce::domain::Employee;

const USER_AGENT: &str = concat!("staff-registry/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the remote user directory.
#[derive(Debug, Clone)]
pub struct DirectoryClient {
    http_client: reqwest::Client,
}

impl DirectoryClient {
    pub fn new(timeout: Duration) -> Result<Self, DirectoryError> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(timeout)
            .timeout(timeout)
            .build()
            .map_err(|err| DirectoryError::Transport(err.to_string()))?;

        Ok(Self { http_client })
    }

    pub async fn fetch_entries(&self, url: &str) -> Result<Vec<DirectoryEntry>, DirectoryError> {
        debug!(%url, "requesting directory users");

        let response = self
            .http_client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|err| DirectoryError::Transport(err.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| DirectoryError::Transport(err.to_string()))?;

        if !status.is_success() {
            return Err(DirectoryError::Status {
                status: status.as_u16(),
                body,
            });
        }

        decode_entries(&body)
    }

    /// Fetch and translate the directory. Nothing is returned unless every
    /// entry translates cleanly.
    pub async fn fetch_employees(&self, url: &str) -> Result<Vec<Employee>, DirectoryError> {
        let entries = self.fetch_entries(url).await?;
        let employees = translate_entries(entries)?;
        info!(%url, count = employees.len(), "directory users translated");
        Ok(employees)
    }
}
