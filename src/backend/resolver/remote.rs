//! Remote admin endpoint client
//!
//! One GET per call, no retries, bounded by the configured fetch timeout.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{header::ACCEPT, Client};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::shared::PlatformConfig;

/// Why a remote override could not be used
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} answered {status}")]
    Status { url: String, status: u16 },

    #[error("{url} did not return a JSON object")]
    NotAnObject { url: String },

    #[error("{url} did not answer within {timeout:?}")]
    Timeout { url: String, timeout: Duration },
}

/// Client for the admin API that serves remote overrides
#[derive(Debug, Clone)]
pub struct RemoteConfigClient {
    client: Client,
    config: Arc<PlatformConfig>,
}

impl RemoteConfigClient {
    pub fn new(client: Client, config: Arc<PlatformConfig>) -> Self {
        Self { client, config }
    }

    /// Fetch `path` from the admin API and return its body as a JSON object
    pub async fn fetch_object(&self, path: &str) -> Result<Map<String, Value>, RemoteError> {
        let url = self.config.api_endpoint(path);
        let timeout = self.config.fetch_timeout;

        tracing::debug!("Fetching remote overrides from {}", url);

        let body = tokio::time::timeout(timeout, self.get_json(&url))
            .await
            .map_err(|_| RemoteError::Timeout {
                url: url.clone(),
                timeout,
            })??;

        match body {
            Value::Object(map) => Ok(map),
            _ => Err(RemoteError::NotAnObject { url }),
        }
    }

    async fn get_json(&self, url: &str) -> Result<Value, RemoteError> {
        let transport = |source: reqwest::Error| RemoteError::Transport {
            url: url.to_string(),
            source,
        };

        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(RemoteError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        // A body that is not JSON at all is reported the same way as one that
        // is JSON but not an object
        response
            .json::<Value>()
            .await
            .map_err(|_| RemoteError::NotAnObject { url: url.to_string() })
    }
}
