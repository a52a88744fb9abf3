//! HTTP index fetching.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::error::{BucketeerError, Result};

/// Default location of the gauto bucket index.
pub const DEFAULT_INDEX_URL: &str =
    "https://raw.githubusercontent.com/gauto-bucket/gauto/main/index.json";

/// Fetches the bucket index over HTTP/HTTPS.
pub struct IndexClient {
    client: Client,
    timeout: Duration,
}

impl IndexClient {
    /// Create a new index client with default 30-second timeout.
    pub fn new() -> Self {
        Self::with_timeout(Duration::from_secs(30))
    }

    /// Create a new index client with custom timeout.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .user_agent("bucketeer")
                .timeout(timeout)
                .build()
                .expect("Failed to build HTTP client"),
            timeout,
        }
    }

    /// Get the configured timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Fetch the ordered list of package names from the index URL.
    pub fn fetch(&self, url: &str) -> Result<Vec<String>> {
        let response =
            self.client
                .get(url)
                .send()
                .map_err(|e| BucketeerError::IndexUnavailable {
                    url: url.to_string(),
                    message: e.to_string(),
                })?;

        if !response.status().is_success() {
            return Err(BucketeerError::IndexUnavailable {
                url: url.to_string(),
                message: format!("HTTP {}", response.status()),
            });
        }

        let body = response
            .text()
            .map_err(|e| BucketeerError::IndexUnavailable {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        parse_index(&body).map_err(|message| BucketeerError::IndexUnavailable {
            url: url.to_string(),
            message,
        })
    }
}

impl Default for IndexClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse an index payload: a JSON array of package names, order preserved.
fn parse_index(body: &str) -> std::result::Result<Vec<String>, String> {
    serde_json::from_str(body).map_err(|e| format!("invalid index payload: {}", e))
}
