//! HTTP client for the clipboard history server.
//!
//! Wraps the two consumed endpoints — `POST /star/{id}` and `GET /history` —
//! plus download-URL construction. All request execution is async; the UI
//! shell runs these futures on its tokio runtime and delivers completions
//! back to the event loop.

use std::time::Duration;

use crate::types::errors::BackendError;
use crate::types::history::{HistoryItem, StarState};
use crate::services::widget_config::WidgetConfig;

/// Async client over the history server's JSON API.
///
/// Cheap to clone: the underlying `reqwest::Client` is reference-counted, so
/// controllers each hold their own clone.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    /// Builds a client from the widget configuration.
    ///
    /// The configured request timeout bounds every call; the base URL is
    /// normalized to carry no trailing slash.
    pub fn new(config: &WidgetConfig) -> Result<Self, BackendError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| BackendError::NetworkError(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.backend_url.trim_end_matches('/').to_string(),
        })
    }

    /// The normalized base URL; the renderer resolves download links
    /// against the same value.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Requests a toggle of the persisted starred flag for `item_id`.
    ///
    /// One call per invocation, no body, no automatic retry. The returned
    /// [`StarState`] is the server's authoritative post-toggle value.
    pub async fn toggle_star(&self, item_id: &str) -> Result<StarState, BackendError> {
        let url = format!("{}/star/{}", self.base_url, item_id);
        let body = self.request_body(self.http.post(&url)).await?;
        serde_json::from_str(&body).map_err(|e| BackendError::MalformedResponse(e.to_string()))
    }

    /// Fetches the filtered history list. `query` is the prebuilt query
    /// string without the leading `?`.
    ///
    /// A body that is not an array of complete items fails as a whole —
    /// malformed responses are handled like transport failures, never
    /// partially rendered.
    pub async fn fetch_history(&self, query: &str) -> Result<Vec<HistoryItem>, BackendError> {
        let url = format!("{}/history?{}", self.base_url, query);
        let body = self.request_body(self.http.get(&url)).await?;
        serde_json::from_str(&body).map_err(|e| BackendError::MalformedResponse(e.to_string()))
    }

    /// Sends a prepared request and returns the body of a successful response.
    async fn request_body(&self, request: reqwest::RequestBuilder) -> Result<String, BackendError> {
        let response = request
            .send()
            .await
            .map_err(|e| BackendError::NetworkError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::HttpStatus(status.as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| BackendError::NetworkError(e.to_string()))
    }
}
