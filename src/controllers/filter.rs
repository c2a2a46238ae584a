//! Filter controller.
//!
//! Builds the history query from the filter-bar selection plus the
//! starred-only latch, and fetches the filtered list. The starred parameter
//! is appended as exactly `starred=true` when the latch is active and is
//! entirely omitted otherwise — the server treats absence as "no starred
//! filter". The optional source filter is appended last, only when set, so
//! the four base parameters always appear in a fixed order.

use crate::services::backend_client::BackendClient;
use crate::types::errors::BackendError;
use crate::types::filter::FilterSelection;
use crate::types::history::HistoryItem;

/// Controller for filter application.
#[derive(Debug, Clone)]
pub struct FilterController {
    backend: BackendClient,
}

impl FilterController {
    pub fn new(backend: BackendClient) -> Self {
        Self { backend }
    }

    /// Builds the query string (without the leading `?`) for a history fetch.
    ///
    /// Empty values are sent as empty parameters, matching what the server
    /// expects for "unbounded"; only `starred` and `source` are presence-
    /// encoded.
    pub fn build_query(selection: &FilterSelection, starred_only: bool) -> String {
        let mut query = format!(
            "type={}&start_date={}&end_date={}",
            urlencode(&selection.item_type),
            urlencode(&selection.start_date),
            urlencode(&selection.end_date),
        );
        if starred_only {
            query.push_str("&starred=true");
        }
        if !selection.source.is_empty() {
            query.push_str("&source=");
            query.push_str(&urlencode(&selection.source));
        }
        query
    }

    /// Fetches the history list for a prebuilt query.
    ///
    /// On failure the caller leaves the currently rendered list untouched and
    /// surfaces a notice; there is no automatic retry.
    pub async fn fetch(&self, query: &str) -> Result<Vec<HistoryItem>, BackendError> {
        self.backend.fetch_history(query).await
    }
}

/// Percent-encodes a query parameter value.
fn urlencode(s: &str) -> String {
    let mut out = String::with_capacity(s.len() * 3);
    for b in s.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(b as char);
            }
            b' ' => out.push('+'),
            _ => {
                out.push('%');
                out.push(char::from(b"0123456789ABCDEF"[(b >> 4) as usize]));
                out.push(char::from(b"0123456789ABCDEF"[(b & 0xf) as usize]));
            }
        }
    }
    out
}
