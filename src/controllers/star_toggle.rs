//! Star toggle controller.
//!
//! Handles a delegated star click: one `POST /star/{id}` per click, and the
//! server's response is the only source of the new visual state. A failed
//! toggle leaves the indicator untouched; retry is the user clicking again.

use crate::services::backend_client::BackendClient;
use crate::types::errors::BackendError;

/// Result of a successful star toggle, ready to be projected into the page.
///
/// `starred` is exactly the flag the server reported — the indicator is set
/// to this value, never toggled blindly from prior client state.
#[derive(Debug, Clone, PartialEq)]
pub struct StarOutcome {
    pub item_id: String,
    pub starred: bool,
}

/// Controller for per-item star toggling.
#[derive(Debug, Clone)]
pub struct StarToggleController {
    backend: BackendClient,
}

impl StarToggleController {
    pub fn new(backend: BackendClient) -> Self {
        Self { backend }
    }

    /// Issues exactly one toggle request for `item_id`.
    ///
    /// Ids are opaque server-assigned tokens; an empty id, or one that could
    /// not survive a URL path segment, is rejected before any network I/O.
    pub async fn toggle(&self, item_id: &str) -> Result<StarOutcome, BackendError> {
        let id = item_id.trim();
        if id.is_empty() || id.contains('/') || id.contains(char::is_whitespace) {
            return Err(BackendError::InvalidItemId(item_id.to_string()));
        }

        let state = self.backend.toggle_star(id).await?;
        Ok(StarOutcome {
            item_id: id.to_string(),
            starred: state.starred,
        })
    }
}
