use serde::{Deserialize, Serialize};

/// Raw filter-bar values read at the moment filters are applied.
///
/// All fields are plain strings in the server's expected formats; an empty
/// string means "unbounded" / "all". The starred-only latch is deliberately
/// NOT part of the selection — it is persistent view state, not a transient
/// input, and lives in [`crate::types::view_state::ViewState`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterSelection {
    #[serde(rename = "type", default)]
    pub item_type: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
}
