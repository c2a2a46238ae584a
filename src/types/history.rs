use serde::{Deserialize, Deserializer, Serialize};

/// One clipboard history record as served by the backend.
///
/// The server is the sole owner of these records; the client only ever holds
/// a deserialized snapshot for the duration of one render. A response missing
/// any required field fails deserialization as a whole — there is no partial
/// item rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryItem {
    /// Opaque stable identifier. The server emits it as a JSON number;
    /// the client accepts numbers or strings and keeps the textual form.
    #[serde(deserialize_with = "opaque_id")]
    pub id: String,
    /// Server-formatted display string, shown verbatim.
    pub timestamp: String,
    /// Open-ended label set. `"Text"` renders inline; everything else is a file type.
    #[serde(rename = "type")]
    pub item_type: String,
    /// Literal body for `Text` items; suggested download filename otherwise.
    pub content: String,
    /// Server-relative path backing the download link of file items.
    #[serde(default)]
    pub file_path: Option<String>,
    /// Optional provenance label; absent or empty means no badge.
    #[serde(default)]
    pub from_source: Option<String>,
    /// Authoritative only on the server; mirrored after each fetch.
    #[serde(deserialize_with = "bool_flag")]
    pub is_starred: bool,
}

impl HistoryItem {
    /// The one type label with dedicated inline rendering.
    pub const TEXT_TYPE: &'static str = "Text";

    pub fn is_text(&self) -> bool {
        self.item_type == Self::TEXT_TYPE
    }

    /// The provenance label, if it carries any visible text.
    pub fn source_label(&self) -> Option<&str> {
        self.from_source
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

/// The `POST /star/{id}` response body.
///
/// The flag is the server's authoritative post-toggle state; the client never
/// guesses the new value from its own prior state.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct StarState {
    #[serde(deserialize_with = "bool_flag")]
    pub starred: bool,
}

/// Accepts a JSON string or number as an opaque textual id.
fn opaque_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "id must be a string or number, got {}",
            other
        ))),
    }
}

/// Accepts a JSON boolean or a 0/1 integer (the server stores flags in SQLite).
fn bool_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Bool(b) => Ok(b),
        serde_json::Value::Number(n) => Ok(n.as_i64().unwrap_or(0) != 0),
        other => Err(serde::de::Error::custom(format!(
            "flag must be a boolean or 0/1, got {}",
            other
        ))),
    }
}
