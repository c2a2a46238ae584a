//! History list renderer.
//!
//! Builds the full replacement HTML for the list container from an ordered
//! item slice. The server is the sole source of ordering — no client-side
//! sorting. No element is ever reused across renders: the page assigns the
//! output to the container's `innerHTML`, destroying and rebuilding the list
//! wholesale. Star clicks are handled by one delegated listener on the stable
//! container, so freshly inserted indicators are live without any rebinding
//! step.

use crate::render::escape_html;
use crate::types::history::HistoryItem;

/// Trait defining list rendering operations.
pub trait HistoryListRendererTrait {
    fn render_list(&self, items: &[HistoryItem]) -> String;
    fn render_item(&self, item: &HistoryItem) -> String;
}

/// Renderer producing the widget's item markup.
#[derive(Debug, Clone)]
pub struct HistoryListRenderer {
    download_base: String,
}

impl HistoryListRenderer {
    /// Creates a renderer whose download links resolve against `download_base`
    /// (the backend base URL).
    pub fn new(download_base: impl Into<String>) -> Self {
        Self {
            download_base: download_base.into().trim_end_matches('/').to_string(),
        }
    }

    /// Download link target: `{base}/download/{path}`, path as the server
    /// provided it.
    fn download_href(&self, file_path: &str) -> String {
        format!(
            "{}/download/{}",
            self.download_base,
            file_path.trim_start_matches('/')
        )
    }

    fn render_header(&self, item: &HistoryItem) -> String {
        let source_html = match item.source_label() {
            Some(label) => format!("<span class=\"source\">Source: {}</span>", escape_html(label)),
            None => String::new(),
        };
        let star_class = if item.is_starred { "star starred" } else { "star" };

        format!(
            "<div class=\"header\"><span class=\"timestamp\">{}</span><span class=\"type\">{}</span>{}<span class=\"{}\">★</span></div>",
            escape_html(&item.timestamp),
            escape_html(&item.item_type),
            source_html,
            star_class,
        )
    }

    fn render_content(&self, item: &HistoryItem) -> String {
        if item.is_text() {
            return format!("<pre>{}</pre>", escape_html(&item.content));
        }
        match item.file_path.as_deref() {
            Some(path) => format!(
                "<a href=\"{}\" download=\"{}\">Download file</a>",
                escape_html(&self.download_href(path)),
                escape_html(&item.content),
            ),
            // A file item the server sent without a backing path gets its
            // display name but no dead link.
            None => format!("<span class=\"file-name\">{}</span>", escape_html(&item.content)),
        }
    }
}

impl HistoryListRendererTrait for HistoryListRenderer {
    /// Renders the whole list in input order.
    fn render_list(&self, items: &[HistoryItem]) -> String {
        let mut out = String::with_capacity(items.len() * 256);
        for item in items {
            out.push_str(&self.render_item(item));
        }
        out
    }

    /// Renders one item: container tagged with the id, header, content region.
    fn render_item(&self, item: &HistoryItem) -> String {
        format!(
            "<div class=\"history-item\" data-id=\"{}\">{}<div class=\"content\">{}</div></div>",
            escape_html(&item.id),
            self.render_header(item),
            self.render_content(item),
        )
    }
}
