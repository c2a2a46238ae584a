//! Unit tests for the HistoryListRenderer public API.
//!
//! These tests exercise per-item construction rules and the full-replace
//! rendering contract: input order preserved, star class mirroring the data,
//! optional source badge, and the Text/file content split.

use clipview::render::history_list::{HistoryListRenderer, HistoryListRendererTrait};
use clipview::types::history::HistoryItem;

const BASE: &str = "http://127.0.0.1:5000";

fn renderer() -> HistoryListRenderer {
    HistoryListRenderer::new(BASE)
}

fn text_item(id: &str, content: &str, starred: bool) -> HistoryItem {
    HistoryItem {
        id: id.to_string(),
        timestamp: "2024-03-01 09:12:44".to_string(),
        item_type: "Text".to_string(),
        content: content.to_string(),
        file_path: None,
        from_source: None,
        is_starred: starred,
    }
}

fn file_item(id: &str, item_type: &str, name: &str, path: Option<&str>) -> HistoryItem {
    HistoryItem {
        id: id.to_string(),
        timestamp: "2024-03-02 18:00:00".to_string(),
        item_type: item_type.to_string(),
        content: name.to_string(),
        file_path: path.map(str::to_string),
        from_source: None,
        is_starred: false,
    }
}

/// Star indicator carries the `starred` marker class iff `is_starred` was
/// true in the data used for the render.
#[test]
fn test_star_class_mirrors_is_starred() {
    let r = renderer();

    let starred = r.render_item(&text_item("1", "hello", true));
    assert!(starred.contains("class=\"star starred\""));

    let unstarred = r.render_item(&text_item("2", "hello", false));
    assert!(unstarred.contains("class=\"star\""));
    assert!(!unstarred.contains("starred"));
}

/// The container is tagged with the item id for later lookup.
#[test]
fn test_container_tagged_with_item_id() {
    let html = renderer().render_item(&text_item("item-42", "x", false));
    assert!(html.contains("class=\"history-item\""));
    assert!(html.contains("data-id=\"item-42\""));
}

/// Header shows timestamp and type verbatim.
#[test]
fn test_header_shows_timestamp_and_type() {
    let html = renderer().render_item(&file_item("3", "Image", "a.png", Some("files/a.png")));
    assert!(html.contains("<span class=\"timestamp\">2024-03-02 18:00:00</span>"));
    assert!(html.contains("<span class=\"type\">Image</span>"));
}

/// Scenario: Text item with markup content renders the literal characters,
/// not an element.
#[test]
fn test_text_content_rendered_as_escaped_preformatted_text() {
    let item = text_item("7", "<b>hi</b>", false);
    let html = renderer().render_item(&item);

    assert!(html.contains("<pre>&lt;b&gt;hi&lt;/b&gt;</pre>"));
    assert!(!html.contains("<b>hi</b>"));
}

/// Text rendering preserves whitespace and line breaks via `<pre>`.
#[test]
fn test_text_content_preserves_line_breaks() {
    let item = text_item("8", "line one\n  line two", false);
    let html = renderer().render_item(&item);
    assert!(html.contains("<pre>line one\n  line two</pre>"));
}

/// Scenario: file item renders a download link with the path exactly as
/// provided, the display name as suggested filename, and a source badge.
#[test]
fn test_file_item_download_link_and_source_badge() {
    let item = HistoryItem {
        id: "9".to_string(),
        timestamp: "2024-03-03 08:00:00".to_string(),
        item_type: "Image".to_string(),
        content: "photo.png".to_string(),
        file_path: Some("/files/9.png".to_string()),
        from_source: Some("phone".to_string()),
        is_starred: false,
    };
    let html = renderer().render_item(&item);

    assert!(html.contains(&format!("href=\"{}/download/files/9.png\"", BASE)));
    assert!(html.contains("download=\"photo.png\""));
    assert!(html.contains("<span class=\"source\">Source: phone</span>"));
}

/// Non-`Text` types are all treated as file types.
#[test]
fn test_unknown_type_treated_as_file() {
    let html = renderer().render_item(&file_item("10", "Archive", "dump.tar", Some("files/dump.tar")));
    assert!(html.contains("Download file"));
    assert!(!html.contains("<pre>"));
}

/// A file item the server sent without a path gets no dead link.
#[test]
fn test_file_item_without_path_has_no_link() {
    let html = renderer().render_item(&file_item("11", "File", "orphan.bin", None));
    assert!(!html.contains("<a "));
    assert!(html.contains("<span class=\"file-name\">orphan.bin</span>"));
}

/// The source badge is rendered only when the label carries visible text.
#[test]
fn test_source_badge_omitted_when_absent_or_blank() {
    let r = renderer();

    let mut item = text_item("12", "x", false);
    assert!(!r.render_item(&item).contains("class=\"source\""));

    item.from_source = Some(String::new());
    assert!(!r.render_item(&item).contains("class=\"source\""));

    item.from_source = Some("   ".to_string());
    assert!(!r.render_item(&item).contains("class=\"source\""));

    item.from_source = Some("Laptop".to_string());
    assert!(r.render_item(&item).contains("<span class=\"source\">Source: Laptop</span>"));
}

/// Input order is preserved — the server is the sole source of ordering.
#[test]
fn test_render_list_preserves_input_order() {
    let items = vec![
        text_item("b", "second-alphabetically", false),
        text_item("a", "first-alphabetically", false),
        text_item("c", "third", false),
    ];
    let html = renderer().render_list(&items);

    let pos_b = html.find("data-id=\"b\"").unwrap();
    let pos_a = html.find("data-id=\"a\"").unwrap();
    let pos_c = html.find("data-id=\"c\"").unwrap();
    assert!(pos_b < pos_a && pos_a < pos_c);
}

/// Full replace: rendering a new list yields markup containing only the new
/// items, even when ids collide with the previous render.
#[test]
fn test_rerender_contains_only_new_items() {
    let r = renderer();
    let first = r.render_list(&[text_item("1", "old body", false), text_item("2", "gone", false)]);
    assert!(first.contains("old body"));

    let second = r.render_list(&[text_item("1", "new body", true)]);
    assert!(second.contains("new body"));
    assert!(!second.contains("old body"));
    assert!(!second.contains("data-id=\"2\""));
}

/// An empty list renders to empty markup — the container is simply cleared.
#[test]
fn test_empty_list_renders_empty() {
    assert_eq!(renderer().render_list(&[]), "");
}

/// A trailing slash on the download base does not double up in links.
#[test]
fn test_download_base_trailing_slash_normalized() {
    let r = HistoryListRenderer::new("http://127.0.0.1:5000/");
    let html = r.render_item(&file_item("13", "File", "a.zip", Some("files/a.zip")));
    assert!(html.contains("href=\"http://127.0.0.1:5000/download/files/a.zip\""));
    assert!(!html.contains("//download"));
}
