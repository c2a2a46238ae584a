//! clipview — a webview front-end for a clipboard history server.
//!
//! Entry point: opens the widget window. When built without the `gui`
//! feature, runs a console demo of the offline components.

#[cfg(feature = "gui")]
fn main() {
    clipview::ui::webview_app::run();
}

#[cfg(not(feature = "gui"))]
fn main() {
    println!();
    println!("clipview v{} — demo mode (no gui feature)", env!("CARGO_PKG_VERSION"));
    println!();

    demo_renderer();
    demo_filters();
    demo_view_state();
    demo_config();

    println!("All offline components demonstrated.");
}

#[cfg(not(feature = "gui"))]
fn section(name: &str) {
    println!("───────────────────────────────────────────────");
    println!("  {}", name);
    println!("───────────────────────────────────────────────");
}

#[cfg(not(feature = "gui"))]
fn demo_renderer() {
    use clipview::render::history_list::{HistoryListRenderer, HistoryListRendererTrait};
    use clipview::types::history::HistoryItem;
    section("History List Renderer");

    let items = vec![
        HistoryItem {
            id: "1".into(),
            timestamp: "2024-03-01 09:12:44".into(),
            item_type: "Text".into(),
            content: "<b>clipboard capture with markup</b>".into(),
            file_path: None,
            from_source: Some("PC-Desktop".into()),
            is_starred: true,
        },
        HistoryItem {
            id: "2".into(),
            timestamp: "2024-03-01 09:15:02".into(),
            item_type: "Image".into(),
            content: "screenshot.png".into(),
            file_path: Some("files/screenshot.png".into()),
            from_source: None,
            is_starred: false,
        },
    ];

    let renderer = HistoryListRenderer::new("http://127.0.0.1:5000");
    let html = renderer.render_list(&items);
    println!("  Rendered {} items -> {} bytes of markup", items.len(), html.len());
    println!("  Markup in text content escaped: {}", !html.contains("<b>"));
    println!("  Download link present: {}", html.contains("/download/files/screenshot.png"));
    println!();
}

#[cfg(not(feature = "gui"))]
fn demo_filters() {
    use clipview::controllers::filter::FilterController;
    use clipview::types::filter::FilterSelection;
    section("Filter Controller");

    let selection = FilterSelection {
        item_type: "Image".into(),
        source: String::new(),
        start_date: "2024-01-01".into(),
        end_date: String::new(),
    };
    println!("  latch off: {}", FilterController::build_query(&selection, false));
    println!("  latch on:  {}", FilterController::build_query(&selection, true));
    println!();
}

#[cfg(not(feature = "gui"))]
fn demo_view_state() {
    use clipview::types::view_state::ViewState;
    section("View State");

    let mut view = ViewState::new();
    println!("  starred_only default: {}", view.starred_only());
    println!("  after toggle: {}", view.toggle_starred_only());

    let stale = view.begin_render();
    let current = view.begin_render();
    println!(
        "  tokens: {} (stale -> current={}) / {} (current={})",
        stale,
        view.is_current(stale),
        current,
        view.is_current(current)
    );
    println!();
}

#[cfg(not(feature = "gui"))]
fn demo_config() {
    use clipview::services::widget_config::{WidgetConfigStore, WidgetConfigStoreTrait};
    section("Widget Config");

    let mut store = WidgetConfigStore::new(Some("demo_clipview.json".to_string()));
    let config = store.load().unwrap();
    println!("  backend_url: {}", config.backend_url);
    println!("  request_timeout_secs: {}", config.request_timeout_secs);
    let _ = std::fs::remove_file("demo_clipview.json");
    println!();
}
