//! WebView-based widget shell using `wry` + `tao`.
//!
//! Architecture:
//! - The widget page (filter bar + list + notice area) is served via the
//!   `cv://` custom protocol with its CSS and JS inlined.
//! - IPC from JS → Rust via `window.ipc.postMessage()`.
//! - Network calls run on a tokio runtime; completions come back to the
//!   single event loop as `UserEvent`s and are applied with
//!   `evaluate_script`. A list completion is applied only while its render
//!   generation is still current; a star completion resolves its target
//!   lazily by id and silently no-ops when the item is gone.

use std::sync::{Arc, Mutex};
use tao::event::{Event, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoop, EventLoopBuilder, EventLoopProxy};
use tao::window::WindowBuilder;
use wry::WebViewBuilder;

use crate::app::App;
use crate::controllers::filter::FilterController;
use crate::controllers::star_toggle::StarOutcome;
use crate::render::history_list::HistoryListRendererTrait;
use crate::render::scripts;
use crate::types::errors::BackendError;
use crate::types::filter::FilterSelection;
use crate::types::history::HistoryItem;
use crate::types::notice::Notice;

#[derive(Debug)]
enum UserEvent {
    EvalScript(String),
    /// A history fetch finished; `token` is the render generation it was
    /// issued under.
    ListFetched {
        token: u64,
        result: Result<Vec<HistoryItem>, BackendError>,
    },
    /// A star toggle finished.
    StarResolved {
        item_id: String,
        result: Result<StarOutcome, BackendError>,
    },
}

struct WidgetState {
    app: App,
}

const WIDGET_JS: &str = include_str!("../../resources/ui/widget.js");
const WIDGET_CSS: &str = include_str!("../../resources/ui/widget.css");

/// Builds the widget page. CSS and JS are inlined because initialization
/// scripts do not run on custom-protocol pages on Windows WebView2.
fn widget_page() -> String {
    let body = r#"<div class="filter-bar">
<select id="type-filter">
<option value="">All types</option>
<option value="Text">Text</option>
<option value="Image">Image</option>
<option value="File">File</option>
</select>
<input id="source-filter" type="text" placeholder="Source" />
<input id="start-date" type="date" />
<input id="end-date" type="date" />
<button id="apply-filter">Apply</button>
<button id="toggle-starred" title="Show starred only">★ Starred</button>
</div>
<div id="notice" class="notice hidden"></div>
<div class="history-list"></div>"#;

    let mut html = String::with_capacity(body.len() + WIDGET_CSS.len() + WIDGET_JS.len() + 2000);
    html.push_str("<!DOCTYPE html><html><head><meta charset=\"UTF-8\"><style>");
    html.push_str(":root{--bg-canvas:#0d1117;--bg-default:#161b22;--bg-subtle:#1c2128;--fg-default:#e6edf3;--fg-muted:#7d8590;--fg-subtle:#484f58;--border-default:#30363d;--border-muted:#21262d;--accent-fg:#58a6ff;--accent-emphasis:#1f6feb;--danger-fg:#f85149;--danger-emphasis:#da3633;--radius-sm:6px;--radius-md:8px;--transition-fast:120ms cubic-bezier(0.33,1,0.68,1);--font:-apple-system,BlinkMacSystemFont,\"Segoe UI\",\"Noto Sans\",Helvetica,Arial,sans-serif}");
    html.push_str("*{margin:0;padding:0;box-sizing:border-box}");
    html.push_str("body{font-family:var(--font);background:var(--bg-canvas);color:var(--fg-default);height:100vh;display:flex;flex-direction:column;user-select:none}");
    html.push_str(WIDGET_CSS);
    html.push_str("</style></head><body>");
    html.push_str(body);
    html.push_str("<script>");
    html.push_str(WIDGET_JS);
    html.push_str("</script></body></html>");
    html
}

// ─── IPC handler ───

fn handle_ipc(
    state: &Arc<Mutex<WidgetState>>,
    proxy: &EventLoopProxy<UserEvent>,
    tasks: &tokio::runtime::Handle,
    message: &str,
) {
    let Ok(msg) = serde_json::from_str::<serde_json::Value>(message) else {
        return;
    };
    let Some(cmd) = msg.get("cmd").and_then(|v| v.as_str()) else {
        return;
    };

    match cmd {
        // All three list-refreshing commands share one path: take a fresh
        // render token, build the query against the current latch, fetch.
        "ui_ready" | "apply_filters" | "toggle_starred_only" => {
            let selection: FilterSelection = serde_json::from_value(msg.clone()).unwrap_or_default();
            let (token, query, filter) = {
                let mut s = state.lock().unwrap();
                if cmd == "toggle_starred_only" {
                    let active = s.app.view.toggle_starred_only();
                    let _ = proxy.send_event(UserEvent::EvalScript(scripts::starred_latch_script(active)));
                } else if cmd == "ui_ready" {
                    // Fresh page — project the latch onto the new button.
                    let _ = proxy.send_event(UserEvent::EvalScript(scripts::starred_latch_script(
                        s.app.view.starred_only(),
                    )));
                }
                let token = s.app.view.begin_render();
                let query = FilterController::build_query(&selection, s.app.view.starred_only());
                (token, query, s.app.filter.clone())
            };

            let proxy = proxy.clone();
            tasks.spawn(async move {
                let result = filter.fetch(&query).await;
                let _ = proxy.send_event(UserEvent::ListFetched { token, result });
            });
        }

        "toggle_star" => {
            let Some(id) = msg.get("id").and_then(|v| v.as_str()).map(str::to_string) else {
                return;
            };
            let star = {
                let s = state.lock().unwrap();
                s.app.star_toggle.clone()
            };

            let proxy = proxy.clone();
            tasks.spawn(async move {
                let result = star.toggle(&id).await;
                let _ = proxy.send_event(UserEvent::StarResolved { item_id: id, result });
            });
        }

        _ => {}
    }
}

// ─── Completion handling ───

fn list_fetched_script(
    state: &Arc<Mutex<WidgetState>>,
    token: u64,
    result: Result<Vec<HistoryItem>, BackendError>,
) -> Option<String> {
    let s = state.lock().unwrap();
    if !s.app.view.is_current(token) {
        eprintln!("[NET] discarded stale history response (token {})", token);
        return None;
    }
    match result {
        Ok(items) => {
            let html = s.app.renderer.render_list(&items);
            Some(scripts::list_update_script(&html))
        }
        Err(e) => {
            eprintln!("[NET] history fetch failed: {}", e);
            Some(scripts::notice_script(&Notice::error(format!(
                "Could not load history: {}",
                e
            ))))
        }
    }
}

fn star_resolved_script(item_id: &str, result: Result<StarOutcome, BackendError>) -> String {
    match result {
        Ok(outcome) => scripts::star_update_script(&outcome.item_id, outcome.starred),
        Err(e) => {
            // Indicator stays untouched; retry is the user clicking again.
            eprintln!("[NET] star toggle failed for {}: {}", item_id, e);
            scripts::notice_script(&Notice::error(format!("Could not update star: {}", e)))
        }
    }
}

// ─── Main entry point ───

pub fn run() {
    let app = App::new(None).expect("Failed to initialize clipview");
    let state = Arc::new(Mutex::new(WidgetState { app }));

    let event_loop: EventLoop<UserEvent> = EventLoopBuilder::with_user_event().build();
    let proxy = event_loop.create_proxy();

    let runtime = tokio::runtime::Runtime::new().expect("Failed to start tokio runtime");
    let tasks = runtime.handle().clone();

    let window = WindowBuilder::new()
        .with_title("Clipboard History")
        .with_inner_size(tao::dpi::LogicalSize::new(980.0, 720.0))
        .build(&event_loop)
        .expect("Failed to create window");

    let ipc_state = state.clone();
    let ipc_proxy = proxy.clone();

    let builder = WebViewBuilder::new()
        .with_custom_protocol("cv".into(), move |_wv_id, _request| {
            // Single internal page; every cv:// path serves the widget.
            let html = widget_page();
            wry::http::Response::builder()
                .header("Content-Type", "text/html; charset=utf-8")
                .body(html.into_bytes().into())
                .unwrap()
        })
        .with_url("cv://localhost/widget")
        .with_ipc_handler(move |msg: wry::http::Request<String>| {
            let body = msg.body().as_str();
            eprintln!("[IPC] {}", body.chars().take(200).collect::<String>());
            handle_ipc(&ipc_state, &ipc_proxy, &tasks, body);
        })
        .with_devtools(cfg!(debug_assertions));

    #[cfg(target_os = "linux")]
    let webview = {
        use tao::platform::unix::WindowExtUnix;
        use wry::WebViewBuilderExtUnix;
        let vbox = window.default_vbox().expect("Failed to get GTK vbox");
        builder.build_gtk(vbox).expect("Failed to create WebView")
    };

    #[cfg(not(target_os = "linux"))]
    let webview = builder.build(&window).expect("Failed to create WebView");

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                *control_flow = ControlFlow::Exit;
            }

            Event::UserEvent(user_event) => {
                let script = match user_event {
                    UserEvent::EvalScript(js) => Some(js),
                    UserEvent::ListFetched { token, result } => {
                        list_fetched_script(&state, token, result)
                    }
                    UserEvent::StarResolved { item_id, result } => {
                        Some(star_resolved_script(&item_id, result))
                    }
                };
                if let Some(js) = script {
                    let _ = webview.evaluate_script(&js);
                }
            }

            _ => {}
        }
    });
}
