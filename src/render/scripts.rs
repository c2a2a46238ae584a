//! Eval-script builders.
//!
//! Every DOM mutation the shell performs goes through `evaluate_script` with
//! a script built here. Interpolated values are embedded as JSON string
//! literals so page content can never escape into executable position.

use crate::types::notice::Notice;

/// Embeds a string as a JS string literal.
fn js_string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| String::from("\"\""))
}

/// Full-replace list update: hands the freshly rendered HTML to the page's
/// `__cv_applyList`, which assigns the stable container's `innerHTML`.
pub fn list_update_script(html: &str) -> String {
    format!("if(window.__cv_applyList)__cv_applyList({})", js_string(html))
}

/// Sets one star indicator to the server-reported state.
///
/// The target is resolved lazily by id at execution time; if the item is no
/// longer rendered (a re-render completed while the toggle was in flight)
/// the script is a silent no-op.
pub fn star_update_script(item_id: &str, starred: bool) -> String {
    format!(
        "(function(){{var id={};var on={};var items=document.querySelectorAll('.history-item');\
for(var i=0;i<items.length;i++){{if(items[i].dataset.id!==id)continue;\
var s=items[i].querySelector('.star');\
if(s){{if(on)s.classList.add('starred');else s.classList.remove('starred');}}return;}}}})()",
        js_string(item_id),
        starred,
    )
}

/// Projects the starred-only latch onto the toggle button's active class.
pub fn starred_latch_script(active: bool) -> String {
    format!("if(window.__cv_setStarredLatch)__cv_setStarredLatch({})", active)
}

/// Shows a transient inline notice.
pub fn notice_script(notice: &Notice) -> String {
    format!(
        "if(window.__cv_notice)__cv_notice({},{})",
        js_string(&notice.message),
        js_string(notice.kind.css_class()),
    )
}
