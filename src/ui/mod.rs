// clipview UI shell (feature `gui`)

pub mod webview_app;
