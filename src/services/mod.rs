// clipview services
// Services provide the widget's infrastructure: the HTTP backend client and
// the persisted widget configuration.

pub mod backend_client;
pub mod widget_config;
