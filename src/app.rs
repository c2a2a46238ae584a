//! App core for clipview.
//!
//! Central struct holding the widget's services, controllers, renderer, and
//! view state.

use crate::controllers::filter::FilterController;
use crate::controllers::star_toggle::StarToggleController;
use crate::render::history_list::HistoryListRenderer;
use crate::services::backend_client::BackendClient;
use crate::services::widget_config::{WidgetConfigStore, WidgetConfigStoreTrait};
use crate::types::view_state::ViewState;

/// Central application struct.
///
/// Controllers share the backend client (cheap clones over one connection
/// pool); the renderer resolves download links against the same base URL the
/// client talks to.
pub struct App {
    pub config_store: WidgetConfigStore,
    pub backend: BackendClient,
    pub star_toggle: StarToggleController,
    pub filter: FilterController,
    pub renderer: HistoryListRenderer,
    pub view: ViewState,
}

impl App {
    /// Creates a new App: loads config, builds the backend client, and wires
    /// the controllers and renderer to it.
    pub fn new(config_path_override: Option<String>) -> Result<Self, Box<dyn std::error::Error>> {
        let mut config_store = WidgetConfigStore::new(config_path_override);
        let config = config_store.load()?;

        let backend = BackendClient::new(&config)?;
        let star_toggle = StarToggleController::new(backend.clone());
        let filter = FilterController::new(backend.clone());
        let renderer = HistoryListRenderer::new(backend.base_url());

        Ok(Self {
            config_store,
            backend,
            star_toggle,
            filter,
            renderer,
            view: ViewState::new(),
        })
    }
}
