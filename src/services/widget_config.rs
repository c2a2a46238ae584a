// clipview widget configuration
// Loading, saving, and defaulting of the widget's settings.
// Settings are stored as a JSON file at the platform-specific config path.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::platform;
use crate::types::errors::ConfigError;

/// Environment variable overriding the configured backend URL.
pub const BACKEND_URL_ENV: &str = "CLIPVIEW_BACKEND_URL";

/// The widget's persisted settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Base URL of the clipboard history server.
    pub backend_url: String,
    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            // The history server's stock local address.
            backend_url: "http://127.0.0.1:5000".to_string(),
            request_timeout_secs: 10,
        }
    }
}

/// Trait defining the config store interface.
pub trait WidgetConfigStoreTrait {
    fn load(&mut self) -> Result<WidgetConfig, ConfigError>;
    fn save(&self) -> Result<(), ConfigError>;
    fn get(&self) -> &WidgetConfig;
    fn config_path(&self) -> &str;
}

/// Config store that persists the widget settings as JSON on disk.
pub struct WidgetConfigStore {
    config_path: String,
    config: WidgetConfig,
}

impl WidgetConfigStore {
    /// Creates a new store.
    ///
    /// If `path_override` is `Some`, uses that path for the config file.
    /// Otherwise, uses the platform-specific config directory with
    /// `clipview.json`.
    pub fn new(path_override: Option<String>) -> Self {
        let config_path = match path_override {
            Some(p) => p,
            None => platform::get_config_dir()
                .join("clipview.json")
                .to_string_lossy()
                .to_string(),
        };

        Self {
            config_path,
            config: WidgetConfig::default(),
        }
    }
}

impl WidgetConfigStoreTrait for WidgetConfigStore {
    /// Loads settings from the JSON config file.
    ///
    /// A missing file yields defaults; a malformed file is an error. After
    /// loading, `CLIPVIEW_BACKEND_URL` overrides the configured backend URL
    /// when set and non-empty.
    fn load(&mut self) -> Result<WidgetConfig, ConfigError> {
        let path = Path::new(&self.config_path);

        if path.exists() {
            let content = fs::read_to_string(path)
                .map_err(|e| ConfigError::IoError(format!("Failed to read config file: {}", e)))?;
            self.config = serde_json::from_str(&content).map_err(|e| {
                ConfigError::SerializationError(format!("Failed to parse config file: {}", e))
            })?;
        } else {
            self.config = WidgetConfig::default();
        }

        if let Ok(url) = std::env::var(BACKEND_URL_ENV) {
            if !url.trim().is_empty() {
                self.config.backend_url = url;
            }
        }

        Ok(self.config.clone())
    }

    /// Saves the current settings to the JSON config file.
    ///
    /// Creates parent directories if they don't exist.
    fn save(&self) -> Result<(), ConfigError> {
        let path = Path::new(&self.config_path);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ConfigError::IoError(format!("Failed to create config directory: {}", e))
            })?;
        }

        let json = serde_json::to_string_pretty(&self.config).map_err(|e| {
            ConfigError::SerializationError(format!("Failed to serialize config: {}", e))
        })?;

        fs::write(path, json)
            .map_err(|e| ConfigError::IoError(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    fn get(&self) -> &WidgetConfig {
        &self.config
    }

    fn config_path(&self) -> &str {
        &self.config_path
    }
}
