// clipview platform paths for Linux
// Config: ~/.config/clipview

use std::env;
use std::path::PathBuf;

/// Returns the configuration directory for clipview on Linux.
/// Uses `$XDG_CONFIG_HOME/clipview` if set, otherwise `~/.config/clipview`.
pub fn get_config_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        PathBuf::from(xdg).join("clipview")
    } else {
        let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
        PathBuf::from(home).join(".config").join("clipview")
    }
}
