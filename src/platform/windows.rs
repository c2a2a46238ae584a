// clipview platform paths for Windows
// Config: %APPDATA%/Clipview

use std::env;
use std::path::PathBuf;

/// Returns the configuration directory for clipview on Windows.
pub fn get_config_dir() -> PathBuf {
    let appdata = env::var("APPDATA").unwrap_or_else(|_| String::from("C:\\Temp"));
    PathBuf::from(appdata).join("Clipview")
}
