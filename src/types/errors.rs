use std::fmt;

// === BackendError ===

/// Errors related to requests against the clipboard history server.
#[derive(Debug)]
pub enum BackendError {
    /// The request never completed (connect failure, timeout, broken transport).
    NetworkError(String),
    /// The server answered with a non-success HTTP status.
    HttpStatus(u16),
    /// The response body could not be parsed into the expected shape.
    MalformedResponse(String),
    /// The item id resolved from the page was empty or unusable.
    InvalidItemId(String),
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendError::NetworkError(msg) => write!(f, "Backend network error: {}", msg),
            BackendError::HttpStatus(code) => write!(f, "Backend returned HTTP {}", code),
            BackendError::MalformedResponse(msg) => {
                write!(f, "Malformed backend response: {}", msg)
            }
            BackendError::InvalidItemId(id) => write!(f, "Invalid item id: {:?}", id),
        }
    }
}

impl std::error::Error for BackendError {}

// === ConfigError ===

/// Errors related to loading and saving the widget configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// An I/O error occurred while reading or writing the config file.
    IoError(String),
    /// Failed to serialize or deserialize the config file.
    SerializationError(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::IoError(msg) => write!(f, "Config I/O error: {}", msg),
            ConfigError::SerializationError(msg) => {
                write!(f, "Config serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
