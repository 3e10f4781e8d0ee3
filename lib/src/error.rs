//! Error types for the adyen library.

use thiserror::Error;

/// Result type alias for adyen operations.
pub type Result<T> = std::result::Result<T, AdyenError>;

#[derive(Error, Debug)]
pub enum AdyenError {
    #[error("Invalid amount '{0}'. Expected a decimal value in major currency units.")]
    InvalidAmount(String),

    #[error("{0}")]
    ConfigMissing(String),

    #[error("{0}")]
    InvalidConfig(String),

    #[error("Could not find config directory. Set the ADYEN_CONFIG_DIR environment variable or ensure your home directory is accessible.")]
    NoConfigDir,

    // ==================== HTTP Errors ====================
    #[error("{0}")]
    Transport(String),

    #[error("HTTP method '{0}' is not supported. Use GET, POST, PUT or DELETE.")]
    UnsupportedHttpMethod(String),

    #[error("Could not encode request body: {0}")]
    Json(#[source] serde_json::Error),

    #[error("Processor returned a body that is not valid JSON: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Invalid config file format: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Failed to save config: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    // ==================== External Library Errors ====================
    #[error("File operation failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network request failed: {0}")]
    Curl(#[from] curl::Error),

    #[error("Server returned invalid text encoding. The response may be corrupted.")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

impl AdyenError {
    /// Create a transport error
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Create a config missing error
    pub fn config_missing(msg: impl Into<String>) -> Self {
        Self::ConfigMissing(msg.into())
    }

    /// Create an invalid config error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Returns true for failures that happened before a response body was received.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Curl(_))
    }
}
