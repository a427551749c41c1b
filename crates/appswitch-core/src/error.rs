//! Error types for appswitch-core

use thiserror::Error;

/// Result type alias using appswitch-core's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for appswitch
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid configuration content
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// Token that is not a dot followed by ASCII alphanumerics
    #[error("Invalid file extension: '{token}'")]
    InvalidExtension { token: String },

    /// Preference slot outside 1..=5
    #[error("Invalid app slot {slot}: expected a number from 1 to {max}")]
    InvalidSlot { slot: usize, max: usize },

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to open an application path
    #[error("Could not open {path}: {message}")]
    Launch { path: String, message: String },

    /// Failed to read an application bundle's metadata
    #[error("Could not read bundle info for {path}: {message}")]
    BundleInfo { path: String, message: String },

    /// Home directory could not be resolved
    #[error("Could not determine home directory")]
    NoHomeDir,
}

impl Error {
    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create an invalid extension error
    pub fn invalid_extension(token: impl Into<String>) -> Self {
        Self::InvalidExtension {
            token: token.into(),
        }
    }

    /// Create an invalid slot error
    pub fn invalid_slot(slot: usize) -> Self {
        Self::InvalidSlot {
            slot,
            max: crate::types::SLOT_COUNT,
        }
    }

    /// Create a launch error
    pub fn launch(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Launch {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a bundle info error
    pub fn bundle_info(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::BundleInfo {
            path: path.into(),
            message: message.into(),
        }
    }
}
