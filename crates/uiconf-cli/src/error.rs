//! Error types for uiconf-cli

use std::path::PathBuf;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from uiconf-core
    #[error(transparent)]
    Core(#[from] uiconf_core::Error),

    /// Error parsing a user configuration file
    #[error(transparent)]
    Meta(#[from] uiconf_meta::Error),

    /// Error building the platform, such as a malformed `--url`
    #[error(transparent)]
    Platform(#[from] uiconf_platform::Error),

    /// Reading a file failed
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}
