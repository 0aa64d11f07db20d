//! Error types for uiconf-core

/// Result type for uiconf-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in uiconf-core operations
///
/// Missing configuration is never an error: unknown keys resolve to `null`
/// and then to the caller's fallback.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A lookup was made without a key
    #[error("config key is not defined")]
    KeyNotDefined,
}
