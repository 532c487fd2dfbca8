/// Core error types for Inlay
use thiserror::Error;

/// Result type alias using `CoreError`
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error type for Inlay
#[derive(Error, Debug)]
pub enum CoreError {
    /// A share token was constructed from an empty string
    #[error("Share token cannot be empty")]
    EmptyShareToken,
}
