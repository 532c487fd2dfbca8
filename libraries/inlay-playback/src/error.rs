//! Error types for playback coordination

use thiserror::Error;

/// Playback coordination errors
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// A share trigger arrived on a page that carries no share token
    #[error("Page provides no share token")]
    MissingShareToken,

    /// A share-preview trigger arrived without shared-file page values
    #[error("Page provides no shared file details")]
    MissingSharedFile,

    /// The base URL cannot anchor the download endpoints
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// The base URL string does not parse
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// next/previous was requested while no track is active
    #[error("No active track")]
    NoActiveTrack,
}

/// Result type for playback coordination
pub type Result<T> = std::result::Result<T, PlaybackError>;
