//! Inlay Core
//!
//! Shared types and collaborator traits for the Inlay embedded player.
//!
//! The embedded player lives inside a file-browsing web UI. This crate
//! defines the vocabulary the playback coordinator and its host glue
//! exchange:
//! - **Identifier newtypes**: `FileId`, `ShareToken`, `RequestToken`
//! - **Descriptors**: `TrackRef`, `FolderPath`, `PlayAction`
//! - **Collaborator traits**: `PlayerFacade`, `PlaylistNavigator`,
//!   `FileActionRegistry`
//!
//! The traits are the seams towards the host page: the audio engine, the
//! playlist listing, and the file-action table are all owned by the host
//! and driven through these interfaces.
//!
//! # Example
//!
//! ```rust
//! use inlay_core::types::{FileId, FolderPath, TrackRef};
//!
//! let track = TrackRef::new(FileId::new("42"), "song.mp3", "audio/mpeg");
//! let folder = FolderPath::new("/Music");
//!
//! assert_eq!(folder.as_str(), "/Music");
//! assert_eq!(track.id.as_str(), "42");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{CoreError, Result};
pub use traits::{FileActionRegistry, PlayerFacade, PlaylistNavigator};

// Export all types
pub use types::{
    FileId, FolderPath, Permission, PlayAction, RequestToken, ShareToken, TrackRef,
    AUDIO_MIME_CANDIDATES, STATIC_SAFE_MIMES,
};
