//! Domain types for the embedded player

mod action;
mod ids;
mod mime;
mod path;
mod track;

pub use action::{Permission, PlayAction};
pub use ids::{FileId, RequestToken, ShareToken};
pub use mime::{AUDIO_MIME_CANDIDATES, STATIC_SAFE_MIMES};
pub use path::FolderPath;
pub use track::TrackRef;
