//! Audio MIME tables for play-action registration

/// Candidate MIME types the embedded player may be asked to handle
///
/// The capability probe filters this table through the player engine;
/// types outside it are never offered, whatever the engine claims.
pub const AUDIO_MIME_CANDIDATES: [&str; 6] = [
    "audio/flac",
    "audio/mp4",
    "audio/m4b",
    "audio/mpeg",
    "audio/ogg",
    "audio/wav",
];

/// Formats playable regardless of what the engine reports
///
/// Some engines only learn their codec support asynchronously, and on
/// hosts without native decoders that callback never fires at all. These
/// formats have a pure software fallback, so they are registered
/// unconditionally in the synchronous pass.
pub const STATIC_SAFE_MIMES: [&str; 2] = ["audio/mpeg", "audio/flac"];
