/// Track descriptor type
use crate::types::FileId;
use serde::{Deserialize, Serialize};

/// A playable file as the host file listing describes it
///
/// This is the per-row metadata the host page carries for each file: just
/// enough to load the file into the player and to match it against the
/// supported MIME set. Library-style metadata (artist, album, tags) does
/// not exist at this layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackRef {
    /// Unique file identifier within the active folder listing
    pub id: FileId,

    /// File name, including extension
    pub name: String,

    /// MIME type as reported by the host listing
    pub mime: String,
}

impl TrackRef {
    /// Create a new track descriptor
    pub fn new(id: FileId, name: impl Into<String>, mime: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            mime: mime.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_flat_fields() {
        let track = TrackRef::new(FileId::new("42"), "song.mp3", "audio/mpeg");
        let json = serde_json::to_value(&track).unwrap();
        assert_eq!(json["id"], "42");
        assert_eq!(json["name"], "song.mp3");
        assert_eq!(json["mime"], "audio/mpeg");
    }
}
