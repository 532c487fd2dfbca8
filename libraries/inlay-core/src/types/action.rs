/// File-action descriptor types
use serde::{Deserialize, Serialize};

/// Permission level a registered file action requires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Permission {
    /// The user can read the file
    Read,
    /// The user can modify the file
    Update,
    /// The user can delete the file
    Delete,
    /// The user can re-share the file
    Share,
}

/// Action offered in the host file listing for matching MIME types
///
/// The host wires the action's trigger events back into the coordinator;
/// this descriptor only carries what the listing needs to render the
/// entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayAction {
    /// Action identifier, unique within the host registry
    pub id: String,

    /// Permission the file row must grant for the action to show
    pub permission: Permission,

    /// Host-relative icon path
    pub icon: String,

    /// Human-readable label
    pub label: String,
}

impl Default for PlayAction {
    /// The stock play action registered for supported audio types
    fn default() -> Self {
        Self {
            id: "music-play".to_string(),
            permission: Permission::Read,
            icon: "music/play-big".to_string(),
            label: "Play".to_string(),
        }
    }
}
