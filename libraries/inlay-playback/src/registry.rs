//! Play-action registration with the host file listing

use inlay_core::traits::FileActionRegistry;
use inlay_core::types::PlayAction;
use std::collections::BTreeSet;
use tracing::debug;

/// Tracks what has already been registered with the host
///
/// Registration runs at least twice per page: once synchronously with the
/// baseline capability set and once more when the engine finishes its own
/// detection. The host registry must see each MIME type only once, and
/// the single-file share preview must be bound at most once.
#[derive(Debug, Default)]
pub struct PlayActionRegistrar {
    registered: BTreeSet<String>,
    share_preview_bound: bool,
}

impl PlayActionRegistrar {
    /// Create an empty registrar
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the play action for every MIME type not yet covered
    ///
    /// Newly covered types also get the action as their default row
    /// action. Returns how many types were newly registered.
    pub fn register_folder_actions<R: FileActionRegistry>(
        &mut self,
        registry: &mut R,
        mimes: &BTreeSet<String>,
        action: &PlayAction,
    ) -> usize {
        let mut added = 0;
        for mime in mimes {
            if self.registered.insert(mime.clone()) {
                registry.register_action(mime, action);
                registry.set_default_action(mime, &action.id);
                added += 1;
            }
        }
        if added > 0 {
            debug!(added, total = self.registered.len(), "Registered play actions");
        }
        added
    }

    /// Decide whether the share-preview click should be bound now
    ///
    /// True at most once per page, and only when the shared file's MIME
    /// type is supported. An unsupported type does not consume the guard,
    /// so a later pass with a wider set may still bind.
    pub fn bind_share_preview(&mut self, mime: &str, supported: &BTreeSet<String>) -> bool {
        if self.share_preview_bound || !supported.contains(mime) {
            return false;
        }
        self.share_preview_bound = true;
        debug!(mime, "Binding share preview click");
        true
    }

    /// Whether the share-preview click has been bound
    pub fn share_preview_bound(&self) -> bool {
        self.share_preview_bound
    }
}
