/// Collaborator traits for the embedded player
use crate::types::{FileId, PlayAction, ShareToken, TrackRef};
use std::collections::BTreeSet;
use url::Url;

/// Audio player facade
///
/// The host owns the actual player widget and audio engine; the
/// coordinator only drives it through this interface. Loading a resource
/// and updating the coordinator's current-track state always happen in the
/// same synchronous step, so the two never diverge.
pub trait PlayerFacade {
    /// Load a resource fetched with the ambient session
    ///
    /// Used in the private folder context. The URL already carries any
    /// request token it needs.
    fn init(&mut self, url: &Url, mime: &str, id: &FileId, name: &str);

    /// Load a resource belonging to a public share
    ///
    /// Used in both share contexts. The share token authorizes the fetch.
    fn init_share(
        &mut self,
        url: &Url,
        mime: &str,
        id: &FileId,
        name: &str,
        share_token: &ShareToken,
    );

    /// Toggle between playing and paused
    fn toggle_playback(&mut self);

    /// Close the player widget and release the loaded resource
    ///
    /// Must tolerate being called while already closed; the coordinator
    /// may drive it redundantly when the host closes the widget itself.
    fn close(&mut self);

    /// Make the player widget visible
    fn show(&mut self);

    /// Enable or disable the next/previous affordances
    fn set_next_and_prev_enabled(&mut self, enabled: bool);

    /// Whether the engine can currently render the given MIME type
    ///
    /// May report more types after the engine finishes its own
    /// asynchronous capability detection.
    fn can_play_mime(&self, mime: &str) -> bool;
}

/// Ordered traversal over the playable files of one folder
///
/// `init` binds the navigator to a folder listing and starts the host's
/// asynchronous fetch of it; the host reports completion back to the
/// coordinator (with the file id it captured at `init` time), not through
/// this trait. Until then `next`/`previous` behave as if the listing were
/// empty. Wraparound policy belongs to the implementation.
pub trait PlaylistNavigator {
    /// Bind to a folder listing and start fetching it
    ///
    /// # Arguments
    /// * `folder_url` - listing endpoint produced by the locator builder
    /// * `supported_mimes` - only files of these types participate
    /// * `current` - the file the traversal is positioned on
    /// * `share_token` - present when the folder belongs to a public share
    fn init(
        &mut self,
        folder_url: &Url,
        supported_mimes: &BTreeSet<String>,
        current: &FileId,
        share_token: Option<&ShareToken>,
    );

    /// Advance to the following playable file, if any
    fn next(&mut self) -> Option<TrackRef>;

    /// Step back to the preceding playable file, if any
    fn previous(&mut self) -> Option<TrackRef>;

    /// Drop the bound listing and return to the unbound state
    fn reset(&mut self);

    /// Number of playable files in the bound listing
    ///
    /// Zero while unbound or while the fetch is still outstanding.
    fn length(&self) -> usize;
}

/// Host file-listing action table
///
/// Registering an action makes the host render it on every file row of a
/// matching MIME type and route its trigger events back to the embedded
/// player glue.
pub trait FileActionRegistry {
    /// Offer an action on rows of the given MIME type
    fn register_action(&mut self, mime: &str, action: &PlayAction);

    /// Make an already registered action the row's default (single-click)
    /// action
    fn set_default_action(&mut self, mime: &str, action_id: &str);
}
