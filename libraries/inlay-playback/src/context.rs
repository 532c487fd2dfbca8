//! Playback context resolution

use crate::error::{PlaybackError, Result};
use crate::signals::PageSignals;
use inlay_core::types::{FolderPath, ShareToken, TrackRef};

/// A "play" trigger as the host event glue delivers it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayTrigger {
    /// Click on a file row in a folder listing (private or shared folder)
    FileRow {
        /// File metadata from the clicked row
        track: TrackRef,
        /// Folder the row lives in
        folder: FolderPath,
    },

    /// Click on the preview of a single-file share page
    ///
    /// The page, not the trigger, carries the file details; the
    /// coordinator reads them from the page signals and synthesizes the
    /// file id.
    SharePreview,
}

/// Browsing mode a play trigger resolved to
///
/// Created per trigger and kept only while its track stays current; never
/// persisted. The share variants hold the token directly, so a share
/// context without one cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackContext {
    /// Logged-in session browsing its own files
    Private {
        /// Folder containing the current track
        folder: FolderPath,
    },

    /// Anonymous visitor browsing a publicly shared folder
    PublicFolder {
        /// Folder containing the current track, relative to the share root
        folder: FolderPath,
        /// Token identifying the share
        share_token: ShareToken,
    },

    /// Anonymous visitor on a single shared file page
    PublicSingleFile {
        /// Token identifying the share
        share_token: ShareToken,
    },
}

impl PlaybackContext {
    /// The share token, when this is a share context
    pub fn share_token(&self) -> Option<&ShareToken> {
        match self {
            Self::Private { .. } => None,
            Self::PublicFolder { share_token, .. } | Self::PublicSingleFile { share_token } => {
                Some(share_token)
            }
        }
    }
}

/// Decide which context applies to a trigger
///
/// Pure over the page signals and the trigger. A share-preview trigger
/// always resolves to the single-file context; file-row triggers resolve
/// to the public-folder context exactly when the page carries a share
/// token, and to the private context otherwise.
///
/// # Errors
/// Returns `MissingShareToken` for a share-preview trigger on a page
/// without a token; that page configuration cannot occur on an intact
/// host page.
pub fn resolve_context(signals: &PageSignals, trigger: &PlayTrigger) -> Result<PlaybackContext> {
    match trigger {
        PlayTrigger::SharePreview => {
            let share_token = signals
                .share_token
                .clone()
                .ok_or(PlaybackError::MissingShareToken)?;
            Ok(PlaybackContext::PublicSingleFile { share_token })
        }
        PlayTrigger::FileRow { folder, .. } => match signals.share_token.clone() {
            Some(share_token) => Ok(PlaybackContext::PublicFolder {
                folder: folder.clone(),
                share_token,
            }),
            None => Ok(PlaybackContext::Private {
                folder: folder.clone(),
            }),
        },
    }
}
