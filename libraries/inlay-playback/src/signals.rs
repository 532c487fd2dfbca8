//! Page environment the embedded player starts from

use crate::error::{PlaybackError, Result};
use inlay_core::types::{RequestToken, ShareToken};
use url::Url;

/// File details a single-file share page exposes
///
/// On such pages the host renders one shared file with its name, MIME
/// type, and a pre-resolved download URL. There is no file id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharedFilePage {
    /// File name, including extension
    pub name: String,

    /// MIME type of the shared file
    pub mime: String,

    /// Direct download URL, already resolved by the host page
    pub download_url: Url,
}

/// Page-global signals, read once by the host glue at startup
///
/// Exactly one such value exists per page load. The presence of
/// `share_token` is the single signal distinguishing a public share view
/// from a private one; it is never a per-file property.
#[derive(Debug, Clone)]
pub struct PageSignals {
    /// Server base URL all download endpoints hang off
    pub base_url: Url,

    /// Ambient session token, appended to private download URLs
    pub request_token: RequestToken,

    /// Present iff the page is a public share view
    pub share_token: Option<ShareToken>,

    /// Present iff the page is a single-file share page
    pub shared_file: Option<SharedFilePage>,

    /// The host file-listing app is loaded on this page
    ///
    /// Folder play actions register only when it is. Defaults to `true`;
    /// single-file share pages set it to `false`.
    pub file_list_present: bool,

    /// The page already ships its own audio player
    ///
    /// When set, the embedded player stays out of the way entirely and no
    /// actions are registered.
    pub native_player_present: bool,
}

impl PageSignals {
    /// Capture the page environment, validating the base URL
    ///
    /// The optional markers start empty; the host glue fills in whichever
    /// ones the page exposes.
    ///
    /// # Errors
    /// Returns `UrlParse` if `base_url` is not a URL at all, and
    /// `InvalidBaseUrl` if it is not `http` or `https`
    pub fn new(base_url: &str, request_token: RequestToken) -> Result<Self> {
        let base_url = Url::parse(base_url)?;
        if base_url.scheme() != "http" && base_url.scheme() != "https" {
            return Err(PlaybackError::InvalidBaseUrl(base_url.to_string()));
        }
        Ok(Self {
            base_url,
            request_token,
            share_token: None,
            shared_file: None,
            file_list_present: true,
            native_player_present: false,
        })
    }

    /// Whether the page is a public share view
    pub fn is_share_view(&self) -> bool {
        self.share_token.is_some()
    }
}
