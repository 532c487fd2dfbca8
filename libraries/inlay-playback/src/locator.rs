//! Resource locator construction
//!
//! Maps a playback context and a track descriptor to the URL and
//! authorization the player needs. Both builder methods are pure given
//! the page-level inputs captured at construction.

use crate::context::PlaybackContext;
use crate::error::{PlaybackError, Result};
use crate::signals::PageSignals;
use inlay_core::types::{FolderPath, RequestToken, ShareToken, TrackRef};
use tracing::debug;
use url::Url;

/// Download endpoint of the logged-in session
const PRIVATE_WEBDAV_ROOT: [&str; 2] = ["remote.php", "webdav"];

/// Download endpoint for public shares
const PUBLIC_WEBDAV_ROOT: [&str; 2] = ["public.php", "webdav"];

/// Query parameter carrying the session request token
const REQUEST_TOKEN_PARAM: &str = "requesttoken";

/// A fetchable resource plus the authorization the player needs for it
///
/// `auth` selects the facade entry point: `None` means the URL alone is
/// enough and the player is driven through `init`; `Some` carries the
/// share token for `init_share`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceLocator {
    /// Resource URL
    pub url: Url,

    /// Share token authorizing the fetch, in share contexts
    pub auth: Option<ShareToken>,
}

/// Builds locators for tracks and folder listings
#[derive(Debug, Clone)]
pub struct ResourceLocatorBuilder {
    base_url: Url,
    request_token: RequestToken,
    shared_download_url: Option<Url>,
}

impl ResourceLocatorBuilder {
    /// Capture the page-level inputs locators depend on
    pub fn new(signals: &PageSignals) -> Self {
        Self {
            base_url: signals.base_url.clone(),
            request_token: signals.request_token.clone(),
            shared_download_url: signals
                .shared_file
                .as_ref()
                .map(|shared| shared.download_url.clone()),
        }
    }

    /// Locator for one track in the given context
    ///
    /// Private tracks resolve under the session download endpoint with
    /// the request token appended; share tracks resolve under the public
    /// endpoint with the share token carried separately; the single-file
    /// share uses the page-provided download URL unchanged.
    pub fn track_locator(
        &self,
        context: &PlaybackContext,
        track: &TrackRef,
    ) -> Result<ResourceLocator> {
        let locator = match context {
            PlaybackContext::Private { folder } => {
                let mut url = self.endpoint_url(&PRIVATE_WEBDAV_ROOT, folder, Some(&track.name))?;
                append_request_token(&mut url, &self.request_token);
                ResourceLocator { url, auth: None }
            }
            PlaybackContext::PublicFolder {
                folder,
                share_token,
            } => {
                let url = self.endpoint_url(&PUBLIC_WEBDAV_ROOT, folder, Some(&track.name))?;
                ResourceLocator {
                    url,
                    auth: Some(share_token.clone()),
                }
            }
            PlaybackContext::PublicSingleFile { share_token } => {
                let url = self
                    .shared_download_url
                    .clone()
                    .ok_or(PlaybackError::MissingSharedFile)?;
                ResourceLocator {
                    url,
                    auth: Some(share_token.clone()),
                }
            }
        };
        debug!(url = %locator.url, "Built track locator");
        Ok(locator)
    }

    /// Listing endpoint for the navigator, if the context has one
    ///
    /// The single-file share context has no folder listing and yields
    /// `None`.
    pub fn folder_url(&self, context: &PlaybackContext) -> Result<Option<Url>> {
        match context {
            PlaybackContext::Private { folder } => {
                Ok(Some(self.endpoint_url(&PRIVATE_WEBDAV_ROOT, folder, None)?))
            }
            PlaybackContext::PublicFolder { folder, .. } => {
                Ok(Some(self.endpoint_url(&PUBLIC_WEBDAV_ROOT, folder, None)?))
            }
            PlaybackContext::PublicSingleFile { .. } => Ok(None),
        }
    }

    /// Base URL extended with an endpoint root, folder segments, and an
    /// optional file name, everything percent-encoded per segment
    fn endpoint_url(&self, root: &[&str], folder: &FolderPath, file: Option<&str>) -> Result<Url> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|()| PlaybackError::InvalidBaseUrl(self.base_url.to_string()))?;
            segments.pop_if_empty();
            segments.extend(root);
            segments.extend(folder.segments());
            if let Some(file) = file {
                segments.push(file);
            }
        }
        Ok(url)
    }
}

/// Append the session request token as a query parameter
///
/// Joins with `&` when the URL already has a query string and `?`
/// otherwise; the token value is form-encoded.
fn append_request_token(url: &mut Url, token: &RequestToken) {
    url.query_pairs_mut()
        .append_pair(REQUEST_TOKEN_PARAM, token.as_str());
}
