/// ID and token types for the embedded player
use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel id used on single-file share pages, where the host exposes no
/// real file id for the shared file.
const SINGLE_SHARE_ID: &str = "single-file-share";

/// File identifier
///
/// Unique within the active folder listing. The host page supplies it for
/// file rows; single-file share pages get a synthesized sentinel instead.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileId(String);

impl FileId {
    /// Create a new file ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The synthesized id for the file on a single-file share page
    pub fn single_share() -> Self {
        Self(SINGLE_SHARE_ID.to_string())
    }

    /// Get the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Public share token
///
/// Identifies a public share (folder or single file) towards the host
/// server. Always non-empty; share contexts are never built without one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShareToken(String);

impl ShareToken {
    /// Create a new share token
    ///
    /// # Errors
    /// Returns `EmptyShareToken` if the token string is empty
    pub fn new(token: impl Into<String>) -> Result<Self> {
        let token = token.into();
        if token.is_empty() {
            return Err(CoreError::EmptyShareToken);
        }
        Ok(Self(token))
    }

    /// Get the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShareToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ambient session request token
///
/// The CSRF token the host page carries for the logged-in session,
/// appended to private download URLs as a query parameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestToken(String);

impl RequestToken {
    /// Create a new request token
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Get the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RequestToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
