/// Folder path type
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Normalized folder path within the host file hierarchy
///
/// Always starts with `/`, never ends with one (except the root itself),
/// and contains no empty segments. `new` normalizes whatever the host
/// hands over, so `"Music"`, `"/Music"` and `"/Music/"` are the same
/// folder.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct FolderPath(String);

impl FolderPath {
    /// Create a normalized folder path
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        let mut normalized = String::with_capacity(path.len() + 1);
        for segment in path.split('/').filter(|s| !s.is_empty()) {
            normalized.push('/');
            normalized.push_str(segment);
        }
        if normalized.is_empty() {
            normalized.push('/');
        }
        Self(normalized)
    }

    /// The root folder `/`
    pub fn root() -> Self {
        Self("/".to_string())
    }

    /// Whether this is the root folder
    pub fn is_root(&self) -> bool {
        self.0 == "/"
    }

    /// Get the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterate over the path segments, root first
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/').filter(|s| !s.is_empty())
    }
}

impl fmt::Display for FolderPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Deserialization funnels through `new` so host-provided paths are
// normalized the same way as programmatic ones.
impl<'de> Deserialize<'de> for FolderPath {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Self::new(String::deserialize(deserializer)?))
    }
}
