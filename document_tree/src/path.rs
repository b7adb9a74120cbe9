//! Navigation paths
//!
//! This module defines the ordered folder-name sequence that records where
//! in the catalog the user is currently browsing.

use serde::{Deserialize, Serialize};

/// A walk from the catalog root to the folder currently being viewed
///
/// The empty path is the root. Paths are replaced wholesale on every
/// navigation action; they are never edited in place by the widget.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NavigationPath(Vec<String>);

impl NavigationPath {
    /// Creates the root path
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Creates a path from folder-name segments
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(segments.into_iter().map(Into::into).collect())
    }

    /// Returns the folder-name segments in walk order
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Returns true if this is the root path
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of segments
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    /// Returns this path extended by one folder name
    pub fn descend(&self, name: impl Into<String>) -> Self {
        let mut segments = self.0.clone();
        segments.push(name.into());
        Self(segments)
    }

    /// Returns the parent path; the root is its own parent
    pub fn parent(&self) -> Self {
        let mut segments = self.0.clone();
        segments.pop();
        Self(segments)
    }
}
