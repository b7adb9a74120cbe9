//! Catalog entry types
//!
//! This module defines how files and folders are represented in the
//! document catalog.

use core::cmp::Ordering;
use serde::{Deserialize, Serialize};

/// Date a file was added, as an ISO-8601 `yyyy-mm-dd` stamp
///
/// Lexicographic order on the stamp equals chronological order, so the
/// plain derived `Ord` is the date ordering.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DateStamp(String);

impl DateStamp {
    /// Creates a new date stamp
    pub fn new(stamp: impl Into<String>) -> Self {
        Self(stamp.into())
    }

    /// Returns the stamp as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A file in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    /// Name of this file, unique within its parent folder
    pub name: String,
    /// Category/extension tag (e.g. "pdf", "csv")
    pub kind: String,
    /// Date the file was added
    pub added: DateStamp,
}

/// A folder in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderEntry {
    /// Name of this folder, unique within its parent folder
    pub name: String,
    /// Ordered child entries
    pub children: Vec<Entry>,
}

/// A single entry in the catalog
///
/// Every stage of the widget matches exhaustively on the two variants, so
/// a third entry kind becomes a compile-time review point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Entry {
    /// A file with a kind tag and a date added
    File(FileEntry),
    /// A folder containing further entries
    Folder(FolderEntry),
}

impl Entry {
    /// Creates a file entry
    pub fn file(name: impl Into<String>, kind: impl Into<String>, added: DateStamp) -> Self {
        Self::File(FileEntry {
            name: name.into(),
            kind: kind.into(),
            added,
        })
    }

    /// Creates a folder entry
    pub fn folder(name: impl Into<String>, children: Vec<Entry>) -> Self {
        Self::Folder(FolderEntry {
            name: name.into(),
            children,
        })
    }

    /// Returns the entry name
    pub fn name(&self) -> &str {
        match self {
            Entry::File(file) => &file.name,
            Entry::Folder(folder) => &folder.name,
        }
    }

    /// Returns true if this entry is a folder
    pub fn is_folder(&self) -> bool {
        matches!(self, Entry::Folder(_))
    }

    /// Returns the folder variant, if this entry is one
    pub fn as_folder(&self) -> Option<&FolderEntry> {
        match self {
            Entry::Folder(folder) => Some(folder),
            Entry::File(_) => None,
        }
    }

    /// Returns the kind tag for files; folders have none
    pub fn kind_tag(&self) -> Option<&str> {
        match self {
            Entry::File(file) => Some(&file.kind),
            Entry::Folder(_) => None,
        }
    }

    /// Returns the date added for files; folders have none
    pub fn added(&self) -> Option<&DateStamp> {
        match self {
            Entry::File(file) => Some(&file.added),
            Entry::Folder(_) => None,
        }
    }
}

/// Default ordering of a catalog level
///
/// Folders sort before files; within each group, case-insensitive name
/// ascending. The raw name breaks ties between names differing only by
/// case, so the order is strict and total for any level with unique names.
pub fn default_order(a: &Entry, b: &Entry) -> Ordering {
    match (a, b) {
        (Entry::Folder(_), Entry::File(_)) => Ordering::Less,
        (Entry::File(_), Entry::Folder(_)) => Ordering::Greater,
        (Entry::File(_), Entry::File(_)) | (Entry::Folder(_), Entry::Folder(_)) => a
            .name()
            .to_lowercase()
            .cmp(&b.name().to_lowercase())
            .then_with(|| a.name().cmp(b.name())),
    }
}
