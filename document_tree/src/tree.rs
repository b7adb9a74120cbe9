//! Document tree construction and path resolution

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::entry::{default_order, Entry};
use crate::path::NavigationPath;

/// Errors that can occur while building a document tree
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TreeError {
    /// Two entries in the same folder share a name
    #[error("Duplicate entry name: {0}")]
    DuplicateName(String),
}

/// The immutable document catalog
///
/// Built once from a list of top-level entries; construction validates the
/// per-level name-uniqueness invariant and normalizes every level into the
/// default ordering, so the stored order of any level is the order the
/// widget shows when no explicit sort is active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentTree {
    root: Vec<Entry>,
}

impl DocumentTree {
    /// Builds a tree from top-level entries
    ///
    /// Returns an error if any folder (including the root level) contains
    /// two entries with the same name.
    pub fn new(mut entries: Vec<Entry>) -> Result<Self, TreeError> {
        check_unique_names(&entries)?;
        normalize(&mut entries);
        Ok(Self { root: entries })
    }

    /// Returns the top-level entries
    pub fn root_entries(&self) -> &[Entry] {
        &self.root
    }

    /// Resolves a navigation path to the entries visible at that level
    ///
    /// Walks the path one folder name at a time. A segment that does not
    /// name a folder at the current level ends the walk: the children of
    /// the deepest valid ancestor are returned. Resolution never fails, so
    /// a stale path degrades to a valid view instead of crashing it.
    pub fn resolve(&self, path: &NavigationPath) -> &[Entry] {
        let mut level: &[Entry] = &self.root;

        for segment in path.segments() {
            let next = level.iter().find_map(|entry| match entry {
                Entry::Folder(folder) if folder.name == *segment => {
                    Some(folder.children.as_slice())
                }
                _ => None,
            });

            match next {
                Some(children) => level = children,
                None => break,
            }
        }

        level
    }
}

fn check_unique_names(entries: &[Entry]) -> Result<(), TreeError> {
    let mut seen = HashSet::new();

    for entry in entries {
        if !seen.insert(entry.name()) {
            return Err(TreeError::DuplicateName(entry.name().to_string()));
        }
        if let Entry::Folder(folder) = entry {
            check_unique_names(&folder.children)?;
        }
    }

    Ok(())
}

fn normalize(entries: &mut [Entry]) {
    entries.sort_by(default_order);
    for entry in entries.iter_mut() {
        if let Entry::Folder(folder) = entry {
            normalize(&mut folder.children);
        }
    }
}
