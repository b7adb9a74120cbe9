//! Sort policy
//!
//! This module defines the sortable columns, the tri-state activation
//! cycle, and the ordering applied to a derived level.

use core::cmp::Ordering;

use alloc::vec::Vec;
use document_tree::{default_order, Entry};
use serde::{Deserialize, Serialize};

/// Sortable table column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortField {
    /// Entry name
    Name,
    /// File kind tag; folders carry no value
    Kind,
    /// Date added; folders carry no value
    Added,
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// An active sort directive: one field, one direction
///
/// `None` at the call sites means the default ordering applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortKey {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortKey {
    /// Creates an ascending sort key
    pub fn ascending(field: SortField) -> Self {
        Self {
            field,
            direction: SortDirection::Ascending,
        }
    }

    /// Creates a descending sort key
    pub fn descending(field: SortField) -> Self {
        Self {
            field,
            direction: SortDirection::Descending,
        }
    }
}

/// Advances the sort directive for one activation of a sort control
///
/// Repeated activation of the active field cycles
/// none → ascending → descending → none. Activating a different field
/// jumps straight to ascending on that field.
pub fn cycle_sort(current: Option<SortKey>, field: SortField) -> Option<SortKey> {
    match current {
        Some(key) if key.field == field => match key.direction {
            SortDirection::Ascending => Some(SortKey::descending(field)),
            SortDirection::Descending => None,
        },
        _ => Some(SortKey::ascending(field)),
    }
}

/// Orders a derived level
///
/// With no directive, the default ordering applies: folders before files,
/// case-insensitive name ascending within each group. With a directive,
/// a single-key stable sort runs across all entries, folders and files
/// mixed; a folder projects the empty value for the kind and added fields.
pub fn order_entries<'a>(mut entries: Vec<&'a Entry>, directive: Option<SortKey>) -> Vec<&'a Entry> {
    match directive {
        None => entries.sort_by(|a, b| default_order(a, b)),
        Some(key) => entries.sort_by(|a, b| {
            let ordering = compare_field(a, b, key.field);
            match key.direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        }),
    }
    entries
}

fn compare_field(a: &Entry, b: &Entry, field: SortField) -> Ordering {
    match field {
        SortField::Name => a.name().to_lowercase().cmp(&b.name().to_lowercase()),
        SortField::Kind => kind_key(a).cmp(kind_key(b)),
        SortField::Added => added_key(a).cmp(added_key(b)),
    }
}

fn kind_key(entry: &Entry) -> &str {
    match entry {
        Entry::File(file) => &file.kind,
        Entry::Folder(_) => "",
    }
}

fn added_key(entry: &Entry) -> &str {
    match entry {
        Entry::File(file) => file.added.as_str(),
        Entry::Folder(_) => "",
    }
}
