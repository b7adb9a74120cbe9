//! Table state and view derivation
//!
//! This module holds the widget's transient state (navigation path, filter
//! text, sort directive) and the pure derivation pipeline that turns that
//! state into the visible row set.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use document_tree::{DateStamp, DocumentTree, Entry, NavigationPath};
use serde::{Deserialize, Serialize};
use view_types::SortIndicator;

use crate::sort::{cycle_sort, order_entries, SortDirection, SortField, SortKey};

/// A user intent forwarded by the presentation layer
///
/// Intents are plain data so a host can ship them across any boundary it
/// likes (DOM events, key bindings, test scripts) and replay them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TableIntent {
    /// Replace the navigation path wholesale (breadcrumb jump, folder open)
    NavigateTo { path: NavigationPath },
    /// Go back up one level
    NavigateUp,
    /// Activate the sort control of one column
    ActivateSort { field: SortField },
    /// Replace the filter text (last write wins)
    SetFilterText { text: String },
}

/// One derived row of the table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableEntry {
    /// Entry name
    pub name: String,
    /// Kind tag; folders have none
    pub kind: Option<String>,
    /// Date added; folders have none
    pub added: Option<DateStamp>,
    /// Whether this row opens a folder
    pub is_folder: bool,
}

impl TableEntry {
    fn from_entry(entry: &Entry) -> Self {
        match entry {
            Entry::File(file) => Self {
                name: file.name.clone(),
                kind: Some(file.kind.clone()),
                added: Some(file.added.clone()),
                is_folder: false,
            },
            Entry::Folder(folder) => Self {
                name: folder.name.clone(),
                kind: None,
                added: None,
                is_folder: true,
            },
        }
    }

    /// Returns the kind cell text; folders render an empty cell
    pub fn kind_text(&self) -> &str {
        self.kind.as_deref().unwrap_or("")
    }

    /// Returns the raw date stamp text; folders render an empty cell
    pub fn added_text(&self) -> String {
        self.added
            .as_ref()
            .map(|stamp| stamp.as_str().to_string())
            .unwrap_or_default()
    }
}

/// Keeps the entries whose name contains the filter text
///
/// Matching is case-insensitive and shallow: folders whose descendants
/// would match are still excluded when their own name does not. Empty
/// filter text is the identity.
pub fn filter_entries<'a>(entries: &'a [Entry], filter_text: &str) -> Vec<&'a Entry> {
    if filter_text.is_empty() {
        return entries.iter().collect();
    }

    let needle = filter_text.to_lowercase();
    entries
        .iter()
        .filter(|entry| entry.name().to_lowercase().contains(&needle))
        .collect()
}

/// Derives the visible row set for one combination of inputs
///
/// Resolve the path (graceful), filter the level, order it. Pure: the same
/// four inputs always produce the same output, so callers may memoize on
/// the tuple or simply recompute.
pub fn derive_view<'a>(
    tree: &'a DocumentTree,
    path: &NavigationPath,
    filter_text: &str,
    directive: Option<SortKey>,
) -> Vec<&'a Entry> {
    let level = tree.resolve(path);
    let kept = filter_entries(level, filter_text);
    order_entries(kept, directive)
}

/// The document table widget
///
/// Owns the immutable catalog plus all transient browsing state, and keeps
/// an eagerly refreshed row projection for the presentation layer. Every
/// intent applies atomically: state is updated, then the rows are re-derived
/// before the next intent is seen.
#[derive(Debug, Clone)]
pub struct DocumentTable {
    tree: DocumentTree,
    path: NavigationPath,
    filter_text: String,
    sort: Option<SortKey>,
    rows: Vec<TableEntry>,
}

impl DocumentTable {
    /// Creates a table over the given catalog, viewing the root
    pub fn new(tree: DocumentTree) -> Self {
        let mut table = Self {
            tree,
            path: NavigationPath::root(),
            filter_text: String::new(),
            sort: None,
            rows: Vec::new(),
        };
        table.refresh_rows();
        table
    }

    /// Applies one user intent
    pub fn apply(&mut self, intent: TableIntent) {
        match intent {
            TableIntent::NavigateTo { path } => self.navigate_to(path),
            TableIntent::NavigateUp => self.navigate_up(),
            TableIntent::ActivateSort { field } => self.activate_sort(field),
            TableIntent::SetFilterText { text } => self.set_filter_text(text),
        }
    }

    /// Replaces the navigation path wholesale
    ///
    /// Filter text and sort directive are scoped to the level being viewed,
    /// so both reset unconditionally.
    pub fn navigate_to(&mut self, path: NavigationPath) {
        self.path = path;
        self.filter_text.clear();
        self.sort = None;
        self.refresh_rows();
    }

    /// Navigates back up one level; at the root this is a no-op
    pub fn navigate_up(&mut self) {
        self.navigate_to(self.path.parent());
    }

    /// Activates the sort control of a column
    ///
    /// Cycles the active field none → ascending → descending → none;
    /// a different field starts over at ascending. Path and filter are
    /// untouched.
    pub fn activate_sort(&mut self, field: SortField) {
        self.sort = cycle_sort(self.sort, field);
        self.refresh_rows();
    }

    /// Replaces the filter text; path and sort are untouched
    pub fn set_filter_text(&mut self, text: impl Into<String>) {
        self.filter_text = text.into();
        self.refresh_rows();
    }

    /// Returns the derived rows in display order
    pub fn rows(&self) -> &[TableEntry] {
        &self.rows
    }

    /// Returns the current navigation path (for breadcrumb rendering)
    pub fn path(&self) -> &NavigationPath {
        &self.path
    }

    /// Returns the current filter text
    pub fn filter_text(&self) -> &str {
        &self.filter_text
    }

    /// Returns the active sort directive, if any
    pub fn sort(&self) -> Option<SortKey> {
        self.sort
    }

    /// Returns the visual sort state of one column
    pub fn indicator(&self, field: SortField) -> SortIndicator {
        match self.sort {
            Some(key) if key.field == field => match key.direction {
                SortDirection::Ascending => SortIndicator::Ascending,
                SortDirection::Descending => SortIndicator::Descending,
            },
            _ => SortIndicator::Unsorted,
        }
    }

    /// Returns the underlying catalog
    pub fn tree(&self) -> &DocumentTree {
        &self.tree
    }

    fn refresh_rows(&mut self) {
        self.rows = derive_view(&self.tree, &self.path, &self.filter_text, self.sort)
            .into_iter()
            .map(TableEntry::from_entry)
            .collect();
    }
}
