#![no_std]

//! # View Types
//!
//! This crate defines the stable, serializable view schemas the document
//! table widget publishes to its host renderer.
//!
//! ## Philosophy
//!
//! - **Views, not widgets**: Output is structured frames; how they are
//!   drawn (HTML table, TUI grid, test harness) is the host's business
//! - **Immutable frames**: View frames are immutable; updates replace by
//!   revision
//! - **Derived, never authoritative**: Frames mirror widget state; the host
//!   holds no independent copy of the truth
//! - **Testable**: Frames are serializable and can be snapshot-tested
//!
//! ## Non-Goals
//!
//! This is NOT:
//! - A layout or styling system
//! - A full UI toolkit
//! - An event/input schema

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ViewId(Uuid);

impl ViewId {
    /// Creates a new unique view ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a ViewId from an existing UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID value
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for ViewId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "view:{}", self.0)
    }
}

/// Type of view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewKind {
    /// The document table itself (headers plus rows)
    Table,
    /// Breadcrumb trail for the current navigation path
    Breadcrumbs,
    /// Status line view (single line of status)
    StatusLine,
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewKind::Table => write!(f, "Table"),
            ViewKind::Breadcrumbs => write!(f, "Breadcrumbs"),
            ViewKind::StatusLine => write!(f, "StatusLine"),
        }
    }
}

/// Visual sort state of a table column
///
/// Each sortable column is in exactly one of three states, cycled by the
/// widget's sort policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortIndicator {
    /// Column is not the active sort key
    Unsorted,
    /// Column sorts ascending
    Ascending,
    /// Column sorts descending
    Descending,
}

impl fmt::Display for SortIndicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortIndicator::Unsorted => write!(f, "Unsorted"),
            SortIndicator::Ascending => write!(f, "Ascending"),
            SortIndicator::Descending => write!(f, "Descending"),
        }
    }
}

/// A column heading in the table frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnHeading {
    /// Display label
    pub label: String,
    /// Current sort state for highlighting the sort control
    pub indicator: SortIndicator,
}

impl ColumnHeading {
    /// Creates a new column heading
    pub fn new(label: impl Into<String>, indicator: SortIndicator) -> Self {
        Self {
            label: label.into(),
            indicator,
        }
    }
}

/// A single rendered table row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    /// Entry name
    pub name: String,
    /// Kind tag cell; empty for folders
    pub kind: String,
    /// Formatted date cell; empty for folders
    pub added: String,
    /// Whether the row opens a folder when activated
    pub is_folder: bool,
}

impl TableRow {
    /// Creates a file row
    pub fn file(name: impl Into<String>, kind: impl Into<String>, added: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            added: added.into(),
            is_folder: false,
        }
    }

    /// Creates a folder row; kind and date cells stay empty
    pub fn folder(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: String::new(),
            added: String::new(),
            is_folder: true,
        }
    }
}

/// View frame - immutable snapshot of view state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewFrame {
    /// Unique view identifier
    pub view_id: ViewId,
    /// Type of view
    pub kind: ViewKind,
    /// Monotonic revision number (must increase with each update)
    pub revision: u64,
    /// View content
    pub content: ViewContent,
    /// Optional title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Component ID that owns this view
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_id: Option<String>,
    /// Timestamp when frame was created (host time in nanoseconds)
    pub timestamp_ns: u64,
}

impl ViewFrame {
    /// Creates a new view frame
    pub fn new(
        view_id: ViewId,
        kind: ViewKind,
        revision: u64,
        content: ViewContent,
        timestamp_ns: u64,
    ) -> Self {
        Self {
            view_id,
            kind,
            revision,
            content,
            title: None,
            component_id: None,
            timestamp_ns,
        }
    }

    /// Sets the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the component ID
    pub fn with_component_id(mut self, component_id: impl Into<String>) -> Self {
        self.component_id = Some(component_id.into());
        self
    }

    /// Checks if this frame's revision is newer than another
    pub fn is_newer_than(&self, other: &ViewFrame) -> bool {
        self.view_id == other.view_id && self.revision > other.revision
    }

    /// Checks if this frame's revision is compatible (monotonic increase)
    pub fn is_valid_successor(&self, previous: &ViewFrame) -> bool {
        self.view_id == previous.view_id && self.revision > previous.revision
    }
}

/// Content of a view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewContent {
    /// Document table content
    Table {
        /// Column headings with sort indicators
        columns: Vec<ColumnHeading>,
        /// Rendered rows in display order
        rows: Vec<TableRow>,
    },
    /// Breadcrumb trail (root label first)
    Breadcrumbs { segments: Vec<String> },
    /// Status line content (single line)
    StatusLine { text: String },
}

impl ViewContent {
    /// Creates table content
    pub fn table(columns: Vec<ColumnHeading>, rows: Vec<TableRow>) -> Self {
        ViewContent::Table { columns, rows }
    }

    /// Creates breadcrumb content
    pub fn breadcrumbs(segments: Vec<String>) -> Self {
        ViewContent::Breadcrumbs { segments }
    }

    /// Creates status line content
    pub fn status_line(text: impl Into<String>) -> Self {
        ViewContent::StatusLine { text: text.into() }
    }

    /// Returns the number of rows (for Table)
    pub fn row_count(&self) -> usize {
        match self {
            ViewContent::Table { rows, .. } => rows.len(),
            ViewContent::Breadcrumbs { segments } => segments.len(),
            ViewContent::StatusLine { .. } => 1,
        }
    }
}
