//! Rendering logic for the document table
//!
//! This module handles converting widget state into ViewFrames for the
//! host renderer.

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;

use document_tree::DateStamp;
use view_types::{ColumnHeading, TableRow, ViewContent, ViewFrame, ViewId, ViewKind};

use crate::sort::SortField;
use crate::table::{DocumentTable, TableEntry};

/// Label of the breadcrumb root segment
const ROOT_LABEL: &str = "Documents";

impl DocumentTable {
    /// Renders the table frame: column headings plus the derived rows
    pub fn render_table(&self, view_id: ViewId, revision: u64, timestamp_ns: u64) -> ViewFrame {
        let columns = vec![
            ColumnHeading::new("Type", self.indicator(SortField::Kind)),
            ColumnHeading::new("Name", self.indicator(SortField::Name)),
            ColumnHeading::new("Added", self.indicator(SortField::Added)),
        ];

        let rows = self.rows().iter().map(render_row).collect();

        ViewFrame::new(
            view_id,
            ViewKind::Table,
            revision,
            ViewContent::table(columns, rows),
            timestamp_ns,
        )
        .with_title(ROOT_LABEL)
    }

    /// Renders the breadcrumb frame for the stored navigation path
    ///
    /// Segments render as stored, stale tail included, so the trail always
    /// reflects what the user asked for.
    pub fn render_breadcrumbs(&self, view_id: ViewId, revision: u64, timestamp_ns: u64) -> ViewFrame {
        ViewFrame::new(
            view_id,
            ViewKind::Breadcrumbs,
            revision,
            ViewContent::breadcrumbs(self.breadcrumb_segments()),
            timestamp_ns,
        )
    }

    /// Renders the status line view frame
    pub fn render_status_line(&self, view_id: ViewId, revision: u64, timestamp_ns: u64) -> ViewFrame {
        let trail = self.breadcrumb_segments().join(" / ");

        let status_text = if self.rows().is_empty() {
            if self.filter_text().is_empty() {
                format!("{} — Empty", trail)
            } else {
                format!("{} — No matches for \"{}\"", trail, self.filter_text())
            }
        } else {
            format!("{} — {} items", trail, self.rows().len())
        };

        ViewFrame::new(
            view_id,
            ViewKind::StatusLine,
            revision,
            ViewContent::status_line(status_text),
            timestamp_ns,
        )
    }

    /// Returns the breadcrumb segments, root label first
    pub fn breadcrumb_segments(&self) -> Vec<String> {
        let mut segments = vec![ROOT_LABEL.to_string()];
        segments.extend(self.path().segments().iter().cloned());
        segments
    }
}

fn render_row(entry: &TableEntry) -> TableRow {
    if entry.is_folder {
        TableRow::folder(entry.name.clone())
    } else {
        let added = entry
            .added
            .as_ref()
            .map(format_added)
            .unwrap_or_default();
        TableRow::file(entry.name.clone(), entry.kind_text(), added)
    }
}

/// Formats an ISO `yyyy-mm-dd` stamp as `dd/mm/yyyy` for the date cell
///
/// A stamp that is not three dash-separated parts renders as-is.
fn format_added(stamp: &DateStamp) -> String {
    let mut parts = stamp.as_str().splitn(3, '-');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(year), Some(month), Some(day)) => format!("{}/{}/{}", day, month, year),
        _ => stamp.as_str().to_string(),
    }
}
