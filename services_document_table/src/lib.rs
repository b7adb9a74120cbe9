//! # Document Table Service
//!
//! A virtual document table component: browse a folder tree one level at a
//! time, filter the level by name, and sort it by column.
//!
//! ## Philosophy
//!
//! - **Deterministic**: The visible rows are a pure function of
//!   (tree, path, filter, sort); same inputs, same rows
//! - **Explicit state**: Navigation path, filter text, and sort directive
//!   live in one struct, not in ambient component state
//! - **Scoped transients**: Filter and sort belong to the level being
//!   viewed; every navigation action resets both
//! - **Testable**: All policy (tri-state sort cycling, graceful path
//!   degradation, folder pinning) is exercised without a rendering harness
//!
//! ## Features
//!
//! - Navigate into folders, back up a level, or jump via breadcrumb
//! - Case-insensitive substring filter on entry names
//! - Tri-state column sorting: none → ascending → descending → none
//! - Default ordering pins folders above files; an explicit column sort
//!   mixes the two variants
//!
//! ## Example
//!
//! ```ignore
//! use document_tree::{sample_catalog, NavigationPath};
//! use services_document_table::{DocumentTable, SortField, TableIntent};
//!
//! let mut table = DocumentTable::new(sample_catalog());
//!
//! table.apply(TableIntent::NavigateTo {
//!     path: NavigationPath::from_segments(["Expenses"]),
//! });
//! table.apply(TableIntent::ActivateSort { field: SortField::Added });
//!
//! for row in table.rows() {
//!     // render a row
//! }
//! ```

extern crate alloc;

pub mod render;
pub mod sort;
pub mod table;

pub use sort::{cycle_sort, order_entries, SortDirection, SortField, SortKey};
pub use table::{derive_view, filter_entries, DocumentTable, TableEntry, TableIntent};
