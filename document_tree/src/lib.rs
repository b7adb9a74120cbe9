//! # Document Tree
//!
//! This crate provides the in-memory document catalog browsed by the
//! document table widget.
//!
//! ## Philosophy
//!
//! - **Static data, immutable truth**: The tree is built once and never
//!   mutated afterwards; browsing state lives elsewhere
//! - **Names are the key**: Entries are looked up by name, unique within
//!   each folder, no ids and no global paths
//! - **Invalid paths degrade, never fail**: Resolving a stale navigation
//!   path lands on the deepest valid ancestor instead of erroring
//! - **Testable**: The whole model is plain data with deterministic ordering
//!
//! ## Design
//!
//! - An [`Entry`] is either a `File` (name, kind tag, date added) or a
//!   `Folder` (name, ordered children)
//! - [`DocumentTree::new`] rejects duplicate names per level and normalizes
//!   every level into the default ordering (folders first, then
//!   case-insensitive name ascending)
//! - A [`NavigationPath`] is an ordered list of folder names walked from the
//!   root; resolution is total

pub mod entry;
pub mod path;
pub mod sample;
pub mod tree;

pub use entry::{default_order, DateStamp, Entry, FileEntry, FolderEntry};
pub use path::NavigationPath;
pub use sample::sample_catalog;
pub use tree::{DocumentTree, TreeError};
