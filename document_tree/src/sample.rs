//! Built-in sample catalog
//!
//! The fixed mock dataset the widget browses when the host does not supply
//! its own tree.

use crate::entry::{DateStamp, Entry};
use crate::tree::DocumentTree;

/// Builds the sample document catalog
pub fn sample_catalog() -> DocumentTree {
    DocumentTree::new(vec![
        Entry::folder(
            "Expenses",
            vec![
                Entry::file("Receipt 2023.pdf", "pdf", DateStamp::new("2023-07-14")),
                Entry::file("Expenses claim form.doc", "doc", DateStamp::new("2023-05-02")),
                Entry::file("Fuel allowances.doc", "doc", DateStamp::new("2023-03-21")),
                Entry::folder(
                    "Archive",
                    vec![Entry::file("Receipt 2022.pdf", "pdf", DateStamp::new("2022-12-01"))],
                ),
            ],
        ),
        Entry::folder(
            "Misc",
            vec![
                Entry::file("Christmas party.jpg", "jpg", DateStamp::new("2022-12-16")),
                Entry::file("Welcome pack.zip", "zip", DateStamp::new("2021-09-01")),
            ],
        ),
        Entry::file("Employee Handbook", "pdf", DateStamp::new("2023-06-26")),
        Entry::file("Budget.csv", "csv", DateStamp::new("2023-11-05")),
        Entry::file("Cost centres.csv", "csv", DateStamp::new("2023-02-17")),
        Entry::file("Public holiday policy.pdf", "pdf", DateStamp::new("2022-12-28")),
    ])
    .expect("sample catalog names are unique per level")
}
