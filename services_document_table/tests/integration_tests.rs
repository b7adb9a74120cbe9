//! Integration tests for the document table widget
//!
//! These tests validate the complete browsing behavior including:
//! - Default ordering and the folder-pinning asymmetry
//! - Tri-state sort cycling and field switching
//! - Filter scoping and navigation resets
//! - Graceful handling of stale navigation paths

use document_tree::{sample_catalog, DateStamp, DocumentTree, Entry, NavigationPath};
use services_document_table::{
    derive_view, order_entries, DocumentTable, SortField, SortKey, TableIntent,
};
use view_types::{SortIndicator, ViewContent, ViewId};

fn row_names(table: &DocumentTable) -> Vec<String> {
    table.rows().iter().map(|row| row.name.clone()).collect()
}

#[test]
fn test_default_ordering_totality() {
    let table = DocumentTable::new(sample_catalog());
    let rows = table.rows();

    // All folders come before all files
    let first_file = rows.iter().position(|row| !row.is_folder);
    if let Some(boundary) = first_file {
        assert!(rows[boundary..].iter().all(|row| !row.is_folder));
    }

    // Within each group, names are strictly ascending (case-insensitive)
    for pair in rows.windows(2) {
        if pair[0].is_folder == pair[1].is_folder {
            assert!(pair[0].name.to_lowercase() < pair[1].name.to_lowercase());
        }
    }
}

#[test]
fn test_sort_cycle_law() {
    for field in [SortField::Name, SortField::Kind, SortField::Added] {
        let mut table = DocumentTable::new(sample_catalog());
        let default_rows = row_names(&table);

        table.activate_sort(field);
        table.activate_sort(field);
        table.activate_sort(field);

        assert_eq!(table.sort(), None);
        assert_eq!(row_names(&table), default_rows);
    }
}

#[test]
fn test_field_switch_law() {
    let mut table = DocumentTable::new(sample_catalog());

    table.activate_sort(SortField::Name);
    assert_eq!(table.sort(), Some(SortKey::ascending(SortField::Name)));

    table.activate_sort(SortField::Added);
    assert_eq!(table.sort(), Some(SortKey::ascending(SortField::Added)));
    assert_eq!(table.indicator(SortField::Name), SortIndicator::Unsorted);
}

#[test]
fn test_navigation_resets_transient_state() {
    let paths = [
        NavigationPath::from_segments(["Expenses"]),
        NavigationPath::from_segments(["Expenses", "Archive"]),
        NavigationPath::root(),
        NavigationPath::from_segments(["No such folder"]),
    ];

    for path in paths {
        let mut table = DocumentTable::new(sample_catalog());
        table.set_filter_text("receipt");
        table.activate_sort(SortField::Kind);
        table.activate_sort(SortField::Kind);

        table.navigate_to(path);

        assert_eq!(table.filter_text(), "");
        assert_eq!(table.sort(), None);
    }
}

#[test]
fn test_filter_containment() {
    let tree = sample_catalog();
    let mut table = DocumentTable::new(tree.clone());
    table.set_filter_text("en");

    let kept: Vec<String> = row_names(&table);
    for name in &kept {
        assert!(name.to_lowercase().contains("en"));
    }
    for entry in tree.root_entries() {
        if !entry.name().to_lowercase().contains("en") {
            assert!(!kept.contains(&entry.name().to_string()));
        }
    }
}

#[test]
fn test_derivation_is_idempotent() {
    let tree = sample_catalog();
    let path = NavigationPath::from_segments(["Expenses"]);
    let directive = Some(SortKey::descending(SortField::Added));

    let first = derive_view(&tree, &path, "re", directive);
    let second = derive_view(&tree, &path, "re", directive);

    assert_eq!(first, second);
}

#[test]
fn test_scenario_open_folder_shows_only_its_contents() {
    let tree = DocumentTree::new(vec![
        Entry::folder(
            "Expenses",
            vec![Entry::file("Receipt 2023.pdf", "pdf", DateStamp::new("2023-07-14"))],
        ),
        Entry::file("Employee Handbook", "pdf", DateStamp::new("2023-06-26")),
    ])
    .unwrap();

    let mut table = DocumentTable::new(tree);
    table.navigate_to(NavigationPath::from_segments(["Expenses"]));

    assert_eq!(row_names(&table), ["Receipt 2023.pdf"]);
}

#[test]
fn test_scenario_filter_matches_single_file() {
    let tree = DocumentTree::new(vec![
        Entry::file("Employee Handbook", "pdf", DateStamp::new("2023-06-26")),
        Entry::file("Budget.csv", "csv", DateStamp::new("2023-11-05")),
        Entry::folder("Expenses", Vec::new()),
    ])
    .unwrap();

    let mut table = DocumentTable::new(tree);
    table.set_filter_text("emp");

    assert_eq!(row_names(&table), ["Employee Handbook"]);
}

#[test]
fn test_scenario_explicit_name_sort_does_not_pin_folders() {
    let tree = DocumentTree::new(vec![
        Entry::file("Alpha.doc", "doc", DateStamp::new("2023-01-01")),
        Entry::folder("Zeta", Vec::new()),
    ])
    .unwrap();

    // Default ordering pins the folder first
    let table = DocumentTable::new(tree.clone());
    assert_eq!(row_names(&table), ["Zeta", "Alpha.doc"]);

    // Explicit ascending name sort mixes variants alphabetically
    let mut table = DocumentTable::new(tree);
    table.activate_sort(SortField::Name);
    assert_eq!(row_names(&table), ["Alpha.doc", "Zeta"]);
}

#[test]
fn test_scenario_mixed_level_name_sort() {
    let tree = DocumentTree::new(vec![
        Entry::file("Zeta.doc", "doc", DateStamp::new("2023-01-01")),
        Entry::file("Alpha.doc", "doc", DateStamp::new("2023-01-02")),
        Entry::folder("Mid", Vec::new()),
    ])
    .unwrap();

    let mut table = DocumentTable::new(tree);
    table.activate_sort(SortField::Name);

    assert_eq!(row_names(&table), ["Alpha.doc", "Mid", "Zeta.doc"]);
}

#[test]
fn test_scenario_no_match_filter_yields_empty() {
    let mut table = DocumentTable::new(sample_catalog());
    table.set_filter_text("xyz-no-match");
    assert!(table.rows().is_empty());

    table.navigate_to(NavigationPath::from_segments(["Expenses"]));
    table.set_filter_text("xyz-no-match");
    assert!(table.rows().is_empty());
}

#[test]
fn test_filter_and_sort_compose() {
    let mut table = DocumentTable::new(sample_catalog());
    table.set_filter_text("e");
    table.activate_sort(SortField::Name);

    let expected: Vec<String> = {
        let tree = sample_catalog();
        let mut kept: Vec<&Entry> = tree
            .root_entries()
            .iter()
            .filter(|entry| entry.name().to_lowercase().contains('e'))
            .collect();
        kept = order_entries(kept, Some(SortKey::ascending(SortField::Name)));
        kept.iter().map(|entry| entry.name().to_string()).collect()
    };

    assert_eq!(row_names(&table), expected);
}

#[test]
fn test_stale_path_still_renders() {
    let mut table = DocumentTable::new(sample_catalog());
    table.navigate_to(NavigationPath::from_segments(["Expenses", "Gone"]));

    // The view degrades to the deepest valid ancestor
    assert_eq!(table.rows().len(), 4);

    // Breadcrumbs keep the stored path
    let frame = table.render_breadcrumbs(ViewId::new(), 1, 0);
    match &frame.content {
        ViewContent::Breadcrumbs { segments } => {
            assert_eq!(segments, &["Documents", "Expenses", "Gone"]);
        }
        _ => panic!("Expected Breadcrumbs content"),
    }
}

#[test]
fn test_intent_driven_session() {
    let mut table = DocumentTable::new(sample_catalog());

    table.apply(TableIntent::NavigateTo {
        path: NavigationPath::from_segments(["Expenses"]),
    });
    table.apply(TableIntent::ActivateSort {
        field: SortField::Added,
    });

    let frame = table.render_table(ViewId::new(), 1, 0);
    match &frame.content {
        ViewContent::Table { columns, rows } => {
            assert_eq!(columns[2].indicator, SortIndicator::Ascending);
            // Ascending by date: the folder (no value) leads, then files old to new
            assert_eq!(rows[0].name, "Archive");
            assert_eq!(rows[1].name, "Fuel allowances.doc");
            assert_eq!(rows[2].name, "Expenses claim form.doc");
            assert_eq!(rows[3].name, "Receipt 2023.pdf");
        }
        _ => panic!("Expected Table content"),
    }

    table.apply(TableIntent::NavigateUp);
    assert!(table.path().is_root());
    assert_eq!(table.rows().len(), 6);
}
