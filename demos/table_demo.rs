//! Example demonstrating the Document Table widget
//!
//! This example drives the widget the way a host renderer would: it sends
//! user intents and prints the frames the widget publishes back.

use document_tree::{sample_catalog, NavigationPath};
use services_document_table::{DocumentTable, SortField, TableIntent};
use view_types::{ViewContent, ViewFrame, ViewId};

fn print_frame(frame: &ViewFrame) {
    match &frame.content {
        ViewContent::Table { columns, rows } => {
            let headings: Vec<String> = columns
                .iter()
                .map(|column| format!("{} [{}]", column.label, column.indicator))
                .collect();
            println!("   {}", headings.join(" | "));
            for row in rows {
                let marker = if row.is_folder { "/" } else { " " };
                println!("   {}{}  {}  {}", row.name, marker, row.kind, row.added);
            }
        }
        ViewContent::Breadcrumbs { segments } => {
            println!("   {}", segments.join(" / "));
        }
        ViewContent::StatusLine { text } => {
            println!("   {}", text);
        }
    }
    println!();
}

fn main() {
    println!("=== Document Table Demo ===\n");

    let mut table = DocumentTable::new(sample_catalog());
    let table_view = ViewId::new();
    let crumb_view = ViewId::new();
    let status_view = ViewId::new();
    let mut revision = 0u64;
    let mut next_revision = || {
        revision += 1;
        revision
    };

    println!("1. Root level, default ordering (folders first)...");
    print_frame(&table.render_table(table_view, next_revision(), 0));

    println!("2. Filtering by name (\"emp\")...");
    table.apply(TableIntent::SetFilterText {
        text: "emp".to_string(),
    });
    print_frame(&table.render_table(table_view, next_revision(), 0));
    print_frame(&table.render_status_line(status_view, next_revision(), 0));

    println!("3. Opening the Expenses folder (filter resets)...");
    table.apply(TableIntent::NavigateTo {
        path: NavigationPath::from_segments(["Expenses"]),
    });
    print_frame(&table.render_breadcrumbs(crumb_view, next_revision(), 0));
    print_frame(&table.render_table(table_view, next_revision(), 0));

    println!("4. Sorting by date added (asc, then desc, then back to default)...");
    table.apply(TableIntent::ActivateSort {
        field: SortField::Added,
    });
    print_frame(&table.render_table(table_view, next_revision(), 0));
    table.apply(TableIntent::ActivateSort {
        field: SortField::Added,
    });
    print_frame(&table.render_table(table_view, next_revision(), 0));
    table.apply(TableIntent::ActivateSort {
        field: SortField::Added,
    });
    print_frame(&table.render_table(table_view, next_revision(), 0));

    println!("5. Navigating back up...");
    table.apply(TableIntent::NavigateUp);
    print_frame(&table.render_breadcrumbs(crumb_view, next_revision(), 0));
    print_frame(&table.render_status_line(status_view, next_revision(), 0));

    println!("=== Demo Complete ===");
    println!("\nKey Points:");
    println!("✓ Rows are a pure function of (tree, path, filter, sort)");
    println!("✓ Navigation resets filter and sort (transients are per-level)");
    println!("✓ Default ordering pins folders first; explicit sorts mix variants");
    println!("✓ Stale paths degrade to the deepest valid ancestor");
}
