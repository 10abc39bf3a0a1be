//! Table formatting utilities for CLI output.

use comfy_table::{presets, ContentArrangement, Table};
use msgtree::Coverage;

/// Format coverage data as a table.
pub fn format_coverage_table(coverage: &[Coverage]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Language", "Coverage", "Missing"]);

    for language in coverage {
        table.add_row(vec![
            language.language.to_string(),
            format!("{}/{}", language.translated, language.total),
            language.missing.len().to_string(),
        ]);
    }

    table
}
