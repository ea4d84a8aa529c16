// src/specs/countries.rs
// Country rows of the statistics page.
//
// Every `<a class="mt_a">` names a country; the `<tr>` around it carries the
// figures. The same country can appear in several tables (today/yesterday),
// deduplication happens later in the pipeline.

use tracing::debug;

use crate::config::options::ColumnLayout;
use crate::core::html::{has_class, inner_after_open_tag, open_tag, TagScanner};
use crate::core::sanitize::cell_text;
use crate::pipeline::RawCountryRow;

pub fn extract_country_rows(html_doc: &str, layout: &ColumnLayout) -> Vec<RawCountryRow> {
    let doc = TagScanner::new(html_doc);
    let mut rows_out = Vec::new();

    for tr in doc.blocks("<tr", "</tr>") {
        // cheap precheck before splitting cells
        if !tr.contains(layout.name_class.as_str()) { continue; }

        let row = TagScanner::new(tr);
        let cells: Vec<&str> = row.blocks("<td", "</td>").collect();

        let Some(name) = cells.iter().find_map(|td| country_name(td, &layout.name_class)) else {
            continue;
        };

        // 1-based positions; a short row gives empty strings
        let cell = |n: usize| -> String {
            n.checked_sub(1)
                .and_then(|i| cells.get(i))
                .map(|td| cell_text(inner_after_open_tag(td)))
                .unwrap_or_default()
        };

        rows_out.push(RawCountryRow {
            name,
            total_cases: cell(layout.total_cases),
            total_deaths: cell(layout.total_deaths),
            total_tests: cell(layout.total_tests),
            tests_per_million: cell(layout.tests_per_million),
        });
    }

    debug!(rows = rows_out.len(), "extracted country rows");
    rows_out
}

/// Text of the first anchor with `class_name` inside a `<td>` block.
fn country_name(td: &str, class_name: &str) -> Option<String> {
    let cell = TagScanner::new(td);
    cell.blocks("<a", "</a>")
        .find(|a| has_class(open_tag(a), class_name))
        .map(|a| cell_text(inner_after_open_tag(a)))
}
