// src/specs/allowlist.rs
// Optional country allowlist, read from a page that lists countries as `<td><a>Name</a></td>`.

use std::collections::HashSet;

use tracing::debug;

use crate::config::options::FetchOptions;
use crate::core::html::{inner_after_open_tag, TagScanner};
use crate::core::net;
use crate::core::sanitize::cell_text;
use crate::error::FetchError;

/// Source spellings that differ from the statistics page.
const ALIASES: &[(&str, &str)] = &[
    ("United States", "USA"),
    ("Trinidad And Tobago", "Trinidad and Tobago"),
    ("United Kingdom", "UK"),
    ("Czech Republic", "Czechia"),
    ("Antigua And Barbuda", "Antigua and Barbuda"),
];

pub fn fetch_allowlist(url: &str, opts: &FetchOptions) -> Result<HashSet<String>, FetchError> {
    let html_doc = net::http_get(url, opts)?;
    let names = parse_allowlist(&html_doc);
    debug!(%url, names = names.len(), "allowlist loaded");
    Ok(names)
}

/// Every anchor text inside a `<td>`, mapped to the statistics page's spelling.
pub fn parse_allowlist(html_doc: &str) -> HashSet<String> {
    let doc = TagScanner::new(html_doc);
    let mut out = HashSet::new();

    for td in doc.blocks("<td", "</td>") {
        let cell = TagScanner::new(td);
        for a in cell.blocks("<a", "</a>") {
            let name = cell_text(inner_after_open_tag(a));
            if name.is_empty() { continue; }
            out.insert(canonical_name(&name));
        }
    }
    out
}

pub fn canonical_name(name: &str) -> String {
    ALIASES
        .iter()
        .find(|(from, _)| *from == name)
        .map(|(_, to)| s!(*to))
        .unwrap_or_else(|| s!(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliases_map_to_stats_spelling() {
        assert_eq!(canonical_name("United States"), "USA");
        assert_eq!(canonical_name("Czech Republic"), "Czechia");
        assert_eq!(canonical_name("France"), "France");
    }

    #[test]
    fn collects_anchors_inside_cells_only() {
        let html = r#"
            <nav><a href="/">Home</a></nav>
            <table>
              <tr><td><a href="/us">United States</a></td><td>331,002,651</td></tr>
              <tr><td><a href="/fr">France</a></td><td>65,273,511</td></tr>
              <tr><td><a href="/uk">United&nbsp;Kingdom</a></td><td>67,886,011</td></tr>
            </table>"#;
        let names = parse_allowlist(html);
        let mut v: Vec<_> = names.into_iter().collect();
        v.sort();
        assert_eq!(v, vec!["France", "UK", "USA"]);
    }
}
