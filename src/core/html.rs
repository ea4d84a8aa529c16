// src/core/html.rs
// Tag-scanning helpers for table-shaped HTML.
// Tag and attribute names match case-insensitively (ASCII); text is returned untouched.

/// ASCII-only lowercasing. Keeps byte offsets identical to the input,
/// so indices found in the lowered copy slice the original.
pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii() { c.to_ascii_lowercase() } else { c })
        .collect()
}

/// A document plus its lowered copy, so repeated block searches
/// don't re-lowercase the whole page every time.
pub struct TagScanner<'a> {
    src: &'a str,
    lc: String,
}

impl<'a> TagScanner<'a> {
    pub fn new(src: &'a str) -> Self {
        Self { src, lc: to_lower(src) }
    }

    /// Next complete `<open ...> ... close` block starting at or after `from`.
    /// Returns byte offsets `(start, end)` into the source.
    pub fn next_block(&self, open_tag: &str, close_tag: &str, from: usize) -> Option<(usize, usize)> {
        let open_lc = to_lower(open_tag);
        let close_lc = to_lower(close_tag);
        let mut at = from;
        loop {
            let start = self.lc.get(at..)?.find(&open_lc)? + at;
            // `<tr` must not match `<track`, `<td` must not match `<tdx`
            let next = self.lc.as_bytes().get(start + open_lc.len()).copied();
            if !matches!(next, Some(b'>' | b' ' | b'\t' | b'\r' | b'\n' | b'/')) {
                at = start + open_lc.len();
                continue;
            }
            let open_end = self.src[start..].find('>')? + start + 1;
            let end_rel = self.lc[open_end..].find(&close_lc)?;
            return Some((start, open_end + end_rel + close_lc.len()));
        }
    }

    /// Iterate every block of one tag kind, in document order.
    pub fn blocks<'s>(&'s self, open_tag: &'s str, close_tag: &'s str) -> impl Iterator<Item = &'a str> + 's {
        let mut pos = 0usize;
        std::iter::from_fn(move || {
            let (s, e) = self.next_block(open_tag, close_tag, pos)?;
            pos = e;
            Some(&self.src[s..e])
        })
    }
}

/// Given a complete tag block like `<td ...>INNER</td>`,
/// return INNER (may still contain nested tags).
pub fn inner_after_open_tag(block: &str) -> &str {
    if let Some(open_end) = block.find('>') {
        if let Some(close_start) = block.rfind('<') {
            if close_start > open_end {
                return &block[open_end + 1..close_start];
            }
        }
    }
    ""
}

/// The opening tag of a block, `<a href=... class=...>`.
pub fn open_tag(block: &str) -> &str {
    match block.find('>') {
        Some(i) => &block[..=i],
        None => block,
    }
}

/// Value of attribute `name` in an opening tag. Handles `"…"`, `'…'` and bare values.
pub fn attr_value<'t>(tag: &'t str, name: &str) -> Option<&'t str> {
    let lc = to_lower(tag);
    let needle = to_lower(name);
    let mut from = 0usize;
    while let Some(rel) = lc[from..].find(&needle) {
        let at = from + rel;
        from = at + needle.len();

        // attribute names start after whitespace
        let before = lc.as_bytes().get(at.wrapping_sub(1)).copied();
        if !matches!(before, Some(b' ' | b'\t' | b'\r' | b'\n')) { continue; }

        let rest = tag[from..].trim_start();
        let Some(rest) = rest.strip_prefix('=') else { continue };
        let rest = rest.trim_start();
        return match rest.chars().next() {
            Some(q @ ('"' | '\'')) => {
                let body = &rest[1..];
                body.find(q).map(|end| &body[..end])
            }
            Some(_) => {
                let end = rest
                    .find(|c: char| c.is_whitespace() || c == '>' || c == '/')
                    .unwrap_or(rest.len());
                Some(&rest[..end])
            }
            None => None,
        };
    }
    None
}

/// Whether an opening tag carries `class` token `class_name`.
pub fn has_class(tag: &str, class_name: &str) -> bool {
    attr_value(tag, "class")
        .map(|v| v.split_whitespace().any(|c| c == class_name))
        .unwrap_or(false)
}

/// Remove all `<...>` tags, then collapse whitespace.
pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    super::sanitize::normalize_ws(&out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blocks_walk_rows_in_order_and_skip_lookalikes() {
        let doc = "<TABLE><track></track><tr a=1><td>x</td></tr><tr>\n<td>y</td></TR></table>";
        let sc = TagScanner::new(doc);
        let rows: Vec<&str> = sc.blocks("<tr", "</tr>").collect();
        assert_eq!(rows, vec!["<tr a=1><td>x</td></tr>", "<tr>\n<td>y</td></TR>"]);
    }

    #[test]
    fn inner_and_open_tag() {
        let block = r#"<td style="x"><b>7</b></td>"#;
        assert_eq!(inner_after_open_tag(block), "<b>7</b>");
        assert_eq!(open_tag(block), r#"<td style="x">"#);
        assert_eq!(inner_after_open_tag("<td>"), "");
    }

    #[test]
    fn attr_value_quoting_styles() {
        assert_eq!(attr_value(r#"<a class="mt_a" href='/x'>"#, "class"), Some("mt_a"));
        assert_eq!(attr_value(r#"<a href='/x'>"#, "href"), Some("/x"));
        assert_eq!(attr_value("<a CLASS=mt_a>", "class"), Some("mt_a"));
        assert_eq!(attr_value(r#"<a data-class="no">"#, "class"), None);
    }

    #[test]
    fn class_tokens() {
        assert!(has_class(r#"<a class="big mt_a">"#, "mt_a"));
        assert!(!has_class(r#"<a class="mt_ab">"#, "mt_a"));
        assert!(!has_class("<a>", "mt_a"));
    }

    #[test]
    fn strip_tags_collapses_ws() {
        assert_eq!(strip_tags("<a>\n  United <b>Kingdom</b> </a>"), "United Kingdom");
    }
}
