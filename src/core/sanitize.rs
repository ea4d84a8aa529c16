// src/core/sanitize.rs

/// Decode the handful of entities that show up in table cells.
pub fn normalize_entities(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace("&#160;", " ")
        .replace("&amp;", "&")
        .replace("&#39;", "'")
        .replace("&quot;", "\"")
}

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Cell text as displayed: entities decoded, tags dropped, whitespace collapsed.
pub fn cell_text(inner_html: &str) -> String {
    super::html::strip_tags(normalize_entities(inner_html))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_and_trims() {
        assert_eq!(normalize_ws("  a \n\t b  "), "a b");
        assert_eq!(normalize_ws(""), "");
    }

    #[test]
    fn cell_text_decodes_entities_inside_tags() {
        assert_eq!(cell_text("<span>1,234&nbsp;</span>"), "1,234");
        assert_eq!(cell_text("<a href=\"x\">Bosnia &amp; Herzegovina</a>"), "Bosnia & Herzegovina");
    }
}
