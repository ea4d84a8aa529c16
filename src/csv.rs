// src/csv.rs
use std::io::{self, Write};

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        let cell = cell.as_ref();
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Header + rows as one delimited string.
pub fn rows_to_string<S: AsRef<str>>(headers: &[&str], rows: &[Vec<S>], sep: char) -> String {
    let mut buf: Vec<u8> = Vec::new();

    // writes into a Vec<u8> can't fail
    let _ = write_row(&mut buf, headers, sep);
    for r in rows {
        let _ = write_row(&mut buf, r.as_slice(), sep);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_only_when_needed() {
        let mut buf = Vec::new();
        write_row(&mut buf, &["Korea, South", "say \"hi\"", "plain"][..], ',').unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "\"Korea, South\",\"say \"\"hi\"\"\",plain\n");
    }

    #[test]
    fn tsv_leaves_commas_alone() {
        let s = rows_to_string(&["A", "B"], &[vec!["1,5", "x"]][..], '\t');
        assert_eq!(s, "A\tB\n1,5\tx\n");
    }
}
