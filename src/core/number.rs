// src/core/number.rs
// Locale-aware integer parsing for displayed figures like "1,234,567".

use crate::config::options::NumberLocale;

/// Why a string is not a number. The caller attaches field/country context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberError {
    Empty,
    Invalid,
    Overflow,
    /// Grouping and decimal separators are the same character.
    AmbiguousLocale,
}

/// Parse a locale-formatted integer.
///
/// Grouping separators are ignored wherever they appear, a single leading
/// sign is accepted, and a fractional part after the decimal separator is
/// truncated toward zero. Surrounding whitespace is trimmed.
///
/// The whole string must be a number: `"12a"` is `Invalid`, where
/// `java.text.NumberFormat` would stop at the longest valid prefix and
/// return 12. A locale whose two separators coincide is rejected up front.
pub fn parse_locale_int(text: &str, locale: &NumberLocale) -> Result<i64, NumberError> {
    if locale.grouping == locale.decimal {
        return Err(NumberError::AmbiguousLocale);
    }
    let t = text.trim();
    if t.is_empty() {
        return Err(NumberError::Empty);
    }

    let (negative, body) = match t.as_bytes()[0] {
        b'-' => (true, &t[1..]),
        b'+' => (false, &t[1..]),
        _ => (false, t),
    };

    let mut value: i64 = 0;
    let mut digits = 0usize;
    let mut in_fraction = false;

    for ch in body.chars() {
        if in_fraction {
            // fraction digits only validate; the integer part is the result
            if !ch.is_ascii_digit() { return Err(NumberError::Invalid); }
            continue;
        }
        match ch {
            '0'..='9' => {
                let d = i64::from(ch as u8 - b'0');
                value = value
                    .checked_mul(10)
                    .and_then(|v| v.checked_add(d))
                    .ok_or(NumberError::Overflow)?;
                digits += 1;
            }
            c if c == locale.grouping && digits > 0 => {}
            c if c == locale.decimal => in_fraction = true,
            _ => return Err(NumberError::Invalid),
        }
    }

    if digits == 0 {
        return Err(NumberError::Invalid);
    }
    Ok(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn en() -> NumberLocale { NumberLocale::default() }

    #[test]
    fn grouped_and_plain() {
        assert_eq!(parse_locale_int("1,234,567", &en()), Ok(1_234_567));
        assert_eq!(parse_locale_int("8000", &en()), Ok(8000));
        assert_eq!(parse_locale_int("  42 ", &en()), Ok(42));
        assert_eq!(parse_locale_int("+1,000", &en()), Ok(1000));
        assert_eq!(parse_locale_int("-12", &en()), Ok(-12));
    }

    #[test]
    fn fraction_truncates() {
        assert_eq!(parse_locale_int("12.9", &en()), Ok(12));
        assert_eq!(parse_locale_int("-1,000.5", &en()), Ok(-1000));
    }

    #[test]
    fn european_locale() {
        let de = NumberLocale { grouping: '.', decimal: ',' };
        assert_eq!(parse_locale_int("1.234.567", &de), Ok(1_234_567));
        assert_eq!(parse_locale_int("3,75", &de), Ok(3));
        assert_eq!(parse_locale_int("1,234", &de), Ok(1));
    }

    #[test]
    fn clashing_separators_never_parse() {
        let bad = NumberLocale { grouping: '.', decimal: '.' };
        assert_eq!(parse_locale_int("1.000", &bad), Err(NumberError::AmbiguousLocale));
        assert_eq!(parse_locale_int("7", &bad), Err(NumberError::AmbiguousLocale));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_locale_int("", &en()), Err(NumberError::Empty));
        assert_eq!(parse_locale_int("   ", &en()), Err(NumberError::Empty));
        assert_eq!(parse_locale_int("N/A", &en()), Err(NumberError::Invalid));
        assert_eq!(parse_locale_int(",123", &en()), Err(NumberError::Invalid));
        assert_eq!(parse_locale_int("12a", &en()), Err(NumberError::Invalid));
        assert_eq!(parse_locale_int("-", &en()), Err(NumberError::Invalid));
        assert_eq!(parse_locale_int("1.2.3", &en()), Err(NumberError::Invalid));
        assert_eq!(
            parse_locale_int("99,999,999,999,999,999,999", &en()),
            Err(NumberError::Overflow)
        );
    }
}
