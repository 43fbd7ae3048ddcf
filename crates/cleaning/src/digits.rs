//! Decimal digits in any script.
//!
//! Scraped prices and ratings sometimes use native digits (`"₹४९९"`). These
//! helpers recognise every Unicode decimal digit (`Nd`) and rewrite it to
//! its ASCII form so the numeral can be parsed as an `f64`.

use once_cell::sync::Lazy;
use regex::Regex;

static DECIMAL_DIGIT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d$").expect("digit regex should compile"));

/// True for any Unicode decimal digit, ASCII included.
pub fn is_decimal_digit(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_digit();
    }
    let mut buf = [0u8; 4];
    DECIMAL_DIGIT.is_match(c.encode_utf8(&mut buf))
}

/// Numeric value of a decimal digit.
///
/// Unicode encodes decimal digits in contiguous runs of ten, zero first, so
/// the value is the distance back to the start of the run, modulo ten.
pub fn decimal_digit_value(c: char) -> Option<u32> {
    if let Some(d) = c.to_digit(10) {
        return Some(d);
    }
    if !is_decimal_digit(c) {
        return None;
    }

    let mut offset = 0;
    let mut cur = c;
    while let Some(prev) = char::from_u32(u32::from(cur) - 1).filter(|p| is_decimal_digit(*p)) {
        offset += 1;
        cur = prev;
    }
    Some(offset % 10)
}

/// Rewrite every decimal digit in `s` to ASCII, leaving other characters alone.
pub fn to_ascii_digits(s: &str) -> String {
    s.chars()
        .map(|c| match decimal_digit_value(c) {
            Some(d) => char::from(b'0' + d as u8),
            None => c,
        })
        .collect()
}
