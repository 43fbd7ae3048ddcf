use crate::digits::{is_decimal_digit, to_ascii_digits};
use crate::value::Price;

/// Parse a free-text price into a numeric amount.
///
/// Every character other than a decimal digit (in any script) or `.` is
/// dropped and the rest is read as one decimal numeral, so `"1,299 INR"` is
/// `1299` and `"₹४९९"` is `499`. Sign characters are dropped too, which keeps
/// the result non-negative.
///
/// Returns `None` when nothing numeric is left, when the remainder is not a
/// single valid numeral (`"1.299.00"`, `"."`), or when it overflows to infinity.
pub fn parse_price(raw: &str) -> Option<Price> {
    let kept: String = raw
        .chars()
        .filter(|c| *c == '.' || is_decimal_digit(*c))
        .collect();

    if kept.is_empty() {
        return None;
    }

    to_ascii_digits(&kept).parse::<f64>().ok().and_then(Price::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn amount(raw: &str) -> Option<f64> {
        parse_price(raw).map(Price::value)
    }

    #[test]
    fn strips_currency_symbols() {
        assert_eq!(amount("₹499"), Some(499.0));
        assert_eq!(amount("$12.50"), Some(12.5));
    }

    #[test]
    fn drops_thousands_separators_and_text() {
        assert_eq!(amount("1,299 INR"), Some(1299.0));
    }

    #[test]
    fn native_script_digits_are_read() {
        assert_eq!(amount("₹४९९"), Some(499.0));
        assert_eq!(amount("١٢.٥ ر.س"), None);
        assert_eq!(amount("١٢.٥"), Some(12.5));
    }

    #[test]
    fn non_decimal_numerics_are_dropped() {
        assert_eq!(amount("½"), None);
        assert_eq!(amount("2½"), Some(2.0));
    }

    #[test]
    fn empty_or_non_numeric_is_absent() {
        assert_eq!(amount(""), None);
        assert_eq!(amount("abc"), None);
        assert_eq!(amount("free"), None);
    }

    #[test]
    fn multiple_periods_are_absent() {
        assert_eq!(amount("1.299.00"), None);
        assert_eq!(amount("."), None);
        assert_eq!(amount("Rs. ."), None);
    }

    #[test]
    fn sign_is_discarded() {
        assert_eq!(amount("-5"), Some(5.0));
    }

    #[test]
    fn bare_leading_or_trailing_period_is_accepted() {
        assert_eq!(amount("12."), Some(12.0));
        assert_eq!(amount(".5"), Some(0.5));
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 512,
            ..ProptestConfig::default()
        })]

        /// Property: a parsed price is never negative.
        #[test]
        fn parsed_price_is_non_negative(raw in "\\PC{0,40}") {
            if let Some(price) = parse_price(&raw) {
                prop_assert!(price.value() >= 0.0);
                prop_assert!(price.value().is_finite());
            }
        }

        /// Property: decorating a whole amount with symbols and text keeps its value.
        #[test]
        fn decoration_does_not_change_whole_amounts(n in 0u32..10_000_000u32) {
            let raw = format!("Rs {n} /-");
            prop_assert_eq!(amount(&raw), Some(f64::from(n)));
        }
    }
}
