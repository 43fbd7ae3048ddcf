//! Rating parsing.
//!
//! Ratings arrive in a handful of notations. Each notation is a matcher that
//! either recognises the text or passes, and matchers are tried in a fixed
//! priority order. The first notation that recognises the text decides the
//! result, even when its numeral turns out to be malformed.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::digits::to_ascii_digits;
use crate::value::Rating;

static OUT_OF: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)([\d.]+)\s*out\s*of\s*[\d.]+").expect("out-of regex should compile")
});

static FRACTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([\d.]+)\s*/\s*([\d.]+)").expect("fraction regex should compile"));

static NUMERAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\d.]+").expect("numeral regex should compile"));

/// Outcome of trying one notation.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum NotationMatch {
    /// The notation does not apply; try the next one.
    Pass,
    /// The notation applies. `None` means its numeral was malformed.
    Matched(Option<Rating>),
}

/// Supported rating notations, in matching priority order.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RatingNotation {
    /// `"4.2 out of 5"`. The stated scale is ignored; the first number is the rating.
    OutOf,
    /// `"4/5"`. Rescaled to five points; passes on a zero or negative denominator.
    Fraction,
    /// The first numeral anywhere in the text, taken as-is.
    Bare,
}

impl RatingNotation {
    pub const PRIORITY: [RatingNotation; 3] = [
        RatingNotation::OutOf,
        RatingNotation::Fraction,
        RatingNotation::Bare,
    ];

    /// Try this notation against `raw`.
    pub fn matches(self, raw: &str) -> NotationMatch {
        match self {
            RatingNotation::OutOf => match OUT_OF.captures(raw) {
                Some(caps) => NotationMatch::Matched(numeral(&caps[1]).and_then(Rating::clamped)),
                None => NotationMatch::Pass,
            },
            RatingNotation::Fraction => {
                let Some(caps) = FRACTION.captures(raw) else {
                    return NotationMatch::Pass;
                };
                let (Some(numerator), Some(denominator)) = (numeral(&caps[1]), numeral(&caps[2]))
                else {
                    return NotationMatch::Matched(None);
                };
                if denominator <= 0.0 {
                    return NotationMatch::Pass;
                }
                NotationMatch::Matched(Rating::clamped(numerator / denominator * Rating::MAX))
            }
            RatingNotation::Bare => match NUMERAL.find(raw) {
                Some(m) => NotationMatch::Matched(numeral(m.as_str()).and_then(Rating::clamped)),
                None => NotationMatch::Pass,
            },
        }
    }
}

fn numeral(s: &str) -> Option<f64> {
    to_ascii_digits(s).parse::<f64>().ok()
}

/// Parse a free-text rating onto the 0 to 5 scale.
///
/// Returns `None` when no notation applies (`"no rating"`) or when the
/// notation that applies carries a malformed numeral (`"1.2.3 out of 5"`).
pub fn parse_rating(raw: &str) -> Option<Rating> {
    if raw.is_empty() {
        return None;
    }

    for notation in RatingNotation::PRIORITY {
        if let NotationMatch::Matched(rating) = notation.matches(raw) {
            tracing::trace!(?notation, matched = rating.is_some(), "rating notation applied");
            return rating;
        }
    }
    None
}
