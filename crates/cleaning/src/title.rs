use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace regex should compile"));

/// Normalize a raw product title: trim, collapse whitespace runs to one space,
/// then apply Title Case.
///
/// Title Case upper-cases a letter that follows a non-letter and lower-cases a
/// letter that follows another letter. There is no exception dictionary, so
/// `"500ml"` becomes `"500Ml"` and `"eco-friendly"` becomes `"Eco-Friendly"`.
pub fn normalize_title(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    let collapsed = WHITESPACE_RUN.replace_all(trimmed, " ");
    title_case(&collapsed)
}

fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut after_letter = false;

    for ch in s.chars() {
        let cased = ch.is_lowercase() || ch.is_uppercase();
        if cased {
            if after_letter {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
        } else {
            out.push(ch);
        }
        after_letter = cased;
    }

    out
}
