use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace regex should compile"));
static NOT_SLUG_CHAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9-]").expect("slug charset regex should compile"));
static HYPHEN_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"-+").expect("hyphen regex should compile"));

/// Build a URL slug from a title.
///
/// The result is empty or matches `^[a-z0-9]+(-[a-z0-9]+)*$`, and slugifying a
/// slug returns it unchanged.
pub fn slugify(title: &str) -> String {
    if title.is_empty() {
        return String::new();
    }

    let lowered = title.to_lowercase();
    let hyphenated = WHITESPACE_RUN.replace_all(&lowered, "-");
    let filtered = NOT_SLUG_CHAR.replace_all(&hyphenated, "");
    let collapsed = HYPHEN_RUN.replace_all(&filtered, "-");

    collapsed.trim_matches('-').to_string()
}
