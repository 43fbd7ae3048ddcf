use std::collections::HashSet;

use once_cell::sync::Lazy;

/// Low-information words never emitted as tags.
static STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "the", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "a", "an", "is",
        "it", "this", "that",
    ]
    .into_iter()
    .collect()
});

pub fn is_stopword(word: &str) -> bool {
    STOPWORDS.contains(word)
}

/// Extract keyword tags from a title.
///
/// Words are lower-cased, split on whitespace and reduced to ASCII letters and
/// digits. Empty words and stopwords are dropped, and only the first
/// occurrence of each tag is kept.
pub fn extract_tags(title: &str) -> Vec<String> {
    let lowered = title.to_lowercase();
    let mut seen = HashSet::new();
    let mut tags = Vec::new();

    for word in lowered.split_whitespace() {
        let tag: String = word
            .chars()
            .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
            .collect();

        if tag.is_empty() || is_stopword(&tag) {
            continue;
        }
        if seen.insert(tag.clone()) {
            tags.push(tag);
        }
    }

    tags
}
