use serde::{Deserialize, Serialize};

use crate::{
    price::parse_price, rating::parse_rating, slug::slugify, tags::extract_tags,
    title::normalize_title, value::Price, value::Rating,
};

/// A product record as scraped: every field is free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawProduct {
    pub title: String,
    pub price: String,
    pub rating: String,
    /// Carried through from the source; no cleaning rule reads it.
    pub category: String,
}

/// Canonical form of a [`RawProduct`].
///
/// `price_value` and `rating_value` are `None` when the source field could not
/// be parsed; that is an expected outcome, not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanedProduct {
    pub title_clean: String,
    pub price_value: Option<Price>,
    pub rating_value: Option<Rating>,
    pub slug: String,
    pub tags: Vec<String>,
}

/// Normalize a title on its own.
pub fn clean_title(raw: &str) -> String {
    normalize_title(raw)
}

/// Clean a single record.
///
/// The title is normalized first; slug and tags are derived from the
/// normalized title, while price and rating are parsed from their raw fields.
pub fn clean(raw: &RawProduct) -> CleanedProduct {
    let title_clean = normalize_title(&raw.title);
    let price_value = parse_price(&raw.price);
    let rating_value = parse_rating(&raw.rating);

    if price_value.is_none() {
        tracing::debug!(price = %raw.price, "price not parseable");
    }
    if rating_value.is_none() {
        tracing::debug!(rating = %raw.rating, "rating not parseable");
    }

    CleanedProduct {
        slug: slugify(&title_clean),
        tags: extract_tags(&title_clean),
        title_clean,
        price_value,
        rating_value,
    }
}

/// Clean many records. Output is 1:1 with the input and in the same order.
pub fn clean_batch(raws: &[RawProduct]) -> Vec<CleanedProduct> {
    raws.iter().map(clean).collect()
}
