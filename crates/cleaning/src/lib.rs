//! Product record cleaning rules.
//!
//! This crate turns loosely formatted product fields into canonical values,
//! implemented purely as deterministic text transformations (no IO, no HTTP,
//! no storage).

pub mod digits;
pub mod price;
pub mod product;
pub mod rating;
pub mod slug;
pub mod tags;
pub mod title;
pub mod value;

pub use price::parse_price;
pub use product::{clean, clean_batch, clean_title, CleanedProduct, RawProduct};
pub use rating::{parse_rating, NotationMatch, RatingNotation};
pub use slug::slugify;
pub use tags::{extract_tags, is_stopword};
pub use title::normalize_title;
pub use value::{Price, Rating};
