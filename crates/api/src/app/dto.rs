use serde::{Deserialize, Serialize};

use prodclean_cleaning::{CleanedProduct, RawProduct};

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct TitleCleanRequest {
    pub raw_title: String,
}

#[derive(Debug, Deserialize)]
pub struct BulkCleanRequest {
    pub products: Vec<RawProduct>,
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct TitleCleanResponse {
    pub clean_title: String,
}

#[derive(Debug, Serialize)]
pub struct BulkCleanResponse {
    pub products: Vec<CleanedProduct>,
}
