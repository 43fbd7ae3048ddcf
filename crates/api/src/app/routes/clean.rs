use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Json, Router,
};

use prodclean_cleaning::{clean, clean_batch, clean_title, RawProduct};

use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/title", post(clean_title_handler))
        .route("/product", post(clean_product))
        .route("/bulk", post(clean_bulk))
}

pub async fn clean_title_handler(
    payload: Result<Json<dto::TitleCleanRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match payload {
        Ok(v) => v,
        Err(e) => return errors::json_rejection_to_response(e),
    };

    let response = dto::TitleCleanResponse {
        clean_title: clean_title(&body.raw_title),
    };
    (StatusCode::OK, Json(response)).into_response()
}

pub async fn clean_product(
    payload: Result<Json<RawProduct>, JsonRejection>,
) -> axum::response::Response {
    let Json(product) = match payload {
        Ok(v) => v,
        Err(e) => return errors::json_rejection_to_response(e),
    };

    (StatusCode::OK, Json(clean(&product))).into_response()
}

pub async fn clean_bulk(
    payload: Result<Json<dto::BulkCleanRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match payload {
        Ok(v) => v,
        Err(e) => return errors::json_rejection_to_response(e),
    };

    let count = body.products.len();
    // CPU-bound; keep large batches off the async workers.
    let products = match tokio::task::spawn_blocking(move || clean_batch(&body.products)).await {
        Ok(p) => p,
        Err(e) => {
            tracing::error!(error = %e, batch_size = count, "bulk cleaning task failed");
            return errors::internal_error();
        }
    };

    let unpriced = products.iter().filter(|p| p.price_value.is_none()).count();
    let unrated = products.iter().filter(|p| p.rating_value.is_none()).count();
    tracing::debug!(batch_size = count, unpriced, unrated, "bulk batch cleaned");

    (StatusCode::OK, Json(dto::BulkCleanResponse { products })).into_response()
}
