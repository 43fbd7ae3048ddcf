use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    routing::get,
    Router,
};
use serde_json::json;
use tower::ServiceExt;

async fn post_json(
    app: Router,
    uri: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let req = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let res = app.oneshot(req).await.unwrap();
    let status = res.status();
    let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn bulk_matches_single_record_cleaning() {
    let records = vec![
        json!({"title": "red red shoe", "price": "$12.50", "rating": "4/5", "category": "Shoes"}),
        json!({
            "title": "  the  best   mug ",
            "price": "abc",
            "rating": "3.5 out of 5",
            "category": "Kitchen",
        }),
        json!({"title": "Lamp", "price": "1.299.00", "rating": "8 / 10", "category": "Home"}),
    ];

    let (status, bulk) = post_json(
        prodclean_api::app::build_app(),
        "/clean/bulk",
        json!({ "products": records.clone() }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    for (i, record) in records.into_iter().enumerate() {
        let (status, single) =
            post_json(prodclean_api::app::build_app(), "/clean/product", record).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(bulk["products"][i], single);
    }

    assert_eq!(bulk["products"][0]["tags"], json!(["red", "shoe"]));
    assert_eq!(bulk["products"][1]["tags"], json!(["best", "mug"]));
    assert!(bulk["products"][2]["price_value"].is_null());
    assert_eq!(bulk["products"][2]["rating_value"], 4.0);
}

#[tokio::test]
async fn malformed_json_is_a_validation_error() {
    let req = Request::builder()
        .method(Method::POST)
        .uri("/clean/product")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"title\": "))
        .unwrap();

    let res = prodclean_api::app::build_app().oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn panicking_handler_becomes_generic_500() {
    async fn boom() -> &'static str {
        panic!("secret detail")
    }

    let app = prodclean_api::app::with_service_layers(Router::new().route("/boom", get(boom)));

    let req = Request::builder().uri("/boom").body(Body::empty()).unwrap();
    let res = app.oneshot(req).await.unwrap();

    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(res.headers().contains_key("x-request-id"));
    let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["error"], "internal_error");
    assert_eq!(body["message"], "Internal server error occurred");
}
