//! End-to-end tests for the HTTP API.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use shrike::ml::SentimentModel;
use shrike::sentiment::SentimentAnalyzer;
use shrike::server::create_router;

fn test_router() -> Router {
    let model = SentimentModel::train().unwrap();
    let analyzer = SentimentAnalyzer::new(Some(model)).unwrap();
    create_router(Arc::new(analyzer))
}

async fn send_json(router: &Router, method: &str, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap();

    (status, value)
}

#[tokio::test]
async fn test_health_endpoint() {
    let router = test_router();

    let request = Request::builder()
        .method("GET")
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let response = router.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(
        body,
        json!({"status": "healthy", "service": "ml-sentiment-analyzer"})
    );
}

#[tokio::test]
async fn test_health_without_model() {
    // Health is independent of scorer state.
    let analyzer = SentimentAnalyzer::new(None).unwrap();
    let router = create_router(Arc::new(analyzer));

    let request = Request::builder()
        .method("GET")
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let response = router.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_predict_positive_text() {
    let router = test_router();

    let (status, body) = send_json(
        &router,
        "POST",
        "/predict",
        json!({"text": "Great product, highly recommended!"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["text"], "Great product, highly recommended!");
    assert_eq!(body["sentiment"], "positive");
    assert!(body["confidence"].as_f64().unwrap() >= 0.1);
}

#[tokio::test]
async fn test_predict_negative_text() {
    let router = test_router();

    let (status, body) = send_json(
        &router,
        "POST",
        "/predict",
        json!({"text": "Awful service, very unhappy!"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["sentiment"], "negative");
}

#[tokio::test]
async fn test_predict_missing_text() {
    let router = test_router();

    let (status, body) = send_json(&router, "POST", "/predict", json!({})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "No text provided"}));
}

#[tokio::test]
async fn test_predict_blank_text() {
    let router = test_router();

    let (status, body) = send_json(&router, "POST", "/predict", json!({"text": "   "})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Empty text provided"}));
}

#[tokio::test]
async fn test_predict_non_string_text() {
    let router = test_router();

    let (status, body) = send_json(&router, "POST", "/predict", json!({"text": 42})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "No text provided"}));
}

#[tokio::test]
async fn test_analyze_alias_matches_predict() {
    let router = test_router();

    let payload = json!({"text": "I love it!"});
    let (status_a, body_a) = send_json(&router, "POST", "/predict", payload.clone()).await;
    let (status_b, body_b) = send_json(&router, "POST", "/analyze", payload).await;

    assert_eq!(status_a, StatusCode::OK);
    assert_eq!(status_a, status_b);
    assert_eq!(body_a, body_b);
}

#[tokio::test]
async fn test_batch_predict() {
    let router = test_router();

    let (status, body) = send_json(
        &router,
        "POST",
        "/batch-predict",
        json!({"texts": ["I love it!", ""]}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);

    let results = body["results"].as_array().unwrap();
    assert_eq!(results.len(), 2);

    assert_eq!(results[0]["text"], "I love it!");
    assert_eq!(results[0]["sentiment"], "positive");

    // Blank elements score a fixed neutral result inline.
    assert_eq!(
        results[1],
        json!({"text": "", "sentiment": "neutral", "confidence": 0.5})
    );
}

#[tokio::test]
async fn test_batch_predict_preserves_order() {
    let router = test_router();

    let (status, body) = send_json(
        &router,
        "POST",
        "/batch-predict",
        json!({"texts": ["Worst product ever!", "   ", "Excellent service, very satisfied!"]}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);

    let results = body["results"].as_array().unwrap();
    assert_eq!(results.len(), 3);
    assert_eq!(results[0]["sentiment"], "negative");
    assert_eq!(results[1]["sentiment"], "neutral");
    assert_eq!(results[1]["confidence"], 0.5);
    assert_eq!(results[2]["sentiment"], "positive");
}

#[tokio::test]
async fn test_batch_predict_missing_texts() {
    let router = test_router();

    let (status, body) = send_json(&router, "POST", "/batch-predict", json!({})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "No texts provided"}));
}

#[tokio::test]
async fn test_batch_predict_empty_array() {
    let router = test_router();

    let (status, body) = send_json(&router, "POST", "/batch-predict", json!({"texts": []})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Invalid texts format"}));
}

#[tokio::test]
async fn test_batch_predict_non_array() {
    let router = test_router();

    let (status, body) = send_json(
        &router,
        "POST",
        "/batch-predict",
        json!({"texts": "not a list"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Invalid texts format"}));
}

#[tokio::test]
async fn test_batch_predict_non_string_element() {
    let router = test_router();

    let (status, body) = send_json(
        &router,
        "POST",
        "/batch-predict",
        json!({"texts": ["fine", 7]}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Invalid texts format"}));
}

#[tokio::test]
async fn test_analyze_batch_alias_matches_batch_predict() {
    let router = test_router();

    let payload = json!({"texts": ["Good quality, worth the money!"]});
    let (status_a, body_a) = send_json(&router, "POST", "/batch-predict", payload.clone()).await;
    let (status_b, body_b) = send_json(&router, "POST", "/analyze-batch", payload).await;

    assert_eq!(status_a, StatusCode::OK);
    assert_eq!(status_a, status_b);
    assert_eq!(body_a, body_b);
}

#[tokio::test]
async fn test_confidence_always_in_range() {
    let router = test_router();

    for text in [
        "This is amazing! I love it!",
        "Complete waste of money!",
        "The report covers the third quarter",
        "ok",
    ] {
        let (status, body) = send_json(&router, "POST", "/predict", json!({"text": text})).await;

        assert_eq!(status, StatusCode::OK, "unexpected status for {text:?}");
        let confidence = body["confidence"].as_f64().unwrap();
        assert!(
            (0.1..=1.0).contains(&confidence),
            "confidence {confidence} out of range for {text:?}"
        );
    }
}
