//! Route handlers.
//!
//! Request bodies are extracted as raw JSON values and validated by hand so
//! the error messages and status codes stay exactly stable for clients.

use axum::Json;
use axum::extract::State;
use serde_json::Value;

use crate::server::AppState;
use crate::server::types::{
    ApiError, BatchPredictionResponse, HealthResponse, PredictionResponse,
};
use crate::sentiment::SentimentScore;

/// GET `/health`: fixed payload, independent of scorer state.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// POST `/predict`: score a single text.
pub async fn predict(
    State(analyzer): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<PredictionResponse>, ApiError> {
    let text = body
        .get("text")
        .and_then(Value::as_str)
        .ok_or(ApiError::BadRequest("No text provided"))?;

    if text.trim().is_empty() {
        return Err(ApiError::BadRequest("Empty text provided"));
    }

    let score = analyzer.analyze(text);
    Ok(Json(PredictionResponse::new(text, score)))
}

/// POST `/batch-predict`: score an ordered batch of texts.
///
/// Blank elements score `(neutral, 0.5)` inline; the batch never aborts
/// partway through.
pub async fn batch_predict(
    State(analyzer): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<BatchPredictionResponse>, ApiError> {
    let texts = body
        .get("texts")
        .ok_or(ApiError::BadRequest("No texts provided"))?;

    let texts = texts
        .as_array()
        .filter(|items| !items.is_empty())
        .ok_or(ApiError::BadRequest("Invalid texts format"))?;

    // Validate element types up front so a bad entry cannot abort the batch
    // after some elements were already scored.
    let texts: Vec<&str> = texts
        .iter()
        .map(Value::as_str)
        .collect::<Option<_>>()
        .ok_or(ApiError::BadRequest("Invalid texts format"))?;

    let results = texts
        .into_iter()
        .map(|text| {
            let score = if text.trim().is_empty() {
                SentimentScore::no_signal()
            } else {
                analyzer.analyze(text)
            };
            PredictionResponse::new(text, score)
        })
        .collect();

    Ok(Json(BatchPredictionResponse { results }))
}
