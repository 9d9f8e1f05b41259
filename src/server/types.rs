//! Request/response types and error mapping for the HTTP surface.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::error::ShrikeError;
use crate::sentiment::{Sentiment, SentimentScore};

/// Health check payload.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy",
            service: "ml-sentiment-analyzer",
        }
    }
}

/// A single scored text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub text: String,
    pub sentiment: Sentiment,
    pub confidence: f64,
}

impl PredictionResponse {
    pub fn new(text: impl Into<String>, score: SentimentScore) -> Self {
        Self {
            text: text.into(),
            sentiment: score.sentiment,
            confidence: score.confidence,
        }
    }
}

/// Batch prediction payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchPredictionResponse {
    pub results: Vec<PredictionResponse>,
}

/// Error body returned for all failed requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Errors surfaced by the HTTP handlers.
#[derive(Debug)]
pub enum ApiError {
    /// Request validation failed; the message is sent to the client.
    BadRequest(&'static str),
    /// Unexpected fault; logged server-side, generic message to the client.
    Internal(ShrikeError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message.to_string()),
            ApiError::Internal(e) => {
                log::error!("Internal error while handling request: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

impl From<ShrikeError> for ApiError {
    fn from(e: ShrikeError) -> Self {
        ApiError::Internal(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentiment::SentimentScore;

    #[test]
    fn test_health_response_shape() {
        let health = HealthResponse::healthy();
        let json = serde_json::to_value(&health).unwrap();

        assert_eq!(json["status"], "healthy");
        assert_eq!(json["service"], "ml-sentiment-analyzer");
    }

    #[test]
    fn test_prediction_response_serialization() {
        let response = PredictionResponse::new("I love it!", SentimentScore::no_signal());
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["text"], "I love it!");
        assert_eq!(json["sentiment"], "neutral");
        assert_eq!(json["confidence"], 0.5);
    }

    #[test]
    fn test_error_response_shape() {
        let body = ErrorResponse {
            error: "No text provided".to_string(),
        };
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["error"], "No text provided");
    }

    #[test]
    fn test_api_error_status_codes() {
        let response = ApiError::BadRequest("No text provided").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = ApiError::Internal(ShrikeError::other("boom")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
