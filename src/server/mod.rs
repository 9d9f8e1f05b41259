//! HTTP surface for the sentiment scorer.
//!
//! Exposes health, single-prediction, and batch-prediction endpoints as an
//! axum router. The scorer is shared across handlers as immutable state.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};

use crate::sentiment::SentimentAnalyzer;

pub mod handlers;
pub mod types;

/// Shared handler state: the scorer, constructed once at startup.
pub type AppState = Arc<SentimentAnalyzer>;

/// Build the API router.
///
/// `/analyze` and `/analyze-batch` are aliases kept for clients of the
/// older endpoint names.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/predict", post(handlers::predict))
        .route("/batch-predict", post(handlers::batch_predict))
        .route("/analyze", post(handlers::predict))
        .route("/analyze-batch", post(handlers::batch_predict))
        .with_state(state)
}
