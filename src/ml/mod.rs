//! Machine learning support for the sentiment scorer.
//!
//! This module provides the secondary classification signal: a TF-IDF
//! feature vectorizer, a multinomial logistic regression classifier, the
//! bootstrap training corpus, and the persisted model artifact that ties
//! them together.

pub mod corpus;
pub mod logistic;
pub mod model;
pub mod tfidf;

pub use logistic::LogisticRegression;
pub use model::{ModelSource, SentimentModel};
pub use tfidf::TfIdfVectorizer;
