//! TF-IDF vectorizer for text feature extraction.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use anyhow::Result;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Token pattern: two or more word characters.
///
/// Single-character words carry no feature signal and are dropped, matching
/// the behavior the persisted artifacts were trained with.
static TOKEN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w\w+").expect("Token pattern should be valid"));

/// TF-IDF vectorizer over unigrams and bigrams.
///
/// Feature indices are assigned by alphabetical term order; when the
/// candidate vocabulary exceeds `max_features`, the most frequent terms
/// across the corpus are kept (ties broken alphabetically). Transformed
/// vectors are L2-normalized.
#[derive(Clone, Serialize, Deserialize)]
pub struct TfIdfVectorizer {
    /// Vocabulary: term -> feature index mapping.
    vocabulary: HashMap<String, usize>,
    /// Inverse document frequency for each feature index.
    idf: Vec<f64>,
    /// Total number of documents seen during fitting.
    n_documents: usize,
    /// Maximum vocabulary size.
    max_features: usize,
}

impl std::fmt::Debug for TfIdfVectorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TfIdfVectorizer")
            .field("vocabulary_size", &self.vocabulary.len())
            .field("n_documents", &self.n_documents)
            .field("max_features", &self.max_features)
            .finish()
    }
}

impl TfIdfVectorizer {
    /// Create a new vectorizer with the given vocabulary cap.
    pub fn new(max_features: usize) -> Self {
        Self {
            vocabulary: HashMap::new(),
            idf: Vec::new(),
            n_documents: 0,
            max_features,
        }
    }

    /// Fit the vectorizer on training documents.
    pub fn fit(&mut self, documents: &[String]) -> Result<()> {
        if documents.is_empty() {
            anyhow::bail!("Training documents cannot be empty");
        }

        self.n_documents = documents.len();
        let mut corpus_frequency: HashMap<String, usize> = HashMap::new();
        let mut document_frequency: HashMap<String, usize> = HashMap::new();

        for doc in documents {
            let terms = Self::extract_terms(doc);
            let unique_terms: HashSet<_> = terms.iter().cloned().collect();

            for term in &terms {
                *corpus_frequency.entry(term.clone()).or_insert(0) += 1;
            }
            for term in unique_terms {
                *document_frequency.entry(term).or_insert(0) += 1;
            }
        }

        // Keep the most frequent terms when the candidate vocabulary exceeds
        // the cap, then assign indices in alphabetical term order.
        let mut selected: Vec<String> = corpus_frequency.keys().cloned().collect();
        if selected.len() > self.max_features {
            selected.sort_by(|a, b| {
                corpus_frequency[b]
                    .cmp(&corpus_frequency[a])
                    .then_with(|| a.cmp(b))
            });
            selected.truncate(self.max_features);
        }
        selected.sort();

        let mut vocabulary = HashMap::with_capacity(selected.len());
        let mut idf = Vec::with_capacity(selected.len());
        for (idx, term) in selected.into_iter().enumerate() {
            let df = document_frequency.get(&term).copied().unwrap_or(0);
            // IDF = ln((N + 1) / (df + 1)) + 1
            idf.push(((self.n_documents as f64 + 1.0) / (df as f64 + 1.0)).ln() + 1.0);
            vocabulary.insert(term, idx);
        }

        self.vocabulary = vocabulary;
        self.idf = idf;

        Ok(())
    }

    /// Transform a document into an L2-normalized TF-IDF feature vector.
    pub fn transform(&self, document: &str) -> Vec<f64> {
        let mut features = vec![0.0; self.vocabulary.len()];

        for term in Self::extract_terms(document) {
            if let Some(&idx) = self.vocabulary.get(&term) {
                features[idx] += 1.0;
            }
        }

        for (idx, value) in features.iter_mut().enumerate() {
            *value *= self.idf[idx];
        }

        let norm = features.iter().map(|v| v * v).sum::<f64>().sqrt();
        if norm > 0.0 {
            for value in &mut features {
                *value /= norm;
            }
        }

        features
    }

    /// Lowercase the document, extract word tokens, and expand them into
    /// unigrams plus adjacent bigrams.
    fn extract_terms(document: &str) -> Vec<String> {
        let lowered = document.to_lowercase();
        let tokens: Vec<&str> = TOKEN_PATTERN
            .find_iter(&lowered)
            .map(|m| m.as_str())
            .collect();

        let mut terms: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
        for pair in tokens.windows(2) {
            terms.push(format!("{} {}", pair[0], pair[1]));
        }

        terms
    }

    /// Get the size of the vocabulary.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Number of documents the vectorizer was fitted on.
    pub fn n_documents(&self) -> usize {
        self.n_documents
    }
}
