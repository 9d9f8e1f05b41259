//! Bootstrap training corpus for the fallback classifier.

use crate::sentiment::Sentiment;

/// Review phrases with hand-assigned labels, used to train a fresh model
/// when no persisted artifact is available. The label sequence is part of
/// the observable model behavior and must not be rebalanced.
pub const TRAINING_CORPUS: &[(&str, Sentiment)] = &[
    ("This is amazing! I love it!", Sentiment::Positive),
    ("Great product, highly recommended!", Sentiment::Positive),
    ("Excellent service, very satisfied!", Sentiment::Positive),
    ("Good quality, worth the money!", Sentiment::Positive),
    ("Not bad, could be better", Sentiment::Neutral),
    ("Okay, but nothing special", Sentiment::Neutral),
    ("Average product, meets expectations", Sentiment::Neutral),
    ("Disappointing, poor quality", Sentiment::Neutral),
    ("Terrible experience, don't buy!", Sentiment::Negative),
    ("Awful service, very unhappy!", Sentiment::Negative),
    ("Worst product ever!", Sentiment::Negative),
    ("Complete waste of money!", Sentiment::Negative),
    ("I hate this, it's terrible!", Sentiment::Negative),
    ("Very poor quality, avoid!", Sentiment::Negative),
    ("Not worth the price at all!", Sentiment::Negative),
];
