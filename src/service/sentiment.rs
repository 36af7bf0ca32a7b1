//! Sentiment classification: mapping for external classifier labels plus a
//! local lexicon-based polarity estimate used whenever the external path
//! is unavailable.

use crate::domain::models::Sentiment;
use crate::text::segment;

const POLARITY_THRESHOLD: f64 = 0.1;

const POSITIVE_WORDS: &[&str] = &[
    "good", "great", "excellent", "amazing", "wonderful", "fantastic", "awesome", "love",
    "loved", "best", "happy", "positive", "beautiful", "perfect", "helpful", "easy",
    "effective", "valuable", "success", "successful", "improve", "improved", "benefit",
    "benefits", "enjoy", "impressive", "reliable", "powerful", "innovative", "outstanding",
    "superb", "delightful", "efficient", "excited", "recommend",
];

const NEGATIVE_WORDS: &[&str] = &[
    "bad", "terrible", "awful", "horrible", "disappointing", "poor", "worst", "hate",
    "hated", "difficult", "problem", "problems", "fail", "failed", "failure", "broken",
    "useless", "negative", "wrong", "slow", "confusing", "frustrating", "annoying",
    "expensive", "risky", "waste", "weak", "ugly", "complicated", "unreliable", "mediocre",
    "painful", "buggy", "worse",
];

/// Map an external classifier label onto the report vocabulary.
/// Matching is case-insensitive and substring-based, so `POSITIVE`,
/// `LABEL_POS` and `pos` all map the same way.
pub fn map_external_label(label: &str) -> Sentiment {
    let label = label.to_uppercase();
    if label.contains("POS") {
        Sentiment::Positive
    } else if label.contains("NEG") {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}

/// Local fallback: lexicon polarity in [-1, 1] with a neutral band.
pub fn local_estimate(text: &str) -> Sentiment {
    let polarity = polarity(text);
    if polarity > POLARITY_THRESHOLD {
        Sentiment::Positive
    } else if polarity < -POLARITY_THRESHOLD {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}

fn polarity(text: &str) -> f64 {
    let mut positive = 0usize;
    let mut negative = 0usize;

    for word in segment::words(text) {
        let word = word.to_lowercase();
        if POSITIVE_WORDS.contains(&word.as_str()) {
            positive += 1;
        } else if NEGATIVE_WORDS.contains(&word.as_str()) {
            negative += 1;
        }
    }

    let total = positive + negative;
    if total == 0 {
        return 0.0;
    }
    (positive as f64 - negative as f64) / total as f64
}
