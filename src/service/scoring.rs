//! Overall SEO score aggregation and the content-health label.
//!
//! Four independent buckets contribute up to 25 points each; the health
//! label is a separate ladder over the raw signals, not a function of the
//! numeric score.

use crate::domain::models::HealthStatus;

/// Weighted 0-100 composite score.
pub fn seo_score(
    readability: f64,
    word_count: usize,
    keyword_count: usize,
    title: &str,
    description: &str,
) -> u8 {
    let mut score: i32 = 0;

    // readability contribution (25% of score)
    score += if readability >= 70.0 {
        25
    } else if readability >= 50.0 {
        20
    } else if readability >= 30.0 {
        15
    } else {
        10
    };

    // word count contribution (25% of score)
    score += if word_count >= 600 {
        25
    } else if word_count >= 300 {
        20
    } else if word_count >= 150 {
        15
    } else {
        5
    };

    // keywords contribution (25% of score)
    score += if keyword_count >= 8 {
        25
    } else if keyword_count >= 5 {
        20
    } else if keyword_count >= 3 {
        15
    } else {
        5
    };

    // title and description contribution (15 + 10)
    let title_len = title.chars().count();
    score += if (30..=60).contains(&title_len) {
        15
    } else if (20..=80).contains(&title_len) {
        10
    } else {
        5
    };

    let desc_len = description.chars().count();
    score += if (120..=160).contains(&desc_len) {
        10
    } else if (100..=180).contains(&desc_len) {
        7
    } else {
        3
    };

    score.clamp(0, 100) as u8
}

/// Health label from the raw readability/word-count/keyword signals.
pub fn content_health(readability: f64, word_count: usize, keyword_count: usize) -> HealthStatus {
    if readability >= 70.0 && word_count >= 300 && keyword_count >= 5 {
        HealthStatus::Excellent
    } else if readability >= 50.0 && word_count >= 200 && keyword_count >= 3 {
        HealthStatus::Good
    } else if readability >= 30.0 && word_count >= 100 {
        HealthStatus::Fair
    } else {
        HealthStatus::NeedsImprovement
    }
}
