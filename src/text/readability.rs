//! Readability scoring: Flesch reading ease with a degenerate-input
//! fallback, plus the grade/complexity labels shown in the report.

use super::segment;

const NEUTRAL_SCORE: f64 = 50.0;

/// Normalized 0-100 readability score, one decimal.
///
/// Primary is Flesch reading ease over the full text; when the formula
/// cannot be computed (no sentences, no words, no measurable syllables)
/// the fallback approximation takes over.
pub fn score(text: &str) -> f64 {
    flesch_reading_ease(text).unwrap_or_else(|| fallback_score(text))
}

fn flesch_reading_ease(text: &str) -> Option<f64> {
    let sentences = segment::sentences(text);
    let words = segment::words(text);
    if sentences.is_empty() || words.is_empty() {
        return None;
    }

    let syllables: usize = words.iter().map(|w| segment::syllable_estimate(w)).sum();
    if syllables == 0 {
        return None;
    }

    let avg_sentence_length = words.len() as f64 / sentences.len() as f64;
    let syllables_per_word = syllables as f64 / words.len() as f64;

    let raw = 206.835 - 1.015 * avg_sentence_length - 84.6 * syllables_per_word;
    Some(round1(raw.clamp(0.0, 100.0)))
}

/// Flesch-shaped approximation from average sentence and word lengths,
/// used when the syllable-based formula is unavailable.
fn fallback_score(text: &str) -> f64 {
    let sentences = segment::sentences(text);
    let words = segment::words(text);
    if sentences.is_empty() || words.is_empty() {
        return NEUTRAL_SCORE;
    }

    let avg_sentence_length = words.len() as f64 / sentences.len() as f64;
    let avg_word_length =
        words.iter().map(|w| w.chars().count()).sum::<usize>() as f64 / words.len() as f64;

    let raw = 206.835 - 1.015 * avg_sentence_length - 84.6 * avg_word_length / 100.0;
    round1(raw.clamp(0.0, 100.0))
}

/// US reading-grade label for a Flesch score, highest band first.
pub fn grade_label(score: f64) -> &'static str {
    if score >= 90.0 {
        "5th grade"
    } else if score >= 80.0 {
        "6th grade"
    } else if score >= 70.0 {
        "7th grade"
    } else if score >= 60.0 {
        "8th-9th grade"
    } else if score >= 50.0 {
        "10th-12th grade"
    } else if score >= 30.0 {
        "College level"
    } else {
        "Graduate level"
    }
}

pub fn complexity_label(score: f64) -> &'static str {
    if score >= 70.0 {
        "Easy"
    } else if score >= 30.0 {
        "Medium"
    } else {
        "Hard"
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
