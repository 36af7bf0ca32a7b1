//! Keyword extraction: frequency-ranked lowercase tokens with a stable
//! first-seen tie-break, plus the merge policy for externally extracted
//! keyphrases.

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

use regex::Regex;

use crate::text::stopwords;

pub const DEFAULT_MAX_KEYWORDS: usize = 10;

const MIN_TOKEN_CHARS: usize = 3; // tokens must be strictly longer

fn punctuation_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^\w\s]").expect("static regex"))
}

/// Ranked keyword list truncated to `max`.
pub fn extract(text: &str, max: usize) -> Vec<String> {
    let mut ranked = ranked_tokens(text);
    ranked.truncate(max);
    ranked
}

/// Traditional candidate pool: top `2 * max` of the ranking, kept wide so
/// merged external keyphrases displace rather than starve local ones.
pub fn candidate_pool(text: &str, max: usize) -> Vec<String> {
    let mut ranked = ranked_tokens(text);
    ranked.truncate(max * 2);
    ranked
}

/// Merge externally extracted keywords ahead of the traditional pool,
/// dropping exact duplicates and truncating to `max`.
pub fn merge_external(external: Vec<String>, pool: Vec<String>, max: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    external
        .into_iter()
        .chain(pool)
        .filter(|keyword| seen.insert(keyword.clone()))
        .take(max)
        .collect()
}

/// Full frequency ranking: lowercase, punctuation stripped, stopwords and
/// short/non-alphabetic tokens dropped, ties broken by first occurrence.
fn ranked_tokens(text: &str) -> Vec<String> {
    let lowercased = text.to_lowercase();
    let cleaned = punctuation_re().replace_all(&lowercased, " ");

    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, usize> = HashMap::new();

    for token in cleaned.split_whitespace() {
        if token.chars().count() <= MIN_TOKEN_CHARS {
            continue;
        }
        if !token.chars().all(char::is_alphabetic) {
            continue;
        }
        if stopwords::is_stopword(token) {
            continue;
        }
        match counts.get_mut(token) {
            Some(count) => *count += 1,
            None => {
                counts.insert(token.to_string(), 1);
                order.push(token.to_string());
            }
        }
    }

    // stable sort keeps first-seen order between equal counts
    order.sort_by_key(|token| std::cmp::Reverse(counts[token]));
    order
}
