//! Word and sentence segmentation primitives.
//!
//! Everything downstream (keywords, readability, structure, meta text)
//! works on these tokenizers, so their behavior is deliberately plain:
//! sentences end at runs of `.`/`!`/`?`, words are whitespace tokens with
//! surrounding punctuation stripped.

/// Split text into trimmed sentences, each keeping its terminator run.
pub fn sentences(text: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start = 0;
    let mut in_terminator = false;

    for (i, c) in text.char_indices() {
        let terminator = matches!(c, '.' | '!' | '?');
        if in_terminator && !terminator {
            let sentence = text[start..i].trim();
            if !sentence.is_empty() {
                out.push(sentence);
            }
            start = i;
        }
        in_terminator = terminator;
    }

    let tail = text[start..].trim();
    if !tail.is_empty() {
        out.push(tail);
    }
    out
}

/// Whitespace tokens with leading/trailing punctuation stripped.
pub fn words(text: &str) -> Vec<&str> {
    text.split_whitespace()
        .map(|token| token.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|token| !token.is_empty())
        .collect()
}

/// Count of purely alphabetic words, the basis for reading time and the
/// content-length score bucket.
pub fn word_count(text: &str) -> usize {
    words(text)
        .iter()
        .filter(|w| w.chars().all(char::is_alphabetic))
        .count()
}

/// Clip to at most `max` characters without splitting a scalar value.
pub fn clip(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Heuristic syllable estimate: vowel groups, minus a silent trailing `e`,
/// at least one per word with any letters.
pub fn syllable_estimate(word: &str) -> usize {
    let normalized: String = word
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .collect::<String>()
        .to_lowercase();
    if normalized.is_empty() {
        return 0;
    }

    let mut count = 0;
    let mut prev_vowel = false;
    for c in normalized.chars() {
        let vowel = matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
        if vowel && !prev_vowel {
            count += 1;
        }
        prev_vowel = vowel;
    }

    if normalized.ends_with('e') && !normalized.ends_with("le") && count > 1 {
        count -= 1;
    }
    count.max(1)
}
