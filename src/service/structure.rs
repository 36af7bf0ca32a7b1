//! Content-structure heuristics: heading detection over plain text,
//! paragraph statistics, and internal-linking suggestions.

use std::sync::OnceLock;

use regex::Regex;

use crate::domain::models::{ContentStructure, HeadingStats, ParagraphStats, ReadabilityInfo};
use crate::service::keywords;
use crate::text::{readability, segment};

const HEADING_MAX_CHARS: usize = 100;
const H1_MAX_WORDS: usize = 8;
const H2_MAX_WORDS: usize = 10;
const MIN_PARAGRAPH_CHARS: usize = 20;
const LONG_PARAGRAPH_WORDS: usize = 150;
const MAX_LINKING_SUGGESTIONS: usize = 4;
const STRUCTURE_KEYWORD_POOL: usize = 20;

const TUTORIAL_KEYWORDS: &[&str] = &["guide", "tutorial", "how", "step"];
const PRODUCT_KEYWORDS: &[&str] = &["product", "service", "solution", "tool"];
const RESEARCH_KEYWORDS: &[&str] = &["research", "study", "data", "analysis"];

fn paragraph_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\n\s*\n").expect("static regex"))
}

/// Analyze headings, paragraphs and linking opportunities. The readability
/// score is computed once by the caller and threaded through so the report
/// stays internally consistent.
pub fn analyze(
    text: &str,
    readability_score: f64,
    external_suggestions: &[String],
) -> ContentStructure {
    let keywords = keywords::extract(text, STRUCTURE_KEYWORD_POOL);

    ContentStructure {
        headings: heading_stats(text),
        paragraphs: paragraph_stats(text),
        readability: ReadabilityInfo {
            flesch_score: readability_score,
            grade: readability::grade_label(readability_score).to_string(),
            complexity: readability::complexity_label(readability_score).to_string(),
        },
        linking_suggestions: linking_suggestions(&keywords, external_suggestions),
    }
}

fn heading_stats(text: &str) -> HeadingStats {
    let mut stats = HeadingStats {
        h1: 0,
        h2: 0,
        h3: 0,
        h4: 0,
        issues: Vec::new(),
    };

    for raw in text.lines() {
        let line = raw.trim();
        if line.is_empty() || line.chars().count() > HEADING_MAX_CHARS {
            continue;
        }

        // markdown prefixes and the plain-text heuristics are additive
        // detectors; a line may count under both
        if line.starts_with("# ") {
            stats.h1 += 1;
        } else if line.starts_with("## ") {
            stats.h2 += 1;
        } else if line.starts_with("### ") {
            stats.h3 += 1;
        }

        let word_count = line.split_whitespace().count();
        if is_all_uppercase(line) && word_count <= H1_MAX_WORDS {
            stats.h1 += 1;
        } else if is_title_case(line) && !line.ends_with('.') && word_count <= H2_MAX_WORDS {
            stats.h2 += 1;
        }
    }

    if stats.h1 == 0 && stats.h2 == 0 {
        stats
            .issues
            .push("No clear headings found - consider adding structure".to_string());
    }
    if stats.h1 > 1 {
        stats
            .issues
            .push("Multiple H1-level headings detected".to_string());
    }

    stats
}

/// At least one cased character and no lowercase ones.
fn is_all_uppercase(line: &str) -> bool {
    let mut has_cased = false;
    for c in line.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            has_cased = true;
        }
    }
    has_cased
}

/// Every word starts with an uppercase letter followed by lowercase ones;
/// words without letters are ignored.
fn is_title_case(line: &str) -> bool {
    line.split_whitespace().all(|word| {
        let mut letters = word.chars().filter(|c| c.is_alphabetic());
        match letters.next() {
            Some(first) => first.is_uppercase() && letters.all(|c| c.is_lowercase()),
            None => true,
        }
    })
}

fn paragraph_stats(text: &str) -> ParagraphStats {
    let blocks: Vec<&str> = paragraph_re()
        .split(text)
        .map(str::trim)
        .filter(|block| block.chars().count() > MIN_PARAGRAPH_CHARS)
        .collect();

    let word_counts: Vec<usize> = blocks.iter().map(|b| segment::words(b).len()).collect();

    let average_length = if word_counts.is_empty() {
        0.0
    } else {
        let avg = word_counts.iter().sum::<usize>() as f64 / word_counts.len() as f64;
        (avg * 10.0).round() / 10.0
    };

    ParagraphStats {
        total: blocks.len(),
        average_length,
        long_paragraphs: word_counts
            .iter()
            .filter(|&&count| count > LONG_PARAGRAPH_WORDS)
            .count(),
    }
}

fn linking_suggestions(keywords: &[String], external: &[String]) -> Vec<String> {
    let contains_any = |category: &[&str]| {
        keywords
            .iter()
            .any(|keyword| category.contains(&keyword.as_str()))
    };

    let mut derived: Vec<String> = Vec::new();
    if contains_any(TUTORIAL_KEYWORDS) {
        derived.push("Link to related tutorials or guides on your website".to_string());
    }
    if contains_any(PRODUCT_KEYWORDS) {
        derived.push("Add links to relevant product or service pages".to_string());
    }
    if contains_any(RESEARCH_KEYWORDS) {
        derived.push("Link to supporting research or case studies".to_string());
    }

    if derived.is_empty() {
        derived = vec![
            "Add links to related articles on your website".to_string(),
            "Include links to your main category pages".to_string(),
            "Link to your contact or about page where relevant".to_string(),
        ];
    }

    let mut out: Vec<String> = external.to_vec();
    out.extend(derived);
    out.truncate(MAX_LINKING_SUGGESTIONS);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uppercase_lines_count_as_h1() {
        let text = "INTRODUCTION\n\nSome body text that runs a bit longer here.";
        let stats = heading_stats(text);
        assert_eq!(stats.h1, 1);
        assert!(stats.issues.is_empty());
    }

    #[test]
    fn title_case_lines_count_as_h2() {
        let text = "Getting Started With Widgets\n\nbody text follows in lowercase here.";
        let stats = heading_stats(text);
        assert_eq!(stats.h1, 0);
        assert_eq!(stats.h2, 1);
    }

    #[test]
    fn markdown_prefixes_map_to_levels() {
        let text = "# main heading\n## a section\n### a subsection\nplain body text here.";
        let stats = heading_stats(text);
        assert_eq!(stats.h1, 1);
        assert_eq!(stats.h2, 1);
        assert_eq!(stats.h3, 1);
    }

    #[test]
    fn multiple_h1_headings_raise_an_issue() {
        let text = "FIRST HEADING\nsome body text in between lines.\nSECOND HEADING";
        let stats = heading_stats(text);
        assert_eq!(stats.h1, 2);
        assert!(stats
            .issues
            .iter()
            .any(|issue| issue == "Multiple H1-level headings detected"));
    }

    #[test]
    fn no_headings_raises_the_structure_issue() {
        let text = "just some flowing lowercase prose without any heading at all.";
        let stats = heading_stats(text);
        assert_eq!(stats.h1 + stats.h2, 0);
        assert_eq!(
            stats.issues,
            vec!["No clear headings found - consider adding structure".to_string()]
        );
    }

    #[test]
    fn title_case_with_trailing_period_is_not_a_heading() {
        let stats = heading_stats("Hi.");
        assert_eq!(stats.h2, 0);
    }

    #[test]
    fn paragraphs_are_blank_line_blocks_over_20_chars() {
        let text = "This first paragraph is long enough to count for the statistics.\n\n\
                    tiny\n\n\
                    The second real paragraph also clears the twenty character bar.";
        let stats = paragraph_stats(text);
        assert_eq!(stats.total, 2);
        assert!(stats.average_length > 0.0);
        assert_eq!(stats.long_paragraphs, 0);
    }

    #[test]
    fn long_paragraphs_are_counted() {
        let long_block = "word ".repeat(160);
        let text = format!("{}\n\nA short closing paragraph to finish.", long_block.trim());
        let stats = paragraph_stats(&text);
        assert_eq!(stats.total, 2);
        assert_eq!(stats.long_paragraphs, 1);
    }

    #[test]
    fn no_paragraphs_yields_zeros() {
        let stats = paragraph_stats("tiny");
        assert_eq!(stats.total, 0);
        assert_eq!(stats.average_length, 0.0);
        assert_eq!(stats.long_paragraphs, 0);
    }

    #[test]
    fn category_keywords_drive_linking_suggestions() {
        let keywords = vec!["tutorial".to_string(), "data".to_string()];
        let suggestions = linking_suggestions(&keywords, &[]);
        assert_eq!(
            suggestions,
            vec![
                "Link to related tutorials or guides on your website".to_string(),
                "Link to supporting research or case studies".to_string(),
            ]
        );
    }

    #[test]
    fn generic_defaults_when_no_category_matches() {
        let keywords = vec!["coffee".to_string()];
        let suggestions = linking_suggestions(&keywords, &[]);
        assert_eq!(suggestions.len(), 3);
        assert!(suggestions[0].starts_with("Add links to related articles"));
    }

    #[test]
    fn external_suggestions_are_prepended_and_list_capped_at_4() {
        let keywords = vec![
            "guide".to_string(),
            "product".to_string(),
            "research".to_string(),
        ];
        let external = vec!["Link the glossary page".to_string()];
        let suggestions = linking_suggestions(&keywords, &external);
        assert_eq!(suggestions.len(), 4);
        assert_eq!(suggestions[0], "Link the glossary page");
    }
}
