//! Response value objects for the analysis API - behavior lives WITH data.
//!
//! Field names mirror the wire format the front end consumes (camelCase),
//! so every struct here carries serde renames rather than leaking Rust
//! naming onto the wire.

use serde::{Deserialize, Serialize};

use crate::text::segment;

/// Placeholder domain shown in the synthesized search preview.
pub const PREVIEW_URL: &str = "yoursite.com";

const ERROR_ECHO_LIMIT: usize = 200;

#[derive(Debug, Deserialize)]
pub struct AnalysisRequest {
    pub text: String,
}

// ====== Closed vocabularies ======

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Impact {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Effort {
    #[serde(rename = "Quick Fix")]
    QuickFix,
    Moderate,
    Complex,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Category {
    Content,
    Technical,
    Keywords,
    Links,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HealthStatus {
    Excellent,
    Good,
    Fair,
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
    Error,
}

// ====== Report entities ======

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub impact: Impact,
    pub effort: Effort,
    pub category: Category,
    pub priority: u8,
    pub actionable: bool,
    pub fix_suggestion: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MetaTags {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentHealth {
    pub readability_score: f64,
    pub reading_time: u32,
    pub word_count: usize,
    pub health: HealthStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct HeadingStats {
    pub h1: u32,
    pub h2: u32,
    pub h3: u32,
    pub h4: u32,
    pub issues: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParagraphStats {
    pub total: usize,
    pub average_length: f64,
    pub long_paragraphs: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadabilityInfo {
    pub flesch_score: f64,
    pub grade: String,
    pub complexity: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentStructure {
    pub headings: HeadingStats,
    pub paragraphs: ParagraphStats,
    pub readability: ReadabilityInfo,
    pub linking_suggestions: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GooglePreview {
    pub title: String,
    pub url: String,
    pub description: String,
    pub title_truncated: bool,
    pub description_truncated: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub seo_score: u8,
    pub content_health: ContentHealth,
    pub content_structure: ContentStructure,
    pub recommendations: Vec<Recommendation>,
    pub meta_tags: MetaTags,
    pub google_preview: GooglePreview,
    pub sentiment: Sentiment,
    pub keywords: Vec<String>,
    pub raw_text: String,
}

impl AnalysisResult {
    /// Canned payload for empty or whitespace-only input. The endpoint
    /// never fails on empty input; it returns this well-formed zero report.
    pub fn empty_input() -> Self {
        Self {
            seo_score: 0,
            content_health: ContentHealth {
                readability_score: 0.0,
                reading_time: 0,
                word_count: 0,
                health: HealthStatus::NeedsImprovement,
            },
            content_structure: ContentStructure {
                headings: HeadingStats {
                    h1: 0,
                    h2: 0,
                    h3: 0,
                    h4: 0,
                    issues: vec!["No content provided".to_string()],
                },
                paragraphs: ParagraphStats {
                    total: 0,
                    average_length: 0.0,
                    long_paragraphs: 0,
                },
                readability: ReadabilityInfo {
                    flesch_score: 0.0,
                    grade: "N/A".to_string(),
                    complexity: "Medium".to_string(),
                },
                linking_suggestions: vec!["Add content to analyze".to_string()],
            },
            recommendations: vec![Recommendation {
                id: 1,
                title: "Add Content to Analyze".to_string(),
                description:
                    "Please provide content to analyze for SEO optimization opportunities."
                        .to_string(),
                impact: Impact::High,
                effort: Effort::QuickFix,
                category: Category::Content,
                priority: 1,
                actionable: true,
                fix_suggestion: "Paste your content into the text area and click analyze again."
                    .to_string(),
            }],
            meta_tags: MetaTags {
                title: "No Content".to_string(),
                description: "No content provided for analysis".to_string(),
                keywords: vec![],
            },
            google_preview: GooglePreview {
                title: "No Content".to_string(),
                url: PREVIEW_URL.to_string(),
                description: "No content provided for analysis".to_string(),
                title_truncated: false,
                description_truncated: false,
            },
            sentiment: Sentiment::Neutral,
            keywords: vec![],
            raw_text: "No content to analyze".to_string(),
        }
    }

    /// Canned payload for an unexpected internal failure. The endpoint has
    /// an unconditional success contract; failure is communicated inside
    /// the payload, echoing up to 200 chars of the original input.
    pub fn analysis_error(original_text: &str) -> Self {
        let raw_text = if original_text.chars().count() > ERROR_ECHO_LIMIT {
            format!("{}...", segment::clip(original_text, ERROR_ECHO_LIMIT))
        } else {
            original_text.to_string()
        };

        Self {
            seo_score: 50,
            content_health: ContentHealth {
                readability_score: 50.0,
                reading_time: 1,
                word_count: 0,
                health: HealthStatus::Error,
            },
            content_structure: ContentStructure {
                headings: HeadingStats {
                    h1: 0,
                    h2: 0,
                    h3: 0,
                    h4: 0,
                    issues: vec!["Analysis error occurred".to_string()],
                },
                paragraphs: ParagraphStats {
                    total: 0,
                    average_length: 0.0,
                    long_paragraphs: 0,
                },
                readability: ReadabilityInfo {
                    flesch_score: 50.0,
                    grade: "Error".to_string(),
                    complexity: "Medium".to_string(),
                },
                linking_suggestions: vec!["Try analyzing different content".to_string()],
            },
            recommendations: vec![Recommendation {
                id: 1,
                title: "Analysis Error".to_string(),
                description:
                    "An error occurred during analysis. Please try again with different content."
                        .to_string(),
                impact: Impact::High,
                effort: Effort::QuickFix,
                category: Category::Technical,
                priority: 1,
                actionable: true,
                fix_suggestion:
                    "Try with shorter content or check for special characters that might cause issues."
                        .to_string(),
            }],
            meta_tags: MetaTags {
                title: "Analysis Error".to_string(),
                description: "Error occurred during analysis".to_string(),
                keywords: vec![],
            },
            google_preview: GooglePreview {
                title: "Analysis Error".to_string(),
                url: PREVIEW_URL.to_string(),
                description: "Error occurred during analysis".to_string(),
                title_truncated: false,
                description_truncated: false,
            },
            sentiment: Sentiment::Neutral,
            keywords: vec![],
            raw_text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_format_uses_camel_case_and_literal_labels() {
        let value = serde_json::to_value(AnalysisResult::empty_input()).unwrap();

        assert_eq!(value["seoScore"], 0);
        assert_eq!(value["contentHealth"]["health"], "Needs Improvement");
        assert_eq!(value["contentHealth"]["readingTime"], 0);
        assert_eq!(value["contentHealth"]["wordCount"], 0);
        assert_eq!(value["contentStructure"]["readability"]["fleschScore"], 0.0);
        assert_eq!(value["googlePreview"]["titleTruncated"], false);
        assert_eq!(value["recommendations"][0]["effort"], "Quick Fix");
        assert!(value["recommendations"][0]["fixSuggestion"].is_string());
        assert_eq!(value["rawText"], "No content to analyze");
    }

    #[test]
    fn error_payload_echoes_at_most_200_chars() {
        let long_input = "x".repeat(300);
        let result = AnalysisResult::analysis_error(&long_input);
        assert_eq!(result.raw_text.chars().count(), 203);
        assert!(result.raw_text.ends_with("..."));
        assert_eq!(result.content_health.health, HealthStatus::Error);
        assert_eq!(result.seo_score, 50);

        let short = AnalysisResult::analysis_error("short input");
        assert_eq!(short.raw_text, "short input");
    }
}
