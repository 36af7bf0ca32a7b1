//! Orchestrates the analysis pipeline and assembles the final report.
//!
//! Data flows strictly downstream: raw text -> intermediate signals ->
//! report. Derived values are computed once up front and the result struct
//! is built in one place at the end.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::models::{AnalysisResult, ContentHealth, MetaTags, Sentiment};
use crate::service::inference::{InferenceOutcome, InferenceProvider};
use crate::service::recommend::RuleContext;
use crate::service::{keywords, meta, recommend, scoring, sentiment, structure};
use crate::text::{readability, segment};

/// Words per minute assumed for the reading-time estimate.
const READING_SPEED_WPM: f64 = 200.0;

const META_KEYWORD_LIMIT: usize = 10;

pub struct SeoAnalyzer {
    inference: Arc<dyn InferenceProvider>,
}

impl SeoAnalyzer {
    pub fn new(inference: Arc<dyn InferenceProvider>) -> Self {
        Self { inference }
    }

    /// Perform the complete analysis. Infallible by construction; the
    /// route layer handles empty input and panic isolation.
    pub async fn analyze(&self, text: &str) -> AnalysisResult {
        let title = meta::extract_title(text);
        let description = meta::generate_description(text);
        let keywords = self.gather_keywords(text).await;
        let readability_score = readability::score(text);
        let word_count = segment::word_count(text);
        let sentiment = self.classify_sentiment(text).await;
        let summary = meta::generate_summary(text);

        let content_structure = structure::analyze(text, readability_score, &[]);
        let google_preview = meta::build_preview(&title, &description);

        let seo_score =
            scoring::seo_score(readability_score, word_count, keywords.len(), &title, &description);
        let health = scoring::content_health(readability_score, word_count, keywords.len());

        let recommendations = recommend::generate(&RuleContext {
            title: &title,
            description: &description,
            keywords: &keywords,
            word_count,
            readability: readability_score,
            h1_count: content_structure.headings.h1,
            h2_count: content_structure.headings.h2,
        });

        AnalysisResult {
            seo_score,
            content_health: ContentHealth {
                readability_score,
                reading_time: reading_time(word_count),
                word_count,
                health,
            },
            content_structure,
            recommendations,
            meta_tags: MetaTags {
                title: title.clone(),
                description: description.clone(),
                keywords: keywords.iter().take(META_KEYWORD_LIMIT).cloned().collect(),
            },
            google_preview,
            sentiment,
            keywords,
            raw_text: summary,
        }
    }

    /// Traditional frequency ranking, widened to a candidate pool and
    /// merged with externally extracted keyphrases when available.
    async fn gather_keywords(&self, text: &str) -> Vec<String> {
        let pool = keywords::candidate_pool(text, keywords::DEFAULT_MAX_KEYWORDS);

        let external = match self.inference.extract_keywords(text).await {
            InferenceOutcome::Ok(keyphrases) => keyphrases,
            InferenceOutcome::Unavailable => Vec::new(),
            InferenceOutcome::Failed(reason) => {
                warn!(%reason, "external keyword extraction failed, using traditional ranking");
                Vec::new()
            }
        };

        keywords::merge_external(external, pool, keywords::DEFAULT_MAX_KEYWORDS)
    }

    async fn classify_sentiment(&self, text: &str) -> Sentiment {
        match self.inference.classify_sentiment(text).await {
            InferenceOutcome::Ok(prediction) => {
                debug!(label = %prediction.label, confidence = prediction.score, "external sentiment");
                sentiment::map_external_label(&prediction.label)
            }
            InferenceOutcome::Unavailable => sentiment::local_estimate(text),
            InferenceOutcome::Failed(reason) => {
                warn!(%reason, "external sentiment failed, using local estimate");
                sentiment::local_estimate(text)
            }
        }
    }
}

/// Minutes at the assumed reading speed; at least 1 whenever any words
/// were counted, 0 otherwise.
fn reading_time(word_count: usize) -> u32 {
    if word_count == 0 {
        return 0;
    }
    ((word_count as f64 / READING_SPEED_WPM).round() as u32).max(1)
}
