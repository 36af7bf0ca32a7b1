//! Optional external inference capability (Hugging Face style inference
//! API): a sentiment classifier and an extractive keyphrase model.
//!
//! Every failure mode degrades to an explicit `InferenceOutcome` the
//! caller pattern-matches; nothing here ever surfaces an error to the
//! HTTP client. Auth rejection flips a one-way disable flag for the rest
//! of the process lifetime.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::warn;

use crate::config::InferenceConfig;
use crate::error::{AppError, Result};

const SENTIMENT_MODEL: &str = "distilbert-base-uncased-finetuned-sst-2-english";
const KEYPHRASE_MODEL: &str = "ml6team/keyphrase-extraction-kbir-inspec";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
/// Warm-up retries sleep 1s, 2s, 4s before the final attempt.
const MAX_ATTEMPTS: u32 = 4;
const WARMUP_BASE_DELAY: Duration = Duration::from_secs(1);
const RATE_LIMIT_DELAY: Duration = Duration::from_secs(2);

/// Classifier input cap; longer text is cut before the request.
pub const SENTIMENT_INPUT_LIMIT: usize = 512;

/// Explicit outcome of an external call, matched instead of null-checked.
#[derive(Debug, Clone, PartialEq)]
pub enum InferenceOutcome<T> {
    Ok(T),
    /// Capability not configured, or disabled after an auth rejection.
    Unavailable,
    /// Call attempted and failed; callers fall back to local heuristics.
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SentimentPrediction {
    pub label: String,
    pub score: f64,
}

#[async_trait]
pub trait InferenceProvider: Send + Sync {
    async fn classify_sentiment(&self, text: &str) -> InferenceOutcome<SentimentPrediction>;
    async fn extract_keywords(&self, text: &str) -> InferenceOutcome<Vec<String>>;
    /// Whether the capability is configured and not disabled.
    fn is_available(&self) -> bool;
}

/// Provider used when no API token is configured; every call reports the
/// capability as unavailable so the pipeline runs on local heuristics.
pub struct DisabledInference;

#[async_trait]
impl InferenceProvider for DisabledInference {
    async fn classify_sentiment(&self, _text: &str) -> InferenceOutcome<SentimentPrediction> {
        InferenceOutcome::Unavailable
    }

    async fn extract_keywords(&self, _text: &str) -> InferenceOutcome<Vec<String>> {
        InferenceOutcome::Unavailable
    }

    fn is_available(&self) -> bool {
        false
    }
}

pub struct HfInference {
    client: reqwest::Client,
    token: String,
    base_url: String,
    // one-way enabled -> disabled transition on auth failure
    enabled: AtomicBool,
}

impl HfInference {
    pub fn new(config: &InferenceConfig) -> Result<Self> {
        let token = config
            .api_token
            .clone()
            .ok_or_else(|| AppError::config("inference API token not configured"))?;

        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("failed to build inference HTTP client")?;

        Ok(Self {
            client,
            token,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            enabled: AtomicBool::new(true),
        })
    }

    fn model_url(&self, model: &str) -> String {
        format!("{}/models/{}", self.base_url, model)
    }

    async fn send_request(&self, model: &str, payload: &Value) -> Result<reqwest::Response> {
        self.client
            .post(self.model_url(model))
            .bearer_auth(&self.token)
            .json(payload)
            .send()
            .await
            .map_err(|e| AppError::network(e.to_string()))
    }

    /// One model call under the bounded retry policy: warm-up responses
    /// back off exponentially, rate limits wait a fixed delay, auth
    /// rejection disables the client permanently, anything else fails.
    async fn query(&self, model: &str, payload: Value) -> InferenceOutcome<Value> {
        if !self.enabled.load(Ordering::Relaxed) {
            return InferenceOutcome::Unavailable;
        }

        let mut attempt = 0u32;
        loop {
            attempt += 1;

            let response = match self.send_request(model, &payload).await {
                Ok(response) => response,
                Err(e) => return InferenceOutcome::Failed(e.to_string()),
            };

            let status = response.status();
            if status.is_success() {
                return match response.json::<Value>().await {
                    Ok(value) => InferenceOutcome::Ok(value),
                    Err(e) => InferenceOutcome::Failed(format!("malformed response: {e}")),
                };
            }

            if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
                self.enabled.store(false, Ordering::Relaxed);
                warn!(model, "inference auth rejected, disabling external calls");
                return InferenceOutcome::Unavailable;
            }

            if status == StatusCode::SERVICE_UNAVAILABLE && attempt < MAX_ATTEMPTS {
                let delay = WARMUP_BASE_DELAY * 2u32.pow(attempt - 1);
                warn!(model, attempt, delay_secs = delay.as_secs(), "model warming up, retrying");
                tokio::time::sleep(delay).await;
                continue;
            }

            if status == StatusCode::TOO_MANY_REQUESTS && attempt < MAX_ATTEMPTS {
                warn!(model, attempt, delay_secs = RATE_LIMIT_DELAY.as_secs(), "rate limited, retrying");
                tokio::time::sleep(RATE_LIMIT_DELAY).await;
                continue;
            }

            let body = response.text().await.unwrap_or_default();
            let error = AppError::service("inference", format!("{status}: {body}"));
            return InferenceOutcome::Failed(error.to_string());
        }
    }
}

#[async_trait]
impl InferenceProvider for HfInference {
    async fn classify_sentiment(&self, text: &str) -> InferenceOutcome<SentimentPrediction> {
        let input: String = text.chars().take(SENTIMENT_INPUT_LIMIT).collect();
        match self.query(SENTIMENT_MODEL, json!({ "inputs": input })).await {
            InferenceOutcome::Ok(value) => match parse_sentiment(&value) {
                Some(prediction) => InferenceOutcome::Ok(prediction),
                None => InferenceOutcome::Failed("unrecognized sentiment payload".to_string()),
            },
            InferenceOutcome::Unavailable => InferenceOutcome::Unavailable,
            InferenceOutcome::Failed(reason) => InferenceOutcome::Failed(reason),
        }
    }

    async fn extract_keywords(&self, text: &str) -> InferenceOutcome<Vec<String>> {
        match self.query(KEYPHRASE_MODEL, json!({ "inputs": text })).await {
            InferenceOutcome::Ok(value) => match parse_keywords(&value) {
                Some(keywords) => InferenceOutcome::Ok(keywords),
                None => InferenceOutcome::Failed("unrecognized keyphrase payload".to_string()),
            },
            InferenceOutcome::Unavailable => InferenceOutcome::Unavailable,
            InferenceOutcome::Failed(reason) => InferenceOutcome::Failed(reason),
        }
    }

    fn is_available(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }
}

/// Classifier payloads come as `[[{label, score}, ...]]` (or a flat array
/// from some deployments); pick the highest-confidence label.
fn parse_sentiment(value: &Value) -> Option<SentimentPrediction> {
    let items = value.as_array()?;
    let flat = match items.first()? {
        Value::Array(inner) => inner,
        _ => items,
    };

    flat.iter()
        .filter_map(|entry| serde_json::from_value::<SentimentPrediction>(entry.clone()).ok())
        .max_by(|a, b| a.score.total_cmp(&b.score))
}

/// Keyphrase payloads are token-classification entities: `[{word, ...}]`.
/// Order is preserved; duplicates are dropped.
fn parse_keywords(value: &Value) -> Option<Vec<String>> {
    let items = value.as_array()?;

    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for item in items {
        if let Some(word) = item.get("word").and_then(Value::as_str) {
            let word = word.trim();
            if !word.is_empty() && seen.insert(word.to_string()) {
                out.push(word.to_string());
            }
        }
    }
    Some(out)
}
