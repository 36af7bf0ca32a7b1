//! End-to-end tests for the analysis API.
//!
//! The router is exercised in-process with the external inference
//! capability disabled, so every response is a deterministic function of
//! the request body.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use textinsikt::routes::{create_router, AppState};
use textinsikt::service::analyzer::SeoAnalyzer;
use textinsikt::service::inference::{DisabledInference, InferenceProvider};

fn test_app() -> axum::Router {
    let inference: Arc<dyn InferenceProvider> = Arc::new(DisabledInference);
    create_router(AppState {
        analyzer: Arc::new(SeoAnalyzer::new(inference.clone())),
        inference,
    })
}

async fn post_analyze_raw(text: &str) -> Vec<u8> {
    let response = test_app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/analyze")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json!({ "text": text }).to_string()))
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes()
        .to_vec()
}

async fn post_analyze(text: &str) -> Value {
    serde_json::from_slice(&post_analyze_raw(text).await).expect("valid JSON")
}

/// Well-structured input engineered to max out every score bucket:
/// 600+ words, 8+ keywords, a 30-60 char title line, a 120-160 char
/// greedy description, and easy-to-read prose.
fn long_structured_text() -> String {
    let mut text = String::from("The Complete Guide To Better Coffee Brewing\n\n");
    for _ in 0..10 {
        text.push_str(
            "This guide helps you brew fresh coffee with care each day. \
             Good beans make a big cup. \
             Water heat can change the taste of your brew a lot. \
             Take time to rinse the filter and warm the mugs first. \
             A scale helps you keep the dose the same each time. \
             Store the beans in a dark jar away from the sun.\n\n",
        );
    }
    text
}

#[tokio::test]
async fn empty_input_gets_the_canned_zero_report() {
    let body = post_analyze("").await;

    assert_eq!(body["seoScore"], 0);
    assert_eq!(body["contentHealth"]["health"], "Needs Improvement");
    assert_eq!(body["contentHealth"]["wordCount"], 0);
    assert_eq!(body["contentHealth"]["readingTime"], 0);
    assert_eq!(body["recommendations"].as_array().unwrap().len(), 1);
    assert_eq!(body["recommendations"][0]["title"], "Add Content to Analyze");
    assert_eq!(body["metaTags"]["title"], "No Content");
    assert_eq!(body["sentiment"], "Neutral");
}

#[tokio::test]
async fn whitespace_only_input_is_treated_as_empty() {
    let body = post_analyze("   \n\t  ").await;
    assert_eq!(body["seoScore"], 0);
    assert_eq!(body["recommendations"][0]["title"], "Add Content to Analyze");
}

#[tokio::test]
async fn short_text_reports_minimal_signals() {
    let body = post_analyze("Hi.").await;

    assert_eq!(body["contentHealth"]["wordCount"], 1);
    assert_eq!(body["contentHealth"]["readingTime"], 1);
    assert_eq!(body["contentHealth"]["health"], "Needs Improvement");

    let titles: Vec<&str> = body["recommendations"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["title"].as_str().unwrap())
        .collect();
    assert!(titles.contains(&"Increase Content Length"));
}

#[tokio::test]
async fn punctuation_only_input_still_succeeds() {
    let body = post_analyze("!!! ??? ...").await;
    assert_eq!(body["contentHealth"]["wordCount"], 0);
    assert_eq!(body["contentHealth"]["readingTime"], 0);
    assert!(body["seoScore"].as_u64().unwrap() <= 100);
}

#[tokio::test]
async fn long_structured_text_scores_100() {
    let body = post_analyze(&long_structured_text()).await;

    assert_eq!(body["seoScore"], 100, "expected a perfect score: {body:#}");
    assert_eq!(body["contentHealth"]["health"], "Excellent");
    assert!(body["contentHealth"]["wordCount"].as_u64().unwrap() >= 600);
    assert!(body["keywords"].as_array().unwrap().len() >= 8);
    assert_eq!(
        body["metaTags"]["title"],
        "The Complete Guide To Better Coffee Brewing"
    );
    assert_eq!(body["googlePreview"]["titleTruncated"], false);
}

#[tokio::test]
async fn analysis_is_idempotent_byte_for_byte() {
    let text = long_structured_text();
    let first = post_analyze_raw(&text).await;
    let second = post_analyze_raw(&text).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn title_truncation_flag_follows_the_60_char_boundary() {
    // a single 60-char line qualifies as the title and is not truncated
    let body = post_analyze(&"x".repeat(60)).await;
    assert_eq!(body["googlePreview"]["titleTruncated"], false);
    assert_eq!(
        body["googlePreview"]["title"].as_str().unwrap().chars().count(),
        60
    );

    // one char more flips the flag and the display title ends in "..."
    let body = post_analyze(&"x".repeat(61)).await;
    assert_eq!(body["googlePreview"]["titleTruncated"], true);
    let display = body["googlePreview"]["title"].as_str().unwrap();
    assert_eq!(display, format!("{}...", "x".repeat(57)));
}

#[tokio::test]
async fn recommendation_ids_are_contiguous_and_capped() {
    let body = post_analyze("Tiny.").await;
    let recommendations = body["recommendations"].as_array().unwrap();
    assert!(recommendations.len() <= 8);
    for (index, recommendation) in recommendations.iter().enumerate() {
        assert_eq!(recommendation["id"], index as u64 + 1);
    }
}

#[tokio::test]
async fn root_reports_liveness() {
    let response = test_app()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["message"], "SEO Analysis API is running");
}

#[tokio::test]
async fn health_reports_inference_availability() {
    let response = test_app()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["inference_available"], false);
}
