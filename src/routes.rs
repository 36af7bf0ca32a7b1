//! HTTP surface: one analysis endpoint plus liveness and health probes.
//!
//! `/analyze` has an unconditional success contract: empty input and
//! internal failures both come back as HTTP 200 with well-formed canned
//! payloads, so the front end always has a result to render.

use std::sync::Arc;

use axum::extract::State;
use axum::response::Json;
use axum::routing::{get, post};
use axum::Router;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::domain::models::{AnalysisRequest, AnalysisResult};
use crate::service::analyzer::SeoAnalyzer;
use crate::service::inference::InferenceProvider;

#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<SeoAnalyzer>,
    pub inference: Arc<dyn InferenceProvider>,
}

#[derive(Debug, Serialize)]
pub struct ServiceHealth {
    pub status: &'static str,
    pub service: &'static str,
    pub timestamp: DateTime<Utc>,
    pub inference_available: bool,
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/analyze", post(analyze_content))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "SEO Analysis API is running" }))
}

async fn health_check(State(state): State<AppState>) -> Json<ServiceHealth> {
    Json(ServiceHealth {
        status: "healthy",
        service: env!("CARGO_PKG_NAME"),
        timestamp: Utc::now(),
        inference_available: state.inference.is_available(),
    })
}

async fn analyze_content(
    State(state): State<AppState>,
    Json(request): Json<AnalysisRequest>,
) -> Json<AnalysisResult> {
    if request.text.trim().is_empty() {
        return Json(AnalysisResult::empty_input());
    }

    // run the pipeline in its own task so an unexpected panic degrades to
    // the canned error payload instead of tearing down the connection
    let analyzer = state.analyzer.clone();
    let text = request.text.clone();
    let outcome = tokio::spawn(async move { analyzer.analyze(&text).await }).await;

    match outcome {
        Ok(result) => {
            info!(
                seo_score = result.seo_score,
                word_count = result.content_health.word_count,
                "analysis complete"
            );
            Json(result)
        }
        Err(join_error) => {
            error!("analysis task failed: {join_error}");
            Json(AnalysisResult::analysis_error(&request.text))
        }
    }
}
