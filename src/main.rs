use std::sync::Arc;

use anyhow::Result;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use textinsikt::config::Config;
use textinsikt::routes::{create_router, AppState};
use textinsikt::service::analyzer::SeoAnalyzer;
use textinsikt::service::inference::{DisabledInference, HfInference, InferenceProvider};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;

    let inference: Arc<dyn InferenceProvider> = if config.inference.is_configured() {
        match HfInference::new(&config.inference) {
            Ok(client) => {
                info!("external inference configured");
                Arc::new(client)
            }
            Err(e) => {
                warn!("failed to initialize inference client ({e:#}), running with local analysis only");
                Arc::new(DisabledInference)
            }
        }
    } else {
        warn!("no inference API token configured, running with local analysis only");
        Arc::new(DisabledInference)
    };

    let state = AppState {
        analyzer: Arc::new(SeoAnalyzer::new(inference.clone())),
        inference,
    };
    let app = create_router(state);

    let listener = TcpListener::bind(config.bind_addr).await?;
    info!("content analysis service listening on http://{}", config.bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
