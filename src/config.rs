//! Process configuration, read from the environment once at startup and
//! never mutated afterwards.

use std::env;
use std::net::SocketAddr;

use crate::error::{AppError, Result};

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";
const DEFAULT_INFERENCE_BASE_URL: &str = "https://api-inference.huggingface.co";

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub inference: InferenceConfig,
}

/// Configuration for the optional external inference capability.
#[derive(Debug, Clone)]
pub struct InferenceConfig {
    /// API token; `None` disables external inference entirely.
    pub api_token: Option<String>,
    pub base_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .parse()
            .map_err(|_| AppError::config(format!("invalid BIND_ADDR '{}'", bind_addr)))?;

        let api_token = env::var("HF_API_TOKEN")
            .ok()
            .filter(|token| !token.trim().is_empty());

        let base_url = env::var("INFERENCE_BASE_URL")
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_INFERENCE_BASE_URL.to_string());

        Ok(Self {
            bind_addr,
            inference: InferenceConfig { api_token, base_url },
        })
    }
}

impl InferenceConfig {
    pub fn is_configured(&self) -> bool {
        self.api_token.is_some()
    }
}
