use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::rate_limit::RateLimiter;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
    /// Request gate, constructor-provided so tests build isolated instances.
    pub gate: Arc<RateLimiter>,
    #[allow(dead_code)]
    pub config: Config,
}
