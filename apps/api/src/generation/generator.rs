//! Strategy draft generation — orchestrates the AI-draft pipeline.
//!
//! Flow: build user prompt → single LLM call → fence-strip + parse →
//!       structural validation → return fragment.
//!
//! Every path is terminal: there are no automatic retries anywhere in the
//! pipeline. A failed draft is reported to the user, who re-submits.

use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::generation::prompts::{
    BACKGROUND_FALLBACK, CONTEXT_PROMPT_TEMPLATE, INDUSTRY_FALLBACK, STRATEGY_SYSTEM,
};
use crate::generation::validate::validate_fragment;
use crate::llm_client::LlmClient;
use crate::models::strategy::StrategyFragment;

/// Request body for `POST /api/generate`. Only the company name is required;
/// missing context facts are replaced with placeholders in the prompt.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub company_name: String,
    pub industry: Option<String>,
    pub business_background: Option<String>,
}

/// Runs the draft pipeline and returns the parsed, validated fragment.
///
/// The caller has already passed admission and input validation; from here
/// every failure maps to the generic generation-failed response, with parse
/// and structural-validation failures carrying their own detail.
pub async fn generate_strategy(
    llm: &LlmClient,
    request: &GenerateRequest,
) -> Result<StrategyFragment, AppError> {
    let prompt = build_context_prompt(request);

    info!("Requesting strategy draft for '{}'", request.company_name.trim());

    let fragment: StrategyFragment = llm
        .call_json(&prompt, STRATEGY_SYSTEM)
        .await
        .map_err(|e| AppError::Generation(e.to_string()))?;

    validate_fragment(&fragment).map_err(AppError::DraftInvalid)?;

    info!(
        "Draft fragment generated: {} pillars for '{}'",
        fragment.pillars.len(),
        request.company_name.trim()
    );

    Ok(fragment)
}

/// Fills the context template with the caller's facts. Empty or absent
/// optional facts become their placeholders; the company name is interpolated
/// as supplied.
pub fn build_context_prompt(request: &GenerateRequest) -> String {
    let industry = request
        .industry
        .as_deref()
        .filter(|s| !s.is_empty())
        .unwrap_or(INDUSTRY_FALLBACK);
    let background = request
        .business_background
        .as_deref()
        .filter(|s| !s.is_empty())
        .unwrap_or(BACKGROUND_FALLBACK);

    CONTEXT_PROMPT_TEMPLATE
        .replace("{company_name}", &request.company_name)
        .replace("{industry}", industry)
        .replace("{business_background}", background)
}
