// AI-draft pipeline: prompt construction, the single completion call,
// response parsing, and structural validation of the returned fragment.
// All LLM calls go through llm_client — no direct Anthropic API calls here.

pub mod generator;
pub mod handlers;
pub mod prompts;
pub mod validate;
