//! Axum route handler for the draft generation endpoint.
//!
//! Request lifecycle (each step terminal on failure):
//! admission → input validation → build + call → parse + validate → 200.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::HeaderMap,
    Json,
};

use crate::errors::AppError;
use crate::generation::generator::{generate_strategy, GenerateRequest};
use crate::models::strategy::StrategyFragment;
use crate::rate_limit::caller_key;
use crate::state::AppState;

/// POST /api/generate
///
/// Admission runs before body validation, so an over-quota caller is turned
/// away without reading the payload or touching the provider. An unparseable
/// body reports the same validation error as a missing company name.
pub async fn handle_generate(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<StrategyFragment>, AppError> {
    let key = caller_key(&headers);
    if !state.gate.allow(&key) {
        return Err(AppError::RateLimited);
    }

    let Ok(Json(request)) = body else {
        return Err(AppError::Validation("Company name is required.".to_string()));
    };
    if request.company_name.trim().is_empty() {
        return Err(AppError::Validation("Company name is required.".to_string()));
    }

    let fragment = generate_strategy(&state.llm, &request).await?;

    Ok(Json(fragment))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::util::ServiceExt;

    use crate::config::Config;
    use crate::llm_client::LlmClient;
    use crate::rate_limit::{RateLimiter, DAILY_LIMIT};
    use crate::routes::build_router;
    use crate::state::AppState;

    fn test_state() -> AppState {
        AppState {
            llm: LlmClient::new("test-key".to_string()),
            gate: Arc::new(RateLimiter::new()),
            config: Config {
                anthropic_api_key: "test-key".to_string(),
                port: 8080,
                rust_log: "info".to_string(),
            },
        }
    }

    fn generate_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/generate")
            .header("content-type", "application/json")
            .header("x-forwarded-for", "203.0.113.9")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn error_body(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_blank_company_name_returns_400() {
        let app = build_router(test_state());
        let response = app
            .oneshot(generate_request(r#"{"companyName": "  "}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = error_body(response).await;
        assert_eq!(body["error"], "Company name is required.");
    }

    #[tokio::test]
    async fn test_missing_company_name_returns_400() {
        let app = build_router(test_state());
        let response = app
            .oneshot(generate_request(r#"{"industry": "Software"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = error_body(response).await;
        assert_eq!(body["error"], "Company name is required.");
    }

    #[tokio::test]
    async fn test_unparseable_body_returns_400() {
        let app = build_router(test_state());
        let response = app
            .oneshot(generate_request("this is not json"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = error_body(response).await;
        assert_eq!(body["error"], "Company name is required.");
    }

    #[tokio::test]
    async fn test_exhausted_caller_gets_429_despite_valid_body() {
        let state = test_state();
        for _ in 0..DAILY_LIMIT {
            assert!(state.gate.allow("203.0.113.9"));
        }

        // Fully valid body; admission still rejects before any provider call
        let app = build_router(state);
        let response = app
            .oneshot(generate_request(
                r#"{"companyName": "Acme Corp", "industry": "Software"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
        let body = error_body(response).await;
        assert!(body["error"].as_str().unwrap().contains("daily limit"));
    }

    #[tokio::test]
    async fn test_callers_are_bucketed_by_forwarded_address() {
        let state = test_state();
        for _ in 0..=DAILY_LIMIT {
            state.gate.allow("203.0.113.9");
        }

        // Different caller address: same body is admitted past the gate (the
        // request then fails at the provider stage, which is a 500, not a 429)
        let app = build_router(state);
        let request = Request::builder()
            .method("POST")
            .uri("/api/generate")
            .header("content-type", "application/json")
            .header("x-forwarded-for", "198.51.100.23")
            .body(Body::from(r#"{"companyName": ""}"#.to_string()))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_health_endpoint_is_open() {
        let app = build_router(test_state());
        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
