//! HTTP request handlers.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, DefaultBodyLimit, Json, State},
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use serde_json::Value;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::observability::{self, RequestContext, REQUEST_ID_HEADER};
use super::response::ApiError;
use super::state::AppState;
use crate::count::{utc_timestamp, Limits};
use crate::error::UtcError;
use crate::models::{supported_models, ModelInfo};

/// Token count endpoint path
pub const TOKEN_COUNT_PATH: &str = "/utc/v0/token-count";

/// Model listing endpoint path
pub const MODELS_PATH: &str = "/utc/v0/models";

/// Create the API router
pub fn create_router(state: Arc<AppState>) -> Router {
    let max_body_size = state.config.max_body_size;
    let cors_enabled = state.config.cors_enabled;

    let router = Router::new()
        // Health and status
        .route("/health", get(health_check))
        .route("/status", get(status))
        // Token counting
        .route(TOKEN_COUNT_PATH, post(token_count))
        .route(MODELS_PATH, get(list_models))
        .layer(DefaultBodyLimit::max(max_body_size))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    if cors_enabled {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub timestamp: String,
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        service: crate::SERVICE_NAME,
        version: crate::VERSION,
        timestamp: utc_timestamp(),
    })
}

/// Status response
#[derive(Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub spec_version: &'static str,
    pub uptime_secs: u64,
    pub supported_models: usize,
    pub limits: Limits,
}

/// Status endpoint
async fn status(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(StatusResponse {
        status: "ok",
        service: crate::SERVICE_NAME,
        version: crate::VERSION,
        spec_version: crate::SPEC_VERSION,
        uptime_secs: state.uptime().as_secs(),
        supported_models: crate::models::MODEL_ENCODINGS.len(),
        limits: *state.counter.limits(),
    })
}

/// Model listing response
#[derive(Serialize)]
pub struct ModelsResponse {
    pub count: usize,
    pub models: Vec<ModelInfo>,
}

/// List supported models
async fn list_models() -> impl IntoResponse {
    let models = supported_models();
    Json(ModelsResponse {
        count: models.len(),
        models,
    })
}

/// Count tokens.
///
/// The body is decoded loosely so that wrong field types, missing fields and
/// malformed JSON all surface as `INVALID_TYPE` rather than axum's defaults.
async fn token_count(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    payload: std::result::Result<Json<Value>, JsonRejection>,
) -> Response {
    let started = Instant::now();
    let ctx = RequestContext::from_headers(&headers, TOKEN_COUNT_PATH);

    let null = Value::Null;
    let (model, outcome) = match payload {
        Ok(Json(body)) => {
            let model = body.get("model").unwrap_or(&null);
            let text = body.get("text").unwrap_or(&null);
            (
                model.as_str().map(str::to_string),
                state.counter.count_value(model, text),
            )
        },
        Err(rejection) => (None, Err(rejection_to_error(&rejection))),
    };

    let mut response = match outcome {
        Ok(mut counted) => {
            counted.meta.processing_time_ms = elapsed_ms(started);
            counted.meta.timestamp = utc_timestamp();
            observability::log_token_count_success(&ctx, &counted);
            (StatusCode::OK, Json(counted)).into_response()
        },
        Err(err) => {
            let processing_time_ms = elapsed_ms(started);
            let api_error = ApiError::new(err, processing_time_ms);
            observability::log_token_count_error(
                &ctx,
                model.as_deref(),
                api_error.error(),
                api_error.status().as_u16(),
                processing_time_ms,
            );
            api_error.into_response()
        },
    };

    if let Ok(value) = HeaderValue::from_str(&ctx.request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}

fn rejection_to_error(rejection: &JsonRejection) -> UtcError {
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        UtcError::PayloadTooLarge(format!("request body too large: {}", rejection.body_text()))
    } else {
        UtcError::InvalidType(format!("invalid JSON body: {}", rejection.body_text()))
    }
}

fn elapsed_ms(started: Instant) -> f64 {
    started.elapsed().as_secs_f64() * 1000.0
}
