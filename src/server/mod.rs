//! UTC HTTP server.
//!
//! Provides an HTTP API over the token counter:
//! - `POST /utc/v0/token-count` - count tokens
//! - `GET /utc/v0/models` - list supported models
//! - `GET /health`, `GET /status`
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use utc::server::{serve, AppState, ServerConfig};
//!
//! let config = ServerConfig::default().with_port(8080);
//! serve(Arc::new(AppState::new(config))).await?;
//! ```

mod config;
mod handlers;
mod listener;
pub mod observability;
pub mod response;
mod state;

pub use config::ServerConfig;
pub use handlers::{create_router, health_check, MODELS_PATH, TOKEN_COUNT_PATH};
pub use listener::{serve, serve_on};
pub use response::{ApiError, ErrorResponse};
pub use state::AppState;
