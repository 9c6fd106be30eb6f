//! Server state.

use std::time::{Duration, Instant};

use super::config::ServerConfig;
use crate::count::TokenCounter;

/// Application state shared across handlers
pub struct AppState {
    /// Server configuration
    pub config: ServerConfig,
    /// Token counter
    pub counter: TokenCounter,
    /// Server start time
    pub start_time: Instant,
}

impl AppState {
    /// Create new application state
    pub fn new(config: ServerConfig) -> Self {
        let counter = TokenCounter::new().with_limits(config.limits);

        Self {
            config,
            counter,
            start_time: Instant::now(),
        }
    }

    /// Get server uptime
    pub fn uptime(&self) -> Duration {
        self.start_time.elapsed()
    }
}
