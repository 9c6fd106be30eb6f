//! Server configuration.

use std::net::SocketAddr;

use crate::config::Config;
use crate::count::Limits;
use crate::error::{Result, UtcError};

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address
    pub addr: SocketAddr,
    /// Maximum request body size (bytes)
    pub max_body_size: usize,
    /// Input size limits for token counting
    pub limits: Limits,
    /// CORS enabled
    pub cors_enabled: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            max_body_size: 2 * 1024 * 1024, // 2MB
            limits: Limits::default(),
            cors_enabled: true,
        }
    }
}

impl ServerConfig {
    /// Build from the file/env configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        let addr: SocketAddr = config.server.listen_addr().parse().map_err(|e| {
            UtcError::Config(format!(
                "Invalid listen address '{}': {e}",
                config.server.listen_addr()
            ))
        })?;

        Ok(Self {
            addr,
            max_body_size: config.server.max_body_size,
            limits: config.limits.into(),
            cors_enabled: config.server.cors_enabled,
        })
    }

    /// Create with custom port
    pub fn with_port(mut self, port: u16) -> Self {
        self.addr.set_port(port);
        self
    }

    /// Bind to all interfaces
    pub fn bind_all(mut self) -> Self {
        let port = self.addr.port();
        self.addr = SocketAddr::from(([0, 0, 0, 0], port));
        self
    }

    /// Set address directly
    pub fn with_addr(mut self, addr: SocketAddr) -> Self {
        self.addr = addr;
        self
    }

    /// Set input size limits
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Set max body size
    pub fn with_max_body_size(mut self, size: usize) -> Self {
        self.max_body_size = size;
        self
    }

    /// Disable CORS
    pub fn without_cors(mut self) -> Self {
        self.cors_enabled = false;
        self
    }
}
