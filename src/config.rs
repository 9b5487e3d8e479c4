//! Server configuration for the jar service.

use anyhow::{Context, Result};
use std::net::SocketAddr;

/// Host the service binds to when none is given.
pub const DEFAULT_HOST: &str = "127.0.0.1";
/// Port the service listens on when none is given.
pub const DEFAULT_PORT: u16 = 8000;

/// Where and how verbosely the jar service runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Log at `debug` instead of `info` when `RUST_LOG` is unset.
    pub verbose: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            verbose: false,
        }
    }
}

impl ServerConfig {
    /// Resolves host and port into a bindable address.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("Invalid listen address: {}:{}", self.host, self.port))
    }

    /// Default tracing filter directive when `RUST_LOG` is unset.
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}
