//! Server configuration from command-line flags and environment.

use clap::Parser;
use std::net::SocketAddr;

use crate::error::{ProcessorError, Result};

/// Receipt processor HTTP service
#[derive(Parser, Debug, Clone)]
#[command(name = "receipt-processor")]
#[command(about = "Scores retail receipts and serves the points by id", long_about = None)]
#[command(version)]
pub struct ServerConfig {
    /// Interface to bind
    #[arg(long, env = "RECEIPT_PROCESSOR_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "RECEIPT_PROCESSOR_PORT", default_value_t = 8080)]
    pub port: u16,
}

impl ServerConfig {
    /// Resolves host and port into a socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse().map_err(|_| ProcessorError::InvalidAddress(addr))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}
