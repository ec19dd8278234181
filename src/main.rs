//! Receipt Processor
//!
//! HTTP service that scores receipts and serves the points by id.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- --port 8080
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity (default `info`)
//! - `RECEIPT_PROCESSOR_HOST`, `RECEIPT_PROCESSOR_PORT`: listen address fallbacks

use clap::Parser;
use receipt_processor::{run_server, ServerConfig};
use std::process;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ServerConfig::parse();

    if let Err(e) = run_server(&config).await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
