//! # Receipt Processor
//!
//! Scores retail receipts by a fixed set of rules, stores each score under a
//! generated id, and serves the scores back over HTTP.
//!
//! ## Design Principles
//!
//! - **Exact money arithmetic**: totals and prices are parsed with `rust_decimal`
//! - **Lenient scoring**: a malformed field zeroes its own rule and nothing else
//! - **Injected storage**: the score store is built at startup and shared by `Arc`
//!
//! ## Example
//!
//! ```
//! use receipt_processor::{LineItem, Receipt, ReceiptProcessor};
//!
//! let receipt = Receipt {
//!     retailer: "Target".to_string(),
//!     purchase_date: "2022-01-02".to_string(),
//!     purchase_time: "13:13".to_string(),
//!     items: vec![LineItem::new("Pepsi", "1.25")],
//!     total: "1.25".to_string(),
//! };
//!
//! let processor = ReceiptProcessor::default();
//! let id = processor.process(&receipt);
//! assert_eq!(processor.points(&id).unwrap(), 31);
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod money;
pub mod points;
pub mod processor;
pub mod receipt;
pub mod server;
pub mod store;

pub use api::{create_router, AppState};
pub use config::ServerConfig;
pub use error::{ProcessorError, Result};
pub use money::Money;
pub use points::{calculate_points, PointsBreakdown};
pub use processor::ReceiptProcessor;
pub use receipt::{LineItem, Receipt};
pub use server::run_server;
pub use store::{ScoreStore, StoreError};
