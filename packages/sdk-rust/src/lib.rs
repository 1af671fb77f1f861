//! Bitvavo SDK
//!
//! Rust client for the Bitvavo exchange REST API.
//!
//! This SDK provides:
//! - A single `call` operation for any REST endpoint
//! - HMAC-SHA256 request signing with a configurable access window
//! - Optional credentials, so public endpoints work unauthenticated
//! - Typed errors that separate exchange rejections from transport and
//!   serialization failures
//! - Configurable logging
//!
//! # Example
//!
//! ```no_run
//! use bitvavo_sdk::{BitvavoClient, ClientConfig};
//! use reqwest::Method;
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ClientConfig::from_env();
//!     let client = BitvavoClient::new(config);
//!
//!     // Public endpoint, no credentials needed
//!     let ticker = client
//!         .call("/ticker/price", Method::GET, &[("market", "BTC-EUR")], None, None)
//!         .await
//!         .unwrap();
//!     println!("Price: {:?}", ticker.get("price"));
//! }
//! ```

pub mod client;
pub mod config;
pub mod credential;
pub mod error;
pub mod logger;

pub use client::{BitvavoClient, JsonObject};
pub use config::ClientConfig;
pub use credential::Credentials;
pub use error::{BitvavoError, SdkResult};
pub use logger::{ConsoleLogger, LogLevel, Logger, NoopLogger};

// Re-export so callers don't need a direct reqwest dependency for the verb.
pub use reqwest::Method;
