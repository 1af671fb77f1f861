//! Test utilities for the Bitvavo SDK
//!
//! Provides a mock exchange server that records requests and serves
//! canned JSON responses.

pub mod server;

pub use server::{MockExchange, RecordedRequest};
