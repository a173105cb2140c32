//! HTTP networking module
//!
//! Provides HTTP client functionality for making requests to the
//! geocoding provider.

mod client;

pub use client::{ApiResponse, HttpClient};
