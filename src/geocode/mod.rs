//! Geocoding search client
//!
//! Issues single-flight requests to the provider's forward-geocoding
//! endpoint and classifies every outcome into [`SearchError`] or a list
//! of [`crate::results::Place`] values.

mod client;
mod error;
mod models;

pub use client::SearchClient;
pub use error::SearchError;
