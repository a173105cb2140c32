//! Placefinder: a search-as-you-type client for the OpenCage geocoding API
//!
//! Keystrokes flow through a trailing-edge [`QueryDebouncer`] into a
//! single-flight [`SearchClient`]; every outcome is delivered as a
//! [`SearchEvent`] on one caller-owned channel, so completions never race
//! with the caller's own processing.

pub mod config;
pub mod debounce;
pub mod geocode;
pub mod network;
pub mod results;

pub use config::Settings;
pub use debounce::QueryDebouncer;
pub use geocode::{SearchClient, SearchError};
pub use network::HttpClient;
pub use results::{Place, SearchEvent};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default debounce window in seconds
pub const DEFAULT_DEBOUNCE_SECS: f64 = 1.0;

/// Shortest query the provider will geocode, in characters
pub const MIN_QUERY_LEN: usize = 2;
