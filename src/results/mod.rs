//! Result types for geocoding searches
//!
//! This module defines the normalized place structure and the event enum
//! delivered to the UI channel.

mod types;

pub use types::*;
