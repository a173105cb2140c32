//! Place and search event definitions

use crate::geocode::SearchError;
use serde::{Deserialize, Serialize};
use url::Url;

/// Separator the provider uses between segments of a formatted address
const ADDRESS_SEPARATOR: &str = ", ";

/// A normalized search result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Place {
    /// Full formatted address, as returned by the provider
    pub address: String,
    /// Link to an external map resource, when the provider supplied one
    pub map_url: Option<Url>,
}

impl Place {
    /// Create a new place
    pub fn new(address: String, map_url: Option<Url>) -> Self {
        Self { address, map_url }
    }

    /// Segment before the first separator.
    ///
    /// Heuristic over the provider's comma-delimited formatting, not a
    /// guaranteed parse.
    pub fn city(&self) -> &str {
        self.address
            .split(ADDRESS_SEPARATOR)
            .next()
            .unwrap_or_default()
    }

    /// All segments except the last, re-joined
    pub fn street_address(&self) -> String {
        let mut segments: Vec<&str> = self.address.split(ADDRESS_SEPARATOR).collect();
        segments.pop();
        segments.join(ADDRESS_SEPARATOR)
    }

    /// Segment after the last separator
    pub fn country(&self) -> &str {
        self.address
            .rsplit(ADDRESS_SEPARATOR)
            .next()
            .unwrap_or_default()
    }
}

/// Event delivered on the UI channel.
///
/// Exactly one event is sent per non-superseded search; a superseded or
/// cancelled search sends nothing.
#[derive(Debug)]
pub enum SearchEvent {
    /// Query was too short to search; results cleared, UI back to idle
    Cleared,
    /// Search succeeded. An empty list means the provider found nothing,
    /// which is distinct from an error.
    Results(Vec<Place>),
    /// Search failed with a classified error
    Failed(SearchError),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(address: &str) -> Place {
        Place::new(address.to_string(), None)
    }

    #[test]
    fn test_address_derivations() {
        let p = place("Austin, TX, USA");
        assert_eq!(p.city(), "Austin");
        assert_eq!(p.street_address(), "Austin, TX");
        assert_eq!(p.country(), "USA");
    }

    #[test]
    fn test_single_segment_address() {
        let p = place("Antarctica");
        assert_eq!(p.city(), "Antarctica");
        assert_eq!(p.street_address(), "");
        assert_eq!(p.country(), "Antarctica");
    }

    #[test]
    fn test_two_segment_address() {
        let p = place("Berlin, Germany");
        assert_eq!(p.city(), "Berlin");
        assert_eq!(p.street_address(), "Berlin");
        assert_eq!(p.country(), "Germany");
    }

    #[test]
    fn test_bare_comma_is_not_a_separator() {
        // The provider delimits with comma-space; a bare comma stays in
        // its segment.
        let p = place("1,200 Main St, Springfield, USA");
        assert_eq!(p.city(), "1,200 Main St");
        assert_eq!(p.country(), "USA");
    }
}
