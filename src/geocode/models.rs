//! Wire format of the provider's forward-geocoding response

use crate::results::Place;
use serde::Deserialize;
use url::Url;

/// Top-level response envelope
#[derive(Debug, Deserialize)]
pub(crate) struct GeocodeResponse {
    pub results: Vec<GeocodeResult>,
}

/// A single result item
#[derive(Debug, Deserialize)]
pub(crate) struct GeocodeResult {
    /// Full formatted address
    pub formatted: String,
    /// Optional annotations; the provider omits them for some results
    #[serde(default)]
    pub annotations: Option<Annotations>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Annotations {
    #[serde(rename = "OSM", default)]
    pub osm: Option<Osm>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Osm {
    pub url: String,
}

// Corruption layer: keeps any provider wonkiness out of the rest of the app.
impl From<GeocodeResult> for Place {
    fn from(result: GeocodeResult) -> Self {
        let map_url = result
            .annotations
            .and_then(|a| a.osm)
            .and_then(|osm| Url::parse(&osm.url).ok());

        Place::new(result.formatted, map_url)
    }
}
