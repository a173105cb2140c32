//! Single-flight search client for the forward-geocoding endpoint

use super::error::SearchError;
use super::models::GeocodeResponse;
use crate::config::ApiSettings;
use crate::network::HttpClient;
use crate::results::{Place, SearchEvent};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::AbortHandle;
use tracing::{debug, warn};

/// Provider path for forward geocoding
const GEOCODE_PATH: &str = "/geocode/v1/json";

/// Placeholder used when a 4xx body is not valid text
const UNREADABLE_BODY: &str = "<unreadable body>";

/// Geocoding search client.
///
/// At most one request is in flight per client: issuing a new search
/// aborts the previous request before starting, and a superseded
/// request's completion never reaches the event channel. Cheap to clone;
/// clones share the in-flight slot.
#[derive(Clone)]
pub struct SearchClient {
    http: HttpClient,
    base_url: String,
    key: String,
    events: UnboundedSender<SearchEvent>,
    /// Single-slot register holding the in-flight request, written only
    /// from the caller's context
    active: Arc<Mutex<Option<AbortHandle>>>,
    /// Monotonic search id; only the latest id may deliver an event
    generation: Arc<AtomicU64>,
}

impl SearchClient {
    /// Create a new search client delivering events on `events`
    pub fn new(http: HttpClient, api: &ApiSettings, events: UnboundedSender<SearchEvent>) -> Self {
        Self {
            http,
            base_url: api.base_url.trim_end_matches('/').to_string(),
            key: api.key.clone(),
            events,
            active: Arc::new(Mutex::new(None)),
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Issue a search for `term`, superseding any in-flight request.
    ///
    /// Delivers exactly one [`SearchEvent`] for the newest search; the
    /// superseded request is aborted and sends nothing. Must be called
    /// from within a tokio runtime.
    pub fn search(&self, term: &str) {
        // Bump first so a request aborted mid-completion already fails
        // the generation check.
        let id = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let client = self.clone();
        let term = term.to_string();

        // Take-and-cancel: the slot's prior occupant is always aborted
        // before the replacement request starts.
        let mut active = self.active.lock().unwrap();
        if let Some(previous) = active.take() {
            debug!("superseding in-flight search");
            previous.abort();
        }

        let task = tokio::spawn(async move {
            debug!("searching for {:?}", term);
            let outcome = client.perform(&term).await;

            // The abort may land an instant after completion; the
            // generation check keeps a superseded event off the channel.
            if client.generation.load(Ordering::SeqCst) != id {
                return;
            }

            let event = match outcome {
                Ok(places) => {
                    debug!("search for {:?} returned {} places", term, places.len());
                    SearchEvent::Results(places)
                }
                Err(err) => {
                    warn!("search for {:?} failed: {}", term, err);
                    SearchEvent::Failed(err)
                }
            };
            let _ = client.events.send(event);
        });

        *active = Some(task.abort_handle());
    }

    /// Execute one request and classify the outcome
    async fn perform(&self, term: &str) -> Result<Vec<Place>, SearchError> {
        let url = format!("{}{}", self.base_url, GEOCODE_PATH);
        let params = [("key", self.key.as_str()), ("q", term)];

        let response = self
            .http
            .get_with_params(&url, &params)
            .await
            .map_err(SearchError::from_transport)?;

        match response.status {
            200 => {
                let envelope: GeocodeResponse =
                    serde_json::from_slice(&response.body).map_err(SearchError::Decoding)?;
                Ok(envelope.results.into_iter().map(Place::from).collect())
            }
            status @ 400..=499 => Err(SearchError::Request {
                status,
                body: response.text().unwrap_or(UNREADABLE_BODY).to_string(),
            }),
            500..=599 => Err(SearchError::Server),
            status => Err(SearchError::UnexpectedStatus(status)),
        }
    }
}
