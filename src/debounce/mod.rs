//! Trailing-edge query debouncer
//!
//! Suppresses all but the most recent query-change event within a fixed
//! quiescence window, and gates queries below the provider's minimum
//! length before they ever reach the network.

use crate::config::SearchSettings;
use crate::geocode::SearchClient;
use crate::results::SearchEvent;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tracing::debug;

/// Debounces a stream of raw query-text change events into searches.
///
/// At most one timer is scheduled at any time; every qualifying
/// keystroke resets the window. Repeated or whitespace-only queries are
/// not deduplicated, each re-arms the full window.
pub struct QueryDebouncer {
    delay: Duration,
    min_query_len: usize,
    client: SearchClient,
    events: UnboundedSender<SearchEvent>,
    /// Single-slot register for the pending one-shot timer
    pending: Option<JoinHandle<()>>,
}

impl QueryDebouncer {
    /// Create a debouncer feeding `client`, with `Cleared` signals sent
    /// on `events`
    pub fn new(
        settings: &SearchSettings,
        client: SearchClient,
        events: UnboundedSender<SearchEvent>,
    ) -> Self {
        Self {
            delay: Duration::from_secs_f64(settings.debounce_secs),
            min_query_len: settings.min_query_len,
            client,
            events,
            pending: None,
        }
    }

    /// Handle one query-text change event.
    ///
    /// Queries shorter than the provider minimum clear the results
    /// immediately and schedule nothing. Must be called from within a
    /// tokio runtime.
    pub fn on_query_changed(&mut self, text: &str) {
        // Take-and-cancel, same shape as the client's request slot.
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }

        if text.chars().count() < self.min_query_len {
            debug!("query {:?} below minimum length, clearing", text);
            let _ = self.events.send(SearchEvent::Cleared);
            return;
        }

        let client = self.client.clone();
        let term = text.to_string();
        let delay = self.delay;

        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            client.search(&term);
        }));
    }
}
