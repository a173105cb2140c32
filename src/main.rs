//! Placefinder: search-as-you-type geocoding in the terminal
//!
//! Each line typed on stdin is treated as a query-change event; results
//! and errors are rendered by the task that owns the event channel.

use anyhow::Result;
use placefinder::{
    config::Settings, HttpClient, Place, QueryDebouncer, SearchClient, SearchEvent,
};
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(Level::WARN)
        .with_target(false)
        .init();

    // Load configuration
    let settings = load_settings()?;
    if settings.api.key.is_empty() {
        anyhow::bail!(
            "no API key configured; set PLACEFINDER_API_KEY or api.key in settings.yml"
        );
    }

    let (events_tx, mut events) = mpsc::unbounded_channel();

    let http = HttpClient::with_settings(&settings.outgoing)?;
    let client = SearchClient::new(http, &settings.api, events_tx.clone());
    let mut debouncer = QueryDebouncer::new(&settings.search, client, events_tx);

    // Stdin lines are the stream of query-change events.
    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            debouncer.on_query_changed(line.trim_end());
        }
    });

    println!("placefinder v{}", placefinder::VERSION);
    println!("Type a place name (at least 2 characters), Ctrl-D to quit.");

    // This task owns the receiver: every completion lands here, never
    // concurrently with rendering.
    while let Some(event) = events.recv().await {
        render(&event);
    }

    Ok(())
}

fn render(event: &SearchEvent) {
    match event {
        SearchEvent::Cleared => println!("(keep typing...)"),
        SearchEvent::Results(places) if places.is_empty() => println!("No results"),
        SearchEvent::Results(places) => {
            for place in places {
                render_place(place);
            }
        }
        SearchEvent::Failed(err) => println!("Search failed: {err}"),
    }
}

fn render_place(place: &Place) {
    match &place.map_url {
        Some(url) => println!("  {}  ({url})", place.address),
        None => println!("  {}", place.address),
    }
}

/// Load settings from file or use defaults
fn load_settings() -> Result<Settings> {
    // Check environment variable first
    if let Ok(path) = std::env::var("PLACEFINDER_SETTINGS_PATH") {
        let path = PathBuf::from(path);
        if path.exists() {
            info!("Loading settings from: {}", path.display());
            let mut settings = Settings::from_file(&path)?;
            settings.merge_env();
            return Ok(settings);
        }
    }

    // Then the default locations
    let paths = [
        PathBuf::from("settings.yml"),
        PathBuf::from("config/settings.yml"),
        dirs::config_dir()
            .map(|p| p.join("placefinder/settings.yml"))
            .unwrap_or_default(),
    ];
    for path in paths.iter() {
        if path.exists() {
            info!("Loading settings from: {}", path.display());
            let mut settings = Settings::from_file(path)?;
            settings.merge_env();
            return Ok(settings);
        }
    }

    // Use defaults
    info!("No settings file found, using defaults");
    let mut settings = Settings::default();
    settings.merge_env();
    Ok(settings)
}
