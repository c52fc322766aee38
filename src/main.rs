// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Waymark-Tracker demo binary
//!
//! Restores the activity store from the durable slot and emits the marker
//! and list-entry records the renderers consume, mirroring the page-load
//! flow of the hosting view.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use waymark_tracker::{config::Config, services::Tracker, storage::FileSlot};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let config = Config::from_env();
    tracing::info!(
        path = %config.storage_path.display(),
        "Starting Waymark-Tracker"
    );

    let slot = FileSlot::new(config.storage_path);
    let tracker = Tracker::load(slot)?;

    // One marker emission per restored activity, as the map renderer
    // expects at startup.
    for marker in tracker.markers() {
        tracing::info!(
            lat = marker.lat,
            lng = marker.lng,
            kind = marker.kind,
            popup = %marker.popup_text(),
            "Marker"
        );
    }

    for entry in tracker.list_entries() {
        println!(
            "{} {}: {} km, {} min, {} {}",
            entry.icon_glyph,
            entry.description,
            entry.distance_km,
            entry.duration_min,
            entry.metric,
            entry.metric_unit
        );
    }

    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("waymark_tracker=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
