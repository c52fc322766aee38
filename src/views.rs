// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Outbound records for the map and list renderers.

use serde::Serialize;

use crate::models::{Activity, ActivityKind};

/// Everything the map renderer needs to place a marker and its popup.
#[derive(Debug, Clone, Serialize)]
pub struct Marker {
    pub lat: f64,
    pub lng: f64,
    pub kind: &'static str,
    pub description: String,
    pub icon_glyph: &'static str,
}

impl Marker {
    pub fn from_activity(activity: &Activity) -> Self {
        let coords = activity.coords();
        Self {
            lat: coords.lat,
            lng: coords.lng,
            kind: activity.label(),
            description: activity.description().to_string(),
            icon_glyph: activity.icon_glyph(),
        }
    }

    /// Popup text: glyph plus description.
    pub fn popup_text(&self) -> String {
        format!("{} {}", self.icon_glyph, self.description)
    }
}

/// One row for the list renderer.
#[derive(Debug, Clone, Serialize)]
pub struct ListEntry {
    pub id: String,
    pub kind: &'static str,
    pub icon_glyph: &'static str,
    pub description: String,
    pub distance_km: f64,
    pub duration_min: f64,
    /// Pace or speed, formatted to one decimal place.
    pub metric: String,
    pub metric_unit: &'static str,
    /// Cadence (spm) or elevation gain (m).
    pub extra: String,
    pub extra_unit: &'static str,
}

impl ListEntry {
    pub fn from_activity(activity: &Activity) -> Self {
        let (metric_unit, extra, extra_unit) = match activity.kind() {
            ActivityKind::Running { cadence_spm } => ("min/km", cadence_spm.to_string(), "spm"),
            ActivityKind::Cycling { elevation_gain_m } => {
                ("km/h", elevation_gain_m.to_string(), "m")
            }
        };

        Self {
            id: activity.id().to_string(),
            kind: activity.label(),
            icon_glyph: activity.icon_glyph(),
            description: activity.description().to_string(),
            distance_km: activity.distance_km(),
            duration_min: activity.duration_min(),
            metric: format!("{:.1}", activity.metric()),
            metric_unit,
            extra,
            extra_unit,
        }
    }
}
