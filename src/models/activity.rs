// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Activity domain model: the tagged variant hierarchy and its derived metrics.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::time_utils::format_month_day;

/// Geographic position of an activity, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coords {
    pub lat: f64,
    pub lng: f64,
}

/// Variant-specific data for an activity.
///
/// The discriminator persisted with each record maps one-to-one onto these
/// variants; restore dispatches on it rather than on anything implicit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ActivityKind {
    Running { cadence_spm: u32 },
    Cycling { elevation_gain_m: f64 },
}

impl ActivityKind {
    /// Lowercase discriminator label ("running" or "cycling").
    pub fn label(&self) -> &'static str {
        match self {
            ActivityKind::Running { .. } => "running",
            ActivityKind::Cycling { .. } => "cycling",
        }
    }

    /// Glyph shown in map popups and list entries.
    pub fn icon_glyph(&self) -> &'static str {
        match self {
            ActivityKind::Running { .. } => "🏃‍♂️",
            ActivityKind::Cycling { .. } => "🚴‍♀️",
        }
    }
}

/// A single logged workout placed on the map.
///
/// All fields except `click_count` are immutable after construction.
/// `description` is derived once at creation from the variant label and the
/// creation date, and carried verbatim through the persistence round-trip so
/// the original date is honored even after "now" has moved on.
#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
    /// Unique within a store. Random v4 UUID; best-effort uniqueness,
    /// not a cryptographic guarantee.
    id: String,
    created_at: DateTime<Utc>,
    coords: Coords,
    distance_km: f64,
    duration_min: f64,
    description: String,
    click_count: u32,
    kind: ActivityKind,
}

impl Activity {
    /// Create a running activity. Rejects non-positive or non-finite
    /// distance/duration and zero cadence.
    pub fn running(
        coords: Coords,
        distance_km: f64,
        duration_min: f64,
        cadence_spm: u32,
    ) -> Result<Self> {
        if cadence_spm == 0 {
            return Err(AppError::Validation);
        }
        Self::new(
            coords,
            distance_km,
            duration_min,
            ActivityKind::Running { cadence_spm },
        )
    }

    /// Create a cycling activity. Elevation gain may be zero or negative
    /// (net downhill) but must be finite.
    pub fn cycling(
        coords: Coords,
        distance_km: f64,
        duration_min: f64,
        elevation_gain_m: f64,
    ) -> Result<Self> {
        if !elevation_gain_m.is_finite() {
            return Err(AppError::Validation);
        }
        Self::new(
            coords,
            distance_km,
            duration_min,
            ActivityKind::Cycling { elevation_gain_m },
        )
    }

    fn new(coords: Coords, distance_km: f64, duration_min: f64, kind: ActivityKind) -> Result<Self> {
        if !positive_finite(distance_km) || !positive_finite(duration_min) {
            return Err(AppError::Validation);
        }

        let created_at = Utc::now();
        let description = build_description(kind.label(), created_at);

        Ok(Self {
            id: uuid::Uuid::new_v4().to_string(),
            created_at,
            coords,
            distance_km,
            duration_min,
            description,
            click_count: 0,
            kind,
        })
    }

    /// Rebuild an activity verbatim from persisted raw fields.
    ///
    /// Identity, timestamp, description and click count are carried over as
    /// recorded; derived metrics are recomputed on demand, never restored.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn restore(
        id: String,
        created_at: DateTime<Utc>,
        coords: Coords,
        distance_km: f64,
        duration_min: f64,
        description: String,
        click_count: u32,
        kind: ActivityKind,
    ) -> Self {
        Self {
            id,
            created_at,
            coords,
            distance_km,
            duration_min,
            description,
            click_count,
            kind,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn coords(&self) -> Coords {
        self.coords
    }

    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    pub fn duration_min(&self) -> f64 {
        self.duration_min
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn click_count(&self) -> u32 {
        self.click_count
    }

    pub fn kind(&self) -> ActivityKind {
        self.kind
    }

    pub fn label(&self) -> &'static str {
        self.kind.label()
    }

    pub fn icon_glyph(&self) -> &'static str {
        self.kind.icon_glyph()
    }

    /// Derived metric for this activity: pace in min/km for running,
    /// speed in km/h for cycling.
    ///
    /// Pure over the immutable inputs, so repeated calls are bit-identical.
    pub fn metric(&self) -> f64 {
        match self.kind {
            ActivityKind::Running { .. } => self.duration_min / self.distance_km,
            ActivityKind::Cycling { .. } => self.distance_km / (self.duration_min / 60.0),
        }
    }

    /// Record a user selecting this activity. No other observable effect.
    pub fn mark_selected(&mut self) {
        self.click_count += 1;
    }
}

fn positive_finite(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Build the "Running on April 14" style description.
fn build_description(label: &str, created_at: DateTime<Utc>) -> String {
    format!("{} on {}", capitalize(label), format_month_day(created_at))
}

fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
