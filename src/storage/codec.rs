// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Serialize the store to durable text and restore it with full behavior.
//!
//! A naive "store the object as-is" round-trip would hand back data-only
//! records that have lost their variant behavior. Every record therefore
//! carries a mandatory `type` discriminator, and restore dispatches on it to
//! reconstruct the correct typed variant, recomputing derived metrics from
//! the raw inputs instead of trusting any persisted copy.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::models::{Activity, ActivityKind, ActivityStore, Coords};

/// Flat persisted form of one activity.
///
/// Only raw inputs are stored; pace and speed are recomputed on restore so a
/// stale or corrupted copy can never become authoritative. The description
/// is raw data here: it encodes the original creation date and must survive
/// verbatim even after "now" has changed.
#[derive(Debug, Serialize, Deserialize)]
struct StoredRecord {
    #[serde(rename = "type")]
    kind: String,
    id: String,
    created_at: DateTime<Utc>,
    coords: Coords,
    distance_km: f64,
    duration_min: f64,
    description: String,
    click_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    cadence_spm: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    elevation_gain_m: Option<f64>,
}

impl StoredRecord {
    fn from_activity(activity: &Activity) -> Self {
        let (cadence_spm, elevation_gain_m) = match activity.kind() {
            ActivityKind::Running { cadence_spm } => (Some(cadence_spm), None),
            ActivityKind::Cycling { elevation_gain_m } => (None, Some(elevation_gain_m)),
        };

        Self {
            kind: activity.label().to_string(),
            id: activity.id().to_string(),
            created_at: activity.created_at(),
            coords: activity.coords(),
            distance_km: activity.distance_km(),
            duration_min: activity.duration_min(),
            description: activity.description().to_string(),
            click_count: activity.click_count(),
            cadence_spm,
            elevation_gain_m,
        }
    }

    /// Dispatch on the discriminator and rebuild the typed variant.
    fn into_activity(self) -> Result<Activity> {
        let kind = match self.kind.as_str() {
            "running" => ActivityKind::Running {
                cadence_spm: self.cadence_spm.ok_or_else(|| {
                    AppError::Internal(anyhow::anyhow!("record {} missing cadence_spm", self.id))
                })?,
            },
            "cycling" => ActivityKind::Cycling {
                elevation_gain_m: self.elevation_gain_m.ok_or_else(|| {
                    AppError::Internal(anyhow::anyhow!(
                        "record {} missing elevation_gain_m",
                        self.id
                    ))
                })?,
            },
            other => return Err(AppError::UnknownVariant(other.to_string())),
        };

        Ok(Activity::restore(
            self.id,
            self.created_at,
            self.coords,
            self.distance_km,
            self.duration_min,
            self.description,
            self.click_count,
            kind,
        ))
    }
}

/// Encode the whole store as a JSON array of discriminated records.
pub fn serialize(store: &ActivityStore) -> Result<String> {
    let records: Vec<StoredRecord> = store.all().map(StoredRecord::from_activity).collect();
    Ok(serde_json::to_string(&records)?)
}

/// Restore a store from durable text. Never errors.
///
/// Absent, empty, or unparseable text yields an empty store: the slot is
/// cached state, not a source of truth, so "nothing persisted yet" and
/// "corrupt" both mean "start fresh". Individual records with an unknown
/// discriminator (or missing variant field, or duplicate id) are skipped
/// with a warning while the rest of the batch restores.
pub fn deserialize(text: &str) -> ActivityStore {
    let mut store = ActivityStore::new();

    if text.trim().is_empty() {
        return store;
    }

    let records: Vec<StoredRecord> = match serde_json::from_str(text) {
        Ok(records) => records,
        Err(err) => {
            tracing::warn!(error = %err, "Persisted activities unreadable, starting fresh");
            return store;
        }
    };

    for record in records {
        let id = record.id.clone();
        let added = record.into_activity().and_then(|a| store.add(a));
        if let Err(err) = added {
            tracing::warn!(id = %id, error = %err, "Skipping persisted record");
        }
    }

    store
}
