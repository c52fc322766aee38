// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity tracking service.
//!
//! Handles the core workflow:
//! 1. Restore the store from the durable slot at startup (read exactly once)
//! 2. Validate form input and construct the typed activity
//! 3. Append to the store and write-through persist the whole store
//! 4. Expose marker and list-entry records for the renderers

use crate::error::{AppError, Result};
use crate::models::{Activity, ActivityStore, Coords};
use crate::storage::{codec, StorageSlot};
use crate::views::{ListEntry, Marker};

/// A "create activity" request, as translated from a map click plus a form
/// submission by the external bridges.
#[derive(Debug, Clone)]
pub struct CreateActivityRequest {
    /// "running" or "cycling", as submitted by the form.
    pub kind_label: String,
    pub lat: f64,
    pub lng: f64,
    pub distance_km: f64,
    pub duration_min: f64,
    /// Cadence (spm) for running, elevation gain (m) for cycling.
    pub variant_field: f64,
}

/// Outcome of a successful creation, ready for the renderers.
#[derive(Debug)]
pub struct ActivityCreated {
    pub id: String,
    pub marker: Marker,
    pub entry: ListEntry,
}

/// Owns the store and its durable slot for one session.
pub struct Tracker<S: StorageSlot> {
    store: ActivityStore,
    slot: S,
}

impl<S: StorageSlot> Tracker<S> {
    /// Restore the store from the slot.
    ///
    /// Absent or corrupt contents degrade to an empty store; only an I/O
    /// failure reading the slot itself is an error.
    pub fn load(slot: S) -> Result<Self> {
        let store = match slot.read()? {
            Some(text) => codec::deserialize(&text),
            None => ActivityStore::new(),
        };
        tracing::info!(count = store.len(), "Activity store restored");
        Ok(Self { store, slot })
    }

    /// Validate the request, construct the typed activity, append it to the
    /// store and persist. Invalid input mutates nothing.
    pub fn create_activity(&mut self, request: CreateActivityRequest) -> Result<ActivityCreated> {
        let coords = Coords {
            lat: request.lat,
            lng: request.lng,
        };

        let activity = match request.kind_label.as_str() {
            "running" => {
                // Cadence arrives as a form number but the domain field is a
                // positive integer (steps per minute).
                if !request.variant_field.is_finite() || request.variant_field <= 0.0 {
                    return Err(AppError::Validation);
                }
                Activity::running(
                    coords,
                    request.distance_km,
                    request.duration_min,
                    request.variant_field.round() as u32,
                )?
            }
            "cycling" => Activity::cycling(
                coords,
                request.distance_km,
                request.duration_min,
                request.variant_field,
            )?,
            other => return Err(AppError::UnknownVariant(other.to_string())),
        };

        let marker = Marker::from_activity(&activity);
        let entry = ListEntry::from_activity(&activity);
        let id = activity.id().to_string();

        self.store.add(activity)?;
        tracing::info!(id = %id, kind = %request.kind_label, "Activity created");

        self.persist();

        Ok(ActivityCreated { id, marker, entry })
    }

    /// Record a user selecting an activity in the list. Returns the updated
    /// click count.
    pub fn select_activity(&mut self, id: &str) -> Result<u32> {
        let activity = self
            .store
            .find_by_id_mut(id)
            .ok_or_else(|| AppError::NotFound(id.to_string()))?;
        activity.mark_selected();
        Ok(activity.click_count())
    }

    /// Marker records for the map renderer, in insertion order.
    pub fn markers(&self) -> Vec<Marker> {
        self.store.all().map(Marker::from_activity).collect()
    }

    /// List-entry records for the list renderer, in insertion order.
    pub fn list_entries(&self) -> Vec<ListEntry> {
        self.store.all().map(ListEntry::from_activity).collect()
    }

    pub fn store(&self) -> &ActivityStore {
        &self.store
    }

    /// Empty the store and clear the durable slot.
    pub fn reset(&mut self) -> Result<()> {
        self.store.reset();
        self.slot.clear()?;
        tracing::info!("Activity store reset");
        Ok(())
    }

    /// Write-through persist of the whole store, overwriting the slot
    /// wholesale. Failures are logged and otherwise ignored: the slot is
    /// cached state, not the source of truth.
    fn persist(&self) {
        let written = codec::serialize(&self.store).and_then(|text| self.slot.write(&text));
        if let Err(err) = written {
            tracing::error!(error = %err, "Failed to persist activity store");
        }
    }
}
