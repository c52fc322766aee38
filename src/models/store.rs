// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! In-memory activity store with insertion-order iteration.

use crate::error::{AppError, Result};
use crate::models::Activity;

/// Ordered collection of activities, owned exclusively by the store.
///
/// Lookup is O(n); at the expected scale (tens to low hundreds of entries)
/// an id index is not worth carrying.
#[derive(Debug, Default)]
pub struct ActivityStore {
    activities: Vec<Activity>,
}

impl ActivityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an activity. Rejects duplicate ids and leaves the store
    /// unchanged on failure.
    pub fn add(&mut self, activity: Activity) -> Result<()> {
        if self.find_by_id(activity.id()).is_some() {
            return Err(AppError::DuplicateId(activity.id().to_string()));
        }
        self.activities.push(activity);
        Ok(())
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Activity> {
        self.activities.iter().find(|a| a.id() == id)
    }

    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Activity> {
        self.activities.iter_mut().find(|a| a.id() == id)
    }

    /// Iterate activities in insertion order. The view is read-only and
    /// restartable; it never mutates the store.
    pub fn all(&self) -> impl Iterator<Item = &Activity> {
        self.activities.iter()
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    /// Empty the store. Irreversible; used together with clearing the
    /// durable slot.
    pub fn reset(&mut self) {
        self.activities.clear();
    }
}
