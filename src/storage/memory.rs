// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory slot for tests and callers without durable storage.

use std::sync::Mutex;

use crate::error::Result;
use crate::storage::StorageSlot;

/// Slot that holds its contents in memory.
#[derive(Debug, Default)]
pub struct MemorySlot {
    contents: Mutex<Option<String>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-load contents, as if a previous session had persisted them.
    pub fn with_contents(text: impl Into<String>) -> Self {
        Self {
            contents: Mutex::new(Some(text.into())),
        }
    }
}

impl StorageSlot for MemorySlot {
    fn read(&self) -> Result<Option<String>> {
        Ok(self.contents.lock().expect("MemorySlot lock poisoned").clone())
    }

    fn write(&self, text: &str) -> Result<()> {
        *self.contents.lock().expect("MemorySlot lock poisoned") = Some(text.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.contents.lock().expect("MemorySlot lock poisoned") = None;
        Ok(())
    }
}
