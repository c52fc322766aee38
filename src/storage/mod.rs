// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Durable storage: a single named slot holding the serialized store,
//! plus the codec that converts the store to and from its durable text form.

pub mod codec;
pub mod file;
pub mod memory;

pub use file::FileSlot;
pub use memory::MemorySlot;

use crate::error::Result;

/// A single durable slot, overwritten wholesale on every write.
pub trait StorageSlot {
    /// Read the slot contents; `None` when nothing has been persisted yet.
    fn read(&self) -> Result<Option<String>>;

    /// Overwrite the slot with the full serialized store.
    fn write(&self, text: &str) -> Result<()>;

    /// Remove all durable state.
    fn clear(&self) -> Result<()>;
}
