// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types shared across the core.

/// Application error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// User input rejected by activity validation.
    /// The message is the exact text surfaced to the user.
    #[error("Inputs have to be positive numbers!")]
    Validation,

    #[error("Activity not found: {0}")]
    NotFound(String),

    /// Invariant violation: the id-generation scheme should make this
    /// unreachable, but an offending add must not corrupt the store.
    #[error("Duplicate activity id: {0}")]
    DuplicateId(String),

    /// Persisted record carries a discriminator we cannot dispatch on.
    #[error("Unknown activity type: {0}")]
    UnknownVariant(String),

    #[error("Persisted data could not be parsed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, AppError>;
