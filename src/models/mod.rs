// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod activity;
pub mod store;

pub use activity::{Activity, ActivityKind, Coords};
pub use store::ActivityStore;
