// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Service layer wiring the store, codec and durable slot together.

pub mod tracker;

pub use tracker::{ActivityCreated, CreateActivityRequest, Tracker};
