// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Waymark-Tracker: local-first workout log core
//!
//! Records running and cycling activities placed at map coordinates, derives
//! per-variant metrics, and persists the whole store across sessions in a
//! single durable slot, restoring fully-behavioral typed activities on load.

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;
pub mod time_utils;
pub mod views;
