// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Workout Tracker: statistics for running, walking and swimming workouts
//!
//! This crate turns tagged sensor packages into workouts, computes distance,
//! mean speed and calories for each, and renders a one-line summary.

pub mod config;
pub mod error;
pub mod models;
pub mod services;
