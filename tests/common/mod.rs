// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use workout_tracker::models::{InfoMessage, Workout};
use workout_tracker::services::read_package;

/// Absolute tolerance for float comparisons.
#[allow(dead_code)]
pub const EPSILON: f64 = 1e-9;

/// Assert two floats agree within [`EPSILON`].
#[macro_export]
macro_rules! assert_close {
    ($actual:expr, $expected:expr) => {{
        let (actual, expected): (f64, f64) = ($actual, $expected);
        assert!(
            (actual - expected).abs() < crate::common::EPSILON,
            "expected {}, got {}",
            expected,
            actual
        );
    }};
}

/// Build a workout from a tag and data and compute its summary.
#[allow(dead_code)]
pub fn summary_for(tag: &str, data: &[f64]) -> InfoMessage {
    read_package(tag, data)
        .expect("Failed to build workout")
        .show_training_info()
        .expect("Failed to compute summary")
}
