// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Raw sensor package model.

use serde::{Deserialize, Serialize};

/// One tagged record as received from the sensors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorPackage {
    /// Activity tag (SWM, RUN, WLK)
    pub workout_type: String,
    /// Positional values: action, duration, weight, then variant extras
    pub data: Vec<f64>,
}

impl SensorPackage {
    pub fn new(workout_type: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            workout_type: workout_type.into(),
            data,
        }
    }
}

/// Built-in packages processed when no input file is configured.
pub fn sample_packages() -> Vec<SensorPackage> {
    vec![
        SensorPackage::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        SensorPackage::new("RUN", vec![15000.0, 1.0, 75.0]),
        SensorPackage::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}
