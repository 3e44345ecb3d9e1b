// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Computed workout summary.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Derived values for one workout, rebuilt on every request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfoMessage {
    /// Variant name (Running, SportsWalking, Swimming)
    pub training_type: String,
    /// Duration in hours
    pub duration_h: f64,
    /// Distance in kilometers
    pub distance_km: f64,
    /// Mean speed in km/h
    pub speed_kmh: f64,
    /// Energy spent in kcal
    pub calories_kcal: f64,
}

impl fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Activity type: {}; Duration: {:.3} h; Distance: {:.3} km; \
             Mean speed: {:.3} km/h; Calories spent: {:.3}.",
            self.training_type, self.duration_h, self.distance_km, self.speed_kmh, self.calories_kcal
        )
    }
}
