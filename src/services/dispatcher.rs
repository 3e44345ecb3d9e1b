// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Tag lookup and construction of workouts from positional sensor data.

use crate::error::{AppError, Result};
use crate::models::{Activity, ActivityKind, Running, SportsWalking, Swimming};

/// Known workout kinds, in lookup order.
static REGISTRY: [ActivityKind; 3] = [
    ActivityKind::Swimming,
    ActivityKind::Running,
    ActivityKind::SportsWalking,
];

/// Find the workout kind registered for a sensor tag.
pub fn lookup(tag: &str) -> Option<ActivityKind> {
    REGISTRY.iter().copied().find(|kind| kind.tag() == tag)
}

/// All registered sensor tags.
pub fn registered_tags() -> impl Iterator<Item = &'static str> {
    REGISTRY.iter().map(|kind| kind.tag())
}

/// Build a workout from a sensor tag and its positional values.
///
/// Values bind in declaration order: action, duration (h), weight (kg),
/// then the variant's own fields. The count must match exactly.
pub fn read_package(tag: &str, data: &[f64]) -> Result<Activity> {
    let kind = lookup(tag).ok_or_else(|| AppError::UnknownActivityType(tag.to_string()))?;

    if data.len() != kind.arity() {
        return Err(AppError::ArityMismatch {
            tag: tag.to_string(),
            expected: kind.arity(),
            actual: data.len(),
        });
    }

    let action = action_count(data[0])?;
    let (duration_h, weight_kg) = (data[1], data[2]);

    let activity: Activity = match kind {
        ActivityKind::Running => Running::new(action, duration_h, weight_kg).into(),
        ActivityKind::SportsWalking => {
            SportsWalking::new(action, duration_h, weight_kg, data[3]).into()
        }
        ActivityKind::Swimming => {
            Swimming::new(action, duration_h, weight_kg, data[3], data[4]).into()
        }
    };

    tracing::debug!(tag, kind = kind.name(), "Built workout");
    Ok(activity)
}

/// The action count must be a whole, non-negative number.
fn action_count(value: f64) -> Result<u64> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value < u64::MAX as f64 {
        Ok(value as u64)
    } else {
        Err(AppError::InvalidInput(format!(
            "action count must be a non-negative whole number, got {}",
            value
        )))
    }
}
