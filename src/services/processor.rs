// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Package processing.
//!
//! Each package goes through the same steps:
//! 1. Look up the tag and build the workout
//! 2. Compute the summary
//! 3. Render it in the configured format

use crate::config::OutputFormat;
use crate::error::Result;
use crate::models::{SensorPackage, Workout};
use crate::services::{dispatcher, report};

/// Process a single package into one output line.
pub fn process_package(package: &SensorPackage, format: OutputFormat) -> Result<String> {
    let activity = dispatcher::read_package(&package.workout_type, &package.data)?;
    let info = activity.show_training_info()?;

    tracing::debug!(
        workout_type = %package.workout_type,
        distance_km = info.distance_km,
        speed_kmh = info.speed_kmh,
        calories_kcal = info.calories_kcal,
        "Computed workout summary"
    );

    match format {
        OutputFormat::Text => Ok(report::format_summary(&info)),
        OutputFormat::Json => report::format_summary_json(&info),
    }
}

/// Process packages in order, stopping at the first failure.
pub fn process_packages(packages: &[SensorPackage], format: OutputFormat) -> Result<Vec<String>> {
    packages
        .iter()
        .map(|package| process_package(package, format))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::models::sample_packages;

    #[test]
    fn test_process_samples_in_order() {
        let lines = process_packages(&sample_packages(), OutputFormat::Text).unwrap();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Activity type: Swimming;"));
        assert!(lines[1].starts_with("Activity type: Running;"));
        assert!(lines[2].starts_with("Activity type: SportsWalking;"));
    }

    #[test]
    fn test_process_stops_at_first_error() {
        let packages = vec![
            SensorPackage::new("RUN", vec![15000.0, 1.0, 75.0]),
            SensorPackage::new("CYC", vec![1.0, 1.0, 1.0]),
            SensorPackage::new("WLK", vec![9000.0, 1.0, 75.0]),
        ];
        let err = process_packages(&packages, OutputFormat::Text).unwrap_err();
        assert!(matches!(err, AppError::UnknownActivityType(_)));
    }

    #[test]
    fn test_process_json_format() {
        let package = SensorPackage::new("RUN", vec![15000.0, 1.0, 75.0]);
        let line = process_package(&package, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["training_type"], "Running");
    }
}
