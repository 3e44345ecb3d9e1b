// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Loading sensor packages from JSON.

use crate::error::{AppError, Result};
use crate::models::SensorPackage;
use std::fs;
use std::path::Path;

/// Load packages from a JSON file.
pub fn load_packages_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<SensorPackage>> {
    let json_data =
        fs::read_to_string(path.as_ref()).map_err(|e| AppError::Io(e.to_string()))?;
    load_packages_from_json(&json_data)
}

/// Load packages from a JSON array of `{"workout_type": .., "data": [..]}`.
pub fn load_packages_from_json(json_data: &str) -> Result<Vec<SensorPackage>> {
    let packages: Vec<SensorPackage> =
        serde_json::from_str(json_data).map_err(|e| AppError::Parse(e.to_string()))?;

    tracing::info!(count = packages.len(), "Loaded sensor packages");
    Ok(packages)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_from_json() {
        let packages = load_packages_from_json(
            r#"[{"workout_type": "RUN", "data": [15000, 1, 75]},
                {"workout_type": "WLK", "data": [9000, 1.5, 75, 180]}]"#,
        )
        .unwrap();

        assert_eq!(packages.len(), 2);
        assert_eq!(packages[0], SensorPackage::new("RUN", vec![15000.0, 1.0, 75.0]));
        assert_eq!(packages[1].data[1], 1.5);
    }

    #[test]
    fn test_load_rejects_non_numeric_data() {
        let result = load_packages_from_json(r#"[{"workout_type": "RUN", "data": ["a"]}]"#);
        assert!(matches!(result, Err(AppError::Parse(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_packages_from_file("does/not/exist.json");
        assert!(matches!(result, Err(AppError::Io(_))));
    }
}
