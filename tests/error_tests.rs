// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use workout_tracker::error::AppError;
use workout_tracker::models::{Training, Workout};
use workout_tracker::services::read_package;

#[test]
fn test_unknown_tag_does_not_fall_through() {
    for tag in ["CYC", "swm", "RUNX", ""] {
        let err = read_package(tag, &[15000.0, 1.0, 75.0]).unwrap_err();
        assert!(
            matches!(err, AppError::UnknownActivityType(ref t) if t == tag),
            "tag {:?} gave {:?}",
            tag,
            err
        );
    }
}

#[test]
fn test_arity_mismatch_for_every_tag() {
    let valid: [(&str, Vec<f64>); 3] = [
        ("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        ("RUN", vec![15000.0, 1.0, 75.0]),
        ("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ];

    for (tag, data) in valid {
        let short = read_package(tag, &data[..data.len() - 1]).unwrap_err();
        assert!(short.is_missing_arguments(), "{} short: {:?}", tag, short);

        let mut long = data.clone();
        long.push(1.0);
        let long = read_package(tag, &long).unwrap_err();
        assert!(long.is_extra_arguments(), "{} long: {:?}", tag, long);
    }
}

#[test]
fn test_arity_helpers_no_match() {
    let err = AppError::UnknownActivityType("CYC".to_string());
    assert!(!err.is_missing_arguments());
    assert!(!err.is_extra_arguments());

    let err = AppError::InvalidInput("bad".to_string());
    assert!(!err.is_missing_arguments());
}

#[test]
fn test_error_messages() {
    let err = read_package("WLK", &[9000.0, 1.0]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Wrong number of values for WLK: expected 4, got 2"
    );

    let err = read_package("CYC", &[]).unwrap_err();
    assert_eq!(err.to_string(), "Unknown activity type: CYC");
}

#[test]
fn test_base_training_calories_unimplemented() {
    let base = Training::new(15000, 1.0, 75.0);
    let err = base.spent_calories().unwrap_err();
    assert!(matches!(err, AppError::UnimplementedOperation("spent_calories")));
}
