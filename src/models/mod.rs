// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod package;
pub mod summary;
pub mod workout;

pub use package::{sample_packages, SensorPackage};
pub use summary::InfoMessage;
pub use workout::{
    Activity, ActivityKind, Running, SportsWalking, Swimming, Training, Workout,
};
