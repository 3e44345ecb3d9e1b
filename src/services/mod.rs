// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - dispatch, processing and rendering.

pub mod dispatcher;
pub mod packages;
pub mod processor;
pub mod report;

pub use dispatcher::{read_package, registered_tags};
pub use packages::{load_packages_from_file, load_packages_from_json};
pub use processor::{process_package, process_packages};
pub use report::{format_summary, format_summary_json};
