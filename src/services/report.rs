// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Rendering of workout summaries.

use crate::error::{AppError, Result};
use crate::models::InfoMessage;

/// Human-readable one-line message, three decimals per value.
pub fn format_summary(summary: &InfoMessage) -> String {
    summary.to_string()
}

/// Compact JSON object with the unrounded values.
pub fn format_summary_json(summary: &InfoMessage) -> Result<String> {
    serde_json::to_string(summary).map_err(|e| AppError::Serialization(e.to_string()))
}
