// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout Tracker CLI
//!
//! Reads sensor packages (built-in samples or a JSON file) and prints one
//! summary line per workout, in input order.

use anyhow::Context;
use std::io::Write;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use workout_tracker::{
    config::{Config, LogFormat},
    models::sample_packages,
    services::{load_packages_from_file, process_package, registered_tags},
};

fn main() -> anyhow::Result<()> {
    // Load configuration from environment
    let config = Config::from_env().context("Failed to load configuration")?;

    init_logging(&config)?;
    tracing::info!(
        output_format = ?config.output_format,
        tags = ?registered_tags().collect::<Vec<_>>(),
        "Starting workout tracker"
    );

    let packages = match &config.packages_file {
        Some(path) => {
            tracing::info!(path = %path.display(), "Loading sensor packages");
            load_packages_from_file(path)
                .with_context(|| format!("Failed to load packages from {}", path.display()))?
        }
        None => sample_packages(),
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for package in &packages {
        let line = process_package(package, config.output_format).inspect_err(|e| {
            tracing::error!(error = %e, workout_type = %package.workout_type, "Processing failed");
        })?;
        writeln!(out, "{}", line)?;
    }

    tracing::info!(count = packages.len(), "All packages processed");
    Ok(())
}

/// Initialize structured logging on stderr.
fn init_logging(config: &Config) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(&config.log_level))
        .context("Invalid log filter")?;

    let registry = tracing_subscriber::registry().with(filter);

    match config.log_format {
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(false)
                    .with_current_span(true)
                    .flatten_event(true)
                    .with_writer(std::io::stderr),
            )
            .init(),
        LogFormat::Pretty => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
    Ok(())
}
