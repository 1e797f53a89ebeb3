// ABOUTME: Calculator configuration loading from environment variables and JSON files
// ABOUTME: Re-exports the configuration value types from powerhouse-core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration
//!
//! The muscle table comes from an explicit file, else the file named by
//! `POWERHOUSE_MUSCLE_CONFIG`, else the built-in defaults. Scalar
//! `POWERHOUSE_*` variables are applied on top of it.

use std::path::Path;

pub use powerhouse_core::config::environment;
pub use powerhouse_core::config::{
    CalculatorConfig, LoadAdjustmentConfig, MesocycleLimits, MuscleConfig, ProgressionConfig,
};
use powerhouse_core::errors::ConfigError;
use tracing::info;

/// Load the calculator configuration
///
/// `muscle_file`, when given, is read instead of `POWERHOUSE_MUSCLE_CONFIG`.
/// Scalar environment overrides apply on top of it.
///
/// # Errors
///
/// Returns `ConfigError` when an environment value or the file is invalid
pub fn load(muscle_file: Option<&Path>) -> Result<CalculatorConfig, ConfigError> {
    let config = CalculatorConfig::from_env_with_muscle_file(muscle_file)?;

    if let Some(path) = muscle_file {
        info!(
            path = %path.display(),
            muscles = config.muscles.baseline.len(),
            "Loaded muscle configuration file"
        );
    }

    Ok(config)
}
