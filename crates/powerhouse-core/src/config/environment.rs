// ABOUTME: Environment variable overrides for the calculator configuration
// ABOUTME: Starts from defaults and applies POWERHOUSE_* variables, then validates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::env;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::{CalculatorConfig, MuscleConfig};
use crate::errors::ConfigError;

/// Path to a JSON `MuscleConfig` document
pub const MUSCLE_CONFIG_VAR: &str = "POWERHOUSE_MUSCLE_CONFIG";
/// Performance crash threshold
pub const CRASH_THRESHOLD_VAR: &str = "POWERHOUSE_CRASH_THRESHOLD";
/// Consecutive entries needed for a crash
pub const CRASH_WINDOW_VAR: &str = "POWERHOUSE_CRASH_WINDOW";
/// MRV multiplier for muscles without a specific one
pub const DEFAULT_MRV_MULTIPLIER_VAR: &str = "POWERHOUSE_DEFAULT_MRV_MULTIPLIER";
/// Load adjustment dead band in RIR
pub const LOAD_DEADBAND_VAR: &str = "POWERHOUSE_LOAD_DEADBAND";
/// Load adjustment cap in percent
pub const MAX_LOAD_CHANGE_PCT_VAR: &str = "POWERHOUSE_MAX_LOAD_CHANGE_PCT";

/// Every variable read by [`CalculatorConfig::from_env`]
pub const ALL_VARS: [&str; 6] = [
    MUSCLE_CONFIG_VAR,
    CRASH_THRESHOLD_VAR,
    CRASH_WINDOW_VAR,
    DEFAULT_MRV_MULTIPLIER_VAR,
    LOAD_DEADBAND_VAR,
    MAX_LOAD_CHANGE_PCT_VAR,
];

fn env_parse<T: FromStr>(key: &str) -> Result<Option<T>, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Parse(format!("{key}: cannot parse '{raw}'"))),
        Err(_) => Ok(None),
    }
}

impl CalculatorConfig {
    /// Load configuration from environment variables
    ///
    /// Unset variables keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` naming the variable when a value cannot be
    /// parsed, `ConfigError::Io` when the muscle file cannot be read, and any
    /// validation error
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_with_muscle_file(None)
    }

    /// Load configuration from environment variables and a muscle file
    ///
    /// `muscle_file` takes the place of `POWERHOUSE_MUSCLE_CONFIG`. Scalar
    /// variables still apply on top of whichever file is read.
    ///
    /// # Errors
    ///
    /// As [`CalculatorConfig::from_env`]
    pub fn from_env_with_muscle_file(muscle_file: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let muscle_file = muscle_file
            .map(Path::to_path_buf)
            .or_else(|| env::var_os(MUSCLE_CONFIG_VAR).map(PathBuf::from));
        if let Some(path) = &muscle_file {
            config.muscles = MuscleConfig::read_json_file(path)?;
        }
        if let Some(value) = env_parse(CRASH_THRESHOLD_VAR)? {
            config.progression.crash_threshold = value;
        }
        if let Some(value) = env_parse(CRASH_WINDOW_VAR)? {
            config.progression.crash_window = value;
        }
        if let Some(value) = env_parse(DEFAULT_MRV_MULTIPLIER_VAR)? {
            config.muscles.default_mrv_multiplier = value;
        }
        if let Some(value) = env_parse(LOAD_DEADBAND_VAR)? {
            config.load_adjustment.deadband_rir = value;
        }
        if let Some(value) = env_parse(MAX_LOAD_CHANGE_PCT_VAR)? {
            config.load_adjustment.max_change_pct = value;
        }

        config.validate()?;
        tracing::debug!(
            muscle_file = ?muscle_file,
            progression = ?config.progression,
            load_adjustment = ?config.load_adjustment,
            "Loaded calculator configuration from environment"
        );
        Ok(config)
    }
}
