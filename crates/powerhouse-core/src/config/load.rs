// ABOUTME: Load adjustment settings for reps-in-reserve deviation feedback
// ABOUTME: Dead band, per-RIR scaling in each direction, and the percentage cap
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use crate::constants::load_adjustment::{
    DEADBAND_RIR, DECREASE_PCT_PER_RIR, INCREASE_PCT_PER_RIR, MAX_CHANGE_PCT,
};
use crate::errors::ConfigError;

/// Percentage load change derived from actual vs target RIR
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadAdjustmentConfig {
    /// Deviations with magnitude at most this produce no change
    pub deadband_rir: f64,
    /// Percent per RIR when the session was easier than planned
    pub increase_pct_per_rir: f64,
    /// Percent per RIR when the session was harder than planned
    pub decrease_pct_per_rir: f64,
    /// Cap on the change in either direction
    pub max_change_pct: f64,
}

impl Default for LoadAdjustmentConfig {
    fn default() -> Self {
        Self {
            deadband_rir: DEADBAND_RIR,
            increase_pct_per_rir: INCREASE_PCT_PER_RIR,
            decrease_pct_per_rir: DECREASE_PCT_PER_RIR,
            max_change_pct: MAX_CHANGE_PCT,
        }
    }
}

impl LoadAdjustmentConfig {
    /// Check every value is finite and non-negative
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` naming the offending field
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("deadband_rir", self.deadband_rir),
            ("increase_pct_per_rir", self.increase_pct_per_rir),
            ("decrease_pct_per_rir", self.decrease_pct_per_rir),
            ("max_change_pct", self.max_change_pct),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::ValueOutOfRange(name));
            }
        }
        Ok(())
    }
}
