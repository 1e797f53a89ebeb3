// ABOUTME: Weekly set-progression thresholds for soreness and performance feedback
// ABOUTME: Controls deload triggers, maintain/add decisions, and performance crash detection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use crate::constants::progression::{
    CRASH_THRESHOLD, CRASH_WINDOW, DELOAD_PERFORMANCE_THRESHOLD, DELOAD_SUM_THRESHOLD,
    MAINTAIN_PERFORMANCE_THRESHOLD, UNDER_STIMULATED_SUM_THRESHOLD,
};
use crate::errors::ConfigError;

/// Set progression decision thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressionConfig {
    /// Deload when soreness + performance is at least this
    pub deload_sum_threshold: f64,
    /// Deload when performance is at least this
    pub deload_performance_threshold: f64,
    /// Add 2-3 sets when soreness + performance is at most this
    pub under_stimulated_sum_threshold: f64,
    /// Maintain sets when performance is at least this
    pub maintain_performance_threshold: f64,
    /// Performance score that counts toward a crash
    pub crash_threshold: f64,
    /// Consecutive crash entries needed to force a deload
    pub crash_window: usize,
}

impl Default for ProgressionConfig {
    fn default() -> Self {
        Self {
            deload_sum_threshold: DELOAD_SUM_THRESHOLD,
            deload_performance_threshold: DELOAD_PERFORMANCE_THRESHOLD,
            under_stimulated_sum_threshold: UNDER_STIMULATED_SUM_THRESHOLD,
            maintain_performance_threshold: MAINTAIN_PERFORMANCE_THRESHOLD,
            crash_threshold: CRASH_THRESHOLD,
            crash_window: CRASH_WINDOW,
        }
    }
}

impl ProgressionConfig {
    /// Check thresholds are finite and the crash window is non-empty
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` naming the offending field
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.crash_window == 0 {
            return Err(ConfigError::ValueOutOfRange("crash_window"));
        }
        let thresholds = [
            ("deload_sum_threshold", self.deload_sum_threshold),
            (
                "deload_performance_threshold",
                self.deload_performance_threshold,
            ),
            (
                "under_stimulated_sum_threshold",
                self.under_stimulated_sum_threshold,
            ),
            (
                "maintain_performance_threshold",
                self.maintain_performance_threshold,
            ),
            ("crash_threshold", self.crash_threshold),
        ];
        for (name, value) in thresholds {
            if !value.is_finite() {
                return Err(ConfigError::ValueOutOfRange(name));
            }
        }
        Ok(())
    }
}
