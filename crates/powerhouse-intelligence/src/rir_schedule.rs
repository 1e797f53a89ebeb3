// ABOUTME: Mesocycle-length RIR schedules and load adjustment from RIR deviation
// ABOUTME: Falls back to RIR 3 outside supported lengths and clamps weeks past the schedule
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use powerhouse_core::config::LoadAdjustmentConfig;
use powerhouse_core::constants::rir::{
    DEFAULT_TARGET_RIR, MAX_SCHEDULED_LENGTH, MIN_SCHEDULED_LENGTH, SCHEDULE_4_WEEKS,
    SCHEDULE_5_WEEKS, SCHEDULE_6_WEEKS,
};
use tracing::{debug, warn};

/// Target RIR lookup by mesocycle week
pub struct RirSchedule;

impl RirSchedule {
    /// Full schedule used for a mesocycle length, if one exists
    ///
    /// Three-week blocks share the four-week schedule.
    #[must_use]
    pub const fn schedule(meso_length: u32) -> Option<&'static [f64]> {
        match meso_length {
            3 | 4 => Some(SCHEDULE_4_WEEKS),
            5 => Some(SCHEDULE_5_WEEKS),
            6 => Some(SCHEDULE_6_WEEKS),
            _ => None,
        }
    }

    /// Target RIR for `week` of a block of `meso_length` weeks
    ///
    /// Unsupported lengths and week 0 give RIR 3. Weeks past the end of the
    /// schedule repeat its last value.
    #[must_use]
    pub fn target_rir(week: u32, meso_length: u32) -> f64 {
        if week < 1 || !(MIN_SCHEDULED_LENGTH..=MAX_SCHEDULED_LENGTH).contains(&meso_length) {
            return DEFAULT_TARGET_RIR;
        }
        let Some(schedule) = Self::schedule(meso_length) else {
            return DEFAULT_TARGET_RIR;
        };

        let index = (week as usize - 1).min(schedule.len() - 1);
        schedule.get(index).copied().unwrap_or(DEFAULT_TARGET_RIR)
    }
}

/// Turns RIR deviation into a percentage load change
#[derive(Debug, Clone, Default)]
pub struct LoadAdjuster {
    config: LoadAdjustmentConfig,
}

impl LoadAdjuster {
    /// Create an adjuster with the given dead band and scaling
    #[must_use]
    pub const fn new(config: LoadAdjustmentConfig) -> Self {
        Self { config }
    }

    /// Percentage to change next session's load by
    ///
    /// Positive when the session was easier than planned, negative when it
    /// was harder, zero inside the dead band. Capped at the configured
    /// maximum in both directions.
    #[must_use]
    pub fn adjustment_pct(&self, actual_rir: f64, target_rir: f64) -> f64 {
        let deviation = actual_rir - target_rir;
        if !deviation.is_finite() {
            warn!(actual_rir, target_rir, "Non-finite RIR deviation, leaving load unchanged");
            return 0.0;
        }
        if deviation.abs() <= self.config.deadband_rir {
            return 0.0;
        }

        let cap = self.config.max_change_pct;
        let change = if deviation > 0.0 {
            (deviation * self.config.increase_pct_per_rir).min(cap)
        } else {
            (deviation * self.config.decrease_pct_per_rir).max(-cap)
        };

        debug!(actual_rir, target_rir, change, "Computed load adjustment");
        change
    }
}
