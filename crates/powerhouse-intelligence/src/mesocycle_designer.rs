// ABOUTME: Linear mesocycle plan generation interpolating set volume and target RIR
// ABOUTME: Emits one week plan per configured week with validated week bounds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use powerhouse_core::config::MesocycleLimits;
use powerhouse_core::constants::mesocycle::RIR_DECIMALS;
use powerhouse_core::errors::{CalcResult, CalculatorError};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Block parameters to interpolate between
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MesocycleConfig {
    /// Number of weeks in the block
    pub weeks: u32,
    /// Weekly sets in the first week
    pub start_volume: u32,
    /// Weekly sets in the last week
    pub end_volume: u32,
    /// Target RIR in the first week
    pub rir_start: f64,
    /// Target RIR in the last week
    pub rir_end: f64,
}

/// One week of a generated plan
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MesocycleWeekPlan {
    /// Week number, starting at 1
    pub week: u32,
    /// Weekly sets
    pub sets: u32,
    /// Target RIR, one decimal place
    pub target_rir: f64,
}

/// Generates linear mesocycle plans within [`MesocycleLimits`]
#[derive(Debug, Clone, Copy, Default)]
pub struct MesocycleDesigner {
    limits: MesocycleLimits,
}

fn round_rir(value: f64) -> f64 {
    let scale = 10_f64.powi(RIR_DECIMALS);
    // normalise -0.0
    (value * scale).round() / scale + 0.0
}

impl MesocycleDesigner {
    /// Create a designer accepting block lengths within `limits`
    #[must_use]
    pub const fn new(limits: MesocycleLimits) -> Self {
        Self { limits }
    }

    fn validate(&self, config: &MesocycleConfig) -> CalcResult<()> {
        if !self.limits.contains(config.weeks) {
            warn!(weeks = config.weeks, "Rejected mesocycle length");
            return Err(CalculatorError::invalid_configuration(format!(
                "mesocycle must span {}-{} weeks, got {}",
                self.limits.min_weeks, self.limits.max_weeks, config.weeks
            )));
        }
        for (name, rir) in [("rir_start", config.rir_start), ("rir_end", config.rir_end)] {
            if !rir.is_finite() || rir < 0.0 {
                return Err(CalculatorError::invalid_configuration(format!(
                    "{name} must be a non-negative number, got {rir}"
                )));
            }
        }
        Ok(())
    }

    /// Week-by-week plan moving linearly from the start to the end values
    ///
    /// The first week always carries the start volume and RIR and the last
    /// week the end values (to one decimal of RIR). A one-week block is just
    /// the start values.
    ///
    /// # Errors
    ///
    /// Returns `CalculatorError::InvalidConfiguration` when the week count is
    /// outside the limits or either RIR is negative or not finite
    pub fn design_mesocycle(&self, config: &MesocycleConfig) -> CalcResult<Vec<MesocycleWeekPlan>> {
        self.validate(config)?;

        if config.weeks == 1 {
            return Ok(vec![MesocycleWeekPlan {
                week: 1,
                sets: config.start_volume,
                target_rir: config.rir_start,
            }]);
        }

        let steps = f64::from(config.weeks - 1);
        let start_volume = f64::from(config.start_volume);
        let volume_step = (f64::from(config.end_volume) - start_volume) / steps;
        let rir_step = (config.rir_start - config.rir_end) / steps;

        let plan: Vec<MesocycleWeekPlan> = (0..config.weeks)
            .map(|i| {
                let offset = f64::from(i);
                MesocycleWeekPlan {
                    week: i + 1,
                    sets: offset.mul_add(volume_step, start_volume).round().max(0.0) as u32,
                    target_rir: round_rir(offset.mul_add(-rir_step, config.rir_start)),
                }
            })
            .collect();

        debug!(
            weeks = config.weeks,
            start_volume = config.start_volume,
            end_volume = config.end_volume,
            rir_start = config.rir_start,
            rir_end = config.rir_end,
            "Designed mesocycle"
        );
        Ok(plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_rir_normalises_negative_zero() {
        let rounded = round_rir(-0.000_000_1);
        assert!(rounded.is_sign_positive());
        assert!(rounded.abs() < f64::EPSILON);
    }

    #[test]
    fn test_round_rir_one_decimal() {
        assert!((round_rir(2.666_666) - 2.7).abs() < 1e-9);
        assert!((round_rir(1.333_333) - 1.3).abs() < 1e-9);
    }
}
