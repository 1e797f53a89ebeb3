// ABOUTME: Weekly reps-in-reserve targets per program type and Epley-based load estimation
// ABOUTME: Maps RIR to intensity ranges and validates reported effort against targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use powerhouse_core::constants::load_adjustment::EPLEY_DIVISOR;
use powerhouse_core::constants::rir::{
    WeekEntry, DEFAULT_INTENSITY, DELOAD_WEEK, HYPERTROPHY_WEEKS, INTENSITY_BY_RIR,
    STRENGTH_WEEKS, URGENT_EFFORT_DIFFERENCE, VOLUME_WEEKS,
};
use powerhouse_core::errors::{CalcResult, CalculatorError};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Named RIR progression
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgramType {
    /// Moderate loads, RIR 3 down to 0
    #[default]
    Hypertrophy,
    /// Heavy loads, RIR 3 down to 0
    Strength,
    /// Light loads, RIR 4 down to 1
    Volume,
}

impl ProgramType {
    /// Every supported program type
    pub const ALL: [Self; 3] = [Self::Hypertrophy, Self::Strength, Self::Volume];

    /// Lowercase name used in configuration and on the command line
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hypertrophy => "hypertrophy",
            Self::Strength => "strength",
            Self::Volume => "volume",
        }
    }

    const fn weeks(self) -> &'static [WeekEntry] {
        match self {
            Self::Hypertrophy => &HYPERTROPHY_WEEKS,
            Self::Strength => &STRENGTH_WEEKS,
            Self::Volume => &VOLUME_WEEKS,
        }
    }
}

impl fmt::Display for ProgramType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProgramType {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|program| program.as_str() == s)
            .ok_or_else(|| CalculatorError::unknown_program_type(s))
    }
}

/// One working week of a progression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RirWeekPlan {
    /// Week number, starting at 1
    pub week: u32,
    /// Reps in reserve to aim for
    pub target_rir: f64,
    /// Load range as a percentage of 1RM, e.g. `"70-75%"`
    pub load_pct: String,
}

/// What a progression prescribes for a week
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum WeeklyRir {
    /// Normal training week
    Working(RirWeekPlan),
    /// Final week of the block
    Deload,
}

/// Agreement between a reported RIR and the target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffortVerdict {
    /// Within tolerance
    OnTarget,
    /// More reps left in reserve than planned
    TooEasy,
    /// Fewer reps left in reserve than planned
    TooHard,
}

/// How quickly a mismatch should be acted on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffortUrgency {
    /// No change needed
    Normal,
    /// Adjust next session
    Medium,
    /// Off by more than two reps
    High,
}

/// Result of comparing reported effort with the plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffortValidation {
    /// Reported reps in reserve
    pub actual_rir: f64,
    /// Planned reps in reserve
    pub target_rir: f64,
    /// `actual_rir - target_rir`
    pub deviation: f64,
    /// `|deviation| <= tolerance`
    pub within_tolerance: bool,
    /// Direction of the mismatch
    pub verdict: EffortVerdict,
    /// Size of the mismatch
    pub urgency: EffortUrgency,
}

/// Weekly RIR lookups and RIR-based load math
pub struct RirProgression;

impl RirProgression {
    /// Target RIR and load range for a week of the named progression
    ///
    /// Weeks 1-4 are working weeks; week 5 is the deload.
    ///
    /// # Errors
    ///
    /// Returns `CalculatorError::InvalidWeek` for weeks outside 1-5
    pub fn weekly_rir(week: u32, program_type: ProgramType) -> CalcResult<WeeklyRir> {
        if week == DELOAD_WEEK {
            return Ok(WeeklyRir::Deload);
        }

        program_type
            .weeks()
            .iter()
            .find(|(entry_week, _, _)| *entry_week == week)
            .map(|&(week, target_rir, load_pct)| {
                WeeklyRir::Working(RirWeekPlan {
                    week,
                    target_rir,
                    load_pct: load_pct.to_owned(),
                })
            })
            .ok_or_else(|| {
                warn!(week, program = %program_type, "Week outside progression table");
                CalculatorError::invalid_week(week, program_type.as_str())
            })
    }

    /// Recommended load for `reps` reps leaving `target_rir` in reserve
    ///
    /// `round(one_rm * 100 / (1 + (reps + target_rir) / 30) / 100)`
    ///
    /// # Errors
    ///
    /// Returns `CalculatorError::InvalidInput` when `one_rm` is not a positive
    /// finite number, `reps` is zero, or `target_rir` is negative or not finite
    pub fn calc_load(one_rm: f64, target_rir: f64, reps: u32) -> CalcResult<f64> {
        if !one_rm.is_finite() || one_rm <= 0.0 {
            return Err(CalculatorError::invalid_input(format!(
                "one-rep max must be positive, got {one_rm}"
            )));
        }
        if reps == 0 {
            return Err(CalculatorError::invalid_input("reps must be at least 1"));
        }
        if !target_rir.is_finite() || target_rir < 0.0 {
            return Err(CalculatorError::invalid_input(format!(
                "target RIR must be zero or more, got {target_rir}"
            )));
        }

        let reps_at_failure = f64::from(reps) + target_rir;
        let percentage = 100.0 / (1.0 + reps_at_failure / EPLEY_DIVISOR);
        let load = (one_rm * percentage / 100.0).round();

        debug!(one_rm, target_rir, reps, percentage, load, "Calculated RIR load");
        Ok(load)
    }

    /// %1RM range for an RIR value in half-rep steps; other values get `"70-75%"`
    #[must_use]
    pub fn intensity_for_rir(rir: f64) -> &'static str {
        INTENSITY_BY_RIR
            .iter()
            .find(|(entry, _)| (entry - rir).abs() < f64::EPSILON)
            .map_or(DEFAULT_INTENSITY, |&(_, range)| range)
    }

    /// Compare a reported RIR with the plan
    #[must_use]
    pub fn validate_effort(actual_rir: f64, target_rir: f64, tolerance: f64) -> EffortValidation {
        let deviation = actual_rir - target_rir;
        let within_tolerance = deviation.abs() <= tolerance;

        let verdict = if within_tolerance {
            EffortVerdict::OnTarget
        } else if deviation > 0.0 {
            EffortVerdict::TooEasy
        } else {
            EffortVerdict::TooHard
        };

        let urgency = if within_tolerance {
            EffortUrgency::Normal
        } else if deviation.abs() > URGENT_EFFORT_DIFFERENCE {
            EffortUrgency::High
        } else {
            EffortUrgency::Medium
        };

        EffortValidation {
            actual_rir,
            target_rir,
            deviation,
            within_tolerance,
            verdict,
            urgency,
        }
    }
}
