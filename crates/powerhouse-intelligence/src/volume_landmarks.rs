// ABOUTME: Volume landmark calculator deriving MV, MEV, MAV, and MRV per muscle group
// ABOUTME: Scales configured baselines by experience level and muscle-specific MRV multipliers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeMap;

use powerhouse_core::config::{LandmarkSets, MuscleConfig};
use powerhouse_core::constants::volume_landmarks::RECOVERY_FLOOR_FACTOR;
use powerhouse_core::errors::{CalcResult, CalculatorError};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Experience level used when the caller does not name one
pub const DEFAULT_LEVEL: &str = "intermediate";

/// Maximum Adaptive Volume range in weekly sets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MavRange {
    /// Lower bound of the productive range
    pub lower: u32,
    /// Upper bound of the productive range
    pub upper: u32,
}

/// All four volume landmarks for one muscle and experience level
///
/// Always ordered `mv <= mev <= mav.lower <= mav.upper <= mrv`; a
/// configuration that cannot satisfy this is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolumeLandmarks {
    /// Minimum Volume
    pub mv: u32,
    /// Minimum Effective Volume
    pub mev: u32,
    /// Maximum Adaptive Volume
    pub mav: MavRange,
    /// Maximum Recoverable Volume
    pub mrv: u32,
}

impl VolumeLandmarks {
    /// Classify a weekly set count against these landmarks
    #[must_use]
    pub const fn status(&self, sets: u32) -> VolumeStatus {
        if sets < self.mv {
            VolumeStatus::UnderMinimum
        } else if sets < self.mev {
            VolumeStatus::Maintenance
        } else if sets <= self.mav.upper {
            VolumeStatus::Optimal
        } else if sets < self.mrv {
            VolumeStatus::High
        } else {
            VolumeStatus::Maximum
        }
    }
}

/// Training zone a weekly set count falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VolumeStatus {
    /// Below MV: not enough to maintain
    UnderMinimum,
    /// Between MV and MEV: maintains, little growth
    Maintenance,
    /// Between MEV and the top of MAV
    Optimal,
    /// Above MAV, below MRV
    High,
    /// At or above MRV
    Maximum,
}

/// Computes volume landmarks from an injected [`MuscleConfig`]
#[derive(Debug, Clone, Default)]
pub struct VolumeLandmarkCalculator {
    config: MuscleConfig,
}

fn whole_sets(value: f64) -> u32 {
    value.max(0.0) as u32
}

impl VolumeLandmarkCalculator {
    /// Create a calculator over the given configuration
    #[must_use]
    pub const fn new(config: MuscleConfig) -> Self {
        Self { config }
    }

    /// Configuration this calculator reads
    #[must_use]
    pub const fn config(&self) -> &MuscleConfig {
        &self.config
    }

    /// Configured muscle names in sorted order
    pub fn muscles(&self) -> impl Iterator<Item = &str> {
        self.config.baseline.keys().map(String::as_str)
    }

    /// Multiplier for an experience level, falling back to the default (1.0)
    /// for levels that are not configured
    #[must_use]
    pub fn multiplier(&self, level: &str) -> f64 {
        self.config.level_multiplier(level)
    }

    fn baseline(&self, muscle: &str) -> CalcResult<f64> {
        self.config.baseline.get(muscle).copied().ok_or_else(|| {
            warn!(muscle, "Volume landmarks requested for unconfigured muscle");
            CalculatorError::unknown_muscle(muscle)
        })
    }

    fn sets(&self, muscle: &str, level: &str) -> CalcResult<LandmarkSets> {
        let baseline = self.baseline(muscle)?;
        Ok(LandmarkSets::compute(
            baseline,
            self.multiplier(level),
            self.config.mrv_multiplier(muscle),
        ))
    }

    /// Minimum Volume: `round(baseline * multiplier(level))`
    ///
    /// # Errors
    ///
    /// Returns `CalculatorError::UnknownMuscle` if the muscle has no baseline
    pub fn mv(&self, muscle: &str, level: &str) -> CalcResult<u32> {
        Ok(self.sets(muscle, level)?.mv)
    }

    /// Minimum Effective Volume: `ceil(MV * 1.25)`
    ///
    /// # Errors
    ///
    /// Returns `CalculatorError::UnknownMuscle` if the muscle has no baseline
    pub fn mev(&self, muscle: &str, level: &str) -> CalcResult<u32> {
        Ok(self.sets(muscle, level)?.mev)
    }

    /// Maximum Recoverable Volume: `ceil(MEV * muscle multiplier)`
    ///
    /// # Errors
    ///
    /// Returns `CalculatorError::UnknownMuscle` if the muscle has no baseline
    pub fn mrv(&self, muscle: &str, level: &str) -> CalcResult<u32> {
        Ok(self.sets(muscle, level)?.mrv)
    }

    /// Maximum Adaptive Volume range
    ///
    /// # Errors
    ///
    /// Returns `CalculatorError::UnknownMuscle` if the muscle has no baseline
    /// and `CalculatorError::InvalidConfiguration` if the range is inverted
    pub fn mav(&self, muscle: &str, level: &str) -> CalcResult<MavRange> {
        Ok(self.landmarks(muscle, level)?.mav)
    }

    /// All four landmarks in one value
    ///
    /// # Errors
    ///
    /// Returns `CalculatorError::UnknownMuscle` if the muscle has no baseline
    /// and `CalculatorError::InvalidConfiguration` if the configured
    /// multipliers produce unordered landmarks
    pub fn landmarks(&self, muscle: &str, level: &str) -> CalcResult<VolumeLandmarks> {
        let sets = self.sets(muscle, level)?;
        if !sets.is_ordered() {
            warn!(muscle, level, ?sets, "Configured multipliers produce unordered landmarks");
            return Err(CalculatorError::invalid_configuration(format!(
                "landmarks for '{muscle}' at level '{level}' are not ordered"
            )));
        }

        debug!(
            muscle,
            level,
            mv = sets.mv,
            mev = sets.mev,
            mav_lower = sets.mav_lower,
            mav_upper = sets.mav_upper,
            mrv = sets.mrv,
            "Computed volume landmarks"
        );

        Ok(VolumeLandmarks {
            mv: sets.mv,
            mev: sets.mev,
            mav: MavRange {
                lower: sets.mav_lower,
                upper: sets.mav_upper,
            },
            mrv: sets.mrv,
        })
    }

    /// Landmarks for every configured muscle, keyed by muscle name
    ///
    /// # Errors
    ///
    /// Never fails for a validated configuration; errors from individual
    /// muscles are propagated unchanged
    pub fn all_landmarks(&self, level: &str) -> CalcResult<BTreeMap<String, VolumeLandmarks>> {
        self.muscles()
            .map(|muscle| Ok((muscle.to_owned(), self.landmarks(muscle, level)?)))
            .collect()
    }

    /// Zone a weekly set count falls into for this muscle and level
    ///
    /// # Errors
    ///
    /// Returns `CalculatorError::UnknownMuscle` if the muscle has no baseline
    pub fn volume_status(&self, muscle: &str, level: &str, sets: u32) -> CalcResult<VolumeStatus> {
        Ok(self.landmarks(muscle, level)?.status(sets))
    }

    /// Set count for a recovery session
    ///
    /// Starts from the MEV/MRV midpoint, backs off one set (two when ill),
    /// and never goes below half of MEV.
    ///
    /// # Errors
    ///
    /// Returns `CalculatorError::UnknownMuscle` if the muscle has no baseline
    pub fn recovery_volume(&self, muscle: &str, level: &str, has_illness: bool) -> CalcResult<u32> {
        let landmarks = self.landmarks(muscle, level)?;
        let midpoint = whole_sets((f64::from(landmarks.mev + landmarks.mrv) / 2.0).round());
        let reduction = if has_illness { 2 } else { 1 };
        let floor = whole_sets((f64::from(landmarks.mev) * RECOVERY_FLOOR_FACTOR).ceil());

        Ok(midpoint.saturating_sub(reduction).max(floor))
    }
}
