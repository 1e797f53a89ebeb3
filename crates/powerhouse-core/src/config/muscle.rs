// ABOUTME: Muscle group baseline volumes and multipliers for volume landmark calculation
// ABOUTME: Loadable from JSON so the baseline table can live outside the binary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::volume_landmarks::{
    BASELINE_SETS, DEFAULT_LEVEL_MULTIPLIER, DEFAULT_MRV_MULTIPLIER, EXPERIENCE_MULTIPLIERS,
    MAV_LOWER_FACTOR, MAV_UPPER_FACTOR, MEV_FACTOR, MRV_MULTIPLIERS,
};
use crate::errors::ConfigError;

fn to_map(entries: &[(&str, f64)]) -> BTreeMap<String, f64> {
    entries
        .iter()
        .map(|(name, value)| ((*name).to_owned(), *value))
        .collect()
}

fn whole_sets(value: f64) -> u32 {
    value.max(0.0) as u32
}

/// Weekly set counts derived for one muscle at one experience level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LandmarkSets {
    /// Minimum Volume
    pub mv: u32,
    /// Minimum Effective Volume
    pub mev: u32,
    /// Lower bound of Maximum Adaptive Volume
    pub mav_lower: u32,
    /// Upper bound of Maximum Adaptive Volume
    pub mav_upper: u32,
    /// Maximum Recoverable Volume
    pub mrv: u32,
}

impl LandmarkSets {
    /// Apply the landmark formulas to a baseline and its multipliers
    #[must_use]
    pub fn compute(baseline: f64, level_multiplier: f64, mrv_multiplier: f64) -> Self {
        let mv = whole_sets((baseline * level_multiplier).round());
        let mev = whole_sets((f64::from(mv) * MEV_FACTOR).ceil());
        let mrv = whole_sets((f64::from(mev) * mrv_multiplier).ceil());
        Self {
            mv,
            mev,
            mav_lower: whole_sets((f64::from(mev) * MAV_LOWER_FACTOR).ceil()),
            mav_upper: whole_sets((f64::from(mrv) * MAV_UPPER_FACTOR).floor()),
            mrv,
        }
    }

    /// `mv <= mev <= mav_lower <= mav_upper <= mrv`
    #[must_use]
    pub const fn is_ordered(&self) -> bool {
        self.mv <= self.mev
            && self.mev <= self.mav_lower
            && self.mav_lower <= self.mav_upper
            && self.mav_upper <= self.mrv
    }
}

/// Baseline volumes and multipliers per muscle group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MuscleConfig {
    /// Baseline minimum volume (weekly sets) per muscle
    pub baseline: BTreeMap<String, f64>,
    /// Multiplier per experience level
    pub level_multipliers: BTreeMap<String, f64>,
    /// MEV-to-MRV multiplier per muscle
    pub mrv_multipliers: BTreeMap<String, f64>,
    /// Multiplier applied when a level is missing from `level_multipliers`
    pub default_level_multiplier: f64,
    /// Multiplier applied when a muscle is missing from `mrv_multipliers`
    pub default_mrv_multiplier: f64,
}

impl Default for MuscleConfig {
    fn default() -> Self {
        Self {
            baseline: to_map(BASELINE_SETS),
            level_multipliers: to_map(EXPERIENCE_MULTIPLIERS),
            mrv_multipliers: to_map(MRV_MULTIPLIERS),
            default_level_multiplier: DEFAULT_LEVEL_MULTIPLIER,
            default_mrv_multiplier: DEFAULT_MRV_MULTIPLIER,
        }
    }
}

impl MuscleConfig {
    /// Parse a configuration from a JSON document
    ///
    /// Fields missing from the document keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed JSON and any validation error
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON file without validating it
    pub(crate) fn read_json_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "Loading muscle configuration");
        Ok(serde_json::from_str(&contents)?)
    }

    /// Read a configuration from a JSON file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Io` when the file cannot be read, otherwise as
    /// [`MuscleConfig::from_json_str`]
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config = Self::read_json_file(path.as_ref())?;
        config.validate()?;
        Ok(config)
    }

    /// MRV multiplier for a muscle, falling back to the default
    #[must_use]
    pub fn mrv_multiplier(&self, muscle: &str) -> f64 {
        self.mrv_multipliers
            .get(muscle)
            .copied()
            .unwrap_or(self.default_mrv_multiplier)
    }

    /// Multiplier for an experience level, falling back to the default
    #[must_use]
    pub fn level_multiplier(&self, level: &str) -> f64 {
        self.level_multipliers
            .get(level)
            .copied()
            .unwrap_or(self.default_level_multiplier)
    }

    /// Check that every multiplier and baseline is usable
    ///
    /// Every muscle must also yield ordered landmarks at every configured
    /// level and at the default level multiplier.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingField` when no muscles are configured and
    /// `ConfigError::InvalidRange` for non-finite or non-positive values or
    /// inverted landmarks
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.baseline.is_empty() {
            return Err(ConfigError::MissingField("baseline"));
        }
        for (muscle, sets) in &self.baseline {
            if !sets.is_finite() || *sets <= 0.0 {
                return Err(ConfigError::InvalidRange(format!(
                    "baseline for '{muscle}' must be positive, got {sets}"
                )));
            }
        }
        for (level, multiplier) in &self.level_multipliers {
            if !multiplier.is_finite() || *multiplier <= 0.0 {
                return Err(ConfigError::InvalidRange(format!(
                    "multiplier for level '{level}' must be positive, got {multiplier}"
                )));
            }
        }
        for (muscle, multiplier) in &self.mrv_multipliers {
            if !multiplier.is_finite() || *multiplier <= 0.0 {
                return Err(ConfigError::InvalidRange(format!(
                    "MRV multiplier for '{muscle}' must be positive, got {multiplier}"
                )));
            }
        }
        if !self.default_level_multiplier.is_finite() || self.default_level_multiplier <= 0.0 {
            return Err(ConfigError::ValueOutOfRange("default_level_multiplier"));
        }
        if !self.default_mrv_multiplier.is_finite() || self.default_mrv_multiplier <= 0.0 {
            return Err(ConfigError::ValueOutOfRange("default_mrv_multiplier"));
        }
        self.validate_landmark_order()
    }

    fn validate_landmark_order(&self) -> Result<(), ConfigError> {
        let levels = self
            .level_multipliers
            .iter()
            .map(|(level, multiplier)| (level.as_str(), *multiplier))
            .chain([("default", self.default_level_multiplier)]);

        for (level, level_multiplier) in levels {
            for (muscle, baseline) in &self.baseline {
                let sets =
                    LandmarkSets::compute(*baseline, level_multiplier, self.mrv_multiplier(muscle));
                if !sets.is_ordered() {
                    return Err(ConfigError::InvalidRange(format!(
                        "landmarks for '{muscle}' at level '{level}' are not ordered: \
                         MV {} MEV {} MAV {}-{} MRV {}",
                        sets.mv, sets.mev, sets.mav_lower, sets.mav_upper, sets.mrv
                    )));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_default_contains_chest_baseline() {
        let config = MuscleConfig::default();
        assert_eq!(config.baseline.get("chest"), Some(&8.0));
        assert_eq!(config.level_multipliers.get("beginner"), Some(&0.75));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = MuscleConfig::from_json_str(r#"{"baseline": {"neck": 3}}"#).unwrap();
        assert_eq!(config.baseline.len(), 1);
        assert_eq!(config.level_multipliers.get("advanced"), Some(&1.25));
        assert!((config.default_mrv_multiplier - 2.2).abs() < f64::EPSILON);
    }

    #[test]
    fn test_negative_baseline_rejected() {
        let result = MuscleConfig::from_json_str(r#"{"baseline": {"chest": -1}}"#);
        assert!(matches!(result, Err(ConfigError::InvalidRange(_))));
    }

    #[test]
    fn test_empty_baseline_rejected() {
        let result = MuscleConfig::from_json_str(r#"{"baseline": {}}"#);
        assert!(matches!(result, Err(ConfigError::MissingField("baseline"))));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let result = MuscleConfig::from_json_str("{ not json");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_low_mrv_multiplier_rejected() {
        let result = MuscleConfig::from_json_str(
            r#"{"baseline": {"chest": 8}, "mrv_multipliers": {"chest": 1.2}}"#,
        );
        match result {
            Err(ConfigError::InvalidRange(message)) => {
                assert!(message.contains("'chest'"), "{message}");
            }
            other => panic!("expected inverted landmarks to be rejected, got {other:?}"),
        }
    }

    #[test]
    fn test_low_default_level_multiplier_checked() {
        let config = MuscleConfig {
            baseline: BTreeMap::from([("calves".to_owned(), 2.0)]),
            level_multipliers: BTreeMap::new(),
            mrv_multipliers: BTreeMap::new(),
            default_level_multiplier: 0.5,
            default_mrv_multiplier: 1.5,
        };
        // MV 1, MEV 2, MRV 3: MAV 3-2
        assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))));
    }

    #[test]
    fn test_landmark_sets_for_default_chest() {
        let sets = LandmarkSets::compute(8.0, 1.0, 2.2);
        assert_eq!(
            sets,
            LandmarkSets {
                mv: 8,
                mev: 10,
                mav_lower: 12,
                mav_upper: 20,
                mrv: 22,
            }
        );
        assert!(sets.is_ordered());
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"baseline": {{"chest": 10}}, "mrv_multipliers": {{}}}}"#).unwrap();

        let config = MuscleConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.baseline.get("chest"), Some(&10.0));
        assert!(config.mrv_multipliers.is_empty());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = MuscleConfig::from_json_file("/definitely/not/here.json");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
