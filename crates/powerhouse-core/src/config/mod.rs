// ABOUTME: Configuration values injected into the training calculators
// ABOUTME: Aggregates muscle, progression, load adjustment, and mesocycle settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Calculator Configuration
//!
//! Plain, read-only values. Each calculator receives the slice it needs in its
//! constructor, so tests and parallel callers can use different settings
//! without touching shared state.

/// Environment variable names and overrides
pub mod environment;
mod load;
mod mesocycle;
mod muscle;
mod progression;

pub use load::LoadAdjustmentConfig;
pub use mesocycle::MesocycleLimits;
pub use muscle::{LandmarkSets, MuscleConfig};
pub use progression::ProgressionConfig;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Complete configuration for every calculator
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Volume landmark baselines and multipliers
    pub muscles: MuscleConfig,
    /// Weekly set-progression thresholds
    pub progression: ProgressionConfig,
    /// RIR-deviation load adjustment
    pub load_adjustment: LoadAdjustmentConfig,
    /// Mesocycle length bounds
    pub mesocycle: MesocycleLimits,
}

impl CalculatorConfig {
    /// Validate every section
    ///
    /// # Errors
    ///
    /// Returns the first `ConfigError` found by any section
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.muscles.validate()?;
        self.progression.validate()?;
        self.load_adjustment.validate()?;
        self.mesocycle.validate()
    }
}
