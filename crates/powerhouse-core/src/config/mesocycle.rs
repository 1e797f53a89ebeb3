// ABOUTME: Mesocycle length bounds accepted by the mesocycle designer
// ABOUTME: Plans shorter or longer than these bounds are rejected as invalid configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use crate::constants::mesocycle::{MAX_WEEKS, MIN_WEEKS};
use crate::errors::ConfigError;

/// Inclusive bounds on mesocycle length in weeks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MesocycleLimits {
    /// Shortest accepted plan
    pub min_weeks: u32,
    /// Longest accepted plan
    pub max_weeks: u32,
}

impl Default for MesocycleLimits {
    fn default() -> Self {
        Self {
            min_weeks: MIN_WEEKS,
            max_weeks: MAX_WEEKS,
        }
    }
}

impl MesocycleLimits {
    /// Whether `weeks` lies inside the bounds
    #[must_use]
    pub const fn contains(&self, weeks: u32) -> bool {
        weeks >= self.min_weeks && weeks <= self.max_weeks
    }

    /// Check the bounds are ordered and exclude zero
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidRange` when `min_weeks` is zero or exceeds `max_weeks`
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_weeks == 0 {
            return Err(ConfigError::InvalidRange(
                "mesocycle min_weeks must be at least 1".to_owned(),
            ));
        }
        if self.min_weeks > self.max_weeks {
            return Err(ConfigError::InvalidRange(format!(
                "mesocycle min_weeks {} exceeds max_weeks {}",
                self.min_weeks, self.max_weeks
            )));
        }
        Ok(())
    }
}
