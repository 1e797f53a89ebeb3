// ABOUTME: Unified error taxonomy for the training calculators
// ABOUTME: Maps every calculator failure to a stable, serializable error code
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Calculator Error Handling
//!
//! Every calculator fails synchronously with a [`CalculatorError`]. Each variant
//! carries an [`ErrorCode`] so callers can branch on the kind of failure without
//! parsing the message.

mod config;

pub use config::ConfigError;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable error codes exposed to callers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Lookup failures (4000-4999)
    /// Requested muscle group is not in the muscle configuration
    #[serde(rename = "UNKNOWN_MUSCLE")]
    UnknownMuscle = 4000,
    /// Requested RIR progression type is not configured
    #[serde(rename = "UNKNOWN_PROGRAM_TYPE")]
    UnknownProgramType = 4001,
    /// Requested week has no entry in the progression table
    #[serde(rename = "INVALID_WEEK")]
    InvalidWeek = 4002,

    // Validation (3000-3999)
    /// Numeric input outside the domain of the formula
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,

    // Configuration (6000-6999)
    /// Degenerate or inconsistent configuration
    #[serde(rename = "INVALID_CONFIGURATION")]
    InvalidConfiguration = 6002,
}

impl ErrorCode {
    /// Numeric value of the code
    #[must_use]
    pub const fn as_u16(self) -> u16 {
        self as u16
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::UnknownMuscle => "The requested muscle group is not configured",
            Self::UnknownProgramType => "The requested progression type is not configured",
            Self::InvalidWeek => "The requested week is not part of the progression",
            Self::InvalidInput => "The provided input is invalid",
            Self::InvalidConfiguration => "The calculator configuration is invalid",
        }
    }
}

/// Errors produced by the training calculators
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalculatorError {
    /// Muscle absent from the baseline configuration
    #[error("unknown muscle group '{muscle}'")]
    UnknownMuscle {
        /// Name that was requested
        muscle: String,
    },

    /// Progression type absent from the RIR tables
    #[error("unknown program type '{program_type}'")]
    UnknownProgramType {
        /// Name that was requested
        program_type: String,
    },

    /// Week without an entry in the selected table
    #[error("week {week} is not defined for the {program_type} progression")]
    InvalidWeek {
        /// Week that was requested
        week: u32,
        /// Progression table that was searched
        program_type: String,
    },

    /// Degenerate calculator configuration
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Numeric input rejected by validation
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl CalculatorError {
    /// Create an "unknown muscle" error
    #[must_use]
    pub fn unknown_muscle(muscle: impl Into<String>) -> Self {
        Self::UnknownMuscle {
            muscle: muscle.into(),
        }
    }

    /// Create an "unknown program type" error
    #[must_use]
    pub fn unknown_program_type(program_type: impl Into<String>) -> Self {
        Self::UnknownProgramType {
            program_type: program_type.into(),
        }
    }

    /// Create an "invalid week" error
    #[must_use]
    pub fn invalid_week(week: u32, program_type: impl Into<String>) -> Self {
        Self::InvalidWeek {
            week,
            program_type: program_type.into(),
        }
    }

    /// Create an "invalid configuration" error
    #[must_use]
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration(message.into())
    }

    /// Create an "invalid input" error
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Error code for this failure
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::UnknownMuscle { .. } => ErrorCode::UnknownMuscle,
            Self::UnknownProgramType { .. } => ErrorCode::UnknownProgramType,
            Self::InvalidWeek { .. } => ErrorCode::InvalidWeek,
            Self::InvalidConfiguration(_) => ErrorCode::InvalidConfiguration,
            Self::InvalidInput(_) => ErrorCode::InvalidInput,
        }
    }
}

/// Result type alias for calculator operations
pub type CalcResult<T> = Result<T, CalculatorError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_match_variants() {
        assert_eq!(
            CalculatorError::unknown_muscle("neck").code(),
            ErrorCode::UnknownMuscle
        );
        assert_eq!(
            CalculatorError::unknown_program_type("power").code(),
            ErrorCode::UnknownProgramType
        );
        assert_eq!(
            CalculatorError::invalid_week(9, "strength").code(),
            ErrorCode::InvalidWeek
        );
        assert_eq!(
            CalculatorError::invalid_input("reps").code().as_u16(),
            3000
        );
    }

    #[test]
    fn test_error_code_serializes_to_screaming_name() {
        let json = serde_json::to_string(&ErrorCode::InvalidConfiguration).unwrap();
        assert_eq!(json, "\"INVALID_CONFIGURATION\"");
    }

    #[test]
    fn test_error_display_names_the_input() {
        let error = CalculatorError::invalid_week(7, "hypertrophy");
        assert_eq!(
            error.to_string(),
            "week 7 is not defined for the hypertrophy progression"
        );
    }
}
