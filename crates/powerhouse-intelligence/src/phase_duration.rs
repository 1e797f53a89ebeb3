// ABOUTME: Training phase duration from phase bases and age, goal, and recovery modifiers
// ABOUTME: Rounds the scaled base and clamps it to each phase's allowed week range
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use powerhouse_core::constants::phase_duration::{FOUNDATION, HYPERTROPHY, PEAK, STRENGTH};
use powerhouse_core::errors::CalculatorError;
use serde::{Deserialize, Serialize};
use tracing::debug;

macro_rules! named_enum {
    ($(#[$meta:meta])* $name:ident, $label:literal { $($(#[$vmeta:meta])* $variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            /// Every variant
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Lowercase name
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = CalculatorError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|value| value.as_str() == s)
                    .ok_or_else(|| {
                        CalculatorError::invalid_input(format!("unknown {} '{s}'", $label))
                    })
            }
        }
    };
}

named_enum!(
    /// Macrocycle phase
    TrainingPhase, "training phase" {
        /// General preparation
        Foundation => "foundation",
        /// Muscle gain
        #[default]
        Hypertrophy => "hypertrophy",
        /// Maximal strength
        Strength => "strength",
        /// Competition peaking
        Peak => "peak",
    }
);

named_enum!(
    /// Lifting experience
    TrainingAge, "training age" {
        /// Under a year or two of structured training
        Beginner => "beginner",
        /// Several years of structured training
        #[default]
        Intermediate => "intermediate",
        /// Adapts quickly, needs shorter phases
        Advanced => "advanced",
    }
);

named_enum!(
    /// Primary training goal
    TrainingGoal, "training goal" {
        /// Size
        #[default]
        Hypertrophy => "hypertrophy",
        /// Maximal strength
        Strength => "strength",
        /// Size and strength
        Powerbuilding => "powerbuilding",
        /// Muscular endurance
        Endurance => "endurance",
    }
);

named_enum!(
    /// Self-rated recovery capacity
    RecoveryRating, "recovery rating" {
        /// Short on sleep or high life stress
        Poor => "poor",
        /// Typical
        #[default]
        Average => "average",
        /// Better than typical
        Good => "good",
        /// Consistently well recovered
        Excellent => "excellent",
    }
);

impl TrainingPhase {
    /// (base, min, max) weeks
    const fn bounds(self) -> (f64, u32, u32) {
        match self {
            Self::Foundation => FOUNDATION,
            Self::Hypertrophy => HYPERTROPHY,
            Self::Strength => STRENGTH,
            Self::Peak => PEAK,
        }
    }
}

impl TrainingAge {
    const fn modifier(self) -> f64 {
        match self {
            Self::Beginner => 1.2,
            Self::Intermediate => 1.0,
            Self::Advanced => 0.8,
        }
    }
}

impl TrainingGoal {
    const fn modifier(self) -> f64 {
        match self {
            Self::Hypertrophy => 1.1,
            Self::Strength => 1.0,
            Self::Powerbuilding => 0.9,
            Self::Endurance => 1.2,
        }
    }
}

impl RecoveryRating {
    const fn modifier(self) -> f64 {
        match self {
            Self::Poor => 0.8,
            Self::Average => 1.0,
            Self::Good => 1.1,
            Self::Excellent => 1.2,
        }
    }
}

/// Phase length estimates
pub struct PhaseDurationCalculator;

impl PhaseDurationCalculator {
    /// Weeks to spend in `phase`
    #[must_use]
    pub fn phase_duration(
        phase: TrainingPhase,
        training_age: TrainingAge,
        goal: TrainingGoal,
        recovery: RecoveryRating,
    ) -> u32 {
        let (base, min, max) = phase.bounds();
        let scaled = (base * training_age.modifier() * goal.modifier() * recovery.modifier())
            .round()
            .max(0.0) as u32;
        let weeks = scaled.clamp(min, max);

        debug!(%phase, %training_age, %goal, %recovery, scaled, weeks, "Computed phase duration");
        weeks
    }
}
