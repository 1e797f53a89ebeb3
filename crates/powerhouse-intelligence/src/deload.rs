// ABOUTME: Deload trigger scoring from volume, fatigue, performance, and recovery metrics
// ABOUTME: Selects light, standard, or deep deload strategies and deload set counts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Deload assessment
//!
//! Triggers are cumulative: breaching MRV also counts as approaching it, and
//! a 15% performance drop also counts as a 10% drop.

use powerhouse_core::constants::deload::{
    points, APPROACHING_MRV_FRACTION, CONSIDER_SCORE, DEEP_FATIGUE_LEVEL, DEEP_REDUCTIONS,
    DEEP_VOLUME_PRESSURE, DELOAD_SCORE, EXTENDED_DEEP_DELOAD_AFTER_BLOCKS, EXTENDED_WEEKS,
    HIGH_FATIGUE_SCORE, HIGH_JOINT_PAIN, LIGHT_REDUCTIONS, LOW_MOTIVATION, MAJOR_DROP_PCT,
    OVERDUE_WEEKS, POOR_SLEEP, SIGNIFICANT_DROP_PCT, STANDARD_FATIGUE_LEVEL, STANDARD_REDUCTIONS,
    STANDARD_VOLUME_PRESSURE, URGENT_SCORE,
};
use powerhouse_core::errors::{CalcResult, CalculatorError};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Neutral score for 1-10 wellness ratings
const NEUTRAL_RATING: f64 = 5.0;

/// Recovery and workload snapshot for one muscle or the whole program
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeloadMetrics {
    /// Current weekly sets
    pub current_volume: u32,
    /// MRV for the same scope; zero disables volume triggers
    pub mrv_threshold: u32,
    /// Fatigue rating, 1-10
    pub fatigue_score: f64,
    /// Performance drop from baseline, percent
    pub performance_drop_pct: f64,
    /// Weeks since the last deload
    pub weeks_since_deload: u32,
    /// Sleep quality rating, 1-10
    pub sleep_quality: f64,
    /// Motivation rating, 1-10
    pub motivation: f64,
    /// Joint pain rating, 1-10
    pub joint_pain: f64,
}

impl Default for DeloadMetrics {
    fn default() -> Self {
        Self {
            current_volume: 0,
            mrv_threshold: 0,
            fatigue_score: 0.0,
            performance_drop_pct: 0.0,
            weeks_since_deload: 0,
            sleep_quality: NEUTRAL_RATING,
            motivation: NEUTRAL_RATING,
            joint_pain: 0.0,
        }
    }
}

/// A condition that contributed to the deload score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeloadTrigger {
    /// Volume at 95% of MRV or more
    ApproachingMrv,
    /// Volume at or above MRV
    MrvBreached,
    /// Fatigue 8 or higher
    HighFatigue,
    /// Performance down 10% or more
    SignificantPerformanceDrop,
    /// Performance down 15% or more
    MajorPerformanceDrop,
    /// Six or more weeks without a deload
    ExtendedTrainingPeriod,
    /// Eight or more weeks without a deload
    OverdueDeload,
    /// Sleep rated 3 or lower
    PoorSleep,
    /// Motivation rated 3 or lower
    LowMotivation,
    /// Joint pain rated 7 or higher
    JointPain,
}

impl DeloadTrigger {
    /// Score contribution
    #[must_use]
    pub const fn points(self) -> u32 {
        match self {
            Self::ApproachingMrv => points::APPROACHING_MRV,
            Self::MrvBreached => points::MRV_BREACHED,
            Self::HighFatigue => points::HIGH_FATIGUE,
            Self::SignificantPerformanceDrop => points::SIGNIFICANT_DROP,
            Self::MajorPerformanceDrop => points::MAJOR_DROP,
            Self::ExtendedTrainingPeriod => points::EXTENDED,
            Self::OverdueDeload => points::OVERDUE,
            Self::PoorSleep => points::POOR_SLEEP,
            Self::LowMotivation => points::LOW_MOTIVATION,
            Self::JointPain => points::JOINT_PAIN,
        }
    }
}

/// Recommendation level derived from the score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeloadUrgency {
    /// Below 3
    NotNeeded,
    /// 3 to 4
    Consider,
    /// 5 to 7
    Recommended,
    /// 8 or more
    Urgent,
}

impl DeloadUrgency {
    const fn from_score(score: u32) -> Self {
        if score >= URGENT_SCORE {
            Self::Urgent
        } else if score >= DELOAD_SCORE {
            Self::Recommended
        } else if score >= CONSIDER_SCORE {
            Self::Consider
        } else {
            Self::NotNeeded
        }
    }
}

/// Outcome of [`DeloadAdvisor::assess`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeloadAssessment {
    /// Score of 5 or more
    pub should_deload: bool,
    /// Score of 3 or more
    pub should_consider: bool,
    /// Sum of trigger points
    pub urgency_score: u32,
    /// Triggers that fired, in evaluation order
    pub triggers: Vec<DeloadTrigger>,
    /// Recommendation level
    pub urgency: DeloadUrgency,
}

/// Deload depth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeloadKind {
    /// 70% volume, 80% load
    Light,
    /// 50% volume, 70% load
    Standard,
    /// 40% volume, 60% load
    Deep,
}

impl DeloadKind {
    /// (volume fraction of MEV, load fraction)
    const fn reductions(self) -> (f64, f64) {
        match self {
            Self::Light => LIGHT_REDUCTIONS,
            Self::Standard => STANDARD_REDUCTIONS,
            Self::Deep => DEEP_REDUCTIONS,
        }
    }
}

/// How to run a deload
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeloadStrategy {
    /// Depth
    pub kind: DeloadKind,
    /// Fraction of MEV to train at
    pub volume_reduction: f64,
    /// Fraction of normal load to use
    pub load_reduction: f64,
    /// Length in weeks
    pub duration_weeks: u32,
}

/// Deload scoring and strategy selection
pub struct DeloadAdvisor;

impl DeloadAdvisor {
    /// Score every trigger and summarise
    #[must_use]
    pub fn assess(metrics: &DeloadMetrics) -> DeloadAssessment {
        let mut triggers = Vec::new();

        if metrics.mrv_threshold > 0 {
            let volume = f64::from(metrics.current_volume);
            if volume >= f64::from(metrics.mrv_threshold) * APPROACHING_MRV_FRACTION {
                triggers.push(DeloadTrigger::ApproachingMrv);
            }
            if metrics.current_volume >= metrics.mrv_threshold {
                triggers.push(DeloadTrigger::MrvBreached);
            }
        }
        if metrics.fatigue_score >= HIGH_FATIGUE_SCORE {
            triggers.push(DeloadTrigger::HighFatigue);
        }
        if metrics.performance_drop_pct >= SIGNIFICANT_DROP_PCT {
            triggers.push(DeloadTrigger::SignificantPerformanceDrop);
        }
        if metrics.performance_drop_pct >= MAJOR_DROP_PCT {
            triggers.push(DeloadTrigger::MajorPerformanceDrop);
        }
        if metrics.weeks_since_deload >= EXTENDED_WEEKS {
            triggers.push(DeloadTrigger::ExtendedTrainingPeriod);
        }
        if metrics.weeks_since_deload >= OVERDUE_WEEKS {
            triggers.push(DeloadTrigger::OverdueDeload);
        }
        if metrics.sleep_quality <= POOR_SLEEP {
            triggers.push(DeloadTrigger::PoorSleep);
        }
        if metrics.motivation <= LOW_MOTIVATION {
            triggers.push(DeloadTrigger::LowMotivation);
        }
        if metrics.joint_pain >= HIGH_JOINT_PAIN {
            triggers.push(DeloadTrigger::JointPain);
        }

        let urgency_score = triggers.iter().map(|trigger| trigger.points()).sum();
        let urgency = DeloadUrgency::from_score(urgency_score);

        debug!(urgency_score, trigger_count = triggers.len(), ?urgency, "Assessed deload need");

        DeloadAssessment {
            should_deload: urgency_score >= DELOAD_SCORE,
            should_consider: urgency_score >= CONSIDER_SCORE,
            urgency_score,
            triggers,
            urgency,
        }
    }

    /// Pick a deload depth from normalised fatigue and volume pressure
    ///
    /// # Errors
    ///
    /// Returns `CalculatorError::InvalidInput` if either input is outside 0-1
    pub fn strategy(
        fatigue_level: f64,
        volume_pressure: f64,
        blocks_completed: u32,
    ) -> CalcResult<DeloadStrategy> {
        for (name, value) in [
            ("fatigue level", fatigue_level),
            ("volume pressure", volume_pressure),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(CalculatorError::invalid_input(format!(
                    "{name} must be between 0 and 1, got {value}"
                )));
            }
        }

        let kind = if fatigue_level >= DEEP_FATIGUE_LEVEL || volume_pressure >= DEEP_VOLUME_PRESSURE
        {
            DeloadKind::Deep
        } else if fatigue_level >= STANDARD_FATIGUE_LEVEL
            || volume_pressure >= STANDARD_VOLUME_PRESSURE
        {
            DeloadKind::Standard
        } else {
            DeloadKind::Light
        };
        let duration_weeks =
            if kind == DeloadKind::Deep && blocks_completed > EXTENDED_DEEP_DELOAD_AFTER_BLOCKS {
                2
            } else {
                1
            };
        let (volume_reduction, load_reduction) = kind.reductions();

        Ok(DeloadStrategy {
            kind,
            volume_reduction,
            load_reduction,
            duration_weeks,
        })
    }

    /// Sets per week during a deload: `max(1, round(mev * volume_reduction))`
    #[must_use]
    pub fn deload_sets(mev: u32, volume_reduction: f64) -> u32 {
        let sets = (f64::from(mev) * volume_reduction).round();
        if sets.is_finite() && sets >= 1.0 {
            sets as u32
        } else {
            1
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_urgency_boundaries() {
        assert_eq!(DeloadUrgency::from_score(2), DeloadUrgency::NotNeeded);
        assert_eq!(DeloadUrgency::from_score(3), DeloadUrgency::Consider);
        assert_eq!(DeloadUrgency::from_score(5), DeloadUrgency::Recommended);
        assert_eq!(DeloadUrgency::from_score(8), DeloadUrgency::Urgent);
    }

    #[test]
    fn test_strategy_threshold_edges() {
        let kind = |fatigue, pressure| DeloadAdvisor::strategy(fatigue, pressure, 0).unwrap().kind;

        assert_eq!(kind(DEEP_FATIGUE_LEVEL, 0.0), DeloadKind::Deep);
        assert_eq!(kind(0.0, DEEP_VOLUME_PRESSURE), DeloadKind::Deep);
        assert_eq!(kind(STANDARD_FATIGUE_LEVEL, 0.0), DeloadKind::Standard);
        assert_eq!(kind(0.0, STANDARD_VOLUME_PRESSURE), DeloadKind::Standard);
        assert_eq!(kind(0.49, 0.59), DeloadKind::Light);
    }

    #[test]
    fn test_urgency_wire_name() {
        let json = serde_json::to_string(&DeloadUrgency::NotNeeded).unwrap();
        assert_eq!(json, "\"NOT_NEEDED\"");
    }
}
