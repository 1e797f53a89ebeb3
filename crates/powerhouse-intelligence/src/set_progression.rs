// ABOUTME: Weekly set progression decisions from soreness and performance feedback
// ABOUTME: Detects multi-day performance crashes and chooses deload, maintain, or add-set actions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use powerhouse_core::config::ProgressionConfig;
use powerhouse_core::constants::progression::UNDER_STIMULATED_SET_CHOICES;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

const RATIONALE_DELOAD: &str = "Exceeding recovery capacity";
const RATIONALE_UNDER_STIMULATED: &str = "Under-stimulated";
const RATIONALE_APPROACHING_MRV: &str = "Approaching MRV";
const RATIONALE_STANDARD: &str = "Standard progression";
const RATIONALE_CRASH: &str = "3-day performance crash detected";

/// Volume adjustment for next week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProgressionAction {
    /// Recovery capacity exceeded, deload now
    #[serde(rename = "initiate_deload")]
    InitiateDeload,
    /// Under-stimulated, add two or three sets
    #[serde(rename = "add_2_3_sets")]
    AddTwoToThreeSets,
    /// Close to MRV, hold set count
    #[serde(rename = "maintain_sets")]
    MaintainSets,
    /// Normal week, add one set
    #[serde(rename = "add_1_set")]
    AddOneSet,
}

impl ProgressionAction {
    /// Stable wire name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InitiateDeload => "initiate_deload",
            Self::AddTwoToThreeSets => "add_2_3_sets",
            Self::MaintainSets => "maintain_sets",
            Self::AddOneSet => "add_1_set",
        }
    }
}

impl fmt::Display for ProgressionAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Feedback scores a decision was made from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeedbackScores {
    /// Soreness score (typically 0-4)
    pub soreness: f64,
    /// Performance score (typically 0-4, higher is worse)
    pub performance: f64,
}

/// Outcome of a progression evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressionDecision {
    /// What to do with next week's volume
    pub action: ProgressionAction,
    /// Human-readable reason
    pub rationale: String,
    /// Inputs the decision was made from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scores: Option<FeedbackScores>,
    /// Sets to add, present only for [`ProgressionAction::AddTwoToThreeSets`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sets_to_add: Option<u32>,
    /// Present and `true` when a performance crash forced the deload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crash_detected: Option<bool>,
}

impl ProgressionDecision {
    fn new(action: ProgressionAction, rationale: &str, scores: FeedbackScores) -> Self {
        Self {
            action,
            rationale: rationale.to_owned(),
            scores: Some(scores),
            sets_to_add: None,
            crash_detected: None,
        }
    }
}

/// Deterministic random source for the two-or-three set choice
#[must_use]
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Set progression rules over an injected [`ProgressionConfig`]
///
/// The under-stimulated branch adds either two or three sets. The choice is
/// an even coin flip drawn from the caller's random source and carries no
/// training signal; pass a seeded generator for reproducible output.
#[derive(Debug, Clone, Default)]
pub struct SetProgression {
    config: ProgressionConfig,
}

impl SetProgression {
    /// Create a progression engine with the given thresholds
    #[must_use]
    pub const fn new(config: ProgressionConfig) -> Self {
        Self { config }
    }

    /// Thresholds this engine uses
    #[must_use]
    pub const fn config(&self) -> &ProgressionConfig {
        &self.config
    }

    /// Decide next week's adjustment from one week of feedback
    ///
    /// Deload rules win over every other rule. Any real input is accepted;
    /// only the threshold comparisons matter.
    pub fn evaluate_weekly_progression<R>(
        &self,
        soreness: f64,
        performance: f64,
        rng: &mut R,
    ) -> ProgressionDecision
    where
        R: Rng + ?Sized,
    {
        let scores = FeedbackScores {
            soreness,
            performance,
        };
        let sum = soreness + performance;

        let decision = if sum >= self.config.deload_sum_threshold
            || performance >= self.config.deload_performance_threshold
        {
            ProgressionDecision::new(ProgressionAction::InitiateDeload, RATIONALE_DELOAD, scores)
        } else if sum <= self.config.under_stimulated_sum_threshold {
            let [fewer, more] = UNDER_STIMULATED_SET_CHOICES;
            let sets = if rng.gen_bool(0.5) { fewer } else { more };
            ProgressionDecision {
                sets_to_add: Some(sets),
                ..ProgressionDecision::new(
                    ProgressionAction::AddTwoToThreeSets,
                    RATIONALE_UNDER_STIMULATED,
                    scores,
                )
            }
        } else if performance >= self.config.maintain_performance_threshold {
            ProgressionDecision::new(
                ProgressionAction::MaintainSets,
                RATIONALE_APPROACHING_MRV,
                scores,
            )
        } else {
            ProgressionDecision::new(ProgressionAction::AddOneSet, RATIONALE_STANDARD, scores)
        };

        debug!(soreness, performance, action = %decision.action, "Evaluated weekly progression");
        decision
    }

    /// Whether the last `crash_window` entries all reach the crash threshold
    ///
    /// Histories shorter than the window never count as a crash.
    #[must_use]
    pub fn detect_performance_crash(&self, history: &[f64]) -> bool {
        let window = self.config.crash_window;
        if window == 0 {
            return false;
        }
        let Some(start) = history.len().checked_sub(window) else {
            return false;
        };
        history[start..]
            .iter()
            .all(|&score| score >= self.config.crash_threshold)
    }

    /// Recommendation that also accounts for recent performance history
    ///
    /// `performance` is treated as the newest history entry. The caller's
    /// history is left untouched.
    pub fn get_recommendation<R>(
        &self,
        soreness: f64,
        performance: f64,
        history: &[f64],
        rng: &mut R,
    ) -> ProgressionDecision
    where
        R: Rng + ?Sized,
    {
        let mut recent = Vec::with_capacity(history.len() + 1);
        recent.extend_from_slice(history);
        recent.push(performance);

        if self.detect_performance_crash(&recent) {
            debug!(
                window = self.config.crash_window,
                threshold = self.config.crash_threshold,
                "Performance crash forces deload"
            );
            return ProgressionDecision {
                crash_detected: Some(true),
                ..ProgressionDecision::new(
                    ProgressionAction::InitiateDeload,
                    RATIONALE_CRASH,
                    FeedbackScores {
                        soreness,
                        performance,
                    },
                )
            };
        }

        self.evaluate_weekly_progression(soreness, performance, rng)
    }
}
