// ABOUTME: Training-science calculators built on injected powerhouse-core configuration
// ABOUTME: Volume landmarks, set progression, RIR progression and schedules, mesocycles, deloads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Powerhouse Intelligence
//!
//! Stateless, synchronous calculators. Each one owns a read-only copy of its
//! configuration and can be shared freely across threads.
//!
//! | Module | Answers |
//! |--------|---------|
//! | [`volume_landmarks`] | MV / MEV / MAV / MRV per muscle and experience level |
//! | [`set_progression`] | Next week's set adjustment from soreness and performance |
//! | [`rir_progression`] | Weekly RIR targets per program type, Epley load estimates |
//! | [`rir_schedule`] | Mesocycle RIR schedules and RIR-deviation load changes |
//! | [`mesocycle_designer`] | Linear week-by-week volume and RIR plans |
//! | [`deload`] | Deload trigger scoring and deload strategy |
//! | [`phase_duration`] | Training phase length from age, goal, and recovery |

/// Deload trigger assessment and deload strategy selection
pub mod deload;
/// Linear mesocycle plan generation
pub mod mesocycle_designer;
/// Training phase duration estimates
pub mod phase_duration;
/// Weekly RIR targets and load estimation
pub mod rir_progression;
/// Mesocycle RIR schedules and load adjustment
pub mod rir_schedule;
/// Soreness and performance driven set progression
pub mod set_progression;
/// Volume landmark computation
pub mod volume_landmarks;

pub use deload::{DeloadAdvisor, DeloadAssessment, DeloadKind, DeloadMetrics, DeloadStrategy};
pub use mesocycle_designer::{MesocycleConfig, MesocycleDesigner, MesocycleWeekPlan};
pub use phase_duration::{
    PhaseDurationCalculator, RecoveryRating, TrainingAge, TrainingGoal, TrainingPhase,
};
pub use rir_progression::{EffortValidation, ProgramType, RirProgression, RirWeekPlan, WeeklyRir};
pub use rir_schedule::{LoadAdjuster, RirSchedule};
pub use set_progression::{ProgressionAction, ProgressionDecision, SetProgression};
pub use volume_landmarks::{MavRange, VolumeLandmarkCalculator, VolumeLandmarks, VolumeStatus};
