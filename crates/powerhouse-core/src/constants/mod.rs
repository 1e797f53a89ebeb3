// ABOUTME: Constants module with calculator-separated organization
// ABOUTME: Pure training-science data constants used as calculator defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Defaults for every calculator, grouped by the calculator that consumes them.
//! Calculators never read these directly; they reach them through the
//! `Default` implementations of the configuration values in [`crate::config`].

/// RIR progression tables, mesocycle RIR schedules and intensity mapping
pub mod rir;

/// Volume landmark defaults (Renaissance Periodization baselines)
pub mod volume_landmarks {
    /// Baseline minimum volume (sets per week) per muscle group
    pub const BASELINE_SETS: &[(&str, f64)] = &[
        ("abs", 4.0),
        ("back", 10.0),
        ("biceps", 6.0),
        ("calves", 8.0),
        ("chest", 8.0),
        ("forearms", 4.0),
        ("glutes", 4.0),
        ("hamstrings", 6.0),
        ("quads", 8.0),
        ("shoulders", 8.0),
        ("traps", 4.0),
        ("triceps", 6.0),
    ];

    /// Experience-level multipliers applied to the baseline
    pub const EXPERIENCE_MULTIPLIERS: &[(&str, f64)] = &[
        ("beginner", 0.75),
        ("intermediate", 1.0),
        ("advanced", 1.25),
    ];

    /// Muscle-specific MEV-to-MRV multipliers; muscles not listed use the default
    pub const MRV_MULTIPLIERS: &[(&str, f64)] = &[
        ("abs", 2.5),
        ("back", 2.3),
        ("biceps", 2.5),
        ("calves", 2.4),
        ("glutes", 2.5),
        ("shoulders", 2.5),
        ("triceps", 2.3),
    ];

    /// Multiplier used when a level is not configured
    pub const DEFAULT_LEVEL_MULTIPLIER: f64 = 1.0;

    /// MRV multiplier used when a muscle has no specific value
    pub const DEFAULT_MRV_MULTIPLIER: f64 = 2.2;

    /// MEV = ceil(MV x this)
    pub const MEV_FACTOR: f64 = 1.25;

    /// MAV lower bound = ceil(MEV x this)
    pub const MAV_LOWER_FACTOR: f64 = 1.2;

    /// MAV upper bound = floor(MRV x this)
    pub const MAV_UPPER_FACTOR: f64 = 0.95;

    /// Recovery sessions never drop below ceil(MEV x this)
    pub const RECOVERY_FLOOR_FACTOR: f64 = 0.5;
}

/// Weekly set-progression thresholds (soreness + performance feedback)
pub mod progression {
    /// Deload when soreness + performance reaches this sum
    pub const DELOAD_SUM_THRESHOLD: f64 = 5.0;

    /// Deload when performance alone reaches this score
    pub const DELOAD_PERFORMANCE_THRESHOLD: f64 = 4.0;

    /// Under-stimulated when soreness + performance is at most this sum
    pub const UNDER_STIMULATED_SUM_THRESHOLD: f64 = 1.0;

    /// Hold volume when performance reaches this score
    pub const MAINTAIN_PERFORMANCE_THRESHOLD: f64 = 3.0;

    /// Performance score counted as a crash entry
    pub const CRASH_THRESHOLD: f64 = 3.0;

    /// Consecutive crash entries that force a deload
    pub const CRASH_WINDOW: usize = 3;

    /// Set increments chosen between when under-stimulated
    pub const UNDER_STIMULATED_SET_CHOICES: [u32; 2] = [2, 3];
}

/// Load adjustment from RIR deviation
pub mod load_adjustment {
    /// Deviations at or inside this band leave the load unchanged
    pub const DEADBAND_RIR: f64 = 0.5;

    /// Percent load increase per RIR above target (session was too easy)
    pub const INCREASE_PCT_PER_RIR: f64 = 5.0;

    /// Percent load decrease per RIR below target (session was too hard)
    pub const DECREASE_PCT_PER_RIR: f64 = 7.0;

    /// Maximum load change in either direction (percent)
    pub const MAX_CHANGE_PCT: f64 = 15.0;

    /// Reps-to-failure divisor of the Epley estimate
    pub const EPLEY_DIVISOR: f64 = 30.0;
}

/// Mesocycle planning bounds
pub mod mesocycle {
    /// Shortest plan accepted by the designer
    pub const MIN_WEEKS: u32 = 1;

    /// Longest plan accepted by the designer
    pub const MAX_WEEKS: u32 = 12;

    /// Target RIR values are rounded to this many decimal places
    pub const RIR_DECIMALS: i32 = 1;
}

/// Deload trigger scoring and strategy parameters
pub mod deload {
    /// Volume at this fraction of MRV counts as approaching MRV
    pub const APPROACHING_MRV_FRACTION: f64 = 0.95;
    /// Fatigue score (1-10) that triggers
    pub const HIGH_FATIGUE_SCORE: f64 = 8.0;
    /// Performance drop (percent) counted as significant
    pub const SIGNIFICANT_DROP_PCT: f64 = 10.0;
    /// Performance drop (percent) counted as major
    pub const MAJOR_DROP_PCT: f64 = 15.0;
    /// Weeks without a deload counted as extended
    pub const EXTENDED_WEEKS: u32 = 6;
    /// Weeks without a deload counted as overdue
    pub const OVERDUE_WEEKS: u32 = 8;
    /// Sleep quality (1-10) at or below this triggers
    pub const POOR_SLEEP: f64 = 3.0;
    /// Motivation (1-10) at or below this triggers
    pub const LOW_MOTIVATION: f64 = 3.0;
    /// Joint pain (1-10) at or above this triggers
    pub const HIGH_JOINT_PAIN: f64 = 7.0;

    /// Urgency points per trigger
    pub mod points {
        /// Volume approaching MRV
        pub const APPROACHING_MRV: u32 = 3;
        /// Volume at or above MRV
        pub const MRV_BREACHED: u32 = 5;
        /// High fatigue
        pub const HIGH_FATIGUE: u32 = 4;
        /// Significant performance drop
        pub const SIGNIFICANT_DROP: u32 = 4;
        /// Major performance drop
        pub const MAJOR_DROP: u32 = 6;
        /// Extended period without deload
        pub const EXTENDED: u32 = 2;
        /// Overdue deload
        pub const OVERDUE: u32 = 4;
        /// Poor sleep
        pub const POOR_SLEEP: u32 = 2;
        /// Low motivation
        pub const LOW_MOTIVATION: u32 = 2;
        /// Joint pain
        pub const JOINT_PAIN: u32 = 3;
    }

    /// Urgency score at which a deload is due now
    pub const DELOAD_SCORE: u32 = 5;
    /// Urgency score at which a deload should be considered
    pub const CONSIDER_SCORE: u32 = 3;
    /// Urgency score reported as urgent
    pub const URGENT_SCORE: u32 = 8;

    /// Completed blocks after which a deep deload lasts two weeks
    pub const EXTENDED_DEEP_DELOAD_AFTER_BLOCKS: u32 = 20;

    /// Normalised fatigue (0-1) that calls for a deep deload
    pub const DEEP_FATIGUE_LEVEL: f64 = 0.7;
    /// Normalised volume pressure (0-1) that calls for a deep deload
    pub const DEEP_VOLUME_PRESSURE: f64 = 0.8;
    /// Normalised fatigue (0-1) that calls for a standard deload
    pub const STANDARD_FATIGUE_LEVEL: f64 = 0.5;
    /// Normalised volume pressure (0-1) that calls for a standard deload
    pub const STANDARD_VOLUME_PRESSURE: f64 = 0.6;

    /// (fraction of MEV, fraction of load) for a light deload
    pub const LIGHT_REDUCTIONS: (f64, f64) = (0.7, 0.8);
    /// (fraction of MEV, fraction of load) for a standard deload
    pub const STANDARD_REDUCTIONS: (f64, f64) = (0.5, 0.7);
    /// (fraction of MEV, fraction of load) for a deep deload
    pub const DEEP_REDUCTIONS: (f64, f64) = (0.4, 0.6);
}

/// Phase duration bases and modifiers
pub mod phase_duration {
    /// (base, min, max) weeks for a foundation phase
    pub const FOUNDATION: (f64, u32, u32) = (4.0, 3, 6);
    /// (base, min, max) weeks for a hypertrophy phase
    pub const HYPERTROPHY: (f64, u32, u32) = (6.0, 4, 8);
    /// (base, min, max) weeks for a strength phase
    pub const STRENGTH: (f64, u32, u32) = (5.0, 4, 6);
    /// (base, min, max) weeks for a peaking phase
    pub const PEAK: (f64, u32, u32) = (2.0, 1, 3);
}
