// ABOUTME: Reps-in-reserve tables for weekly progressions and mesocycle schedules
// ABOUTME: Static data consumed by the RIR progression and RIR schedule calculators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// One working week of a named progression: (week, target RIR, load range)
pub type WeekEntry = (u32, f64, &'static str);

/// Hypertrophy progression, weeks 1-4
pub const HYPERTROPHY_WEEKS: [WeekEntry; 4] = [
    (1, 3.0, "65-70%"),
    (2, 2.0, "70-75%"),
    (3, 1.0, "75-80%"),
    (4, 0.0, "80-85%"),
];

/// Strength progression, weeks 1-4
pub const STRENGTH_WEEKS: [WeekEntry; 4] = [
    (1, 3.0, "75-80%"),
    (2, 2.0, "80-85%"),
    (3, 1.0, "85-90%"),
    (4, 0.0, "90-95%"),
];

/// Volume progression, weeks 1-4
pub const VOLUME_WEEKS: [WeekEntry; 4] = [
    (1, 4.0, "60-65%"),
    (2, 3.0, "65-70%"),
    (3, 2.0, "70-75%"),
    (4, 1.0, "75-80%"),
];

/// Week that closes every progression with a deload
pub const DELOAD_WEEK: u32 = 5;

/// Mesocycle RIR schedule for four working weeks
pub const SCHEDULE_4_WEEKS: &[f64] = &[4.0, 3.0, 2.0, 1.0];

/// Mesocycle RIR schedule for five working weeks
pub const SCHEDULE_5_WEEKS: &[f64] = &[4.0, 3.0, 2.0, 1.0, 0.0];

/// Mesocycle RIR schedule for six working weeks
pub const SCHEDULE_6_WEEKS: &[f64] = &[4.0, 3.0, 2.0, 1.0, 0.0, 0.0];

/// Shortest mesocycle length with a schedule
pub const MIN_SCHEDULED_LENGTH: u32 = 3;

/// Longest mesocycle length with a schedule
pub const MAX_SCHEDULED_LENGTH: u32 = 6;

/// Target RIR returned when no schedule applies
pub const DEFAULT_TARGET_RIR: f64 = 3.0;

/// RIR to %1RM range, in half-RIR steps
pub const INTENSITY_BY_RIR: &[(f64, &str)] = &[
    (0.0, "95-100%"),
    (0.5, "92-97%"),
    (1.0, "87-92%"),
    (1.5, "85-90%"),
    (2.0, "80-85%"),
    (2.5, "77-82%"),
    (3.0, "75-80%"),
    (3.5, "72-77%"),
    (4.0, "70-75%"),
    (4.5, "67-72%"),
    (5.0, "65-70%"),
];

/// Intensity range reported for RIR values outside the table
pub const DEFAULT_INTENSITY: &str = "70-75%";

/// Effort deviations larger than this are urgent
pub const URGENT_EFFORT_DIFFERENCE: f64 = 2.0;
