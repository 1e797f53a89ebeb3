// ABOUTME: Integration tests for mesocycle RIR schedules and RIR-deviation load adjustment
// ABOUTME: Covers default fallbacks, clamping past the schedule, dead band, and caps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use powerhouse_rp::config::LoadAdjustmentConfig;
use powerhouse_rp::intelligence::rir_schedule::{LoadAdjuster, RirSchedule};

fn assert_close(actual: f64, expected: f64) {
    assert!((actual - expected).abs() < 1e-9, "expected {expected}, got {actual}");
}

#[test]
fn test_five_week_schedule() {
    common::init_test_logging();
    let rirs: Vec<f64> = (1..=5).map(|week| RirSchedule::target_rir(week, 5)).collect();
    assert_eq!(rirs, vec![4.0, 3.0, 2.0, 1.0, 0.0]);
}

#[test]
fn test_six_week_schedule_ends_at_zero_twice() {
    assert_close(RirSchedule::target_rir(5, 6), 0.0);
    assert_close(RirSchedule::target_rir(6, 6), 0.0);
}

#[test]
fn test_three_week_block_uses_four_week_schedule() {
    assert_close(RirSchedule::target_rir(1, 3), 4.0);
    assert_close(RirSchedule::target_rir(3, 3), 2.0);
}

#[test]
fn test_weeks_past_schedule_clamp_to_last_value() {
    assert_close(RirSchedule::target_rir(9, 4), 1.0);
    assert_close(RirSchedule::target_rir(100, 5), 0.0);
}

#[test]
fn test_unsupported_length_or_week_defaults_to_three() {
    assert_close(RirSchedule::target_rir(1, 2), 3.0);
    assert_close(RirSchedule::target_rir(1, 7), 3.0);
    assert_close(RirSchedule::target_rir(0, 4), 3.0);
    assert!(RirSchedule::schedule(2).is_none());
}

#[test]
fn test_dead_band_means_no_change() {
    let adjuster = LoadAdjuster::default();
    assert_close(adjuster.adjustment_pct(2.0, 2.0), 0.0);
    assert_close(adjuster.adjustment_pct(2.5, 2.0), 0.0);
    assert_close(adjuster.adjustment_pct(1.5, 2.0), 0.0);
}

#[test]
fn test_too_easy_scales_by_five() {
    let adjuster = LoadAdjuster::default();
    assert_close(adjuster.adjustment_pct(3.0, 2.0), 5.0);
    assert_close(adjuster.adjustment_pct(4.0, 2.0), 10.0);
    assert_close(adjuster.adjustment_pct(6.0, 2.0), 15.0);
    assert_close(adjuster.adjustment_pct(9.0, 0.0), 15.0);
}

#[test]
fn test_too_hard_scales_by_seven() {
    let adjuster = LoadAdjuster::default();
    assert_close(adjuster.adjustment_pct(1.0, 2.0), -7.0);
    assert_close(adjuster.adjustment_pct(0.0, 2.0), -14.0);
    assert_close(adjuster.adjustment_pct(0.0, 3.0), -15.0);
}

#[test]
fn test_non_finite_deviation_is_no_change() {
    let adjuster = LoadAdjuster::default();
    assert_close(adjuster.adjustment_pct(f64::NAN, 2.0), 0.0);
}

#[test]
fn test_custom_adjustment_config() {
    let adjuster = LoadAdjuster::new(LoadAdjustmentConfig {
        deadband_rir: 0.0,
        increase_pct_per_rir: 2.5,
        decrease_pct_per_rir: 2.5,
        max_change_pct: 5.0,
    });
    assert_close(adjuster.adjustment_pct(2.5, 2.0), 1.25);
    assert_close(adjuster.adjustment_pct(0.0, 4.0), -5.0);
}
