// ABOUTME: Integration tests for weekly RIR targets, Epley load estimates, and effort validation
// ABOUTME: Includes a property check of the load formula against its closed form
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use powerhouse_rp::errors::{CalculatorError, ErrorCode};
use powerhouse_rp::intelligence::rir_progression::{
    EffortUrgency, EffortVerdict, ProgramType, RirProgression, RirWeekPlan, WeeklyRir,
};
use proptest::prelude::*;
use proptest::test_runner::Config;

fn working(week: u32, program: ProgramType) -> RirWeekPlan {
    common::init_test_logging();
    match RirProgression::weekly_rir(week, program).unwrap() {
        WeeklyRir::Working(plan) => plan,
        WeeklyRir::Deload => panic!("week {week} of {program} should be a working week"),
    }
}

#[test]
fn test_hypertrophy_week_one() {
    let plan = working(1, ProgramType::Hypertrophy);
    assert_eq!(plan.week, 1);
    assert!((plan.target_rir - 3.0).abs() < f64::EPSILON);
    assert_eq!(plan.load_pct, "65-70%");
}

#[test]
fn test_strength_and_volume_tables() {
    assert_eq!(working(4, ProgramType::Strength).load_pct, "90-95%");
    assert!((working(4, ProgramType::Strength).target_rir).abs() < f64::EPSILON);
    assert_eq!(working(1, ProgramType::Volume).load_pct, "60-65%");
    assert!((working(1, ProgramType::Volume).target_rir - 4.0).abs() < f64::EPSILON);
}

#[test]
fn test_target_rir_decreases_across_working_weeks() {
    for program in ProgramType::ALL {
        let rirs: Vec<f64> = (1..=4).map(|week| working(week, program).target_rir).collect();
        assert!(rirs.windows(2).all(|pair| pair[0] > pair[1]), "{program}: {rirs:?}");
    }
}

#[test]
fn test_week_five_is_deload_for_every_program() {
    for program in ProgramType::ALL {
        assert_eq!(RirProgression::weekly_rir(5, program).unwrap(), WeeklyRir::Deload);
    }
}

#[test]
fn test_weeks_outside_table_are_invalid() {
    for week in [0, 6, 52] {
        let err = RirProgression::weekly_rir(week, ProgramType::Strength).unwrap_err();
        assert_eq!(
            err,
            CalculatorError::InvalidWeek {
                week,
                program_type: "strength".to_owned()
            }
        );
        assert_eq!(err.code(), ErrorCode::InvalidWeek);
    }
}

#[test]
fn test_program_type_parsing() {
    assert_eq!("volume".parse::<ProgramType>().unwrap(), ProgramType::Volume);
    assert_eq!(ProgramType::default(), ProgramType::Hypertrophy);

    let err = "powerlifting".parse::<ProgramType>().unwrap_err();
    assert_eq!(err.code(), ErrorCode::UnknownProgramType);
    assert!(err.to_string().contains("powerlifting"));
}

#[test]
fn test_calc_load_reference_value() {
    // 8 reps at RIR 2: 10 reps to failure, 100 / (1 + 1/3) = 75%
    assert!((RirProgression::calc_load(200.0, 2.0, 8).unwrap() - 150.0).abs() < f64::EPSILON);
}

#[test]
fn test_calc_load_rejects_invalid_input() {
    for (one_rm, rir, reps) in [
        (0.0, 2.0, 8),
        (-100.0, 2.0, 8),
        (f64::NAN, 2.0, 8),
        (100.0, -1.0, 8),
        (100.0, f64::INFINITY, 8),
        (100.0, 2.0, 0),
    ] {
        let err = RirProgression::calc_load(one_rm, rir, reps).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidInput, "{one_rm} {rir} {reps}");
    }
}

#[test]
fn test_intensity_for_rir() {
    assert_eq!(RirProgression::intensity_for_rir(0.0), "95-100%");
    assert_eq!(RirProgression::intensity_for_rir(2.5), "77-82%");
    assert_eq!(RirProgression::intensity_for_rir(5.0), "65-70%");
    assert_eq!(RirProgression::intensity_for_rir(2.2), "70-75%");
    assert_eq!(RirProgression::intensity_for_rir(9.0), "70-75%");
}

#[test]
fn test_validate_effort() {
    let on_target = RirProgression::validate_effort(2.4, 2.0, 0.5);
    assert!(on_target.within_tolerance);
    assert_eq!(on_target.verdict, EffortVerdict::OnTarget);
    assert_eq!(on_target.urgency, EffortUrgency::Normal);

    let too_easy = RirProgression::validate_effort(4.0, 2.0, 0.5);
    assert_eq!(too_easy.verdict, EffortVerdict::TooEasy);
    assert_eq!(too_easy.urgency, EffortUrgency::Medium);
    assert!((too_easy.deviation - 2.0).abs() < f64::EPSILON);

    let too_hard = RirProgression::validate_effort(0.0, 3.0, 0.5);
    assert_eq!(too_hard.verdict, EffortVerdict::TooHard);
    assert_eq!(too_hard.urgency, EffortUrgency::High);
}

proptest! {
    #![proptest_config(Config::with_cases(256))]
    #[test]
    fn calc_load_matches_closed_form(
        one_rm in 1.0_f64..500.0,
        target_rir in 0.0_f64..6.0,
        reps in 1_u32..30,
    ) {
        let reps_at_failure = f64::from(reps) + target_rir;
        let expected = (one_rm * (100.0 / (1.0 + reps_at_failure / 30.0)) / 100.0).round();

        let load = RirProgression::calc_load(one_rm, target_rir, reps).unwrap();
        prop_assert!((load - expected).abs() < f64::EPSILON);
        prop_assert!(load <= one_rm.round());
        prop_assert_eq!(load, RirProgression::calc_load(one_rm, target_rir, reps).unwrap());
    }
}
