// ABOUTME: Integration tests for weekly set progression decisions
// ABOUTME: Covers deload priority, seeded two-or-three set choice, and performance crash detection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use powerhouse_rp::config::ProgressionConfig;
use powerhouse_rp::intelligence::set_progression::{
    ProgressionAction, ProgressionDecision, SetProgression,
};

fn engine() -> SetProgression {
    common::init_test_logging();
    SetProgression::default()
}

fn evaluate(soreness: f64, performance: f64) -> ProgressionDecision {
    engine().evaluate_weekly_progression(soreness, performance, &mut common::rng(42))
}

#[test]
fn test_sum_of_five_triggers_deload() {
    let decision = evaluate(3.0, 2.0);
    assert_eq!(decision.action, ProgressionAction::InitiateDeload);
    assert_eq!(decision.rationale, "Exceeding recovery capacity");
}

#[test]
fn test_performance_four_triggers_deload_regardless_of_sum() {
    assert_eq!(evaluate(0.0, 4.0).action, ProgressionAction::InitiateDeload);
}

#[test]
fn test_performance_three_maintains() {
    let decision = evaluate(0.0, 3.0);
    assert_eq!(decision.action, ProgressionAction::MaintainSets);
    assert_eq!(decision.rationale, "Approaching MRV");
    assert_eq!(decision.sets_to_add, None);
}

#[test]
fn test_low_feedback_adds_two_or_three_sets() {
    for seed in 0..32 {
        let decision =
            engine().evaluate_weekly_progression(0.0, 1.0, &mut common::rng(seed));
        assert_eq!(decision.action, ProgressionAction::AddTwoToThreeSets);
        assert_eq!(decision.rationale, "Under-stimulated");
        assert!(matches!(decision.sets_to_add, Some(2 | 3)), "{decision:?}");
    }
}

#[test]
fn test_two_or_three_choice_covers_both_values() {
    let picks: Vec<u32> = (0..64)
        .filter_map(|seed| {
            engine()
                .evaluate_weekly_progression(0.0, 0.0, &mut common::rng(seed))
                .sets_to_add
        })
        .collect();
    assert!(picks.contains(&2));
    assert!(picks.contains(&3));
}

#[test]
fn test_same_seed_same_decision() {
    let progression = engine();
    let first = progression.evaluate_weekly_progression(1.0, 0.0, &mut common::rng(9));
    let second = progression.evaluate_weekly_progression(1.0, 0.0, &mut common::rng(9));
    assert_eq!(first, second);
}

#[test]
fn test_standard_progression_adds_one_set() {
    let decision = evaluate(1.0, 1.0);
    assert_eq!(decision.action, ProgressionAction::AddOneSet);
    assert_eq!(decision.rationale, "Standard progression");
    let scores = decision.scores.unwrap();
    assert!((scores.soreness - 1.0).abs() < f64::EPSILON);
    assert!((scores.performance - 1.0).abs() < f64::EPSILON);
}

#[test]
fn test_out_of_range_scores_are_accepted() {
    assert_eq!(evaluate(-5.0, -5.0).action, ProgressionAction::AddTwoToThreeSets);
    assert_eq!(evaluate(100.0, 0.0).action, ProgressionAction::InitiateDeload);
    assert_eq!(evaluate(f64::NAN, 0.0).action, ProgressionAction::AddOneSet);
}

#[test]
fn test_detect_performance_crash() {
    let progression = engine();
    assert!(progression.detect_performance_crash(&[3.0, 4.0, 3.0]));
    assert!(!progression.detect_performance_crash(&[1.0, 2.0, 3.0]));
    assert!(!progression.detect_performance_crash(&[4.0, 4.0]));
    assert!(!progression.detect_performance_crash(&[]));
    assert!(progression.detect_performance_crash(&[0.0, 1.0, 3.0, 3.0, 3.0]));
}

#[test]
fn test_crash_threshold_and_window_come_from_config() {
    let progression = SetProgression::new(ProgressionConfig {
        crash_threshold: 2.0,
        crash_window: 2,
        ..ProgressionConfig::default()
    });
    assert!(progression.detect_performance_crash(&[2.0, 2.0]));
    assert!(!progression.detect_performance_crash(&[2.0, 1.0]));
}

#[test]
fn test_recommendation_crash_overrides_standard_rule() {
    let decision = engine().get_recommendation(0.0, 3.0, &[3.0, 4.0], &mut common::rng(1));

    assert_eq!(decision.action, ProgressionAction::InitiateDeload);
    assert_eq!(decision.rationale, "3-day performance crash detected");
    assert_eq!(decision.crash_detected, Some(true));
}

#[test]
fn test_recommendation_without_crash_delegates() {
    let progression = engine();
    let with_history = progression.get_recommendation(0.0, 3.0, &[1.0, 4.0], &mut common::rng(1));
    let direct = progression.evaluate_weekly_progression(0.0, 3.0, &mut common::rng(1));

    assert_eq!(with_history, direct);
    assert_eq!(with_history.crash_detected, None);
}

#[test]
fn test_recommendation_does_not_mutate_history() {
    let history = vec![3.0, 3.0];
    let first = engine().get_recommendation(0.0, 3.0, &history, &mut common::rng(1));
    let second = engine().get_recommendation(0.0, 3.0, &history, &mut common::rng(1));

    assert_eq!(history, vec![3.0, 3.0]);
    assert_eq!(first, second);
}

#[test]
fn test_decision_json_shape() {
    let decision = engine().get_recommendation(0.0, 3.0, &[3.0, 3.0], &mut common::rng(1));
    let json = serde_json::to_value(&decision).unwrap();

    assert_eq!(json["action"], "initiate_deload");
    assert_eq!(json["crash_detected"], true);
    assert!(json.get("sets_to_add").is_none());
}
