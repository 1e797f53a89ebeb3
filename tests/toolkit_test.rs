// ABOUTME: Tests for the calculator bundle built from one configuration
// ABOUTME: Checks configuration wiring, idempotence, and shared use across threads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::thread;

use powerhouse_rp::config::{CalculatorConfig, ProgressionConfig};
use powerhouse_rp::intelligence::mesocycle_designer::MesocycleConfig;
use powerhouse_rp::intelligence::set_progression::ProgressionAction;
use powerhouse_rp::toolkit::Toolkit;

#[test]
fn test_configuration_reaches_each_calculator() {
    common::init_test_logging();
    let toolkit = Toolkit::new(CalculatorConfig {
        muscles: common::fixture_muscle_config(),
        progression: ProgressionConfig {
            crash_window: 2,
            ..ProgressionConfig::default()
        },
        ..CalculatorConfig::default()
    });

    assert_eq!(toolkit.landmarks.mrv("chest", "intermediate").unwrap(), 30);
    assert!(toolkit.progression.detect_performance_crash(&[3.0, 3.0]));
    assert_eq!(toolkit.progression.config().crash_window, 2);
}

#[test]
fn test_repeated_calls_are_identical() {
    let toolkit = Toolkit::default();
    let config = MesocycleConfig {
        weeks: 6,
        start_volume: 10,
        end_volume: 20,
        rir_start: 3.0,
        rir_end: 0.0,
    };

    assert_eq!(
        toolkit.mesocycle.design_mesocycle(&config).unwrap(),
        toolkit.mesocycle.design_mesocycle(&config).unwrap()
    );
    assert_eq!(
        toolkit.landmarks.landmarks("back", "advanced").unwrap(),
        toolkit.landmarks.landmarks("back", "advanced").unwrap()
    );
    let adjust = toolkit.load_adjuster.adjustment_pct(4.0, 2.0);
    assert!((adjust - toolkit.load_adjuster.adjustment_pct(4.0, 2.0)).abs() < f64::EPSILON);
}

#[test]
fn test_shared_across_threads_without_coordination() {
    let toolkit = Toolkit::default();
    let expected = toolkit.landmarks.all_landmarks("beginner").unwrap();

    thread::scope(|scope| {
        let handles: Vec<_> = (0..4_u64)
            .map(|seed| {
                let toolkit = &toolkit;
                scope.spawn(move || {
                    let decision = toolkit.progression.get_recommendation(
                        2.0,
                        1.0,
                        &[],
                        &mut common::rng(seed),
                    );
                    (toolkit.landmarks.all_landmarks("beginner").unwrap(), decision.action)
                })
            })
            .collect();

        for handle in handles {
            let (landmarks, action) = handle.join().unwrap();
            assert_eq!(landmarks, expected);
            assert_eq!(action, ProgressionAction::AddOneSet);
        }
    });
}
