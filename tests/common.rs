// ABOUTME: Shared test utilities for the calculator integration tests
// ABOUTME: Provides quiet logging setup, seeded random sources, and configuration fixtures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::wildcard_in_or_patterns
)]
//! Shared test utilities for `powerhouse_rp`

use std::collections::BTreeMap;
use std::env;
use std::sync::Once;

use powerhouse_rp::config::MuscleConfig;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            Ok("WARN" | "ERROR") | _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Deterministic random source
pub fn rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Small muscle table with round numbers
///
/// `quads` has no MRV multiplier so it uses the default.
pub fn fixture_muscle_config() -> MuscleConfig {
    MuscleConfig {
        baseline: BTreeMap::from([("chest".to_owned(), 8.0), ("quads".to_owned(), 10.0)]),
        level_multipliers: BTreeMap::from([
            ("beginner".to_owned(), 0.5),
            ("advanced".to_owned(), 2.0),
        ]),
        mrv_multipliers: BTreeMap::from([("chest".to_owned(), 3.0)]),
        default_level_multiplier: 1.0,
        default_mrv_multiplier: 2.0,
    }
}
