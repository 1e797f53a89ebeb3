// ABOUTME: Bundle of every configurable calculator built from one CalculatorConfig
// ABOUTME: Lets callers configure once and share the calculators read-only
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use powerhouse_core::config::CalculatorConfig;
use powerhouse_intelligence::{
    LoadAdjuster, MesocycleDesigner, SetProgression, VolumeLandmarkCalculator,
};

/// Calculators that carry configuration
///
/// The stateless ones (`RirProgression`, `RirSchedule`, `DeloadAdvisor`,
/// `PhaseDurationCalculator`) are called directly.
#[derive(Debug, Clone, Default)]
pub struct Toolkit {
    /// Volume landmarks
    pub landmarks: VolumeLandmarkCalculator,
    /// Weekly set progression
    pub progression: SetProgression,
    /// RIR-deviation load changes
    pub load_adjuster: LoadAdjuster,
    /// Mesocycle plans
    pub mesocycle: MesocycleDesigner,
}

impl Toolkit {
    /// Build every calculator from one configuration
    #[must_use]
    pub fn new(config: CalculatorConfig) -> Self {
        Self {
            landmarks: VolumeLandmarkCalculator::new(config.muscles),
            progression: SetProgression::new(config.progression),
            load_adjuster: LoadAdjuster::new(config.load_adjustment),
            mesocycle: MesocycleDesigner::new(config.mesocycle),
        }
    }
}
