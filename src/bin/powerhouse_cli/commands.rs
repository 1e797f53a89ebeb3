// ABOUTME: Subcommand implementations for the Powerhouse CLI
// ABOUTME: Each command calls one calculator and prints its plain result as pretty JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use clap::Args;
use powerhouse_rp::intelligence::deload::{DeloadAdvisor, DeloadMetrics};
use powerhouse_rp::intelligence::mesocycle_designer::MesocycleConfig;
use powerhouse_rp::intelligence::phase_duration::{
    PhaseDurationCalculator, RecoveryRating, TrainingAge, TrainingGoal, TrainingPhase,
};
use powerhouse_rp::intelligence::rir_progression::{ProgramType, RirProgression};
use powerhouse_rp::intelligence::rir_schedule::RirSchedule;
use powerhouse_rp::intelligence::set_progression::seeded_rng;
use powerhouse_rp::toolkit::Toolkit;
use rand::thread_rng;
use serde::Serialize;
use serde_json::json;

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Arguments for the `mesocycle` command
#[derive(Args)]
pub struct MesocycleArgs {
    /// Number of weeks
    #[arg(long)]
    weeks: u32,

    /// Weekly sets in week one
    #[arg(long)]
    start_volume: u32,

    /// Weekly sets in the final week
    #[arg(long)]
    end_volume: u32,

    /// Target RIR in week one
    #[arg(long, default_value_t = 4.0)]
    rir_start: f64,

    /// Target RIR in the final week
    #[arg(long, default_value_t = 0.0)]
    rir_end: f64,
}

/// Arguments for the `deload-check` command
#[derive(Args)]
pub struct DeloadArgs {
    /// Current weekly sets
    #[arg(long, default_value_t = 0)]
    volume: u32,

    /// MRV for the same scope (0 disables volume triggers)
    #[arg(long, default_value_t = 0)]
    mrv: u32,

    /// Fatigue rating, 1-10
    #[arg(long, default_value_t = 0.0)]
    fatigue: f64,

    /// Performance drop from baseline, percent
    #[arg(long, default_value_t = 0.0)]
    performance_drop: f64,

    /// Weeks since the last deload
    #[arg(long, default_value_t = 0)]
    weeks_since_deload: u32,

    /// Sleep quality rating, 1-10
    #[arg(long, default_value_t = 5.0)]
    sleep: f64,

    /// Motivation rating, 1-10
    #[arg(long, default_value_t = 5.0)]
    motivation: f64,

    /// Joint pain rating, 1-10
    #[arg(long, default_value_t = 0.0)]
    joint_pain: f64,

    /// Normalised fatigue (0-1); with --volume-pressure also picks a strategy
    #[arg(long, requires = "volume_pressure")]
    fatigue_level: Option<f64>,

    /// Normalised volume pressure (0-1)
    #[arg(long, requires = "fatigue_level")]
    volume_pressure: Option<f64>,

    /// Training blocks completed so far
    #[arg(long, default_value_t = 0)]
    blocks_completed: u32,

    /// MEV used to size the deload
    #[arg(long)]
    mev: Option<u32>,
}

pub fn landmarks(
    toolkit: &Toolkit,
    muscle: &str,
    level: &str,
    sets: Option<u32>,
    illness: bool,
) -> Result<()> {
    let calculator = &toolkit.landmarks;
    let landmarks = calculator.landmarks(muscle, level)?;
    let status = sets.map(|sets| landmarks.status(sets));
    let recovery_sets = calculator.recovery_volume(muscle, level, illness)?;

    print_json(&json!({
        "muscle": muscle,
        "level": level,
        "multiplier": calculator.multiplier(level),
        "landmarks": landmarks,
        "status": status,
        "recovery_sets": recovery_sets,
    }))
}

pub fn landmarks_all(toolkit: &Toolkit, level: &str) -> Result<()> {
    print_json(&toolkit.landmarks.all_landmarks(level)?)
}

pub fn progression(
    toolkit: &Toolkit,
    soreness: f64,
    performance: f64,
    history: &[f64],
    seed: Option<u64>,
) -> Result<()> {
    let engine = &toolkit.progression;
    let decision = match seed {
        Some(seed) => {
            engine.get_recommendation(soreness, performance, history, &mut seeded_rng(seed))
        }
        None => engine.get_recommendation(soreness, performance, history, &mut thread_rng()),
    };
    print_json(&decision)
}

pub fn weekly_rir(week: u32, program_type: &str) -> Result<()> {
    let program: ProgramType = program_type.parse()?;
    let plan = RirProgression::weekly_rir(week, program)?;
    print_json(&json!({ "program_type": program, "plan": plan }))
}

pub fn load(one_rm: f64, target_rir: f64, reps: u32) -> Result<()> {
    let load = RirProgression::calc_load(one_rm, target_rir, reps)?;
    print_json(&json!({
        "one_rm": one_rm,
        "target_rir": target_rir,
        "reps": reps,
        "load": load,
        "intensity": RirProgression::intensity_for_rir(target_rir),
    }))
}

pub fn schedule(week: u32, meso_length: u32) -> Result<()> {
    print_json(&json!({
        "week": week,
        "meso_length": meso_length,
        "target_rir": RirSchedule::target_rir(week, meso_length),
        "schedule": RirSchedule::schedule(meso_length),
    }))
}

pub fn adjust(toolkit: &Toolkit, actual_rir: f64, target_rir: f64, tolerance: f64) -> Result<()> {
    print_json(&json!({
        "adjustment_pct": toolkit.load_adjuster.adjustment_pct(actual_rir, target_rir),
        "effort": RirProgression::validate_effort(actual_rir, target_rir, tolerance),
    }))
}

pub fn mesocycle(toolkit: &Toolkit, args: &MesocycleArgs) -> Result<()> {
    let plan = toolkit.mesocycle.design_mesocycle(&MesocycleConfig {
        weeks: args.weeks,
        start_volume: args.start_volume,
        end_volume: args.end_volume,
        rir_start: args.rir_start,
        rir_end: args.rir_end,
    })?;
    print_json(&plan)
}

pub fn deload_check(args: &DeloadArgs) -> Result<()> {
    let assessment = DeloadAdvisor::assess(&DeloadMetrics {
        current_volume: args.volume,
        mrv_threshold: args.mrv,
        fatigue_score: args.fatigue,
        performance_drop_pct: args.performance_drop,
        weeks_since_deload: args.weeks_since_deload,
        sleep_quality: args.sleep,
        motivation: args.motivation,
        joint_pain: args.joint_pain,
    });

    let strategy = match (args.fatigue_level, args.volume_pressure) {
        (Some(fatigue), Some(pressure)) => Some(DeloadAdvisor::strategy(
            fatigue,
            pressure,
            args.blocks_completed,
        )?),
        _ => None,
    };
    let deload_sets = strategy
        .zip(args.mev)
        .map(|(strategy, mev)| DeloadAdvisor::deload_sets(mev, strategy.volume_reduction));

    print_json(&json!({
        "assessment": assessment,
        "strategy": strategy,
        "deload_sets": deload_sets,
    }))
}

pub fn phase_duration(phase: &str, training_age: &str, goal: &str, recovery: &str) -> Result<()> {
    let phase: TrainingPhase = phase.parse()?;
    let training_age: TrainingAge = training_age.parse()?;
    let goal: TrainingGoal = goal.parse()?;
    let recovery: RecoveryRating = recovery.parse()?;
    let weeks = PhaseDurationCalculator::phase_duration(phase, training_age, goal, recovery);

    print_json(&json!({
        "phase": phase,
        "training_age": training_age,
        "goal": goal,
        "recovery": recovery,
        "weeks": weeks,
    }))
}
