// ABOUTME: Powerhouse CLI - command-line driver over the training calculators
// ABOUTME: Parses arguments, loads configuration, and prints calculator results as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Volume landmarks for a muscle
//! powerhouse-cli landmarks chest --level beginner
//!
//! # Next week's set change, reproducible
//! powerhouse-cli progression 1 1 --history 2,3 --seed 7
//!
//! # Working load for 8 reps at RIR 2 with a 140 kg max
//! powerhouse-cli load 140 2 8
//!
//! # Five-week block from 10 to 18 sets
//! powerhouse-cli mesocycle --weeks 5 --start-volume 10 --end-volume 18 --rir-start 4 --rir-end 0
//! ```

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use powerhouse_rp::config;
use powerhouse_rp::intelligence::volume_landmarks::DEFAULT_LEVEL;
use powerhouse_rp::logging::LoggingConfig;
use powerhouse_rp::toolkit::Toolkit;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "powerhouse-cli",
    version,
    about = "Powerhouse RP training calculators",
    long_about = "Volume landmarks, set progression, RIR targets, load estimates, mesocycle plans and deload checks. Results are printed as JSON."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// JSON muscle configuration file (overrides POWERHOUSE_MUSCLE_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Volume landmarks for one muscle
    Landmarks {
        /// Muscle group, e.g. chest
        muscle: String,

        /// Experience level
        #[arg(long, default_value = DEFAULT_LEVEL)]
        level: String,

        /// Current weekly sets, to report the volume zone
        #[arg(long)]
        sets: Option<u32>,

        /// Size the recovery session for an ill athlete
        #[arg(long)]
        illness: bool,
    },

    /// Volume landmarks for every configured muscle
    LandmarksAll {
        /// Experience level
        #[arg(long, default_value = DEFAULT_LEVEL)]
        level: String,
    },

    /// Next week's set adjustment from soreness and performance
    #[command(allow_negative_numbers = true)]
    Progression {
        /// Soreness score
        soreness: f64,

        /// Performance score
        performance: f64,

        /// Earlier performance scores, oldest first (comma-separated)
        #[arg(long, value_delimiter = ',')]
        history: Vec<f64>,

        /// Seed for the two-or-three set choice
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Target RIR and load range for a week of a progression
    WeeklyRir {
        /// Week number (1-5)
        week: u32,

        /// hypertrophy, strength or volume
        #[arg(long, default_value = "hypertrophy")]
        program_type: String,
    },

    /// Working load from a one-rep max, target RIR and reps
    Load {
        /// One-rep max
        one_rm: f64,

        /// Reps in reserve
        target_rir: f64,

        /// Reps per set
        reps: u32,
    },

    /// Target RIR for a week of a mesocycle
    Schedule {
        /// Week number
        week: u32,

        /// Mesocycle length in weeks
        meso_length: u32,
    },

    /// Load change and effort check from reported vs target RIR
    #[command(allow_negative_numbers = true)]
    Adjust {
        /// Reported reps in reserve
        actual_rir: f64,

        /// Planned reps in reserve
        target_rir: f64,

        /// Deviation accepted as on target
        #[arg(long, default_value_t = 0.5)]
        tolerance: f64,
    },

    /// Linear week-by-week plan
    Mesocycle(commands::MesocycleArgs),

    /// Score deload triggers and optionally pick a deload strategy
    DeloadCheck(commands::DeloadArgs),

    /// Weeks to spend in a training phase
    PhaseDuration(PhaseArgs),
}

#[derive(Args)]
struct PhaseArgs {
    /// foundation, hypertrophy, strength or peak
    phase: String,

    /// beginner, intermediate or advanced
    #[arg(long, default_value = "intermediate")]
    training_age: String,

    /// hypertrophy, strength, powerbuilding or endurance
    #[arg(long, default_value = "hypertrophy")]
    goal: String,

    /// poor, average, good or excellent
    #[arg(long, default_value = "average")]
    recovery: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env();
    if cli.verbose {
        logging.verbose().init()?;
    } else {
        logging.init()?;
    }

    let toolkit = Toolkit::new(config::load(cli.config.as_deref())?);
    debug!(muscles = toolkit.landmarks.config().baseline.len(), "Calculators configured");

    match cli.command {
        Command::Landmarks {
            muscle,
            level,
            sets,
            illness,
        } => commands::landmarks(&toolkit, &muscle, &level, sets, illness),
        Command::LandmarksAll { level } => commands::landmarks_all(&toolkit, &level),
        Command::Progression {
            soreness,
            performance,
            history,
            seed,
        } => commands::progression(&toolkit, soreness, performance, &history, seed),
        Command::WeeklyRir { week, program_type } => commands::weekly_rir(week, &program_type),
        Command::Load {
            one_rm,
            target_rir,
            reps,
        } => commands::load(one_rm, target_rir, reps),
        Command::Schedule { week, meso_length } => commands::schedule(week, meso_length),
        Command::Adjust {
            actual_rir,
            target_rir,
            tolerance,
        } => commands::adjust(&toolkit, actual_rir, target_rir, tolerance),
        Command::Mesocycle(args) => commands::mesocycle(&toolkit, &args),
        Command::DeloadCheck(args) => commands::deload_check(&args),
        Command::PhaseDuration(args) => {
            commands::phase_duration(&args.phase, &args.training_age, &args.goal, &args.recovery)
        }
    }
}
