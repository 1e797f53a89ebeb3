// ABOUTME: Library entry point for the Powerhouse RP training toolkit
// ABOUTME: Re-exports the calculators and adds environment configuration and logging setup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Powerhouse RP
//!
//! Deterministic resistance-training calculators in the Renaissance
//! Periodization tradition.
//!
//! ## Features
//!
//! - **Volume landmarks**: MV, MEV, MAV and MRV per muscle group and experience level
//! - **Set progression**: weekly set changes from soreness and performance feedback
//! - **RIR progression**: weekly reps-in-reserve targets and Epley load estimates
//! - **Mesocycle design**: linear week-by-week volume and RIR plans
//! - **Deloads and phases**: deload scoring, deload strategy, phase durations
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use powerhouse_rp::config::CalculatorConfig;
//! use powerhouse_rp::toolkit::Toolkit;
//!
//! fn main() -> anyhow::Result<()> {
//!     let toolkit = Toolkit::new(CalculatorConfig::from_env()?);
//!     let chest = toolkit.landmarks.landmarks("chest", "beginner")?;
//!     println!("MEV {} / MRV {}", chest.mev, chest.mrv);
//!     Ok(())
//! }
//! ```

/// Calculator configuration loading
pub mod config;

/// Structured logging setup
pub mod logging;

/// All calculators built from one configuration
pub mod toolkit;

/// Error types shared by every calculator
pub mod errors {
    pub use powerhouse_core::errors::{CalcResult, CalculatorError, ConfigError, ErrorCode};
}

/// Training-science default values
pub use powerhouse_core::constants;

/// The calculators
pub use powerhouse_intelligence as intelligence;
