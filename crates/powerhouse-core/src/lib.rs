// ABOUTME: Core types and constants for the Powerhouse RP training toolkit
// ABOUTME: Foundation crate with error handling, constants, and injected configuration values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Powerhouse Core
//!
//! Foundation crate providing shared types and constants for the training
//! calculators. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: `CalculatorError`, `ErrorCode` and `ConfigError`
//! - **constants**: Training-science defaults (volume baselines, RIR tables, thresholds)
//! - **config**: Plain configuration values injected into every calculator

/// Unified error handling with stable error codes
pub mod errors;

/// Training-science constants organized by calculator
pub mod constants;

/// Injected configuration values (muscle baselines, progression thresholds, limits)
pub mod config;

pub use config::{
    CalculatorConfig, LoadAdjustmentConfig, MesocycleLimits, MuscleConfig, ProgressionConfig,
};
pub use errors::{CalcResult, CalculatorError, ConfigError, ErrorCode};
