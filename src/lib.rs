//! # fitlog - a command-line strength-training log
//!
//! fitlog collects exercise entries (name, sets, reps, weight) for one
//! session, computes the session's training volume and appends the session to
//! a CSV log.
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional: pin the log location for this directory tree
//! fitlog init
//!
//! # Log today's workout interactively
//! fitlog
//!
//! # Back-fill a session
//! fitlog log --date 2024-03-09
//! ```
//!
//! ## Modules
//!
//! - [`model`]: `Exercise`, `Workout` and the `Volumetric` capability
//! - [`storage`]: the append-only CSV workout log
//! - [`input`]: the interactive prompt loop
//! - [`config`]: `.fitlog.toml` loading
//! - [`cli`]: clap definitions and command handlers

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Handles `.fitlog.toml` files and project discovery.
pub mod config;

pub mod date;

/// Error types and result aliases.
pub mod error;

pub mod input;
pub mod logging;

/// Data models: `Exercise`, `Workout`, `ExerciseRecord`.
pub mod model;

/// Append-only CSV storage.
pub mod storage;

/// Opt-in checks on exercise input.
pub mod validation;
