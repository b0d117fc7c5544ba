//! # Token Statusline
//!
//! Renders a one-line, color-coded summary of an assistant session for a
//! terminal prompt or status bar.
//!
//! ## Overview
//!
//! A host writes one JSON document (model, workspace, token counters) to our
//! stdin; we print exactly one line showing:
//! - Model display name
//! - Workspace directory and checked-out Git branch
//! - Total tokens
//! - Session cost derived from the model's per-million-token prices
//! - Compact rate (share of input-side tokens served from cache)
//!
//! ## Features
//!
//! - `git` (default): Enables the `.git/HEAD` branch probe
//! - `colors` (default): Enables terminal color output via owo-colors

/// Command-line argument parsing and debug logging setup
pub mod cli;

/// Line formatting and segment colors
pub mod display;

/// Branch lookup from `.git/HEAD` (feature-gated)
#[cfg(feature = "git")]
pub mod git;

/// Token totals, cost and compact rate
pub mod metrics;

/// Input schema and value objects
pub mod models;

/// Cost policy for per-mtok list prices
pub mod pricing;

/// End-to-end decode, calculate, format
pub mod status;

/// Stdin and number formatting helpers
pub mod utils;
