//! Countdown engine module
//!
//! This module contains the per-window countdown state machine. The owning
//! window task supplies the one-second cadence and publishes the reports.

pub mod countdown;

// Re-export main types
pub use countdown::{CountdownEngine, TickOutcome};
