//! Control window module
//!
//! This module contains the operator-facing state: the minutes/seconds entry
//! fields, the activity list, command issuing toward the display window, and
//! the task that runs the control window against the bus.

pub mod activity;
pub mod input;
pub mod window;

// Re-export main types
pub use activity::ActivitySet;
pub use input::{Field, InputAction, Key, TimerInput};
pub use window::{control_window_task, ControlInput, ControlWindow, Notice};
