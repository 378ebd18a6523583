//! Display window module
//!
//! This module contains the presenter that renders a countdown and the task
//! that runs the display window against the bus.

pub mod presenter;
pub mod window;

// Re-export main types
pub use presenter::{format_clock, DisplayPresenter, DisplayView};
pub use window::{display_window_task, TICK_PERIOD};
