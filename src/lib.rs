//! Projtimer - a two-window countdown timer core
//!
//! The control window configures a countdown (minutes/seconds entry, an
//! activity list, a flash preference) and the display window runs it and
//! renders the terminal alert. The two synchronize exclusively over a typed
//! event bus; each keeps its own countdown copy ticking from the same start
//! command.

pub mod alert;
pub mod bus;
pub mod config;
pub mod control;
pub mod display;
pub mod engine;
pub mod summary;
pub mod utils;

// Re-export commonly used types
pub use bus::EventBus;
pub use config::Config;
pub use engine::CountdownEngine;
pub use utils::shutdown_signal;
