//! Cross-window event bus module
//!
//! This module contains the message types exchanged between the control and
//! display windows and the publish/subscribe channel that carries them.

pub mod event;
pub mod event_bus;

// Re-export main types
pub use event::{BusEvent, ProgressPayload, StartPayload, WindowLabel};
pub use event_bus::{BusSubscription, EventBus, CHANNEL_CAPACITY};
