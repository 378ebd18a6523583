//! Expired-state visual treatment policy

use serde::{Deserialize, Serialize};

/// Visual treatment of a countdown surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisualState {
    /// Counting down or idle
    Normal,
    /// Time is up, static alert
    Expired,
    /// Time is up, flashing alert
    ExpiredFlashing,
}

/// Decide the visual treatment from the expired flag and the flash
/// preference. The preference only matters once time is up.
pub fn visual_state(expired: bool, flash_enabled: bool) -> VisualState {
    match (expired, flash_enabled) {
        (false, _) => VisualState::Normal,
        (true, false) => VisualState::Expired,
        (true, true) => VisualState::ExpiredFlashing,
    }
}
