//! Bus message types shared by both windows

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity of a window, used to address teardown requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowLabel {
    Control,
    Display,
}

impl fmt::Display for WindowLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WindowLabel::Control => write!(f, "control"),
            WindowLabel::Display => write!(f, "display"),
        }
    }
}

/// Payload of `start_timer`: the configuration snapshotted at start
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartPayload {
    pub minutes: u32,
    pub seconds: u32,
    pub activity: String,
}

impl StartPayload {
    /// Requested countdown duration in whole seconds
    pub fn total_seconds(&self) -> u32 {
        self.minutes * 60 + self.seconds
    }
}

/// Payload of `update_timer`: one per-second progress report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressPayload {
    pub minutes: u32,
    pub seconds: u32,
}

impl ProgressPayload {
    /// Split a whole-second total into the minutes/seconds wire form
    pub fn from_total(total_seconds: u32) -> Self {
        Self {
            minutes: total_seconds / 60,
            seconds: total_seconds % 60,
        }
    }
}

/// Messages carried by the event bus, one variant per topic.
///
/// All sends are fire-and-forget: a message published while no subscriber is
/// attached is dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "topic", content = "payload", rename_all = "snake_case")]
pub enum BusEvent {
    /// control -> display: begin a countdown
    StartTimer(StartPayload),
    /// control -> display: stop and zero the countdown
    ResetTimer,
    /// control <-> display: sync the flash preference
    SetFlashState { enable: bool },
    /// display -> control: live progress for the preview
    UpdateTimer(ProgressPayload),
    /// display -> control: the countdown reached zero
    TimeUp,
    /// host -> window: tear down the addressed window
    UnlistenAll { window: WindowLabel },
}

impl BusEvent {
    /// Topic name as it appears on the wire
    pub fn topic(&self) -> &'static str {
        match self {
            BusEvent::StartTimer(_) => "start_timer",
            BusEvent::ResetTimer => "reset_timer",
            BusEvent::SetFlashState { .. } => "set_flash_state",
            BusEvent::UpdateTimer(_) => "update_timer",
            BusEvent::TimeUp => "time_up",
            BusEvent::UnlistenAll { .. } => "unlisten_all",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_payload_total() {
        let payload = StartPayload {
            minutes: 2,
            seconds: 30,
            activity: "Sermon".to_string(),
        };
        assert_eq!(payload.total_seconds(), 150);
    }

    #[test]
    fn progress_from_total_splits_minutes_and_seconds() {
        assert_eq!(
            ProgressPayload::from_total(125),
            ProgressPayload {
                minutes: 2,
                seconds: 5
            }
        );
        assert_eq!(
            ProgressPayload::from_total(0),
            ProgressPayload {
                minutes: 0,
                seconds: 0
            }
        );
    }

    #[test]
    fn events_tag_their_topic_on_the_wire() {
        let event = BusEvent::SetFlashState { enable: false };
        let json = serde_json::to_value(&event).expect("serialize");
        assert_eq!(json["topic"], "set_flash_state");
        assert_eq!(event.topic(), "set_flash_state");
    }
}
