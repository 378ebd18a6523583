//! Session summary emitted by the host binary

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionOutcome {
    /// The display window reported `time_up`
    TimeUp,
    /// A shutdown signal arrived first
    Interrupted,
}

/// End-of-session report printed as JSON on stdout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSummary {
    pub activity: String,
    pub minutes: u32,
    pub seconds: u32,
    pub flash_enabled: bool,
    pub outcome: SessionOutcome,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}
