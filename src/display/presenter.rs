//! Read-only renderer around one countdown engine copy
//!
//! Each window owns a presenter. Both copies start from the same
//! `start_timer` command and tick on their own one-second interval, so the
//! visible countdown never stalls on a missed bus message. The display
//! window's copy is the reporting one: it publishes `update_timer` each tick
//! and `time_up` at expiry for the control-window preview. Nothing ever
//! corrects drift between the two copies once a run has started.

use tracing::{debug, info};

use crate::alert::{visual_state, VisualState};
use crate::bus::{BusEvent, EventBus, ProgressPayload};
use crate::engine::{CountdownEngine, TickOutcome};

/// Terminal alert text shown when the countdown expires
pub const TIME_UP_TEXT: &str = "TIME UP!!!";

/// What a window draws for its countdown surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayView {
    pub text: String,
    pub visual: VisualState,
    pub activity: Option<String>,
}

/// Renders whatever its engine copy reports
#[derive(Debug)]
pub struct DisplayPresenter {
    engine: CountdownEngine,
    flash_enabled: bool,
    reporting: bool,
}

impl DisplayPresenter {
    /// The display window's copy: publishes progress and time-up reports
    pub fn reporting() -> Self {
        Self::new(true)
    }

    /// A render-only copy, used as the control window's preview
    pub fn preview() -> Self {
        Self::new(false)
    }

    fn new(reporting: bool) -> Self {
        Self {
            engine: CountdownEngine::new(),
            flash_enabled: true,
            reporting,
        }
    }

    /// React to a bus command. Returns true when the command replaced the
    /// tick schedule (start or reset) and the caller must re-arm it.
    pub fn handle_event(&mut self, event: &BusEvent, bus: &EventBus) -> bool {
        match event {
            BusEvent::StartTimer(payload) => {
                match self.engine.start(payload.total_seconds(), &payload.activity) {
                    Some(initial) => {
                        info!(
                            activity = %payload.activity,
                            total_seconds = payload.total_seconds(),
                            "countdown started"
                        );
                        if self.reporting {
                            bus.publish(BusEvent::UpdateTimer(initial));
                        }
                        true
                    }
                    None => {
                        debug!("zero-length start ignored");
                        false
                    }
                }
            }
            BusEvent::ResetTimer => {
                self.engine.reset();
                if self.reporting {
                    bus.publish(BusEvent::UpdateTimer(ProgressPayload::from_total(0)));
                }
                true
            }
            BusEvent::SetFlashState { enable } => {
                self.flash_enabled = *enable;
                false
            }
            _ => false,
        }
    }

    /// Advance the local countdown by one second and publish what happened
    pub fn on_tick(&mut self, bus: &EventBus) {
        match self.engine.tick() {
            TickOutcome::Progress(report) => {
                debug!(minutes = report.minutes, seconds = report.seconds, "tick");
                if self.reporting {
                    bus.publish(BusEvent::UpdateTimer(report));
                }
            }
            TickOutcome::Expired => {
                info!(activity = ?self.engine.activity(), "time up");
                if self.reporting {
                    bus.publish(BusEvent::TimeUp);
                }
            }
            TickOutcome::Idle => {}
        }
    }

    /// True while the local countdown still has time left
    pub fn is_running(&self) -> bool {
        self.engine.is_running()
    }

    pub fn flash_enabled(&self) -> bool {
        self.flash_enabled
    }

    /// Current render state
    pub fn view(&self) -> DisplayView {
        let expired = self.engine.is_expired();
        let text = if expired {
            TIME_UP_TEXT.to_string()
        } else {
            format_clock(self.engine.remaining_seconds())
        };
        DisplayView {
            text,
            visual: visual_state(expired, self.flash_enabled),
            activity: self.engine.activity().map(str::to_string),
        }
    }
}

/// Format remaining time the way the display window draws it: minutes
/// unpadded, seconds zero-padded
pub fn format_clock(total_seconds: u32) -> String {
    format!("{}:{:02}", total_seconds / 60, total_seconds % 60)
}
