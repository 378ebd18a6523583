//! Control window: command issuing and the summarized preview
//!
//! The control window owns the pre-start configuration and the activity
//! list, publishes `start_timer` / `reset_timer` / `set_flash_state`
//! commands, and keeps two views of the running countdown: its own silent
//! preview copy of the presenter, and the summarized state the display
//! window last reported over the bus.

use chrono::{DateTime, Utc};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use super::{ActivitySet, InputAction, Key, TimerInput};
use crate::bus::{BusEvent, EventBus, ProgressPayload, StartPayload, WindowLabel};
use crate::display::window::armed_interval;
use crate::display::DisplayPresenter;

/// User-visible notice for a rejected start request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    AddActivity,
    SelectActivity,
}

impl Notice {
    /// Toast text handed to the notification surface
    pub fn message(self) -> &'static str {
        match self {
            Notice::AddActivity => "Please add an activity to start the timer!",
            Notice::SelectActivity => "Please select an activity to start the timer!",
        }
    }
}

/// Host-delivered input events (keyboard and pointer)
#[derive(Debug, Clone)]
pub enum ControlInput {
    /// A key press routed to the minutes/seconds entry fields
    Key(Key),
    /// Enter in the activity field: add the typed label
    SubmitActivity(String),
    /// Click on an activity chip: make it active
    SelectActivity(String),
    /// Click on an activity chip's remove button
    RemoveActivity(String),
    PressStart,
    PressReset,
    ToggleFlash,
}

/// Latest countdown state the display window reported over the bus
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportedState {
    pub progress: Option<ProgressPayload>,
    pub time_up: bool,
}

/// The control window's state; exactly one writer, this window.
#[derive(Debug)]
pub struct ControlWindow {
    bus: EventBus,
    input: TimerInput,
    activities: ActivitySet,
    flash_enabled: bool,
    reported: ReportedState,
    last_command: Option<&'static str>,
    last_command_at: Option<DateTime<Utc>>,
}

impl ControlWindow {
    pub fn new(bus: EventBus) -> Self {
        Self {
            bus,
            input: TimerInput::new(),
            activities: ActivitySet::new(),
            flash_enabled: true,
            reported: ReportedState::default(),
            last_command: None,
            last_command_at: None,
        }
    }

    /// Apply one host input event. A rejected start surfaces as a notice.
    pub fn handle_input(&mut self, input: ControlInput) -> Option<Notice> {
        match input {
            ControlInput::Key(key) => match self.input.handle_key(key) {
                InputAction::StartRequested => self.press_start(),
                InputAction::Edited => None,
            },
            ControlInput::SubmitActivity(label) => {
                if self.activities.add(&label) {
                    debug!(label = label.trim(), "activity added");
                } else {
                    debug!(label = label.trim(), "duplicate or empty activity ignored");
                }
                None
            }
            ControlInput::SelectActivity(label) => {
                self.activities.select(&label);
                None
            }
            ControlInput::RemoveActivity(label) => {
                self.activities.remove(&label);
                None
            }
            ControlInput::PressStart => self.press_start(),
            ControlInput::PressReset => {
                self.press_reset();
                None
            }
            ControlInput::ToggleFlash => {
                self.toggle_flash();
                None
            }
        }
    }

    /// Publish `start_timer` with the current configuration, or say why not
    pub fn press_start(&mut self) -> Option<Notice> {
        let Some(activity) = self.activities.active() else {
            let notice = if self.activities.is_empty() {
                Notice::AddActivity
            } else {
                Notice::SelectActivity
            };
            warn!(notice = notice.message(), "start rejected");
            return Some(notice);
        };
        let payload = StartPayload {
            minutes: self.input.minutes(),
            seconds: self.input.seconds(),
            activity: activity.to_string(),
        };
        info!(
            activity = %payload.activity,
            minutes = payload.minutes,
            seconds = payload.seconds,
            "start requested"
        );
        self.track_command("start");
        self.bus.publish(BusEvent::StartTimer(payload));
        None
    }

    /// Publish `reset_timer` and clear the entry fields back to 00:00
    pub fn press_reset(&mut self) {
        self.input.clear();
        self.track_command("reset");
        self.bus.publish(BusEvent::ResetTimer);
    }

    /// Flip the flash preference and sync it to the display window
    pub fn toggle_flash(&mut self) {
        self.flash_enabled = !self.flash_enabled;
        info!(enabled = self.flash_enabled, "flash preference toggled");
        self.track_command("flash");
        self.bus.publish(BusEvent::SetFlashState {
            enable: self.flash_enabled,
        });
    }

    /// Fold a bus event into the summarized view of the display's reports
    pub fn observe_bus_event(&mut self, event: &BusEvent) {
        match event {
            BusEvent::UpdateTimer(progress) => {
                self.reported.progress = Some(*progress);
            }
            BusEvent::TimeUp => {
                self.reported.progress = Some(ProgressPayload::from_total(0));
                self.reported.time_up = true;
            }
            BusEvent::StartTimer(_) | BusEvent::ResetTimer => {
                self.reported.time_up = false;
            }
            _ => {}
        }
    }

    pub fn flash_enabled(&self) -> bool {
        self.flash_enabled
    }

    pub fn reported(&self) -> ReportedState {
        self.reported
    }

    pub fn activities(&self) -> &ActivitySet {
        &self.activities
    }

    pub fn input(&self) -> &TimerInput {
        &self.input
    }

    pub fn last_command(&self) -> (Option<&'static str>, Option<DateTime<Utc>>) {
        (self.last_command, self.last_command_at)
    }

    fn track_command(&mut self, command: &'static str) {
        self.last_command = Some(command);
        self.last_command_at = Some(Utc::now());
    }
}

/// Run the control window until its input channel closes or the host tears
/// it down. Owns the silent preview copy of the countdown.
pub async fn control_window_task(bus: EventBus, mut inputs: mpsc::Receiver<ControlInput>) {
    info!("control window up");
    let mut sub = bus.subscribe();
    let mut window = ControlWindow::new(bus.clone());
    let mut preview = DisplayPresenter::preview();
    let mut ticker = armed_interval();

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                if preview.is_running() {
                    preview.on_tick(&bus);
                }
            }
            input = inputs.recv() => {
                match input {
                    Some(input) => {
                        window.handle_input(input);
                    }
                    None => break,
                }
            }
            event = sub.recv() => {
                match event {
                    Some(BusEvent::UnlistenAll { window: WindowLabel::Control }) => {
                        debug!("control window teardown requested");
                        break;
                    }
                    Some(event) => {
                        window.observe_bus_event(&event);
                        if preview.handle_event(&event, &bus) {
                            ticker = armed_interval();
                        }
                    }
                    None => break,
                }
            }
        }
    }
    info!("control window down");
}
