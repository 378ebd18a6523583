//! Countdown state machine
//!
//! Pure timing logic with no scheduler dependency; fully testable on the
//! host. The window task that owns an engine drives `tick` once per second
//! and publishes whatever the engine reports.

use crate::bus::ProgressPayload;

/// Outcome of advancing the countdown by one second
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing to do; the countdown is idle or already expired
    Idle,
    /// One second elapsed, time still remains
    Progress(ProgressPayload),
    /// The countdown just reached zero
    Expired,
}

/// Authoritative remaining-time state for one window.
///
/// Invariants: `remaining_seconds` never underflows; `expired` is true only
/// when a running countdown reached zero, never after a reset; the bound
/// activity is a snapshot taken at start and stays fixed for the whole run.
#[derive(Debug, Clone, Default)]
pub struct CountdownEngine {
    remaining_seconds: u32,
    expired: bool,
    bound_activity: Option<String>,
}

impl CountdownEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a countdown of `total_seconds` bound to `activity`.
    ///
    /// A zero total is rejected and leaves the engine untouched. Starting
    /// while a countdown is running replaces the run. Returns the initial
    /// progress report to publish, or `None` when rejected.
    pub fn start(&mut self, total_seconds: u32, activity: &str) -> Option<ProgressPayload> {
        if total_seconds == 0 {
            return None;
        }
        self.remaining_seconds = total_seconds;
        self.expired = false;
        self.bound_activity = Some(activity.to_string());
        Some(ProgressPayload::from_total(total_seconds))
    }

    /// Advance by one second. Idle and expired engines are untouched, so a
    /// tick that outlives its schedule cannot corrupt state.
    pub fn tick(&mut self) -> TickOutcome {
        if self.remaining_seconds == 0 {
            return TickOutcome::Idle;
        }
        self.remaining_seconds -= 1;
        if self.remaining_seconds == 0 {
            self.expired = true;
            TickOutcome::Expired
        } else {
            TickOutcome::Progress(ProgressPayload::from_total(self.remaining_seconds))
        }
    }

    /// Stop and clear. Reset never counts as an expiry: the expired flag and
    /// the bound activity are both cleared.
    pub fn reset(&mut self) {
        self.remaining_seconds = 0;
        self.expired = false;
        self.bound_activity = None;
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    pub fn is_expired(&self) -> bool {
        self.expired
    }

    /// True while a started countdown still has time left
    pub fn is_running(&self) -> bool {
        self.remaining_seconds > 0
    }

    /// Label snapshotted at start; `None` while idle
    pub fn activity(&self) -> Option<&str> {
        self.bound_activity.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_run_reports_each_second_then_expires() {
        let mut engine = CountdownEngine::new();

        let initial = engine.start(5, "Sermon").expect("positive total starts");
        assert_eq!(initial, ProgressPayload::from_total(5));

        for remaining in [4u32, 3, 2, 1] {
            assert_eq!(
                engine.tick(),
                TickOutcome::Progress(ProgressPayload::from_total(remaining))
            );
        }
        assert_eq!(engine.tick(), TickOutcome::Expired);
        assert_eq!(engine.remaining_seconds(), 0);
        assert!(engine.is_expired());
        // The bound label survives expiry so the alert can show it.
        assert_eq!(engine.activity(), Some("Sermon"));
    }

    #[test]
    fn progress_report_count_matches_total() {
        for total in 1u32..=90 {
            let mut engine = CountdownEngine::new();
            let mut progress_count = 0;
            if engine.start(total, "count").is_some() {
                progress_count += 1;
            }
            loop {
                match engine.tick() {
                    TickOutcome::Progress(_) => progress_count += 1,
                    TickOutcome::Expired => break,
                    TickOutcome::Idle => panic!("engine went idle mid-run"),
                }
            }
            assert_eq!(progress_count, total);
        }
    }

    #[test]
    fn zero_total_is_rejected_without_state_change() {
        let mut engine = CountdownEngine::new();
        assert_eq!(engine.start(0, "nothing"), None);
        assert_eq!(engine.remaining_seconds(), 0);
        assert!(!engine.is_expired());
        assert_eq!(engine.activity(), None);
        assert_eq!(engine.tick(), TickOutcome::Idle);
    }

    #[test]
    fn starting_again_replaces_the_run() {
        let mut engine = CountdownEngine::new();
        engine.start(10, "long");
        engine.tick();

        engine.start(3, "short");
        assert_eq!(engine.remaining_seconds(), 3);
        assert_eq!(engine.activity(), Some("short"));
        assert_eq!(
            engine.tick(),
            TickOutcome::Progress(ProgressPayload::from_total(2))
        );
    }

    #[test]
    fn restart_after_expiry_clears_the_expired_flag() {
        let mut engine = CountdownEngine::new();
        engine.start(1, "first");
        assert_eq!(engine.tick(), TickOutcome::Expired);

        engine.start(2, "second");
        assert!(!engine.is_expired());
        assert_eq!(engine.remaining_seconds(), 2);
    }

    #[test]
    fn reset_clears_state_and_later_ticks_are_inert() {
        let mut engine = CountdownEngine::new();
        engine.start(30, "Sermon");
        engine.tick();

        engine.reset();
        assert_eq!(engine.remaining_seconds(), 0);
        assert!(!engine.is_expired());
        assert_eq!(engine.activity(), None);

        // A tick incorrectly left scheduled must not mutate anything.
        assert_eq!(engine.tick(), TickOutcome::Idle);
        assert_eq!(engine.remaining_seconds(), 0);
        assert!(!engine.is_expired());
    }
}
