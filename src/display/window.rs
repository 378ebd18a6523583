//! Display window task
//!
//! The select loop that owns the display window's presenter: bus commands
//! in, one-second ticks through, progress reports out. One interval object
//! drives all ticks; re-arming it on start/reset is the cancellation of the
//! previous schedule, so two decrement schedules can never overlap.

use std::time::Duration;

use tokio::time::{self, Instant, Interval};
use tracing::{debug, info};

use super::DisplayPresenter;
use crate::bus::{BusEvent, EventBus, WindowLabel};

/// One-second cadence shared by both windows' countdown copies
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// A fresh tick schedule whose first fire is one full period away
pub(crate) fn armed_interval() -> Interval {
    time::interval_at(Instant::now() + TICK_PERIOD, TICK_PERIOD)
}

/// Run the display window until the host tears it down or the bus closes
pub async fn display_window_task(bus: EventBus) {
    info!("display window up");
    let mut sub = bus.subscribe();
    let mut presenter = DisplayPresenter::reporting();
    let mut ticker = armed_interval();

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                if presenter.is_running() {
                    presenter.on_tick(&bus);
                }
            }
            event = sub.recv() => {
                match event {
                    Some(BusEvent::UnlistenAll { window: WindowLabel::Display }) => {
                        debug!("display window teardown requested");
                        break;
                    }
                    Some(event) => {
                        if presenter.handle_event(&event, &bus) {
                            ticker = armed_interval();
                        }
                    }
                    None => break,
                }
            }
        }
    }
    // Dropping the subscription detaches everything this window owned.
    info!("display window down");
}
