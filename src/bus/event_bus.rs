//! Publish/subscribe channel between the control and display windows
//!
//! A single tokio broadcast channel carries every topic, so subscribers
//! observe messages of one topic in send order. Lagging receivers skip
//! stale events; only the latest state matters to a renderer.

use tokio::sync::broadcast;
use tracing::{debug, warn};

use super::BusEvent;

/// Broadcast channel capacity. 64 is enough for burst handling without
/// memory bloat.
pub const CHANNEL_CAPACITY: usize = 64;

/// Process-wide event bus. Cloning shares the same channel.
#[derive(Debug, Clone)]
pub struct EventBus {
    tx: broadcast::Sender<BusEvent>,
}

impl EventBus {
    /// Create a bus with the default capacity
    pub fn new() -> Self {
        Self::with_capacity(CHANNEL_CAPACITY)
    }

    /// Create a bus holding at most `capacity` undelivered events per subscriber
    pub fn with_capacity(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Fire-and-forget publish. A message sent while no subscriber is
    /// attached is dropped.
    pub fn publish(&self, event: BusEvent) {
        debug!(topic = event.topic(), "publishing bus event");
        if self.tx.send(event).is_err() {
            debug!("no subscribers attached, message dropped");
        }
    }

    /// Attach a subscriber. Dropping the returned handle detaches it.
    pub fn subscribe(&self) -> BusSubscription {
        BusSubscription {
            rx: self.tx.subscribe(),
        }
    }

    /// Number of currently attached subscribers
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// Subscription handle; detaches from the bus when dropped
#[derive(Debug)]
pub struct BusSubscription {
    rx: broadcast::Receiver<BusEvent>,
}

impl BusSubscription {
    /// Receive the next event in send order, skipping over any gap left by
    /// falling behind the channel capacity. Returns `None` once every bus
    /// handle is gone.
    pub async fn recv(&mut self) -> Option<BusEvent> {
        loop {
            match self.rx.recv().await {
                Ok(event) => return Some(event),
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    warn!(skipped, "subscriber lagged, skipping stale events");
                }
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }

    /// Non-blocking receive. Returns `None` when no event is waiting.
    pub fn try_recv(&mut self) -> Option<BusEvent> {
        loop {
            match self.rx.try_recv() {
                Ok(event) => return Some(event),
                Err(broadcast::error::TryRecvError::Lagged(skipped)) => {
                    warn!(skipped, "subscriber lagged, skipping stale events");
                }
                Err(_) => return None,
            }
        }
    }
}
