//! Signal handling for graceful shutdown

use futures::stream::StreamExt;
use signal_hook::consts::{SIGINT, SIGTERM};
use signal_hook_tokio::Signals;
use tracing::info;

/// Resolve once SIGTERM or SIGINT arrives
pub async fn shutdown_signal() {
    let mut signals = Signals::new([SIGTERM, SIGINT]).expect("failed to install signal handler");

    if let Some(signal) = signals.next().await {
        info!(signal, "shutdown signal received");
    }
}
