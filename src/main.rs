//! Projtimer - a two-window countdown timer
//!
//! This is the host entry point: it creates the two windows as tasks, wires
//! them to the event bus, and drives one countdown session from the command
//! line the way an operator would drive the control window.

use chrono::Utc;
use tokio::sync::mpsc;
use tracing::info;

use projtimer::{
    bus::{BusEvent, BusSubscription, EventBus, WindowLabel},
    config::Config,
    control::{control_window_task, ControlInput, Key},
    display::display_window_task,
    summary::{SessionOutcome, SessionSummary},
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("projtimer={}", config.log_level()))
        .init();

    info!("Starting projtimer v0.1.0");
    info!(
        "Configuration: activity={}, duration={:02}:{:02}, flash={}",
        config.activity,
        config.minutes,
        config.seconds,
        !config.no_flash
    );

    if config.total_seconds() == 0 {
        anyhow::bail!("countdown duration must be at least one second");
    }

    let bus = EventBus::new();
    let mut session = bus.subscribe();

    let display = tokio::spawn(display_window_task(bus.clone()));
    let (input_tx, input_rx) = mpsc::channel(16);
    let control = tokio::spawn(control_window_task(bus.clone(), input_rx));

    // Script the session through the control window's input channel.
    input_tx
        .send(ControlInput::SubmitActivity(config.activity.clone()))
        .await?;
    if config.no_flash {
        input_tx.send(ControlInput::ToggleFlash).await?;
    }
    for key in digit_keys(config.minutes) {
        input_tx.send(ControlInput::Key(key)).await?;
    }
    input_tx.send(ControlInput::Key(Key::Tab)).await?;
    for key in digit_keys(config.seconds) {
        input_tx.send(ControlInput::Key(key)).await?;
    }
    input_tx.send(ControlInput::Key(Key::Enter)).await?;

    let started_at = Utc::now();
    let outcome = tokio::select! {
        outcome = wait_for_time_up(&mut session) => outcome,
        _ = shutdown_signal() => SessionOutcome::Interrupted,
    };

    // Tear both windows down; each drops its subscriptions on the way out.
    bus.publish(BusEvent::UnlistenAll {
        window: WindowLabel::Display,
    });
    bus.publish(BusEvent::UnlistenAll {
        window: WindowLabel::Control,
    });
    drop(input_tx);
    let _ = tokio::join!(display, control);

    let summary = SessionSummary {
        activity: config.activity.clone(),
        minutes: config.minutes,
        seconds: config.seconds,
        flash_enabled: !config.no_flash,
        outcome,
        started_at,
        finished_at: Utc::now(),
    };
    println!("{}", serde_json::to_string_pretty(&summary)?);

    info!("Session complete");
    Ok(())
}

/// Key presses that enter `value` into a two-digit rolling entry field
fn digit_keys(value: u32) -> [Key; 2] {
    [
        Key::Digit((value / 10) as u8),
        Key::Digit((value % 10) as u8),
    ]
}

/// Watch the bus until the display window reports the countdown finished
async fn wait_for_time_up(session: &mut BusSubscription) -> SessionOutcome {
    while let Some(event) = session.recv().await {
        if matches!(event, BusEvent::TimeUp) {
            return SessionOutcome::TimeUp;
        }
    }
    SessionOutcome::Interrupted
}
