//! Full-session flow through both window tasks over the bus

use tokio::sync::mpsc;

use projtimer::bus::{BusEvent, EventBus, ProgressPayload, StartPayload, WindowLabel};
use projtimer::control::{control_window_task, ControlInput, Key};
use projtimer::display::display_window_task;

async fn drive(
    input_tx: &mpsc::Sender<ControlInput>,
    inputs: impl IntoIterator<Item = ControlInput>,
) {
    for input in inputs {
        input_tx.send(input).await.expect("control window gone");
    }
}

#[tokio::test(start_paused = true)]
async fn five_second_session_reaches_time_up() {
    let bus = EventBus::new();
    let mut session = bus.subscribe();
    let display = tokio::spawn(display_window_task(bus.clone()));
    let (input_tx, input_rx) = mpsc::channel(16);
    let control = tokio::spawn(control_window_task(bus.clone(), input_rx));

    // Operator: add "Sermon", leave minutes at 0, type 05 into seconds, Enter.
    drive(
        &input_tx,
        [
            ControlInput::SubmitActivity("Sermon".to_string()),
            ControlInput::Key(Key::Tab),
            ControlInput::Key(Key::Digit(0)),
            ControlInput::Key(Key::Digit(5)),
            ControlInput::Key(Key::Enter),
        ],
    )
    .await;

    // The start command carries the snapshotted configuration.
    loop {
        match session.recv().await.expect("bus closed early") {
            BusEvent::StartTimer(payload) => {
                assert_eq!(
                    payload,
                    StartPayload {
                        minutes: 0,
                        seconds: 5,
                        activity: "Sermon".to_string(),
                    }
                );
                break;
            }
            other => panic!("unexpected event before start: {other:?}"),
        }
    }

    // The display reports each second, then the terminal event.
    let mut progress = Vec::new();
    loop {
        match session.recv().await.expect("bus closed early") {
            BusEvent::UpdateTimer(report) => progress.push(report),
            BusEvent::TimeUp => break,
            _ => {}
        }
    }
    let expected: Vec<ProgressPayload> = [5u32, 4, 3, 2, 1]
        .iter()
        .map(|&t| ProgressPayload::from_total(t))
        .collect();
    assert_eq!(progress, expected);

    bus.publish(BusEvent::UnlistenAll {
        window: WindowLabel::Display,
    });
    bus.publish(BusEvent::UnlistenAll {
        window: WindowLabel::Control,
    });
    display.await.expect("display task panicked");
    control.await.expect("control task panicked");
}

#[tokio::test(start_paused = true)]
async fn restart_after_expiry_runs_a_second_countdown() {
    let bus = EventBus::new();
    let mut session = bus.subscribe();
    let display = tokio::spawn(display_window_task(bus.clone()));
    let (input_tx, input_rx) = mpsc::channel(16);
    let control = tokio::spawn(control_window_task(bus.clone(), input_rx));

    drive(
        &input_tx,
        [
            ControlInput::SubmitActivity("Sermon".to_string()),
            ControlInput::Key(Key::Tab),
            ControlInput::Key(Key::Digit(0)),
            ControlInput::Key(Key::Digit(2)),
            ControlInput::Key(Key::Enter),
        ],
    )
    .await;

    loop {
        if let BusEvent::TimeUp = session.recv().await.expect("bus closed early") {
            break;
        }
    }

    // The entry fields still hold 0:02; Enter starts a fresh run.
    drive(&input_tx, [ControlInput::Key(Key::Enter)]).await;

    let mut progress = Vec::new();
    loop {
        match session.recv().await.expect("bus closed early") {
            BusEvent::UpdateTimer(report) => progress.push(report),
            BusEvent::TimeUp => break,
            _ => {}
        }
    }
    let expected: Vec<ProgressPayload> = [2u32, 1]
        .iter()
        .map(|&t| ProgressPayload::from_total(t))
        .collect();
    assert_eq!(progress, expected);

    bus.publish(BusEvent::UnlistenAll {
        window: WindowLabel::Display,
    });
    bus.publish(BusEvent::UnlistenAll {
        window: WindowLabel::Control,
    });
    display.await.expect("display task panicked");
    control.await.expect("control task panicked");
}

#[tokio::test(start_paused = true)]
async fn start_without_activity_publishes_nothing() {
    let bus = EventBus::new();
    let mut session = bus.subscribe();
    let display = tokio::spawn(display_window_task(bus.clone()));
    let (input_tx, input_rx) = mpsc::channel(16);
    let control = tokio::spawn(control_window_task(bus.clone(), input_rx));

    drive(
        &input_tx,
        [
            ControlInput::Key(Key::Tab),
            ControlInput::Key(Key::Digit(5)),
            ControlInput::Key(Key::Enter),
        ],
    )
    .await;

    // Give both windows a few virtual seconds to (not) react.
    tokio::time::sleep(std::time::Duration::from_secs(3)).await;
    assert_eq!(session.try_recv(), None);

    bus.publish(BusEvent::UnlistenAll {
        window: WindowLabel::Display,
    });
    bus.publish(BusEvent::UnlistenAll {
        window: WindowLabel::Control,
    });
    display.await.expect("display task panicked");
    control.await.expect("control task panicked");
}
