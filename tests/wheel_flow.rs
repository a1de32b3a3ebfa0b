use std::cell::RefCell;
use std::rc::Rc;

use fortune_wheel::geometry::DEFAULT_PALETTE;
use fortune_wheel::{
    ConfigError, Easing, SpinCancelled, SpinPhase, StateError, Wheel, WheelEvent, WheelOptions,
};
use futures::{FutureExt, StreamExt};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn options(winner: Option<usize>, duration_ms: f64) -> WheelOptions {
    WheelOptions {
        winner,
        duration_ms,
        easing: Easing::Linear,
        seed: Some(5),
        ..Default::default()
    }
}

/// Tick in 16 ms steps until the wheel settles or `budget_ms` runs out
fn run(wheel: &mut Wheel, budget_ms: f64) -> Vec<WheelEvent> {
    let mut events = Vec::new();
    let mut elapsed = 0.0;
    while elapsed < budget_ms {
        events.extend(wheel.tick(16.0));
        elapsed += 16.0;
    }
    events
}

fn winner_recorder(wheel: &mut Wheel) -> Rc<RefCell<Vec<(String, usize)>>> {
    let winners = Rc::new(RefCell::new(Vec::new()));
    let sink = winners.clone();
    wheel.on_winner(move |label, index| sink.borrow_mut().push((label.to_string(), index)));
    winners
}

#[test]
fn forced_winner_lands_on_segment() {
    init_logging();
    let mut wheel = Wheel::configure(&["A", "B", "C", "D"], options(Some(2), 1000.0)).unwrap();
    let winners = winner_recorder(&mut wheel);

    let task = wheel.spin().unwrap();
    assert_eq!(wheel.controller().state().target, Some(545.0));
    run(&mut wheel, 1500.0);

    assert_eq!(winners.borrow().as_slice(), [("C".to_string(), 2)]);
    let result = task.now_or_never().unwrap().unwrap();
    assert_eq!(result.index, 2);
    assert_eq!(result.angle, 545.0);
    assert_eq!(wheel.phase(), SpinPhase::Settled);
}

#[test]
fn winner_callback_fires_once_per_spin() {
    init_logging();
    let mut wheel = Wheel::configure(&["A", "B", "C"], options(None, 500.0)).unwrap();
    let winners = winner_recorder(&mut wheel);

    wheel.spin().unwrap();
    let events = run(&mut wheel, 2000.0);
    let settled = events
        .iter()
        .filter(|e| matches!(e, WheelEvent::Settled(_)))
        .count();
    assert_eq!(settled, 1);
    assert_eq!(winners.borrow().len(), 1);

    // A settled wheel can spin again
    wheel.spin().unwrap();
    run(&mut wheel, 2000.0);
    assert_eq!(winners.borrow().len(), 2);
}

#[test]
fn rebuild_mid_spin_cancels_without_winner() {
    init_logging();
    let mut wheel = Wheel::configure(&["A", "B", "C", "D"], options(Some(1), 1000.0)).unwrap();
    let winners = winner_recorder(&mut wheel);

    let task = wheel.spin().unwrap();
    let generation = task.generation();
    run(&mut wheel, 320.0);
    assert!(wheel.angle() > 0.0);

    wheel.set_winner(Some(3)).unwrap();
    assert_eq!(wheel.phase(), SpinPhase::Idle);
    assert_eq!(wheel.angle(), 0.0);

    // The cancelled spin's timer elapses with nothing reported
    let events = run(&mut wheel, 3000.0);
    assert_eq!(events, vec![WheelEvent::Cancelled { generation }]);
    assert!(winners.borrow().is_empty());
    assert_eq!(task.now_or_never(), Some(Err(SpinCancelled)));

    // The rebuilt wheel spins to the new forced winner
    wheel.spin().unwrap();
    run(&mut wheel, 1500.0);
    assert_eq!(winners.borrow().as_slice(), [("D".to_string(), 3)]);
}

#[test]
fn spin_while_spinning_is_rejected() {
    init_logging();
    let mut wheel = Wheel::configure(&["A", "B"], options(None, 1000.0)).unwrap();
    let first = wheel.spin().unwrap();
    run(&mut wheel, 200.0);

    let before = wheel.controller().state().clone();
    assert_eq!(wheel.spin().unwrap_err(), StateError::AlreadySpinning);
    assert_eq!(wheel.controller().state(), &before);

    run(&mut wheel, 1500.0);
    assert!(first.now_or_never().unwrap().is_ok());
}

#[test]
fn empty_rewards_fail_to_configure() {
    let empty: [&str; 0] = [];
    assert!(matches!(
        Wheel::configure(&empty, WheelOptions::default()),
        Err(ConfigError::EmptyRewards)
    ));
}

#[test]
fn twelve_rewards_cycle_the_palette() {
    let rewards: Vec<String> = (1..=12).map(|i| (i * 100).to_string()).collect();
    let wheel = Wheel::configure(&rewards, WheelOptions::default()).unwrap();
    let geometry = wheel.geometry().unwrap();

    assert_eq!(geometry.segment_count(), 12);
    assert_eq!(geometry.angle_by_segment(), 30.0);
    assert_eq!(geometry.segments()[10].color, DEFAULT_PALETTE[0]);
    assert_eq!(geometry.segments()[11].color, DEFAULT_PALETTE[1]);
    assert_eq!(geometry.segments()[11].value, "1200");
}

#[test]
fn unconfigured_wheel_rejects_spin_and_reset() {
    init_logging();
    let mut wheel = Wheel::new();
    assert_eq!(wheel.spin().unwrap_err(), StateError::NotConfigured);
    assert_eq!(wheel.reset().unwrap_err(), StateError::NotConfigured);
}

#[test]
fn reset_rearms_and_try_again_spins() {
    init_logging();
    let mut wheel = Wheel::configure(&["A", "B", "C"], options(Some(0), 500.0)).unwrap();
    let winners = winner_recorder(&mut wheel);

    wheel.spin().unwrap();
    run(&mut wheel, 1000.0);
    wheel.reset().unwrap();
    assert_eq!(wheel.phase(), SpinPhase::Idle);
    assert_eq!(wheel.angle(), 0.0);

    let task = wheel.try_again().unwrap();
    run(&mut wheel, 1000.0);
    assert_eq!(task.now_or_never().unwrap().unwrap().label, "A");
    assert_eq!(winners.borrow().len(), 2);
}

#[test]
fn angle_stream_ends_at_final_angle() {
    init_logging();
    let mut wheel = Wheel::configure(&["A", "B", "C", "D"], options(Some(2), 1000.0)).unwrap();
    let angles = wheel.subscribe_angles();

    wheel.spin().unwrap();
    run(&mut wheel, 1500.0);

    let samples: Vec<f64> = angles.collect::<Vec<_>>().now_or_never().unwrap();
    assert_eq!(samples.last().copied(), Some(545.0));
    assert!(samples.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn angle_stream_ends_when_rebuild_cancels() {
    init_logging();
    let mut wheel = Wheel::configure(&["A", "B", "C", "D"], options(Some(1), 1000.0)).unwrap();
    let angles = wheel.subscribe_angles();

    wheel.spin().unwrap();
    run(&mut wheel, 160.0);
    wheel.set_rewards(&["A", "B", "C"]).unwrap();

    let samples = angles.collect::<Vec<_>>().now_or_never();
    let samples = samples.expect("stream should end once the spin is cancelled");
    assert_eq!(samples.len(), 10);
    assert!(samples.iter().all(|&angle| angle > 0.0 && angle < 635.0));

    // The rebuilt wheel spins normally
    wheel.spin().unwrap();
    run(&mut wheel, 1500.0);
    assert_eq!(wheel.phase(), SpinPhase::Settled);
}

#[test]
fn options_load_from_json() {
    let options = WheelOptions::from_json(
        r##"{"winner": 1, "duration": 2000, "textAngle": "vertical", "colors": ["#ff0000", "#00ff00"]}"##,
    )
    .unwrap();
    let wheel = Wheel::configure(&["AB", "CD", "EF"], options).unwrap();
    let geometry = wheel.geometry().unwrap();
    assert_eq!(geometry.forced_winner(), Some(1));
    assert_eq!(geometry.segments()[2].color, geometry.segments()[0].color);

    let labels = wheel.labels();
    assert_eq!(labels[1].glyphs.len(), 2);
    assert_eq!(labels[1].glyphs[0].text, "C");
}
