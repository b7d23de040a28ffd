use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use traffic_signal::{Phase, TrafficSignal};

/// Polls `current_phase` until it matches `want` or `deadline` passes.
fn wait_for_phase(signal: &TrafficSignal, want: Phase, deadline: Duration) -> bool {
    let started = Instant::now();
    while started.elapsed() < deadline {
        if signal.current_phase() == want {
            return true;
        }
        thread::sleep(Duration::from_millis(50));
    }
    false
}

#[test]
fn fresh_signal_reports_red() {
    let signal = TrafficSignal::new();
    assert_eq!(signal.current_phase(), Phase::Red);
}

#[test]
fn first_green_arrives_within_the_cycle_bounds() {
    let signal = Arc::new(TrafficSignal::new());
    assert_eq!(signal.current_phase(), Phase::Red);

    let started = Instant::now();
    signal.start();

    let waiter = {
        let signal = Arc::clone(&signal);
        thread::spawn(move || {
            signal.wait_for_green();
            started.elapsed()
        })
    };

    let waited = waiter.join().unwrap();
    // 4-6 s random cycle plus the 2 s hold, with scheduling slack on top.
    assert!(
        waited >= Duration::from_secs(4) && waited <= Duration::from_millis(8500),
        "first green after {waited:?}, expected between 4 s and 8 s"
    );
    assert_eq!(signal.current_phase(), Phase::Green);
}

#[test]
fn phases_keep_alternating_after_the_first_green() {
    let signal = Arc::new(TrafficSignal::new());
    signal.start();
    signal.wait_for_green();
    assert_eq!(signal.current_phase(), Phase::Green);

    // Green lasts at most one 6 s cycle before flipping back.
    assert!(
        wait_for_phase(&signal, Phase::Red, Duration::from_secs(7)),
        "signal never returned to red"
    );
    // And red lasts at most 6 s plus the 2 s hold before the next green.
    assert!(
        wait_for_phase(&signal, Phase::Green, Duration::from_secs(9)),
        "signal never turned green a second time"
    );
}

#[test]
fn ten_concurrent_waiters_all_eventually_cross() {
    let signal = Arc::new(TrafficSignal::new());
    let crossed = Arc::new(AtomicUsize::new(0));
    signal.start();

    let handles: Vec<_> = (0..10)
        .map(|_| {
            let signal = Arc::clone(&signal);
            let crossed = Arc::clone(&crossed);
            thread::spawn(move || {
                signal.wait_for_green();
                crossed.fetch_add(1, Ordering::SeqCst);
            })
        })
        .collect();

    // Each green publish releases one waiter, so ten waiters need at most
    // ten full red/green cycles of 14 s each. Poll with a hard deadline so
    // a regression fails instead of hanging the suite.
    let deadline = Instant::now() + Duration::from_secs(180);
    while crossed.load(Ordering::SeqCst) < 10 && Instant::now() < deadline {
        thread::sleep(Duration::from_millis(250));
    }
    assert_eq!(
        crossed.load(Ordering::SeqCst),
        10,
        "some waiters never saw a green"
    );

    for handle in handles {
        handle.join().unwrap();
    }
}
