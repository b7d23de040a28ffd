//! The traffic signal state machine and its background cycle thread.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::debug;

use crate::handoff::HandoffQueue;
use crate::phase::{Phase, PhaseCell};

/// Shortest randomized cycle, milliseconds.
const MIN_CYCLE_MS: u64 = 4000;
/// Longest randomized cycle, milliseconds.
const MAX_CYCLE_MS: u64 = 6000;
/// Extra hold applied on the red-to-green edge, before the flip is published.
const GREEN_HOLD_MS: u64 = 2000;

/// A single self-cycling traffic signal.
///
/// Construction leaves the light [`Phase::Red`]. [`start`] launches the
/// cycle thread, which toggles the phase every 4-6 s and publishes every
/// flip to the handoff queue consumed by [`wait_for_green`]. Switches to
/// green carry an extra fixed 2 s hold; the externally visible phase stays
/// red for the whole hold, and the phase-cell update and the queue publish
/// happen together once it elapses.
///
/// The cycle thread is detached and runs for the life of the process; there
/// is no stop or join path, and none of the blocking operations can be
/// cancelled.
///
/// [`start`]: TrafficSignal::start
/// [`wait_for_green`]: TrafficSignal::wait_for_green
#[derive(Debug)]
pub struct TrafficSignal {
    phase: Arc<PhaseCell>,
    queue: Arc<HandoffQueue<Phase>>,
}

impl TrafficSignal {
    pub fn new() -> Self {
        Self {
            phase: Arc::new(PhaseCell::new(Phase::Red)),
            queue: Arc::new(HandoffQueue::new()),
        }
    }

    /// Launches the cycle thread and returns immediately.
    ///
    /// Call exactly once per signal: a second call starts a second cycle
    /// thread racing the first for the same phase cell. This precondition
    /// is documented, not enforced.
    pub fn start(&self) {
        let phase = Arc::clone(&self.phase);
        let queue = Arc::clone(&self.queue);
        thread::spawn(move || cycle_through_phases(&phase, &queue));
    }

    /// Latest committed phase, without blocking.
    pub fn current_phase(&self) -> Phase {
        self.phase.load()
    }

    /// Blocks the calling thread until the signal publishes green.
    ///
    /// Red values pulled from the queue are discarded and the wait resumes.
    /// There is no timeout, but the cycle thread publishes green again on
    /// every cycle, so each blocked waiter is eventually released. A green
    /// still sitting in the buffer from an earlier flip satisfies the wait
    /// immediately.
    pub fn wait_for_green(&self) {
        loop {
            if self.queue.receive() == Phase::Green {
                return;
            }
        }
    }
}

impl Default for TrafficSignal {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs forever: sleep out a random 4-6 s cycle, toggle, publish.
fn cycle_through_phases(phase: &PhaseCell, queue: &HandoffQueue<Phase>) {
    let mut rng = StdRng::from_os_rng();
    loop {
        let cycle_ms = rng.random_range(MIN_CYCLE_MS..=MAX_CYCLE_MS);
        thread::sleep(Duration::from_millis(cycle_ms));

        let next = phase.load().toggled();
        if next == Phase::Green {
            // The visible phase stays red until the hold elapses.
            thread::sleep(Duration::from_millis(GREEN_HOLD_MS));
        }
        phase.store(next);
        queue.send(next);
        debug!(?next, cycle_ms, "phase flipped");
    }
}
