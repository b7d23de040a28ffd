//! A self-cycling traffic signal and the blocking handoff queue it publishes
//! phase changes through.
//!
//! The signal flips between red and green on a randomized 4-6 s interval
//! (plus a fixed 2 s hold before each switch to green). Any number of
//! threads may block in [`TrafficSignal::wait_for_green`] until the next
//! green is published.

pub mod handoff;
pub mod phase;
pub mod signal;

pub use handoff::HandoffQueue;
pub use phase::Phase;
pub use signal::TrafficSignal;
