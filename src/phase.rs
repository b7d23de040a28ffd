use std::sync::atomic::{AtomicU8, Ordering};

/// The two light states a signal cycles through.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Red,
    Green,
}

impl Phase {
    /// The phase the cycle thread switches to next.
    pub fn toggled(self) -> Phase {
        match self {
            Phase::Red => Phase::Green,
            Phase::Green => Phase::Red,
        }
    }
}

const RED: u8 = 0;
const GREEN: u8 = 1;

/// Atomically readable cell holding the current [`Phase`].
///
/// Written by exactly one thread (the cycle loop) and read by any number of
/// others. A one-byte atomic with Release stores and Acquire loads is enough
/// for that single-writer shape; readers never block.
#[derive(Debug)]
pub struct PhaseCell(AtomicU8);

impl PhaseCell {
    pub fn new(phase: Phase) -> Self {
        Self(AtomicU8::new(encode(phase)))
    }

    pub fn store(&self, phase: Phase) {
        self.0.store(encode(phase), Ordering::Release);
    }

    pub fn load(&self) -> Phase {
        decode(self.0.load(Ordering::Acquire))
    }
}

fn encode(phase: Phase) -> u8 {
    match phase {
        Phase::Red => RED,
        Phase::Green => GREEN,
    }
}

fn decode(raw: u8) -> Phase {
    match raw {
        GREEN => Phase::Green,
        _ => Phase::Red,
    }
}
