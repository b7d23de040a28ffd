//! Blocking handoff queue between the cycle thread and waiting threads.

use std::sync::{Condvar, Mutex, PoisonError};

/// Unbounded buffer with blocking retrieval of the most recently sent value.
///
/// One producer pushes values; any number of consumers block in [`receive`]
/// until a value is available. Retrieval is LIFO, which is wrong for a
/// general broadcast channel: under multiple queued values or multiple
/// concurrent consumers, a consumer may see a stale value. It is safe here
/// because the single producer publishes unboundedly often and consumers
/// discard values they are not waiting for.
///
/// [`receive`]: HandoffQueue::receive
#[derive(Debug)]
pub struct HandoffQueue<T> {
    buffer: Mutex<Vec<T>>,
    ready: Condvar,
}

impl<T> HandoffQueue<T> {
    pub fn new() -> Self {
        Self {
            buffer: Mutex::new(Vec::new()),
            ready: Condvar::new(),
        }
    }

    /// Appends `value` and wakes one blocked receiver.
    ///
    /// Never blocks beyond the buffer lock; the buffer is unbounded, so
    /// there is no backpressure and no failure path.
    pub fn send(&self, value: T) {
        let mut buffer = self.buffer.lock().unwrap_or_else(PoisonError::into_inner);
        buffer.push(value);
        drop(buffer);
        self.ready.notify_one();
    }

    /// Blocks until the buffer is non-empty, then removes and returns the
    /// most recently sent element.
    ///
    /// There is no timeout and no cancellation: a call that never sees a
    /// matching send waits for the life of the thread. The wait loop
    /// re-checks the buffer on every wakeup, so spurious condvar wakeups
    /// cannot produce an early return.
    pub fn receive(&self) -> T {
        let mut buffer = self.buffer.lock().unwrap_or_else(PoisonError::into_inner);
        loop {
            if let Some(value) = buffer.pop() {
                return value;
            }
            buffer = self
                .ready
                .wait(buffer)
                .unwrap_or_else(PoisonError::into_inner);
        }
    }
}

impl<T> Default for HandoffQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
