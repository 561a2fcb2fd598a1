//! Timestamp-derived record ids
//!
//! Needs and store products are keyed by the millisecond timestamp of their
//! creation. Two records created in the same millisecond must still get
//! different ids, so the generator hands out `max(now_ms, last + 1)`.

use std::sync::atomic::{AtomicI64, Ordering};

/// Issues strictly increasing, timestamp-derived ids.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: AtomicI64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next id: the current Unix time in milliseconds, bumped past the
    /// previously issued id when the clock hasn't moved.
    pub fn next_id(&self) -> i64 {
        let now = chrono::Utc::now().timestamp_millis();
        let mut current = self.last.load(Ordering::Relaxed);
        loop {
            let candidate = now.max(current + 1);
            match self.last.compare_exchange_weak(
                current,
                candidate,
                Ordering::AcqRel,
                Ordering::Relaxed,
            ) {
                Ok(_) => return candidate,
                Err(actual) => current = actual,
            }
        }
    }
}
