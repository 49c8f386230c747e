//! Trailing-edge throttle for high-frequency value updates.
//!
//! Pointer-move events arrive much faster than the UI needs to update. The
//! throttle lets the first value in a window through immediately and holds
//! the newest late arrival as a pending value; the event tick flushes it once
//! the window elapses, so the last position of a burst is never dropped.
//!
//! There is no timer thread: the caller's loop already ticks at the throttle
//! interval and calls [`Throttle::flush`] each pass. At most one value is
//! pending at a time; a newer submission replaces it.
//!
//! # Example
//!
//! ```ignore
//! use std::time::{Duration, Instant};
//! use concentric::throttle::Throttle;
//!
//! let mut throttle = Throttle::new(Duration::from_millis(16));
//! let t0 = Instant::now();
//!
//! assert_eq!(throttle.submit(t0, 10), Some(10));       // leading edge fires
//! assert_eq!(throttle.submit(t0, 11), None);           // held as pending
//! assert_eq!(throttle.flush(t0 + throttle.interval()), Some(11));
//! ```

use std::time::{Duration, Instant};

/// Default window, one update per frame at ~60 fps.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(16);

/// A trailing-edge rate limiter over values of type `T`.
///
/// Time is always passed in by the caller, which keeps the throttle
/// deterministic under test.
#[derive(Debug)]
pub struct Throttle<T> {
    interval: Duration,
    last_fire: Option<Instant>,
    pending: Option<T>,
}

impl<T: Copy> Throttle<T> {
    /// Create a throttle with the given window.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_fire: None,
            pending: None,
        }
    }

    /// The throttle window.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Submit a value at time `now`.
    ///
    /// Returns `Some(value)` if the value may be applied immediately (the
    /// window is open), otherwise stores it as the pending value, replacing
    /// any previous pending value, and returns `None`.
    pub fn submit(&mut self, now: Instant, value: T) -> Option<T> {
        if self.window_open(now) {
            self.last_fire = Some(now);
            self.pending = None;
            Some(value)
        } else {
            self.pending = Some(value);
            None
        }
    }

    /// Release the pending value if the window has reopened.
    ///
    /// Call once per event-loop tick. Returns `Some(value)` at most once per
    /// submitted burst.
    pub fn flush(&mut self, now: Instant) -> Option<T> {
        if self.pending.is_some() && self.window_open(now) {
            self.last_fire = Some(now);
            self.pending.take()
        } else {
            None
        }
    }

    /// Remove and return the pending value regardless of the window.
    ///
    /// Used when a gesture ends: the final position is applied immediately
    /// rather than waiting for the next tick.
    pub fn take_pending(&mut self) -> Option<T> {
        self.pending.take()
    }

    /// True if a value is waiting for the window to reopen.
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Forget all timing and pending state.
    pub fn reset(&mut self) {
        self.last_fire = None;
        self.pending = None;
    }

    fn window_open(&self, now: Instant) -> bool {
        match self.last_fire {
            None => true,
            Some(last) => now.duration_since(last) >= self.interval,
        }
    }
}

impl<T: Copy> Default for Throttle<T> {
    fn default() -> Self {
        Self::new(DEFAULT_INTERVAL)
    }
}

// =============================================================================
// Tests
// =============================================================================
