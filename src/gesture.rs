//! Drag gesture handling - pointer position to bounded value.
//!
//! A drag adjusts either the outer radius or the padding. While a gesture is
//! active, the Euclidean distance from the pointer to the preview center is
//! mapped to a bounded value:
//!
//! - radius: `clamp(round(distance / 4), 0, 50)`
//! - padding: `clamp(round(distance / 6), 0, max_padding)`
//!
//! Each gesture is an explicit [`DragSession`]: created on pointer-down over
//! a handle, destroyed on pointer-up anywhere, owning its own throttle state.
//! There is no global listener registry; at most one session exists at a
//! time, so at most one kind of value is being adjusted.
//!
//! # Example
//!
//! ```ignore
//! use concentric::gesture::{DragKind, DragSession, PxPoint};
//!
//! let mut session = DragSession::begin(DragKind::Radius, PxPoint::new(100.0, 100.0));
//! if let Some(value) = session.pointer_moved(now, PxPoint::new(180.0, 100.0), max_padding) {
//!     store.set_outer_radius(value);
//! }
//! ```

use std::time::Instant;

use crate::throttle::Throttle;
use crate::types::{DRAG_RADIUS_MAX, PADDING_DRAG_DIVISOR, RADIUS_DRAG_DIVISOR};

// =============================================================================
// Pointer space
// =============================================================================

/// A point in the preview's pixel space.
///
/// Terminal cells are not square; the UI converts cell coordinates into this
/// space before calling into the gesture mapper so the drag divisors keep
/// their pixel meaning regardless of the cell aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PxPoint {
    pub x: f64,
    pub y: f64,
}

impl PxPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(self, other: PxPoint) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

// =============================================================================
// Pointer-to-value mapping
// =============================================================================

/// Which value an active drag adjusts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragKind {
    Radius,
    Padding,
}

/// Map drag distance to an outer radius: `clamp(round(d / 4), 0, 50)`.
pub fn map_radius(distance: f64) -> u16 {
    let value = (distance / RADIUS_DRAG_DIVISOR).round();
    (value as u16).min(DRAG_RADIUS_MAX)
}

/// Map drag distance to a padding: `clamp(round(d / 6), 0, max_padding)`.
pub fn map_padding(distance: f64, max_padding: u16) -> u16 {
    let value = (distance / PADDING_DRAG_DIVISOR).round();
    (value as u16).min(max_padding)
}

// =============================================================================
// Drag session
// =============================================================================

/// An active drag gesture.
///
/// Session lifecycle: idle -> active(kind) -> idle. The session exists only
/// while the pointer button is held; dropping it is the transition back to
/// idle. Updates are throttled to one per interval with the trailing position
/// kept pending (see [`crate::throttle`]).
#[derive(Debug)]
pub struct DragSession {
    kind: DragKind,
    center: PxPoint,
    throttle: Throttle<u16>,
}

impl DragSession {
    /// Start a gesture of the given kind around a fixed center point.
    pub fn begin(kind: DragKind, center: PxPoint) -> Self {
        Self {
            kind,
            center,
            throttle: Throttle::default(),
        }
    }

    /// Which value this session adjusts.
    pub fn kind(&self) -> DragKind {
        self.kind
    }

    /// Feed a pointer position at time `now`.
    ///
    /// Returns `Some(value)` when an update should be applied immediately;
    /// otherwise the mapped value is held as the pending trailing update.
    pub fn pointer_moved(&mut self, now: Instant, pos: PxPoint, max_padding: u16) -> Option<u16> {
        let value = self.map(pos, max_padding);
        self.throttle.submit(now, value)
    }

    /// Release the pending trailing update if its window has elapsed.
    ///
    /// Called once per event-loop tick while the session is active.
    pub fn flush(&mut self, now: Instant) -> Option<u16> {
        self.throttle.flush(now)
    }

    /// Final pending value, if any.
    ///
    /// Called when the gesture ends so the last in-window position is applied
    /// rather than dropped.
    pub fn finish(mut self) -> Option<u16> {
        self.throttle.take_pending()
    }

    fn map(&self, pos: PxPoint, max_padding: u16) -> u16 {
        let distance = self.center.distance_to(pos);
        match self.kind {
            DragKind::Radius => map_radius(distance),
            DragKind::Padding => map_padding(distance, max_padding),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_radius_mapping_at_origin() {
        assert_eq!(map_radius(0.0), 0);
    }

    #[test]
    fn test_radius_mapping_clamps_at_fifty() {
        // 200 / 4 = 50 is exactly the clamp boundary.
        assert_eq!(map_radius(200.0), 50);
        assert_eq!(map_radius(1000.0), 50);
    }

    #[test]
    fn test_radius_mapping_rounds() {
        assert_eq!(map_radius(10.0), 3); // 2.5 rounds up
        assert_eq!(map_radius(9.9), 2);
    }

    #[test]
    fn test_padding_mapping_clamps_at_max() {
        // Dimension 200 gives max_padding 90; 600 / 6 = 100 clamps to 90.
        assert_eq!(map_padding(600.0, 90), 90);
        assert_eq!(map_padding(0.0, 90), 0);
        assert_eq!(map_padding(300.0, 90), 50);
    }

    #[test]
    fn test_distance_is_euclidean() {
        let center = PxPoint::new(0.0, 0.0);
        let p = PxPoint::new(3.0, 4.0);
        assert!((center.distance_to(p) - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_session_applies_first_update_immediately() {
        let t0 = Instant::now();
        let center = PxPoint::new(100.0, 100.0);
        let mut session = DragSession::begin(DragKind::Radius, center);

        // 80 px to the right: 80 / 4 = 20.
        let value = session.pointer_moved(t0, PxPoint::new(180.0, 100.0), 90);
        assert_eq!(value, Some(20));
    }

    #[test]
    fn test_session_defers_second_update_within_window() {
        let t0 = Instant::now();
        let center = PxPoint::new(0.0, 0.0);
        let mut session = DragSession::begin(DragKind::Radius, center);

        assert!(session.pointer_moved(t0, PxPoint::new(40.0, 0.0), 90).is_some());

        // 5 ms later, still inside the 16 ms window: deferred.
        let t1 = t0 + Duration::from_millis(5);
        assert_eq!(session.pointer_moved(t1, PxPoint::new(80.0, 0.0), 90), None);

        // The trailing value is released once the window elapses.
        let t2 = t0 + Duration::from_millis(16);
        assert_eq!(session.flush(t2), Some(20));
    }

    #[test]
    fn test_session_finish_returns_last_pending() {
        let t0 = Instant::now();
        let center = PxPoint::new(0.0, 0.0);
        let mut session = DragSession::begin(DragKind::Padding, center);

        session.pointer_moved(t0, PxPoint::new(60.0, 0.0), 90);
        session.pointer_moved(t0 + Duration::from_millis(4), PxPoint::new(120.0, 0.0), 90);

        // Pointer-up applies the trailing position instead of dropping it.
        assert_eq!(session.finish(), Some(20));
    }

    #[test]
    fn test_session_kind() {
        let session = DragSession::begin(DragKind::Padding, PxPoint::new(0.0, 0.0));
        assert_eq!(session.kind(), DragKind::Padding);
    }
}
