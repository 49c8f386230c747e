//! Reactive value store for the calculator.
//!
//! Inputs (outer radius, padding, dimension, per-corner radii) live in
//! signals; derived values (inner radius, per-corner inner radii, padding
//! ceiling) are pure functions of them, recomputed on read or subscribed to
//! through a derived snapshot. Every setter clamps; nothing is ever rejected.
//!
//! # API
//!
//! - `RadiusStore::new()` - store with the fixed defaults
//! - `set_outer_radius` / `set_padding` / `set_dimension` / `set_corner_radius`
//! - `set_per_corner` - toggle uniform vs. per-corner mode
//! - `apply_preset` - overwrite radius, padding and dimension atomically
//! - `snapshot` - read-only view for renderers and exporters
//! - `snapshot_derived` - reactive view that re-derives when any input changes

use spark_signals::{derived, signal, Derived, Signal};

use crate::presets::PresetConfig;
use crate::types::{
    Corner, CornerRadii, DIMENSION_MAX, DIMENSION_MIN, PADDING_MARGIN, RADIUS_MAX,
};

// =============================================================================
// Defaults
// =============================================================================

pub const DEFAULT_RADIUS: u16 = 30;
pub const DEFAULT_PADDING: u16 = 20;
pub const DEFAULT_DIMENSION: u16 = 200;

// =============================================================================
// Derivation functions
// =============================================================================

/// The one formula everything here exists to demonstrate:
/// `inner = max(0, outer - padding)`.
pub fn inner_radius(outer: u16, padding: u16) -> u16 {
    outer.saturating_sub(padding)
}

/// Padding ceiling for a container: `floor(dimension / 2) - 10`.
pub fn max_padding(dimension: u16) -> u16 {
    (dimension / 2).saturating_sub(PADDING_MARGIN)
}

// =============================================================================
// Snapshot
// =============================================================================

/// Read-only view of the store at one instant.
///
/// `corners` holds the effective per-corner radii: in uniform mode all four
/// equal `outer_radius`, so consumers never need to branch on the mode to
/// draw or export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    pub outer_radius: u16,
    pub padding: u16,
    pub dimension: u16,
    pub per_corner: bool,
    pub corners: CornerRadii,
    pub inner_radius: u16,
    pub corner_inner: CornerRadii,
    pub max_padding: u16,
}

// =============================================================================
// Store
// =============================================================================

/// The reactive value store.
///
/// Cloning is cheap and shares the underlying signals.
#[derive(Debug, Clone)]
pub struct RadiusStore {
    outer_radius: Signal<u16>,
    padding: Signal<u16>,
    dimension: Signal<u16>,
    per_corner: Signal<bool>,
    corners: Signal<CornerRadii>,
}

impl RadiusStore {
    /// Create a store with the fixed UI defaults.
    pub fn new() -> Self {
        Self {
            outer_radius: signal(DEFAULT_RADIUS),
            padding: signal(DEFAULT_PADDING),
            dimension: signal(DEFAULT_DIMENSION),
            per_corner: signal(false),
            corners: signal(CornerRadii::uniform(DEFAULT_RADIUS)),
        }
    }

    // -------------------------------------------------------------------------
    // Reads
    // -------------------------------------------------------------------------

    pub fn outer_radius(&self) -> u16 {
        self.outer_radius.get()
    }

    pub fn padding(&self) -> u16 {
        self.padding.get()
    }

    pub fn dimension(&self) -> u16 {
        self.dimension.get()
    }

    pub fn per_corner(&self) -> bool {
        self.per_corner.get()
    }

    /// The raw per-corner record (meaningful in per-corner mode).
    pub fn corners(&self) -> CornerRadii {
        self.corners.get()
    }

    /// Derived inner radius for the uniform value.
    pub fn inner_radius(&self) -> u16 {
        inner_radius(self.outer_radius.get(), self.padding.get())
    }

    /// Current padding ceiling.
    pub fn max_padding(&self) -> u16 {
        max_padding(self.dimension.get())
    }

    /// Corner radii in effect: the per-corner record, or the uniform radius
    /// fanned out to all four corners.
    pub fn effective_corners(&self) -> CornerRadii {
        if self.per_corner.get() {
            self.corners.get()
        } else {
            CornerRadii::uniform(self.outer_radius.get())
        }
    }

    /// Derived inner radii per corner.
    pub fn corner_inner_radii(&self) -> CornerRadii {
        self.effective_corners().inset(self.padding.get())
    }

    /// Read-only view of everything at once.
    pub fn snapshot(&self) -> Snapshot {
        compose_snapshot(
            self.outer_radius.get(),
            self.padding.get(),
            self.dimension.get(),
            self.per_corner.get(),
            self.corners.get(),
        )
    }

    /// Reactive snapshot: re-derives whenever any input signal changes.
    ///
    /// Consumers that render on change subscribe here; one derived carries
    /// every value the presentation layer needs.
    pub fn snapshot_derived(&self) -> Derived<Snapshot> {
        let outer_radius = self.outer_radius.clone();
        let padding = self.padding.clone();
        let dimension = self.dimension.clone();
        let per_corner = self.per_corner.clone();
        let corners = self.corners.clone();

        derived(move || {
            compose_snapshot(
                outer_radius.get(),
                padding.get(),
                dimension.get(),
                per_corner.get(),
                corners.get(),
            )
        })
    }

    // -------------------------------------------------------------------------
    // Writes (all clamping, never rejecting)
    // -------------------------------------------------------------------------

    /// Set the uniform outer radius, clamped to `0..=100`.
    ///
    /// In per-corner mode the uniform value fans out to all four corners.
    pub fn set_outer_radius(&self, value: u16) {
        let value = value.min(RADIUS_MAX);
        self.outer_radius.set(value);
        if self.per_corner.get() {
            self.corners.set(CornerRadii::uniform(value));
        }
    }

    /// Set the padding, clamped to the current ceiling.
    pub fn set_padding(&self, value: u16) {
        self.padding.set(value.min(self.max_padding()));
    }

    /// Set the container dimension, clamped to `100..=500`.
    ///
    /// Shrinking the container lowers the padding ceiling, so padding is
    /// re-clamped here to keep the invariant `padding <= max_padding`.
    pub fn set_dimension(&self, value: u16) {
        let value = value.clamp(DIMENSION_MIN, DIMENSION_MAX);
        self.dimension.set(value);

        let ceiling = max_padding(value);
        if self.padding.get() > ceiling {
            self.padding.set(ceiling);
        }
    }

    /// Set one corner's radius, clamped to `0..=100`.
    pub fn set_corner_radius(&self, corner: Corner, value: u16) {
        let mut corners = self.corners.get();
        corners.set(corner, value.min(RADIUS_MAX));
        self.corners.set(corners);
    }

    /// Toggle per-corner mode.
    ///
    /// Entering the mode seeds all four corners with the current uniform
    /// radius. Leaving it retains the last uniform value; the corner record
    /// is left as-is until the mode is re-entered.
    pub fn set_per_corner(&self, enabled: bool) {
        if enabled && !self.per_corner.get() {
            self.corners
                .set(CornerRadii::uniform(self.outer_radius.get()));
        }
        self.per_corner.set(enabled);
    }

    /// Overwrite radius, padding and dimension from a preset.
    ///
    /// Dimension is written first so the padding clamp sees the new ceiling;
    /// no intermediate state violates the invariants. In per-corner mode the
    /// preset radius fans out to all four corners.
    pub fn apply_preset(&self, preset: &PresetConfig) {
        self.set_dimension(preset.dimension);
        self.set_padding(preset.padding);
        self.set_outer_radius(preset.outer_radius);
    }
}

impl Default for RadiusStore {
    fn default() -> Self {
        Self::new()
    }
}

fn compose_snapshot(
    outer_radius: u16,
    padding: u16,
    dimension: u16,
    per_corner: bool,
    corners: CornerRadii,
) -> Snapshot {
    let effective = if per_corner {
        corners
    } else {
        CornerRadii::uniform(outer_radius)
    };

    Snapshot {
        outer_radius,
        padding,
        dimension,
        per_corner,
        corners: effective,
        inner_radius: inner_radius(outer_radius, padding),
        corner_inner: effective.inset(padding),
        max_padding: max_padding(dimension),
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets::DESIGN_PRESETS;

    #[test]
    fn test_defaults() {
        let store = RadiusStore::new();
        assert_eq!(store.outer_radius(), 30);
        assert_eq!(store.padding(), 20);
        assert_eq!(store.dimension(), 200);
        assert!(!store.per_corner());
        assert_eq!(store.corners(), CornerRadii::uniform(30));
    }

    #[test]
    fn test_inner_radius_formula() {
        assert_eq!(inner_radius(30, 20), 10);
        assert_eq!(inner_radius(20, 30), 0); // floors at zero
        assert_eq!(inner_radius(0, 0), 0);

        // inner <= outer for all non-negative inputs.
        for outer in [0u16, 1, 17, 50, 100] {
            for padding in [0u16, 1, 25, 90] {
                assert!(inner_radius(outer, padding) <= outer);
            }
        }
    }

    #[test]
    fn test_max_padding_nonnegative_over_valid_dimensions() {
        for dimension in (DIMENSION_MIN..=DIMENSION_MAX).step_by(50) {
            assert_eq!(max_padding(dimension), dimension / 2 - 10);
        }
        assert_eq!(max_padding(200), 90);
        assert_eq!(max_padding(100), 40);
    }

    #[test]
    fn test_setters_clamp() {
        let store = RadiusStore::new();

        store.set_outer_radius(250);
        assert_eq!(store.outer_radius(), RADIUS_MAX);

        store.set_padding(1000);
        assert_eq!(store.padding(), store.max_padding());

        store.set_dimension(50);
        assert_eq!(store.dimension(), DIMENSION_MIN);
        store.set_dimension(9999);
        assert_eq!(store.dimension(), DIMENSION_MAX);
    }

    #[test]
    fn test_dimension_shrink_reclamps_padding() {
        let store = RadiusStore::new();
        store.set_padding(90); // ceiling for dimension 200

        store.set_dimension(100); // ceiling drops to 40
        assert_eq!(store.padding(), 40);
        assert!(store.padding() <= store.max_padding());
    }

    #[test]
    fn test_derivation_tracks_inputs() {
        let store = RadiusStore::new();
        assert_eq!(store.inner_radius(), 10);

        store.set_padding(35);
        assert_eq!(store.inner_radius(), 0);

        store.set_outer_radius(80);
        assert_eq!(store.inner_radius(), 45);
    }

    #[test]
    fn test_per_corner_toggle_seeds_from_uniform() {
        let store = RadiusStore::new();
        store.set_outer_radius(24);

        store.set_per_corner(true);
        assert_eq!(store.corners(), CornerRadii::uniform(24));

        store.set_corner_radius(Corner::TopLeft, 4);
        assert_eq!(store.corners().top_left, 4);
        assert_eq!(store.corners().top_right, 24);
    }

    #[test]
    fn test_leaving_per_corner_retains_uniform_value() {
        let store = RadiusStore::new();
        store.set_per_corner(true);
        store.set_corner_radius(Corner::BottomRight, 99);

        store.set_per_corner(false);
        // Uniform radius is whatever it last was, not an average of corners.
        assert_eq!(store.outer_radius(), 30);
        assert_eq!(store.effective_corners(), CornerRadii::uniform(30));
    }

    #[test]
    fn test_uniform_write_fans_out_in_per_corner_mode() {
        let store = RadiusStore::new();
        store.set_per_corner(true);
        store.set_corner_radius(Corner::TopRight, 2);

        store.set_outer_radius(40);
        assert_eq!(store.corners(), CornerRadii::uniform(40));
    }

    #[test]
    fn test_corner_inner_radii() {
        let store = RadiusStore::new();
        store.set_per_corner(true);
        store.set_corner_radius(Corner::TopLeft, 40);
        store.set_corner_radius(Corner::TopRight, 10);
        store.set_padding(15);

        let inner = store.corner_inner_radii();
        assert_eq!(inner.top_left, 25);
        assert_eq!(inner.top_right, 0);
        assert_eq!(inner.bottom_right, 15); // seeded 30 - 15
    }

    #[test]
    fn test_apply_preset_is_idempotent() {
        let store = RadiusStore::new();
        let preset = &DESIGN_PRESETS[0];

        store.apply_preset(preset);
        let first = store.snapshot();

        store.apply_preset(preset);
        assert_eq!(store.snapshot(), first);
    }

    #[test]
    fn test_apply_preset_overwrites_all_three_values() {
        let store = RadiusStore::new();
        store.set_outer_radius(99);
        store.set_padding(5);
        store.set_dimension(500);

        let preset = &DESIGN_PRESETS[2]; // iOS Modal: 16 / 24 / 180
        store.apply_preset(preset);

        assert_eq!(store.outer_radius(), 16);
        assert_eq!(store.padding(), 24);
        assert_eq!(store.dimension(), 180);
    }

    #[test]
    fn test_apply_preset_seeds_corners_in_per_corner_mode() {
        let store = RadiusStore::new();
        store.set_per_corner(true);
        store.set_corner_radius(Corner::BottomLeft, 77);

        store.apply_preset(&DESIGN_PRESETS[0]); // radius 8
        assert_eq!(store.corners(), CornerRadii::uniform(8));
    }

    #[test]
    fn test_snapshot_composes_effective_corners() {
        let store = RadiusStore::new();
        let snap = store.snapshot();

        assert_eq!(snap.corners, CornerRadii::uniform(30));
        assert_eq!(snap.inner_radius, 10);
        assert_eq!(snap.corner_inner, CornerRadii::uniform(10));
        assert_eq!(snap.max_padding, 90);
        assert!(!snap.per_corner);
    }

    #[test]
    fn test_snapshot_derived_recomputes_on_input_change() {
        let store = RadiusStore::new();
        let snapshot = store.snapshot_derived();

        assert_eq!(snapshot.get().inner_radius, 10);

        store.set_padding(25);
        assert_eq!(snapshot.get().inner_radius, 5);

        store.set_dimension(100);
        assert_eq!(snapshot.get().max_padding, 40);
        assert_eq!(snapshot.get().padding, 25);
    }
}
