//! Region map - coordinate-to-region lookup for mouse events.
//!
//! A grid the size of the screen where each cell names the interactive
//! region under it, if any. The composition layer fills it while drawing, so
//! hit-testing is a single indexed read and can never disagree with what was
//! actually drawn.

use crate::export::{ExportFormat, QuickValue};
use crate::ui::{PanelTab, SliderId};

// =============================================================================
// Regions
// =============================================================================

/// An interactive area of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// Outer border of the preview; dragging adjusts the radius.
    RadiusHandle,
    /// Ring between the outer and inner shapes; dragging adjusts padding.
    PaddingRing,
    /// The per-corner mode toggle row.
    CornerToggle,
    /// A panel tab header.
    Tab(PanelTab),
    /// A slider track; clicking or dragging sets the value by position.
    Slider(SliderId),
    /// A preset button, by catalog index.
    Preset(usize),
    /// An export format button.
    Export(ExportFormat),
    /// A quick-copy value button.
    Quick(QuickValue),
}

// =============================================================================
// RegionMap
// =============================================================================

/// Screen-sized grid mapping cells to regions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionMap {
    width: u16,
    height: u16,
    cells: Vec<Option<Region>>,
}

impl RegionMap {
    /// Create an empty map with the given dimensions.
    pub fn new(width: u16, height: u16) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            cells: vec![None; size],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Clear all cells.
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Assign a region to every cell of a rectangle, clipped to the map.
    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, region: Region) {
        self.write_rect(x, y, w, h, Some(region));
    }

    /// Remove any region from a rectangle (e.g. the inert inside of the
    /// preview's inner shape).
    pub fn clear_rect(&mut self, x: u16, y: u16, w: u16, h: u16) {
        self.write_rect(x, y, w, h, None);
    }

    fn write_rect(&mut self, x: u16, y: u16, w: u16, h: u16, value: Option<Region>) {
        for cy in y..y.saturating_add(h).min(self.height) {
            for cx in x..x.saturating_add(w).min(self.width) {
                let idx = self.index(cx, cy);
                self.cells[idx] = value;
            }
        }
    }

    /// The region under a position, if any.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<Region> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells[self.index(x, y)]
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_map() {
        let map = RegionMap::new(10, 10);
        assert_eq!(map.hit_test(5, 5), None);
    }

    #[test]
    fn test_fill_rect_and_hit_test() {
        let mut map = RegionMap::new(10, 10);
        map.fill_rect(2, 2, 4, 4, Region::RadiusHandle);

        assert_eq!(map.hit_test(2, 2), Some(Region::RadiusHandle));
        assert_eq!(map.hit_test(5, 5), Some(Region::RadiusHandle));
        assert_eq!(map.hit_test(6, 2), None);
        assert_eq!(map.hit_test(1, 2), None);
    }

    #[test]
    fn test_later_fill_wins() {
        let mut map = RegionMap::new(10, 10);
        map.fill_rect(0, 0, 10, 10, Region::PaddingRing);
        map.fill_rect(0, 0, 10, 1, Region::RadiusHandle);

        assert_eq!(map.hit_test(4, 0), Some(Region::RadiusHandle));
        assert_eq!(map.hit_test(4, 1), Some(Region::PaddingRing));
    }

    #[test]
    fn test_clear_rect_punches_hole() {
        let mut map = RegionMap::new(10, 10);
        map.fill_rect(0, 0, 10, 10, Region::PaddingRing);
        map.clear_rect(3, 3, 4, 4);

        assert_eq!(map.hit_test(4, 4), None);
        assert_eq!(map.hit_test(2, 2), Some(Region::PaddingRing));
    }

    #[test]
    fn test_out_of_bounds() {
        let mut map = RegionMap::new(10, 10);
        map.fill_rect(8, 8, 10, 10, Region::CornerToggle); // clips

        assert_eq!(map.hit_test(9, 9), Some(Region::CornerToggle));
        assert_eq!(map.hit_test(10, 9), None);
        assert_eq!(map.hit_test(9, 10), None);
    }

    #[test]
    fn test_clear_all() {
        let mut map = RegionMap::new(4, 4);
        map.fill_rect(0, 0, 4, 4, Region::Preset(3));
        map.clear();
        assert_eq!(map.hit_test(0, 0), None);
    }
}
