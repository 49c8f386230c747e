//! Screen composition.
//!
//! `compose` is a pure function from (model snapshot, view state, terminal
//! size) to a [`ScreenFrame`]: the cell buffer to display plus the region map
//! for hit-testing plus the preview center the gesture mapper measures
//! distances from. It sits behind a derived, so it re-runs exactly when one
//! of its inputs changes.
//!
//! Layout is fixed: the preview fills the left of the screen, a 38-column
//! panel with three tabs sits on the right, and the last row is a key-hint
//! footer.

use crossterm::style::Color;

use crate::export::{quick_value, ExportFormat, QuickValue};
use crate::gesture::{DragKind, PxPoint};
use crate::model::Snapshot;
use crate::presets::{Category, DESIGN_PRESETS};
use crate::types::{Corner, DIMENSION_MAX, DIMENSION_MIN, RADIUS_MAX};
use crate::ui::buffer::{Attr, FrameBuffer};
use crate::ui::regions::{Region, RegionMap};
use crate::ui::{CopyTarget, PanelTab, SliderId, UiView, CELL_PX_X, CELL_PX_Y};

// =============================================================================
// Layout constants
// =============================================================================

/// Width of the right-hand control panel.
pub const PANEL_WIDTH: u16 = 38;

const TEXT: Color = Color::Reset;
const MUTED: Color = Color::DarkGrey;
const ACCENT: Color = Color::Cyan;
const OUTER_COLOR: Color = Color::Green;
const INNER_COLOR: Color = Color::Blue;
const COPIED_COLOR: Color = Color::Yellow;

// =============================================================================
// Screen frame
// =============================================================================

/// One composed screen: cells, hit regions, and the preview center in pixel
/// space (the reference point for drag distance).
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenFrame {
    pub buffer: FrameBuffer,
    pub regions: RegionMap,
    pub preview_center: PxPoint,
}

/// Compose the full screen.
pub fn compose(snap: &Snapshot, view: &UiView, width: u16, height: u16) -> ScreenFrame {
    let mut buffer = FrameBuffer::new(width, height);
    let mut regions = RegionMap::new(width, height);

    let panel_x = width.saturating_sub(PANEL_WIDTH);

    let preview_center = draw_preview(&mut buffer, &mut regions, snap, view, panel_x, height);
    draw_panel(&mut buffer, &mut regions, snap, view, panel_x, height);
    draw_footer(&mut buffer, height, width);

    ScreenFrame {
        buffer,
        regions,
        preview_center,
    }
}

// =============================================================================
// Preview
// =============================================================================

fn draw_preview(
    buffer: &mut FrameBuffer,
    regions: &mut RegionMap,
    snap: &Snapshot,
    view: &UiView,
    panel_x: u16,
    height: u16,
) -> PxPoint {
    // Scale the pixel dimension into cells (4 px/col, 8 px/row keeps the
    // square square on screen) and clamp to the available area.
    let avail_w = panel_x.saturating_sub(4);
    let avail_h = height.saturating_sub(5);

    let box_w = ((snap.dimension as f64 / CELL_PX_X) as u16)
        .min(avail_w)
        .max(2);
    let box_h = ((snap.dimension as f64 / CELL_PX_Y) as u16)
        .min(avail_h)
        .max(2);

    let x0 = panel_x.saturating_sub(box_w) / 2;
    let y0 = (height.saturating_sub(1).saturating_sub(box_h) / 2).max(1);

    let center = PxPoint::new(
        (x0 as f64 + box_w as f64 / 2.0) * CELL_PX_X,
        (y0 as f64 + box_h as f64 / 2.0) * CELL_PX_Y,
    );

    if avail_w < 8 || avail_h < 6 {
        return center; // terminal too small for a preview
    }

    // Outer radius label above, padding label below.
    let outer_label = format!("{}px", snap.outer_radius);
    let label_x = x0 + box_w.saturating_sub(outer_label.len() as u16) / 2;
    buffer.draw_text(label_x, y0.saturating_sub(1), &outer_label, OUTER_COLOR, Attr::BOLD);

    let pad_label = format!("{}px", snap.padding);
    let pad_x = x0 + box_w.saturating_sub(pad_label.len() as u16) / 2;
    buffer.draw_text(pad_x, y0 + box_h, &pad_label, MUTED, Attr::BOLD);

    // Hit regions: a one-cell halo plus the border adjust the radius, the
    // ring inside adjusts padding, the inner shape's interior is inert.
    regions.fill_rect(
        x0.saturating_sub(1),
        y0.saturating_sub(1),
        box_w + 2,
        box_h + 2,
        Region::RadiusHandle,
    );
    if box_w > 2 && box_h > 2 {
        regions.fill_rect(x0 + 1, y0 + 1, box_w - 2, box_h - 2, Region::PaddingRing);
    }

    // Outer shape.
    let outer_fg = if view.dragging == Some(DragKind::Radius) {
        ACCENT
    } else {
        MUTED
    };
    buffer.draw_box(x0, y0, box_w, box_h, &snap.corners, outer_fg);

    // Inner shape, inset by the padding (scaled; at least one cell once any
    // padding exists so the ring stays visible).
    let mut inset_x = (snap.padding as f64 / CELL_PX_X) as u16;
    let mut inset_y = (snap.padding as f64 / CELL_PX_Y) as u16;
    if snap.padding > 0 {
        inset_x = inset_x.max(1);
        inset_y = inset_y.max(1);
    }

    let inner_w = box_w.saturating_sub(inset_x * 2);
    let inner_h = box_h.saturating_sub(inset_y * 2);

    if inner_w >= 2 && inner_h >= 2 {
        let ix = x0 + inset_x;
        let iy = y0 + inset_y;

        let inner_fg = if view.dragging == Some(DragKind::Padding) {
            ACCENT
        } else {
            INNER_COLOR
        };
        buffer.draw_box(ix, iy, inner_w, inner_h, &snap.corner_inner, inner_fg);

        // Inside the inner shape nothing is draggable.
        if inner_w > 2 && inner_h > 2 {
            regions.clear_rect(ix + 1, iy + 1, inner_w - 2, inner_h - 2);
        }

        // Derived inner radius, centered in the inner shape.
        if inner_h >= 3 {
            let inner_label = format!("{}px", snap.inner_radius);
            let lx = ix + inner_w.saturating_sub(inner_label.len() as u16) / 2;
            let ly = iy + inner_h / 2;
            buffer.draw_text(lx, ly, &inner_label, INNER_COLOR, Attr::BOLD);
        }
    }

    center
}

// =============================================================================
// Panel
// =============================================================================

fn draw_panel(
    buffer: &mut FrameBuffer,
    regions: &mut RegionMap,
    snap: &Snapshot,
    view: &UiView,
    panel_x: u16,
    height: u16,
) {
    // Separator column.
    for y in 0..height.saturating_sub(1) {
        buffer.put(panel_x, y, '│', MUTED, Attr::NONE);
    }

    // Tab headers.
    let mut x = panel_x + 2;
    for tab in PanelTab::ALL {
        let label = tab.label();
        let (fg, attrs) = if tab == view.active_tab {
            (ACCENT, Attr::BOLD | Attr::UNDERLINE)
        } else {
            (MUTED, Attr::NONE)
        };
        regions.fill_rect(x, 1, label.len() as u16, 1, Region::Tab(tab));
        x = buffer.draw_text(x, 1, label, fg, attrs) + 3;
    }

    match view.active_tab {
        PanelTab::Controls => draw_controls_tab(buffer, regions, snap, view, panel_x),
        PanelTab::Info => draw_info_tab(buffer, snap, panel_x),
        PanelTab::Export => draw_export_tab(buffer, regions, snap, view, panel_x),
    }
}

fn draw_controls_tab(
    buffer: &mut FrameBuffer,
    regions: &mut RegionMap,
    snap: &Snapshot,
    view: &UiView,
    panel_x: u16,
) {
    let cx = panel_x + 2;
    let content_w = PANEL_WIDTH - 4;
    let mut y = 3;

    // Per-corner toggle.
    let mark = if snap.per_corner { 'x' } else { ' ' };
    buffer.draw_text(cx, y, &format!("[{mark}] Individual corners"), TEXT, Attr::NONE);
    regions.fill_rect(cx, y, content_w, 1, Region::CornerToggle);
    y += 2;

    // Radius sliders: one uniform, or four corners.
    if snap.per_corner {
        for corner in Corner::ALL {
            y = draw_slider(buffer, regions, snap, view, SliderId::CornerRadius(corner), panel_x, y);
        }
    } else {
        y = draw_slider(buffer, regions, snap, view, SliderId::Radius, panel_x, y);
    }
    y = draw_slider(buffer, regions, snap, view, SliderId::Padding, panel_x, y);
    y = draw_slider(buffer, regions, snap, view, SliderId::Dimension, panel_x, y);

    // Values summary: outer / padding / inner.
    let mut sx = cx;
    sx = buffer.draw_text(sx, y, &format!("{}px", snap.outer_radius), OUTER_COLOR, Attr::BOLD);
    sx = buffer.draw_text(sx + 2, y, &format!("{}px", snap.padding), MUTED, Attr::BOLD);
    buffer.draw_text(sx + 2, y, &format!("{}px", snap.inner_radius), INNER_COLOR, Attr::BOLD);
    y += 2;

    // Preset catalog, grouped by category.
    buffer.draw_text(cx, y, "Design System Presets", TEXT, Attr::BOLD);
    y += 1;

    for category in Category::ALL {
        buffer.draw_text(cx, y, category.label(), MUTED, Attr::UNDERLINE);
        y += 1;

        for (index, preset) in DESIGN_PRESETS.iter().enumerate() {
            if preset.category != category {
                continue;
            }
            let radius = format!("{}px", preset.outer_radius);
            buffer.draw_text(cx + 1, y, preset.name, TEXT, Attr::NONE);
            buffer.draw_text(
                cx + content_w.saturating_sub(radius.len() as u16 + 1),
                y,
                &radius,
                MUTED,
                Attr::NONE,
            );
            regions.fill_rect(cx, y, content_w, 1, Region::Preset(index));
            y += 1;
        }
    }
}

fn draw_info_tab(buffer: &mut FrameBuffer, snap: &Snapshot, panel_x: u16) {
    let cx = panel_x + 2;
    let mut y = 3;

    buffer.draw_text(cx, y, "Why the formula works", TEXT, Attr::BOLD);
    y += 2;
    buffer.draw_text(cx, y, "inner = max(0, outer - padding)", ACCENT, Attr::BOLD);
    y += 2;

    buffer.draw_text(cx, y, "Outer radius:", TEXT, Attr::NONE);
    buffer.draw_text(cx + 15, y, &format!("{}px", snap.outer_radius), OUTER_COLOR, Attr::NONE);
    y += 1;
    buffer.draw_text(cx, y, "Padding:", TEXT, Attr::NONE);
    buffer.draw_text(cx + 15, y, &format!("{}px", snap.padding), MUTED, Attr::NONE);
    y += 1;
    buffer.draw_text(cx, y, "Inner radius:", TEXT, Attr::NONE);
    buffer.draw_text(
        cx + 15,
        y,
        &format!("{} - {} = {}px", snap.outer_radius, snap.padding, snap.inner_radius),
        INNER_COLOR,
        Attr::NONE,
    );
    y += 2;

    for line in [
        "Reusing the outer radius inside the",
        "padding makes the inner shape look",
        "like it floats in its container.",
        "Subtracting the padding keeps both",
        "curves concentric.",
    ] {
        buffer.draw_text(cx, y, line, MUTED, Attr::NONE);
        y += 1;
    }
}

fn draw_export_tab(
    buffer: &mut FrameBuffer,
    regions: &mut RegionMap,
    snap: &Snapshot,
    view: &UiView,
    panel_x: u16,
) {
    let cx = panel_x + 2;
    let content_w = PANEL_WIDTH - 4;
    let mut y = 3;

    buffer.draw_text(cx, y, "Quick copy", TEXT, Attr::BOLD);
    y += 1;

    for which in QuickValue::ALL {
        let line = format!("{}: {}", which.label(), quick_value(which, snap));
        buffer.draw_text(cx + 1, y, &line, TEXT, Attr::NONE);
        if view.copied == Some(CopyTarget::Quick(which)) {
            buffer.draw_text(cx + 1 + line.len() as u16 + 1, y, "✓", COPIED_COLOR, Attr::BOLD);
        }
        regions.fill_rect(cx, y, content_w, 1, Region::Quick(which));
        y += 1;
    }
    y += 1;

    buffer.draw_text(cx, y, "Formats", TEXT, Attr::BOLD);
    y += 1;

    for format in ExportFormat::ALL {
        buffer.draw_text(cx + 1, y, format.label(), TEXT, Attr::NONE);
        if view.copied == Some(CopyTarget::Format(format)) {
            buffer.draw_text(
                cx + 1 + format.label().len() as u16 + 1,
                y,
                "✓ Copied!",
                COPIED_COLOR,
                Attr::BOLD,
            );
        }
        regions.fill_rect(cx, y, content_w, 1, Region::Export(format));
        y += 1;
    }
    y += 1;

    buffer.draw_text(cx, y, "Click a row to copy it", MUTED, Attr::NONE);
}

fn draw_footer(buffer: &mut FrameBuffer, height: u16, width: u16) {
    let hints = "drag edge: radius · drag ring: padding · tab: panel · c: corners · q: quit";
    let y = height.saturating_sub(1);
    buffer.fill_rect(0, y, width, 1, Color::Reset);
    buffer.draw_text(1, y, hints, MUTED, Attr::NONE);
}

// =============================================================================
// Sliders
// =============================================================================

/// Value range of a slider for the given snapshot.
pub fn slider_range(id: SliderId, snap: &Snapshot) -> (u16, u16) {
    match id {
        SliderId::Radius | SliderId::CornerRadius(_) => (0, RADIUS_MAX),
        SliderId::Padding => (0, snap.max_padding),
        SliderId::Dimension => (DIMENSION_MIN, DIMENSION_MAX),
    }
}

/// Current value of a slider.
pub fn slider_value(id: SliderId, snap: &Snapshot) -> u16 {
    match id {
        SliderId::Radius => snap.outer_radius,
        SliderId::CornerRadius(corner) => snap.corners.get(corner),
        SliderId::Padding => snap.padding,
        SliderId::Dimension => snap.dimension,
    }
}

fn slider_label(id: SliderId, snap: &Snapshot) -> String {
    match id {
        SliderId::Radius => "Border Radius".to_string(),
        SliderId::CornerRadius(corner) => corner.label().to_string(),
        SliderId::Padding => format!("Padding (max: {}px)", snap.max_padding),
        SliderId::Dimension => "Dimension".to_string(),
    }
}

/// Geometry of every slider track: (x, width) for a given panel origin.
fn track_geometry(panel_x: u16) -> (u16, u16) {
    (panel_x + 2, PANEL_WIDTH - 6)
}

/// Map a click x-position on a slider track to a value.
///
/// Used by the controller when a pointer lands on a [`Region::Slider`].
pub fn track_value(id: SliderId, snap: &Snapshot, screen_width: u16, x: u16) -> u16 {
    let panel_x = screen_width.saturating_sub(PANEL_WIDTH);
    let (tx, tw) = track_geometry(panel_x);
    let (min, max) = slider_range(id, snap);

    let rel = x.saturating_sub(tx).min(tw - 1) as u32;
    let span = (max - min) as u32;
    min + ((rel * span + (tw as u32 - 1) / 2) / (tw as u32 - 1)) as u16
}

fn draw_slider(
    buffer: &mut FrameBuffer,
    regions: &mut RegionMap,
    snap: &Snapshot,
    view: &UiView,
    id: SliderId,
    panel_x: u16,
    y: u16,
) -> u16 {
    let cx = panel_x + 2;
    let content_w = PANEL_WIDTH - 4;
    let focused = view.focus == id;

    // Label row with focus marker and right-aligned value.
    if focused {
        buffer.draw_text(cx - 1, y, "›", ACCENT, Attr::BOLD);
    }
    let label_fg = if focused { TEXT } else { MUTED };
    buffer.draw_text(cx, y, &slider_label(id, snap), label_fg, Attr::NONE);

    let value = format!("{}px", slider_value(id, snap));
    buffer.draw_text(
        cx + content_w.saturating_sub(value.len() as u16),
        y,
        &value,
        TEXT,
        Attr::BOLD,
    );

    // Track row.
    let (tx, tw) = track_geometry(panel_x);
    let (min, max) = slider_range(id, snap);
    let span = (max - min).max(1) as u32;
    let pos = ((slider_value(id, snap) - min) as u32 * (tw as u32 - 1) / span) as u16;

    for i in 0..tw {
        let (ch, fg) = if i == pos {
            ('●', if focused { ACCENT } else { TEXT })
        } else if i < pos {
            ('━', ACCENT)
        } else {
            ('─', MUTED)
        };
        buffer.put(tx + i, y + 1, ch, fg, Attr::NONE);
    }
    regions.fill_rect(tx, y + 1, tw, 1, Region::Slider(id));

    y + 3
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RadiusStore;

    const W: u16 = 110;
    const H: u16 = 34;

    fn view() -> UiView {
        UiView::default()
    }

    fn collect_regions(frame: &ScreenFrame) -> Vec<Region> {
        let mut seen = Vec::new();
        for y in 0..frame.regions.height() {
            for x in 0..frame.regions.width() {
                if let Some(region) = frame.regions.hit_test(x, y) {
                    if !seen.contains(&region) {
                        seen.push(region);
                    }
                }
            }
        }
        seen
    }

    #[test]
    fn test_compose_produces_screen_sized_frame() {
        let snap = RadiusStore::new().snapshot();
        let frame = compose(&snap, &view(), W, H);

        assert_eq!(frame.buffer.width(), W);
        assert_eq!(frame.buffer.height(), H);
        assert_eq!(frame.regions.width(), W);
    }

    #[test]
    fn test_controls_tab_regions() {
        let snap = RadiusStore::new().snapshot();
        let frame = compose(&snap, &view(), W, H);
        let regions = collect_regions(&frame);

        assert!(regions.contains(&Region::RadiusHandle));
        assert!(regions.contains(&Region::PaddingRing));
        assert!(regions.contains(&Region::CornerToggle));
        assert!(regions.contains(&Region::Slider(SliderId::Radius)));
        assert!(regions.contains(&Region::Slider(SliderId::Padding)));
        assert!(regions.contains(&Region::Slider(SliderId::Dimension)));
        assert!(regions.contains(&Region::Preset(0)));
        for tab in PanelTab::ALL {
            assert!(regions.contains(&Region::Tab(tab)));
        }
    }

    #[test]
    fn test_per_corner_mode_shows_corner_sliders() {
        let store = RadiusStore::new();
        store.set_per_corner(true);
        let frame = compose(&store.snapshot(), &view(), W, H);
        let regions = collect_regions(&frame);

        assert!(!regions.contains(&Region::Slider(SliderId::Radius)));
        for corner in Corner::ALL {
            assert!(regions.contains(&Region::Slider(SliderId::CornerRadius(corner))));
        }
    }

    #[test]
    fn test_export_tab_regions() {
        let snap = RadiusStore::new().snapshot();
        let mut v = view();
        v.active_tab = PanelTab::Export;
        let frame = compose(&snap, &v, W, H);
        let regions = collect_regions(&frame);

        for format in ExportFormat::ALL {
            assert!(regions.contains(&Region::Export(format)), "{:?}", format);
        }
        for which in QuickValue::ALL {
            assert!(regions.contains(&Region::Quick(which)));
        }
        // No controls-tab regions while export is active.
        assert!(!regions.contains(&Region::CornerToggle));
    }

    #[test]
    fn test_preview_center_is_left_of_panel() {
        let snap = RadiusStore::new().snapshot();
        let frame = compose(&snap, &view(), W, H);

        let panel_px = (W - PANEL_WIDTH) as f64 * CELL_PX_X;
        assert!(frame.preview_center.x < panel_px);
        assert!(frame.preview_center.y > 0.0);
    }

    #[test]
    fn test_track_value_endpoints() {
        let snap = RadiusStore::new().snapshot();
        let panel_x = W - PANEL_WIDTH;

        // Clicks at (and beyond) the track ends give the range endpoints.
        assert_eq!(track_value(SliderId::Radius, &snap, W, panel_x + 2), 0);
        assert_eq!(track_value(SliderId::Radius, &snap, W, W), RADIUS_MAX);
        assert_eq!(
            track_value(SliderId::Dimension, &snap, W, panel_x + 2),
            DIMENSION_MIN
        );
        assert_eq!(track_value(SliderId::Dimension, &snap, W, W), DIMENSION_MAX);
        assert_eq!(
            track_value(SliderId::Padding, &snap, W, W),
            snap.max_padding
        );
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let snap = RadiusStore::new().snapshot();
        for (w, h) in [(0, 0), (5, 2), (20, 5), (PANEL_WIDTH, 10)] {
            let frame = compose(&snap, &view(), w, h);
            assert_eq!(frame.buffer.width(), w);
        }
    }
}
