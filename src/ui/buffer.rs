//! FrameBuffer and drawing primitives.
//!
//! A flat, row-major grid of cells. Drawing operations clip at the buffer
//! bounds; the composition layer never has to range-check.
//!
//! Corner rounding cannot be drawn literally in a cell grid, so radii map to
//! glyph bands: sharp corners below 3 px, rounded arcs up to 12 px, and a
//! chamfer diagonal above that. The bands track how prominent the rounding
//! would look at the preview's scale.

use crossterm::style::Color;
use unicode_width::UnicodeWidthChar;

use crate::types::CornerRadii;

// =============================================================================
// Cell
// =============================================================================

bitflags::bitflags! {
    /// Text attributes as a bitfield for cheap storage and comparison.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Attr: u8 {
        const NONE = 0;
        const BOLD = 1 << 0;
        const DIM = 1 << 1;
        const ITALIC = 1 << 2;
        const UNDERLINE = 1 << 3;
    }
}

/// A single terminal cell: glyph, colors, attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub fg: Color,
    pub bg: Color,
    pub attrs: Attr,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Color::Reset,
            bg: Color::Reset,
            attrs: Attr::NONE,
        }
    }
}

// =============================================================================
// Corner glyphs
// =============================================================================

/// How a corner is drawn, by radius band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CornerStyle {
    Sharp,
    Rounded,
    Chamfer,
}

/// Map a radius in pixels to its glyph band.
pub fn corner_style(radius_px: u16) -> CornerStyle {
    match radius_px {
        0..=2 => CornerStyle::Sharp,
        3..=12 => CornerStyle::Rounded,
        _ => CornerStyle::Chamfer,
    }
}

/// Glyphs per corner position, indexed tl/tr/br/bl.
fn corner_glyph(position: usize, style: CornerStyle) -> char {
    const SHARP: [char; 4] = ['┌', '┐', '┘', '└'];
    const ROUNDED: [char; 4] = ['╭', '╮', '╯', '╰'];
    const CHAMFER: [char; 4] = ['╱', '╲', '╱', '╲'];

    match style {
        CornerStyle::Sharp => SHARP[position],
        CornerStyle::Rounded => ROUNDED[position],
        CornerStyle::Chamfer => CHAMFER[position],
    }
}

// =============================================================================
// FrameBuffer
// =============================================================================

/// A 2D buffer of terminal cells with row-major flat storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    /// Create a buffer filled with default cells.
    pub fn new(width: u16, height: u16) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            cells: vec![Cell::default(); size],
        }
    }

    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> usize {
        y as usize * self.width as usize + x as usize
    }

    #[inline]
    pub fn in_bounds(&self, x: u16, y: u16) -> bool {
        x < self.width && y < self.height
    }

    /// Cell at a position, or `None` out of bounds.
    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if self.in_bounds(x, y) {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    /// Write a full cell; out-of-bounds writes are dropped.
    #[inline]
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if self.in_bounds(x, y) {
            let idx = self.index(x, y);
            self.cells[idx] = cell;
        }
    }

    /// Write a glyph with foreground and attributes, keeping the existing
    /// background.
    pub fn put(&mut self, x: u16, y: u16, ch: char, fg: Color, attrs: Attr) {
        if self.in_bounds(x, y) {
            let idx = self.index(x, y);
            let cell = &mut self.cells[idx];
            cell.ch = ch;
            cell.fg = fg;
            cell.attrs = attrs;
        }
    }

    /// Fill a rectangle's background, clearing glyphs.
    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, bg: Color) {
        for cy in y..y.saturating_add(h).min(self.height) {
            for cx in x..x.saturating_add(w).min(self.width) {
                let idx = self.index(cx, cy);
                self.cells[idx] = Cell {
                    ch: ' ',
                    fg: Color::Reset,
                    bg,
                    attrs: Attr::NONE,
                };
            }
        }
    }

    /// Draw a string starting at (x, y), clipping at the right edge.
    ///
    /// Returns the x position after the last written cell. Wide glyphs
    /// occupy two cells (the second is blanked so stale glyphs never
    /// survive underneath).
    pub fn draw_text(&mut self, x: u16, y: u16, text: &str, fg: Color, attrs: Attr) -> u16 {
        let mut cx = x;
        for ch in text.chars() {
            let w = ch.width().unwrap_or(0) as u16;
            if w == 0 {
                continue;
            }
            if cx >= self.width || y >= self.height {
                break;
            }
            self.put(cx, y, ch, fg, attrs);
            if w == 2 && cx + 1 < self.width {
                self.put(cx + 1, y, ' ', fg, attrs);
            }
            cx += w;
        }
        cx
    }

    /// Draw a box border with per-corner rounding glyphs.
    ///
    /// `radii` are in pixels; each corner independently picks its glyph band.
    /// Boxes smaller than 2x2 are skipped.
    pub fn draw_box(&mut self, x: u16, y: u16, w: u16, h: u16, radii: &CornerRadii, fg: Color) {
        if w < 2 || h < 2 {
            return;
        }
        let right = x + w - 1;
        let bottom = y + h - 1;

        for cx in x + 1..right {
            self.put(cx, y, '─', fg, Attr::NONE);
            self.put(cx, bottom, '─', fg, Attr::NONE);
        }
        for cy in y + 1..bottom {
            self.put(x, cy, '│', fg, Attr::NONE);
            self.put(right, cy, '│', fg, Attr::NONE);
        }

        let styles = radii.values().map(corner_style);
        self.put(x, y, corner_glyph(0, styles[0]), fg, Attr::NONE);
        self.put(right, y, corner_glyph(1, styles[1]), fg, Attr::NONE);
        self.put(right, bottom, corner_glyph(2, styles[2]), fg, Attr::NONE);
        self.put(x, bottom, corner_glyph(3, styles[3]), fg, Attr::NONE);
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_buffer_is_blank() {
        let buf = FrameBuffer::new(10, 4);
        assert_eq!(buf.width(), 10);
        assert_eq!(buf.height(), 4);
        assert_eq!(buf.get(3, 2), Some(&Cell::default()));
    }

    #[test]
    fn test_out_of_bounds_access() {
        let mut buf = FrameBuffer::new(10, 4);
        assert!(buf.get(10, 0).is_none());
        assert!(buf.get(0, 4).is_none());

        // Out-of-bounds writes are dropped, not panics.
        buf.set(100, 100, Cell::default());
        buf.put(100, 100, 'x', Color::Reset, Attr::NONE);
    }

    #[test]
    fn test_draw_text_clips_at_edge() {
        let mut buf = FrameBuffer::new(5, 1);
        let end = buf.draw_text(3, 0, "abcdef", Color::White, Attr::NONE);

        assert_eq!(end, 5);
        assert_eq!(buf.get(3, 0).unwrap().ch, 'a');
        assert_eq!(buf.get(4, 0).unwrap().ch, 'b');
    }

    #[test]
    fn test_draw_text_preserves_background() {
        let mut buf = FrameBuffer::new(10, 1);
        buf.fill_rect(0, 0, 10, 1, Color::Blue);
        buf.draw_text(0, 0, "hi", Color::White, Attr::BOLD);

        let cell = buf.get(0, 0).unwrap();
        assert_eq!(cell.ch, 'h');
        assert_eq!(cell.bg, Color::Blue);
        assert_eq!(cell.attrs, Attr::BOLD);
    }

    #[test]
    fn test_corner_style_bands() {
        assert_eq!(corner_style(0), CornerStyle::Sharp);
        assert_eq!(corner_style(2), CornerStyle::Sharp);
        assert_eq!(corner_style(3), CornerStyle::Rounded);
        assert_eq!(corner_style(12), CornerStyle::Rounded);
        assert_eq!(corner_style(13), CornerStyle::Chamfer);
        assert_eq!(corner_style(50), CornerStyle::Chamfer);
    }

    #[test]
    fn test_draw_box_uniform_rounded() {
        let mut buf = FrameBuffer::new(8, 4);
        buf.draw_box(0, 0, 8, 4, &CornerRadii::uniform(8), Color::White);

        assert_eq!(buf.get(0, 0).unwrap().ch, '╭');
        assert_eq!(buf.get(7, 0).unwrap().ch, '╮');
        assert_eq!(buf.get(7, 3).unwrap().ch, '╯');
        assert_eq!(buf.get(0, 3).unwrap().ch, '╰');
        assert_eq!(buf.get(3, 0).unwrap().ch, '─');
        assert_eq!(buf.get(0, 2).unwrap().ch, '│');
    }

    #[test]
    fn test_draw_box_mixed_corners() {
        let mut buf = FrameBuffer::new(8, 4);
        let radii = CornerRadii {
            top_left: 0,
            top_right: 8,
            bottom_right: 30,
            bottom_left: 2,
        };
        buf.draw_box(0, 0, 8, 4, &radii, Color::White);

        assert_eq!(buf.get(0, 0).unwrap().ch, '┌');
        assert_eq!(buf.get(7, 0).unwrap().ch, '╮');
        assert_eq!(buf.get(7, 3).unwrap().ch, '╱');
        assert_eq!(buf.get(0, 3).unwrap().ch, '└');
    }

    #[test]
    fn test_draw_box_too_small_is_skipped() {
        let mut buf = FrameBuffer::new(8, 4);
        buf.draw_box(0, 0, 1, 4, &CornerRadii::uniform(0), Color::White);
        assert_eq!(buf.get(0, 0), Some(&Cell::default()));
    }

    #[test]
    fn test_fill_rect_clips() {
        let mut buf = FrameBuffer::new(4, 4);
        buf.fill_rect(2, 2, 10, 10, Color::Red);

        assert_eq!(buf.get(3, 3).unwrap().bg, Color::Red);
        assert_eq!(buf.get(1, 1).unwrap().bg, Color::Reset);
    }
}
