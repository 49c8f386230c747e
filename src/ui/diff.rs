//! Differential renderer.
//!
//! Compares each frame to the previous one and emits only the cells that
//! changed, batched into a single write. Escape codes are queued through
//! crossterm into an in-memory output buffer; cursor position, colors and
//! attributes are tracked so redundant codes are never emitted.
//!
//! The whole frame is wrapped in a synchronized-update block so the terminal
//! presents it atomically.

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::style::{
    Attribute, Print, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use crossterm::terminal::{
    BeginSynchronizedUpdate, Clear, ClearType, EndSynchronizedUpdate,
};
use crossterm::{queue, style::Color};

use super::buffer::{Attr, Cell, FrameBuffer};

// =============================================================================
// OutputBuffer
// =============================================================================

/// Accumulates escape codes and glyphs for one batched write.
#[derive(Debug, Default)]
pub struct OutputBuffer {
    data: Vec<u8>,
}

impl OutputBuffer {
    pub fn new() -> Self {
        Self {
            data: Vec::with_capacity(16 * 1024),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Write everything to stdout in one call and clear the buffer.
    pub fn flush_stdout(&mut self) -> io::Result<()> {
        if self.data.is_empty() {
            return Ok(());
        }
        let mut stdout = io::stdout().lock();
        stdout.write_all(&self.data)?;
        stdout.flush()?;
        self.data.clear();
        Ok(())
    }
}

impl Write for OutputBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.data.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

// =============================================================================
// DiffRenderer
// =============================================================================

/// Renders frames by diffing against the previous one.
pub struct DiffRenderer {
    output: OutputBuffer,
    previous: Option<FrameBuffer>,
    cursor: Option<(u16, u16)>,
    fg: Option<Color>,
    bg: Option<Color>,
    attrs: Attr,
}

impl DiffRenderer {
    pub fn new() -> Self {
        Self {
            output: OutputBuffer::new(),
            previous: None,
            cursor: None,
            fg: None,
            bg: None,
            attrs: Attr::NONE,
        }
    }

    /// Render a frame to stdout, emitting only changed cells.
    ///
    /// Returns true if anything was written.
    pub fn render(&mut self, frame: &FrameBuffer) -> io::Result<bool> {
        let changed = self.prepare(frame)?;
        self.output.flush_stdout()?;
        Ok(changed)
    }

    /// Forget the previous frame so the next render repaints everything.
    pub fn invalidate(&mut self) {
        self.previous = None;
    }

    /// Queue the diff for a frame into the output buffer.
    fn prepare(&mut self, frame: &FrameBuffer) -> io::Result<bool> {
        // A size change invalidates the previous frame entirely.
        let full_repaint = !matches!(
            &self.previous,
            Some(prev) if prev.width() == frame.width() && prev.height() == frame.height()
        );

        queue!(self.output, BeginSynchronizedUpdate)?;
        if full_repaint {
            queue!(self.output, Clear(ClearType::All))?;
        }

        // Terminal state is unknown between frames.
        self.cursor = None;
        self.fg = None;
        self.bg = None;
        self.attrs = Attr::NONE;
        queue!(self.output, SetAttribute(Attribute::Reset))?;

        let mut any_changed = false;
        for y in 0..frame.height() {
            for x in 0..frame.width() {
                let cell = frame.get(x, y).expect("in-bounds cell");

                let unchanged = !full_repaint
                    && self
                        .previous
                        .as_ref()
                        .and_then(|prev| prev.get(x, y))
                        .is_some_and(|prev_cell| prev_cell == cell);
                if unchanged {
                    continue;
                }

                any_changed = true;
                self.emit_cell(x, y, cell)?;
            }
        }

        queue!(self.output, EndSynchronizedUpdate)?;
        self.previous = Some(frame.clone());
        Ok(any_changed)
    }

    fn emit_cell(&mut self, x: u16, y: u16, cell: &Cell) -> io::Result<()> {
        if self.cursor != Some((x, y)) {
            queue!(self.output, MoveTo(x, y))?;
        }

        // Attribute changes reset colors, so colors are re-emitted after.
        if self.attrs != cell.attrs {
            queue!(self.output, SetAttribute(Attribute::Reset))?;
            if cell.attrs.contains(Attr::BOLD) {
                queue!(self.output, SetAttribute(Attribute::Bold))?;
            }
            if cell.attrs.contains(Attr::DIM) {
                queue!(self.output, SetAttribute(Attribute::Dim))?;
            }
            if cell.attrs.contains(Attr::ITALIC) {
                queue!(self.output, SetAttribute(Attribute::Italic))?;
            }
            if cell.attrs.contains(Attr::UNDERLINE) {
                queue!(self.output, SetAttribute(Attribute::Underlined))?;
            }
            self.attrs = cell.attrs;
            self.fg = None;
            self.bg = None;
        }

        if self.fg != Some(cell.fg) {
            queue!(self.output, SetForegroundColor(cell.fg))?;
            self.fg = Some(cell.fg);
        }
        if self.bg != Some(cell.bg) {
            queue!(self.output, SetBackgroundColor(cell.bg))?;
            self.bg = Some(cell.bg);
        }

        queue!(self.output, Print(cell.ch))?;
        self.cursor = Some((x + 1, y));
        Ok(())
    }
}

impl Default for DiffRenderer {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================
