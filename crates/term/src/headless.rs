//! In-memory display for tests, benchmarks and headless runs.

use std::io;

use crate::core::DisplaySurface;
use crate::fb::PixelBuffer;

/// A display with no device behind it; `present` copies the drawing buffer
/// to the shown buffer.
#[derive(Debug, Clone)]
pub struct HeadlessDisplay {
    drawing: PixelBuffer,
    shown: PixelBuffer,
    presented: usize,
    powered_off: bool,
}

impl HeadlessDisplay {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            drawing: PixelBuffer::new(width, height),
            shown: PixelBuffer::new(width, height),
            presented: 0,
            powered_off: false,
        }
    }

    /// The last presented frame
    pub fn shown(&self) -> &PixelBuffer {
        &self.shown
    }

    /// The frame being drawn, not yet presented
    pub fn drawing(&self) -> &PixelBuffer {
        &self.drawing
    }

    pub fn presented(&self) -> usize {
        self.presented
    }

    pub fn is_powered_off(&self) -> bool {
        self.powered_off
    }
}

impl DisplaySurface for HeadlessDisplay {
    fn clear(&mut self) {
        self.drawing.clear();
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32) {
        self.drawing.fill_rect(x, y, w, h);
    }

    fn present(&mut self) -> io::Result<()> {
        self.shown.clone_from(&self.drawing);
        self.presented += 1;
        Ok(())
    }

    fn power_off(&mut self) -> io::Result<()> {
        self.drawing.clear();
        self.shown.clear();
        self.powered_off = true;
        Ok(())
    }
}
