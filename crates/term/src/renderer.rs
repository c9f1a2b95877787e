//! TerminalDisplay: shows a pixel panel in a real terminal.
//!
//! Two pixel rows share one character cell using half-block glyphs, so a
//! 128x64 panel needs a 128x32 terminal. After the first frame only changed
//! runs of cells are redrawn.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    style::{Attribute, Print, ResetColor, SetAttribute},
    terminal, QueueableCommand,
};

use crate::core::DisplaySurface;
use crate::fb::PixelBuffer;

/// Glyph for a character cell whose upper and lower pixels are `top`/`bottom`
pub fn glyph(top: bool, bottom: bool) -> char {
    match (top, bottom) {
        (false, false) => ' ',
        (true, false) => '▀',
        (false, true) => '▄',
        (true, true) => '█',
    }
}

fn text_rows(fb: &PixelBuffer) -> u16 {
    fb.height().div_ceil(2)
}

fn glyph_at(fb: &PixelBuffer, x: u16, row: u16) -> char {
    let y = row * 2;
    glyph(fb.get(x, y), fb.get(x, y + 1))
}

pub struct TerminalDisplay {
    stdout: io::Stdout,
    drawing: PixelBuffer,
    shown: Option<PixelBuffer>,
    buf: Vec<u8>,
    keyboard_enhanced: bool,
}

impl TerminalDisplay {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            stdout: io::stdout(),
            drawing: PixelBuffer::new(width, height),
            shown: None,
            buf: Vec::with_capacity(16 * 1024),
            keyboard_enhanced: false,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.keyboard_enhanced = terminal::supports_keyboard_enhancement().unwrap_or(false);

        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        if self.keyboard_enhanced {
            self.buf.queue(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
            ))?;
        }
        self.flush_buf()?;
        log::debug!("terminal entered, key release events: {}", self.keyboard_enhanced);
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        if self.keyboard_enhanced {
            self.buf.queue(PopKeyboardEnhancementFlags)?;
        }
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Whether the terminal reports key release events (set by `enter`)
    pub fn reports_key_release(&self) -> bool {
        self.keyboard_enhanced
    }

    /// Force the next present to be a full redraw.
    pub fn invalidate(&mut self) {
        self.shown = None;
    }

    fn flush_buf(&mut self) -> io::Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()
    }
}

impl DisplaySurface for TerminalDisplay {
    fn clear(&mut self) {
        self.drawing.clear();
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32) {
        self.drawing.fill_rect(x, y, w, h);
    }

    fn present(&mut self) -> io::Result<()> {
        self.buf.clear();
        match self.shown.as_mut() {
            Some(prev) => {
                encode_diff_into(prev, &self.drawing, &mut self.buf)?;
                prev.clone_from(&self.drawing);
            }
            None => {
                encode_full_into(&self.drawing, &mut self.buf)?;
                self.shown = Some(self.drawing.clone());
            }
        }
        self.flush_buf()
    }

    fn power_off(&mut self) -> io::Result<()> {
        self.drawing.clear();
        self.shown = None;
        self.buf.clear();
        self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
        self.flush_buf()
    }
}

/// Encode a full-frame redraw into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_full_into(fb: &PixelBuffer, out: &mut Vec<u8>) -> io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;

    let rows = text_rows(fb);
    let mut line = String::with_capacity(fb.width() as usize * 3);
    for row in 0..rows {
        line.clear();
        line.extend((0..fb.width()).map(|x| glyph_at(fb, x, row)));
        out.queue(Print(&line))?;
        if row + 1 < rows {
            out.queue(Print("\r\n"))?;
        }
    }
    Ok(())
}

/// Encode a diff redraw (changed runs) into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_diff_into(prev: &PixelBuffer, next: &PixelBuffer, out: &mut Vec<u8>) -> io::Result<()> {
    let mut run = String::new();
    for_each_changed_run(prev, next, |x, row, len| {
        run.clear();
        run.extend((x..x + len).map(|cx| glyph_at(next, cx, row)));
        out.queue(cursor::MoveTo(x, row))?;
        out.queue(Print(&run))?;
        Ok(())
    })
}

/// Call `f(x, text_row, len)` for every horizontal run of character cells
/// whose glyph differs between `prev` and `next`.
fn for_each_changed_run(
    prev: &PixelBuffer,
    next: &PixelBuffer,
    mut f: impl FnMut(u16, u16, u16) -> io::Result<()>,
) -> io::Result<()> {
    if prev.width() != next.width() || prev.height() != next.height() {
        // Size changed: treat everything as dirty in a single pass (row runs).
        for row in 0..text_rows(next) {
            f(0, row, next.width())?;
        }
        return Ok(());
    }

    let w = next.width();
    for row in 0..text_rows(next) {
        let mut x = 0;
        while x < w {
            if glyph_at(prev, x, row) == glyph_at(next, x, row) {
                x += 1;
                continue;
            }

            let start = x;
            x += 1;
            while x < w && glyph_at(prev, x, row) != glyph_at(next, x, row) {
                x += 1;
            }
            f(start, row, x - start)?;
        }
    }

    Ok(())
}
