//! Drawing a game onto a pixel display
//!
//! The core never touches pixels directly: it issues `fill_rect` calls on a
//! [`DisplaySurface`] with rectangles computed by [`Geometry`].

use std::io;

use crate::game::Game;
use crate::geometry::{Geometry, PixelRect};
use crate::types::GridPos;

/// A monochrome display the game draws on
///
/// Every frame is drawn from scratch: `clear`, a series of `fill_rect`, then
/// `present`.
pub trait DisplaySurface {
    /// Blank the drawing buffer
    fn clear(&mut self);

    /// Set every pixel of the rectangle; parts outside the panel are clipped
    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32);

    /// Push the drawing buffer to the physical device
    fn present(&mut self) -> io::Result<()>;

    /// Turn the panel off at the end of a session
    fn power_off(&mut self) -> io::Result<()>;
}

fn fill<D: DisplaySurface + ?Sized>(display: &mut D, rect: PixelRect) {
    display.fill_rect(rect.x, rect.y, rect.w, rect.h);
}

/// Draw borders, locked cells and the active piece. Does not present.
pub fn render<D: DisplaySurface + ?Sized>(game: &Game, geometry: &Geometry, display: &mut D) {
    display.clear();

    for rect in geometry.border_rects() {
        fill(display, rect);
    }

    let field = game.field();
    for (row, cells) in field.rows().take(field.floor_row()).enumerate() {
        for (col, &occupied) in cells.iter().enumerate() {
            if occupied {
                fill(display, geometry.cell_rect(GridPos::new(row as i8, col as i8)));
            }
        }
    }

    let piece = game.piece();
    if piece.is_active() {
        for &cell in piece.cells() {
            fill(display, geometry.cell_rect(cell));
        }
    }
}
