//! Grid-to-pixel mapping
//!
//! The display is landscape and the field is drawn on its side: field rows run
//! along +x (row 0 at the left edge, the floor at the right edge) and field
//! columns run along -y between the two walls.
//!
//! Two coordinate spaces are involved:
//! - *game space*: the cell centre measured from the top-left of the play
//!   area, `(row * pitch + pitch / 2, col * pitch + pitch / 2)`;
//! - *display space*: where the cell's square is filled on the panel.

use crate::types::{GameConfig, GridPos};

/// An axis-aligned rectangle in display pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

impl PixelRect {
    pub const fn new(x: i32, y: i32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pitch: i32,
    cell_size: u32,
    /// Height of the play area between the walls
    game_width: i32,
    display_width: u32,
    display_height: u32,
    field_height: i8,
}

impl Geometry {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            pitch: config.cell_pitch as i32,
            cell_size: config.cell_size as u32,
            game_width: config.display_height as i32 - 2 * config.wall_width as i32,
            display_width: config.display_width as u32,
            display_height: config.display_height as u32,
            field_height: config.field_height as i8,
        }
    }

    /// Centre of a cell in game space
    pub fn cell_center(&self, pos: GridPos) -> (i32, i32) {
        let half = self.pitch / 2;
        (
            pos.row as i32 * self.pitch + half,
            pos.col as i32 * self.pitch + half,
        )
    }

    /// Cell containing a game-space point
    pub fn pixel_to_cell(&self, x: i32, y: i32) -> GridPos {
        let half = self.pitch / 2;
        GridPos::new(
            x.div_euclid(self.pitch) as i8,
            (y - half).div_euclid(self.pitch) as i8,
        )
    }

    /// Display rectangle filled for a cell
    pub fn cell_rect(&self, pos: GridPos) -> PixelRect {
        let (cx, cy) = self.cell_center(pos);
        PixelRect::new(
            cx - self.pitch,
            self.game_width - cy,
            self.cell_size,
            self.cell_size,
        )
    }

    /// The two side walls and the floor slab
    pub fn border_rects(&self) -> [PixelRect; 3] {
        let floor = self.cell_rect(GridPos::new(self.field_height - 1, 0)).x;
        [
            PixelRect::new(0, 0, self.display_width, 1),
            PixelRect::new(0, self.display_height as i32 - 1, self.display_width, 1),
            PixelRect::new(
                floor,
                0,
                self.display_width.saturating_sub(floor.max(0) as u32),
                self.display_height,
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cell_rects() {
        let geometry = Geometry::new(&GameConfig::default());

        // Bottom-left playable cell sits next to the floor and the lower wall.
        assert_eq!(
            geometry.cell_rect(GridPos::new(20, 0)),
            PixelRect::new(117, 57, 4, 4)
        );
        assert_eq!(
            geometry.cell_rect(GridPos::new(1, 9)),
            PixelRect::new(3, 3, 4, 4)
        );
    }

    #[test]
    fn test_borders_match_panel_layout() {
        let geometry = Geometry::new(&GameConfig::default());
        assert_eq!(
            geometry.border_rects(),
            [
                PixelRect::new(0, 0, 128, 1),
                PixelRect::new(0, 63, 128, 1),
                PixelRect::new(123, 0, 5, 64),
            ]
        );
    }

    #[test]
    fn test_pixel_to_cell_inverts_cell_center() {
        let geometry = Geometry::new(&GameConfig::default());
        for pos in [
            GridPos::new(0, 0),
            GridPos::new(7, 3),
            GridPos::new(20, 9),
        ] {
            let (x, y) = geometry.cell_center(pos);
            assert_eq!(geometry.pixel_to_cell(x, y), pos);
        }
    }
}
