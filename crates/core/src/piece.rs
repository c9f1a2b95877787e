//! Piece module - the active tetromino
//!
//! A piece is a root cell plus three dependent cells. The dependents' offsets
//! from the root come from a static `(shape, rotation)` table. The I piece
//! additionally moves its root when it rotates so that it turns around the
//! middle of the bar instead of around one fixed block.
//!
//! Cells are plain values; every transform computes a fresh `[GridPos; 4]`
//! and either commits it or throws it away.

use crate::field::Field;
use crate::types::{GameConfig, GridPos, Rotation, Shape};

/// Offset `(drow, dcol)` of a dependent cell from the root
pub type CellOffset = (i8, i8);

/// The three dependent-cell offsets for one shape and rotation
pub type Layout = [CellOffset; 3];

/// Dependent-cell offsets indexed by `[shape.index()][rotation.index()]`
pub const LAYOUTS: [[Layout; 4]; 7] = [
    // I
    [
        [(0, -1), (0, 1), (0, 2)],
        [(-1, 0), (1, 0), (-2, 0)],
        [(0, 1), (0, -1), (0, -2)],
        [(1, 0), (-1, 0), (-2, 0)],
    ],
    // J
    [
        [(-1, -1), (0, -1), (0, 1)],
        [(-1, 1), (-1, 0), (1, 0)],
        [(1, 1), (0, 1), (0, -1)],
        [(1, -1), (1, 0), (-1, 0)],
    ],
    // L
    [
        [(0, -1), (0, 1), (-1, 1)],
        [(-1, 0), (1, 0), (1, 1)],
        [(0, 1), (0, -1), (1, -1)],
        [(1, 0), (-1, 0), (-1, -1)],
    ],
    // O
    [
        [(-1, 0), (0, 1), (-1, 1)],
        [(-1, 0), (0, 1), (-1, 1)],
        [(-1, 0), (0, 1), (-1, 1)],
        [(-1, 0), (0, 1), (-1, 1)],
    ],
    // S
    [
        [(0, -1), (-1, 0), (-1, 1)],
        [(-1, 0), (0, 1), (1, 1)],
        [(0, 1), (1, 0), (1, -1)],
        [(1, 0), (0, -1), (-1, -1)],
    ],
    // T
    [
        [(0, -1), (-1, 0), (0, 1)],
        [(-1, 0), (0, 1), (1, 0)],
        [(0, 1), (1, 0), (0, -1)],
        [(1, 0), (0, -1), (-1, 0)],
    ],
    // Z
    [
        [(-1, -1), (-1, 0), (0, 1)],
        [(-1, 1), (0, 1), (1, 0)],
        [(1, 1), (1, 0), (0, -1)],
        [(1, -1), (0, -1), (-1, 0)],
    ],
];

/// Get the dependent-cell offsets for a shape and rotation
#[inline]
pub fn layout(shape: Shape, rotation: Rotation) -> &'static Layout {
    &LAYOUTS[shape.index()][rotation.index()]
}

/// Root of an I piece entering `rotation`, given its previous root and
/// previous first dependent.
///
/// Each state has two candidate pivots; which one applies depends on where the
/// bar is coming from.
fn i_root(rotation: Rotation, root: GridPos, first: GridPos) -> GridPos {
    match rotation {
        Rotation::North if first.row == root.row + 1 => root.offset(-1, 0),
        Rotation::North => root.offset(0, -1),
        Rotation::East if first.col == root.col - 1 => root.offset(0, 1),
        Rotation::East => root.offset(-1, 0),
        Rotation::South if first.row == root.row - 1 => root.offset(1, 0),
        Rotation::South => root.offset(0, 1),
        Rotation::West if first.col == root.col + 1 => root.offset(0, -1),
        Rotation::West => root.offset(1, 0),
    }
}

/// Cells of `shape` in `rotation`, laid out from the previous cells
pub fn arrange(shape: Shape, rotation: Rotation, previous: &[GridPos; 4]) -> [GridPos; 4] {
    let root = match shape {
        Shape::I => i_root(rotation, previous[0], previous[1]),
        _ => previous[0],
    };
    let offsets = layout(shape, rotation);
    [
        root,
        root.offset(offsets[0].0, offsets[0].1),
        root.offset(offsets[1].0, offsets[1].1),
        root.offset(offsets[2].0, offsets[2].1),
    ]
}

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    shape: Shape,
    rotation: Rotation,
    /// Root first, then the three dependents
    cells: [GridPos; 4],
    active: bool,
}

impl Piece {
    /// Spawn a piece with its root at the configured spawn cell
    pub fn spawn(shape: Shape, config: &GameConfig) -> Self {
        Self::spawn_at(shape, GridPos::new(config.spawn_row, config.spawn_col))
    }

    /// Spawn a piece with its root at `root`
    ///
    /// All four cells start on the root and are then laid out for the North
    /// state, which is what shifts the I piece one column left.
    pub fn spawn_at(shape: Shape, root: GridPos) -> Self {
        Self {
            shape,
            rotation: Rotation::North,
            cells: arrange(shape, Rotation::North, &[root; 4]),
            active: true,
        }
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn cells(&self) -> &[GridPos; 4] {
        &self.cells
    }

    pub fn root(&self) -> GridPos {
        self.cells[0]
    }

    /// Falling pieces are active; a locked piece is spent
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Check whether any cell overlaps a blocked field cell
    pub fn collides(&self, field: &Field) -> bool {
        self.cells.iter().any(|&c| field.is_blocked(c))
    }

    fn shifted(&self, drow: i8, dcol: i8) -> [GridPos; 4] {
        self.cells.map(|c| c.offset(drow, dcol))
    }

    fn can_shift(&self, field: &Field, drow: i8, dcol: i8) -> bool {
        self.shifted(drow, dcol).iter().all(|&c| !field.is_blocked(c))
    }

    /// Move one column left; false when at the wall or obstructed
    pub fn move_left(&mut self, field: &Field) -> bool {
        let (min_col, _) = col_span(&self.cells);
        if !self.active || min_col == 0 || !self.can_shift(field, 0, -1) {
            return false;
        }
        self.cells = self.shifted(0, -1);
        true
    }

    /// Move one column right; false when at the wall or obstructed
    pub fn move_right(&mut self, field: &Field) -> bool {
        let (_, max_col) = col_span(&self.cells);
        if !self.active || max_col as usize + 1 >= field.width() || !self.can_shift(field, 0, 1) {
            return false;
        }
        self.cells = self.shifted(0, 1);
        true
    }

    pub fn rotate_cw(&mut self, field: &Field) -> bool {
        self.rotate_to(self.rotation.rotate_cw(), field)
    }

    pub fn rotate_ccw(&mut self, field: &Field) -> bool {
        self.rotate_to(self.rotation.rotate_ccw(), field)
    }

    /// Lay out the new state, push it back inside the walls and above the
    /// floor, and keep it only if no cell is blocked.
    fn rotate_to(&mut self, rotation: Rotation, field: &Field) -> bool {
        if !self.active || self.shape == Shape::O {
            return false;
        }

        let mut cells = arrange(self.shape, rotation, &self.cells);
        correct_bounds(&mut cells, field);

        if cells.iter().any(|&c| field.is_blocked(c)) {
            return false;
        }

        self.cells = cells;
        self.rotation = rotation;
        true
    }

    /// Fall one row, or lock into the field when any cell is resting.
    ///
    /// Returns true when the piece locked during this call.
    pub fn fall(&mut self, field: &mut Field) -> bool {
        if !self.active {
            return false;
        }
        if self.can_shift(field, 1, 0) {
            self.cells = self.shifted(1, 0);
            return false;
        }
        self.lock(field);
        true
    }

    /// Drop straight to the resting row and lock. Returns the rows dropped.
    pub fn hard_drop(&mut self, field: &mut Field) -> u32 {
        if !self.active {
            return 0;
        }
        let mut rows = 0;
        while self.can_shift(field, 1, 0) {
            self.cells = self.shifted(1, 0);
            rows += 1;
        }
        self.lock(field);
        rows
    }

    /// Rows the piece can still fall before resting
    pub fn drop_distance(&self, field: &Field) -> u32 {
        let mut ghost = *self;
        let mut rows = 0;
        while ghost.can_shift(field, 1, 0) {
            ghost.cells = ghost.shifted(1, 0);
            rows += 1;
        }
        rows
    }

    fn lock(&mut self, field: &mut Field) {
        for c in self.cells {
            field.occupy(c.row, c.col);
        }
        self.active = false;
    }
}

/// Leftmost and rightmost column of the four cells
fn col_span(cells: &[GridPos; 4]) -> (i8, i8) {
    cells[1..]
        .iter()
        .fold((cells[0].col, cells[0].col), |(lo, hi), c| (lo.min(c.col), hi.max(c.col)))
}

/// Largest row index of the four cells
fn lowest_row(cells: &[GridPos; 4]) -> i8 {
    cells[1..].iter().fold(cells[0].row, |row, c| row.max(c.row))
}

/// Translate `cells` by the minimal amounts that undo left, right and bottom
/// overflow, in that order.
fn correct_bounds(cells: &mut [GridPos; 4], field: &Field) {
    let (min_col, _) = col_span(cells);
    if min_col < 0 {
        for c in cells.iter_mut() {
            c.col -= min_col;
        }
    }

    let last_col = field.width() as i8 - 1;
    let (_, max_col) = col_span(cells);
    if max_col > last_col {
        for c in cells.iter_mut() {
            c.col -= max_col - last_col;
        }
    }

    let last_row = field.last_playable_row();
    let max_row = lowest_row(cells);
    if max_row > last_row {
        for c in cells.iter_mut() {
            c.row -= max_row - last_row;
        }
    }
}
