//! Field module - the grid of locked cells
//!
//! A `height x width` grid of occupancy flags stored row-major in a flat vector.
//! Coordinates: (row, col) where row 0 is the top row and col 0 the left column.
//! The last row is a floor sentinel that is always fully occupied, so a falling
//! piece never needs a separate bottom bounds check.

use crate::types::GridPos;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    height: usize,
    width: usize,
    /// Row-major occupancy (row * width + col)
    cells: Vec<bool>,
}

impl Field {
    /// Create an empty field with the floor row filled
    pub fn new(height: u8, width: u8) -> Self {
        let (height, width) = (height as usize, width as usize);
        let mut cells = vec![false; height * width];
        cells[(height - 1) * width..].fill(true);
        Self {
            height,
            width,
            cells,
        }
    }

    /// Flat index of (row, col). Out-of-range coordinates are a caller bug.
    #[inline(always)]
    fn index(&self, row: i8, col: i8) -> usize {
        assert!(
            self.contains(row, col),
            "cell ({}, {}) outside {}x{} field",
            row,
            col,
            self.height,
            self.width
        );
        (row as usize) * self.width + (col as usize)
    }

    /// Number of rows, including the floor
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Index of the floor sentinel row
    pub fn floor_row(&self) -> usize {
        self.height - 1
    }

    /// Lowest row a piece cell may occupy
    pub fn last_playable_row(&self) -> i8 {
        self.height as i8 - 2
    }

    #[inline]
    pub fn contains(&self, row: i8, col: i8) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.height && (col as usize) < self.width
    }

    /// Whether (row, col) holds a locked cell
    ///
    /// Panics when the cell is outside the field.
    pub fn is_occupied(&self, row: i8, col: i8) -> bool {
        self.cells[self.index(row, col)]
    }

    /// Collision query for pieces: occupied, or outside the grid
    #[inline]
    pub fn is_blocked(&self, pos: GridPos) -> bool {
        !self.contains(pos.row, pos.col) || self.is_occupied(pos.row, pos.col)
    }

    /// Mark a cell permanently occupied
    pub fn occupy(&mut self, row: i8, col: i8) {
        let idx = self.index(row, col);
        self.cells[idx] = true;
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= self.height {
            return false;
        }
        self.row(row).iter().all(|&c| c)
    }

    /// Cells of one row
    pub fn row(&self, row: usize) -> &[bool] {
        let start = row * self.width;
        &self.cells[start..start + self.width]
    }

    /// Iterator over all rows top to bottom, floor included
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        self.cells.chunks_exact(self.width)
    }

    /// Empty `row` and shift every row above it down by one
    ///
    /// The top row is left empty afterwards rather than keeping a copy of its
    /// old contents, so a clear never duplicates the highest row of the stack.
    fn clear_row(&mut self, row: usize) {
        let width = self.width;

        self.cells[row * width..(row + 1) * width].fill(false);

        // copy_within handles overlapping ranges
        for r in (1..=row).rev() {
            let src = (r - 1) * width;
            self.cells.copy_within(src..src + width, r * width);
        }

        self.cells[..width].fill(false);
    }

    /// Clear every full row above the floor and return how many were cleared
    ///
    /// Rows are scanned top to bottom in a single pass. A clear only moves the
    /// rows above the cursor, which were already checked, so no full row is
    /// skipped.
    pub fn clear_full_rows(&mut self) -> usize {
        let mut cleared = 0;
        for row in 0..self.floor_row() {
            if self.is_row_full(row) {
                self.clear_row(row);
                cleared += 1;
            }
        }
        cleared
    }

    /// Number of occupied cells above the floor
    pub fn occupied_count(&self) -> usize {
        self.cells[..self.floor_row() * self.width]
            .iter()
            .filter(|&&c| c)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_row(field: &mut Field, row: i8) {
        for col in 0..field.width() as i8 {
            field.occupy(row, col);
        }
    }

    #[test]
    fn test_clear_empties_top_row_instead_of_duplicating_it() {
        let mut field = Field::new(22, 10);
        field.occupy(0, 3);
        fill_row(&mut field, 5);

        assert_eq!(field.clear_full_rows(), 1);
        assert!(field.is_occupied(1, 3));
        assert!(!field.is_occupied(0, 3));
        assert_eq!(field.occupied_count(), 1);
    }

    #[test]
    fn test_new_field_has_only_the_floor() {
        let field = Field::new(22, 10);
        assert_eq!(field.floor_row(), 21);
        assert!(field.is_row_full(21));
        assert_eq!(field.occupied_count(), 0);
        assert!(!field.is_occupied(20, 0));
    }

    #[test]
    fn test_is_blocked_outside_grid() {
        let field = Field::new(22, 10);
        assert!(field.is_blocked(GridPos::new(-1, 4)));
        assert!(field.is_blocked(GridPos::new(5, -1)));
        assert!(field.is_blocked(GridPos::new(5, 10)));
        assert!(field.is_blocked(GridPos::new(21, 3)));
        assert!(!field.is_blocked(GridPos::new(20, 3)));
    }

    #[test]
    #[should_panic]
    fn test_is_occupied_out_of_range_panics() {
        let field = Field::new(22, 10);
        field.is_occupied(22, 0);
    }

    #[test]
    fn test_clear_row_shifts_rows_above() {
        let mut field = Field::new(8, 4);
        field.occupy(2, 1);
        field.occupy(4, 3);
        fill_row(&mut field, 5);

        assert_eq!(field.clear_full_rows(), 1);
        assert!(field.is_occupied(3, 1));
        assert!(field.is_occupied(5, 3));
        assert!(!field.is_occupied(2, 1));
        assert!(!field.is_occupied(4, 3));
        assert!(field.is_row_full(7), "floor must survive clears");
    }

    #[test]
    fn test_clear_multiple_rows_with_gap() {
        let mut field = Field::new(8, 4);
        fill_row(&mut field, 6);
        field.occupy(5, 0);
        fill_row(&mut field, 4);
        field.occupy(3, 2);

        assert_eq!(field.clear_full_rows(), 2);
        assert!(field.is_occupied(6, 0));
        assert!(field.is_occupied(5, 2));
        assert_eq!(field.occupied_count(), 2);
    }

    #[test]
    fn test_clear_top_row_empties_it() {
        let mut field = Field::new(6, 4);
        fill_row(&mut field, 0);
        assert_eq!(field.clear_full_rows(), 1);
        assert_eq!(field.occupied_count(), 0);
    }
}
