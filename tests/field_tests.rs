//! Field tests - occupancy, floor sentinel and line clearing

use pixel_tetris::core::{Field, Piece};
use pixel_tetris::types::{GridPos, Shape};

fn fill_row_except(field: &mut Field, row: i8, gaps: &[i8]) {
    for col in 0..field.width() as i8 {
        if !gaps.contains(&col) {
            field.occupy(row, col);
        }
    }
}

#[test]
fn test_field_new_has_only_floor() {
    let field = Field::new(22, 10);
    assert_eq!(field.height(), 22);
    assert_eq!(field.width(), 10);
    assert_eq!(field.floor_row(), 21);
    assert_eq!(field.last_playable_row(), 20);

    for row in 0..21 {
        assert!(field.row(row).iter().all(|&c| !c), "row {} should be empty", row);
    }
    assert!(field.is_row_full(21));
    assert_eq!(field.occupied_count(), 0);
}

#[test]
fn test_out_of_field_is_blocked() {
    let field = Field::new(22, 10);
    assert!(field.is_blocked(GridPos::new(-1, 0)));
    assert!(field.is_blocked(GridPos::new(0, -1)));
    assert!(field.is_blocked(GridPos::new(0, 10)));
    assert!(field.is_blocked(GridPos::new(21, 3)));
    assert!(!field.is_blocked(GridPos::new(20, 3)));
}

#[test]
#[should_panic]
fn test_out_of_range_query_panics() {
    let field = Field::new(22, 10);
    field.is_occupied(22, 0);
}

#[test]
fn test_clear_single_full_row_shifts_above_down() {
    let mut field = Field::new(22, 10);
    fill_row_except(&mut field, 20, &[]);
    field.occupy(19, 2);
    field.occupy(18, 7);

    assert_eq!(field.clear_full_rows(), 1);

    assert!(field.is_occupied(20, 2));
    assert!(field.is_occupied(19, 7));
    assert!(!field.is_occupied(19, 2));
    assert!(!field.is_occupied(18, 7));
    assert_eq!(field.occupied_count(), 2);
    // Floor untouched
    assert!(field.is_row_full(21));
}

#[test]
fn test_clear_without_full_rows_is_noop() {
    let mut field = Field::new(22, 10);
    fill_row_except(&mut field, 20, &[9]);
    field.occupy(5, 5);
    let before = field.clone();

    assert_eq!(field.clear_full_rows(), 0);
    assert_eq!(field, before);
}

#[test]
fn test_clear_non_adjacent_rows() {
    let mut field = Field::new(22, 10);
    fill_row_except(&mut field, 20, &[]);
    fill_row_except(&mut field, 19, &[0]);
    fill_row_except(&mut field, 18, &[]);
    field.occupy(17, 4);

    assert_eq!(field.clear_full_rows(), 2);

    // Row 19 (gap at col 0) ends up on row 20, the marker on row 19.
    assert!(!field.is_occupied(20, 0));
    assert!(field.is_occupied(20, 1));
    assert!(field.is_occupied(19, 4));
    assert_eq!(field.occupied_count(), 10);
}

#[test]
fn test_clear_top_row_leaves_it_empty() {
    let mut field = Field::new(8, 4);
    fill_row_except(&mut field, 0, &[]);

    assert_eq!(field.clear_full_rows(), 1);
    assert_eq!(field.occupied_count(), 0);
}

#[test]
fn test_piece_lock_completes_row() {
    let mut field = Field::new(22, 10);
    fill_row_except(&mut field, 20, &[4]);

    // Vertical I bar over column 4: fall clear of the top, then stand it up.
    let mut piece = Piece::spawn_at(Shape::I, GridPos::new(1, 4));
    piece.fall(&mut field);
    piece.fall(&mut field);
    assert!(piece.rotate_cw(&field));
    assert!(piece.cells().iter().all(|c| c.col == 4));

    piece.hard_drop(&mut field);
    assert!(!piece.is_active());
    assert!(field.is_row_full(20));

    assert_eq!(field.clear_full_rows(), 1);
    // The rest of the bar slid down one row.
    assert_eq!(field.occupied_count(), 3);
    assert!(field.is_occupied(20, 4));
    assert!(field.is_occupied(18, 4));
    assert!(!field.is_occupied(17, 4));
}
