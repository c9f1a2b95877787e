//! Shared types for the pixel-tetris workspace
//!
//! Pure data types used by every other crate: shapes, rotation states, grid
//! positions, buttons and actions, plus the immutable [`GameConfig`].
//!
//! # Example
//!
//! ```
//! use pixel_tetris_types::{Rotation, Shape, DEFAULT_FIELD_HEIGHT, DEFAULT_FIELD_WIDTH};
//!
//! let shape = Shape::from_str("t").unwrap();
//! assert_eq!(shape, Shape::T);
//!
//! assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
//!
//! // The bottom row of the default field is the floor sentinel.
//! assert_eq!(DEFAULT_FIELD_HEIGHT, 22);
//! assert_eq!(DEFAULT_FIELD_WIDTH, 10);
//! ```

pub mod config;

pub use config::{ConfigError, GameConfig};

/// Field height in rows, including the floor sentinel row
pub const DEFAULT_FIELD_HEIGHT: u8 = 22;

/// Field width in columns
pub const DEFAULT_FIELD_WIDTH: u8 = 10;

/// Row of the root cell of a freshly spawned piece
pub const DEFAULT_SPAWN_ROW: i8 = 1;

/// Column of the root cell of a freshly spawned piece
pub const DEFAULT_SPAWN_COL: i8 = 4;

/// Side of a drawn cell in pixels
pub const DEFAULT_CELL_SIZE: u8 = 4;

/// Distance in pixels between two adjacent cells
pub const DEFAULT_CELL_PITCH: u8 = 6;

/// Display size in pixels (landscape, the field is drawn on its side)
pub const DEFAULT_DISPLAY_WIDTH: u16 = 128;
pub const DEFAULT_DISPLAY_HEIGHT: u16 = 64;

/// Space reserved for each side wall in pixels
pub const DEFAULT_WALL_WIDTH: u8 = 2;

/// Ticks between two gravity steps
pub const DEFAULT_TICK_RATE: u32 = 10;

/// Ticks between two gravity steps while soft drop is held
pub const DEFAULT_SOFT_DROP_TICK_RATE: u32 = 2;

/// Ticks a button must be held before it starts repeating
pub const DEFAULT_HOLD_DELAY: u32 = 5;

/// Sleep at the end of every loop iteration in milliseconds
pub const DEFAULT_SLEEP_MS: u64 = 1;

/// The seven piece shapes
///
/// The discriminant order is the bag index used by the randomizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Deserialize)]
pub enum Shape {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl Shape {
    /// Every shape, in bag-index order
    pub const ALL: [Shape; 7] = [
        Shape::I,
        Shape::J,
        Shape::L,
        Shape::O,
        Shape::S,
        Shape::T,
        Shape::Z,
    ];

    /// Position of this shape in [`Shape::ALL`]
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Parse a shape from its letter (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use pixel_tetris_types::Shape;
    ///
    /// assert_eq!(Shape::from_str("i"), Some(Shape::I));
    /// assert_eq!(Shape::from_str("O"), Some(Shape::O));
    /// assert_eq!(Shape::from_str("x"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(Shape::I),
            "j" => Some(Shape::J),
            "l" => Some(Shape::L),
            "o" => Some(Shape::O),
            "s" => Some(Shape::S),
            "t" => Some(Shape::T),
            "z" => Some(Shape::Z),
            _ => None,
        }
    }

    /// Uppercase letter of the shape
    pub fn as_str(&self) -> &'static str {
        match self {
            Shape::I => "I",
            Shape::J => "J",
            Shape::L => "L",
            Shape::O => "O",
            Shape::S => "S",
            Shape::T => "T",
            Shape::Z => "Z",
        }
    }
}

/// Rotation state of a piece
///
/// - **North**: spawn orientation (state 0)
/// - **East**: one right rotation (state 1)
/// - **South**: state 2
/// - **West**: state 3
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Rotate clockwise (state + 1 mod 4)
    ///
    /// # Examples
    ///
    /// ```
    /// use pixel_tetris_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
    /// assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    /// Rotate counter-clockwise (state - 1 mod 4, wrapping 0 to 3)
    ///
    /// # Examples
    ///
    /// ```
    /// use pixel_tetris_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_ccw(), Rotation::West);
    /// assert_eq!(Rotation::East.rotate_ccw(), Rotation::North);
    /// ```
    pub fn rotate_ccw(&self) -> Self {
        match self {
            Rotation::North => Rotation::West,
            Rotation::West => Rotation::South,
            Rotation::South => Rotation::East,
            Rotation::East => Rotation::North,
        }
    }

    /// Numeric rotation state in `0..4`
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// A cell position in field coordinates
///
/// Row 0 is the top row; rows grow downwards. Columns grow to the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridPos {
    pub row: i8,
    pub col: i8,
}

impl GridPos {
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// Translate by `(drow, dcol)`
    #[inline]
    pub const fn offset(self, drow: i8, dcol: i8) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }
}

/// Logical buttons of the input pad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Left,
    Right,
    Drop,
    Modify,
    /// Dedicated quit signal (not present on the four-button pad)
    Quit,
}

impl Button {
    pub const ALL: [Button; 5] = [
        Button::Left,
        Button::Right,
        Button::Drop,
        Button::Modify,
        Button::Quit,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Debounced press state of every button, sampled once per tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct ButtonState {
    pressed: [bool; 5],
}

impl ButtonState {
    /// No button pressed
    pub const fn released() -> Self {
        Self { pressed: [false; 5] }
    }

    /// State with exactly the given buttons pressed
    pub fn with(buttons: &[Button]) -> Self {
        let mut state = Self::released();
        for &button in buttons {
            state.set(button, true);
        }
        state
    }

    pub fn set(&mut self, button: Button, pressed: bool) {
        self.pressed[button.index()] = pressed;
    }

    #[inline]
    pub fn is_pressed(&self, button: Button) -> bool {
        self.pressed[button.index()]
    }

    pub fn any(&self) -> bool {
        self.pressed.iter().any(|&p| p)
    }
}

/// Actions the input resolver can produce for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Move piece one column left
    MoveLeft,
    /// Move piece one column right
    MoveRight,
    /// Rotate one state clockwise
    RotateCw,
    /// Rotate one state counter-clockwise
    RotateCcw,
    /// Shorten the gravity interval while held
    SoftDrop,
    /// Drop the piece to its resting row and lock it
    HardDrop,
    /// End the session
    Quit,
}

impl Action {
    /// Whether holding the chord keeps firing this action after the hold delay
    ///
    /// Rotations fire once per press; so does quit, which ends the session.
    pub fn repeats(&self) -> bool {
        !matches!(self, Action::RotateCw | Action::RotateCcw | Action::Quit)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::MoveLeft => "moveLeft",
            Action::MoveRight => "moveRight",
            Action::RotateCw => "rotateCw",
            Action::RotateCcw => "rotateCcw",
            Action::SoftDrop => "softDrop",
            Action::HardDrop => "hardDrop",
            Action::Quit => "quit",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_indices_follow_all_order() {
        for (i, shape) in Shape::ALL.iter().enumerate() {
            assert_eq!(shape.index(), i);
            assert_eq!(Shape::from_str(shape.as_str()), Some(*shape));
        }
    }

    #[test]
    fn rotation_cw_and_ccw_are_inverse() {
        for rotation in [
            Rotation::North,
            Rotation::East,
            Rotation::South,
            Rotation::West,
        ] {
            assert_eq!(rotation.rotate_cw().rotate_ccw(), rotation);
            assert_eq!(
                rotation.rotate_cw().rotate_cw().rotate_cw().rotate_cw(),
                rotation
            );
        }
        assert_eq!(Rotation::West.index(), 3);
    }

    #[test]
    fn button_state_tracks_each_button() {
        let mut state = ButtonState::with(&[Button::Left, Button::Modify]);
        assert!(state.is_pressed(Button::Left));
        assert!(state.is_pressed(Button::Modify));
        assert!(!state.is_pressed(Button::Right));

        state.set(Button::Left, false);
        state.set(Button::Modify, false);
        assert!(!state.any());
    }

    #[test]
    fn rotations_do_not_repeat() {
        assert!(Action::MoveLeft.repeats());
        assert!(Action::MoveRight.repeats());
        assert!(Action::SoftDrop.repeats());
        assert!(Action::HardDrop.repeats());
        assert!(!Action::RotateCw.repeats());
        assert!(!Action::RotateCcw.repeats());
        assert!(!Action::Quit.repeats());
    }
}
