//! Immutable game configuration
//!
//! One [`GameConfig`] value is built at start-up and handed to the field,
//! piece, resolver and loop constructors. Every field has a default, so a
//! partial JSON document only overrides what it names.

use serde::Deserialize;
use thiserror::Error;

use crate::*;

/// Largest supported field height (rows, including the floor)
pub const MAX_FIELD_HEIGHT: u8 = 64;

/// Largest supported field width (columns)
pub const MAX_FIELD_WIDTH: u8 = 32;

/// Smallest supported field side
pub const MIN_FIELD_SIDE: u8 = 4;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("field must be between {min}x{min} and {max_h}x{max_w}, got {height}x{width}")]
    FieldSize {
        height: u8,
        width: u8,
        min: u8,
        max_h: u8,
        max_w: u8,
    },
    #[error("spawn cell ({row}, {col}) leaves no room for every shape")]
    SpawnOutOfField { row: i8, col: i8 },
    #[error("{0} must be at least 1")]
    ZeroInterval(&'static str),
    #[error("cell size {size} is larger than the cell pitch {pitch}")]
    CellLargerThanPitch { size: u8, pitch: u8 },
    #[error("a {height}x{width} field at pitch {pitch} does not fit a {display_w}x{display_h} display")]
    FieldDoesNotFit {
        height: u8,
        width: u8,
        pitch: u8,
        display_w: u16,
        display_h: u16,
    },
    #[error("shape set is empty")]
    NoShapes,
    #[error("invalid configuration document: {0}")]
    Parse(String),
    #[error("cannot read configuration file {path}: {reason}")]
    Read { path: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Rows including the floor sentinel
    pub field_height: u8,
    pub field_width: u8,
    pub spawn_row: i8,
    pub spawn_col: i8,
    pub cell_size: u8,
    pub cell_pitch: u8,
    pub display_width: u16,
    pub display_height: u16,
    pub wall_width: u8,
    /// Gravity interval in ticks
    pub tick_rate: u32,
    /// Gravity interval in ticks while soft drop is held
    pub soft_drop_tick_rate: u32,
    /// Ticks of continuous hold before the action repeats
    pub hold_delay: u32,
    /// Sleep between loop iterations
    pub sleep_ms: u64,
    /// Shapes dealt by the bag
    pub shapes: Vec<Shape>,
    /// Fixed RNG seed; `None` seeds from the clock
    pub seed: Option<u32>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_height: DEFAULT_FIELD_HEIGHT,
            field_width: DEFAULT_FIELD_WIDTH,
            spawn_row: DEFAULT_SPAWN_ROW,
            spawn_col: DEFAULT_SPAWN_COL,
            cell_size: DEFAULT_CELL_SIZE,
            cell_pitch: DEFAULT_CELL_PITCH,
            display_width: DEFAULT_DISPLAY_WIDTH,
            display_height: DEFAULT_DISPLAY_HEIGHT,
            wall_width: DEFAULT_WALL_WIDTH,
            tick_rate: DEFAULT_TICK_RATE,
            soft_drop_tick_rate: DEFAULT_SOFT_DROP_TICK_RATE,
            hold_delay: DEFAULT_HOLD_DELAY,
            sleep_ms: DEFAULT_SLEEP_MS,
            shapes: Shape::ALL.to_vec(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Last row a piece cell may occupy (the row above the floor)
    pub fn last_playable_row(&self) -> i8 {
        self.field_height as i8 - 2
    }

    /// Check every cross-field constraint the game relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (h, w) = (self.field_height, self.field_width);
        if h < MIN_FIELD_SIDE || w < MIN_FIELD_SIDE || h > MAX_FIELD_HEIGHT || w > MAX_FIELD_WIDTH {
            return Err(ConfigError::FieldSize {
                height: h,
                width: w,
                min: MIN_FIELD_SIDE,
                max_h: MAX_FIELD_HEIGHT,
                max_w: MAX_FIELD_WIDTH,
            });
        }

        // Spawn layouts reach one row up, two columns left (I after its root
        // shift) and one column right of the spawn cell.
        let (row, col) = (self.spawn_row, self.spawn_col);
        if row < 1 || row > self.last_playable_row() || col < 2 || col > w as i8 - 2 {
            return Err(ConfigError::SpawnOutOfField { row, col });
        }

        if self.tick_rate == 0 {
            return Err(ConfigError::ZeroInterval("tick_rate"));
        }
        if self.soft_drop_tick_rate == 0 {
            return Err(ConfigError::ZeroInterval("soft_drop_tick_rate"));
        }
        if self.hold_delay == 0 {
            return Err(ConfigError::ZeroInterval("hold_delay"));
        }
        if self.cell_pitch == 0 {
            return Err(ConfigError::ZeroInterval("cell_pitch"));
        }

        if self.cell_size > self.cell_pitch {
            return Err(ConfigError::CellLargerThanPitch {
                size: self.cell_size,
                pitch: self.cell_pitch,
            });
        }

        // The field lies on its side: rows run along the display width and
        // columns across the height between the two walls.
        let pitch = self.cell_pitch as u32;
        let across = w as u32 * pitch;
        let along = (h as u32 - 1) * pitch - pitch / 2;
        let walls = 2 * self.wall_width as u32;
        if across + walls > self.display_height as u32 || along >= self.display_width as u32 {
            return Err(ConfigError::FieldDoesNotFit {
                height: h,
                width: w,
                pitch: self.cell_pitch,
                display_w: self.display_width,
                display_h: self.display_height,
            });
        }

        if self.shapes.is_empty() {
            return Err(ConfigError::NoShapes);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = GameConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.last_playable_row(), 20);
        assert_eq!(config.shapes.len(), 7);
    }

    #[test]
    fn partial_document_keeps_other_defaults() {
        let config: GameConfig =
            serde_json::from_str(r#"{"tick_rate": 4, "shapes": ["I", "O"]}"#).unwrap();
        assert_eq!(config.tick_rate, 4);
        assert_eq!(config.shapes, vec![Shape::I, Shape::O]);
        assert_eq!(config.field_height, DEFAULT_FIELD_HEIGHT);
        assert_eq!(config.hold_delay, DEFAULT_HOLD_DELAY);
    }

    #[test]
    fn rejects_zero_intervals() {
        let config = GameConfig {
            hold_delay: 0,
            ..GameConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::ZeroInterval("hold_delay"))
        );
    }

    #[test]
    fn rejects_spawn_against_the_wall() {
        let config = GameConfig {
            spawn_col: 1,
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::SpawnOutOfField { row: 1, col: 1 })
        ));
    }

    #[test]
    fn rejects_field_wider_than_display() {
        let config = GameConfig {
            field_width: 12,
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::FieldDoesNotFit { .. })
        ));
    }

    #[test]
    fn rejects_empty_shape_set() {
        let config = GameConfig {
            shapes: Vec::new(),
            ..GameConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::NoShapes));
    }
}
