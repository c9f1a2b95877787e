//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the rules of the game. It does no I/O of its own: the
//! display is reached through the [`render::DisplaySurface`] trait and input
//! arrives as already-resolved [`types::Action`]s.
//!
//! # Module Structure
//!
//! - [`field`]: the grid of locked cells with its floor row and line clearing
//! - [`piece`]: shape table, movement, rotation with bounds correction, falling
//! - [`rng`]: bag randomizer on a seedable LCG
//! - [`game`]: one session, advanced tick by tick
//! - [`geometry`]: grid cell to pixel rectangle mapping
//! - [`render`]: draws a [`Game`] on any [`DisplaySurface`]
//!
//! # Example
//!
//! ```
//! use pixel_tetris_core::Game;
//! use pixel_tetris_types::{Action, GameConfig};
//!
//! let mut game = Game::new(GameConfig::default(), 12345);
//!
//! game.tick(Some(Action::MoveRight), false);
//! game.tick(Some(Action::HardDrop), false);
//! assert_eq!(game.pieces_locked(), 1);
//!
//! // The next tick spawns a fresh piece.
//! let report = game.tick(None, false);
//! assert!(report.spawned.is_some());
//! ```

pub mod field;
pub mod game;
pub mod geometry;
pub mod piece;
pub mod render;
pub mod rng;

pub use pixel_tetris_types as types;

pub use field::Field;
pub use game::{EndReason, Game, GameSummary, TickReport};
pub use geometry::{Geometry, PixelRect};
pub use piece::{arrange, layout, Piece};
pub use render::{render, DisplaySurface};
pub use rng::{Bag, SimpleRng};
