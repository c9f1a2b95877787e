//! Session driver
//!
//! Wires the game core to a [`input::ButtonSource`] and a
//! [`core::DisplaySurface`], and loads the [`types::GameConfig`] the session
//! runs with.

pub mod config;
pub mod runner;

pub use pixel_tetris_core as core;
pub use pixel_tetris_input as input;
pub use pixel_tetris_types as types;

pub use runner::run;
