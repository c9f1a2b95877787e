//! Pixel Tetris (workspace facade crate).
//!
//! Re-exports the workspace crates as `pixel_tetris::{core,engine,input,term,types}` so the
//! binary, integration tests and benchmarks share one import root.

pub use pixel_tetris_core as core;
pub use pixel_tetris_engine as engine;
pub use pixel_tetris_input as input;
pub use pixel_tetris_term as term;
pub use pixel_tetris_types as types;
