//! Pixel display back ends.
//!
//! The game draws into a monochrome panel through
//! [`core::DisplaySurface`]. This crate provides the panel in two forms: a
//! terminal rendition built on crossterm half-block glyphs, and an in-memory
//! one for tests and headless runs.

pub mod fb;
pub mod headless;
pub mod renderer;

pub use pixel_tetris_core as core;
pub use pixel_tetris_types as types;

pub use fb::PixelBuffer;
pub use headless::HeadlessDisplay;
pub use renderer::{encode_diff_into, encode_full_into, glyph, TerminalDisplay};
