//! Input module.
//!
//! Buttons are reached through the [`ButtonSource`] trait and turned into game
//! actions by the [`InputResolver`]. Two sources ship with the crate: a
//! keyboard source on `crossterm` and a scripted source for tests and
//! benchmarks.

use std::io;

pub mod keyboard;
pub mod map;
pub mod resolver;
pub mod scripted;

pub use pixel_tetris_types as types;

pub use keyboard::KeyboardButtons;
pub use map::buttons_for_key;
pub use resolver::{decode, InputResolver, Resolution};
pub use scripted::ScriptedButtons;

use types::{Button, ButtonState};

/// Debounced logical press state of the pad, sampled once per tick
pub trait ButtonSource {
    /// Refresh the press state; called once per tick before any `is_pressed`
    fn poll(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn is_pressed(&self, button: Button) -> bool;

    /// Poll and collect every button's state
    fn sample(&mut self) -> io::Result<ButtonState> {
        self.poll()?;
        let mut state = ButtonState::released();
        for button in Button::ALL {
            state.set(button, self.is_pressed(button));
        }
        Ok(state)
    }
}
