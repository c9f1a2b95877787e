//! Button source that replays a fixed per-tick script.

use std::io;

use crate::types::{Button, ButtonState};
use crate::ButtonSource;

/// Replays one [`ButtonState`] per poll, then reports everything released
#[derive(Debug, Clone, Default)]
pub struct ScriptedButtons {
    script: Vec<ButtonState>,
    cursor: usize,
    current: ButtonState,
}

impl ScriptedButtons {
    pub fn new(script: Vec<ButtonState>) -> Self {
        Self {
            script,
            cursor: 0,
            current: ButtonState::released(),
        }
    }

    /// Append `state` for `ticks` consecutive polls
    pub fn hold(mut self, state: ButtonState, ticks: usize) -> Self {
        self.script.extend(std::iter::repeat(state).take(ticks));
        self
    }

    /// Append `ticks` polls with nothing pressed
    pub fn idle(self, ticks: usize) -> Self {
        self.hold(ButtonState::released(), ticks)
    }

    /// Append one poll with exactly `buttons` pressed
    pub fn tap(self, buttons: &[Button]) -> Self {
        self.hold(ButtonState::with(buttons), 1)
    }

    /// Polls consumed so far
    pub fn position(&self) -> usize {
        self.cursor
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.script.len()
    }
}

impl ButtonSource for ScriptedButtons {
    fn poll(&mut self) -> io::Result<()> {
        self.current = self
            .script
            .get(self.cursor)
            .copied()
            .unwrap_or_else(ButtonState::released);
        self.cursor += 1;
        Ok(())
    }

    fn is_pressed(&self, button: Button) -> bool {
        self.current.is_pressed(button)
    }
}
