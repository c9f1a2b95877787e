//! Key mapping from terminal events to pad buttons.
//!
//! The pad has four buttons, so chords carry most actions. A few extra keys
//! stand for a whole chord, which keeps the game playable on terminals that
//! cannot report two keys held at once.

use crate::types::Button;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key to the pad buttons it presses.
pub fn buttons_for_key(key: KeyEvent) -> &'static [Button] {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return &[Button::Quit];
    }

    match key.code {
        // Pad
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            &[Button::Left]
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            &[Button::Right]
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            &[Button::Drop]
        }
        KeyCode::Char('m') | KeyCode::Char('M') | KeyCode::Tab => &[Button::Modify],

        // Chord shortcuts
        KeyCode::Up
        | KeyCode::Char('x')
        | KeyCode::Char('X')
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W') => &[Button::Modify, Button::Right],
        KeyCode::Char('z') | KeyCode::Char('Z') | KeyCode::Char('y') | KeyCode::Char('Y') => {
            &[Button::Modify, Button::Left]
        }
        KeyCode::Char(' ') => &[Button::Modify, Button::Drop],

        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => &[Button::Quit],

        _ => &[],
    }
}
