//! Chord decoding and hold-repeat.
//!
//! Turns one tick's [`ButtonState`] into at most one [`Action`]. A new chord
//! fires immediately; a chord held for `hold_delay` ticks fires again and then
//! keeps firing every tick until released.

use crate::types::{Action, Button, ButtonState};

/// Map a button chord to its action
///
/// Quit wins over everything: the dedicated quit button, or all four pad
/// buttons at once. Modify turns Left/Right/Drop into rotate left, rotate
/// right and hard drop. Any other combination means nothing.
pub fn decode(state: &ButtonState) -> Option<Action> {
    let left = state.is_pressed(Button::Left);
    let right = state.is_pressed(Button::Right);
    let drop = state.is_pressed(Button::Drop);
    let modify = state.is_pressed(Button::Modify);

    if state.is_pressed(Button::Quit) || (left && right && drop && modify) {
        return Some(Action::Quit);
    }

    match (modify, left, right, drop) {
        (false, true, false, false) => Some(Action::MoveLeft),
        (false, false, true, false) => Some(Action::MoveRight),
        (false, false, false, true) => Some(Action::SoftDrop),
        (true, true, false, false) => Some(Action::RotateCcw),
        (true, false, true, false) => Some(Action::RotateCw),
        (true, false, false, true) => Some(Action::HardDrop),
        _ => None,
    }
}

/// Outcome of one tick of input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Resolution {
    /// Action to apply this tick
    pub action: Option<Action>,
    /// Soft drop is held (gravity runs at the soft-drop rate)
    pub soft_drop: bool,
}

/// Hold-repeat state machine
#[derive(Debug, Clone)]
pub struct InputResolver {
    hold_delay: u32,
    held: Option<Action>,
    /// Ticks since the hold started, saturating at `hold_delay`
    hold_ticks: u32,
    repeating: bool,
}

impl InputResolver {
    pub fn new(hold_delay: u32) -> Self {
        Self {
            hold_delay: hold_delay.max(1),
            held: None,
            hold_ticks: 0,
            repeating: false,
        }
    }

    pub fn held(&self) -> Option<Action> {
        self.held
    }

    pub fn is_repeating(&self) -> bool {
        self.repeating
    }

    /// Resolve one tick's button state
    pub fn update(&mut self, state: &ButtonState) -> Resolution {
        let Some(action) = decode(state) else {
            self.reset();
            return Resolution::default();
        };

        let fire = if self.held != Some(action) {
            self.held = Some(action);
            self.hold_ticks = 1;
            self.repeating = false;
            true
        } else if self.hold_ticks < self.hold_delay {
            self.hold_ticks += 1;
            false
        } else {
            self.repeating = true;
            action.repeats()
        };

        Resolution {
            action: fire.then_some(action),
            soft_drop: action == Action::SoftDrop,
        }
    }

    pub fn reset(&mut self) {
        self.held = None;
        self.hold_ticks = 0;
        self.repeating = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pressed(buttons: &[Button]) -> ButtonState {
        ButtonState::with(buttons)
    }

    #[test]
    fn test_chords() {
        assert_eq!(decode(&pressed(&[Button::Left])), Some(Action::MoveLeft));
        assert_eq!(decode(&pressed(&[Button::Drop])), Some(Action::SoftDrop));
        assert_eq!(
            decode(&pressed(&[Button::Modify, Button::Right])),
            Some(Action::RotateCw)
        );
        assert_eq!(
            decode(&pressed(&[Button::Modify, Button::Drop])),
            Some(Action::HardDrop)
        );
        assert_eq!(decode(&pressed(&[Button::Modify])), None);
        assert_eq!(decode(&pressed(&[Button::Left, Button::Right])), None);
        assert_eq!(decode(&ButtonState::released()), None);
    }

    #[test]
    fn test_quit_takes_priority() {
        assert_eq!(
            decode(&pressed(&[Button::Left, Button::Quit])),
            Some(Action::Quit)
        );
        assert_eq!(
            decode(&pressed(&[
                Button::Left,
                Button::Right,
                Button::Drop,
                Button::Modify
            ])),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_hold_fires_at_delay_then_every_tick() {
        let hold_delay = 5;
        let mut resolver = InputResolver::new(hold_delay);
        let left = pressed(&[Button::Left]);

        let fired: Vec<u32> = (0..hold_delay * 3)
            .filter(|_| resolver.update(&left).action == Some(Action::MoveLeft))
            .collect();

        let mut expected = vec![0];
        expected.extend(hold_delay..hold_delay * 3);
        assert_eq!(fired, expected);
        assert!(resolver.is_repeating());
    }

    #[test]
    fn test_release_resets_hold() {
        let mut resolver = InputResolver::new(3);
        let right = pressed(&[Button::Right]);

        for _ in 0..5 {
            resolver.update(&right);
        }
        assert!(resolver.is_repeating());

        assert_eq!(resolver.update(&ButtonState::released()), Resolution::default());
        assert_eq!(resolver.held(), None);
        assert!(!resolver.is_repeating());

        // Fresh press fires again immediately.
        assert_eq!(resolver.update(&right).action, Some(Action::MoveRight));
        assert_eq!(resolver.update(&right).action, None);
    }

    #[test]
    fn test_rotation_does_not_repeat() {
        let mut resolver = InputResolver::new(2);
        let rotate = pressed(&[Button::Modify, Button::Right]);

        let fired = (0..10)
            .filter(|_| resolver.update(&rotate).action.is_some())
            .count();
        assert_eq!(fired, 1);
    }

    #[test]
    fn test_changing_chord_fires_new_action() {
        let mut resolver = InputResolver::new(5);
        assert_eq!(
            resolver.update(&pressed(&[Button::Left])).action,
            Some(Action::MoveLeft)
        );
        assert_eq!(
            resolver
                .update(&pressed(&[Button::Modify, Button::Left]))
                .action,
            Some(Action::RotateCcw)
        );
    }

    #[test]
    fn test_soft_drop_flag_follows_hold() {
        let mut resolver = InputResolver::new(5);
        let drop = pressed(&[Button::Drop]);

        assert!(resolver.update(&drop).soft_drop);
        // Still held between repeats.
        let r = resolver.update(&drop);
        assert_eq!(r.action, None);
        assert!(r.soft_drop);

        assert!(!resolver.update(&ButtonState::released()).soft_drop);
    }
}
