//! Keyboard-backed button source.
//!
//! Supports terminals that do not emit key release events by using a timeout:
//! a button counts as held while press or auto-repeat events keep arriving.

use std::io;
use std::time::{Duration, Instant};

use arrayvec::ArrayVec;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use crate::map::buttons_for_key;
use crate::types::Button;
use crate::ButtonSource;

// A short timeout stops a single tap from turning into a sustained hold on
// terminals without key-release events.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u64 = 150;

/// Upper bound on events handled per poll, so a burst cannot stall the loop.
const MAX_EVENTS_PER_POLL: usize = 32;

#[derive(Debug, Clone)]
pub struct KeyboardButtons {
    /// When each button was last reported down, by `Button::index`
    last_seen: [Option<Instant>; 5],
    /// Whether the terminal reports key releases
    release_events: bool,
    key_release_timeout: Duration,
}

impl KeyboardButtons {
    pub fn new(release_events: bool) -> Self {
        Self {
            last_seen: [None; 5],
            release_events,
            key_release_timeout: Duration::from_millis(DEFAULT_KEY_RELEASE_TIMEOUT_MS),
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.key_release_timeout = Duration::from_millis(timeout_ms);
        self
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        let pressed = match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => Some(now),
            KeyEventKind::Release => None,
        };
        for &button in buttons_for_key(key) {
            self.last_seen[button.index()] = pressed;
        }
    }

    /// Release buttons that have not been reported within the timeout.
    pub fn expire(&mut self, now: Instant) {
        if self.release_events {
            return;
        }
        for seen in self.last_seen.iter_mut() {
            if let Some(at) = *seen {
                if now.saturating_duration_since(at) > self.key_release_timeout {
                    *seen = None;
                }
            }
        }
    }
}

impl ButtonSource for KeyboardButtons {
    fn poll(&mut self) -> io::Result<()> {
        let mut keys = ArrayVec::<KeyEvent, MAX_EVENTS_PER_POLL>::new();
        while !keys.is_full() && event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                keys.push(key);
            }
        }

        if keys.is_full() {
            log::debug!("key burst capped at {} events this poll", MAX_EVENTS_PER_POLL);
        }

        let now = Instant::now();
        for key in keys {
            log::trace!("key {:?} {:?}", key.code, key.kind);
            self.handle_key(key, now);
        }
        self.expire(now);
        Ok(())
    }

    fn is_pressed(&self, button: Button) -> bool {
        self.last_seen[button.index()].is_some()
    }
}
