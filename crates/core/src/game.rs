//! Game module - one session of play
//!
//! Ties the field, the active piece and the bag together and advances them one
//! tick at a time. Input resolution, rendering and pacing live outside; the
//! caller hands in at most one [`Action`] per tick.

use log::{debug, info};

use crate::field::Field;
use crate::piece::Piece;
use crate::rng::Bag;
use crate::types::{Action, GameConfig, Shape};

/// Why a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndReason {
    /// The quit chord was pressed
    Quit,
    /// A new piece spawned into occupied cells
    Lost,
}

/// Final result handed back to the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSummary {
    pub lines_cleared: u32,
    pub pieces_locked: u32,
    pub ticks: u64,
    pub end: EndReason,
}

/// What happened during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickReport {
    /// The active piece locked this tick
    pub locked: bool,
    /// Rows removed this tick
    pub lines_cleared: u32,
    /// Shape spawned this tick
    pub spawned: Option<Shape>,
    /// The session is lost
    pub lost: bool,
}

#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    field: Field,
    piece: Piece,
    bag: Bag,
    /// Ticks since the last gravity step
    gravity_ticks: u32,
    ticks: u64,
    lines_cleared: u32,
    pieces_locked: u32,
    lost: bool,
}

impl Game {
    /// Start a session and spawn the first piece
    ///
    /// `config` must have passed [`GameConfig::validate`].
    pub fn new(config: GameConfig, seed: u32) -> Self {
        let field = Field::new(config.field_height, config.field_width);
        let mut bag = Bag::with_shapes(&config.shapes, seed);
        let shape = bag.next();
        let piece = Piece::spawn(shape, &config);
        info!(
            "new game: {}x{} field, seed {}, first piece {}",
            config.field_height,
            config.field_width,
            seed,
            shape.as_str()
        );

        Self {
            config,
            field,
            piece,
            bag,
            gravity_ticks: 0,
            ticks: 0,
            lines_cleared: 0,
            pieces_locked: 0,
            lost: false,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn piece(&self) -> &Piece {
        &self.piece
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn is_lost(&self) -> bool {
        self.lost
    }

    pub fn summary(&self, end: EndReason) -> GameSummary {
        GameSummary {
            lines_cleared: self.lines_cleared,
            pieces_locked: self.pieces_locked,
            ticks: self.ticks,
            end,
        }
    }

    /// Apply one action to the active piece. Returns whether anything changed.
    ///
    /// `SoftDrop` only changes the gravity interval (see [`Game::tick`]) and
    /// `Quit` is handled by the caller, so both return false here.
    pub fn apply_action(&mut self, action: Action) -> bool {
        if self.lost || !self.piece.is_active() {
            return false;
        }
        match action {
            Action::MoveLeft => self.piece.move_left(&self.field),
            Action::MoveRight => self.piece.move_right(&self.field),
            Action::RotateCw => self.piece.rotate_cw(&self.field),
            Action::RotateCcw => self.piece.rotate_ccw(&self.field),
            Action::HardDrop => {
                let rows = self.piece.hard_drop(&mut self.field);
                self.on_lock();
                debug!("hard drop: {} rows", rows);
                true
            }
            Action::SoftDrop | Action::Quit => false,
        }
    }

    /// Advance one tick
    ///
    /// With an active piece: apply `action`, then step gravity when the
    /// interval has elapsed (`soft_drop_tick_rate` while `soft_drop` is held).
    /// With a locked piece: clear full rows, spawn the next shape and check for
    /// a loss.
    pub fn tick(&mut self, action: Option<Action>, soft_drop: bool) -> TickReport {
        let mut report = TickReport::default();
        if self.lost {
            report.lost = true;
            return report;
        }

        if self.piece.is_active() {
            if let Some(action) = action {
                self.apply_action(action);
            }

            let interval = if soft_drop {
                self.config.soft_drop_tick_rate
            } else {
                self.config.tick_rate
            };
            if self.gravity_ticks >= interval {
                if self.piece.fall(&mut self.field) {
                    self.on_lock();
                }
                self.gravity_ticks = 0;
            }
            report.locked = !self.piece.is_active();
        } else {
            let cleared = self.field.clear_full_rows() as u32;
            if cleared > 0 {
                self.lines_cleared += cleared;
                debug!("cleared {} rows ({} total)", cleared, self.lines_cleared);
            }
            report.lines_cleared = cleared;

            let shape = self.bag.next();
            self.piece = Piece::spawn(shape, &self.config);
            report.spawned = Some(shape);
            debug!("spawned {}", shape.as_str());

            if self.spawn_blocked() {
                self.lost = true;
                report.lost = true;
                info!(
                    "game lost after {} pieces, {} lines",
                    self.pieces_locked, self.lines_cleared
                );
            }
        }

        self.gravity_ticks += 1;
        self.ticks += 1;
        report
    }

    fn on_lock(&mut self) {
        self.pieces_locked += 1;
        debug!(
            "locked {} at {:?}",
            self.piece.shape().as_str(),
            self.piece.root()
        );
    }

    /// A fresh piece loses when it overlaps the stack or when the spawn row is
    /// occupied in any of its columns.
    fn spawn_blocked(&self) -> bool {
        let spawn_row = self.config.spawn_row;
        self.piece.collides(&self.field)
            || self
                .piece
                .cells()
                .iter()
                .any(|c| self.field.is_occupied(spawn_row, c.col))
    }
}
