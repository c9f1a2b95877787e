//! Pixel Tetris runner (default binary).
//!
//! Plays one session on a terminal rendition of the pixel panel, with the
//! keyboard standing in for the four-button pad. Prints the result on exit.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use log::{info, warn};

use pixel_tetris::core::{EndReason, GameSummary};
use pixel_tetris::engine::{self, config};
use pixel_tetris::input::KeyboardButtons;
use pixel_tetris::term::TerminalDisplay;

fn main() -> Result<()> {
    env_logger::init();

    let config = config::load()?;
    let seed = config.seed.unwrap_or_else(clock_seed);
    info!(
        "starting: {}x{} field, tick rate {}, seed {}",
        config.field_height, config.field_width, config.tick_rate, seed
    );

    let mut term = TerminalDisplay::new(config.display_width, config.display_height);
    term.enter()?;
    let mut buttons = KeyboardButtons::new(term.reports_key_release());

    let result = engine::run(config, &mut term, &mut buttons, seed);

    // Always try to restore terminal state.
    if let Err(e) = term.exit() {
        warn!("failed to restore terminal: {:#}", e);
    }

    let summary = result?;
    print_summary(&summary);
    Ok(())
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u32)
        .unwrap_or(1)
}

fn print_summary(summary: &GameSummary) {
    let how = match summary.end {
        EndReason::Quit => "quit",
        EndReason::Lost => "game over",
    };
    println!(
        "{}: {} lines cleared, {} pieces placed",
        how, summary.lines_cleared, summary.pieces_locked
    );
}
