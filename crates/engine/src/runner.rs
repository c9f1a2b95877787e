//! The game loop
//!
//! One iteration per tick: sample the pad, resolve an action, advance the
//! game, redraw and present, then sleep a fixed interval. The sleep does not
//! account for the time spent working, so the effective tick rate drifts with
//! render cost.

use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use log::{info, trace};

use crate::core::{render, DisplaySurface, EndReason, Game, GameSummary, Geometry};
use crate::input::{decode, ButtonSource, InputResolver, Resolution};
use crate::types::{Action, GameConfig};

/// Play one session until the quit chord or a loss.
///
/// The display is powered off before returning, whichever way the session
/// ended. I/O errors from the pad or the display abort the session.
pub fn run<D, B>(config: GameConfig, display: &mut D, buttons: &mut B, seed: u32) -> Result<GameSummary>
where
    D: DisplaySurface + ?Sized,
    B: ButtonSource + ?Sized,
{
    config.validate().context("invalid game configuration")?;

    let geometry = Geometry::new(&config);
    let mut resolver = InputResolver::new(config.hold_delay);
    let pause = Duration::from_millis(config.sleep_ms);
    let mut game = Game::new(config, seed);

    let result = play(&mut game, &geometry, &mut resolver, display, buttons, pause);
    display.power_off().context("powering off display")?;
    let end = result?;

    let summary = game.summary(end);
    info!(
        "session ended ({:?}): {} lines, {} pieces, {} ticks",
        summary.end, summary.lines_cleared, summary.pieces_locked, summary.ticks
    );
    Ok(summary)
}

fn play<D, B>(
    game: &mut Game,
    geometry: &Geometry,
    resolver: &mut InputResolver,
    display: &mut D,
    buttons: &mut B,
    pause: Duration,
) -> Result<EndReason>
where
    D: DisplaySurface + ?Sized,
    B: ButtonSource + ?Sized,
{
    loop {
        let state = buttons.sample().context("reading buttons")?;
        let input = if game.piece().is_active() {
            resolver.update(&state)
        } else {
            // Spawn tick: nothing to steer, so only quit counts. A release
            // still ends the current hold.
            let action = decode(&state);
            if action.is_none() {
                resolver.reset();
            }
            Resolution {
                action: action.filter(|a| *a == Action::Quit),
                soft_drop: false,
            }
        };
        if let Some(action) = input.action {
            trace!("tick {}: {}", game.ticks(), action.as_str());
        }
        if input.action == Some(Action::Quit) {
            return Ok(EndReason::Quit);
        }

        game.tick(input.action, input.soft_drop);
        render(game, geometry, display);
        display.present().context("presenting frame")?;

        if game.is_lost() {
            return Ok(EndReason::Lost);
        }
        if !pause.is_zero() {
            thread::sleep(pause);
        }
    }
}
