//! Sky Hop entry point
//!
//! Plays in the terminal. Usage: `sky-hop [settings.json]`.
//! Arrow keys (or A/D) move, Enter restarts after a fall, Esc or Q quits.
//! Logs go to stderr; set `RUST_LOG` and redirect stderr to read them.

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use glam::Vec2;

use sky_hop::platform::{FrameClock, TerminalInput, TerminalSession};
use sky_hop::renderer::TerminalRenderer;
use sky_hop::sim::GameState;
use sky_hop::{Game, Settings};

fn main() -> anyhow::Result<()> {
    env_logger::init();
    log::info!("Sky Hop starting...");

    let settings = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => Settings::load(&path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => Settings::default(),
    };

    let seed: u64 = rand::random();
    let state = GameState::new(settings.clone(), seed).context("building the world")?;

    let session = TerminalSession::start().context("entering terminal raw mode")?;
    let world = Vec2::new(settings.window_width, settings.window_height);
    let renderer = TerminalRenderer::new(io::stdout(), world).context("sizing the terminal")?;
    let input = TerminalInput::new(&session);

    let mut game = Game::new(state, renderer, input, FrameClock::new());
    let result = game.run();
    drop(session);

    result.context("game loop failed")?;
    let (state, ..) = game.into_parts();
    println!(
        "You climbed {} m (best {} m)",
        state.score,
        state.best_score.max(state.score)
    );
    Ok(())
}
