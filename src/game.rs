//! Main loop orchestration
//!
//! One frame is: poll all pending input, step the simulation, draw, then wait
//! for the next frame slot.

use std::io;

use crate::platform::{Clock, InputSource};
use crate::renderer::{Renderer, draw_frame};
use crate::sim::{GameState, TickOutcome, tick};

/// Owns the game state and the host collaborators
pub struct Game<R, I, C> {
    state: GameState,
    renderer: R,
    input: I,
    clock: C,
}

impl<R: Renderer, I: InputSource, C: Clock> Game<R, I, C> {
    pub fn new(state: GameState, renderer: R, input: I, clock: C) -> Self {
        Self {
            state,
            renderer,
            input,
            clock,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Run a single frame
    pub fn step(&mut self) -> io::Result<TickOutcome> {
        let events = self.input.poll()?;
        if tick(&mut self.state, &events) == TickOutcome::Quit {
            return Ok(TickOutcome::Quit);
        }
        draw_frame(&self.state, &mut self.renderer)?;
        self.clock.tick(self.state.settings.fps);
        Ok(TickOutcome::Continue)
    }

    /// Run frames until the player quits
    pub fn run(&mut self) -> io::Result<()> {
        log::info!("Starting run with seed {}", self.state.seed);
        while self.step()? == TickOutcome::Continue {}
        log::info!(
            "Session over after {} frames, best {} m",
            self.state.frame,
            self.state.best_score.max(self.state.score)
        );
        Ok(())
    }

    /// Give back the state and collaborators
    pub fn into_parts(self) -> (GameState, R, I, C) {
        (self.state, self.renderer, self.input, self.clock)
    }
}
