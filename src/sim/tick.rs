//! Per-frame step
//!
//! Applies the frame's input events, then advances the world once.

use super::input::{InputEvent, Key};
use super::state::GameState;

/// What the caller should do after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    Quit,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, events: &[InputEvent]) -> TickOutcome {
    for event in events {
        match event {
            InputEvent::Quit | InputEvent::KeyDown(Key::Escape) => {
                log::info!("Quit requested");
                return TickOutcome::Quit;
            }
            InputEvent::KeyDown(Key::Enter) if state.player.dead => state.reset(),
            _ => {}
        }
        state.player.handle_input(event);
    }

    state.update();
    TickOutcome::Continue
}
