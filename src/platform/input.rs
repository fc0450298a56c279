//! Input sources

use std::collections::VecDeque;
use std::io;

use crate::sim::InputEvent;

/// Produces the input events for one frame
pub trait InputSource {
    /// Drain every event pending since the last poll
    fn poll(&mut self) -> io::Result<Vec<InputEvent>>;
}

/// Replays a fixed list of per-frame event batches.
///
/// Once the script runs out it yields `Quit`, so a game loop driven by it
/// always terminates.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: VecDeque<Vec<InputEvent>>,
}

impl ScriptedInput {
    pub fn new(frames: impl IntoIterator<Item = Vec<InputEvent>>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }

    /// `count` frames with no input
    pub fn idle(count: usize) -> Self {
        Self::new(std::iter::repeat_n(Vec::new(), count))
    }

    pub fn push_frame(&mut self, events: Vec<InputEvent>) {
        self.frames.push_back(events);
    }

    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> io::Result<Vec<InputEvent>> {
        Ok(self
            .frames
            .pop_front()
            .unwrap_or_else(|| vec![InputEvent::Quit]))
    }
}
