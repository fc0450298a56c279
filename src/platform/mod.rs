//! Host abstraction layer
//!
//! Handles what the simulation treats as external:
//! - Input events
//! - Frame pacing
//! - Terminal setup and key polling

pub mod input;
pub mod terminal;
pub mod time;

pub use input::{InputSource, ScriptedInput};
pub use terminal::{KeyTracker, TerminalInput, TerminalSession};
pub use time::{Clock, FrameClock, NoWait};
