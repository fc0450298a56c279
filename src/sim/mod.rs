//! Frame-stepped simulation module
//!
//! All gameplay logic lives here:
//! - Fixed per-frame step (no delta-time scaling)
//! - Seeded RNG only
//! - Stable iteration order (platforms in generation order)
//! - No rendering or host dependencies

pub mod camera;
pub mod input;
pub mod level;
pub mod player;
pub mod sprite;
pub mod state;
pub mod tick;

pub use camera::Camera;
pub use input::{HorizontalInput, InputEvent, Key};
pub use level::{Bonus, Level, Platform, PlatformKind};
pub use player::Player;
pub use sprite::{Color, Rect, Sprite};
pub use state::{GamePhase, GameState, meters_climbed};
pub use tick::{TickOutcome, tick};
