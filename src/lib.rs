//! Sky Hop - An endless vertical platformer
//!
//! Core modules:
//! - `sim`: Frame-stepped simulation (camera, level generation, player physics)
//! - `renderer`: Scene composition against a rectangle/text drawing backend
//! - `platform`: Host abstraction (input events, frame pacing, terminal input)
//! - `settings`: Startup constants and their validation
//! - `game`: Orchestrator tying input, simulation and rendering together

pub mod error;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{ConfigError, SimError};
pub use game::Game;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Window size in world units
    pub const WINDOW_WIDTH: f32 = 600.0;
    pub const WINDOW_HEIGHT: f32 = 800.0;
    /// Render frame rate (one simulation step per frame)
    pub const FPS: u32 = 60;

    /// Player defaults
    pub const PLAYER_WIDTH: f32 = 25.0;
    pub const PLAYER_HEIGHT: f32 = 35.0;
    pub const PLAYER_MAX_SPEED_X: f32 = 20.0;
    pub const PLAYER_MAX_SPEED_Y: f32 = 100.0;
    pub const PLAYER_JUMP_FORCE: f32 = 20.0;
    pub const PLAYER_BONUS_JUMP_FORCE: f32 = 70.0;
    /// Horizontal speed given on the first frame of a key press
    pub const PLAYER_START_SPEED: f32 = 1.5;
    pub const PLAYER_ACCEL: f32 = 0.5;
    pub const PLAYER_DECCEL: f32 = 0.6;
    pub const GRAVITY: f32 = 0.98;

    /// Platform defaults
    pub const PLATFORM_WIDTH: f32 = 100.0;
    pub const PLATFORM_HEIGHT: f32 = 10.0;
    pub const PLATFORM_DISTANCE_MIN: u32 = 50;
    pub const PLATFORM_DISTANCE_MAX: u32 = 210;
    pub const MAX_PLATFORMS: usize = 10;
    /// One-in-(n+1) chance per generated platform
    pub const BONUS_SPAWN_CHANCE: u32 = 10;
    pub const BREAKABLE_PLATFORM_CHANCE: u32 = 12;

    /// Spring bonus geometry, relative to its platform
    pub const BONUS_SIZE: f32 = 15.0;
    pub const BONUS_OFFSET_X: f32 = 7.0;

    /// Camera smoothing divisor
    pub const CAMERA_LERP: f32 = 5.0;

    /// World units per displayed meter of score
    pub const SCORE_UNITS_PER_METER: f32 = 50.0;

    /// Minimum downward speed before a platform can catch the player
    pub const LANDING_VELOCITY_THRESHOLD: f32 = 0.5;
}

/// Color palette
pub mod palette {
    use crate::sim::Color;

    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const GRAY: Color = Color::rgb(100, 100, 100);
    pub const LIGHT_GREEN: Color = Color::rgb(131, 252, 107);
    pub const ANDROID_GREEN: Color = Color::rgb(164, 198, 57);
    pub const FOREST_GREEN: Color = Color::rgb(87, 189, 68);

    pub const BACKGROUND: Color = WHITE;
    pub const PLAYER: Color = ANDROID_GREEN;
    pub const PLATFORM: Color = FOREST_GREEN;
    pub const PLATFORM_BREAKABLE: Color = LIGHT_GREEN;
    pub const BONUS: Color = GRAY;
    pub const TEXT: Color = GRAY;
}

/// Sign of a number as +1.0 or -1.0 (zero counts as positive)
#[inline]
pub fn sign(value: f32) -> f32 {
    1.0_f32.copysign(value)
}

/// Round to `decimals` places, ties to even
#[inline]
pub fn round_to(value: f32, decimals: i32) -> f32 {
    let scale = 10.0_f32.powi(decimals);
    (value * scale).round_ties_even() / scale
}
