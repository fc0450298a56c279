//! Game settings
//!
//! Read once at startup. Every field defaults to the constant in
//! [`crate::consts`], so a settings file only needs the values it changes.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Startup tuning for the simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Window ===
    pub window_width: f32,
    pub window_height: f32,
    /// Target frames per second (one simulation step each)
    pub fps: u32,

    // === Player ===
    pub player_width: f32,
    pub player_height: f32,
    pub max_speed_x: f32,
    pub max_speed_y: f32,
    pub jump_force: f32,
    pub bonus_jump_force: f32,
    pub start_speed: f32,
    pub accel: f32,
    pub deccel: f32,
    pub gravity: f32,

    // === Platforms ===
    pub platform_width: f32,
    pub platform_height: f32,
    /// Vertical gap between consecutive platforms (inclusive range)
    pub distance_min: u32,
    pub distance_max: u32,
    pub max_platforms: usize,
    /// One-in-(n+1) odds of a spring on a non-breakable platform
    pub bonus_chance: u32,
    /// One-in-(n+1) odds of a breakable platform
    pub breakable_chance: u32,

    // === Camera ===
    pub camera_lerp: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            fps: FPS,

            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            max_speed_x: PLAYER_MAX_SPEED_X,
            max_speed_y: PLAYER_MAX_SPEED_Y,
            jump_force: PLAYER_JUMP_FORCE,
            bonus_jump_force: PLAYER_BONUS_JUMP_FORCE,
            start_speed: PLAYER_START_SPEED,
            accel: PLAYER_ACCEL,
            deccel: PLAYER_DECCEL,
            gravity: GRAVITY,

            platform_width: PLATFORM_WIDTH,
            platform_height: PLATFORM_HEIGHT,
            distance_min: PLATFORM_DISTANCE_MIN,
            distance_max: PLATFORM_DISTANCE_MAX,
            max_platforms: MAX_PLATFORMS,
            bonus_chance: BONUS_SPAWN_CHANCE,
            breakable_chance: BREAKABLE_PLATFORM_CHANCE,

            camera_lerp: CAMERA_LERP,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file and validate them
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        settings.validate()?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Check that the constants describe a playable world
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("window_width", self.window_width),
            ("window_height", self.window_height),
            ("player_width", self.player_width),
            ("player_height", self.player_height),
            ("max_speed_x", self.max_speed_x),
            ("max_speed_y", self.max_speed_y),
            ("jump_force", self.jump_force),
            ("bonus_jump_force", self.bonus_jump_force),
            ("platform_width", self.platform_width),
            ("platform_height", self.platform_height),
            ("camera_lerp", self.camera_lerp),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::invalid(
                    field,
                    format!("must be a positive number, got {value}"),
                ));
            }
        }

        let non_negative = [
            ("start_speed", self.start_speed),
            ("accel", self.accel),
            ("deccel", self.deccel),
            ("gravity", self.gravity),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::invalid(
                    field,
                    format!("must be zero or positive, got {value}"),
                ));
            }
        }

        if self.fps == 0 {
            return Err(ConfigError::invalid("fps", "must be at least 1"));
        }
        if self.max_platforms == 0 {
            return Err(ConfigError::invalid("max_platforms", "must be at least 1"));
        }
        if self.distance_min == 0 {
            return Err(ConfigError::invalid(
                "distance_min",
                "platforms would stack on the same row",
            ));
        }
        if self.distance_min > self.distance_max {
            return Err(ConfigError::invalid(
                "distance_max",
                format!(
                    "must be >= distance_min ({} > {})",
                    self.distance_min, self.distance_max
                ),
            ));
        }
        if self.platform_width > self.window_width {
            return Err(ConfigError::invalid(
                "platform_width",
                "wider than the window",
            ));
        }
        if self.player_width >= self.window_width {
            return Err(ConfigError::invalid(
                "player_width",
                "must leave room to move inside the window",
            ));
        }

        Ok(())
    }

    /// Fixed anchor row the camera keeps the player's peak on
    pub fn camera_center(&self) -> f32 {
        (self.window_height / 2.0).floor()
    }
}
