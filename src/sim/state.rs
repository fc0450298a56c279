//! Game state
//!
//! One camera, one level and one player, owned together and stepped in a
//! fixed order each frame.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::camera::Camera;
use super::level::Level;
use super::player::Player;
use crate::consts::SCORE_UNITS_PER_METER;
use crate::error::SimError;
use crate::settings::Settings;

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Player is alive and climbing
    Playing,
    /// Player fell off screen, waiting for restart
    GameOver,
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    pub settings: Settings,
    /// Seed the RNG was created from
    pub seed: u64,
    rng: Pcg32,
    pub camera: Camera,
    pub level: Level,
    pub player: Player,
    pub phase: GamePhase,
    /// Distance climbed this run, in meters
    pub score: u32,
    /// Best distance this session (kept in memory only)
    pub best_score: u32,
    /// Frames simulated since startup
    pub frame: u64,
}

impl GameState {
    /// Create a new game state with the given seed. Settings are validated
    /// here, so a constructed state can always be stepped.
    pub fn new(settings: Settings, seed: u64) -> Result<Self, SimError> {
        settings.validate()?;
        let camera = Camera::new(settings.camera_lerp, settings.camera_center());
        let level = Level::new(&settings)?;
        let player = Player::new(&settings)?;
        Ok(Self {
            settings,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            camera,
            level,
            player,
            phase: GamePhase::Playing,
            score: 0,
            best_score: 0,
            frame: 0,
        })
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Step the world by one frame: player, then level, then camera
    pub fn update(&mut self) {
        self.frame += 1;

        self.player.update(&self.camera, &mut self.level);
        self.level.update(&self.camera, &mut self.rng);

        if self.player.dead {
            if self.phase == GamePhase::Playing {
                self.phase = GamePhase::GameOver;
                self.best_score = self.best_score.max(self.score);
                log::info!(
                    "Game over at {} m (best {} m) after {} frames",
                    self.score,
                    self.best_score,
                    self.frame
                );
            }
        } else {
            self.camera.update(self.player.position());
            self.score = meters_climbed(self.camera.offset_y);
        }

        // Cache screen positions for drawing and next frame's checks
        self.level.refresh(&self.camera);
        self.player.sprite.refresh(&self.camera);
    }

    /// Start a new run, keeping the session best and the RNG stream
    pub fn reset(&mut self) {
        self.camera.reset();
        self.level.reset();
        self.player.reset();
        self.score = 0;
        self.phase = GamePhase::Playing;
        log::info!("Restarted run (best {} m)", self.best_score);
    }
}

/// Score shown to the player for a camera offset
pub fn meters_climbed(offset_y: f32) -> u32 {
    (-offset_y / SCORE_UNITS_PER_METER).floor().max(0.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;

    #[test]
    fn test_new_state() {
        let state = GameState::new(Settings::default(), 12345).unwrap();
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.level.len(), 1);
        assert_eq!(state.score, 0);
        assert_eq!(state.camera.offset_y, 0.0);
    }

    #[test]
    fn test_invalid_settings_fail_fast() {
        let settings = Settings {
            player_height: 0.0,
            ..Default::default()
        };
        assert!(GameState::new(settings, 1).is_err());
    }

    #[test]
    fn test_inverted_gap_rejected() {
        let settings = Settings {
            distance_min: 300,
            distance_max: 50,
            ..Default::default()
        };
        let err = GameState::new(settings, 1).unwrap_err();
        assert!(matches!(
            err,
            SimError::Settings(ConfigError::Invalid {
                field: "distance_max",
                ..
            })
        ));
    }

    #[test]
    fn test_full_width_player_rejected() {
        let settings = Settings {
            player_width: 600.0,
            ..Default::default()
        };
        let err = GameState::new(settings, 1).unwrap_err();
        assert!(matches!(
            err,
            SimError::Settings(ConfigError::Invalid {
                field: "player_width",
                ..
            })
        ));
    }

    #[test]
    fn test_meters_climbed() {
        assert_eq!(meters_climbed(0.0), 0);
        assert_eq!(meters_climbed(-49.9), 0);
        assert_eq!(meters_climbed(-50.0), 1);
        assert_eq!(meters_climbed(-1234.0), 24);
        assert_eq!(meters_climbed(10.0), 0);
    }

    #[test]
    fn test_first_update_fills_level() {
        let mut state = GameState::new(Settings::default(), 7).unwrap();
        state.update();
        assert_eq!(state.level.len(), state.settings.max_platforms);
        assert_eq!(state.frame, 1);
    }

    #[test]
    fn test_player_bounces_off_base_platform() {
        let mut state = GameState::new(Settings::default(), 7).unwrap();
        // Spawn is above the base platform; fall until the first bounce
        let mut bounced = false;
        for _ in 0..60 {
            state.update();
            if state.player.velocity.y < 0.0 {
                bounced = true;
                break;
            }
        }
        assert!(bounced);
        assert!(!state.player.dead);
    }

    #[test]
    fn test_game_over_records_best() {
        let mut state = GameState::new(Settings::default(), 7).unwrap();
        state.level.reset();
        state.score = 12;
        state.player.sprite.position.y = 5000.0;
        state.update();
        assert!(state.is_game_over());
        assert_eq!(state.best_score, 12);

        state.reset();
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.best_score, 12);
    }

    #[test]
    fn test_determinism() {
        let mut state1 = GameState::new(Settings::default(), 99999).unwrap();
        let mut state2 = GameState::new(Settings::default(), 99999).unwrap();
        for _ in 0..300 {
            state1.update();
            state2.update();
        }
        let ys1: Vec<f32> = state1.level.platforms().iter().map(|p| p.sprite.position.y).collect();
        let ys2: Vec<f32> = state2.level.platforms().iter().map(|p| p.sprite.position.y).collect();
        assert_eq!(ys1, ys2);
        assert_eq!(state1.player.position(), state2.player.position());
        assert_eq!(state1.camera.offset_y, state2.camera.offset_y);
    }
}
