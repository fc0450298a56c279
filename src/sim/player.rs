//! Player physics and collision response
//!
//! The player is always airborne: gravity applies every frame and a landing
//! is just an instantaneous velocity snap. Collisions are discrete AABB
//! overlaps, so a fast enough fall can pass through a platform.

use glam::Vec2;

use super::camera::Camera;
use super::input::{HorizontalInput, InputEvent};
use super::level::Level;
use super::sprite::{Rect, Sprite};
use crate::consts::LANDING_VELOCITY_THRESHOLD;
use crate::error::SimError;
use crate::settings::Settings;
use crate::{palette, round_to, sign};

/// The player character
#[derive(Debug, Clone)]
pub struct Player {
    pub sprite: Sprite,
    pub velocity: Vec2,
    pub input: HorizontalInput,
    /// Terminal until [`Player::reset`]
    pub dead: bool,
    pub jump_force: f32,
    pub bonus_jump_force: f32,
    pub gravity: f32,
    pub accel: f32,
    pub deccel: f32,
    start_speed: f32,
    max_speed: Vec2,
    spawn: Vec2,
    window: Vec2,
}

impl Player {
    pub fn new(settings: &Settings) -> Result<Self, SimError> {
        settings.validate()?;
        let size = Vec2::new(settings.player_width, settings.player_height);
        let spawn = Vec2::new(
            settings.window_width / 2.0 - size.x / 2.0,
            settings.window_height / 2.0 + settings.window_height / 4.0,
        );
        let sprite = Sprite::new(spawn, size, palette::PLAYER)?;
        Ok(Self {
            sprite,
            velocity: Vec2::ZERO,
            input: HorizontalInput::None,
            dead: false,
            jump_force: settings.jump_force,
            bonus_jump_force: settings.bonus_jump_force,
            gravity: settings.gravity,
            accel: settings.accel,
            deccel: settings.deccel,
            start_speed: settings.start_speed,
            max_speed: Vec2::new(settings.max_speed_x, settings.max_speed_y),
            spawn,
            window: Vec2::new(settings.window_width, settings.window_height),
        })
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        self.sprite.world_rect()
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.sprite.position
    }

    pub fn spawn_position(&self) -> Vec2 {
        self.spawn
    }

    /// Called only when the run restarts
    pub fn reset(&mut self) {
        self.velocity = Vec2::ZERO;
        self.sprite.position = self.spawn;
        self.sprite.set_screen_rect(self.rect());
        self.dead = false;
    }

    /// Update movement intent from a key event
    pub fn handle_input(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::KeyDown(key) => {
                if let Some(intent) = HorizontalInput::from_key(key) {
                    self.velocity.x = intent.direction() * self.start_speed;
                    self.input = intent;
                }
            }
            InputEvent::KeyUp(key) => {
                // A stale release must not cancel a newer press
                if HorizontalInput::from_key(key) == Some(self.input) {
                    self.input = HorizontalInput::None;
                }
            }
            InputEvent::Quit => {}
        }
    }

    /// Set upward velocity
    #[inline]
    pub fn jump(&mut self, force: f32) {
        self.velocity.y = -force;
    }

    fn clamp_velocity(&mut self) {
        self.velocity.y = round_to(
            self.velocity.y.clamp(-self.max_speed.y, self.max_speed.y),
            2,
        );
        self.velocity.x = round_to(
            self.velocity.x.clamp(-self.max_speed.x, self.max_speed.x),
            2,
        );
    }

    /// Advance one frame. Does nothing once dead.
    pub fn update(&mut self, camera: &Camera, level: &mut Level) {
        if self.dead {
            return;
        }

        let screen = self.sprite.refresh(camera);
        if screen.y > self.window.y * 2.0 {
            log::info!("Player fell off screen at world y {}", self.sprite.position.y);
            self.dead = true;
            return;
        }

        self.velocity.y += self.gravity;
        let intent = self.input.direction();
        if intent != 0.0 {
            self.velocity.x += intent * self.accel;
        } else if self.velocity.x != 0.0 {
            self.velocity.x -= sign(self.velocity.x) * self.deccel;
            self.velocity.x = self.velocity.x.round_ties_even();
        }
        self.clamp_velocity();

        let span = self.window.x - self.sprite.size.x;
        let mut x = (self.sprite.position.x + self.velocity.x).rem_euclid(span);
        // rem_euclid can round up to `span` for tiny negative inputs
        if x >= span {
            x = 0.0;
        }
        self.sprite.position.x = x;
        self.sprite.position.y += self.velocity.y;

        self.resolve_collisions(level);
    }

    /// Bounce off any platform or spring the player is falling onto.
    ///
    /// Every platform is visited; a later contact overwrites an earlier one.
    /// Returns the number of bounces applied.
    pub fn resolve_collisions(&mut self, level: &mut Level) -> usize {
        let mut bounces = 0;
        for index in 0..level.len() {
            if self.velocity.y <= LANDING_VELOCITY_THRESHOLD {
                continue;
            }
            let platform = &level.platforms()[index];
            let platform_id = platform.id;
            let platform_rect = platform.rect();
            let bonus = platform.bonus().map(|b| (b.rect(), b.force));

            // Spring first
            if let Some((bonus_rect, force)) = bonus {
                if self.rect().intersects(&bonus_rect) {
                    self.sprite.set_bottom(bonus_rect.y);
                    self.jump(force);
                    bounces += 1;
                    log::trace!("Spring bounce on platform {platform_id}");
                }
            }

            if self.rect().intersects(&platform_rect) {
                self.sprite.set_bottom(platform_rect.y);
                self.jump(self.jump_force);
                level.on_platform_collide(platform_id);
                bounces += 1;
                log::trace!("Landed on platform {platform_id}");
            }
        }
        bounces
    }
}
