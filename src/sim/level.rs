//! Procedural platform generation
//!
//! The level is a rolling window of platforms. Each new platform is placed
//! relative to the previous one only (a 1-D chain up the screen). Platforms
//! that scroll off the bottom are retired and replaced on the same update.

use glam::Vec2;
use rand::Rng;

use super::camera::Camera;
use super::sprite::{Rect, Sprite};
use crate::consts::{BONUS_OFFSET_X, BONUS_SIZE};
use crate::error::SimError;
use crate::palette;
use crate::settings::Settings;

/// A spring sitting on top of a platform
#[derive(Debug, Clone, PartialEq)]
pub struct Bonus {
    pub sprite: Sprite,
    /// Upward speed given to the player on contact
    pub force: f32,
}

impl Bonus {
    fn on_platform(platform: &Rect, template: &Sprite, force: f32) -> Self {
        let mut sprite = template.clone();
        sprite.position = Vec2::new(
            platform.center_x() - BONUS_OFFSET_X,
            platform.y - sprite.size.y,
        );
        Self { sprite, force }
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        self.sprite.world_rect()
    }
}

/// What a platform does when landed on
#[derive(Debug, Clone, PartialEq)]
pub enum PlatformKind {
    Plain,
    /// Destroyed after the first landing
    Breakable,
    /// Carries a spring; never breakable
    Spring(Bonus),
}

/// A platform in the level
#[derive(Debug, Clone, PartialEq)]
pub struct Platform {
    pub id: u32,
    pub sprite: Sprite,
    pub kind: PlatformKind,
}

impl Platform {
    #[inline]
    pub fn is_breakable(&self) -> bool {
        matches!(self.kind, PlatformKind::Breakable)
    }

    #[inline]
    pub fn bonus(&self) -> Option<&Bonus> {
        match &self.kind {
            PlatformKind::Spring(bonus) => Some(bonus),
            _ => None,
        }
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        self.sprite.world_rect()
    }

    fn refresh(&mut self, camera: &Camera) {
        self.sprite.refresh(camera);
        if let PlatformKind::Spring(bonus) = &mut self.kind {
            bonus.sprite.refresh(camera);
        }
    }
}

/// Return true with probability 1/(n+1)
fn chance<R: Rng + ?Sized>(rng: &mut R, n: u32) -> bool {
    rng.random_range(0..=n) == 0
}

/// Owns the live platforms and generates new ones as the camera climbs
#[derive(Debug, Clone)]
pub struct Level {
    /// Live platforms in generation order; the last one is the highest
    platforms: Vec<Platform>,
    /// Platform IDs to drop on the next update
    pending_removal: Vec<u32>,
    next_id: u32,

    platform_template: Sprite,
    bonus_template: Sprite,
    base_position: Vec2,
    window: Vec2,
    distance_min: u32,
    distance_max: u32,
    max_platforms: usize,
    bonus_chance: u32,
    breakable_chance: u32,
    bonus_force: f32,
}

impl Level {
    /// Create a level holding only the base platform
    pub fn new(settings: &Settings) -> Result<Self, SimError> {
        settings.validate()?;
        let platform_size = Vec2::new(settings.platform_width, settings.platform_height);
        let base_position = Vec2::new(
            settings.window_width / 2.0 - (settings.platform_width / 2.0).floor(),
            settings.window_height / 2.0 + settings.window_height / 3.0,
        );
        let platform_template = Sprite::new(base_position, platform_size, palette::PLATFORM)?;
        let bonus_template = Sprite::new(Vec2::ZERO, Vec2::splat(BONUS_SIZE), palette::BONUS)?;

        let mut level = Self {
            platforms: Vec::with_capacity(settings.max_platforms),
            pending_removal: Vec::new(),
            next_id: 1,
            platform_template,
            bonus_template,
            base_position,
            window: Vec2::new(settings.window_width, settings.window_height),
            distance_min: settings.distance_min,
            distance_max: settings.distance_max,
            max_platforms: settings.max_platforms,
            bonus_chance: settings.bonus_chance,
            breakable_chance: settings.breakable_chance,
            bonus_force: settings.bonus_jump_force,
        };
        level.push_base();
        Ok(level)
    }

    /// Live platforms, lowest first
    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    pub fn len(&self) -> usize {
        self.platforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.platforms.is_empty()
    }

    pub fn max_platforms(&self) -> usize {
        self.max_platforms
    }

    /// Platforms already landed on and waiting for removal
    pub fn pending_removal(&self) -> &[u32] {
        &self.pending_removal
    }

    /// Where the base platform sits (also the start of every run)
    pub fn base_position(&self) -> Vec2 {
        self.base_position
    }

    fn allocate_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn push_base(&mut self) {
        let id = self.allocate_id();
        let mut sprite = self.platform_template.clone();
        sprite.position = self.base_position;
        self.platforms.push(Platform {
            id,
            sprite,
            kind: PlatformKind::Plain,
        });
    }

    /// Add one platform above the current top, or the base platform if empty
    pub fn generate_next<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let Some(top) = self.platforms.last() else {
            self.push_base();
            return;
        };
        let top_y = top.sprite.position.y;

        let max_x = (self.window.x - self.platform_template.size.x).max(0.0) as u32;
        let x = rng.random_range(0..=max_x) as f32;
        let gap = rng.random_range(self.distance_min..=self.distance_max) as f32;
        let y = top_y - gap;

        let mut sprite = self.platform_template.clone();
        sprite.position = Vec2::new(x, y);

        let kind = if chance(rng, self.breakable_chance) {
            sprite.color = palette::PLATFORM_BREAKABLE;
            PlatformKind::Breakable
        } else if chance(rng, self.bonus_chance) {
            PlatformKind::Spring(Bonus::on_platform(
                &sprite.world_rect(),
                &self.bonus_template,
                self.bonus_force,
            ))
        } else {
            PlatformKind::Plain
        };

        let id = self.allocate_id();
        log::debug!("Generated platform {id} at ({x}, {y}) kind={kind:?}");
        self.platforms.push(Platform { id, sprite, kind });
    }

    /// A player landed on this platform. Breakable ones go on the next update.
    pub fn on_platform_collide(&mut self, platform_id: u32) {
        let breakable = self
            .platforms
            .iter()
            .any(|p| p.id == platform_id && p.is_breakable());
        if breakable && !self.pending_removal.contains(&platform_id) {
            log::debug!("Platform {platform_id} breaks");
            self.pending_removal.push(platform_id);
        }
    }

    /// Recompute every cached screen rectangle
    pub fn refresh(&mut self, camera: &Camera) {
        for platform in &mut self.platforms {
            platform.refresh(camera);
        }
    }

    /// Retire broken and off-screen platforms, then top the level back up.
    /// Once per frame.
    pub fn update<R: Rng + ?Sized>(&mut self, camera: &Camera, rng: &mut R) {
        self.refresh(camera);

        let window_height = self.window.y;
        let mut retired = std::mem::take(&mut self.pending_removal);
        retired.extend(
            self.platforms
                .iter()
                .filter(|p| p.sprite.screen_rect().bottom() > window_height)
                .map(|p| p.id),
        );
        if !retired.is_empty() {
            log::trace!("Retiring platforms {retired:?}");
            self.platforms.retain(|p| !retired.contains(&p.id));
        }

        while self.platforms.len() < self.max_platforms {
            self.generate_next(rng);
        }
        self.refresh(camera);
    }

    /// Called only when the run restarts
    pub fn reset(&mut self) {
        self.platforms.clear();
        self.pending_removal.clear();
        self.push_base();
    }

    #[cfg(test)]
    pub(crate) fn clear(&mut self) {
        self.platforms.clear();
        self.pending_removal.clear();
    }

    #[cfg(test)]
    pub(crate) fn push_platform(&mut self, position: Vec2, kind: PlatformKind) -> u32 {
        let id = self.allocate_id();
        let mut sprite = self.platform_template.clone();
        sprite.position = position;
        let kind = match kind {
            PlatformKind::Spring(_) => PlatformKind::Spring(Bonus::on_platform(
                &sprite.world_rect(),
                &self.bonus_template,
                self.bonus_force,
            )),
            other => other,
        };
        self.platforms.push(Platform { id, sprite, kind });
        id
    }
}
