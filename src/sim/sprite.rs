//! Shared positional/render component
//!
//! Every on-screen thing (player, platform, spring) embeds a [`Sprite`]: a
//! colored axis-aligned box in world space plus the screen-space rectangle
//! it was last drawn at.

use glam::Vec2;

use super::camera::Camera;
use crate::error::SimError;

/// An RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Axis-aligned rectangle, y grows downward
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self::new(pos.x, pos.y, size.x, size.y)
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.x + self.w / 2.0
    }

    /// Strict overlap test; rectangles that only share an edge do not collide
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// Copy moved by the given offset
    pub fn translated(&self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.w, self.h)
    }
}

/// A positioned, colored box
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    /// Top-left corner in world space
    pub position: Vec2,
    pub size: Vec2,
    pub color: Color,
    /// Where this sprite sat on screen at the last refresh
    screen_rect: Rect,
}

impl Sprite {
    pub fn new(position: Vec2, size: Vec2, color: Color) -> Result<Self, SimError> {
        for (what, value) in [("x position", position.x), ("y position", position.y)] {
            if !value.is_finite() {
                return Err(SimError::NonFiniteValue { what, value });
            }
        }
        if !(size.x.is_finite() && size.y.is_finite() && size.x > 0.0 && size.y > 0.0) {
            return Err(SimError::InvalidSize {
                width: size.x,
                height: size.y,
            });
        }
        let rect = Rect::from_pos_size(position, size);
        Ok(Self {
            position,
            size,
            color,
            screen_rect: rect,
        })
    }

    #[inline]
    pub fn world_rect(&self) -> Rect {
        Rect::from_pos_size(self.position, self.size)
    }

    #[inline]
    pub fn screen_rect(&self) -> Rect {
        self.screen_rect
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.position.y + self.size.y
    }

    /// Move vertically so the bottom edge sits at `y`
    #[inline]
    pub fn set_bottom(&mut self, y: f32) {
        self.position.y = y - self.size.y;
    }

    /// Recompute the cached screen rectangle from the camera
    pub fn refresh(&mut self, camera: &Camera) -> Rect {
        self.screen_rect = camera.apply(self.world_rect());
        self.screen_rect
    }

    /// Overwrite the cached screen rectangle (used on reset)
    pub(crate) fn set_screen_rect(&mut self, rect: Rect) {
        self.screen_rect = rect;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette;

    #[test]
    fn test_rect_intersects() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(a.intersects(&Rect::new(5.0, 5.0, 10.0, 10.0)));
        // Touching edges do not count
        assert!(!a.intersects(&Rect::new(10.0, 0.0, 10.0, 10.0)));
        assert!(!a.intersects(&Rect::new(0.0, 10.0, 10.0, 10.0)));
        assert!(!a.intersects(&Rect::new(50.0, 50.0, 1.0, 1.0)));
    }

    #[test]
    fn test_sprite_rejects_bad_size() {
        let err = Sprite::new(Vec2::ZERO, Vec2::new(0.0, 10.0), palette::GRAY).unwrap_err();
        assert!(matches!(
            err,
            SimError::InvalidSize {
                width: 0.0,
                height: 10.0
            }
        ));
        assert!(Sprite::new(Vec2::ZERO, Vec2::new(5.0, -1.0), palette::GRAY).is_err());
        assert!(Sprite::new(Vec2::ZERO, Vec2::new(f32::INFINITY, 1.0), palette::GRAY).is_err());
    }

    #[test]
    fn test_sprite_rejects_nan_position() {
        let err = Sprite::new(Vec2::new(f32::NAN, 0.0), Vec2::ONE, palette::GRAY).unwrap_err();
        assert!(matches!(err, SimError::NonFiniteValue { what: "x position", .. }));
    }

    #[test]
    fn test_set_bottom() {
        let mut sprite = Sprite::new(Vec2::new(0.0, 0.0), Vec2::new(25.0, 35.0), palette::PLAYER).unwrap();
        sprite.set_bottom(300.0);
        assert_eq!(sprite.bottom(), 300.0);
        assert_eq!(sprite.position.y, 265.0);
    }

    #[test]
    fn test_refresh_applies_camera() {
        let mut camera = Camera::new(5.0, 400.0);
        camera.offset_y = -120.0;
        let mut sprite = Sprite::new(Vec2::new(10.0, 50.0), Vec2::new(100.0, 10.0), palette::PLATFORM).unwrap();
        let screen = sprite.refresh(&camera);
        assert_eq!(screen, Rect::new(10.0, 170.0, 100.0, 10.0));
        assert_eq!(sprite.screen_rect(), screen);
        // World rect is untouched
        assert_eq!(sprite.world_rect().y, 50.0);
    }
}
