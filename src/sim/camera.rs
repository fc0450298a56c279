//! Vertical scrolling camera
//!
//! World y grows downward, so climbing means smaller y. The camera follows
//! the highest point the player has reached and never scrolls back down.

use glam::Vec2;

use super::sprite::Rect;

/// Tracks the scroll offset between world and screen space
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// World-to-screen vertical shift (only decreases during a run)
    pub offset_y: f32,
    /// Smoothing divisor: each frame closes 1/lerp of the remaining gap
    pub lerp_factor: f32,
    /// Screen row the peak is pulled toward
    pub center_y: f32,
    /// Smallest world y seen so far
    pub max_height_reached: f32,
}

impl Camera {
    pub fn new(lerp_factor: f32, center_y: f32) -> Self {
        Self {
            offset_y: 0.0,
            lerp_factor,
            center_y,
            max_height_reached: center_y,
        }
    }

    /// Called only when the run restarts
    pub fn reset(&mut self) {
        self.offset_y = 0.0;
        self.max_height_reached = self.center_y;
    }

    /// World rect to screen rect (horizontal is never scrolled)
    #[inline]
    pub fn apply(&self, world: Rect) -> Rect {
        world.translated(0.0, -self.offset_y)
    }

    /// Scroll toward the highest point reached by `target`. Once per frame.
    pub fn update(&mut self, target: Vec2) {
        if target.y < self.max_height_reached {
            self.max_height_reached = target.y;
        }
        let shift = (self.offset_y + self.center_y - self.max_height_reached) / self.lerp_factor;
        // Float noise near convergence must not scroll back down
        self.offset_y -= shift.max(0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_scroll_below_center() {
        let mut camera = Camera::new(5.0, 400.0);
        camera.update(Vec2::new(0.0, 600.0));
        assert_eq!(camera.offset_y, 0.0);
        assert_eq!(camera.max_height_reached, 400.0);
    }

    #[test]
    fn test_scroll_eases_toward_peak() {
        let mut camera = Camera::new(5.0, 400.0);
        camera.update(Vec2::new(0.0, 300.0));
        // Gap of 100, one fifth closed
        assert!((camera.offset_y - -20.0).abs() < 1e-5);
        camera.update(Vec2::new(0.0, 350.0));
        // Peak unchanged, remaining gap 80
        assert!((camera.offset_y - -36.0).abs() < 1e-5);
        assert_eq!(camera.max_height_reached, 300.0);

        for _ in 0..200 {
            camera.update(Vec2::new(0.0, 350.0));
        }
        assert!((camera.offset_y - -100.0).abs() < 1e-3);
    }

    #[test]
    fn test_offset_never_increases() {
        let mut camera = Camera::new(5.0, 400.0);
        let targets = [380.0, 500.0, 200.0, 900.0, 150.0, 150.0, 1200.0, -400.0];
        let mut last = camera.offset_y;
        for y in targets {
            camera.update(Vec2::new(0.0, y));
            assert!(camera.offset_y <= last);
            last = camera.offset_y;
        }
    }

    #[test]
    fn test_apply_and_reset() {
        let mut camera = Camera::new(5.0, 400.0);
        camera.update(Vec2::new(0.0, -1000.0));
        let rect = Rect::new(42.0, -500.0, 10.0, 10.0);
        let screen = camera.apply(rect);
        assert_eq!(screen.x, 42.0);
        assert_eq!(screen.y, -500.0 - camera.offset_y);

        camera.reset();
        assert_eq!(camera.offset_y, 0.0);
        assert_eq!(camera.max_height_reached, 400.0);
        assert_eq!(camera.apply(rect), rect);
    }
}
