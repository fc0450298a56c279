//! Rendering module
//!
//! The simulation only hands out camera-transformed rectangles and plain RGB
//! colors, so a backend needs nothing beyond filled rectangles and text.

pub mod terminal;

use std::io;

use crate::palette;
use crate::sim::{Color, GameState, Rect};

pub use terminal::TerminalRenderer;

pub const HUD_FONT_SIZE: f32 = 24.0;
pub const TITLE_FONT_SIZE: f32 = 128.0;

/// A drawing backend working in screen space
pub trait Renderer {
    /// Start a new frame filled with `clear`
    fn begin_frame(&mut self, clear: Color);

    fn draw_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color);

    /// Draw text with its top-left corner at (x, y)
    fn draw_text(&mut self, x: f32, y: f32, text: &str, color: Color, font_size: f32);

    /// Approximate rendered width of `text`
    fn text_width(&self, text: &str, font_size: f32) -> f32 {
        text.chars().count() as f32 * font_size * 0.5
    }

    /// Present the frame
    fn end_frame(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn fill(renderer: &mut impl Renderer, rect: Rect, color: Color) {
    renderer.draw_rect(rect.x, rect.y, rect.w, rect.h, color);
}

fn draw_centered(renderer: &mut impl Renderer, cx: f32, y: f32, text: &str, font_size: f32) {
    let x = cx - renderer.text_width(text, font_size) / 2.0;
    renderer.draw_text(x, y, text, palette::TEXT, font_size);
}

/// Draw the level, the player and the HUD for the current state
pub fn draw_frame(state: &GameState, renderer: &mut impl Renderer) -> io::Result<()> {
    renderer.begin_frame(palette::BACKGROUND);

    for platform in state.level.platforms() {
        fill(renderer, platform.sprite.screen_rect(), platform.sprite.color);
        if let Some(bonus) = platform.bonus() {
            fill(renderer, bonus.sprite.screen_rect(), bonus.sprite.color);
        }
    }
    fill(
        renderer,
        state.player.sprite.screen_rect(),
        state.player.sprite.color,
    );

    renderer.draw_text(
        10.0,
        10.0,
        &format!("{} m", state.score),
        palette::TEXT,
        HUD_FONT_SIZE,
    );
    if state.best_score > 0 {
        renderer.draw_text(
            10.0,
            10.0 + HUD_FONT_SIZE * 1.5,
            &format!("best {} m", state.best_score),
            palette::TEXT,
            HUD_FONT_SIZE,
        );
    }

    if state.is_game_over() {
        let cx = state.settings.window_width / 2.0;
        let cy = state.settings.window_height / 2.0;
        draw_centered(renderer, cx, cy - TITLE_FONT_SIZE / 2.0, "Game Over", TITLE_FONT_SIZE);
        draw_centered(
            renderer,
            cx,
            cy + TITLE_FONT_SIZE / 2.0,
            "Press Enter to restart",
            HUD_FONT_SIZE,
        );
    }

    renderer.end_frame()
}
