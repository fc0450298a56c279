//! Whole-loop scenarios driven by scripted input and a recording renderer

use std::io;

use glam::Vec2;
use sky_hop::platform::{NoWait, ScriptedInput};
use sky_hop::renderer::{Renderer, TerminalRenderer};
use sky_hop::sim::{Color, GamePhase, GameState, InputEvent, Key, Rect};
use sky_hop::{Game, Settings, palette};

#[derive(Default)]
struct RecordingRenderer {
    frames: usize,
    rects: Vec<(Rect, Color)>,
    texts: Vec<String>,
}

impl Renderer for RecordingRenderer {
    fn begin_frame(&mut self, _clear: Color) {
        self.rects.clear();
        self.texts.clear();
    }

    fn draw_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        self.rects.push((Rect::new(x, y, width, height), color));
    }

    fn draw_text(&mut self, _x: f32, _y: f32, text: &str, _color: Color, _font_size: f32) {
        self.texts.push(text.to_string());
    }

    fn end_frame(&mut self) -> io::Result<()> {
        self.frames += 1;
        Ok(())
    }
}

fn new_state(seed: u64) -> GameState {
    GameState::new(Settings::default(), seed).unwrap()
}

#[test]
fn test_idle_run_until_script_ends() {
    let mut game = Game::new(
        new_state(2024),
        RecordingRenderer::default(),
        ScriptedInput::idle(600),
        NoWait::default(),
    );
    game.run().unwrap();

    let (state, renderer, input, clock) = game.into_parts();
    assert_eq!(state.frame, 600);
    assert_eq!(renderer.frames, 600);
    assert_eq!(clock.ticks, 600);
    assert_eq!(input.remaining(), 0);
    assert_eq!(state.level.len(), state.settings.max_platforms);
}

#[test]
fn test_escape_stops_loop() {
    let mut script = ScriptedInput::idle(10);
    script.push_frame(vec![InputEvent::KeyDown(Key::Escape)]);
    script.push_frame(vec![]);

    let mut game = Game::new(
        new_state(1),
        RecordingRenderer::default(),
        script,
        NoWait::default(),
    );
    game.run().unwrap();
    let (state, renderer, input, _) = game.into_parts();
    assert_eq!(state.frame, 10);
    assert_eq!(renderer.frames, 10);
    // The frame after Escape was never polled
    assert_eq!(input.remaining(), 1);
}

#[test]
fn test_holding_right_moves_and_wraps() {
    let mut frames = vec![vec![InputEvent::KeyDown(Key::Right)]];
    frames.extend(std::iter::repeat_n(Vec::new(), 120));
    let mut game = Game::new(
        new_state(3),
        RecordingRenderer::default(),
        ScriptedInput::new(frames),
        NoWait::default(),
    );

    let mut wrapped = false;
    let mut last_x = game.state().player.position().x;
    for _ in 0..121 {
        game.step().unwrap();
        let x = game.state().player.position().x;
        assert!((0.0..575.0).contains(&x));
        if x < last_x {
            wrapped = true;
        }
        last_x = x;
    }
    assert!(wrapped, "player never wrapped around the right edge");
    assert_eq!(game.state().player.velocity.x, 20.0);
}

#[test]
fn test_fall_shows_game_over_then_restart() {
    let mut game = Game::new(
        new_state(77),
        RecordingRenderer::default(),
        ScriptedInput::idle(1),
        NoWait::default(),
    );
    game.step().unwrap();

    let (mut state, renderer, _, clock) = game.into_parts();
    // Drop the player far below the window
    state.player.sprite.position.y = 5_000.0;
    let script = ScriptedInput::new([
        vec![],
        vec![],
        vec![InputEvent::KeyDown(Key::Enter)],
    ]);
    let mut game = Game::new(state, renderer, script, clock);

    game.step().unwrap();
    assert_eq!(game.state().phase, GamePhase::GameOver);
    assert!(game.renderer().texts.iter().any(|t| t == "Game Over"));

    let frozen = game.state().player.position();
    game.step().unwrap();
    assert_eq!(game.state().player.position(), frozen);

    game.step().unwrap();
    let state = game.state();
    assert_eq!(state.phase, GamePhase::Playing);
    assert_eq!(state.camera.offset_y, 0.0);
    assert_eq!(state.camera.max_height_reached, 400.0);
    // One frame of gravity since the reset
    let spawn = state.player.spawn_position();
    assert_eq!(state.player.position().x, spawn.x);
    assert!((state.player.position().y - (spawn.y + 0.98)).abs() < 1e-4);
    assert!(!game.renderer().texts.iter().any(|t| t == "Game Over"));
}

#[test]
fn test_reset_restores_initial_world() {
    let mut state = new_state(11);
    for _ in 0..200 {
        state.update();
    }
    state.player.sprite.position.y = 1e6;
    state.update();
    assert!(state.is_game_over());

    state.reset();
    assert_eq!(state.camera.offset_y, 0.0);
    assert_eq!(state.level.len(), 1);
    assert_eq!(
        state.level.platforms()[0].sprite.position,
        state.level.base_position()
    );
    assert_eq!(state.player.position(), state.player.spawn_position());
    assert_eq!(state.player.velocity, Vec2::ZERO);
}

#[test]
fn test_terminal_renderer_draws_a_frame() {
    let renderer = TerminalRenderer::with_size(Vec::new(), 60, 40, Vec2::new(600.0, 800.0));
    let mut game = Game::new(
        new_state(5),
        renderer,
        ScriptedInput::idle(3),
        NoWait::default(),
    );
    game.run().unwrap();
    let (_, renderer, _, _) = game.into_parts();
    let out = renderer.into_inner();
    assert!(!out.is_empty());
    assert!(String::from_utf8_lossy(&out).contains(" m"));
}

#[test]
fn test_platform_colors_drawn() {
    let mut game = Game::new(
        new_state(8),
        RecordingRenderer::default(),
        ScriptedInput::idle(1),
        NoWait::default(),
    );
    game.step().unwrap();
    let renderer = game.renderer();
    assert!(
        renderer
            .rects
            .iter()
            .any(|(_, color)| *color == palette::PLATFORM)
    );
    assert_eq!(renderer.rects.last().map(|(_, c)| *c), Some(palette::PLAYER));
}
