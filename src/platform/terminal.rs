//! Terminal host: raw-mode session and keyboard polling
//!
//! Most terminals only report key presses, with auto-repeat while a key is
//! held. When release events are unavailable, a held movement key is
//! released once it stops repeating: [`FIRST_REPEAT_TIMEOUT`] after the
//! initial press, [`HOLD_TIMEOUT`] after any later repeat.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::{cursor, execute, terminal};

use super::input::InputSource;
use crate::sim::{InputEvent, Key};

/// How long a movement key counts as held after an auto-repeat
pub const HOLD_TIMEOUT: Duration = Duration::from_millis(150);

/// How long a fresh press counts as held before auto-repeat kicks in.
/// Must exceed the OS repeat delay (commonly 250-600 ms).
pub const FIRST_REPEAT_TIMEOUT: Duration = Duration::from_millis(650);

/// Raw mode + alternate screen for the lifetime of the value
pub struct TerminalSession {
    enhanced_keys: bool,
}

impl TerminalSession {
    pub fn start() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut out = io::stdout();
        execute!(
            out,
            terminal::EnterAlternateScreen,
            terminal::Clear(terminal::ClearType::All),
            cursor::Hide
        )?;

        let enhanced_keys = terminal::supports_keyboard_enhancement().unwrap_or(false);
        if enhanced_keys {
            execute!(
                out,
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
            )?;
        }
        log::info!("Terminal session started (key release events: {enhanced_keys})");
        Ok(Self { enhanced_keys })
    }

    /// Whether the terminal reports key releases
    pub fn reports_key_release(&self) -> bool {
        self.enhanced_keys
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let mut out = io::stdout();
        if self.enhanced_keys {
            let _ = execute!(out, PopKeyboardEnhancementFlags);
        }
        let _ = execute!(out, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
        let _ = out.flush();
    }
}

fn map_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Left | KeyCode::Char('a') => Some(Key::Left),
        KeyCode::Right | KeyCode::Char('d') => Some(Key::Right),
        KeyCode::Char(' ') => Some(Key::Space),
        KeyCode::Esc => Some(Key::Escape),
        KeyCode::Enter => Some(Key::Enter),
        _ => None,
    }
}

fn is_movement(key: Key) -> bool {
    matches!(key, Key::Left | Key::Right)
}

#[derive(Debug, Clone, Copy)]
struct HeldKey {
    key: Key,
    last_seen: Instant,
    repeating: bool,
}

impl HeldKey {
    fn timeout(&self) -> Duration {
        if self.repeating {
            HOLD_TIMEOUT
        } else {
            FIRST_REPEAT_TIMEOUT
        }
    }
}

/// Turns raw terminal key events into game input events
#[derive(Debug, Clone)]
pub struct KeyTracker {
    release_events: bool,
    held: Option<HeldKey>,
}

impl KeyTracker {
    pub fn new(release_events: bool) -> Self {
        Self {
            release_events,
            held: None,
        }
    }

    pub fn on_key(&mut self, key_event: KeyEvent, now: Instant) -> Option<InputEvent> {
        if key_event.modifiers.contains(KeyModifiers::CONTROL)
            && key_event.code == KeyCode::Char('c')
        {
            return Some(InputEvent::Quit);
        }
        if key_event.code == KeyCode::Char('q') {
            return Some(InputEvent::Quit);
        }
        let key = map_key(key_event.code)?;

        match key_event.kind {
            KeyEventKind::Press => {
                if !self.release_events && is_movement(key) {
                    let repeat = matches!(self.held, Some(held) if held.key == key);
                    self.held = Some(HeldKey {
                        key,
                        last_seen: now,
                        repeating: repeat,
                    });
                    if repeat {
                        return None;
                    }
                }
                Some(InputEvent::KeyDown(key))
            }
            KeyEventKind::Repeat => None,
            KeyEventKind::Release => Some(InputEvent::KeyUp(key)),
        }
    }

    /// Release a held key that stopped repeating
    pub fn expire(&mut self, now: Instant) -> Option<InputEvent> {
        if self.release_events {
            return None;
        }
        let held = self.held?;
        if now.duration_since(held.last_seen) >= held.timeout() {
            self.held = None;
            return Some(InputEvent::KeyUp(held.key));
        }
        None
    }
}

/// Polls crossterm for keyboard events without blocking
pub struct TerminalInput {
    tracker: KeyTracker,
}

impl TerminalInput {
    pub fn new(session: &TerminalSession) -> Self {
        Self {
            tracker: KeyTracker::new(session.reports_key_release()),
        }
    }
}

impl InputSource for TerminalInput {
    fn poll(&mut self) -> io::Result<Vec<InputEvent>> {
        let mut events = Vec::new();
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key_event) = event::read()? {
                if let Some(input) = self.tracker.on_key(key_event, Instant::now()) {
                    events.push(input);
                }
            }
        }
        if let Some(release) = self.tracker.expire(Instant::now()) {
            events.push(release);
        }
        Ok(events)
    }
}
