//! Input events the simulation understands

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Space,
    Escape,
    /// Restart after game over
    Enter,
}

/// A discrete input event, polled once per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Window closed
    Quit,
    KeyDown(Key),
    KeyUp(Key),
}

/// Horizontal movement intent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HorizontalInput {
    #[default]
    None,
    Left,
    Right,
}

impl HorizontalInput {
    /// -1, 0 or +1
    pub fn direction(self) -> f32 {
        match self {
            HorizontalInput::None => 0.0,
            HorizontalInput::Left => -1.0,
            HorizontalInput::Right => 1.0,
        }
    }

    pub fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::Left => Some(HorizontalInput::Left),
            Key::Right => Some(HorizontalInput::Right),
            _ => None,
        }
    }
}
