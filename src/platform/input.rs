//! Input events consumed by the game

use winit::keyboard::KeyCode;

/// Keys the game cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Restart,
    Other,
}

impl Key {
    pub fn from_key_code(code: KeyCode) -> Self {
        match code {
            KeyCode::ArrowLeft => Key::Left,
            KeyCode::ArrowRight => Key::Right,
            KeyCode::KeyR => Key::Restart,
            _ => Key::Other,
        }
    }
}

/// One discrete input event, polled once per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    KeyDown(Key),
    KeyUp(Key),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        assert_eq!(Key::from_key_code(KeyCode::ArrowLeft), Key::Left);
        assert_eq!(Key::from_key_code(KeyCode::ArrowRight), Key::Right);
        assert_eq!(Key::from_key_code(KeyCode::KeyR), Key::Restart);
        assert_eq!(Key::from_key_code(KeyCode::Space), Key::Other);
        assert_eq!(Key::from_key_code(KeyCode::ArrowUp), Key::Other);
    }
}
