//! Keyboard input collection for one rendered frame.

use macroquad::prelude::{KeyCode, is_key_pressed};

const VIEWER_KEYS: [KeyCode; 8] = [
    KeyCode::Up,
    KeyCode::Down,
    KeyCode::Left,
    KeyCode::Right,
    KeyCode::S,
    KeyCode::Enter,
    KeyCode::KpEnter,
    KeyCode::R,
];

pub fn capture_keys_pressed() -> Vec<KeyCode> {
    VIEWER_KEYS
        .into_iter()
        .filter(|key| is_key_pressed(*key))
        .map(|key| if key == KeyCode::KpEnter { KeyCode::Enter } else { key })
        .collect()
}
