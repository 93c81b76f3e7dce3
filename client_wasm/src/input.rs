//! Keyboard input handling

use game_core::Scancode;

/// Map a DOM `KeyboardEvent.code` (physical key) to its scancode
pub fn scancode_from_code(code: &str) -> Option<Scancode> {
    if let Some(letter) = code.strip_prefix("Key") {
        let &[c] = letter.as_bytes() else {
            return None;
        };
        return c
            .is_ascii_uppercase()
            .then(|| Scancode(4 + u16::from(c - b'A')));
    }

    if let Some(digit) = code.strip_prefix("Digit") {
        return match digit.as_bytes() {
            [b'0'] => Some(Scancode(39)),
            &[c @ b'1'..=b'9'] => Some(Scancode(30 + u16::from(c - b'1'))),
            _ => None,
        };
    }

    let id = match code {
        "Enter" => 40,
        "Escape" => 41,
        "Backspace" => 42,
        "Tab" => 43,
        "Space" => 44,
        "ArrowRight" => 79,
        "ArrowLeft" => 80,
        "ArrowDown" => 81,
        "ArrowUp" => 82,
        _ => return None,
    };
    Some(Scancode(id))
}
