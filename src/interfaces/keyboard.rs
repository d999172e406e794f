use crate::application::engine::CalculatorEngine;
use crate::domain::operator::Operator;
use crate::error::Result;

/// A logical key of the calculator keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Digit(char),
    DecimalPoint,
    Operator(Operator),
    Equals,
    Delete,
    Clear,
    ToggleSign,
    Percent,
}

impl Key {
    /// Maps a key name as reported by a keyboard (`"Enter"`, `"Backspace"`)
    /// or printed on a button (`"AC"`, `"±"`, `"×"`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Enter" => Some(Key::Equals),
            "Backspace" | "Delete" | "DEL" => Some(Key::Delete),
            "Escape" | "Esc" | "AC" | "C" => Some(Key::Clear),
            "+/-" | "Negate" => Some(Key::ToggleSign),
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::from_char(c),
                    _ => None,
                }
            }
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' => Some(Key::Digit(c)),
            '.' => Some(Key::DecimalPoint),
            '=' => Some(Key::Equals),
            '%' => Some(Key::Percent),
            '±' => Some(Key::ToggleSign),
            _ => Operator::from_symbol(c).map(Key::Operator),
        }
    }
}

/// Splits a line of input into keys.
///
/// Whitespace-separated tokens are matched as whole key names first and
/// otherwise read one character at a time, so `"12+5="` and
/// `"1 2 + 5 Enter"` describe the same keystrokes. Characters that map to
/// no key are skipped, as a keypad ignores keys it does not have.
pub fn parse_keys(line: &str) -> Vec<Key> {
    let mut keys = Vec::new();
    for token in line.split_whitespace() {
        if let Some(key) = Key::from_name(token) {
            keys.push(key);
            continue;
        }
        for c in token.chars() {
            match Key::from_char(c) {
                Some(key) => keys.push(key),
                None => tracing::warn!(key = %c, "ignoring unknown key"),
            }
        }
    }
    keys
}

/// Forwards one key press to the engine.
pub fn dispatch(engine: &mut CalculatorEngine, key: Key) -> Result<()> {
    match key {
        Key::Digit(d) => engine.append_digit(d),
        Key::DecimalPoint => engine.append_decimal_point(),
        Key::Operator(op) => engine.choose_operation(op)?,
        Key::Equals => engine.evaluate()?,
        Key::Delete => engine.delete_last_character(),
        Key::Clear => engine.clear(),
        Key::ToggleSign => engine.toggle_sign(),
        Key::Percent => engine.convert_to_percentage(),
    }
    Ok(())
}
