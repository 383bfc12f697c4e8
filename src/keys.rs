// src/keys.rs

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Represents a keyboard modifier.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct Modifiers: u8 {
        const SHIFT = 1 << 0;
        const CONTROL = 1 << 1;
        const ALT = 1 << 2;
    }
}

/// Represents a key symbol delivered by the host keyboard source.
///
/// Only the keys the terminal and line editor react to are modeled;
/// anything the host cannot map lands on `Unknown` and is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum KeySymbol {
    /// A character-producing key.
    Char(char),

    // Navigation keys
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    Delete,

    // Editing keys
    Enter,
    Backspace,
    Tab,
    Escape,

    /// Unidentified key.
    #[default]
    Unknown,
}

/// One keystroke: the symbol plus the modifier state at press time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct KeyEvent {
    pub symbol: KeySymbol,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    pub fn new(symbol: KeySymbol) -> Self {
        Self {
            symbol,
            modifiers: Modifiers::empty(),
        }
    }

    pub fn with_modifiers(symbol: KeySymbol, modifiers: Modifiers) -> Self {
        Self { symbol, modifiers }
    }

    /// True when Control was held for this keystroke.
    pub fn control(&self) -> bool {
        self.modifiers.contains(Modifiers::CONTROL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn control_queries_the_modifier_state() {
        let plain = KeyEvent::new(KeySymbol::Char('l'));
        assert!(!plain.control());
        let ctrl = KeyEvent::with_modifiers(KeySymbol::Char('l'), Modifiers::CONTROL);
        assert!(ctrl.control());
    }
}
