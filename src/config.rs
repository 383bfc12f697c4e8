// src/config.rs

//! Terminal configuration.
//!
//! A small serde-deserializable knob set for embedders that load settings
//! from a file. Every field has a default, so partial documents work.

use serde::{Deserialize, Serialize};

use crate::color::NamedColor;
use crate::term::CursorShape;

/// Initial terminal settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TermConfig {
    /// Initial foreground color.
    pub foreground: NamedColor,
    /// Initial background color.
    pub background: NamedColor,
    /// Initial cursor shape.
    pub cursor_shape: CursorShape,
    /// Whether the cursor is drawn at all.
    pub cursor_visible: bool,
    /// Default beep frequency for `Terminal::beep`.
    pub beep_frequency_hz: u32,
    /// Default beep duration for `Terminal::beep`.
    pub beep_duration_ms: u32,
}

impl Default for TermConfig {
    fn default() -> Self {
        Self {
            foreground: NamedColor::White,
            background: NamedColor::Black,
            cursor_shape: CursorShape::Block,
            cursor_visible: true,
            beep_frequency_hz: 800,
            beep_duration_ms: 125,
        }
    }
}
