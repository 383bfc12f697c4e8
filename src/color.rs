// src/color.rs

//! Defines the pixel color type (`Rgba`) and the fixed 16-color console
//! palette (`NamedColor`) used by the convenience write variants.

use serde::{Deserialize, Serialize};

/// RGBA color in 32-bit format (8 bits per channel).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Convert to an RGBA byte array.
    pub fn to_bytes(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// The classic 16-entry console palette (indices 0-15).
///
/// Ordering and RGB values follow the VGA text-mode convention: the low
/// three bits select the hue, bit 3 selects intensity, with the traditional
/// brown exception at index 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum NamedColor {
    Black = 0,
    Blue = 1,
    Green = 2,
    Cyan = 3,
    Red = 4,
    Magenta = 5,
    Brown = 6,
    LightGray = 7,
    DarkGray = 8,
    LightBlue = 9,
    LightGreen = 10,
    LightCyan = 11,
    LightRed = 12,
    LightMagenta = 13,
    Yellow = 14,
    White = 15,
}

impl NamedColor {
    /// Converts a palette index (0-15) to a `NamedColor`.
    pub fn from_index(idx: u8) -> Option<Self> {
        use NamedColor::*;
        Some(match idx {
            0 => Black,
            1 => Blue,
            2 => Green,
            3 => Cyan,
            4 => Red,
            5 => Magenta,
            6 => Brown,
            7 => LightGray,
            8 => DarkGray,
            9 => LightBlue,
            10 => LightGreen,
            11 => LightCyan,
            12 => LightRed,
            13 => LightMagenta,
            14 => Yellow,
            15 => White,
            _ => return None,
        })
    }
}

impl From<NamedColor> for Rgba {
    fn from(named: NamedColor) -> Self {
        use NamedColor::*;
        match named {
            Black => Rgba::opaque(0, 0, 0),
            Blue => Rgba::opaque(0, 0, 170),
            Green => Rgba::opaque(0, 170, 0),
            Cyan => Rgba::opaque(0, 170, 170),
            Red => Rgba::opaque(170, 0, 0),
            Magenta => Rgba::opaque(170, 0, 170),
            Brown => Rgba::opaque(170, 85, 0),
            LightGray => Rgba::opaque(170, 170, 170),
            DarkGray => Rgba::opaque(85, 85, 85),
            LightBlue => Rgba::opaque(85, 85, 255),
            LightGreen => Rgba::opaque(85, 255, 85),
            LightCyan => Rgba::opaque(85, 255, 255),
            LightRed => Rgba::opaque(255, 85, 85),
            LightMagenta => Rgba::opaque(255, 85, 255),
            Yellow => Rgba::opaque(255, 255, 85),
            White => Rgba::opaque(255, 255, 255),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_color_round_trips_through_index() {
        // Contract: every palette index 0-15 maps to a color whose
        // discriminant equals the index.
        for idx in 0..16u8 {
            let named = NamedColor::from_index(idx).unwrap();
            assert_eq!(named as u8, idx);
        }
        assert!(NamedColor::from_index(16).is_none());
    }

    #[test]
    fn palette_values_match_vga_table() {
        // Contract: the fixed mapping keeps the traditional VGA values.
        assert_eq!(Rgba::from(NamedColor::Black), Rgba::opaque(0, 0, 0));
        assert_eq!(Rgba::from(NamedColor::Blue), Rgba::opaque(0, 0, 170));
        assert_eq!(Rgba::from(NamedColor::Brown), Rgba::opaque(170, 85, 0));
        assert_eq!(Rgba::from(NamedColor::White), Rgba::opaque(255, 255, 255));
    }

    #[test]
    fn rgba_byte_order() {
        assert_eq!(Rgba::new(1, 2, 3, 4).to_bytes(), [1, 2, 3, 4]);
        assert_eq!(Rgba::opaque(9, 8, 7).a, 255);
    }
}
