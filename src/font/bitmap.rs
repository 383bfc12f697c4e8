// src/font/bitmap.rs

//! Decoder for packed 1-bpp bitmap fonts (the BTF format).
//!
//! The binary is a flat glyph table: one fixed-size record per code point,
//! 96 records covering ASCII 0x20..0x7F. Each record is `size * size/8`
//! bytes, row-major, 8 pixels per byte with the most significant bit
//! leftmost. Decoding is eager; the glyph cache is built once at load time
//! and never mutated afterwards.

use log::debug;

use super::{FontFace, Glyph, Raster, FIRST_CODE_POINT, GLYPH_COUNT, LAST_CODE_POINT};
use crate::error::FontError;

/// A monochrome bitmap font face.
#[derive(Debug)]
pub struct BitmapFont {
    size: usize,
    glyphs: Vec<Glyph>,
}

impl BitmapFont {
    /// Decodes a BTF font from its raw bytes. `size` is the line height in
    /// pixels (and the height of every glyph cell).
    ///
    /// Fails when `size` is zero or when the buffer is shorter than the
    /// full glyph table.
    pub fn new(data: &[u8], size: u16) -> Result<Self, FontError> {
        if size == 0 {
            return Err(FontError::Malformed("zero line height"));
        }
        let size = size as usize;
        let size8 = size / 8;
        let record = size * size8;
        if data.len() < 128 * record {
            return Err(FontError::Malformed("buffer shorter than glyph table"));
        }

        let mut glyphs = Vec::with_capacity(GLYPH_COUNT);
        for index in 0..GLYPH_COUNT {
            glyphs.push(decode_glyph(&data[record * index..record * (index + 1)], size, size8));
        }
        debug!("decoded bitmap font: {} glyphs, line height {}", glyphs.len(), size);

        Ok(Self { size, glyphs })
    }
}

/// Decodes one fixed-size record into a point-set glyph. The glyph's
/// effective width is the maximum set-bit x coordinate seen.
fn decode_glyph(record: &[u8], size: usize, size8: usize) -> Glyph {
    let mut points = Vec::new();
    let mut width = 0usize;
    for y in 0..size {
        for xb in 0..size8 {
            let byte = record[y * size8 + xb];
            if byte == 0 {
                continue;
            }
            for bit in 0..8 {
                if byte & (0x80 >> bit) == 0 {
                    continue;
                }
                let x = xb * 8 + bit;
                points.push((x as u16, y as u16));
                width = width.max(x);
            }
        }
    }
    Glyph {
        left: 0,
        top: 0,
        width,
        height: size,
        raster: Raster::Points(points),
    }
}

impl FontFace for BitmapFont {
    fn height(&self) -> usize {
        self.size
    }

    fn family_name(&self) -> &str {
        "N/A"
    }

    fn style_name(&self) -> &str {
        "N/A"
    }

    fn glyph(&self, c: char) -> Option<&Glyph> {
        let cp = c as u32;
        if !(FIRST_CODE_POINT..LAST_CODE_POINT).contains(&cp) {
            return None;
        }
        self.glyphs.get((cp - FIRST_CODE_POINT) as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 8px font, one byte per row, every record zeroed.
    fn blank_font() -> Vec<u8> {
        vec![0u8; 128 * 8]
    }

    /// Sets the record for `c` in an 8px font to the given row bytes.
    fn set_record(data: &mut [u8], c: char, rows: [u8; 8]) {
        let base = 8 * (c as usize - 0x20);
        data[base..base + 8].copy_from_slice(&rows);
    }

    #[test]
    fn rejects_zero_height() {
        assert_eq!(
            BitmapFont::new(&[], 0).unwrap_err(),
            FontError::Malformed("zero line height")
        );
    }

    #[test]
    fn rejects_short_buffer() {
        // 8px font needs 128 * 8 * 1 bytes.
        let data = vec![0u8; 128 * 8 - 1];
        assert_eq!(
            BitmapFont::new(&data, 8).unwrap_err(),
            FontError::Malformed("buffer shorter than glyph table")
        );
    }

    #[test]
    fn zero_record_decodes_to_empty_point_set() {
        // Contract: an all-zero record yields a glyph with no points; the
        // caller draws nothing but still advances the cursor.
        let font = BitmapFont::new(&blank_font(), 8).unwrap();
        let glyph = font.glyph('!').unwrap();
        assert_eq!(glyph.raster, Raster::Points(Vec::new()));
        assert_eq!(glyph.width, 0);
        assert_eq!(glyph.height, 8);
    }

    #[test]
    fn set_bits_become_points_msb_first() {
        let mut data = blank_font();
        // 'A': bit 0 (x=0) of row 0 and bit 7 (x=7) of row 3.
        set_record(&mut data, 'A', [0b1000_0000, 0, 0, 0b0000_0001, 0, 0, 0, 0]);
        let font = BitmapFont::new(&data, 8).unwrap();
        let glyph = font.glyph('A').unwrap();
        assert_eq!(glyph.raster, Raster::Points(vec![(0, 0), (7, 3)]));
        // Effective width tracks the maximum x seen.
        assert_eq!(glyph.width, 7);
    }

    #[test]
    fn out_of_range_code_points_have_no_glyph() {
        let font = BitmapFont::new(&blank_font(), 8).unwrap();
        assert!(font.glyph('\x1f').is_none());
        assert!(font.glyph('\u{80}').is_none());
        assert!(font.glyph('é').is_none());
        assert!(font.glyph(' ').is_some());
        assert!(font.glyph('\x7f').is_some());
    }

    #[test]
    fn face_reports_fixed_height_and_placeholder_names() {
        let font = BitmapFont::new(&blank_font(), 8).unwrap();
        assert_eq!(font.height(), 8);
        assert_eq!(font.family_name(), "N/A");
        assert_eq!(font.style_name(), "N/A");
    }
}
