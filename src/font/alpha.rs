// src/font/alpha.rs

//! Decoder for antialiased coverage-map fonts (the ACF container).
//!
//! Layout, all integers single bytes:
//!
//! ```text
//! magic        b"ACF1"
//! line_height  u8 (nonzero)
//! family_len   u8, then family bytes (UTF-8)
//! style_len    u8, then style bytes (UTF-8)
//! 96 glyph records for code points 0x20..=0x7F:
//!     left   i8      horizontal bearing
//!     top    i8      vertical bearing, baseline-relative
//!     width  u8
//!     height u8
//!     width * height coverage bytes (0..=255)
//! ```
//!
//! Decoding is eager: the whole table is parsed at load time and repeated
//! lookups of the same code point return the same cached glyph. Glyph
//! bitmap heights may be shorter or taller than the line height (ascenders
//! and descenders); `height()` always returns the face's declared line
//! height.

use log::debug;

use super::{FontFace, Glyph, Raster, FIRST_CODE_POINT, GLYPH_COUNT, LAST_CODE_POINT};
use crate::error::FontError;

const MAGIC: &[u8; 4] = b"ACF1";

/// An antialiased coverage-map font face.
#[derive(Debug)]
pub struct AlphaFont {
    line_height: usize,
    family: String,
    style: String,
    glyphs: Vec<Glyph>,
}

impl AlphaFont {
    /// Decodes an ACF font from its raw bytes.
    pub fn new(data: &[u8]) -> Result<Self, FontError> {
        let mut reader = Reader { data, pos: 0 };

        if reader.take(4)? != MAGIC {
            return Err(FontError::Malformed("bad magic"));
        }
        let line_height = reader.byte()? as usize;
        if line_height == 0 {
            return Err(FontError::Malformed("zero line height"));
        }
        let family = reader.string()?;
        let style = reader.string()?;

        let mut glyphs = Vec::with_capacity(GLYPH_COUNT);
        for _ in 0..GLYPH_COUNT {
            glyphs.push(reader.glyph()?);
        }
        debug!(
            "decoded coverage font '{} {}': {} glyphs, line height {}",
            family,
            style,
            glyphs.len(),
            line_height
        );

        Ok(Self {
            line_height,
            family,
            style,
            glyphs,
        })
    }
}

impl FontFace for AlphaFont {
    fn height(&self) -> usize {
        self.line_height
    }

    fn family_name(&self) -> &str {
        &self.family
    }

    fn style_name(&self) -> &str {
        &self.style
    }

    fn glyph(&self, c: char) -> Option<&Glyph> {
        let cp = c as u32;
        if !(FIRST_CODE_POINT..LAST_CODE_POINT).contains(&cp) {
            return None;
        }
        self.glyphs.get((cp - FIRST_CODE_POINT) as usize)
    }
}

/// Bounds-checked cursor over the font bytes.
struct Reader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn take(&mut self, n: usize) -> Result<&'a [u8], FontError> {
        let end = self
            .pos
            .checked_add(n)
            .filter(|&end| end <= self.data.len())
            .ok_or(FontError::Malformed("truncated font data"))?;
        let slice = &self.data[self.pos..end];
        self.pos = end;
        Ok(slice)
    }

    fn byte(&mut self) -> Result<u8, FontError> {
        Ok(self.take(1)?[0])
    }

    fn string(&mut self) -> Result<String, FontError> {
        let len = self.byte()? as usize;
        let bytes = self.take(len)?;
        String::from_utf8(bytes.to_vec()).map_err(|_| FontError::Malformed("name is not UTF-8"))
    }

    fn glyph(&mut self) -> Result<Glyph, FontError> {
        let left = self.byte()? as i8 as i32;
        let top = self.byte()? as i8 as i32;
        let width = self.byte()? as usize;
        let height = self.byte()? as usize;
        let coverage = self.take(width * height)?.to_vec();
        Ok(Glyph {
            left,
            top,
            width,
            height,
            raster: Raster::Coverage(coverage),
        })
    }
}
