// src/font/mod.rs

//! The uniform glyph model and the font-face capability.
//!
//! Two incompatible font sources are decoded into one [`Glyph`] shape:
//! packed 1-bpp bitmap fonts ([`bitmap::BitmapFont`]) produce a sparse set
//! of opaque pixel coordinates, antialiased fonts ([`alpha::AlphaFont`])
//! produce a dense 8-bit coverage map. The payload is an explicit tagged
//! enum so the compositor dispatches exhaustively instead of sniffing
//! whether a byte array happens to be empty.

pub mod alpha;
pub mod bitmap;

pub use alpha::AlphaFont;
pub use bitmap::BitmapFont;

/// First supported code point (space).
pub(crate) const FIRST_CODE_POINT: u32 = 0x20;
/// One past the last supported code point.
pub(crate) const LAST_CODE_POINT: u32 = 0x80;
/// Number of glyphs in a decoded face (ASCII 0x20..0x7F inclusive).
pub(crate) const GLYPH_COUNT: usize = (LAST_CODE_POINT - FIRST_CODE_POINT) as usize;

/// Rasterized payload of a glyph. Exactly one representation per glyph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Raster {
    /// Sparse set of opaque foreground pixels, relative to the cell origin.
    /// Produced by monochrome bitmap fonts.
    Points(Vec<(u16, u16)>),
    /// Dense `width * height` coverage map, one alpha-like byte per pixel.
    /// Produced by antialiased fonts.
    Coverage(Vec<u8>),
}

/// Immutable rasterized form of one character.
///
/// Bearings (`left`, `top`) are meaningful for coverage glyphs, where `top`
/// is measured from the font baseline and subtracted when positioning.
/// Bitmap-font glyphs always carry zero bearings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
    /// Horizontal bearing in pixels.
    pub left: i32,
    /// Vertical bearing in pixels, baseline-relative.
    pub top: i32,
    /// Bitmap extent in pixels.
    pub width: usize,
    /// Bitmap extent in pixels.
    pub height: usize,
    /// The pixel payload.
    pub raster: Raster,
}

/// Fixed-cell measurements derived from a whole face, used by the grid to
/// size cells and vertically align variable-bearing glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellMetrics {
    /// Widest glyph width over ASCII 0x20..0x7F; the grid's cell advance.
    pub advance: usize,
    /// How far any glyph's bitmap extends below the nominal baseline.
    pub excess: i32,
}

/// Capability set of a loaded font face.
///
/// A face is immutable after construction: `height()` is constant for its
/// lifetime and equals the line pitch of every glyph drawn with it, and
/// repeated `glyph()` lookups of the same code point return identical data.
pub trait FontFace {
    /// Line height in pixels.
    fn height(&self) -> usize;

    /// Family name, if the format carries one.
    fn family_name(&self) -> &str;

    /// Style name, if the format carries one.
    fn style_name(&self) -> &str;

    /// Glyph for a code point, or `None` when the face has no glyph for it.
    /// A miss is not an error; callers skip drawing and advance the cursor.
    fn glyph(&self, c: char) -> Option<&Glyph>;

    /// Widest-character probe over ASCII 0x20..0x7F.
    ///
    /// `excess` is the largest `height() - top + glyph.height - height()`
    /// seen, i.e. the deepest descender overhang; the grid uses it to align
    /// all glyphs consistently despite per-glyph bearings.
    fn cell_metrics(&self) -> CellMetrics {
        let line_height = self.height() as i32;
        let mut advance = 0usize;
        let mut excess = 0i32;
        for cp in FIRST_CODE_POINT..LAST_CODE_POINT {
            let Some(c) = char::from_u32(cp) else { continue };
            let Some(glyph) = self.glyph(c) else { continue };
            let overhang = line_height - glyph.top + glyph.height as i32 - line_height;
            advance = advance.max(glyph.width);
            excess = excess.max(overhang);
        }
        CellMetrics { advance, excess }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StubFace {
        tall: Glyph,
        short: Glyph,
    }

    impl FontFace for StubFace {
        fn height(&self) -> usize {
            16
        }
        fn family_name(&self) -> &str {
            "stub"
        }
        fn style_name(&self) -> &str {
            "regular"
        }
        fn glyph(&self, c: char) -> Option<&Glyph> {
            match c {
                'y' => Some(&self.tall),
                ' '..='\u{7f}' => Some(&self.short),
                _ => None,
            }
        }
    }

    #[test]
    fn cell_metrics_takes_maxima_over_the_face() {
        // Contract: advance is the widest glyph, excess the deepest
        // descender overhang (height - top for each glyph).
        let face = StubFace {
            tall: Glyph {
                left: 0,
                top: 12,
                width: 7,
                height: 16,
                raster: Raster::Coverage(vec![0; 7 * 16]),
            },
            short: Glyph {
                left: 0,
                top: 12,
                width: 9,
                height: 12,
                raster: Raster::Coverage(vec![0; 9 * 12]),
            },
        };
        let metrics = face.cell_metrics();
        assert_eq!(metrics.advance, 9);
        assert_eq!(metrics.excess, 4); // 16 - 12
    }
}
