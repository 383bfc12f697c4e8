// src/error.rs

//! Error types for font decoding and terminal construction.
//!
//! Both taxonomies are construction-fatal: a decoder or terminal that fails
//! to build is never handed back to the caller. Glyph-lookup misses are not
//! errors at all (drawing is skipped and the cursor still advances), so they
//! surface as `Option::None` rather than anything here.

use thiserror::Error;

/// Failures while decoding a font binary.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FontError {
    /// The font bytes do not form a valid glyph table.
    #[error("malformed font data: {0}")]
    Malformed(&'static str),
}

/// Failures while constructing a terminal or framebuffer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TermError {
    /// Pixel dimensions outside the supported range.
    #[error("invalid surface dimensions {width}x{height} px")]
    InvalidDimensions { width: usize, height: usize },

    /// The font's widest-character probe produced a zero cell advance,
    /// so no grid can be derived from it.
    #[error("font produces a zero-width cell")]
    ZeroCellAdvance,

    /// The font reports a zero line height.
    #[error("font reports a zero line height")]
    ZeroLineHeight,

    /// The surface is too small to hold even one character cell.
    #[error("surface smaller than one {cell_width}x{cell_height} px cell")]
    SurfaceTooSmall {
        cell_width: usize,
        cell_height: usize,
    },
}
