// src/surface.rs

//! The pixel-surface collaborator and an owned in-memory implementation.
//!
//! The terminal owns no pixels, only coordinates into a [`Surface`]. A real
//! host hands it a display-backed surface; tests and headless hosts use the
//! provided [`Framebuffer`].

use log::trace;

use crate::color::Rgba;
use crate::error::TermError;

/// Largest supported surface edge, in pixels.
const MAX_DIMENSION: usize = u16::MAX as usize;

/// Destination pixel buffer capability consumed by the terminal.
///
/// All coordinates are in pixels. Implementations clip: out-of-bounds reads
/// return `None`, out-of-bounds writes are dropped.
pub trait Surface {
    /// Width in pixels.
    fn width(&self) -> usize;

    /// Height in pixels.
    fn height(&self) -> usize;

    /// Fills a rectangle with a solid color, clipped to the surface.
    fn fill_rect(&mut self, x: i32, y: i32, w: usize, h: usize, color: Rgba);

    /// Reads one pixel, or `None` outside the surface.
    fn pixel(&self, x: i32, y: i32) -> Option<Rgba>;

    /// Writes one pixel; out-of-bounds writes are dropped.
    fn set_pixel(&mut self, x: i32, y: i32, color: Rgba);

    /// Shifts the entire pixel content vertically by `dy` pixels
    /// (negative is up). Vacated rows are left unspecified; the caller
    /// clears them. This is the self-blit used for scrolling.
    fn shift_rows(&mut self, dy: i32);
}

/// An owned RGBA framebuffer, row-major, one [`Rgba`] per pixel.
#[derive(Debug, Clone)]
pub struct Framebuffer {
    width: usize,
    height: usize,
    pixels: Vec<Rgba>,
}

impl Framebuffer {
    /// Allocates a `width` x `height` framebuffer cleared to `fill`.
    ///
    /// Dimensions must be nonzero and at most `u16::MAX` per edge; callers
    /// on constrained targets are expected to pre-check available memory
    /// before allocating.
    pub fn new(width: usize, height: usize, fill: Rgba) -> Result<Self, TermError> {
        if width == 0 || height == 0 || width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(TermError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            pixels: vec![fill; width * height],
        })
    }

    /// Raw pixel rows, row-major. Handy for presenting to a real display.
    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }
}

impl Surface for Framebuffer {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: usize, h: usize, color: Rgba) {
        let x0 = x.max(0) as usize;
        let y0 = y.max(0) as usize;
        let x1 = (x.saturating_add(w as i32)).clamp(0, self.width as i32) as usize;
        let y1 = (y.saturating_add(h as i32)).clamp(0, self.height as i32) as usize;
        if x0 >= x1 || y0 >= y1 {
            return;
        }
        for row in y0..y1 {
            let start = row * self.width + x0;
            self.pixels[start..start + (x1 - x0)].fill(color);
        }
    }

    fn pixel(&self, x: i32, y: i32) -> Option<Rgba> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some(self.pixels[y as usize * self.width + x as usize])
    }

    fn set_pixel(&mut self, x: i32, y: i32, color: Rgba) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }
        self.pixels[y as usize * self.width + x as usize] = color;
    }

    fn shift_rows(&mut self, dy: i32) {
        if dy == 0 {
            return;
        }
        trace!("shift_rows: dy={}", dy);
        let offset = dy.unsigned_abs() as usize;
        if offset >= self.height {
            return; // Whole content shifted out; caller clears.
        }
        let span = offset * self.width;
        if dy < 0 {
            self.pixels.copy_within(span.., 0);
        } else {
            let len = self.pixels.len();
            self.pixels.copy_within(..len - span, span);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgba = Rgba::opaque(255, 0, 0);
    const BLACK: Rgba = Rgba::opaque(0, 0, 0);

    #[test]
    fn rejects_degenerate_dimensions() {
        assert!(Framebuffer::new(0, 10, BLACK).is_err());
        assert!(Framebuffer::new(10, 0, BLACK).is_err());
        assert!(Framebuffer::new(usize::from(u16::MAX) + 1, 10, BLACK).is_err());
        assert!(Framebuffer::new(4, 4, BLACK).is_ok());
    }

    #[test]
    fn fill_rect_clips_to_bounds() {
        let mut fb = Framebuffer::new(4, 4, BLACK).unwrap();
        fb.fill_rect(-1, -1, 3, 3, RED);
        // Clipped to the 2x2 top-left corner.
        assert_eq!(fb.pixel(0, 0), Some(RED));
        assert_eq!(fb.pixel(1, 1), Some(RED));
        assert_eq!(fb.pixel(2, 2), Some(BLACK));
    }

    #[test]
    fn pixel_access_is_bounds_checked() {
        let mut fb = Framebuffer::new(2, 2, BLACK).unwrap();
        assert_eq!(fb.pixel(-1, 0), None);
        assert_eq!(fb.pixel(2, 0), None);
        fb.set_pixel(5, 5, RED); // dropped
        fb.set_pixel(1, 1, RED);
        assert_eq!(fb.pixel(1, 1), Some(RED));
    }

    #[test]
    fn shift_rows_moves_content_up() {
        let mut fb = Framebuffer::new(2, 3, BLACK).unwrap();
        fb.fill_rect(0, 1, 2, 1, RED); // middle row red
        fb.shift_rows(-1);
        assert_eq!(fb.pixel(0, 0), Some(RED));
        assert_eq!(fb.pixel(1, 0), Some(RED));
        // Row 1 now holds the old bottom row.
        assert_eq!(fb.pixel(0, 1), Some(BLACK));
    }

    #[test]
    fn shift_rows_moves_content_down() {
        let mut fb = Framebuffer::new(2, 3, BLACK).unwrap();
        fb.fill_rect(0, 0, 2, 1, RED);
        fb.shift_rows(1);
        assert_eq!(fb.pixel(0, 1), Some(RED));
    }

    #[test]
    fn shift_past_height_is_a_noop() {
        let mut fb = Framebuffer::new(2, 2, RED).unwrap();
        fb.shift_rows(-5);
        assert_eq!(fb.pixel(0, 0), Some(RED));
    }
}
