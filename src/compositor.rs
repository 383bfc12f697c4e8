// src/compositor.rs

//! Paints glyphs onto a destination surface.
//!
//! The blend algorithm is selected by the glyph's raster payload:
//!
//! - point-set glyphs are opaque foreground overwrites; the caller must
//!   already have cleared the cell to the background color;
//! - coverage glyphs blend each pixel against the *current* destination
//!   pixel. The destination is read per pixel, after the background fill,
//!   because antialiased glyphs legitimately read back partially blended
//!   neighbors when they overlap cell boundaries.

use crate::color::Rgba;
use crate::font::{Glyph, Raster};
use crate::surface::Surface;

/// Draws `glyph` with foreground `fg` into the cell whose top-left pixel is
/// `(cell_x, cell_y)`.
///
/// `line_height` and `excess` come from the active face (`height()` and the
/// widest-character probe): coverage glyphs carry baseline-relative `top`
/// bearings, so their bitmap origin is
/// `(cell_x + left, cell_y + line_height - top - excess)`.
pub fn draw_glyph(
    surface: &mut dyn Surface,
    glyph: &Glyph,
    cell_x: i32,
    cell_y: i32,
    line_height: usize,
    excess: i32,
    fg: Rgba,
) {
    match &glyph.raster {
        Raster::Points(points) => {
            for &(x, y) in points {
                surface.set_pixel(cell_x + i32::from(x), cell_y + i32::from(y), fg);
            }
        }
        Raster::Coverage(coverage) => {
            let x0 = cell_x + glyph.left;
            let y0 = cell_y + line_height as i32 - glyph.top - excess;
            for yy in 0..glyph.height {
                for xx in 0..glyph.width {
                    let a = u32::from(coverage[yy * glyph.width + xx]);
                    let px = x0 + xx as i32;
                    let py = y0 + yy as i32;
                    let Some(bg) = surface.pixel(px, py) else {
                        continue;
                    };
                    surface.set_pixel(px, py, blend(a, fg, bg));
                }
            }
        }
    }
}

/// One coverage blend step: `(a*fg + (256-a)*bg) >> 8` per channel, output
/// alpha forced to opaque.
///
/// The inverse weight is `256 - a`, a 257-step scale over an 8-bit coverage
/// value: at `a = 255` the result is one LSB shy of pure foreground.
/// Renderers comparing output bit for bit depend on these exact values.
fn blend(a: u32, fg: Rgba, bg: Rgba) -> Rgba {
    let inv = 256 - a;
    let channel = |f: u8, b: u8| ((a * u32::from(f) + inv * u32::from(b)) >> 8) as u8;
    Rgba::opaque(
        channel(fg.r, bg.r),
        channel(fg.g, bg.g),
        channel(fg.b, bg.b),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::Framebuffer;

    const WHITE: Rgba = Rgba::opaque(255, 255, 255);
    const BLACK: Rgba = Rgba::opaque(0, 0, 0);

    fn points_glyph() -> Glyph {
        Glyph {
            left: 0,
            top: 0,
            width: 2,
            height: 2,
            raster: Raster::Points(vec![(0, 0), (1, 1)]),
        }
    }

    fn coverage_glyph(width: usize, height: usize, coverage: Vec<u8>) -> Glyph {
        Glyph {
            left: 0,
            top: height as i32,
            width,
            height,
            raster: Raster::Coverage(coverage),
        }
    }

    #[test]
    fn point_glyph_overwrites_foreground_opaquely() {
        let mut fb = Framebuffer::new(4, 4, BLACK).unwrap();
        draw_glyph(&mut fb, &points_glyph(), 1, 1, 4, 0, WHITE);
        assert_eq!(fb.pixel(1, 1), Some(WHITE));
        assert_eq!(fb.pixel(2, 2), Some(WHITE));
        // Unlisted pixels untouched.
        assert_eq!(fb.pixel(2, 1), Some(BLACK));
    }

    #[test]
    fn zero_coverage_leaves_background_exact() {
        let mut fb = Framebuffer::new(2, 2, Rgba::opaque(10, 20, 30)).unwrap();
        // line_height == glyph height and top == height puts the bitmap at
        // the cell origin.
        let glyph = coverage_glyph(2, 2, vec![0; 4]);
        draw_glyph(&mut fb, &glyph, 0, 0, 2, 0, WHITE);
        assert_eq!(fb.pixel(0, 0), Some(Rgba::opaque(10, 20, 30)));
    }

    #[test]
    fn full_coverage_reaches_foreground_minus_one_lsb() {
        // Contract: the 257-step inverse never reaches pure foreground.
        // (255*255 + 1*0) >> 8 == 254.
        let mut fb = Framebuffer::new(1, 1, BLACK).unwrap();
        let glyph = coverage_glyph(1, 1, vec![255]);
        draw_glyph(&mut fb, &glyph, 0, 0, 1, 0, WHITE);
        assert_eq!(fb.pixel(0, 0), Some(Rgba::opaque(254, 254, 254)));
    }

    #[test]
    fn half_coverage_mixes_channels() {
        // (128*200 + 128*100) >> 8 == 150 per channel.
        let mut fb = Framebuffer::new(1, 1, Rgba::opaque(100, 100, 100)).unwrap();
        let glyph = coverage_glyph(1, 1, vec![128]);
        draw_glyph(&mut fb, &glyph, 0, 0, 1, 0, Rgba::opaque(200, 200, 200));
        assert_eq!(fb.pixel(0, 0), Some(Rgba::opaque(150, 150, 150)));
    }

    #[test]
    fn coverage_reads_destination_per_pixel() {
        // Two full-coverage passes over the same pixel accumulate: the
        // second pass must blend against the first pass's output, not the
        // original background.
        let mut fb = Framebuffer::new(1, 1, BLACK).unwrap();
        let glyph = coverage_glyph(1, 1, vec![255]);
        draw_glyph(&mut fb, &glyph, 0, 0, 1, 0, WHITE);
        let first = fb.pixel(0, 0).unwrap();
        draw_glyph(&mut fb, &glyph, 0, 0, 1, 0, WHITE);
        let second = fb.pixel(0, 0).unwrap();
        assert!(second.r < 255 && second.r >= first.r);
    }

    #[test]
    fn coverage_origin_honors_bearings_and_excess() {
        // line_height 8, top 6, excess 2: origin y = 8 - 6 - 2 = 0; left 3.
        let mut fb = Framebuffer::new(8, 8, BLACK).unwrap();
        let glyph = Glyph {
            left: 3,
            top: 6,
            width: 1,
            height: 1,
            raster: Raster::Coverage(vec![255]),
        };
        draw_glyph(&mut fb, &glyph, 0, 0, 8, 2, WHITE);
        assert_eq!(fb.pixel(3, 0), Some(Rgba::opaque(254, 254, 254)));
    }

    #[test]
    fn coverage_clips_outside_the_surface() {
        let mut fb = Framebuffer::new(2, 2, BLACK).unwrap();
        let glyph = coverage_glyph(4, 4, vec![255; 16]);
        // Off the left/top edge; no panic, inside pixels blended.
        draw_glyph(&mut fb, &glyph, -2, -2, 4, 0, WHITE);
        assert!(fb.pixel(0, 0).unwrap().r > 0);
    }
}
