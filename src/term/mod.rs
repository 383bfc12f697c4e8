// src/term/mod.rs

//! The terminal grid: cursor, colors, scroll policy and cell drawing.
//!
//! A [`Terminal`] owns a destination [`Surface`] and a [`FontFace`] and
//! maintains the character grid derived from them. It draws synchronously:
//! `write` returns only after every character has been composited and the
//! host's update hook has fired (once per call, not per character).
//!
//! Scrolling works on a backing surface that may be taller than the visible
//! display: when the cursor runs off the *allocated* rows the pixel content
//! is self-blitted upward and the bottom strip cleared; when it merely runs
//! off the *visible* viewport rows the scroll hook fires so the host can
//! reposition its view.

mod editor;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::color::{NamedColor, Rgba};
use crate::compositor;
use crate::config::TermConfig;
use crate::error::TermError;
use crate::font::FontFace;
use crate::host::{Beeper, Clock, HostHook};
use crate::surface::Surface;

/// Fixed tab stop: a tab is four literal spaces.
pub(crate) const TAB_WIDTH: usize = 4;

/// Cursor rendering shape, always a filled rectangle within the cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CursorShape {
    /// The full cell rectangle.
    #[default]
    Block,
    /// A 2px-tall strip at the cell's bottom edge.
    Underline,
    /// A 2px-wide bar at the cell's left edge, full cell height.
    Caret,
}

/// Per-instance cursor blink state (edge-detected against a wall clock).
#[derive(Debug, Default)]
struct Blink {
    last_second: Option<u64>,
    hidden: bool,
}

/// A character-grid terminal over a pixel surface.
pub struct Terminal<S: Surface> {
    surface: S,
    font: Box<dyn FontFace>,

    columns: usize,
    rows: usize,
    viewport_rows: usize,
    advance: usize,
    excess: i32,

    cursor_col: usize,
    cursor_row: usize,
    cursor_visible: bool,
    cursor_shape: CursorShape,
    blink: Blink,

    foreground: Rgba,
    background: Rgba,

    beep_frequency_hz: u32,
    beep_duration_ms: u32,

    last_input: String,

    beeper: Option<Box<dyn Beeper>>,
    on_update: Option<HostHook>,
    on_idle: Option<HostHook>,
    on_scroll: Option<HostHook>,
}

impl<S: Surface> Terminal<S> {
    /// Builds a terminal with default settings (white on black, blinking
    /// block cursor).
    pub fn new(surface: S, font: Box<dyn FontFace>) -> Result<Self, TermError> {
        Self::with_config(surface, font, &TermConfig::default())
    }

    /// Builds a terminal, deriving the grid from the surface's pixel size
    /// and the font's cell metrics. Fails when no grid can be derived; a
    /// failed construction never yields a usable instance.
    pub fn with_config(
        surface: S,
        font: Box<dyn FontFace>,
        config: &TermConfig,
    ) -> Result<Self, TermError> {
        let line_height = font.height();
        if line_height == 0 {
            return Err(TermError::ZeroLineHeight);
        }
        let metrics = font.cell_metrics();
        if metrics.advance == 0 {
            return Err(TermError::ZeroCellAdvance);
        }
        let columns = surface.width() / metrics.advance;
        let rows = surface.height() / line_height;
        if columns == 0 || rows == 0 {
            return Err(TermError::SurfaceTooSmall {
                cell_width: metrics.advance,
                cell_height: line_height,
            });
        }
        debug!(
            "terminal grid: {}x{} cells of {}x{} px (excess {})",
            columns, rows, metrics.advance, line_height, metrics.excess
        );

        Ok(Self {
            surface,
            font,
            columns,
            rows,
            viewport_rows: rows,
            advance: metrics.advance,
            excess: metrics.excess,
            cursor_col: 0,
            cursor_row: 0,
            cursor_visible: config.cursor_visible,
            cursor_shape: config.cursor_shape,
            blink: Blink::default(),
            foreground: config.foreground.into(),
            background: config.background.into(),
            beep_frequency_hz: config.beep_frequency_hz,
            beep_duration_ms: config.beep_duration_ms,
            last_input: String::new(),
            beeper: None,
            on_update: None,
            on_idle: None,
            on_scroll: None,
        })
    }

    // --- Writing ---

    /// Appends `text` in the current colors. Control characters: `\r`
    /// returns to column 0, `\n` starts a new line, `\t` expands to four
    /// spaces. The update hook fires once after the whole string.
    pub fn write(&mut self, text: &str) {
        let (fg, bg) = (self.foreground, self.background);
        self.write_impl(text, fg, bg, false);
    }

    /// Appends `text` with explicit colors. Accepts `Rgba` or a
    /// [`NamedColor`] palette entry.
    pub fn write_colored(&mut self, text: &str, fg: impl Into<Rgba>, bg: impl Into<Rgba>) {
        self.write_impl(text, fg.into(), bg.into(), false);
    }

    /// Appends `text` followed by a newline.
    pub fn write_line(&mut self, text: &str) {
        let (fg, bg) = (self.foreground, self.background);
        self.write_impl(text, fg, bg, true);
    }

    /// Appends `text` followed by a newline, with explicit colors.
    pub fn write_line_colored(&mut self, text: &str, fg: impl Into<Rgba>, bg: impl Into<Rgba>) {
        self.write_impl(text, fg.into(), bg.into(), true);
    }

    fn write_impl(&mut self, text: &str, fg: Rgba, bg: Rgba, trailing_newline: bool) {
        if text.is_empty() {
            // Pure cursor motion (or a no-op): nothing drawn, no present.
            if trailing_newline {
                self.put_char('\n', fg, bg);
            }
            return;
        }
        trace!("write: {:?} at ({}, {})", text, self.cursor_col, self.cursor_row);
        for c in text.chars() {
            self.put_char(c, fg, bg);
        }
        if trailing_newline {
            self.put_char('\n', fg, bg);
        }
        self.request_update();
    }

    /// Draws one character and runs the scroll check. Code points without
    /// a glyph advance the cursor silently; that is graceful degradation,
    /// not an error.
    fn put_char(&mut self, c: char, fg: Rgba, bg: Rgba) {
        match c {
            '\t' => {
                for _ in 0..TAB_WIDTH {
                    self.put_char(' ', fg, bg);
                }
                return; // Each space ran its own scroll check.
            }
            '\r' => self.cursor_col = 0,
            '\n' => {
                self.cursor_col = 0;
                self.cursor_row += 1;
            }
            _ => {
                let line_height = self.font.height();
                let cell_x = (self.advance * self.cursor_col) as i32;
                let cell_y = (line_height * self.cursor_row) as i32;
                self.surface
                    .fill_rect(cell_x, cell_y, self.advance, line_height, bg);
                if c != ' ' {
                    if let Some(glyph) = self.font.glyph(c) {
                        compositor::draw_glyph(
                            &mut self.surface,
                            glyph,
                            cell_x,
                            cell_y,
                            line_height,
                            self.excess,
                            fg,
                        );
                    } else {
                        trace!("no glyph for {:?}, skipping", c);
                    }
                }
                self.cursor_col += 1;
            }
        }
        self.try_scroll();
    }

    // --- Scroll policy ---

    /// Re-establishes the grid invariants after a cursor advance: wrap the
    /// column, scroll the backing surface when the cursor runs off the
    /// allocated rows, and notify the host when it runs off the viewport.
    fn try_scroll(&mut self) {
        if self.cursor_col >= self.columns {
            self.cursor_col = 0;
            self.cursor_row += 1;
        }

        if self.cursor_row >= self.rows {
            let lines = self.cursor_row - self.rows + 1;
            let strip = lines * self.font.height();
            trace!("scrolling backing surface up {} line(s)", lines);
            self.surface.shift_rows(-(strip as i32));
            self.surface.fill_rect(
                0,
                self.surface.height() as i32 - strip as i32,
                self.surface.width(),
                strip,
                self.background,
            );
            self.cursor_row = self.rows - 1;
        }

        if self.cursor_row >= self.viewport_rows {
            self.request_scroll();
        }
    }

    // --- Cursor rendering ---

    /// Paints (or, with `hide`, un-paints) the cursor rectangle for the
    /// current shape at the current cell, then requests a present. Never
    /// draws while the cursor is invisible.
    fn force_draw_cursor(&mut self, hide: bool) {
        if !self.cursor_visible {
            return;
        }
        let line_height = self.font.height();
        let cell_x = (self.advance * self.cursor_col) as i32;
        let cell_y = (line_height * self.cursor_row) as i32;
        let (x, y, w, h) = match self.cursor_shape {
            CursorShape::Block => (cell_x, cell_y, self.advance, line_height),
            CursorShape::Underline => (
                cell_x,
                (line_height * (self.cursor_row + 1)) as i32 - 2,
                self.advance,
                2,
            ),
            CursorShape::Caret => (cell_x, cell_y, 2, line_height),
        };
        let color = if hide { self.background } else { self.foreground };
        self.surface.fill_rect(x, y, w, h, color);
        self.request_update();
    }

    /// Blink poll: toggles the cursor only when the clock's whole-seconds
    /// value changed since the last poll, giving ~1 Hz without a timer.
    fn poll_cursor_blink(&mut self, clock: &dyn Clock) {
        if !self.cursor_visible {
            return;
        }
        let now = clock.seconds_now();
        match self.blink.last_second {
            Some(last) if last == now => {}
            Some(_) => {
                self.blink.last_second = Some(now);
                self.blink.hidden = !self.blink.hidden;
                self.force_draw_cursor(self.blink.hidden);
            }
            None => self.blink.last_second = Some(now),
        }
    }

    /// Repaints the current cell with the background (used to retire a
    /// cursor rectangle or erase an echoed character).
    fn erase_cursor_cell(&mut self) {
        let line_height = self.font.height();
        self.surface.fill_rect(
            (self.advance * self.cursor_col) as i32,
            (line_height * self.cursor_row) as i32,
            self.advance,
            line_height,
            self.background,
        );
    }

    // --- Screen-level operations ---

    /// Clears the whole surface to the background color and homes the
    /// cursor.
    pub fn clear(&mut self) {
        debug!("clear");
        self.surface.fill_rect(
            0,
            0,
            self.surface.width(),
            self.surface.height(),
            self.background,
        );
        self.cursor_col = 0;
        self.cursor_row = 0;
        self.request_update();
    }

    /// Plays the configured default beep through the attached beeper, if
    /// any.
    pub fn beep(&mut self) {
        let (freq, dur) = (self.beep_frequency_hz, self.beep_duration_ms);
        self.beep_with(freq, dur);
    }

    /// Plays a beep with explicit frequency and duration.
    pub fn beep_with(&mut self, frequency_hz: u32, duration_ms: u32) {
        if let Some(beeper) = self.beeper.as_mut() {
            beeper.beep(frequency_hz, duration_ms);
        }
    }

    // --- Accessors and settings ---

    /// Grid width in cells.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Grid height in cells (of the allocated backing surface).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Rows currently visible on the physical display.
    pub fn viewport_rows(&self) -> usize {
        self.viewport_rows
    }

    /// Restricts the visible viewport to `rows` grid rows; the scroll hook
    /// fires whenever the cursor moves past them.
    pub fn set_viewport_rows(&mut self, rows: usize) {
        self.viewport_rows = rows.max(1);
    }

    /// Cell size in pixels: (advance, line height).
    pub fn cell_size(&self) -> (usize, usize) {
        (self.advance, self.font.height())
    }

    pub fn cursor_position(&self) -> (usize, usize) {
        (self.cursor_col, self.cursor_row)
    }

    /// Moves the cursor. No clamping: an out-of-range row is brought back
    /// into bounds by the scroll check before the next character draws.
    pub fn set_cursor_position(&mut self, col: usize, row: usize) {
        self.cursor_col = col;
        self.cursor_row = row;
    }

    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    pub fn set_cursor_visible(&mut self, visible: bool) {
        self.cursor_visible = visible;
    }

    pub fn cursor_shape(&self) -> CursorShape {
        self.cursor_shape
    }

    /// Changes the cursor shape, repainting the current cell so a stale
    /// rectangle of the old shape is not left behind.
    pub fn set_cursor_shape(&mut self, shape: CursorShape) {
        self.cursor_shape = shape;
        self.erase_cursor_cell();
    }

    pub fn foreground(&self) -> Rgba {
        self.foreground
    }

    pub fn set_foreground(&mut self, color: impl Into<Rgba>) {
        self.foreground = color.into();
    }

    pub fn background(&self) -> Rgba {
        self.background
    }

    pub fn set_background(&mut self, color: impl Into<Rgba>) {
        self.background = color.into();
    }

    /// Restores the default white-on-black colors.
    pub fn reset_color(&mut self) {
        self.foreground = NamedColor::White.into();
        self.background = NamedColor::Black.into();
    }

    pub fn font(&self) -> &dyn FontFace {
        self.font.as_ref()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    // --- Host wiring ---

    pub fn set_beeper(&mut self, beeper: Box<dyn Beeper>) {
        self.beeper = Some(beeper);
    }

    /// Hook fired once per `write`/cursor draw, after rendering finishes.
    pub fn set_update_hook(&mut self, hook: impl FnMut() + 'static) {
        self.on_update = Some(Box::new(hook));
    }

    /// Hook fired on each failed key poll inside a blocking read; the only
    /// cooperative yield point.
    pub fn set_idle_hook(&mut self, hook: impl FnMut() + 'static) {
        self.on_idle = Some(Box::new(hook));
    }

    /// Hook fired when the cursor moves past the visible viewport rows.
    pub fn set_scroll_hook(&mut self, hook: impl FnMut() + 'static) {
        self.on_scroll = Some(Box::new(hook));
    }

    fn request_update(&mut self) {
        if let Some(hook) = self.on_update.as_mut() {
            hook();
        }
    }

    fn request_idle(&mut self) {
        if let Some(hook) = self.on_idle.as_mut() {
            hook();
        }
    }

    fn request_scroll(&mut self) {
        if let Some(hook) = self.on_scroll.as_mut() {
            hook();
        }
    }
}
