// src/lib.rs

//! A character-grid terminal renderer and blocking line editor that draws
//! straight onto a raw pixel framebuffer.
//!
//! This crate targets environments with no operating-system terminal at all,
//! only a pixel surface: bare-metal kernels, embedded graphics stacks, or
//! headless software renderers. It provides:
//!
//! - a uniform [`font::Glyph`] model over two incompatible font sources
//!   (packed 1-bpp bitmap fonts and antialiased coverage-map fonts),
//! - a [`compositor`] that blends glyphs into any [`surface::Surface`],
//! - a [`term::Terminal`] grid/cursor/scroll state machine, and
//! - a synchronous line editor (`read_line`) with echo, backspace, tab
//!   expansion, one-level history recall and a clear-screen shortcut.
//!
//! The host supplies its collaborators through small traits ([`host`]) and
//! callbacks: a keystroke source, a wall clock for cursor blink, an optional
//! beeper, and hooks fired when the terminal wants a present, an idle yield,
//! or a viewport reposition. Everything runs on the calling thread; the only
//! cooperative suspension point is the idle hook inside the blocking reads.

pub mod color;
pub mod compositor;
pub mod config;
pub mod error;
pub mod font;
pub mod host;
pub mod keys;
pub mod surface;
pub mod term;

pub use color::{NamedColor, Rgba};
pub use config::TermConfig;
pub use error::{FontError, TermError};
pub use font::{FontFace, Glyph, Raster};
pub use keys::{KeyEvent, KeySymbol, Modifiers};
pub use surface::{Framebuffer, Surface};
pub use term::{CursorShape, Terminal};
