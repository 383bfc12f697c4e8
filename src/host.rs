// src/host.rs

//! Host collaborator capabilities.
//!
//! The terminal core never talks to hardware directly. The host supplies a
//! keystroke source, a coarse wall clock for cursor blink, an optional
//! beeper, and hook closures invoked when the terminal wants a present, an
//! idle yield, or a viewport reposition. All of it runs on the calling
//! thread; a hook that blocks stalls the terminal.

use crate::keys::KeyEvent;

/// Non-blocking keystroke source.
pub trait KeySource {
    /// Returns the next pending keystroke, or `None` when no key is
    /// available right now. Blocking loops live in the terminal, not here.
    fn try_read_key(&mut self) -> Option<KeyEvent>;
}

/// Coarse real-time clock, used only for cursor blink edge detection.
pub trait Clock {
    /// Whole seconds of some monotonically readable clock. Only equality
    /// between successive reads matters; the epoch is irrelevant.
    fn seconds_now(&self) -> u64;
}

/// Fire-and-forget system beeper.
pub trait Beeper {
    fn beep(&mut self, frequency_hz: u32, duration_ms: u32);
}

/// Host callback invoked by the terminal.
///
/// Three hooks exist on [`crate::term::Terminal`]:
/// - update: rendering finished, present the surface;
/// - idle: a blocking read found no key, the host may service other work;
/// - scroll: the cursor moved past the visible viewport rows, the host
///   should reposition its view of the backing surface.
pub type HostHook = Box<dyn FnMut()>;
