// src/term/editor.rs

//! Blocking input: single-key reads and a line editor with echo,
//! backspace, tab expansion and one-level history.
//!
//! Both reads busy-poll the [`KeySource`]; the idle hook is the only
//! yield point, so a host that needs to halt or run other work does it
//! there.

use log::trace;

use crate::host::{Clock, KeySource};
use crate::keys::{KeyEvent, KeySymbol};
use crate::surface::Surface;

use super::{Terminal, TAB_WIDTH};

impl<S: Surface> Terminal<S> {
    /// Blocks until one key arrives. With `echo` set, printable characters
    /// are written through before the event is returned; editing keys are
    /// never interpreted here.
    pub fn read_key(&mut self, keys: &mut dyn KeySource, clock: &dyn Clock, echo: bool) -> KeyEvent {
        self.force_draw_cursor(false);
        loop {
            self.poll_cursor_blink(clock);
            match keys.try_read_key() {
                Some(key) => {
                    if echo {
                        if let KeySymbol::Char(c) = key.symbol {
                            let mut buf = [0u8; 4];
                            self.write(c.encode_utf8(&mut buf));
                        }
                    }
                    return key;
                }
                None => self.request_idle(),
            }
        }
    }

    /// Blocks until Enter, echoing as it goes, and returns the accepted
    /// line (without the newline). Editing keys:
    ///
    /// * Backspace erases one cell, wrapping to the previous row, and is a
    ///   no-op at the line's start; erasing into an intact tab expansion
    ///   removes all four of its cells at once.
    /// * Tab inserts four literal spaces.
    /// * Up recalls the previously accepted line, replacing the current
    ///   input on screen and in the accumulator.
    /// * Ctrl+L clears the screen and returns an empty line immediately.
    ///
    /// Unhandled symbols are ignored.
    pub fn read_line(&mut self, keys: &mut dyn KeySource, clock: &dyn Clock) -> String {
        let (start_col, start_row) = self.cursor_position();
        let mut input = String::new();
        // Accumulator offsets where a tab expansion begins; only the tail
        // expansion can still be undone as a unit.
        let mut tab_marks: Vec<usize> = Vec::new();

        self.force_draw_cursor(false);
        loop {
            self.poll_cursor_blink(clock);
            let key = match keys.try_read_key() {
                Some(key) => key,
                None => {
                    self.request_idle();
                    continue;
                }
            };

            match key.symbol {
                KeySymbol::Enter => {
                    self.erase_cursor_cell();
                    self.try_scroll();
                    self.cursor_col = 0;
                    self.cursor_row += 1;
                    self.last_input = input.clone();
                    trace!("read_line accepted {:?}", input);
                    return input;
                }
                KeySymbol::Backspace => {
                    if self.cursor_position() != (start_col, start_row) && !input.is_empty() {
                        let steps = if tab_marks
                            .last()
                            .is_some_and(|&mark| mark + TAB_WIDTH == input.len())
                        {
                            tab_marks.pop();
                            TAB_WIDTH
                        } else {
                            1
                        };
                        for _ in 0..steps {
                            self.erase_cursor_cell();
                            if self.cursor_col == 0 {
                                self.cursor_row = self.cursor_row.saturating_sub(1);
                                self.cursor_col = self.columns - 1;
                            } else {
                                self.cursor_col -= 1;
                            }
                            self.erase_cursor_cell();
                            input.pop();
                        }
                        // A mark whose four cells are no longer the tail is
                        // broken and can never match again.
                        while tab_marks
                            .last()
                            .is_some_and(|&mark| mark + TAB_WIDTH > input.len())
                        {
                            tab_marks.pop();
                        }
                    }
                }
                KeySymbol::Tab => {
                    tab_marks.push(input.len());
                    self.write("\t");
                    for _ in 0..TAB_WIDTH {
                        input.push(' ');
                    }
                }
                KeySymbol::Up => {
                    self.force_draw_cursor(true);
                    self.set_cursor_position(start_col, start_row);
                    let blank = " ".repeat(input.chars().count());
                    self.write(&blank);
                    self.set_cursor_position(start_col, start_row);
                    let recalled = self.last_input.clone();
                    self.write(&recalled);
                    input = recalled;
                    tab_marks.clear();
                }
                KeySymbol::Char(c) if key.control() && c.eq_ignore_ascii_case(&'l') => {
                    self.clear();
                    return String::new();
                }
                KeySymbol::Char(c) if (0x20..0x80).contains(&(c as u32)) => {
                    let mut buf = [0u8; 4];
                    self.write(c.encode_utf8(&mut buf));
                    input.push(c);
                }
                _ => {}
            }

            self.force_draw_cursor(false);
        }
    }
}
