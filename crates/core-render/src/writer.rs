//! Terminal writer for the live report region.
//!
//! Commands are batched and emitted with a single flush, so a redraw never
//! shows a half-cleared frame.
//!
//! Design invariants:
//! * Commands preserve ordering; no flushing mid-frame.
//! * Positions are relative to the line below the previous frame: the caller
//!   passes the terminal rows it drew last time (wrapped lines included, see
//!   `measure`) and the writer walks back up.
//! * A zero line count emits no cursor movement (`CSI 0 F` would move one line
//!   on most terminals).
//! * Every printed line ends in CRLF; raw mode disables `\n` -> `\r\n`.

use crossterm::{
    cursor::MoveToPreviousLine,
    queue,
    style::Print,
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    MoveUp(u16),
    ClearBelow,
    Print(String),
    LineBreak,
}

#[derive(Debug, Default)]
pub struct Writer {
    cmds: Vec<Command>,
}

impl Writer {
    pub fn new() -> Self {
        Self { cmds: Vec::new() }
    }
    pub fn move_up(&mut self, lines: u16) {
        if lines > 0 {
            self.cmds.push(Command::MoveUp(lines));
        }
    }
    pub fn clear_below(&mut self) {
        self.cmds.push(Command::ClearBelow);
    }
    pub fn print<S: Into<String>>(&mut self, s: S) {
        let s: String = s.into();
        if !s.is_empty() {
            self.cmds.push(Command::Print(s));
        }
    }
    pub fn line_break(&mut self) {
        self.cmds.push(Command::LineBreak);
    }
    pub fn commands(&self) -> &[Command] {
        &self.cmds
    }
    pub fn flush<W: Write>(self, out: &mut W) -> io::Result<()> {
        for c in self.cmds {
            match c {
                Command::MoveUp(n) => queue!(out, MoveToPreviousLine(n))?,
                Command::ClearBelow => queue!(out, Clear(ClearType::FromCursorDown))?,
                Command::Print(s) => queue!(out, Print(s))?,
                Command::LineBreak => queue!(out, Print("\r\n"))?,
            }
        }
        out.flush()
    }
}

/// Commands replacing the `previous_rows`-tall frame with `lines`.
pub fn redraw(previous_rows: usize, lines: &[String]) -> Writer {
    let mut w = Writer::new();
    w.move_up(u16::try_from(previous_rows).unwrap_or(u16::MAX));
    w.clear_below();
    for line in lines {
        w.print(line.as_str());
        w.line_break();
    }
    w
}
