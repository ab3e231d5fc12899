//! Interactive live-scoring session.
//!
//! `Init -> Editing -> {Submitted | Cancelled | Errored}`.
//!
//! The session owns the password buffer and, for the duration of `run`, the
//! raw-mode guard. Raw mode is released exactly once whichever way the loop
//! ends: explicitly after the loop so a failing restore can be reported, or by
//! the guard's `Drop` during unwinding.
//!
//! Redraw bookkeeping: `rendered_rows` is the height of the frame currently on
//! screen in terminal rows, counting the extra rows of lines that wrapped at
//! the current width. It is updated only after a frame has been written and
//! flushed, and consumed by the next redraw to walk the cursor back up. A
//! width change re-measures the frame on screen before redrawing it.

use crate::error::SessionError;
use core_actions::{Outcome, handle_event};
use core_config::SessionConfig;
use core_events::InputEvent;
use core_input::EventSource;
use core_render::{display_width, frame_rows, redraw, render};
use core_score::{ScoreReport, Scorer};
use core_state::PasswordBuffer;
use core_terminal::{TerminalBackend, enter_guard};
use crossterm::style::Stylize;
use std::io::Write;
use tracing::{debug, info};

pub const TITLE: &str = "zpass-check — live interactive mode";
pub const HINT: &str = "Type your password. Backspace edits. Enter to finish. Ctrl+C to exit.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// Enter pressed; carries the report for the final buffer.
    Submitted(ScoreReport),
    Cancelled,
}

impl SessionOutcome {
    fn label(&self) -> &'static str {
        match self {
            SessionOutcome::Submitted(_) => "submitted",
            SessionOutcome::Cancelled => "cancelled",
        }
    }
}

pub struct Session<'s, S: Scorer + ?Sized> {
    scorer: &'s S,
    config: SessionConfig,
    buffer: PasswordBuffer,
    latest: ScoreReport,
    columns: Option<u16>,
    rendered_widths: Vec<usize>,
    rendered_rows: usize,
    scored: u64,
}

impl<'s, S: Scorer + ?Sized> Session<'s, S> {
    pub fn new(scorer: &'s S, config: SessionConfig) -> Self {
        Self {
            scorer,
            config,
            buffer: PasswordBuffer::new(),
            latest: ScoreReport::minimum(),
            columns: None,
            rendered_widths: Vec::new(),
            rendered_rows: 0,
            scored: 0,
        }
    }

    pub fn run<E, T, W>(
        mut self,
        events: &mut E,
        terminal: &mut T,
        out: &mut W,
    ) -> Result<SessionOutcome, SessionError>
    where
        E: EventSource + ?Sized,
        T: TerminalBackend + ?Sized,
        W: Write,
    {
        if !terminal.is_interactive() {
            info!(target: "runtime.session", "not_interactive");
            return Err(SessionError::NotInteractive);
        }
        self.columns = terminal.columns();
        self.write_banner(out)?;

        let guard = enter_guard(terminal).map_err(SessionError::Terminal)?;
        let result = self.edit_loop(events, out);
        let released = guard.release().map_err(SessionError::Terminal);
        self.buffer.clear();

        match &result {
            Ok(outcome) => info!(
                target: "runtime.session",
                outcome = outcome.label(),
                scored = self.scored,
                "session_end"
            ),
            Err(e) => info!(
                target: "runtime.session",
                outcome = "errored",
                error = e.label(),
                scored = self.scored,
                "session_end"
            ),
        }
        let outcome = result?;
        released?;
        Ok(outcome)
    }

    fn write_banner<W: Write>(&self, out: &mut W) -> Result<(), SessionError> {
        if self.config.color_enabled {
            writeln!(out, "{}", TITLE.dark_cyan())?;
            writeln!(out, "{}", HINT.dim())?;
        } else {
            writeln!(out, "{TITLE}")?;
            writeln!(out, "{HINT}")?;
        }
        out.flush()?;
        Ok(())
    }

    fn edit_loop<E, W>(&mut self, events: &mut E, out: &mut W) -> Result<SessionOutcome, SessionError>
    where
        E: EventSource + ?Sized,
        W: Write,
    {
        self.draw(out)?;
        loop {
            let event = events.next_event().map_err(SessionError::Input)?;
            if let InputEvent::Resize(columns, _) = event {
                self.resize(columns, out)?;
                continue;
            }
            let result = handle_event(&event, &mut self.buffer);
            match result.outcome {
                Outcome::Submit => {
                    let report = std::mem::replace(&mut self.latest, ScoreReport::minimum());
                    return Ok(SessionOutcome::Submitted(report));
                }
                Outcome::Cancel => return Ok(SessionOutcome::Cancelled),
                Outcome::Continue if result.mutated => {
                    let scorer = self.scorer;
                    self.latest = self.buffer.with_str(|password| scorer.score(password))?;
                    self.scored += 1;
                    self.draw(out)?;
                }
                Outcome::Continue => {}
            }
        }
    }

    fn draw<W: Write>(&mut self, out: &mut W) -> Result<(), SessionError> {
        let lines = render(self.buffer.len(), &self.latest, &self.config);
        redraw(self.rendered_rows, &lines).flush(out)?;
        self.rendered_widths = lines.iter().map(|line| display_width(line)).collect();
        let rows = frame_rows(&self.rendered_widths, self.columns);
        debug!(target: "render", lines = lines.len(), rows, previous = self.rendered_rows, "frame");
        self.rendered_rows = rows;
        Ok(())
    }

    /// The terminal reflows the frame on screen to the new width, so its row
    /// count is re-measured before the redraw walks back over it.
    fn resize<W: Write>(&mut self, columns: u16, out: &mut W) -> Result<(), SessionError> {
        if columns == 0 || self.columns == Some(columns) {
            return Ok(());
        }
        self.columns = Some(columns);
        self.rendered_rows = frame_rows(&self.rendered_widths, self.columns);
        debug!(target: "render", columns, "resize");
        self.draw(out)
    }
}
