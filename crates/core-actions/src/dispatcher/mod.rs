//! Dispatcher applying `Action` to the password buffer.
//!
//! Every action yields exactly one [`Outcome`]. `DispatchResult::mutated`
//! tells the session whether a re-score/re-render is warranted; ignored events
//! and backspace on an empty buffer leave it `false`.
//!
//! Multi-character actions (`InsertText`) are drained completely here, so the
//! caller renders once per event rather than once per character.

use crate::{Action, Outcome};
use core_events::{IGNORED_EVENTS, InputEvent};
use core_state::PasswordBuffer;
use std::sync::atomic::Ordering;

/// Result of dispatching a single `Action`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchResult {
    pub outcome: Outcome,
    pub mutated: bool,
}

impl DispatchResult {
    pub fn edited() -> Self {
        Self {
            outcome: Outcome::Continue,
            mutated: true,
        }
    }
    pub fn unchanged() -> Self {
        Self {
            outcome: Outcome::Continue,
            mutated: false,
        }
    }
    pub fn submit() -> Self {
        Self {
            outcome: Outcome::Submit,
            mutated: false,
        }
    }
    pub fn cancel() -> Self {
        Self {
            outcome: Outcome::Cancel,
            mutated: false,
        }
    }
}

pub fn dispatch(action: &Action, buffer: &mut PasswordBuffer) -> DispatchResult {
    let result = match action {
        Action::Insert(c) => {
            buffer.push(*c);
            DispatchResult::edited()
        }
        Action::InsertText(text) => {
            let mut appended = 0usize;
            for c in text.chars() {
                buffer.push(c);
                appended += 1;
            }
            if appended > 0 {
                DispatchResult::edited()
            } else {
                DispatchResult::unchanged()
            }
        }
        Action::DeleteLeft => {
            if buffer.pop() {
                DispatchResult::edited()
            } else {
                DispatchResult::unchanged()
            }
        }
        Action::Submit => DispatchResult::submit(),
        Action::Cancel => DispatchResult::cancel(),
        Action::EndOfInput => {
            if buffer.is_empty() {
                DispatchResult::cancel()
            } else {
                DispatchResult::unchanged()
            }
        }
        Action::Ignore => {
            IGNORED_EVENTS.fetch_add(1, Ordering::Relaxed);
            DispatchResult::unchanged()
        }
    };
    // Per-keystroke events would expose typing cadence; only terminal outcomes are logged.
    if result.outcome != Outcome::Continue {
        tracing::debug!(
            target: "actions.dispatch",
            op = action.label(),
            outcome = ?result.outcome,
            "terminal_outcome"
        );
    }
    result
}

/// Translate and apply one input event.
pub fn handle_event(event: &InputEvent, buffer: &mut PasswordBuffer) -> DispatchResult {
    dispatch(&crate::translate(event), buffer)
}
