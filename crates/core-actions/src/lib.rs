//! Input state machine for the live password prompt.
//!
//! Two stages, kept separate so each is testable without the other:
//! * `key_translator` maps a normalized `InputEvent` to an [`Action`]
//!   (the key-decoding table lives there and nowhere else).
//! * `dispatcher` applies an `Action` to the `PasswordBuffer` and reports an
//!   [`Outcome`] plus whether the buffer changed.
//!
//! The machine has a single state (editing); Submit and Cancel are terminal
//! outcomes signalled to the session loop, not states held here.

pub mod dispatcher;
pub mod key_translator;

pub use dispatcher::{DispatchResult, dispatch, handle_event};
pub use key_translator::translate;

/// Edits and control decisions the prompt understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Append one printable character.
    Insert(char),
    /// Append every printable character of a multi-character event, in order.
    InsertText(String),
    /// Remove the last character (no-op on an empty buffer).
    DeleteLeft,
    Submit,
    Cancel,
    /// `Ctrl+D`: cancels only when the buffer is empty.
    EndOfInput,
    /// Unsupported key or sequence; buffer untouched.
    Ignore,
}

impl Action {
    /// Stable label for structured logs. Never includes the payload.
    pub fn label(&self) -> &'static str {
        match self {
            Action::Insert(_) => "insert",
            Action::InsertText(_) => "insert_text",
            Action::DeleteLeft => "delete_left",
            Action::Submit => "submit",
            Action::Cancel => "cancel",
            Action::EndOfInput => "end_of_input",
            Action::Ignore => "ignore",
        }
    }
}

/// Control decision emitted for every event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Submit,
    Cancel,
}
