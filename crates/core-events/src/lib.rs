//! Core event types shared by the input decoder, the key-action state machine
//! and the session loop.
//!
//! Events are already normalized away from crossterm: the session never sees a
//! backend type, so tests can script sessions from plain values.
//!
//! Logging policy: events may carry password material (`Char`, `Paste`). Any
//! instrumentation must record discriminants or lengths only, never payloads.

use std::sync::atomic::AtomicU64;

// -------------------------------------------------------------------------------------------------
// Telemetry
// -------------------------------------------------------------------------------------------------
// Relaxed atomic counters. They count events, never contents, and are inspected by tests and the
// shutdown log line.
// -------------------------------------------------------------------------------------------------
pub static KEYPRESS_TOTAL: AtomicU64 = AtomicU64::new(0);
pub static PASTE_EVENTS: AtomicU64 = AtomicU64::new(0);
pub static PASTE_CHARS: AtomicU64 = AtomicU64::new(0);
pub static IGNORED_EVENTS: AtomicU64 = AtomicU64::new(0);

/// Normalized input events consumed by the session loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Logical key press.
    Key(KeyPress),
    /// Complete bracketed paste. Never logged verbatim; callers log `chunk_len` only.
    Paste(String),
    /// Terminal resize (columns, rows). The session re-measures wrapped rows on a width change.
    Resize(u16, u16),
    /// Interrupt delivered out of band (SIGINT / SIGTERM) rather than as a key chord.
    Interrupt,
    /// Anything the decoder does not model: focus, mouse, media keys, unknown sequences.
    Unsupported,
}

impl InputEvent {
    /// Stable label for structured logs. Never includes the payload.
    pub fn kind_label(&self) -> &'static str {
        match self {
            InputEvent::Key(k) => match k.token {
                KeyToken::Char(_) => "key_char",
                KeyToken::Named(_) => "key_named",
            },
            InputEvent::Paste(_) => "paste",
            InputEvent::Resize(..) => "resize",
            InputEvent::Interrupt => "interrupt",
            InputEvent::Unsupported => "unsupported",
        }
    }
}

/// A key press with its modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyPress {
    pub token: KeyToken,
    pub mods: ModMask,
}

impl KeyPress {
    pub const fn new(token: KeyToken, mods: ModMask) -> Self {
        Self { token, mods }
    }

    /// Unmodified printable character.
    pub const fn char(c: char) -> Self {
        Self::new(KeyToken::Char(c), ModMask::empty())
    }

    pub const fn named(key: NamedKey) -> Self {
        Self::new(KeyToken::Named(key), ModMask::empty())
    }

    /// `Ctrl+<c>` chord.
    pub const fn ctrl(c: char) -> Self {
        Self::new(KeyToken::Char(c), ModMask::CTRL)
    }
}

bitflags::bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ModMask: u16 { const CTRL=1; const ALT=2; const SHIFT=4; const META=8; const SUPER=16; }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedKey {
    Enter,
    Esc,
    Backspace,
    Delete,
    Tab,
    F(u8),
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    Insert,
}

/// Logical key identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyToken {
    Char(char),
    Named(NamedKey),
}

#[inline]
pub fn log_paste_chunk(chunk: &str) {
    tracing::trace!(target: "input.paste", chunk_len = chunk.chars().count(), "paste_chunk");
}
