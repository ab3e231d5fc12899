//! Score -> presentation tokens.
//!
//! `score_to_presentation` is total over `i8`: the palette is indexed by
//! `clamp(score + 1, 0, 5)` and the emoji table by `clamp(score, 0, 4)`, so no
//! input can index out of range. Score `-1` (no estimate yet) maps to the
//! uncolored palette slot.

use core_config::SessionConfig;
use crossterm::style::Color;

const PALETTE: [Option<Color>; 6] = [
    None,
    Some(Color::DarkRed),
    Some(Color::Red),
    Some(Color::DarkYellow),
    Some(Color::DarkGreen),
    Some(Color::Green),
];

pub const EMOJIS: [&str; 5] = ["🔴", "🟠", "🟡", "🟢", "🔵"];

const FILLED: char = '█';
const EMPTY: char = '░';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresentationTokens {
    /// Foreground for the score line; `None` means print as-is.
    pub color: Option<Color>,
    /// Emoji glyph prefixed to the score line.
    pub emoji: Option<&'static str>,
}

impl PresentationTokens {
    /// `"<emoji> "` or the empty string.
    pub fn emoji_prefix(&self) -> String {
        self.emoji.map(|e| format!("{e} ")).unwrap_or_default()
    }
}

pub fn score_to_presentation(score: i8, config: &SessionConfig) -> PresentationTokens {
    let color = if config.color_enabled {
        PALETTE[(i16::from(score) + 1).clamp(0, 5) as usize]
    } else {
        None
    };
    let emoji = config
        .emoji_enabled
        .then(|| EMOJIS[score.clamp(0, 4) as usize]);
    PresentationTokens { color, emoji }
}

/// Number of filled cells for `score` on a bar of `width` cells:
/// `round((score + 1) / 5 * width)`, clamped to `0..=width`.
pub fn filled_cells(score: i8, width: u16) -> u16 {
    let fraction = (f64::from(score) + 1.0) / 5.0;
    let cells = (fraction * f64::from(width)).round();
    cells.clamp(0.0, f64::from(width)) as u16
}

pub fn bar(score: i8, width: u16) -> String {
    let filled = usize::from(filled_cells(score, width));
    let empty = usize::from(width) - filled;
    let mut out = String::with_capacity((filled + empty) * FILLED.len_utf8());
    out.extend(std::iter::repeat_n(FILLED, filled));
    out.extend(std::iter::repeat_n(EMPTY, empty));
    out
}
