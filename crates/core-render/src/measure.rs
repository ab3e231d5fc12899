//! Terminal row accounting for rendered lines.
//!
//! The live region is rewound by terminal rows, not by logical lines: a line
//! wider than the terminal wraps onto extra rows, and every one of them has to
//! be walked back over on the next redraw or the frame creeps down the screen.
//!
//! Invariants:
//! - Escape sequences (CSI color codes emitted by the frame) occupy no columns.
//! - A blank line still occupies one row.
//! - A line exactly `columns` wide takes one row: the cursor wraps lazily and
//!   the CRLF that follows lands on the next row.

use unicode_width::UnicodeWidthChar;

/// Display columns of `line`, ignoring escape sequences.
pub fn display_width(line: &str) -> usize {
    let mut width = 0usize;
    let mut chars = line.chars();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            skip_escape(&mut chars);
            continue;
        }
        width += c.width().unwrap_or(0);
    }
    width
}

// CSI is `ESC [ params final` with a final byte in `@..=~`; any other escape is two chars.
fn skip_escape(chars: &mut std::str::Chars<'_>) {
    if chars.next() != Some('[') {
        return;
    }
    for c in chars.by_ref() {
        if ('@'..='~').contains(&c) {
            break;
        }
    }
}

/// Rows a line of `width` columns takes on a terminal `columns` wide.
/// `None` (width unknown) counts one row per line.
pub fn wrapped_rows(width: usize, columns: Option<u16>) -> usize {
    match columns {
        Some(cols) if cols > 0 => width.div_ceil(usize::from(cols)).max(1),
        _ => 1,
    }
}

/// Total rows for a frame whose lines measure `widths`.
pub fn frame_rows(widths: &[usize], columns: Option<u16>) -> usize {
    widths.iter().map(|w| wrapped_rows(*w, columns)).sum()
}
