//! Strength report rendering + live-region redraw.
//!
//! Two layers:
//! - `presentation` / `frame`: pure functions from (mask length, report,
//!   config) to output lines. No I/O, no retained state; identical inputs give
//!   identical lines.
//! - `writer`: terminal command batching for the live region under the banner.
//!   Each redraw moves back over the previously drawn frame, clears to the end
//!   of the screen, prints the new frame and flushes once.
//! - `measure`: display width and wrapped-row counts, so the rewind covers
//!   every terminal row a long line wrapped onto.
//!
//! Invariants:
//! - The mask is `*` repeated `max(1, len)` times; password characters never
//!   reach any rendered line.
//! - Lines never contain `\n`; the writer terminates them with CRLF because raw
//!   mode disables output newline translation.
//! - Short mode output is a single uncolored line.

pub mod frame;
pub mod measure;
pub mod presentation;
pub mod writer;

pub use frame::{LOOKS_GOOD, MASK_CHAR, mask, render};
pub use measure::{display_width, frame_rows, wrapped_rows};
pub use presentation::{EMOJIS, PresentationTokens, bar, filled_cells, score_to_presentation};
pub use writer::{Writer, redraw};
