//! Blocking input source backed by crossterm.
//!
//! The session loop pulls one `InputEvent` at a time through the
//! [`EventSource`] trait. The only production implementation is
//! [`CrosstermEventSource`]; tests substitute scripted sources.
//!
//! Interrupt delivery: a signal handler installed by the binary calls
//! [`request_interrupt`]. The crossterm source polls in short slices and
//! surfaces the request as `InputEvent::Interrupt`, so the session exits through
//! its normal Cancel path and terminal restoration still runs.

mod key_token;
pub use key_token::translate_event;

use anyhow::Result;
use core_events::{InputEvent, KEYPRESS_TOTAL, PASTE_CHARS, PASTE_EVENTS, log_paste_chunk};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tracing::trace;

const POLL_SLICE: Duration = Duration::from_millis(100);

static INTERRUPT_REQUESTED: AtomicBool = AtomicBool::new(false);

/// Record an out-of-band interrupt. Async-signal safe (single atomic store).
pub fn request_interrupt() {
    INTERRUPT_REQUESTED.store(true, Ordering::SeqCst);
}

/// Consume a pending interrupt request, if any.
pub fn take_interrupt() -> bool {
    INTERRUPT_REQUESTED.swap(false, Ordering::SeqCst)
}

/// Source of normalized input events. `next_event` blocks until one is available.
pub trait EventSource {
    fn next_event(&mut self) -> Result<InputEvent>;
}

/// Reads the process terminal through crossterm. Requires raw mode to be active
/// for keystrokes to arrive unbuffered.
#[derive(Debug, Default)]
pub struct CrosstermEventSource;

impl CrosstermEventSource {
    pub fn new() -> Self {
        Self
    }
}

impl EventSource for CrosstermEventSource {
    fn next_event(&mut self) -> Result<InputEvent> {
        loop {
            if take_interrupt() {
                trace!(target: "input.event", "interrupt_signal");
                return Ok(InputEvent::Interrupt);
            }
            if !crossterm::event::poll(POLL_SLICE)? {
                continue;
            }
            let Some(event) = translate_event(crossterm::event::read()?) else {
                continue;
            };
            record(&event);
            return Ok(event);
        }
    }
}

fn record(event: &InputEvent) {
    match event {
        InputEvent::Key(_) => {
            KEYPRESS_TOTAL.fetch_add(1, Ordering::Relaxed);
        }
        InputEvent::Paste(text) => {
            PASTE_EVENTS.fetch_add(1, Ordering::Relaxed);
            PASTE_CHARS.fetch_add(text.chars().count() as u64, Ordering::Relaxed);
            log_paste_chunk(text);
        }
        _ => {}
    }
}
