//! Terminal backend abstraction and crossterm implementation.
//!
//! Raw mode is process-wide state. It is only ever reachable through a
//! [`TerminalGuard`], which releases it on drop, so every exit path of the
//! session (normal return, `?` propagation, unwinding) restores the terminal.
//! A second acquisition while one is held is rejected rather than nested.

use anyhow::{Result, bail};
use crossterm::{
    cursor::{Hide, Show},
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, size},
};
use std::io::{IsTerminal, stdin, stdout};
use std::sync::atomic::{AtomicBool, Ordering};

static RAW_MODE_HELD: AtomicBool = AtomicBool::new(false);

pub trait TerminalBackend {
    /// Whether input comes from an interactive terminal.
    fn is_interactive(&self) -> bool;
    /// Terminal width in columns, if it can be queried.
    fn columns(&self) -> Option<u16> {
        None
    }
    fn enter(&mut self) -> Result<()>;
    fn leave(&mut self) -> Result<()>;
}

pub struct CrosstermBackend {
    entered: bool,
}

/// RAII guard ensuring terminal state restoration even if caller early-returns or panics.
pub struct TerminalGuard<'a, B: TerminalBackend + ?Sized> {
    backend: &'a mut B,
    active: bool,
}

impl Default for CrosstermBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl CrosstermBackend {
    pub fn new() -> Self {
        Self { entered: false }
    }
}

/// Enter and return a guard that will leave on drop.
pub fn enter_guard<B: TerminalBackend + ?Sized>(backend: &mut B) -> Result<TerminalGuard<'_, B>> {
    backend.enter()?;
    tracing::debug!(target: "terminal", "raw_mode_entered");
    Ok(TerminalGuard {
        backend,
        active: true,
    })
}

impl<'a, B: TerminalBackend + ?Sized> TerminalGuard<'a, B> {
    /// Leave now and surface the error instead of swallowing it in `Drop`.
    pub fn release(mut self) -> Result<()> {
        self.active = false;
        let res = self.backend.leave();
        tracing::debug!(target: "terminal", ok = res.is_ok(), "raw_mode_left");
        res
    }
}

impl<'a, B: TerminalBackend + ?Sized> Drop for TerminalGuard<'a, B> {
    fn drop(&mut self) {
        if self.active {
            let res = self.backend.leave();
            tracing::debug!(target: "terminal", ok = res.is_ok(), "raw_mode_left_on_drop");
        }
    }
}

impl TerminalBackend for CrosstermBackend {
    fn is_interactive(&self) -> bool {
        stdin().is_terminal()
    }

    fn columns(&self) -> Option<u16> {
        size().ok().map(|(cols, _)| cols).filter(|cols| *cols > 0)
    }

    fn enter(&mut self) -> Result<()> {
        if self.entered {
            return Ok(());
        }
        if RAW_MODE_HELD.swap(true, Ordering::SeqCst) {
            bail!("raw mode already held by another session");
        }
        if let Err(e) = enable_raw_mode() {
            RAW_MODE_HELD.store(false, Ordering::SeqCst);
            return Err(e.into());
        }
        self.entered = true;
        execute!(stdout(), EnableBracketedPaste, Hide)?;
        Ok(())
    }

    fn leave(&mut self) -> Result<()> {
        if !self.entered {
            return Ok(());
        }
        self.entered = false;
        RAW_MODE_HELD.store(false, Ordering::SeqCst);
        // Raw mode goes first so a failing stdout cannot leave the tty unechoed.
        let raw = disable_raw_mode();
        let screen = execute!(stdout(), DisableBracketedPaste, Show);
        raw?;
        screen?;
        Ok(())
    }
}

impl Drop for CrosstermBackend {
    fn drop(&mut self) {
        let _ = self.leave();
    }
}

/// Best-effort restoration for panic hooks: no guard is reachable there.
pub fn restore_after_panic() {
    if RAW_MODE_HELD.swap(false, Ordering::SeqCst) {
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), DisableBracketedPaste, Show);
    }
}
