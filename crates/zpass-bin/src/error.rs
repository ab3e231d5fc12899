use core_score::ScoreError;
use thiserror::Error;

pub const EXIT_OK: u8 = 0;
pub const EXIT_NOT_INTERACTIVE: u8 = 1;
pub const EXIT_FAILURE: u8 = 2;
pub const EXIT_CANCELLED: u8 = 130;

/// Ways a run can fail. Messages are single-line and never carry buffer content.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Interactive mode requires a TTY. Use -p/--password for non-interactive.")]
    NotInteractive,
    #[error("terminal mode change failed: {0:#}")]
    Terminal(anyhow::Error),
    #[error("terminal input failed: {0:#}")]
    Input(anyhow::Error),
    #[error("terminal output failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("strength estimation failed: {0}")]
    Scoring(#[from] ScoreError),
}

impl SessionError {
    pub fn exit_code(&self) -> u8 {
        match self {
            SessionError::NotInteractive => EXIT_NOT_INTERACTIVE,
            _ => EXIT_FAILURE,
        }
    }

    /// Stable label for structured logs.
    pub fn label(&self) -> &'static str {
        match self {
            SessionError::NotInteractive => "not_interactive",
            SessionError::Terminal(_) => "terminal",
            SessionError::Input(_) => "input",
            SessionError::Io(_) => "io",
            SessionError::Scoring(_) => "scoring",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes() {
        assert_eq!(SessionError::NotInteractive.exit_code(), 1);
        let io = SessionError::from(std::io::Error::other("gone"));
        assert_eq!(io.exit_code(), EXIT_FAILURE);
        assert_eq!(io.label(), "io");
    }

    #[test]
    fn messages_are_single_line() {
        let errs = [
            SessionError::NotInteractive,
            SessionError::Terminal(anyhow::anyhow!("enable failed")),
            SessionError::Input(anyhow::anyhow!("read").context("poll")),
            SessionError::Scoring(ScoreError::OutOfRange(9)),
        ];
        for e in errs {
            assert!(!e.to_string().contains('\n'), "{e}");
        }
    }
}
