use serde::Serialize;

pub const MAX_SCORE: u8 = 4;

/// Immutable result of one scoring call.
///
/// Serializes to the JSON shape printed by `--json`:
/// `{score, guesses, crack_times_display, feedback}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreReport {
    /// 0 (weakest) ..= 4 (strongest).
    pub score: u8,
    pub guesses: u64,
    pub crack_times_display: CrackTimesDisplay,
    pub feedback: Feedback,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrackTimesDisplay {
    pub online_throttling_100_per_hour: String,
    pub online_no_throttling_10_per_second: String,
    pub offline_slow_hashing_1e4_per_second: String,
    pub offline_fast_hashing_1e10_per_second: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Feedback {
    pub warning: Option<String>,
    pub suggestions: Vec<String>,
}

impl Feedback {
    /// No warning and no suggestions: the renderer prints the "looks good" line.
    pub fn is_empty(&self) -> bool {
        self.warning.as_deref().is_none_or(str::is_empty) && self.suggestions.is_empty()
    }
}

impl ScoreReport {
    /// Report for the empty password. Also used for the first frame of a session,
    /// before any keystroke, so no estimator call is needed to draw it.
    pub fn minimum() -> Self {
        const INSTANT: &str = "less than a second";
        Self {
            score: 0,
            guesses: 0,
            crack_times_display: CrackTimesDisplay {
                online_throttling_100_per_hour: INSTANT.to_string(),
                online_no_throttling_10_per_second: INSTANT.to_string(),
                offline_slow_hashing_1e4_per_second: INSTANT.to_string(),
                offline_fast_hashing_1e10_per_second: INSTANT.to_string(),
            },
            feedback: Feedback {
                warning: None,
                suggestions: vec![
                    "Use a few words, avoid common phrases.".to_string(),
                    "No need for symbols, digits, or uppercase letters.".to_string(),
                ],
            },
        }
    }

    /// The crack-time figure shown in the live report (offline, slow hash, 1e4/s).
    pub fn estimated_crack_time_display(&self) -> &str {
        &self.crack_times_display.offline_slow_hashing_1e4_per_second
    }
}
