//! Scoring adapter.
//!
//! Wraps the external strength estimator behind the [`Scorer`] trait so the
//! session loop only depends on the `ScoreReport` contract. The estimator is
//! stateless from the caller's perspective: every call produces a fresh report
//! and nothing about the input is retained.

mod report;
pub use report::{CrackTimesDisplay, Feedback, MAX_SCORE, ScoreReport};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScoreError {
    /// The estimator returned a score outside `0..=4`.
    #[error("estimator returned out-of-range score {0}")]
    OutOfRange(u8),
}

pub trait Scorer {
    /// Score `password`. Must accept the empty string and return the minimum report.
    fn score(&self, password: &str) -> Result<ScoreReport, ScoreError>;
}

/// `zxcvbn`-backed scorer.
#[derive(Debug, Default, Clone)]
pub struct ZxcvbnScorer {
    user_inputs: Vec<String>,
}

impl ZxcvbnScorer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Extra dictionary words (user name, site name) penalized by the estimator.
    pub fn with_user_inputs<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            user_inputs: inputs.into_iter().map(Into::into).collect(),
        }
    }
}

impl Scorer for ZxcvbnScorer {
    fn score(&self, password: &str) -> Result<ScoreReport, ScoreError> {
        if password.is_empty() {
            return Ok(ScoreReport::minimum());
        }
        let inputs: Vec<&str> = self.user_inputs.iter().map(String::as_str).collect();
        let entropy = zxcvbn::zxcvbn(password, &inputs);
        let score = entropy.score() as u8;
        if score > MAX_SCORE {
            return Err(ScoreError::OutOfRange(score));
        }
        let times = entropy.crack_times();
        let feedback = entropy
            .feedback()
            .map(|fb| Feedback {
                warning: fb.warning().map(|w| w.to_string()),
                suggestions: fb.suggestions().iter().map(|s| s.to_string()).collect(),
            })
            .unwrap_or_default();
        let report = ScoreReport {
            score,
            guesses: entropy.guesses(),
            crack_times_display: CrackTimesDisplay {
                online_throttling_100_per_hour: times
                    .online_throttling_100_per_hour()
                    .to_string(),
                online_no_throttling_10_per_second: times
                    .online_no_throttling_10_per_second()
                    .to_string(),
                offline_slow_hashing_1e4_per_second: times
                    .offline_slow_hashing_1e4_per_second()
                    .to_string(),
                offline_fast_hashing_1e10_per_second: times
                    .offline_fast_hashing_1e10_per_second()
                    .to_string(),
            },
            feedback,
        };
        tracing::trace!(target: "score", score = report.score, "scored");
        Ok(report)
    }
}
