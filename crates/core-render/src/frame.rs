//! Report frame assembly.

use crate::presentation::{PresentationTokens, bar, score_to_presentation};
use core_config::SessionConfig;
use core_score::{MAX_SCORE, ScoreReport};
use crossterm::style::{Color, Stylize};

pub const MASK_CHAR: char = '*';
pub const LOOKS_GOOD: &str = "No suggestions — looks good.";

const GRAY: Color = Color::DarkGrey;
const WARNING: Color = Color::DarkYellow;

/// Filler glyph repeated `max(1, len)` times.
pub fn mask(len: usize) -> String {
    std::iter::repeat_n(MASK_CHAR, len.max(1)).collect()
}

/// Render the report for a buffer of `masked_len` characters.
pub fn render(masked_len: usize, report: &ScoreReport, config: &SessionConfig) -> Vec<String> {
    let score = i8::try_from(report.score).unwrap_or(i8::MAX);
    let tokens = score_to_presentation(score, config);

    if config.short_mode {
        return vec![format!("{}{}", tokens.emoji_prefix(), report.score)];
    }

    let gray = |text: &str| paint(text, config.color_enabled.then_some(GRAY));
    let mut lines = Vec::with_capacity(8 + report.feedback.suggestions.len());
    lines.push(String::new());
    lines.push(format!("Password: {}", gray(&mask(masked_len))));
    lines.push(score_line(report.score, score, config.bar_width, &tokens));
    lines.push(format!(
        "Estimated crack time (offline slow hash): {}",
        report.estimated_crack_time_display()
    ));

    let feedback = &report.feedback;
    if feedback.is_empty() {
        lines.push(gray(LOOKS_GOOD));
    } else {
        if let Some(warning) = feedback.warning.as_deref().filter(|w| !w.is_empty()) {
            let text = format!("Warning: {warning}");
            lines.push(paint(&text, config.color_enabled.then_some(WARNING)));
        }
        if !feedback.suggestions.is_empty() {
            lines.push(gray("Suggestions:"));
            for suggestion in &feedback.suggestions {
                lines.push(gray(&format!(" - {suggestion}")));
            }
        }
    }
    lines.push(String::new());
    lines
}

fn score_line(raw: u8, score: i8, width: u16, tokens: &PresentationTokens) -> String {
    let text = format!(
        "{}Score: {raw} / {MAX_SCORE} [{}]",
        tokens.emoji_prefix(),
        bar(score, width)
    );
    paint(&text, tokens.color)
}

fn paint(text: &str, color: Option<Color>) -> String {
    match color {
        Some(c) => text.with(c).to_string(),
        None => text.to_string(),
    }
}
