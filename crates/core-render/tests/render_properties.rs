use core_config::SessionConfig;
use core_render::{MASK_CHAR, filled_cells, render};
use core_score::{Feedback, ScoreReport};
use proptest::prelude::*;

fn report_with(score: u8, warning: Option<String>, suggestions: Vec<String>) -> ScoreReport {
    ScoreReport {
        score,
        feedback: Feedback {
            warning,
            suggestions,
        },
        ..ScoreReport::minimum()
    }
}

fn config_strategy() -> impl Strategy<Value = SessionConfig> {
    (any::<bool>(), any::<bool>(), any::<bool>(), 1u16..=80).prop_map(
        |(color_enabled, emoji_enabled, short_mode, bar_width)| SessionConfig {
            color_enabled,
            emoji_enabled,
            short_mode,
            bar_width,
        },
    )
}

fn mask_len(lines: &[String]) -> usize {
    let line = lines
        .iter()
        .find(|l| l.starts_with("Password: "))
        .expect("full frame has a password line");
    line.chars().filter(|c| *c == MASK_CHAR).count()
}

proptest! {
    #[test]
    fn render_is_pure(
        len in 0usize..200,
        score in 0u8..=4,
        cfg in config_strategy(),
        warning in proptest::option::of("[a-z ]{0,20}"),
    ) {
        let report = report_with(score, warning, vec!["Add another word or two.".into()]);
        prop_assert_eq!(render(len, &report, &cfg), render(len, &report, &cfg));
    }

    #[test]
    fn mask_tracks_length(len in 0usize..200, score in 0u8..=4) {
        let cfg = SessionConfig { color_enabled: false, ..SessionConfig::default() };
        let lines = render(len, &report_with(score, None, vec![]), &cfg);
        prop_assert_eq!(mask_len(&lines), len.max(1));
    }

    #[test]
    fn password_never_leaks(password in "[0-9]{3}[a-zA-Z]{3,20}") {
        // Suggestions and warnings come from the estimator, not the buffer.
        let report = report_with(2, Some("Avoid repeated words.".into()), vec![]);
        let cfg = SessionConfig { color_enabled: false, ..SessionConfig::default() };
        let lines = render(password.chars().count(), &report, &cfg);
        for line in &lines {
            prop_assert!(!line.contains(password.as_str()));
        }
    }

    #[test]
    fn bar_fill_is_monotonic(s1 in 0i8..=4, s2 in 0i8..=4, width in 1u16..=80) {
        prop_assume!(s1 < s2);
        prop_assert!(filled_cells(s1, width) <= filled_cells(s2, width));
    }

    #[test]
    fn short_mode_is_single_line(score in 0u8..=4, cfg in config_strategy()) {
        let cfg = SessionConfig { short_mode: true, ..cfg };
        let lines = render(10, &report_with(score, None, vec![]), &cfg);
        prop_assert_eq!(lines.len(), 1);
        prop_assert!(lines[0].ends_with(&score.to_string()));
    }
}
