//! zpass-check entrypoint.
use anyhow::Result;
use clap::Parser;
use core_config::{CliOverrides, ResolveContext, SessionConfig, load_from};
use core_events::{IGNORED_EVENTS, KEYPRESS_TOTAL, PASTE_CHARS, PASTE_EVENTS};
use core_input::CrosstermEventSource;
use core_score::ZxcvbnScorer;
use core_terminal::CrosstermBackend;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Once;
use std::sync::atomic::Ordering;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;

mod error;
mod oneshot;
mod session;

use error::{EXIT_CANCELLED, EXIT_OK, SessionError};
use oneshot::OutputFormat;
use session::{Session, SessionOutcome};

const LOG_ENV: &str = "ZPASS_LOG";
const LOG_FILE: &str = "zpass-check.log";

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(
    name = "zpass-check",
    version,
    about = "Live, non-echoing password strength meter"
)]
struct Args {
    /// Score this password once and exit instead of starting the live prompt.
    #[arg(short = 'p', long = "password")]
    password: Option<String>,
    /// Print the result as pretty JSON.
    #[arg(long)]
    json: bool,
    /// Prefix the score with a colored emoji indicator.
    #[arg(long)]
    emoji: bool,
    /// Disable colored output (also honored: `NO_COLOR`).
    #[arg(short = 'n', long = "no-color")]
    no_color: bool,
    /// Print the score only.
    #[arg(short = 's', long)]
    short: bool,
    /// Word the estimator should treat as known to an attacker (user name, site name).
    /// Repeatable.
    #[arg(short = 'u', long = "user-input", value_name = "WORD")]
    user_inputs: Vec<String>,
    /// Optional configuration file path (overrides discovery of `zpass.toml`).
    #[arg(long = "config")]
    config: Option<PathBuf>,
}

impl Args {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            no_color: self.no_color,
            emoji: self.emoji,
            short: self.short,
        }
    }

    fn scorer(&self) -> ZxcvbnScorer {
        ZxcvbnScorer::with_user_inputs(&self.user_inputs)
    }

    fn format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Report
        }
    }
}

struct AppStartup {
    log_guard: Option<WorkerGuard>,
}

impl AppStartup {
    fn new() -> Self {
        Self { log_guard: None }
    }

    fn run(&mut self, args: &Args) -> Result<SessionConfig> {
        self.configure_logging()?;
        Self::install_panic_hook();
        info!(target: "runtime", version = env!("CARGO_PKG_VERSION"), "startup");

        let config = load_from(args.config.clone())?;
        let session = config.resolve(args.overrides(), ResolveContext::from_env());
        let config_path = config.source.as_ref().map(|p| p.display().to_string());
        info!(
            target: "runtime.startup",
            oneshot = args.password.is_some(),
            json = args.json,
            config_override = args.config.is_some(),
            config_path = config_path.as_deref(),
            user_inputs = args.user_inputs.len(),
            color = session.color_enabled,
            emoji = session.emoji_enabled,
            short = session.short_mode,
            bar_width = session.bar_width,
            "bootstrap_complete"
        );
        Ok(session)
    }

    fn configure_logging(&mut self) -> Result<()> {
        let Ok(filter) = tracing_subscriber::EnvFilter::try_from_env(LOG_ENV) else {
            return Ok(());
        };
        let log_dir = Path::new(".");
        let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE);
        let (nb_writer, guard) = tracing_appender::non_blocking(file_appender);
        match tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(nb_writer)
            .try_init()
        {
            Ok(_) => {
                self.log_guard = Some(guard);
            }
            Err(_err) => {
                // Global tracing subscriber already installed; drop guard so writer shuts down.
            }
        }
        Ok(())
    }

    fn install_panic_hook() {
        static HOOK: Once = Once::new();
        HOOK.call_once(|| {
            let default_panic = std::panic::take_hook();
            std::panic::set_hook(Box::new(move |info| {
                core_terminal::restore_after_panic();
                tracing::error!(target: "runtime.panic", ?info, "panic");
                default_panic(info);
            }));
        });
    }
}

fn run_oneshot(password: &str, args: &Args, config: &SessionConfig) -> Result<u8, SessionError> {
    let scorer = args.scorer();
    let report = oneshot::score_once(&scorer, password)?;
    let mut out = std::io::stdout().lock();
    oneshot::print_report(
        &mut out,
        password.chars().count(),
        &report,
        config,
        args.format(),
    )?;
    Ok(EXIT_OK)
}

fn run_interactive(args: &Args, config: SessionConfig) -> Result<u8, SessionError> {
    if let Err(e) = ctrlc::set_handler(core_input::request_interrupt) {
        warn!(target: "runtime", error = %e, "signal_handler_unavailable");
    }
    let scorer = args.scorer();
    let mut events = CrosstermEventSource::new();
    let mut backend = CrosstermBackend::new();
    let mut out = std::io::stdout();

    let outcome = Session::new(&scorer, config).run(&mut events, &mut backend, &mut out)?;
    match outcome {
        SessionOutcome::Submitted(report) => {
            if args.json {
                oneshot::print_json(&mut out, &report)?;
                out.flush()?;
            }
            Ok(EXIT_OK)
        }
        SessionOutcome::Cancelled => Ok(EXIT_CANCELLED),
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    let mut app = AppStartup::new();
    let config = match app.run(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("zpass-check: {e:#}");
            return ExitCode::from(error::EXIT_FAILURE);
        }
    };

    let result = match args.password.as_deref() {
        Some(password) => run_oneshot(password, &args, &config),
        None => run_interactive(&args, config),
    };
    let code = match result {
        Ok(code) => code,
        Err(e) => {
            warn!(target: "runtime", error = e.label(), "run_failed");
            eprintln!("{e}");
            e.exit_code()
        }
    };
    info!(
        target: "runtime",
        code,
        keypresses = KEYPRESS_TOTAL.load(Ordering::Relaxed),
        pastes = PASTE_EVENTS.load(Ordering::Relaxed),
        pasted_chars = PASTE_CHARS.load(Ordering::Relaxed),
        ignored = IGNORED_EVENTS.load(Ordering::Relaxed),
        "shutdown"
    );
    drop(app.log_guard.take());
    ExitCode::from(code)
}
