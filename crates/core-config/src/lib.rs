//! Configuration loading and session option resolution.
//!
//! Parses `zpass.toml` (or an override path provided by the binary) for the
//! `[display]` table. Unknown fields are ignored so the file can evolve without
//! warnings; a file that fails to parse falls back to defaults and logs on the
//! `config` target.
//!
//! Resolution order for every display option, lowest to highest precedence:
//! built-in default, config file, environment (`NO_COLOR`, piped stdout; color
//! only), command-line flag. The result is an immutable [`SessionConfig`].

use anyhow::Result;
use serde::Deserialize;
use std::{fs, path::PathBuf};
use tracing::{info, warn};

pub const DEFAULT_BAR_WIDTH: u16 = 20;
pub const MAX_BAR_WIDTH: u16 = 80;
const FILE_NAME: &str = "zpass.toml";

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct DisplayConfig {
    #[serde(default = "DisplayConfig::default_color")]
    pub color: bool,
    #[serde(default)]
    pub emoji: bool,
    #[serde(default)]
    pub short: bool,
    #[serde(default = "DisplayConfig::default_bar_width")]
    pub bar_width: u16,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color: Self::default_color(),
            emoji: false,
            short: false,
            bar_width: Self::default_bar_width(),
        }
    }
}

impl DisplayConfig {
    const fn default_color() -> bool {
        true
    }
    const fn default_bar_width() -> u16 {
        DEFAULT_BAR_WIDTH
    }
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ConfigFile {
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Parsed file contents, or defaults when no usable file was found.
    pub file: ConfigFile,
    /// File the settings came from; `None` when running on defaults.
    pub source: Option<PathBuf>,
}

/// Flags resolved by the command line. `true` means the flag was passed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CliOverrides {
    pub no_color: bool,
    pub emoji: bool,
    pub short: bool,
}

/// Process environment facts consulted during resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolveContext {
    /// `NO_COLOR` is set to a non-empty value (<https://no-color.org>).
    pub no_color_env: bool,
    /// Output goes to a terminal; piped output is never colored.
    pub stdout_is_terminal: bool,
}

impl Default for ResolveContext {
    fn default() -> Self {
        Self {
            no_color_env: false,
            stdout_is_terminal: true,
        }
    }
}

impl ResolveContext {
    pub fn from_env() -> Self {
        use std::io::IsTerminal;
        Self {
            no_color_env: std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()),
            stdout_is_terminal: std::io::stdout().is_terminal(),
        }
    }
}

/// Options fixed for the lifetime of one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub color_enabled: bool,
    pub emoji_enabled: bool,
    pub short_mode: bool,
    pub bar_width: u16,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            color_enabled: true,
            emoji_enabled: false,
            short_mode: false,
            bar_width: DEFAULT_BAR_WIDTH,
        }
    }
}

/// Best-effort config path following platform conventions (XDG / AppData Roaming).
pub fn discover() -> PathBuf {
    let local = PathBuf::from(FILE_NAME);
    if local.exists() {
        return local;
    }
    if let Some(dir) = dirs::config_dir() {
        return dir.join("zpass-check").join(FILE_NAME);
    }
    PathBuf::from(FILE_NAME)
}

pub fn load_from(path: Option<PathBuf>) -> Result<Config> {
    let path = path.unwrap_or_else(discover);
    let Ok(content) = fs::read_to_string(&path) else {
        return Ok(Config::default());
    };
    match toml::from_str::<ConfigFile>(&content) {
        Ok(file) => {
            info!(target: "config", path = %path.display(), "config_loaded");
            Ok(Config {
                file,
                source: Some(path),
            })
        }
        Err(e) => {
            warn!(target: "config", path = %path.display(), error = %e, "config_parse_failed");
            Ok(Config::default())
        }
    }
}

impl Config {
    pub fn resolve(&self, cli: CliOverrides, ctx: ResolveContext) -> SessionConfig {
        let display = &self.file.display;
        let raw_width = display.bar_width;
        let bar_width = raw_width.clamp(1, MAX_BAR_WIDTH);
        if bar_width != raw_width {
            info!(
                target: "config",
                raw = raw_width,
                clamped = bar_width,
                max = MAX_BAR_WIDTH,
                "bar_width_clamped"
            );
        }
        SessionConfig {
            color_enabled: display.color
                && !ctx.no_color_env
                && ctx.stdout_is_terminal
                && !cli.no_color,
            emoji_enabled: display.emoji || cli.emoji,
            short_mode: display.short || cli.short,
            bar_width,
        }
    }
}
