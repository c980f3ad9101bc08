//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.pagestack/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use simplelog::LevelFilter;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::core::navigator::DEFAULT_HISTORY_LIMIT;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PagestackConfig {
    #[serde(default)]
    pub navigator: NavigatorConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct NavigatorConfig {
    pub history_limit: Option<usize>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DisplayConfig {
    pub target_fps: Option<u32>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub file: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_TARGET_FPS: u32 = 60;
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;
pub const DEFAULT_LOG_FILE: &str = "pagestack.log";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub history_limit: usize,
    pub target_fps: u32,
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            history_limit: DEFAULT_HISTORY_LIMIT,
            target_fps: DEFAULT_TARGET_FPS,
            log_level: DEFAULT_LOG_LEVEL,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

/// Values given on the command line. `None` means not specified.
#[derive(Debug, Default, Clone, Copy)]
pub struct CliOverrides {
    pub history_limit: Option<usize>,
    pub target_fps: Option<u32>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.pagestack/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".pagestack").join("config.toml"))
}

/// Load config from `~/.pagestack/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `PagestackConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<PagestackConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(PagestackConfig::default());
        }
    };
    load_config_from(&path)
}

/// Load config from an explicit path, generating a default file if missing.
pub fn load_config_from(path: &Path) -> Result<PagestackConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(PagestackConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config = parse_config(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<PagestackConfig, ConfigError> {
    toml::from_str(contents).map_err(ConfigError::Parse)
}

const DEFAULT_CONFIG_CONTENT: &str = r#"# pagestack Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [navigator]
# history_limit = 10       # Pages kept for going back. 0 keeps only the active page.

# [display]
# target_fps = 60          # Or set PAGESTACK_TARGET_FPS, or pass --fps

# [logging]
# level = "debug"          # "off", "error", "warn", "info", "debug", "trace"
# file = "pagestack.log"
"#;

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, DEFAULT_CONFIG_CONTENT) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &PagestackConfig, cli: CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Same as [`resolve`] with an injectable environment lookup.
pub fn resolve_with_env(
    config: &PagestackConfig,
    cli: CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // History limit: CLI → env → config → default
    let history_limit = cli
        .history_limit
        .or_else(|| parse_env(&env, "PAGESTACK_HISTORY_LIMIT"))
        .or(config.navigator.history_limit)
        .unwrap_or(DEFAULT_HISTORY_LIMIT);

    // Target FPS: CLI → env → config → default. Zero would mean no pacing at all.
    let target_fps = cli
        .target_fps
        .or_else(|| parse_env(&env, "PAGESTACK_TARGET_FPS"))
        .or(config.display.target_fps)
        .filter(|fps| {
            if *fps == 0 {
                warn!("target_fps must be positive, using {}", DEFAULT_TARGET_FPS);
            }
            *fps > 0
        })
        .unwrap_or(DEFAULT_TARGET_FPS);

    // Log level: env → config → default
    let log_level = parse_env(&env, "PAGESTACK_LOG_LEVEL")
        .or_else(|| {
            config
                .logging
                .level
                .as_deref()
                .and_then(|level| parse_value("logging.level", level))
        })
        .unwrap_or(DEFAULT_LOG_LEVEL);

    // Log file: env → config → default
    let log_file = env("PAGESTACK_LOG_FILE")
        .or_else(|| config.logging.file.clone())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

    ResolvedConfig {
        history_limit,
        target_fps,
        log_level,
        log_file,
    }
}

fn parse_env<T: FromStr>(env: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    parse_value(key, &env(key)?)
}

fn parse_value<T: FromStr>(name: &str, raw: &str) -> Option<T> {
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring invalid value for {}: {:?}", name, raw);
            None
        }
    }
}
