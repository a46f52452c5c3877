//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.krishi/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::replies::{CannedReply, default_replies};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct KrishiConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub replies: Vec<CannedReply>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub login_delay_ms: Option<u64>,
    pub reply_delay_ms: Option<u64>,
    pub notification_ttl_ms: Option<u64>,
    pub reply_seed: Option<u64>,
    pub log_level: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOGIN_DELAY_MS: u64 = 2000;
pub const DEFAULT_REPLY_DELAY_MS: u64 = 2000;
pub const DEFAULT_NOTIFICATION_TTL_MS: u64 = 3000;
pub const DEFAULT_LOG_LEVEL: &str = "debug";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub login_delay: Duration,
    pub reply_delay: Duration,
    pub notification_ttl: Duration,
    pub reply_seed: Option<u64>,
    pub log_level: String,
    pub replies: Vec<CannedReply>,
    /// Environment values that failed to parse and were skipped.
    pub ignored_env: Vec<String>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        resolve(&KrishiConfig::default(), &CliOverrides::default())
    }
}

/// Values supplied on the command line (None = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub login_delay_ms: Option<u64>,
    pub reply_delay_ms: Option<u64>,
    pub reply_seed: Option<u64>,
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

/// Returns the path to `~/.krishi/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".krishi").join("config.toml"))
}

/// Where the loaded config came from. The logger is not running yet when
/// config loads, so `main` reports this once it is.
#[derive(Debug)]
pub enum ConfigSource {
    File(PathBuf),
    /// No file existed; a commented-out default was written here.
    Generated(PathBuf),
    /// No file existed and writing the default failed.
    GenerateFailed { path: PathBuf, error: std::io::Error },
    NoHomeDir,
}

impl ConfigSource {
    pub fn log(&self) {
        match self {
            ConfigSource::File(path) => info!("Loaded config from {}", path.display()),
            ConfigSource::Generated(path) => {
                info!("No config file found, generated default at {}", path.display())
            }
            ConfigSource::GenerateFailed { path, error } => {
                warn!("Failed to write default config to {}: {}", path.display(), error)
            }
            ConfigSource::NoHomeDir => {
                warn!("Could not determine home directory, using default config")
            }
        }
    }
}

#[derive(Debug)]
pub struct LoadedConfig {
    pub config: KrishiConfig,
    pub source: ConfigSource,
}

/// Load config from an explicit path, or `~/.krishi/config.toml`.
///
/// If the default file doesn't exist, generates a commented-out default and
/// returns `KrishiConfig::default()`. A missing explicit path is an error.
pub fn load_config(explicit: Option<&Path>) -> Result<LoadedConfig, ConfigError> {
    if let Some(path) = explicit {
        return read_config(path);
    }

    match config_path() {
        Some(path) => load_or_generate(&path),
        None => Ok(LoadedConfig {
            config: KrishiConfig::default(),
            source: ConfigSource::NoHomeDir,
        }),
    }
}

fn load_or_generate(path: &Path) -> Result<LoadedConfig, ConfigError> {
    if path.exists() {
        return read_config(path);
    }
    let source = match generate_default_config(path) {
        Ok(()) => ConfigSource::Generated(path.to_path_buf()),
        Err(error) => ConfigSource::GenerateFailed {
            path: path.to_path_buf(),
            error,
        },
    };
    Ok(LoadedConfig {
        config: KrishiConfig::default(),
        source,
    })
}

fn read_config(path: &Path) -> Result<LoadedConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config = parse_config(&contents)?;
    Ok(LoadedConfig {
        config,
        source: ConfigSource::File(path.to_path_buf()),
    })
}

pub fn parse_config(contents: &str) -> Result<KrishiConfig, ConfigError> {
    toml::from_str(contents).map_err(ConfigError::Parse)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) -> std::io::Result<()> {
    let default_content = r#"# Krishi Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# login_delay_ms = 2000        # Simulated sign-in latency
# reply_delay_ms = 2000        # Simulated assistant "thinking" time
# notification_ttl_ms = 3000   # How long notifications stay in the title bar
# reply_seed = 42              # Fix the canned reply sequence
# log_level = "debug"          # "error", "warn", "info", "debug", "trace"

# Replace the built-in canned replies:
# [[replies]]
# text = "Spray neem oil in the evening."
# text_ml = "വൈകുന്നേരം വേപ്പെണ്ണ തളിക്കുക."
"#;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, default_content)
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &KrishiConfig, cli: &CliOverrides) -> ResolvedConfig {
    let mut ignored_env = Vec::new();
    let mut env_u64 = |name: &str| parse_env_u64(name, std::env::var(name).ok(), &mut ignored_env);

    let login_delay_ms = cli
        .login_delay_ms
        .or_else(|| env_u64("KRISHI_LOGIN_DELAY_MS"))
        .or(config.general.login_delay_ms)
        .unwrap_or(DEFAULT_LOGIN_DELAY_MS);

    let reply_delay_ms = cli
        .reply_delay_ms
        .or_else(|| env_u64("KRISHI_REPLY_DELAY_MS"))
        .or(config.general.reply_delay_ms)
        .unwrap_or(DEFAULT_REPLY_DELAY_MS);

    let reply_seed = cli
        .reply_seed
        .or_else(|| env_u64("KRISHI_REPLY_SEED"))
        .or(config.general.reply_seed);

    let log_level = std::env::var("KRISHI_LOG_LEVEL")
        .ok()
        .or_else(|| config.general.log_level.clone())
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

    // An empty [[replies]] list means "not configured", not "reply with nothing"
    let replies = if config.replies.is_empty() {
        default_replies()
    } else {
        config.replies.clone()
    };

    ResolvedConfig {
        login_delay: Duration::from_millis(login_delay_ms),
        reply_delay: Duration::from_millis(reply_delay_ms),
        notification_ttl: Duration::from_millis(
            config
                .general
                .notification_ttl_ms
                .unwrap_or(DEFAULT_NOTIFICATION_TTL_MS),
        ),
        reply_seed,
        log_level,
        replies,
        ignored_env,
    }
}

fn parse_env_u64(name: &str, raw: Option<String>, ignored: &mut Vec<String>) -> Option<u64> {
    let raw = raw?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(e) => {
            ignored.push(format!("{}={:?}: {}", name, raw, e));
            None
        }
    }
}

/// Map a config log level string onto a `log::LevelFilter`, defaulting to Debug.
pub fn level_filter(level: &str) -> log::LevelFilter {
    level.parse().unwrap_or(log::LevelFilter::Debug)
}
