//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.sahaayak/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::language::Language;
use crate::core::state::DEFAULT_REPLY_DELAY;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SahaayakConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub voice: VoiceConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub language: Option<Language>,
    pub reply_delay_ms: Option<u64>,
    pub seed: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct VoiceConfig {
    pub device: Option<VoiceDevice>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VoiceDevice {
    #[default]
    Simulated,
    None,
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub language: Language,
    pub reply_delay: Duration,
    /// Fixed RNG seed for reproducible replies; `None` draws from entropy.
    pub seed: Option<u64>,
    pub voice_device: VoiceDevice,
}

/// Values supplied on the command line (None = not specified).
#[derive(Debug, Default, Clone, Copy)]
pub struct CliOverrides {
    pub language: Option<Language>,
    pub seed: Option<u64>,
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

/// Returns the path to `~/.sahaayak/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".sahaayak").join("config.toml"))
}

/// Load config from `~/.sahaayak/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `SahaayakConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<SahaayakConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(SahaayakConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(SahaayakConfig::default());
    }

    load_config_from(&path)
}

/// Parse a config file at an explicit path.
pub fn load_config_from(path: &Path) -> Result<SahaayakConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: SahaayakConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Sahaayak Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# language = "en"                    # "en", "hi" or "mr" (or SAHAAYAK_LANGUAGE)
# reply_delay_ms = 1500              # Or SAHAAYAK_REPLY_DELAY_MS
# seed = 42                          # Fixed seed for reproducible replies

# [voice]
# device = "simulated"               # "simulated" or "none"
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &SahaayakConfig, cli: CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Same as [`resolve`] with an injectable environment lookup.
pub fn resolve_with_env(
    config: &SahaayakConfig,
    cli: CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Language: CLI → env → config → default
    let language = cli
        .language
        .or_else(|| {
            env("SAHAAYAK_LANGUAGE").and_then(|code| {
                let parsed = Language::from_code(&code);
                if parsed.is_none() {
                    warn!("Ignoring unknown SAHAAYAK_LANGUAGE value: {}", code);
                }
                parsed
            })
        })
        .or(config.general.language)
        .unwrap_or_default();

    // Reply delay: env → config → default
    let reply_delay = env("SAHAAYAK_REPLY_DELAY_MS")
        .and_then(|raw| match raw.trim().parse::<u64>() {
            Ok(ms) => Some(ms),
            Err(e) => {
                warn!("Ignoring invalid SAHAAYAK_REPLY_DELAY_MS '{}': {}", raw, e);
                None
            }
        })
        .or(config.general.reply_delay_ms)
        .map(Duration::from_millis)
        .unwrap_or(DEFAULT_REPLY_DELAY);

    ResolvedConfig {
        language,
        reply_delay,
        seed: cli.seed.or(config.general.seed),
        voice_device: config.voice.device.unwrap_or_default(),
    }
}
