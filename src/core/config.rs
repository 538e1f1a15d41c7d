//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.termslides/config.toml` unless `--config` points
//! elsewhere. A missing file means defaults; a malformed one is an error.

use log::{LevelFilter, debug, info, warn};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct SlidesConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub style: StyleConfig,
}

#[derive(Debug, Default, Deserialize)]
pub struct GeneralConfig {
    /// Shown in the footer's left corner.
    pub author: Option<String>,
    /// Footer date; today's date when unset.
    pub date: Option<String>,
    pub show_footer: Option<bool>,
    pub notes_on_start: Option<bool>,
    pub log_level: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct StyleConfig {
    /// Any theme bundled with syntect, e.g. "base16-ocean.dark".
    pub code_theme: Option<String>,
    /// Named terminal color for headings and the footer, e.g. "cyan".
    pub accent: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_CODE_THEME: &str = "base16-ocean.dark";
pub const DEFAULT_ACCENT: &str = "lightcyan";
pub const DEFAULT_LOG_LEVEL: &str = "info";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub author: Option<String>,
    pub date: String,
    pub show_footer: bool,
    pub notes_on_start: bool,
    pub log_level: String,
    pub code_theme: String,
    pub accent: String,
}

impl ResolvedConfig {
    /// The configured log level, or `None` if it is not a level name.
    pub fn log_filter(&self) -> Option<LevelFilter> {
        self.log_level.parse().ok()
    }
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        resolve(&SlidesConfig::default(), &CliOverrides::default())
    }
}

/// Values given on the command line (None = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub author: Option<String>,
    pub notes: bool,
    pub log_level: Option<String>,
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

/// Returns the path to `~/.termslides/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".termslides").join("config.toml"))
}

/// Where the settings came from. Loading happens before the logger exists,
/// so the caller logs this once logging is up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Missing(PathBuf),
    NoHomeDir,
}

impl ConfigSource {
    pub fn log(&self) {
        match self {
            ConfigSource::File(path) => info!("Loaded config from {}", path.display()),
            ConfigSource::Missing(path) => {
                debug!("No config file at {}, using defaults", path.display())
            }
            ConfigSource::NoHomeDir => {
                warn!("Could not determine home directory, using default config")
            }
        }
    }
}

/// Load config from `explicit` if given, else from the default location.
///
/// A missing default file yields `SlidesConfig::default()`. An explicit path
/// that does not exist is an error: the user asked for that file.
pub fn load_config(explicit: Option<&Path>) -> Result<(SlidesConfig, ConfigSource), ConfigError> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => match config_path() {
            Some(p) if p.exists() => p,
            Some(p) => return Ok((SlidesConfig::default(), ConfigSource::Missing(p))),
            None => return Ok((SlidesConfig::default(), ConfigSource::NoHomeDir)),
        },
    };

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config = parse_config(&contents)?;
    Ok((config, ConfigSource::File(path)))
}

pub fn parse_config(contents: &str) -> Result<SlidesConfig, ConfigError> {
    toml::from_str(contents).map_err(ConfigError::Parse)
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &SlidesConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// `resolve` with an injectable environment lookup.
fn resolve_with_env(
    config: &SlidesConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Author: CLI → env → config
    let author = cli
        .author
        .clone()
        .or_else(|| env("TERMSLIDES_AUTHOR"))
        .or_else(|| config.general.author.clone())
        .filter(|a| !a.trim().is_empty());

    // Date: config → today
    let date = config
        .general
        .date
        .clone()
        .unwrap_or_else(|| chrono::Local::now().format("%Y-%m-%d").to_string());

    // Code theme: env → config → default
    let code_theme = env("TERMSLIDES_CODE_THEME")
        .or_else(|| config.style.code_theme.clone())
        .unwrap_or_else(|| DEFAULT_CODE_THEME.to_string());

    let log_level = cli
        .log_level
        .clone()
        .or_else(|| config.general.log_level.clone())
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

    ResolvedConfig {
        author,
        date,
        show_footer: config.general.show_footer.unwrap_or(true),
        notes_on_start: cli.notes || config.general.notes_on_start.unwrap_or(false),
        log_level,
        code_theme,
        accent: config
            .style
            .accent
            .clone()
            .unwrap_or_else(|| DEFAULT_ACCENT.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve_with_env(&SlidesConfig::default(), &CliOverrides::default(), no_env);
        assert_eq!(resolved.author, None);
        assert!(resolved.show_footer);
        assert!(!resolved.notes_on_start);
        assert_eq!(resolved.code_theme, DEFAULT_CODE_THEME);
        assert_eq!(resolved.accent, DEFAULT_ACCENT);
        assert_eq!(resolved.log_level, DEFAULT_LOG_LEVEL);
        // Today's date, YYYY-MM-DD
        assert_eq!(resolved.date.len(), 10);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = SlidesConfig {
            general: GeneralConfig {
                author: Some("Ada".to_string()),
                date: Some("2025-05-11".to_string()),
                show_footer: Some(false),
                notes_on_start: Some(true),
                log_level: Some("debug".to_string()),
            },
            style: StyleConfig {
                code_theme: Some("InspiredGitHub".to_string()),
                accent: Some("magenta".to_string()),
            },
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), no_env);
        assert_eq!(resolved.author.as_deref(), Some("Ada"));
        assert_eq!(resolved.date, "2025-05-11");
        assert!(!resolved.show_footer);
        assert!(resolved.notes_on_start);
        assert_eq!(resolved.log_level, "debug");
        assert_eq!(resolved.code_theme, "InspiredGitHub");
        assert_eq!(resolved.accent, "magenta");
    }

    #[test]
    fn test_env_beats_config_and_cli_beats_env() {
        let config = SlidesConfig {
            general: GeneralConfig {
                author: Some("From Config".to_string()),
                ..Default::default()
            },
            style: StyleConfig {
                code_theme: Some("Solarized (dark)".to_string()),
                ..Default::default()
            },
        };
        let env = |key: &str| match key {
            "TERMSLIDES_AUTHOR" => Some("From Env".to_string()),
            "TERMSLIDES_CODE_THEME" => Some("base16-mocha.dark".to_string()),
            _ => None,
        };

        let resolved = resolve_with_env(&config, &CliOverrides::default(), env);
        assert_eq!(resolved.author.as_deref(), Some("From Env"));
        assert_eq!(resolved.code_theme, "base16-mocha.dark");

        let cli = CliOverrides {
            author: Some("From CLI".to_string()),
            notes: true,
            log_level: Some("trace".to_string()),
        };
        let resolved = resolve_with_env(&config, &cli, env);
        assert_eq!(resolved.author.as_deref(), Some("From CLI"));
        assert!(resolved.notes_on_start);
        assert_eq!(resolved.log_level, "trace");
    }

    #[test]
    fn test_blank_author_is_none() {
        let cli = CliOverrides {
            author: Some("   ".to_string()),
            ..Default::default()
        };
        let resolved = resolve_with_env(&SlidesConfig::default(), &cli, no_env);
        assert_eq!(resolved.author, None);
    }

    #[test]
    fn test_sparse_toml_parses() {
        let config = parse_config("[style]\naccent = \"yellow\"\n").unwrap();
        assert_eq!(config.style.accent.as_deref(), Some("yellow"));
        assert!(config.style.code_theme.is_none());
        assert!(config.general.author.is_none());
    }

    #[test]
    fn test_full_toml_parses() {
        let toml_str = r#"
[general]
author = "Yash"
date = "2025-05-11"
show_footer = true
notes_on_start = false
log_level = "warn"

[style]
code_theme = "base16-eighties.dark"
accent = "green"
"#;
        let config = parse_config(toml_str).unwrap();
        assert_eq!(config.general.author.as_deref(), Some("Yash"));
        assert_eq!(config.general.show_footer, Some(true));
        assert_eq!(config.style.code_theme.as_deref(), Some("base16-eighties.dark"));
    }

    #[test]
    fn test_malformed_toml_is_error() {
        let err = parse_config("[general\nauthor = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("config parse error"));
    }

    #[test]
    fn test_explicit_missing_path_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(Some(&dir.path().join("missing.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_explicit_path_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[general]\nauthor = \"Grace\"\n").unwrap();
        let (config, source) = load_config(Some(&path)).unwrap();
        assert_eq!(config.general.author.as_deref(), Some("Grace"));
        assert_eq!(source, ConfigSource::File(path));
    }

    #[test]
    fn test_log_filter_parses_known_levels_only() {
        let mut resolved = resolve_with_env(&SlidesConfig::default(), &CliOverrides::default(), no_env);
        assert_eq!(resolved.log_filter(), Some(LevelFilter::Info));

        resolved.log_level = "DEBUG".to_string();
        assert_eq!(resolved.log_filter(), Some(LevelFilter::Debug));

        resolved.log_level = "off".to_string();
        assert_eq!(resolved.log_filter(), Some(LevelFilter::Off));

        resolved.log_level = "verbose".to_string();
        assert_eq!(resolved.log_filter(), None);
    }
}
