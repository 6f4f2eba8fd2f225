//! Configuration handling for ascii-render.
//!
//! Settings come from three layers, highest priority first: command-line
//! arguments, the config file (`ascii-render/config.toml` under the platform
//! config dir, or a custom path), and built-in defaults.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::ascii::{clamp_aspect, Charset, EmptyCharsetError, DEFAULT_CHAR_ASPECT};
use crate::cli::Args;
use crate::terminal::TerminalSize;

/// Column count used when output goes to a file and no width is given.
pub const DEFAULT_WIDTH: u32 = 120;

/// Configuration file structure.
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub render: RenderSection,
}

#[derive(Debug, Deserialize, Default)]
pub struct RenderSection {
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub aspect: Option<f32>,
    #[serde(default)]
    pub charset: Option<String>,
    #[serde(default)]
    pub invert: bool,
}

impl Config {
    /// Load configuration from a file path.
    /// Returns default config if the file doesn't exist.
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(PathBuf::from).unwrap_or_else(default_path);

        if path.exists() {
            let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::IoError {
                path: path.clone(),
                source: e,
            })?;
            let config = Self::parse(&content).map_err(|e| ConfigError::ParseError {
                path: path.clone(),
                source: e,
            })?;
            log::debug!("Loaded config from {}", path.display());
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug)]
pub enum ConfigError {
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError { path, source } => {
                write!(
                    f,
                    "Failed to read config file '{}': {}",
                    path.display(),
                    source
                )
            }
            ConfigError::ParseError { path, source } => {
                write!(
                    f,
                    "Failed to parse config file '{}': {}",
                    path.display(),
                    source
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::IoError { source, .. } => Some(source),
            ConfigError::ParseError { source, .. } => Some(source),
        }
    }
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("ascii-render").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/ascii-render/config.toml")
        })
}

/// Where rendered lines go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    File(PathBuf),
}

/// Fully resolved settings for one run. Never mutated once built.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub target_columns: u32,
    /// Character cell width / height.
    pub char_aspect: f32,
    pub charset: Charset,
    pub invert: bool,
    pub source: PathBuf,
    pub destination: Destination,
}

impl RenderConfig {
    /// Merge arguments over the config file over defaults.
    ///
    /// `terminal` is only consulted when no width is given and output goes
    /// to stdout. Fails if the resulting charset is empty.
    pub fn resolve(
        args: &Args,
        file: &Config,
        terminal: impl FnOnce() -> TerminalSize,
    ) -> Result<Self, EmptyCharsetError> {
        let charset = match args.charset.as_deref().or(file.render.charset.as_deref()) {
            Some(chars) => Charset::new(chars)?,
            None => Charset::default(),
        };

        let destination = match &args.output {
            Some(path) => Destination::File(path.clone()),
            None => Destination::Stdout,
        };

        let target_columns = match args.width.or(file.render.width) {
            Some(width) => width,
            None => match destination {
                Destination::Stdout => u32::from(terminal().cols),
                Destination::File(_) => DEFAULT_WIDTH,
            },
        }
        .max(1);

        let char_aspect = clamp_aspect(
            args.aspect
                .or(file.render.aspect)
                .unwrap_or(DEFAULT_CHAR_ASPECT),
        );

        Ok(Self {
            target_columns,
            char_aspect,
            charset,
            invert: args.invert || file.render.invert,
            source: args.input.clone(),
            destination,
        })
    }
}
