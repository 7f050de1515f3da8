//! Global settings: `.env` loading, flag normalization, logging setup.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use cca::{CcaClient, Client};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::cli::GlobalFlags;

pub const DEFAULT_OUTPUT_FORMAT: OutputFormat = OutputFormat::Json;
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::INFO;
pub const LOG_ENV_VAR: &str = "CCA_LOG";

/// Project directory holding the optional `.env` file.
pub fn project_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("CCA_PROJECT_DIR") {
        return PathBuf::from(dir);
    }
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

/// Load `.env` from the project directory. A missing file is not an error.
pub fn load_env() -> Result<Option<PathBuf>> {
    let env_path = project_dir().join(".env");
    if !env_path.is_file() {
        return Ok(None);
    }
    dotenvy::from_path(&env_path)
        .with_context(|| format!("Failed to load .env from {:?}", env_path))?;
    Ok(Some(env_path))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Yaml,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 2] = [OutputFormat::Json, OutputFormat::Yaml];

    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
        }
    }

    /// `[json, yaml]`, for help text.
    pub fn format_strings() -> String {
        let names: Vec<&str> = Self::ALL.iter().map(|f| f.as_str()).collect();
        format!("[{}]", names.join(", "))
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown output format '{s}'"))
    }
}

/// Logging configuration handed to the subscriber once, at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogConfig {
    pub level: LevelFilter,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl LogConfig {
    /// `CCA_LOG` directives win over the configured level.
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::builder()
            .with_default_directive(self.level.into())
            .with_env_var(LOG_ENV_VAR)
            .from_env_lossy()
    }

    pub fn init(&self) {
        tracing_subscriber::fmt()
            .with_env_filter(self.env_filter())
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Normalized global flags.
#[derive(Debug, Clone)]
pub struct Settings {
    pub api_url: String,
    pub api_key: Option<String>,
    pub insecure: bool,
    pub output: OutputFormat,
    pub colored: bool,
    pub log: LogConfig,
    /// Fallbacks taken during normalization, reported once logging is up.
    pub warnings: Vec<String>,
}

impl GlobalFlags {
    /// Validate the raw flags, falling back to defaults on bad values.
    pub fn normalize(&self) -> Settings {
        let mut warnings = Vec::new();

        let level = match self.loglevel.parse::<LevelFilter>() {
            Ok(level) => level,
            Err(_) => {
                warnings.push(format!(
                    "Invalid log level '{}', defaulting to '{}'",
                    self.loglevel, DEFAULT_LOG_LEVEL
                ));
                DEFAULT_LOG_LEVEL
            }
        };

        let output = match self.output.parse::<OutputFormat>() {
            Ok(format) => format,
            Err(_) => {
                warnings.push(format!(
                    "Invalid output format '{}', defaulting to '{}'",
                    self.output, DEFAULT_OUTPUT_FORMAT
                ));
                DEFAULT_OUTPUT_FORMAT
            }
        };

        Settings {
            api_url: self.api_url.clone(),
            api_key: self.api_key.clone().filter(|key| !key.trim().is_empty()),
            insecure: self.insecure,
            output,
            colored: !self.nocolor,
            log: LogConfig { level },
            warnings,
        }
    }
}

impl Settings {
    pub fn client(&self) -> Result<Client> {
        let Some(api_key) = self.api_key.as_deref() else {
            bail!("No API key configured. Pass --api-key or set CCA_API_KEY (a .env file works too).");
        };
        let api = CcaClient::builder(api_key)
            .api_url(&self.api_url)
            .insecure(self.insecure)
            .build()
            .context("Failed to build API client")?;
        Ok(Client::with_api(api))
    }
}
