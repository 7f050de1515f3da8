//! Result rendering on stdout, errors on stderr.
//!
//! - results: pretty JSON or YAML
//! - errors: `Error: <message>`, then exit with a category code

use std::io::Write;

use anyhow::{Context, Result};
use cca::ApiError;
use colored::Colorize;
use serde::Serialize;

use crate::config::OutputFormat;

pub const EXIT_GENERIC: i32 = 1;
pub const EXIT_DOMAIN: i32 = 2;
pub const EXIT_TRANSPORT: i32 = 3;
pub const EXIT_POLL: i32 = 4;

pub struct Output {
    format: OutputFormat,
    colored: bool,
}

impl Output {
    pub fn new(format: OutputFormat, colored: bool) -> Self {
        Self { format, colored }
    }

    pub fn render<T: Serialize>(&self, data: &T) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(data).context("Failed to render JSON output")
            }
            OutputFormat::Yaml => {
                serde_yaml::to_string(data).context("Failed to render YAML output")
            }
        }
    }

    /// Final result on stdout.
    pub fn result<T: Serialize>(&self, data: &T) -> Result<()> {
        let rendered = self.render(data)?;
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", rendered.trim_end()).context("Failed to write output")?;
        Ok(())
    }

    pub fn format_error(&self, err: &anyhow::Error) -> String {
        let label = if self.colored {
            "Error".red().bold().to_string()
        } else {
            "Error".to_string()
        };
        format!("{label}: {err:#}")
    }

    /// Report `err` on stderr and exit with its category code.
    pub fn fail(&self, err: anyhow::Error) -> ! {
        eprintln!("{}", self.format_error(&err));
        std::process::exit(exit_code(&err));
    }
}

/// Exit code for an error chain: the first [`ApiError`] found decides.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    match err.chain().find_map(|cause| cause.downcast_ref::<ApiError>()) {
        Some(ApiError::Domain(_)) => EXIT_DOMAIN,
        Some(ApiError::Transport(_)) => EXIT_TRANSPORT,
        Some(ApiError::Poll(_)) => EXIT_POLL,
        None => EXIT_GENERIC,
    }
}
