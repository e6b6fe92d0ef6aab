//! Validate the filter configuration and summarize its rules.

use super::common::OutputFormat;
use crate::config::FilterConfig;
use crate::coordinate::ModuleCoordinate;
use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use std::io::Write;

/// Check that every configured pattern is well-formed.
///
/// Exits non-zero on the first malformed pattern, naming it and the list it
/// came from.
#[derive(Args, Debug)]
pub struct ValidateCommand {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Serialize)]
struct ValidationSummary {
    valid: bool,
    allowlist: bool,
    include: Vec<String>,
    exclude: Vec<String>,
    protected: String,
}

impl ValidateCommand {
    pub fn execute(&self, config: &FilterConfig, out: &mut dyn Write) -> Result<()> {
        let filter = config.build_filter().context("Classpath filter configuration is invalid")?;

        let summary = ValidationSummary {
            valid: true,
            allowlist: filter.is_allowlist(),
            include: filter.includes().collect(),
            exclude: filter.excludes().collect(),
            protected: ModuleCoordinate::protected().to_string(),
        };

        match self.format {
            OutputFormat::Text => {
                writeln!(out, "{} Configuration valid", "✓".green())?;
                if summary.allowlist {
                    let count = summary.include.len();
                    let rules = if count == 1 { "rule" } else { "rules" };
                    writeln!(out, "  mode: allowlist ({count} include {rules})")?;
                } else {
                    writeln!(out, "  mode: accept unless excluded")?;
                }
                for pattern in &summary.include {
                    writeln!(out, "  include: {pattern}")?;
                }
                for pattern in &summary.exclude {
                    writeln!(out, "  exclude: {pattern}")?;
                }
                writeln!(out, "  protected: {} (always retained)", summary.protected)?;
            }
            OutputFormat::Json => {
                writeln!(out, "{}", serde_json::to_string_pretty(&summary)?)?;
            }
        }

        Ok(())
    }
}
