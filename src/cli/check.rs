//! Decide individual coordinates and explain the decision.
//!
//! ```bash
//! cpfilter --exclude 'com.vaadin:*' check com.vaadin:checkbox com.vaadin:flow-server
//! # com.vaadin:checkbox     rejected (excluded by 'com.vaadin:*')
//! # com.vaadin:flow-server  retained (protected runtime library)
//! ```

use super::common::{OutputFormat, compile_predicate};
use crate::config::FilterConfig;
use crate::coordinate::ModuleCoordinate;
use crate::filter::Decision;
use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::io::Write;

/// Show whether coordinates would be retained, and which rule decided.
#[derive(Args, Debug)]
pub struct CheckCommand {
    /// Coordinates to check, written as `group:name`
    #[arg(value_name = "COORDINATE", required = true)]
    pub coordinates: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Serialize)]
struct CheckResult<'a> {
    coordinate: &'a ModuleCoordinate,
    retained: bool,
    #[serde(flatten)]
    decision: &'a Decision,
}

impl CheckCommand {
    pub fn execute(&self, config: &FilterConfig, out: &mut dyn Write) -> Result<()> {
        // Parse everything first so a typo fails before any output
        let coordinates = self
            .coordinates
            .iter()
            .map(|raw| raw.parse::<ModuleCoordinate>())
            .collect::<Result<Vec<_>, _>>()?;

        let predicate = compile_predicate(config)?;
        let decisions: Vec<_> = coordinates.iter().map(|c| predicate.decide(c)).collect();

        match self.format {
            OutputFormat::Text => {
                let width = coordinates.iter().map(|c| c.to_string().len()).max().unwrap_or(0);
                for (coordinate, decision) in coordinates.iter().zip(&decisions) {
                    writeln!(out, "{:<width$}  {}", coordinate.to_string(), decision)?;
                }
            }
            OutputFormat::Json => {
                let results: Vec<_> = coordinates
                    .iter()
                    .zip(&decisions)
                    .map(|(coordinate, decision)| CheckResult {
                        coordinate,
                        retained: decision.is_retained(),
                        decision,
                    })
                    .collect();
                writeln!(out, "{}", serde_json::to_string_pretty(&results)?)?;
            }
        }

        Ok(())
    }
}
