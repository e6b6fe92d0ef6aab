//! Command-line interface for the classpath filter.
//!
//! The `cpfilter` binary exposes the filter to build scripts and to people
//! debugging why a dependency did or did not reach the frontend bundle.
//!
//! # Available Commands
//!
//! - `check` - Decide individual coordinates and show which rule decided
//! - `filter` - Filter a resolved dependency list read from a file or stdin
//! - `validate` - Check the configuration and summarize its rules
//!
//! # Global Options
//!
//! - `--verbose` / `--quiet` - Log level (mutually exclusive)
//! - `--config <PATH>` - Configuration file (also `CPFILTER_CONFIG`)
//! - `--include <PATTERN>` / `--exclude <PATTERN>` - Extra rules, appended to
//!   the configured ones
//!
//! # Example
//!
//! ```bash
//! # Which of these would be bundled?
//! cpfilter --include 'com.vaadin:*' check com.vaadin:checkbox org.foo:bar
//!
//! # Filter a dependency list with the rules from classpath-filter.toml
//! cpfilter filter runtime-classpath.txt --jars-only
//!
//! # CI check that the configuration is well-formed
//! cpfilter validate
//! ```

mod check;
pub mod common;
mod filter;
mod validate;

pub use check::CheckCommand;
pub use filter::{FilterCommand, InputFormat};
pub use validate::ValidateCommand;

use crate::config::FilterConfig;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Settings derived from global CLI flags.
///
/// Separated from [`Cli`] so tests can build one directly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Log filter directive; `None` defers to `RUST_LOG`.
    pub log_level: Option<String>,
    /// Explicit configuration file.
    pub config_path: Option<PathBuf>,
    /// Include patterns from `--include`.
    pub include: Vec<String>,
    /// Exclude patterns from `--exclude`.
    pub exclude: Vec<String>,
}

impl CliConfig {
    /// Loads the configuration file and appends the command-line patterns.
    pub fn load_filter_config(&self, start: &std::path::Path) -> Result<FilterConfig> {
        let mut config = FilterConfig::resolve(self.config_path.as_deref(), start)
            .context("Failed to load classpath filter configuration")?;
        config.extend(self.include.iter().cloned(), self.exclude.iter().cloned());
        Ok(config)
    }
}

/// Main CLI structure for `cpfilter`.
#[derive(Parser, Debug)]
#[command(
    name = "cpfilter",
    author,
    version,
    about = "Decide which dependencies reach the frontend bundle",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to the configuration file
    ///
    /// Defaults to the nearest classpath-filter.toml in the working directory or
    /// its parents. A path given here must exist.
    #[arg(long, global = true, env = "CPFILTER_CONFIG", value_name = "PATH")]
    config: Option<PathBuf>,

    /// Add an include pattern (`<group-glob>:<name-glob>`), may be repeated
    #[arg(long = "include", global = true, value_name = "PATTERN")]
    include: Vec<String>,

    /// Add an exclude pattern (`<group-glob>:<name-glob>`), may be repeated
    #[arg(long = "exclude", global = true, value_name = "PATTERN")]
    exclude: Vec<String>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Show whether coordinates would be retained, and why
    Check(CheckCommand),
    /// Filter a resolved dependency list
    Filter(FilterCommand),
    /// Validate the filter configuration
    Validate(ValidateCommand),
}

impl Cli {
    /// Execute the parsed command against the working directory and stdout.
    pub fn execute(self) -> Result<()> {
        let config = self.build_config();
        init_logging(config.log_level.as_deref());

        let cwd = std::env::current_dir().context("Cannot determine current working directory")?;
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.execute_with_config(&config, &cwd, &mut out)
    }

    /// Build a [`CliConfig`] from the parsed arguments.
    ///
    /// `--verbose` maps to `debug`, `--quiet` to `error`; otherwise `RUST_LOG`
    /// applies.
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            Some("debug".to_string())
        } else if self.quiet {
            Some("error".to_string())
        } else {
            None
        };

        CliConfig {
            log_level,
            config_path: self.config.clone(),
            include: self.include.clone(),
            exclude: self.exclude.clone(),
        }
    }

    /// Execute with explicit configuration, working directory and output.
    pub fn execute_with_config(
        self,
        config: &CliConfig,
        cwd: &std::path::Path,
        out: &mut dyn Write,
    ) -> Result<()> {
        let filter_config = config.load_filter_config(cwd)?;

        match self.command {
            Commands::Check(cmd) => cmd.execute(&filter_config, out),
            Commands::Filter(cmd) => cmd.execute(&filter_config, out),
            Commands::Validate(cmd) => cmd.execute(&filter_config, out),
        }
    }
}

/// Install the global tracing subscriber, writing to stderr.
///
/// `level` takes precedence over `RUST_LOG`; with neither, only warnings and
/// errors are shown. Calling this more than once is harmless.
pub fn init_logging(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_CONFIG_FILE;
    use tempfile::TempDir;

    fn run(args: &[&str], cwd: &std::path::Path) -> Result<String> {
        let cli = Cli::try_parse_from(args)?;
        let config = cli.build_config();
        let mut out = Vec::new();
        cli.execute_with_config(&config, cwd, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn test_build_config_log_levels() {
        let cli = Cli::try_parse_from(["cpfilter", "--verbose", "validate"]).unwrap();
        assert_eq!(cli.build_config().log_level.as_deref(), Some("debug"));

        let cli = Cli::try_parse_from(["cpfilter", "-q", "validate"]).unwrap();
        assert_eq!(cli.build_config().log_level.as_deref(), Some("error"));

        let cli = Cli::try_parse_from(["cpfilter", "validate"]).unwrap();
        assert_eq!(cli.build_config().log_level, None);
    }

    #[test]
    fn test_verbose_and_quiet_conflict() {
        assert!(Cli::try_parse_from(["cpfilter", "-v", "-q", "validate"]).is_err());
    }

    #[test]
    fn test_repeated_patterns_after_subcommand() {
        let cli = Cli::try_parse_from([
            "cpfilter",
            "check",
            "a:b",
            "--include",
            "com.vaadin:*",
            "--include",
            "org.foo:*",
            "--exclude",
            "org.foo:bar",
        ])
        .unwrap();
        let config = cli.build_config();
        assert_eq!(config.include, ["com.vaadin:*", "org.foo:*"]);
        assert_eq!(config.exclude, ["org.foo:bar"]);
    }

    #[test]
    fn test_flags_extend_discovered_config() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join(DEFAULT_CONFIG_FILE),
            "[classpath]\ninclude = [\"com.vaadin:*\"]\n",
        )
        .unwrap();

        let output = run(
            &["cpfilter", "--exclude", "com.vaadin:checkbox", "check", "com.vaadin:checkbox", "com.vaadin:button"],
            temp.path(),
        )
        .unwrap();

        let lines: Vec<_> = output.lines().collect();
        assert!(lines[0].ends_with("rejected (excluded by 'com.vaadin:checkbox')"));
        assert!(lines[1].ends_with("retained (included by 'com.vaadin:*')"));
    }

    #[test]
    fn test_missing_explicit_config_fails() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing.toml");

        let err = run(&["cpfilter", "--config", missing.to_str().unwrap(), "validate"], temp.path())
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<crate::core::FilterError>(),
            Some(crate::core::FilterError::ConfigNotFound { .. })
        ));
    }
}
