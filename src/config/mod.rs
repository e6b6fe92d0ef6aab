//! Declarative filter configuration.
//!
//! The filter is usually configured from a TOML file rather than by calling
//! [`ClasspathFilter::include`] / [`ClasspathFilter::exclude`] directly. The
//! file carries a single `[classpath]` table:
//!
//! ```toml
//! [classpath]
//! include = ["com.vaadin:*", "org.webjars.npm:*"]
//! exclude = ["com.vaadin:flow-data*"]
//! ```
//!
//! Both lists are optional and default to empty, so an empty file (or no file
//! at all) yields a filter that accepts everything.
//!
//! # Location
//!
//! The CLI looks for configuration in this order:
//!
//! 1. `--config <PATH>` or the `CPFILTER_CONFIG` environment variable; the file
//!    must exist
//! 2. `classpath-filter.toml` in the working directory or any parent
//! 3. no file: empty configuration
//!
//! # Modules
//!
//! - `parser` - Generic TOML parsing utilities with error context

mod parser;

pub use parser::parse_config;

use crate::constants::DEFAULT_CONFIG_FILE;
use crate::core::{FilterError, Result};
use crate::filter::ClasspathFilter;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Root of the configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FilterConfig {
    #[serde(default)]
    pub classpath: ClasspathSection,
}

/// The `[classpath]` table: include and exclude module patterns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClasspathSection {
    #[serde(default)]
    pub include: Vec<String>,
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl FilterConfig {
    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::TomlError`] on invalid TOML or unknown keys.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Loads configuration from a file that must exist.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::ConfigNotFound`] if the file is missing, otherwise
    /// the read or parse error with the path as context.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.is_file() {
            return Err(FilterError::ConfigNotFound {
                path: path.display().to_string(),
            }
            .into());
        }

        let config: Self = parse_config(path)?;
        debug!(
            "Loaded {} include and {} exclude patterns from {}",
            config.classpath.include.len(),
            config.classpath.exclude.len(),
            path.display()
        );
        Ok(config)
    }

    /// Searches `start` and its ancestors for the default configuration file.
    #[must_use]
    pub fn find_in(start: &Path) -> Option<PathBuf> {
        start.ancestors().map(|dir| dir.join(DEFAULT_CONFIG_FILE)).find(|path| path.is_file())
    }

    /// Resolves configuration from an explicit path, or by searching from `start`.
    ///
    /// With no explicit path and no file found, returns the empty configuration.
    ///
    /// # Errors
    ///
    /// Fails if an explicit path does not exist, or if the selected file cannot
    /// be read or parsed.
    pub fn resolve(explicit: Option<&Path>, start: &Path) -> anyhow::Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => match Self::find_in(start) {
                Some(path) => Self::load(&path),
                None => {
                    debug!("No {} found from {}, using empty configuration", DEFAULT_CONFIG_FILE, start.display());
                    Ok(Self::default())
                }
            },
        }
    }

    /// Appends patterns, e.g. from command-line flags, after the configured ones.
    pub fn extend(&mut self, include: impl IntoIterator<Item = String>, exclude: impl IntoIterator<Item = String>) {
        self.classpath.include.extend(include);
        self.classpath.exclude.extend(exclude);
    }

    /// Builds a [`ClasspathFilter`] by registering every configured pattern.
    ///
    /// # Errors
    ///
    /// Fails on the first malformed pattern, naming it and the list it came from.
    pub fn build_filter(&self) -> anyhow::Result<ClasspathFilter> {
        let mut filter = ClasspathFilter::new();
        for pattern in &self.classpath.include {
            filter
                .include(pattern)
                .with_context(|| format!("Invalid entry in classpath.include: '{pattern}'"))?;
        }
        for pattern in &self.classpath.exclude {
            filter
                .exclude(pattern)
                .with_context(|| format!("Invalid entry in classpath.exclude: '{pattern}'"))?;
        }
        Ok(filter)
    }
}
