//! Error handling for the classpath filter
//!
//! This module provides the error type and user-friendly error reporting for the
//! classpath filter. The error system follows two principles:
//! 1. **Strongly-typed errors** for precise error handling in library code
//! 2. **User-friendly messages** with actionable suggestions for CLI users
//!
//! # Architecture
//!
//! - [`FilterError`] - Enumerated error types for every failure case
//! - [`ErrorContext`] - Wrapper that adds details and suggestions for display
//!
//! # Error Categories
//!
//! - **Patterns**: [`FilterError::InvalidPattern`], [`FilterError::GlobCompile`]
//! - **Coordinates**: [`FilterError::InvalidCoordinate`], [`FilterError::InvalidDependencyList`]
//! - **Configuration**: [`FilterError::ConfigError`], [`FilterError::ConfigNotFound`]
//! - **Conversions**: [`FilterError::TomlError`], [`FilterError::JsonError`]
//!
//! Use [`user_friendly_error`] to convert any [`anyhow::Error`] into a displayable
//! [`ErrorContext`].
//!
//! # Examples
//!
//! ```rust,no_run
//! use classpath_filter::core::{FilterError, ErrorContext};
//!
//! let error = FilterError::InvalidPattern {
//!     pattern: "com.vaadin".to_string(),
//!     reason: "missing ':' separator".to_string(),
//! };
//! let context = ErrorContext::new(error)
//!     .with_suggestion("Write patterns as '<group-glob>:<name-glob>', e.g. 'com.vaadin:*'");
//!
//! context.display();
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for classpath filter operations.
///
/// Pattern evaluation itself never fails; every variant here describes a problem
/// with input handed to the filter (patterns, coordinates, configuration files or
/// dependency lists).
#[derive(Error, Debug)]
pub enum FilterError {
    /// A module pattern is not of the form `<group-glob>:<name-glob>`.
    ///
    /// Raised by `include` / `exclude` at registration time, never deferred
    /// until the predicate is compiled.
    #[error("Invalid module pattern '{pattern}': {reason}")]
    InvalidPattern {
        /// The pattern as provided
        pattern: String,
        /// Why it was rejected
        reason: String,
    },

    /// The regex engine refused the program compiled from a glob.
    ///
    /// Every glob is syntactically legal; this only surfaces when a pattern is so
    /// large that it exceeds the engine's size limits.
    #[error("Failed to compile glob '{pattern}': {reason}")]
    GlobCompile {
        /// The glob as provided
        pattern: String,
        /// Message from the regex engine
        reason: String,
    },

    /// A `group:name` coordinate string could not be parsed.
    #[error("Invalid module coordinate '{input}': {reason}")]
    InvalidCoordinate {
        /// The rejected input
        input: String,
        /// Why it was rejected
        reason: String,
    },

    /// A line of a dependency list could not be parsed.
    #[error("Invalid dependency list entry at line {line}: {reason}")]
    InvalidDependencyList {
        /// 1-based line number of the offending entry
        line: usize,
        /// Why it was rejected
        reason: String,
    },

    /// Configuration content is well-formed TOML but semantically wrong.
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the problem
        message: String,
    },

    /// An explicitly requested configuration file does not exist.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was looked up
        path: String,
    },

    /// TOML parsing error from [`toml::de::Error`]
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// JSON parsing or serialization error from [`serde_json::Error`]
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Error context wrapper that provides user-friendly error information.
///
/// When displayed, errors show:
/// 1. **Error**: the main error message in red
/// 2. **Details**: additional context in yellow (optional)
/// 3. **Suggestion**: actionable steps in green (optional)
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: FilterError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with no suggestion or details.
    #[must_use]
    pub const fn new(error: FilterError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error.
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add details explaining the error.
    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Display the error context to stderr with terminal colors.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error into a user-friendly [`ErrorContext`].
///
/// The error chain is walked looking for a [`FilterError`]; the first one found
/// decides the suggestion. Errors with no [`FilterError`] in their chain are
/// wrapped as [`FilterError::ConfigError`] carrying the full chain as details.
///
/// # Examples
///
/// ```rust,no_run
/// use classpath_filter::core::{FilterError, user_friendly_error};
///
/// let error = anyhow::Error::from(FilterError::ConfigNotFound {
///     path: "classpath-filter.toml".to_string(),
/// });
/// user_friendly_error(error).display();
/// ```
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    let wrapped = error.chain().next().and_then(|top| top.downcast_ref::<FilterError>()).is_none();

    for cause in error.chain() {
        let context = if let Some(filter_error) = cause.downcast_ref::<FilterError>() {
            create_error_context(filter_error)
        } else if let Some(toml_error) = cause.downcast_ref::<toml::de::Error>() {
            toml_error_context(toml_error)
        } else if let Some(io_error) = cause.downcast_ref::<std::io::Error>() {
            io_error_context(io_error)
        } else {
            continue;
        };

        // Keep outer anyhow context (e.g. "Failed to parse config file: ...") visible as details
        if wrapped && context.details.is_none() {
            return context.with_details(format!("{error:#}"));
        }
        return context;
    }

    ErrorContext::new(FilterError::ConfigError {
        message: error.to_string(),
    })
    .with_details(format!("{error:#}"))
}

fn toml_error_context(error: &toml::de::Error) -> ErrorContext {
    ErrorContext::new(FilterError::ConfigError {
        message: format!("TOML parsing error: {}", error.message()),
    })
    .with_suggestion(
        "Check the TOML syntax of the [classpath] table: 'include' and 'exclude' are arrays of strings",
    )
}

fn io_error_context(error: &std::io::Error) -> ErrorContext {
    let suggestion = match error.kind() {
        std::io::ErrorKind::NotFound => "Check that the file exists and the path is correct",
        std::io::ErrorKind::PermissionDenied => "Check the file permissions",
        std::io::ErrorKind::InvalidData => "Check that the file is UTF-8 text",
        _ => "Check that the file exists and is readable",
    };
    ErrorContext::new(FilterError::ConfigError {
        message: format!("IO error: {error}"),
    })
    .with_suggestion(suggestion)
}

fn create_error_context(error: &FilterError) -> ErrorContext {
    match error {
        FilterError::InvalidPattern {
            pattern,
            reason,
        } => ErrorContext::new(FilterError::InvalidPattern {
            pattern: pattern.clone(),
            reason: reason.clone(),
        })
        .with_suggestion(
            "Write module patterns as '<group-glob>:<name-glob>', e.g. 'com.vaadin:flow-*' or '*:*'",
        ),
        FilterError::GlobCompile {
            pattern,
            reason,
        } => ErrorContext::new(FilterError::GlobCompile {
            pattern: pattern.clone(),
            reason: reason.clone(),
        })
        .with_suggestion("Shorten the pattern; collapse repeated '*' wildcards"),
        FilterError::InvalidCoordinate {
            input,
            reason,
        } => ErrorContext::new(FilterError::InvalidCoordinate {
            input: input.clone(),
            reason: reason.clone(),
        })
        .with_suggestion("Coordinates are written as '<group>:<name>', e.g. 'com.vaadin:flow-server'"),
        FilterError::InvalidDependencyList {
            line,
            reason,
        } => ErrorContext::new(FilterError::InvalidDependencyList {
            line: *line,
            reason: reason.clone(),
        })
        .with_suggestion("Each line must be '<group>:<name>' or '<group>:<name>:<path>'")
        .with_details("Blank lines and lines starting with '#' are ignored"),
        FilterError::ConfigError {
            message,
        } => ErrorContext::new(FilterError::ConfigError {
            message: message.clone(),
        }),
        FilterError::ConfigNotFound {
            path,
        } => ErrorContext::new(FilterError::ConfigNotFound {
            path: path.clone(),
        })
        .with_suggestion(format!(
            "Check the --config path or create a {} file",
            crate::constants::DEFAULT_CONFIG_FILE
        )),
        FilterError::TomlError(e) => toml_error_context(e),
        FilterError::JsonError(e) => ErrorContext::new(FilterError::ConfigError {
            message: format!("JSON error: {e}"),
        })
        .with_suggestion(
            "JSON dependency lists are arrays of {\"group\", \"name\", \"file\"} objects",
        ),
    }
}
