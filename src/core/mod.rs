//! Core types for the classpath filter
//!
//! This module holds the pieces every other module builds on: the error type and
//! the user-facing error rendering.
//!
//! # Modules
//!
//! ## `error` - Error Handling
//!
//! - [`FilterError`] - Enumerated error types covering every failure mode
//! - [`ErrorContext`] - User-friendly error wrapper with suggestions and details
//! - [`user_friendly_error`] - Convert any error to user-friendly format
//!
//! # Examples
//!
//! ```rust
//! use classpath_filter::core::{FilterError, Result};
//!
//! fn require_separator(pattern: &str) -> Result<()> {
//!     if !pattern.contains(':') {
//!         return Err(FilterError::InvalidPattern {
//!             pattern: pattern.to_string(),
//!             reason: "missing ':' separator".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//!
//! assert!(require_separator("com.vaadin:*").is_ok());
//! assert!(require_separator("com.vaadin").is_err());
//! ```

pub mod error;

pub use error::{ErrorContext, FilterError, user_friendly_error};

/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, FilterError>;
