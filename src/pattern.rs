//! Glob matching for single coordinate segments.
//!
//! This module provides [`GlobMatcher`], which tests one string (a group id or an
//! artifact name) against one glob. Globs are deliberately simpler than shell
//! globs: there are no character classes, no brace expansion and no notion of
//! path separators.
//!
//! # Pattern Syntax
//!
//! - `*` matches any run of characters, including the empty run
//! - `?` matches exactly one character
//! - every other character matches itself literally (`.`, `+`, `[`, `\` included)
//!
//! Matching is anchored at both ends: the whole candidate must match, not a
//! substring of it.
//!
//! # Examples
//!
//! ```rust
//! use classpath_filter::pattern::GlobMatcher;
//!
//! # fn example() -> classpath_filter::core::Result<()> {
//! let matcher = GlobMatcher::new("com.*")?;
//! assert!(matcher.test("com.vaadin"));
//! assert!(!matcher.test("comma.foo"));
//! assert!(!matcher.test("org.foo"));
//! # Ok(())
//! # }
//! ```
//!
//! # Implementation
//!
//! A glob is compiled once into an anchored [`regex::Regex`]. Literal runs are
//! escaped with [`regex::escape`] before the wildcards are substituted, so any
//! regex metacharacter in a pattern is matched as itself.

use crate::core::{FilterError, Result};
use regex::Regex;
use tracing::trace;

/// Compiled glob pattern for a single string segment.
///
/// # Thread Safety
///
/// `GlobMatcher` is immutable after construction and is `Send + Sync`; one
/// instance can be shared between threads and tested concurrently.
#[derive(Debug, Clone)]
pub struct GlobMatcher {
    regex: Regex,
    original_pattern: String,
}

impl GlobMatcher {
    /// Compiles a glob pattern.
    ///
    /// Every string is a legal glob, including the empty string (which only
    /// matches the empty candidate).
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::GlobCompile`] only if the compiled program exceeds
    /// the regex engine's size limit, which takes a pattern far larger than any
    /// coordinate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use classpath_filter::pattern::GlobMatcher;
    ///
    /// let any = GlobMatcher::new("*").unwrap();
    /// assert!(any.test(""));
    /// assert!(any.test("flow-server"));
    ///
    /// let one = GlobMatcher::new("flow-?").unwrap();
    /// assert!(one.test("flow-x"));
    /// assert!(!one.test("flow-"));
    /// ```
    pub fn new(pattern: &str) -> Result<Self> {
        let source = glob_to_regex(pattern);
        trace!("Compiled glob '{}' to regex '{}'", pattern, source);

        let regex = Regex::new(&source).map_err(|e| FilterError::GlobCompile {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            regex,
            original_pattern: pattern.to_string(),
        })
    }

    /// Returns `true` if the whole candidate matches the glob.
    #[must_use]
    pub fn test(&self, candidate: &str) -> bool {
        self.regex.is_match(candidate)
    }

    /// Returns the pattern string this matcher was compiled from.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.original_pattern
    }
}

/// Translates a glob into an anchored regex source string.
///
/// `(?s)` lets `.` match line terminators too, so `*` and `?` really do accept
/// any character.
fn glob_to_regex(pattern: &str) -> String {
    let mut source = String::with_capacity(pattern.len() + 8);
    source.push_str("(?s)^");

    let mut literal = String::new();
    let mut previous_star = false;
    for ch in pattern.chars() {
        match ch {
            '*' | '?' => {
                if !literal.is_empty() {
                    source.push_str(&regex::escape(&literal));
                    literal.clear();
                }
                if ch == '?' {
                    source.push('.');
                    previous_star = false;
                } else if !previous_star {
                    // "**" is equivalent to "*"
                    source.push_str(".*");
                    previous_star = true;
                }
            }
            _ => {
                literal.push(ch);
                previous_star = false;
            }
        }
    }
    if !literal.is_empty() {
        source.push_str(&regex::escape(&literal));
    }

    source.push('$');
    source
}
