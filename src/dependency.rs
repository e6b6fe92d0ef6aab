//! Resolved dependencies as handed over by dependency resolution.
//!
//! Dependency resolution produces, for each module on the runtime classpath, its
//! coordinate and the artifact file it resolved to. The filter only looks at the
//! coordinate; the file travels along untouched so that whatever consumes the
//! retained set (resource copying, the bundler) knows where the artifact lives.
//!
//! # Input Formats
//!
//! Two formats are accepted when dependency lists come from outside the process.
//!
//! Line format, one dependency per line, `#` comments and blank lines ignored:
//!
//! ```text
//! # group:name[:path]
//! com.vaadin:flow-server:/home/me/.m2/flow-server-2.4.0.jar
//! com.vaadin:checkbox
//! ```
//!
//! JSON format, an array of objects:
//!
//! ```json
//! [{ "group": "com.vaadin", "name": "checkbox", "file": "libs/checkbox.jar" }]
//! ```

use crate::constants::{COORDINATE_SEPARATOR, JAR_EXTENSION};
use crate::coordinate::ModuleCoordinate;
use crate::core::{FilterError, Result};
use crate::filter::Decision;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

/// A module coordinate plus the artifact file it resolved to, if known.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedDependency {
    #[serde(flatten)]
    pub coordinate: ModuleCoordinate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl ResolvedDependency {
    pub fn new(coordinate: ModuleCoordinate, file: Option<PathBuf>) -> Self {
        Self {
            coordinate,
            file,
        }
    }

    /// Returns `true` if the artifact is a `.jar` file (case-insensitive).
    ///
    /// Dependencies without a known file are not jars.
    #[must_use]
    pub fn is_jar(&self) -> bool {
        self.file
            .as_deref()
            .and_then(|file| file.extension())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(JAR_EXTENSION))
    }
}

/// A dependency the filter dropped, with the decision that dropped it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedDependency {
    #[serde(flatten)]
    pub dependency: ResolvedDependency,
    #[serde(flatten)]
    pub decision: Decision,
}

/// Result of applying a predicate to a dependency set.
///
/// Both lists keep the order of the input.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FilterOutcome {
    pub retained: Vec<ResolvedDependency>,
    pub rejected: Vec<RejectedDependency>,
}

/// Parses the line-oriented dependency list format.
///
/// # Errors
///
/// Returns [`FilterError::InvalidDependencyList`] naming the 1-based line of the
/// first entry that lacks a group or a name.
///
/// # Examples
///
/// ```rust
/// use classpath_filter::dependency::parse_dependency_lines;
///
/// let deps = parse_dependency_lines("# runtime classpath\norg.foo:bar:libs/bar.jar\n").unwrap();
/// assert_eq!(deps.len(), 1);
/// assert!(deps[0].is_jar());
/// ```
pub fn parse_dependency_lines(input: &str) -> Result<Vec<ResolvedDependency>> {
    let mut dependencies = Vec::new();

    for (index, raw) in input.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let invalid = |reason: &str| FilterError::InvalidDependencyList {
            line: index + 1,
            reason: format!("{reason} in '{line}'"),
        };

        let (group, rest) =
            line.split_once(COORDINATE_SEPARATOR).ok_or_else(|| invalid("missing ':' separator"))?;
        // The path may itself contain ':' (Windows drive letters), so only split once more
        let (name, file) = match rest.split_once(COORDINATE_SEPARATOR) {
            Some((name, path)) if !path.trim().is_empty() => {
                (name, Some(PathBuf::from(path.trim())))
            }
            Some((name, _)) => (name, None),
            None => (rest, None),
        };

        let coordinate = ModuleCoordinate::try_new(group.trim(), name.trim()).map_err(|e| match e {
            FilterError::InvalidCoordinate {
                reason, ..
            } => invalid(&reason),
            other => other,
        })?;

        dependencies.push(ResolvedDependency::new(coordinate, file));
    }

    debug!("Parsed {} dependencies from line list", dependencies.len());
    Ok(dependencies)
}

/// Parses a JSON array of dependencies.
///
/// # Errors
///
/// Returns [`FilterError::JsonError`] if the input is not an array of
/// `{group, name, file?}` objects, or if a coordinate fails the checks of
/// [`ModuleCoordinate::try_new`].
pub fn parse_dependency_json(input: &str) -> Result<Vec<ResolvedDependency>> {
    let dependencies: Vec<ResolvedDependency> = serde_json::from_str(input)?;
    debug!("Parsed {} dependencies from JSON list", dependencies.len());
    Ok(dependencies)
}
