//! Include/exclude filtering of module coordinates.
//!
//! [`ClasspathFilter`] accumulates `include` and `exclude` rules during
//! configuration and compiles them with [`ClasspathFilter::to_predicate`] into an
//! immutable [`ClasspathPredicate`], which is then applied to every coordinate
//! that dependency resolution produced.
//!
//! # Decision Algorithm
//!
//! For each coordinate, in order:
//!
//! 1. The protected coordinate (`com.vaadin:flow-server`) is always retained.
//! 2. A coordinate matching any exclude rule is rejected.
//! 3. If at least one include rule was registered, the coordinate is retained
//!    only if some include rule matches it.
//! 4. Otherwise it is retained.
//!
//! Excludes are a denylist checked before the allowlist. Registering a single
//! include switches the filter into allowlist mode; with no includes nothing is
//! dropped by omission.
//!
//! # Examples
//!
//! ```rust
//! use classpath_filter::coordinate::ModuleCoordinate;
//! use classpath_filter::filter::ClasspathFilter;
//!
//! # fn example() -> classpath_filter::core::Result<()> {
//! let mut filter = ClasspathFilter::new();
//! filter.include("com.vaadin:*")?;
//! filter.exclude("com.vaadin:checkbox")?;
//! let predicate = filter.to_predicate();
//!
//! assert!(predicate.test(&ModuleCoordinate::new("com.vaadin", "button")));
//! assert!(!predicate.test(&ModuleCoordinate::new("com.vaadin", "checkbox")));
//! assert!(!predicate.test(&ModuleCoordinate::new("org.foo", "bar")));
//! assert!(predicate.test(&ModuleCoordinate::protected()));
//! # Ok(())
//! # }
//! ```

use crate::coordinate::ModuleCoordinate;
use crate::core::Result;
use crate::dependency::{FilterOutcome, RejectedDependency, ResolvedDependency};
use crate::predicate::ModuleIdentifierPredicate;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, trace};

/// Mutable accumulator of include and exclude rules.
///
/// Patterns are parsed as they are registered, so a malformed pattern fails the
/// `include` / `exclude` call that introduced it.
#[derive(Debug, Clone, Default)]
pub struct ClasspathFilter {
    includes: Vec<ModuleIdentifierPredicate>,
    excludes: Vec<ModuleIdentifierPredicate>,
}

impl ClasspathFilter {
    /// Creates a filter with no rules, which accepts every coordinate.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an include rule and switches the filter into allowlist mode.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidPattern`](crate::core::FilterError::InvalidPattern)
    /// if the pattern is not of the form `<group-glob>:<name-glob>`.
    pub fn include(&mut self, pattern: &str) -> Result<&mut Self> {
        let predicate = ModuleIdentifierPredicate::from_group_name_glob(pattern)?;
        debug!("Registered include rule '{}'", predicate);
        self.includes.push(predicate);
        Ok(self)
    }

    /// Registers an exclude rule.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidPattern`](crate::core::FilterError::InvalidPattern)
    /// if the pattern is not of the form `<group-glob>:<name-glob>`.
    pub fn exclude(&mut self, pattern: &str) -> Result<&mut Self> {
        let predicate = ModuleIdentifierPredicate::from_group_name_glob(pattern)?;
        debug!("Registered exclude rule '{}'", predicate);
        self.excludes.push(predicate);
        Ok(self)
    }

    /// Returns `true` once at least one include rule has been registered.
    #[must_use]
    pub fn is_allowlist(&self) -> bool {
        !self.includes.is_empty()
    }

    /// Registered include patterns, in registration order.
    pub fn includes(&self) -> impl Iterator<Item = String> + '_ {
        self.includes.iter().map(ToString::to_string)
    }

    /// Registered exclude patterns, in registration order.
    pub fn excludes(&self) -> impl Iterator<Item = String> + '_ {
        self.excludes.iter().map(ToString::to_string)
    }

    /// Compiles the current rules into an immutable predicate.
    ///
    /// The predicate is a snapshot: rules registered afterwards do not affect it.
    /// Calling this twice without changing the filter yields predicates with
    /// identical behavior.
    #[must_use]
    pub fn to_predicate(&self) -> ClasspathPredicate {
        debug!(
            "Compiling classpath predicate with {} include and {} exclude rules",
            self.includes.len(),
            self.excludes.len()
        );
        ClasspathPredicate {
            includes: self.includes.iter().cloned().collect(),
            excludes: self.excludes.iter().cloned().collect(),
        }
    }
}

/// Why a coordinate was retained or rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", rename_all = "kebab-case")]
pub enum Decision {
    /// The protected coordinate, retained regardless of rules.
    Protected,
    /// Rejected by the named exclude pattern.
    Excluded { pattern: String },
    /// Retained by the named include pattern.
    Included { pattern: String },
    /// Rejected because allowlist mode is on and no include matched.
    NotIncluded,
    /// Retained because no include rules exist and no exclude matched.
    DefaultAccepted,
}

impl Decision {
    #[must_use]
    pub const fn is_retained(&self) -> bool {
        matches!(self, Self::Protected | Self::Included { .. } | Self::DefaultAccepted)
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Protected => write!(f, "retained (protected runtime library)"),
            Self::Excluded {
                pattern,
            } => write!(f, "rejected (excluded by '{pattern}')"),
            Self::Included {
                pattern,
            } => write!(f, "retained (included by '{pattern}')"),
            Self::NotIncluded => write!(f, "rejected (no include rule matches)"),
            Self::DefaultAccepted => write!(f, "retained (no rules apply)"),
        }
    }
}

/// Immutable decision function compiled from a [`ClasspathFilter`].
///
/// Cloning is cheap (the rule lists are shared), and the predicate is
/// `Send + Sync`, so one instance can be tested from many threads.
#[derive(Debug, Clone)]
pub struct ClasspathPredicate {
    includes: Arc<[ModuleIdentifierPredicate]>,
    excludes: Arc<[ModuleIdentifierPredicate]>,
}

impl ClasspathPredicate {
    /// Decides a coordinate and reports the rule responsible.
    #[must_use]
    pub fn decide(&self, coordinate: &ModuleCoordinate) -> Decision {
        // Checked before any rule so no include/exclude combination can drop it
        if coordinate.is_protected() {
            return Decision::Protected;
        }

        if let Some(exclude) = self.excludes.iter().find(|p| p.test(coordinate)) {
            return Decision::Excluded {
                pattern: exclude.to_string(),
            };
        }

        if self.includes.is_empty() {
            return Decision::DefaultAccepted;
        }

        match self.includes.iter().find(|p| p.test(coordinate)) {
            Some(include) => Decision::Included {
                pattern: include.to_string(),
            },
            None => Decision::NotIncluded,
        }
    }

    /// Returns `true` if the coordinate should stay on the classpath.
    #[must_use]
    pub fn test(&self, coordinate: &ModuleCoordinate) -> bool {
        let decision = self.decide(coordinate);
        trace!("{}: {}", coordinate, decision);
        decision.is_retained()
    }

    /// Converts the predicate into a plain closure.
    pub fn into_fn(self) -> impl Fn(&ModuleCoordinate) -> bool + Clone + Send + Sync + 'static {
        move |coordinate| self.test(coordinate)
    }

    /// Splits resolved dependencies into retained and rejected, keeping input order.
    pub fn filter_dependencies<I>(&self, dependencies: I) -> FilterOutcome
    where
        I: IntoIterator<Item = ResolvedDependency>,
    {
        let mut outcome = FilterOutcome::default();
        for dependency in dependencies {
            let decision = self.decide(&dependency.coordinate);
            trace!("{}: {}", dependency.coordinate, decision);
            if decision.is_retained() {
                outcome.retained.push(dependency);
            } else {
                outcome.rejected.push(RejectedDependency {
                    dependency,
                    decision,
                });
            }
        }

        info!(
            "Classpath filter retained {} of {} dependencies",
            outcome.retained.len(),
            outcome.retained.len() + outcome.rejected.len()
        );
        outcome
    }
}
