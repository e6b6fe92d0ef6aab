//! Compound `group:name` glob predicates over module coordinates.
//!
//! A [`ModuleIdentifierPredicate`] pairs two [`GlobMatcher`]s, one per coordinate
//! segment. The pattern `com.vaadin:flow-*` therefore means "group is exactly
//! `com.vaadin` and name starts with `flow-`".
//!
//! # Examples
//!
//! ```rust
//! use classpath_filter::coordinate::ModuleCoordinate;
//! use classpath_filter::predicate::ModuleIdentifierPredicate;
//!
//! # fn example() -> classpath_filter::core::Result<()> {
//! let predicate = ModuleIdentifierPredicate::from_group_name_glob("com.vaadin:flow-*")?;
//! assert!(predicate.test(&ModuleCoordinate::new("com.vaadin", "flow-server")));
//! assert!(!predicate.test(&ModuleCoordinate::new("com.vaadin", "checkbox")));
//! assert!(!predicate.test(&ModuleCoordinate::new("org.foo", "bar")));
//! # Ok(())
//! # }
//! ```

use crate::constants::COORDINATE_SEPARATOR;
use crate::coordinate::ModuleCoordinate;
use crate::core::{FilterError, Result};
use crate::pattern::GlobMatcher;
use std::fmt;

/// Predicate matching coordinates whose group and name both match their globs.
#[derive(Debug, Clone)]
pub struct ModuleIdentifierPredicate {
    group: GlobMatcher,
    name: GlobMatcher,
}

impl ModuleIdentifierPredicate {
    /// Parses a `<group-glob>:<name-glob>` pattern.
    ///
    /// The pattern is split at the first `:`. Either glob may be empty, in which
    /// case it only matches an empty segment.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidPattern`] if the pattern has no `:`
    /// separator, or [`FilterError::GlobCompile`] if either glob cannot be
    /// compiled.
    pub fn from_group_name_glob(pattern: &str) -> Result<Self> {
        let (group_glob, name_glob) =
            pattern.split_once(COORDINATE_SEPARATOR).ok_or_else(|| FilterError::InvalidPattern {
                pattern: pattern.to_string(),
                reason: format!(
                    "expected '<group-glob>{COORDINATE_SEPARATOR}<name-glob>' but found no '{COORDINATE_SEPARATOR}' separator"
                ),
            })?;

        Ok(Self {
            group: GlobMatcher::new(group_glob)?,
            name: GlobMatcher::new(name_glob)?,
        })
    }

    /// Returns `true` if both the group glob and the name glob match.
    #[must_use]
    pub fn test(&self, coordinate: &ModuleCoordinate) -> bool {
        self.group.test(coordinate.group()) && self.name.test(coordinate.name())
    }
}

/// Renders the pattern back in `group:name` form.
impl fmt::Display for ModuleIdentifierPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.group.pattern(), COORDINATE_SEPARATOR, self.name.pattern())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn coordinate(group: &str, name: &str) -> ModuleCoordinate {
        ModuleCoordinate::new(group, name)
    }

    #[test]
    fn test_star_star_matches_everything() {
        let p = ModuleIdentifierPredicate::from_group_name_glob("*:*").unwrap();
        assert!(p.test(&coordinate("com.vaadin", "flow-server")));
        assert!(p.test(&coordinate("org.foo", "bar")));
        assert!(p.test(&coordinate("", "")));
    }

    #[test]
    fn test_exact_group_any_name() {
        let p = ModuleIdentifierPredicate::from_group_name_glob("com.vaadin:*").unwrap();
        assert!(p.test(&coordinate("com.vaadin", "flow-server")));
        assert!(p.test(&coordinate("com.vaadin", "checkbox")));
        assert!(!p.test(&coordinate("org.foo", "bar")));
        assert!(!p.test(&coordinate("com.vaadin.addons", "checkbox")));
    }

    #[test]
    fn test_exact_group_name_prefix() {
        let p = ModuleIdentifierPredicate::from_group_name_glob("com.vaadin:flow-*").unwrap();
        assert!(p.test(&coordinate("com.vaadin", "flow-server")));
        assert!(!p.test(&coordinate("com.vaadin", "checkbox")));
        assert!(!p.test(&coordinate("org.foo", "bar")));
    }

    #[test]
    fn test_missing_separator_is_rejected() {
        let err = ModuleIdentifierPredicate::from_group_name_glob("com.vaadin").unwrap_err();
        match err {
            FilterError::InvalidPattern {
                pattern,
                ..
            } => assert_eq!(pattern, "com.vaadin"),
            other => panic!("unexpected error: {other}"),
        }
        assert!(ModuleIdentifierPredicate::from_group_name_glob("").is_err());
    }

    #[test]
    fn test_split_at_first_separator() {
        let p = ModuleIdentifierPredicate::from_group_name_glob("org.foo:bar:*").unwrap();
        assert!(!p.test(&coordinate("org.foo:bar", "baz")));
        assert!(p.test(&coordinate("org.foo", "bar:baz")));
        assert!(!p.test(&coordinate("org.foo", "bar")));
    }

    #[test]
    fn test_empty_segments() {
        let p = ModuleIdentifierPredicate::from_group_name_glob(":").unwrap();
        assert!(p.test(&coordinate("", "")));
        assert!(!p.test(&coordinate("a", "")));
    }

    #[test]
    fn test_display_round_trips_pattern() {
        let p = ModuleIdentifierPredicate::from_group_name_glob("com.*:flow-?").unwrap();
        assert_eq!(p.to_string(), "com.*:flow-?");
    }

    proptest! {
        #[test]
        fn prop_star_star_matches_any_coordinate(group in ".{0,16}", name in ".{0,16}") {
            let p = ModuleIdentifierPredicate::from_group_name_glob("*:*").unwrap();
            prop_assert!(p.test(&ModuleCoordinate::new(group, name)));
        }

        #[test]
        fn prop_literal_pattern_matches_only_its_coordinate(
            group in "[a-z.]{1,8}",
            name in "[a-z-]{1,8}",
            other in "[a-z-]{1,8}",
        ) {
            let p = ModuleIdentifierPredicate::from_group_name_glob(&format!("{group}:{name}")).unwrap();
            prop_assert!(p.test(&ModuleCoordinate::new(group.clone(), name.clone())));
            prop_assert_eq!(p.test(&ModuleCoordinate::new(group, other.clone())), other == name);
        }
    }
}
