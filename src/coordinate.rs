//! Module coordinates: the `(group, name)` pair identifying a dependency.

use crate::constants::{COORDINATE_SEPARATOR, PROTECTED_GROUP, PROTECTED_NAME};
use crate::core::FilterError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A dependency identified by group and name, independent of version.
///
/// Analogous to Maven's `groupId:artifactId`. Coordinates are compared by value
/// and ordered by group first, then name.
///
/// Coordinates read from user input (strings, JSON) go through
/// [`ModuleCoordinate::try_new`]: neither segment may be empty, contain `:`, or
/// carry surrounding whitespace. That keeps `group:name[:path]` lines
/// unambiguous.
///
/// # Examples
///
/// ```rust
/// use classpath_filter::coordinate::ModuleCoordinate;
///
/// let coordinate: ModuleCoordinate = "com.vaadin:checkbox".parse().unwrap();
/// assert_eq!(coordinate.group(), "com.vaadin");
/// assert_eq!(coordinate.name(), "checkbox");
/// assert_eq!(coordinate.to_string(), "com.vaadin:checkbox");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinate")]
pub struct ModuleCoordinate {
    group: String,
    name: String,
}

impl ModuleCoordinate {
    /// Creates a coordinate from its two segments.
    pub fn new(group: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            name: name.into(),
        }
    }

    /// Creates a coordinate, validating both segments.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidCoordinate`] if a segment is empty, contains
    /// `:`, or has leading or trailing whitespace.
    pub fn try_new(group: impl Into<String>, name: impl Into<String>) -> Result<Self, FilterError> {
        let coordinate = Self::new(group, name);
        for (segment, value) in [("group", &coordinate.group), ("name", &coordinate.name)] {
            let reason = if value.is_empty() {
                format!("{segment} is empty")
            } else if value.contains(COORDINATE_SEPARATOR) {
                format!("{segment} contains '{COORDINATE_SEPARATOR}'")
            } else if value.trim() != value.as_str() {
                format!("{segment} has surrounding whitespace")
            } else {
                continue;
            };
            return Err(FilterError::InvalidCoordinate {
                input: coordinate.to_string(),
                reason,
            });
        }
        Ok(coordinate)
    }

    /// The coordinate of the base runtime library that filtering never drops.
    #[must_use]
    pub fn protected() -> Self {
        Self::new(PROTECTED_GROUP, PROTECTED_NAME)
    }

    /// Returns `true` if this is the protected coordinate.
    #[must_use]
    pub fn is_protected(&self) -> bool {
        self.group == PROTECTED_GROUP && self.name == PROTECTED_NAME
    }

    #[must_use]
    pub fn group(&self) -> &str {
        &self.group
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for ModuleCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.group, COORDINATE_SEPARATOR, self.name)
    }
}

/// Parses `group:name`.
///
/// Both segments are validated as in [`ModuleCoordinate::try_new`], so
/// `group:name:extra` is rejected rather than read as a name containing `:`.
impl FromStr for ModuleCoordinate {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (group, name) =
            s.split_once(COORDINATE_SEPARATOR).ok_or_else(|| FilterError::InvalidCoordinate {
                input: s.to_string(),
                reason: format!("missing '{COORDINATE_SEPARATOR}' separator"),
            })?;

        Self::try_new(group, name)
    }
}

/// Unvalidated wire shape of a coordinate.
#[derive(Deserialize)]
struct RawCoordinate {
    group: String,
    name: String,
}

impl TryFrom<RawCoordinate> for ModuleCoordinate {
    type Error = FilterError;

    fn try_from(raw: RawCoordinate) -> Result<Self, Self::Error> {
        Self::try_new(raw.group, raw.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let c: ModuleCoordinate = "org.foo:bar".parse().unwrap();
        assert_eq!(c, ModuleCoordinate::new("org.foo", "bar"));
        assert_eq!(c.to_string(), "org.foo:bar");
    }

    #[test]
    fn test_parse_rejects_separator_in_name() {
        let err = "org.foo:bar:baz".parse::<ModuleCoordinate>().unwrap_err();
        assert!(err.to_string().contains("name contains ':'"));
    }

    #[test]
    fn test_try_new_validates_segments() {
        assert!(ModuleCoordinate::try_new("org.foo", "bar").is_ok());
        assert!(ModuleCoordinate::try_new("", "bar").is_err());
        assert!(ModuleCoordinate::try_new("org.foo", "").is_err());
        assert!(ModuleCoordinate::try_new("org:foo", "bar").is_err());
        assert!(ModuleCoordinate::try_new("org.foo", " bar").is_err());
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(matches!(
            "org.foo".parse::<ModuleCoordinate>(),
            Err(FilterError::InvalidCoordinate { .. })
        ));
        assert!(":bar".parse::<ModuleCoordinate>().is_err());
        assert!("org.foo:".parse::<ModuleCoordinate>().is_err());
    }

    #[test]
    fn test_protected() {
        let protected = ModuleCoordinate::protected();
        assert!(protected.is_protected());
        assert_eq!(protected.to_string(), "com.vaadin:flow-server");
        assert!(!ModuleCoordinate::new("com.vaadin", "flow-server-x").is_protected());
        assert!(!ModuleCoordinate::new("com.vaadinx", "flow-server").is_protected());
    }

    #[test]
    fn test_ordering_is_group_then_name() {
        let mut coordinates = vec![
            ModuleCoordinate::new("org.foo", "a"),
            ModuleCoordinate::new("com.vaadin", "z"),
            ModuleCoordinate::new("com.vaadin", "b"),
        ];
        coordinates.sort();
        let rendered: Vec<_> = coordinates.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, ["com.vaadin:b", "com.vaadin:z", "org.foo:a"]);
    }

    #[test]
    fn test_serde_round_trip_shape() {
        let c = ModuleCoordinate::new("com.vaadin", "checkbox");
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, r#"{"group":"com.vaadin","name":"checkbox"}"#);
        assert_eq!(serde_json::from_str::<ModuleCoordinate>(&json).unwrap(), c);
    }

    #[test]
    fn test_deserialize_validates_segments() {
        let empty = serde_json::from_str::<ModuleCoordinate>(r#"{"group":"","name":""}"#);
        assert!(empty.unwrap_err().to_string().contains("group is empty"));

        let colon = serde_json::from_str::<ModuleCoordinate>(r#"{"group":"org.foo","name":"bar:baz"}"#);
        assert!(colon.unwrap_err().to_string().contains("name contains ':'"));
    }
}
