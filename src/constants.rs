//! Global constants used throughout the classpath filter.
//!
//! The protected coordinate lives here so that every layer refers to the same
//! value: the filter's decision algorithm, the CLI's validation summary and the
//! test fixtures.

/// Group of the base runtime library that is never filtered out.
pub const PROTECTED_GROUP: &str = "com.vaadin";

/// Name of the base runtime library that is never filtered out.
///
/// Together with [`PROTECTED_GROUP`] this identifies `com.vaadin:flow-server`,
/// the library whose classes the frontend build scans for annotations. Dropping
/// it from the classpath would leave the bundler with nothing to generate from.
pub const PROTECTED_NAME: &str = "flow-server";

/// Separator between the group and name segments of a coordinate or pattern.
pub const COORDINATE_SEPARATOR: char = ':';

/// Default configuration file name searched for by the CLI.
pub const DEFAULT_CONFIG_FILE: &str = "classpath-filter.toml";

/// Environment variable that overrides the configuration file location.
pub const CONFIG_ENV_VAR: &str = "CPFILTER_CONFIG";

/// File extension of archives handed to the frontend pipeline.
pub const JAR_EXTENSION: &str = "jar";
