//! Generic configuration parsing utilities.
//!
//! Reads a TOML file and deserializes it into any `DeserializeOwned` type, with
//! the file path attached to both read and parse failures.
//!
//! Example error output:
//! ```text
//! Failed to parse config file: /path/to/classpath-filter.toml
//! Caused by:
//!     invalid type: string "com.vaadin:*", expected a sequence
//! ```

use anyhow::{Context, Result};
use std::path::Path;

/// Parse a TOML configuration file into the specified type.
///
/// # Errors
///
/// Returns an error if the file cannot be read, or if its content is not valid
/// TOML for `T`. The underlying I/O or [`toml::de::Error`] is preserved as the
/// cause.
///
/// # Examples
///
/// ```rust,no_run
/// use classpath_filter::config::parse_config;
/// use serde::Deserialize;
/// use std::path::Path;
///
/// #[derive(Deserialize)]
/// struct Config {
///     name: String,
/// }
///
/// # fn example() -> anyhow::Result<()> {
/// let config: Config = parse_config(Path::new("settings.toml"))?;
/// println!("Loaded {}", config.name);
/// # Ok(())
/// # }
/// ```
pub fn parse_config<T>(path: &Path) -> Result<T>
where
    T: serde::de::DeserializeOwned,
{
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: T = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        use tempfile::tempdir;

        let temp = tempdir().unwrap();
        let config_path = temp.path().join("test.toml");

        #[derive(serde::Deserialize)]
        struct TestConfig {
            name: String,
            value: i32,
        }

        let toml_content = r#"
            name = "test"
            value = 42
        "#;

        std::fs::write(&config_path, toml_content).unwrap();

        let config: TestConfig = parse_config(&config_path).unwrap();
        assert_eq!(config.name, "test");
        assert_eq!(config.value, 42);
    }

    #[test]
    fn test_parse_config_error_names_file() {
        use tempfile::tempdir;

        let temp = tempdir().unwrap();
        let config_path = temp.path().join("invalid.toml");

        #[derive(Debug, serde::Deserialize)]
        struct TestConfig {
            #[allow(dead_code)] // Read by serde only
            name: String,
        }

        std::fs::write(&config_path, "invalid = toml {").unwrap();

        let err = parse_config::<TestConfig>(&config_path).unwrap_err();
        assert!(err.to_string().contains("invalid.toml"));
        assert!(err.downcast_ref::<toml::de::Error>().is_some());
    }

    #[test]
    fn test_parse_config_missing_file() {
        let temp = tempfile::tempdir().unwrap();
        let missing = temp.path().join("missing.toml");

        let err = parse_config::<toml::Table>(&missing).unwrap_err();
        assert!(err.to_string().starts_with("Failed to read config file"));
    }
}
