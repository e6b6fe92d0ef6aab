//! Common utilities shared by CLI commands

use crate::config::FilterConfig;
use crate::filter::ClasspathPredicate;
use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

/// Output format for command results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// Machine-parseable JSON
    Json,
}

/// Builds the predicate shared by `check` and `filter`.
pub fn compile_predicate(config: &FilterConfig) -> Result<ClasspathPredicate> {
    let filter = config.build_filter().context("Failed to build classpath filter")?;
    Ok(filter.to_predicate())
}

/// Reads a file, or stdin when `path` is `None` or `-`.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read dependency list: {}", path.display())),
        _ => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read dependency list from stdin")?;
            Ok(buffer)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_predicate_reports_bad_pattern() {
        let mut config = FilterConfig::default();
        config.extend(vec!["broken".to_string()], Vec::new());

        let err = compile_predicate(&config).unwrap_err();
        assert_eq!(err.to_string(), "Failed to build classpath filter");
    }

    #[test]
    fn test_read_input_from_file() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("deps.txt");
        std::fs::write(&path, "org.foo:bar\n").unwrap();

        assert_eq!(read_input(Some(&path)).unwrap(), "org.foo:bar\n");
        assert!(read_input(Some(&temp.path().join("missing.txt"))).is_err());
    }
}
