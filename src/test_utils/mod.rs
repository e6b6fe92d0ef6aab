//! Test utilities for the classpath filter
//!
//! Shared by unit tests and, through the `test-utils` feature, by the
//! integration tests under `tests/`.
//!
//! # Example
//!
//! ```rust,ignore
//! use classpath_filter::test_utils::{init_test_logging, sample_dependencies};
//!
//! #[test]
//! fn test_with_logging() {
//!     init_test_logging(None);
//!     assert_eq!(sample_dependencies().len(), 5);
//! }
//! ```

use crate::coordinate::ModuleCoordinate;
use crate::dependency::ResolvedDependency;
use std::path::PathBuf;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Only the first call has an effect. `level` wins over `RUST_LOG`; with
/// neither, no subscriber is installed.
///
/// ```bash
/// RUST_LOG=classpath_filter=trace cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(false)
            .try_init();
    });
}

/// A small runtime classpath: the protected library, two framework
/// components, and two third-party libraries (one of them a class directory).
pub fn sample_dependencies() -> Vec<ResolvedDependency> {
    [
        ("com.vaadin", "flow-server", Some("libs/flow-server-2.4.0.jar")),
        ("com.vaadin", "checkbox", Some("libs/vaadin-checkbox-2.2.0.jar")),
        ("com.vaadin", "button", Some("libs/vaadin-button-2.2.0.jar")),
        ("org.foo", "bar", Some("libs/bar-1.0.jar")),
        ("org.foo", "classes", Some("build/classes/java/main")),
    ]
    .into_iter()
    .map(|(group, name, file)| {
        ResolvedDependency::new(ModuleCoordinate::new(group, name), file.map(PathBuf::from))
    })
    .collect()
}

/// [`sample_dependencies`] rendered in the line-oriented list format.
pub fn sample_dependency_lines() -> String {
    let mut lines = String::from("# runtime classpath\n");
    for dependency in sample_dependencies() {
        lines.push_str(&dependency.coordinate.to_string());
        if let Some(file) = &dependency.file {
            lines.push(':');
            lines.push_str(&file.display().to_string());
        }
        lines.push('\n');
    }
    lines
}
