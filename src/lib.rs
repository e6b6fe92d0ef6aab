//! classpath-filter - decide which dependencies reach the frontend bundle
//!
//! A frontend build plugin scans the project's runtime classpath for annotated
//! classes and bundles the web components they reference. Not every jar on the
//! classpath is worth scanning, so the plugin lets the build declare which
//! modules to consider. This crate is that decision engine.
//!
//! # Architecture Overview
//!
//! Three layers, leaves first:
//!
//! - [`pattern::GlobMatcher`] - a `*` / `?` glob over one string
//! - [`predicate::ModuleIdentifierPredicate`] - a `group:name` pair of globs
//!   over a [`coordinate::ModuleCoordinate`]
//! - [`filter::ClasspathFilter`] - include and exclude rules, compiled with
//!   `to_predicate()` into an immutable [`filter::ClasspathPredicate`]
//!
//! Excludes win over includes, registering any include turns on allowlist mode,
//! and `com.vaadin:flow-server` is retained no matter what the rules say.
//!
//! # Core Modules
//!
//! - [`pattern`] - Glob compilation and matching
//! - [`predicate`] - `group:name` glob predicates
//! - [`filter`] - Rule accumulation and the decision algorithm
//! - [`coordinate`] - Module coordinates
//! - [`dependency`] - Resolved dependencies and dependency list formats
//!
//! ## Supporting Modules
//! - [`config`] - `classpath-filter.toml` loading and discovery
//! - [`core`] - Error types and user-friendly error rendering
//! - [`cli`] - The `cpfilter` command-line interface
//! - [`constants`] - Protected coordinate and file names
//!
//! # Example
//!
//! ```rust
//! use classpath_filter::coordinate::ModuleCoordinate;
//! use classpath_filter::filter::ClasspathFilter;
//!
//! # fn example() -> classpath_filter::core::Result<()> {
//! let mut filter = ClasspathFilter::new();
//! filter.exclude("com.vaadin:flow-*")?;
//! let keep = filter.to_predicate();
//!
//! assert!(!keep.test(&ModuleCoordinate::new("com.vaadin", "flow-data")));
//! assert!(keep.test(&ModuleCoordinate::new("com.vaadin", "flow-server")));
//! assert!(keep.test(&ModuleCoordinate::new("org.foo", "bar")));
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration Format (classpath-filter.toml)
//!
//! ```toml
//! [classpath]
//! include = ["com.vaadin:*"]
//! exclude = ["com.vaadin:checkbox"]
//! ```

// Core functionality modules
pub mod coordinate;
pub mod dependency;
pub mod filter;
pub mod pattern;
pub mod predicate;

// Supporting modules
pub mod cli;
pub mod config;
pub mod constants;
pub mod core;

// test_utils module is available for both unit tests and integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
