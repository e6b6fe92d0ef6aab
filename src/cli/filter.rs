//! Filter a resolved dependency list.
//!
//! Reads dependencies from a file (or stdin) and prints the ones the configured
//! filter retains. Text output uses the same `group:name[:path]` line format as
//! the input, so the result can be piped into another `cpfilter filter`.
//!
//! ```bash
//! cpfilter --include 'com.vaadin:*' filter runtime-classpath.txt
//! cpfilter filter deps.json --format json --show-rejected
//! ```

use super::common::{OutputFormat, compile_predicate, read_input};
use crate::config::FilterConfig;
use crate::dependency::{ResolvedDependency, parse_dependency_json, parse_dependency_lines};
use crate::filter::ClasspathPredicate;
use anyhow::{Context, Result};
use clap::Args;
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;

/// Format of the dependency list being read.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum InputFormat {
    /// One `group:name[:path]` entry per line
    Lines,
    /// JSON array of `{group, name, file}` objects
    Json,
}

/// Print the dependencies that survive the classpath filter.
#[derive(Args, Debug)]
pub struct FilterCommand {
    /// Dependency list to read; stdin when omitted or `-`
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Input format; inferred from a `.json` extension when omitted
    #[arg(long, value_enum)]
    pub input_format: Option<InputFormat>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Drop dependencies whose artifact is not a `.jar` before filtering
    #[arg(long)]
    pub jars_only: bool,

    /// Also report rejected dependencies and the rule that rejected them
    #[arg(long)]
    pub show_rejected: bool,
}

impl FilterCommand {
    fn input_format(&self) -> InputFormat {
        self.input_format.unwrap_or_else(|| {
            let is_json = self
                .file
                .as_deref()
                .and_then(|file| file.extension())
                .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
            if is_json { InputFormat::Json } else { InputFormat::Lines }
        })
    }

    pub fn execute(&self, config: &FilterConfig, out: &mut dyn Write) -> Result<()> {
        let predicate = compile_predicate(config)?;
        let input = read_input(self.file.as_deref())?;
        self.execute_on(&input, &predicate, out)
    }

    fn execute_on(&self, input: &str, predicate: &ClasspathPredicate, out: &mut dyn Write) -> Result<()> {
        let mut dependencies = match self.input_format() {
            InputFormat::Lines => parse_dependency_lines(input),
            InputFormat::Json => parse_dependency_json(input),
        }
        .context("Failed to parse dependency list")?;

        if self.jars_only {
            let before = dependencies.len();
            dependencies.retain(ResolvedDependency::is_jar);
            debug!("Dropped {} non-jar dependencies", before - dependencies.len());
        }

        let mut outcome = predicate.filter_dependencies(dependencies);
        if !self.show_rejected {
            outcome.rejected.clear();
        }

        match self.format {
            OutputFormat::Text => {
                for dependency in &outcome.retained {
                    writeln!(out, "{}", to_line(dependency))?;
                }
                for rejected in &outcome.rejected {
                    writeln!(out, "# {}  {}", to_line(&rejected.dependency), rejected.decision)?;
                }
            }
            OutputFormat::Json => {
                if self.show_rejected {
                    writeln!(out, "{}", serde_json::to_string_pretty(&outcome)?)?;
                } else {
                    writeln!(out, "{}", serde_json::to_string_pretty(&outcome.retained)?)?;
                }
            }
        }

        Ok(())
    }
}

fn to_line(dependency: &ResolvedDependency) -> String {
    match &dependency.file {
        Some(file) => format!("{}:{}", dependency.coordinate, file.display()),
        None => dependency.coordinate.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::ClasspathFilter;

    const DEPENDENCIES: &str = "\
com.vaadin:flow-server:libs/flow-server.jar
com.vaadin:checkbox:libs/checkbox.jar
org.foo:bar:libs/bar.jar
org.foo:classes:build/classes
";

    fn command(format: OutputFormat) -> FilterCommand {
        FilterCommand {
            file: None,
            input_format: None,
            format,
            jars_only: false,
            show_rejected: false,
        }
    }

    fn run(command: &FilterCommand, input: &str, exclude: &str) -> String {
        let mut filter = ClasspathFilter::new();
        filter.exclude(exclude).unwrap();
        let mut out = Vec::new();
        command.execute_on(input, &filter.to_predicate(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_text_output_is_line_format() {
        let output = run(&command(OutputFormat::Text), DEPENDENCIES, "org.foo:*");
        assert_eq!(
            output,
            "com.vaadin:flow-server:libs/flow-server.jar\ncom.vaadin:checkbox:libs/checkbox.jar\n"
        );
        assert_eq!(parse_dependency_lines(&output).unwrap().len(), 2);
    }

    #[test]
    fn test_show_rejected_as_comments() {
        let mut cmd = command(OutputFormat::Text);
        cmd.show_rejected = true;
        let output = run(&cmd, DEPENDENCIES, "com.vaadin:*");

        assert!(output.contains("com.vaadin:flow-server:libs/flow-server.jar\n"));
        assert!(output.contains(
            "# com.vaadin:checkbox:libs/checkbox.jar  rejected (excluded by 'com.vaadin:*')"
        ));
        // Rejected entries are comments, so the output still parses
        assert_eq!(parse_dependency_lines(&output).unwrap().len(), 3);
    }

    #[test]
    fn test_jars_only() {
        let mut cmd = command(OutputFormat::Text);
        cmd.jars_only = true;
        let output = run(&cmd, DEPENDENCIES, "none:none");

        assert!(!output.contains("build/classes"));
        assert_eq!(output.lines().count(), 3);
    }

    #[test]
    fn test_json_input_and_output() {
        let mut cmd = command(OutputFormat::Json);
        cmd.input_format = Some(InputFormat::Json);
        let input = r#"[{"group": "org.foo", "name": "bar"}, {"group": "com.vaadin", "name": "checkbox"}]"#;
        let output = run(&cmd, input, "org.foo:*");

        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json, serde_json::json!([{"group": "com.vaadin", "name": "checkbox"}]));
    }

    #[test]
    fn test_json_input_text_output_reads_back() {
        let mut cmd = command(OutputFormat::Text);
        cmd.input_format = Some(InputFormat::Json);
        let input = r#"[
            {"group": "com.vaadin", "name": "checkbox", "file": "C:\\libs\\checkbox.jar"},
            {"group": "org.foo", "name": "bar"}
        ]"#;
        let output = run(&cmd, input, "none:none");

        assert_eq!(parse_dependency_lines(&output).unwrap(), parse_dependency_json(input).unwrap());
    }

    #[test]
    fn test_json_input_with_separator_in_name_fails() {
        let mut cmd = command(OutputFormat::Text);
        cmd.input_format = Some(InputFormat::Json);
        let input = r#"[{"group": "", "name": ""}, {"group": "org.foo", "name": "bar:baz"}]"#;

        let mut out = Vec::new();
        let err = cmd.execute_on(input, &ClasspathFilter::new().to_predicate(), &mut out).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<crate::core::FilterError>(),
            Some(crate::core::FilterError::JsonError(_))
        ));
        assert!(out.is_empty());
    }

    #[test]
    fn test_json_outcome_with_rejected() {
        let mut cmd = command(OutputFormat::Json);
        cmd.show_rejected = true;
        let output = run(&cmd, "org.foo:bar\n", "org.foo:*");

        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["retained"], serde_json::json!([]));
        assert_eq!(json["rejected"][0]["decision"], "excluded");
        assert_eq!(json["rejected"][0]["pattern"], "org.foo:*");
    }

    #[test]
    fn test_input_format_inferred_from_extension() {
        let mut cmd = command(OutputFormat::Text);
        cmd.file = Some(PathBuf::from("deps.JSON"));
        assert_eq!(cmd.input_format(), InputFormat::Json);

        cmd.file = Some(PathBuf::from("deps.txt"));
        assert_eq!(cmd.input_format(), InputFormat::Lines);

        cmd.input_format = Some(InputFormat::Json);
        assert_eq!(cmd.input_format(), InputFormat::Json);
    }
}
