//! `cpfilter` entry point
//!
//! Parses arguments, runs the selected command and renders failures through
//! [`user_friendly_error`] before exiting with status 1.

use anyhow::Result;
use classpath_filter::cli;
use classpath_filter::core::user_friendly_error;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Set up colored output for Windows
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    match cli.execute() {
        Ok(()) => Ok(()),
        Err(e) => {
            user_friendly_error(e).display();
            std::process::exit(1);
        }
    }
}
