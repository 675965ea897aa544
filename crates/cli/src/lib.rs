// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! spotfix - command-line front end for the SpotFix issue registry.
//!
//! This crate provides the `spotfix` binary: it loads a dataset into a
//! [`spotfix_core::Registry`], runs one query or triage command against it,
//! and prints the result as text, JSON or bare IDs.
//!
//! # Main Components
//!
//! - [`Cli`] - clap command-line definition
//! - [`Config`] - TOML configuration (dataset path, defaults, log level)
//! - [`Error`] - Error type wrapping registry errors
//!
//! ```rust,ignore
//! use clap::Parser;
//!
//! let cli = spotfix::Cli::parse_from(["spotfix", "list", "-s", "assigned"]);
//! spotfix::run(cli)?;
//! ```

mod cli;
pub mod colors;
mod commands;
mod display;
pub mod env;
pub mod help;
pub mod logging;
mod schema;

pub mod config;
pub mod error;

pub use cli::{Cli, Command, FilterArgs, OutputArgs, OutputFormat, ReportArgs, SchemaCommand};
pub use config::Config;
pub use error::{Error, Result};

use clap::CommandFactory;
use clap_complete::generate;

use config::SearchPaths;

/// Execute a parsed command line. This is the main entry point for library
/// users and provides a testable way to run commands without process
/// execution.
pub fn run(cli: Cli) -> Result<()> {
    let Cli {
        data,
        config,
        command,
        ..
    } = cli;

    // Completion and schema run without config or dataset
    match &command {
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(*shell, &mut cmd, "spotfix", &mut std::io::stdout());
            return Ok(());
        }
        Command::Schema(cmd) => return commands::schema::run(*cmd),
        _ => {}
    }

    let (config, source) = Config::discover(&SearchPaths::from_process(config.as_deref()))?;
    logging::init(&config);
    match &source {
        Some(path) => tracing::debug!(path = %path.display(), "loaded config"),
        None => tracing::debug!("no config file, using defaults"),
    }

    let mut registry = commands::open_registry(data.as_deref(), &config)?;
    let format = |output: OutputArgs| config.output_format(output.format);

    match command {
        Command::List { filter, output } => commands::list::run(&registry, &filter, format(output)),
        Command::Show { id, output } => commands::show::run(&registry, &id, format(output)),
        Command::Stats { output } => {
            commands::stats::run(&registry, config.hotspot_limit, format(output))
        }
        Command::Categories { output } => {
            commands::stats::run_categories(&registry, format(output))
        }
        Command::Hotspots { limit, output } => commands::stats::run_hotspots(
            &registry,
            limit.unwrap_or(config.hotspot_limit),
            format(output),
        ),
        Command::Queue { output } => commands::list::run_queue(&registry, format(output)),
        Command::Assignments { output } => {
            commands::list::run_assignments(&registry, format(output))
        }
        Command::Update {
            id,
            status,
            assignee,
            output,
        } => commands::update::run(
            &mut registry,
            &id,
            &status,
            assignee.as_deref(),
            format(output),
        ),
        Command::Report(args) => {
            let output = args.output;
            commands::report::run(&mut registry, &args, format(output))
        }
        Command::Completion { .. } | Command::Schema(_) => Ok(()),
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
