// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod args;

use std::path::PathBuf;

use crate::colors;
use crate::help;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

pub use args::{FilterArgs, OutputArgs, ReportArgs};

/// Parse a string that must not be empty or whitespace-only.
fn non_empty_string(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("cannot be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    #[value(alias = "ids")]
    Id,
}

#[derive(Parser)]
#[command(name = "spotfix")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(disable_version_flag = true)]
#[command(about = "Query and triage civic issue reports")]
#[command(
    long_about = "Query and triage civic issue reports.\n\n\
    Filter reports by category, status and severity, view dashboard statistics, \
    and try status changes against a dataset without modifying it."
)]
#[command(help_template = help::template())]
#[command(before_help = help::commands())]
#[command(after_help = help::quickstart())]
#[command(styles = help::styles())]
// Allow the unit type field pattern which is required for clap's ArgAction::Version/Help
#[allow(clippy::manual_non_exhaustive)]
pub struct Cli {
    /// JSON Lines dataset to load (defaults to the built-in demo data)
    #[arg(long, global = true, value_name = "path")]
    pub data: Option<PathBuf>,

    /// Config file to use instead of discovery
    #[arg(long, global = true, value_name = "path")]
    pub config: Option<PathBuf>,

    /// Print version
    #[arg(short = 'v', short_alias = 'V', long = "version", action = clap::ArgAction::Version)]
    version: (),

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    // ─────────────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────────────
    /// List issues matching filter criteria
    #[command(after_help = colors::examples("\
Examples:
  spotfix list                        List every issue
  spotfix list -s assigned            List assigned issues
  spotfix list -c pothole -S high     List high-severity potholes
  spotfix list -s all -c water        \"all\" leaves a field unconstrained
  spotfix list -q \"status=reported\"   Filter with a criteria expression
  spotfix list -o json                Output in JSON format
  spotfix list -o id                  Output only IDs (space-separated)"))]
    List {
        #[command(flatten)]
        filter: FilterArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Show issue details
    #[command(arg_required_else_help = true)]
    Show {
        /// Issue ID
        id: String,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Show dashboard statistics
    Stats {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Show the share of issues in each category
    Categories {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Show the locations with the most reports
    Hotspots {
        /// Maximum number of locations (defaults to config hotspot_limit)
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Show open issues, most severe and oldest first
    Queue {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Show assigned issues and who is handling them
    Assignments {
        #[command(flatten)]
        output: OutputArgs,
    },

    // ─────────────────────────────────────────────────────────────────────────
    // Triage (results are printed, the dataset is not modified)
    // ─────────────────────────────────────────────────────────────────────────
    /// Move an issue to a later status
    #[command(
        arg_required_else_help = true,
        after_help = colors::examples("\
Examples:
  spotfix update SF-GHI789 assigned -a \"Lighting Crew\"   Assign a reported issue
  spotfix update SF-ABC123 resolved                      Resolve, keeping the assignee
  spotfix update SF-GHI789 resolved -a \"Lighting Crew\"   Assign and resolve at once")
    )]
    Update {
        /// Issue ID
        id: String,

        /// Target status (reported, assigned, resolved)
        status: String,

        /// Crew or team taking the issue
        #[arg(long, short)]
        assignee: Option<String>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Submit a new report
    #[command(
        arg_required_else_help = true,
        after_help = colors::examples("\
Examples:
  spotfix report pothole \"Deep pothole\" -l \"Main Street\"          Report with defaults
  spotfix report water \"Burst main\" -l \"Oak Avenue\" -S high       Report a high-severity leak
  spotfix report garbage \"Bin\" -l \"Park\" --lat 40.7 --lng -73.9   Report with coordinates")
    )]
    Report(ReportArgs),

    // ─────────────────────────────────────────────────────────────────────────
    // Setup
    // ─────────────────────────────────────────────────────────────────────────
    /// Generate shell completions
    #[command(arg_required_else_help = true)]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Output JSON Schema for commands with JSON output
    ///
    /// Use these schemas to validate JSON output or generate type definitions.
    #[command(
        subcommand,
        after_help = colors::examples("\
Examples:
  spotfix schema list    Output schema for 'spotfix list -o json'
  spotfix schema show    Output schema for 'spotfix show <id> -o json'

Available schemas: list, show, stats, categories")
    )]
    Schema(SchemaCommand),
}

/// Schema output commands.
#[derive(Subcommand, Clone, Copy, Debug)]
pub enum SchemaCommand {
    /// Output JSON Schema for 'spotfix list' JSON output
    List,
    /// Output JSON Schema for 'spotfix show' JSON output
    Show,
    /// Output JSON Schema for 'spotfix stats' JSON output
    Stats,
    /// Output JSON Schema for 'spotfix categories' JSON output
    Categories,
}
