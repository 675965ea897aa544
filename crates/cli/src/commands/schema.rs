// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema command implementation.
//!
//! Outputs JSON Schema definitions for commands that support JSON output.

use crate::cli::SchemaCommand;
use crate::error::Result;
use crate::schema::{list, show, stats};
use schemars::schema_for;

/// Run the schema command.
pub fn run(cmd: SchemaCommand) -> Result<()> {
    print!("{}", render(cmd)?);
    Ok(())
}

pub(crate) fn render(cmd: SchemaCommand) -> Result<String> {
    let schema = match cmd {
        SchemaCommand::List => schema_for!(list::ListOutputJson),
        SchemaCommand::Show => schema_for!(show::IssueDetails),
        SchemaCommand::Stats => schema_for!(stats::StatsOutputJson),
        SchemaCommand::Categories => schema_for!(stats::CategoriesOutputJson),
    };
    super::to_json(&schema)
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
