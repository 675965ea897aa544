// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use spotfix_core::Registry;

use crate::cli::OutputFormat;
use crate::display::format_issue_details;
use crate::error::Result;
use crate::schema::show::IssueDetails;

use super::to_json;

pub fn run(registry: &Registry, id: &str, format: OutputFormat) -> Result<()> {
    print!("{}", render(registry, id, format)?);
    Ok(())
}

pub(crate) fn render(registry: &Registry, id: &str, format: OutputFormat) -> Result<String> {
    let issue = registry.require(id.trim())?;
    match format {
        OutputFormat::Text => Ok(format_issue_details(issue)),
        OutputFormat::Id => Ok(format!("{}\n", issue.id)),
        OutputFormat::Json => to_json(&IssueDetails::new(issue.clone())),
    }
}

#[cfg(test)]
#[path = "show_tests.rs"]
mod tests;
