// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use spotfix_core::{Issue, Registry};

use crate::cli::{FilterArgs, OutputFormat};
use crate::display::format_issue_line;
use crate::error::Result;
use crate::schema::list::ListOutputJson;

use super::{format_ids, to_json};

pub fn run(registry: &Registry, filter: &FilterArgs, format: OutputFormat) -> Result<()> {
    print!("{}", render(registry, filter, format)?);
    Ok(())
}

/// Issues matching the filter flags, in registry order.
pub(crate) fn render(
    registry: &Registry,
    filter: &FilterArgs,
    format: OutputFormat,
) -> Result<String> {
    let criteria = filter.criteria()?;
    let issues = registry.filter(&criteria);
    tracing::debug!(?criteria, matched = issues.len(), "filter");

    let applied = FilterArgs::describe(&criteria);
    let filters_applied = if applied.is_empty() {
        None
    } else {
        Some(applied)
    };
    render_issues(issues, filters_applied, format)
}

/// Open issues, most severe first.
pub fn run_queue(registry: &Registry, format: OutputFormat) -> Result<()> {
    print!("{}", render_issues(registry.open_queue(), None, format)?);
    Ok(())
}

/// Assigned issues with their crews.
pub fn run_assignments(registry: &Registry, format: OutputFormat) -> Result<()> {
    print!(
        "{}",
        render_issues(registry.active_assignments(), None, format)?
    );
    Ok(())
}

pub(crate) fn render_issues(
    issues: Vec<Issue>,
    filters_applied: Option<Vec<String>>,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(issues
            .iter()
            .map(|issue| format!("{}\n", format_issue_line(issue)))
            .collect()),
        OutputFormat::Id => Ok(format_ids(&issues)),
        OutputFormat::Json => to_json(&ListOutputJson {
            issues,
            filters_applied,
        }),
    }
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
