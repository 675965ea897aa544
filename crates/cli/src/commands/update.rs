// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Status transitions.
//!
//! The transition runs against the loaded registry and the result is
//! printed. The dataset file is never rewritten.

use spotfix_core::{Registry, Status};

use crate::cli::OutputFormat;
use crate::colors;
use crate::error::Result;
use crate::schema::show::IssueDetails;

use super::to_json;

pub fn run(
    registry: &mut Registry,
    id: &str,
    status: &str,
    assignee: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    print!("{}", render(registry, id, status, assignee, format)?);
    Ok(())
}

pub(crate) fn render(
    registry: &mut Registry,
    id: &str,
    status: &str,
    assignee: Option<&str>,
    format: OutputFormat,
) -> Result<String> {
    let target: Status = status.parse()?;
    let id = id.trim();
    let from = registry.require(id)?.status;
    let issue = registry.update_status(id, target, assignee)?;
    tracing::info!(id, from = %from, to = %issue.status, "status updated (not persisted)");

    match format {
        OutputFormat::Text => {
            let mut out = format!(
                "{}: {} -> {}",
                issue.id,
                colors::status(from),
                colors::status(issue.status)
            );
            if let Some(crew) = &issue.assigned_to {
                out.push_str(&format!(" (@{crew})"));
            }
            out.push('\n');
            Ok(out)
        }
        OutputFormat::Id => Ok(format!("{}\n", issue.id)),
        OutputFormat::Json => to_json(&IssueDetails::new(issue)),
    }
}

#[cfg(test)]
#[path = "update_tests.rs"]
mod tests;
