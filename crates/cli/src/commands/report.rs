// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use spotfix_core::{Category, Location, NewReport, Registry, Severity};

use crate::cli::{OutputFormat, ReportArgs};
use crate::display::format_issue_details;
use crate::error::{Error, Result};
use crate::schema::show::IssueDetails;

use super::to_json;

pub fn run(registry: &mut Registry, args: &ReportArgs, format: OutputFormat) -> Result<()> {
    print!("{}", render(registry, args, format)?);
    Ok(())
}

/// Build a [`NewReport`] from command-line arguments.
pub(crate) fn new_report(args: &ReportArgs) -> Result<NewReport> {
    let category: Category = args.category.parse()?;
    let severity: Severity = args.severity.parse()?;

    let reported_by = args.reported_by.trim();
    if reported_by.is_empty() {
        return Err(Error::FieldEmpty { field: "Reporter" });
    }

    let mut location = Location::new(args.location.trim());
    match (args.lat, args.lng) {
        (Some(lat), Some(lng)) => location = location.at(lat, lng),
        (None, None) => {}
        _ => return Err(Error::PartialCoordinates),
    }

    Ok(NewReport::new(category, args.title.trim(), location)
        .with_severity(severity)
        .reported_by(reported_by)
        .with_image(args.image))
}

pub(crate) fn render(
    registry: &mut Registry,
    args: &ReportArgs,
    format: OutputFormat,
) -> Result<String> {
    let issue = registry.report(new_report(args)?)?;
    tracing::info!(id = %issue.id, category = %issue.category, "report filed (not persisted)");

    match format {
        OutputFormat::Text => Ok(format_issue_details(&issue)),
        OutputFormat::Id => Ok(format!("{}\n", issue.id)),
        OutputFormat::Json => to_json(&IssueDetails::new(issue)),
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
