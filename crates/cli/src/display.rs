// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use spotfix_core::{CategoryShare, Hotspot, Issue, Summary};

use crate::colors;

/// Width of the category breakdown bar at 100%.
const BAR_WIDTH: usize = 20;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Format a single issue as a one-line summary.
///
/// `- [category, severity] (status, @assignee) id: title`
pub fn format_issue_line(issue: &Issue) -> String {
    let status_display = match &issue.assigned_to {
        Some(assignee) => format!("{}, @{}", colors::status(issue.status), assignee),
        None => colors::status(issue.status),
    };
    format!(
        "- [{}, {}] ({}) {}: {}",
        issue.category,
        colors::severity(issue.severity),
        status_display,
        issue.id,
        issue.title
    )
}

/// Format issue details for the show command.
pub fn format_issue_details(issue: &Issue) -> String {
    let mut out = String::new();

    out.push_str(&format!("[{}] {}\n", issue.category, issue.id));
    out.push_str(&format!("Title: {}\n", issue.title));
    out.push_str(&format!("Status: {}\n", colors::status(issue.status)));
    out.push_str(&format!("Severity: {}\n", colors::severity(issue.severity)));

    out.push_str(&format!("Location: {}", issue.location.address));
    if let Some(c) = issue.location.coordinates {
        out.push_str(&format!(" ({:.4}, {:.4})", c.lat, c.lng));
    }
    out.push('\n');

    out.push_str(&format!(
        "Reported: {}",
        issue.reported_at.format(TIME_FORMAT)
    ));
    if !issue.reported_by.is_empty() {
        out.push_str(&format!(" by {}", issue.reported_by));
    }
    out.push('\n');

    if let Some(assignee) = &issue.assigned_to {
        out.push_str(&format!("Assigned: {assignee}"));
        if let Some(at) = issue.assigned_at {
            out.push_str(&format!(" at {}", at.format(TIME_FORMAT)));
        }
        out.push('\n');
    }
    if let Some(at) = issue.resolved_at {
        out.push_str(&format!("Resolved: {}\n", at.format(TIME_FORMAT)));
    }
    if issue.has_image {
        out.push_str("Photo: attached\n");
    }

    if !issue.status.is_terminal() {
        out.push_str(&format!("\nNext: {}\n", issue.status.valid_targets()));
    }

    out
}

/// Format the dashboard summary.
pub fn format_summary(summary: &Summary) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n", colors::header("Issues:")));
    out.push_str(&format!("  total     {}\n", summary.total));
    for (status, count) in summary.status.entries() {
        let name = status.as_str();
        out.push_str(&format!(
            "  {}{} {}\n",
            colors::status(status),
            " ".repeat(9 - name.len()),
            count
        ));
    }

    out.push_str(&format!("\n{}\n", colors::header("Severity:")));
    for (severity, count) in summary.severity.entries().into_iter().rev() {
        let name = severity.as_str();
        out.push_str(&format!(
            "  {}{} {}\n",
            colors::severity(severity),
            " ".repeat(9 - name.len()),
            count
        ));
    }

    out.push_str(&format!(
        "\nResolution rate: {}%\n",
        summary.resolution_rate
    ));
    match summary.avg_response_hours {
        Some(hours) => out.push_str(&format!("Avg response: {hours:.1}h\n")),
        None => out.push_str("Avg response: n/a\n"),
    }

    out
}

/// Proportional bar for a percentage.
pub fn bar(percentage: u32) -> String {
    let pct = usize::try_from(percentage.min(100)).unwrap_or(100);
    let filled = (pct * BAR_WIDTH + 50) / 100;
    format!("{}{}", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
}

/// Format the category breakdown as aligned rows with bars.
pub fn format_breakdown(shares: &[CategoryShare]) -> String {
    if shares.is_empty() {
        return "No issues.\n".to_string();
    }

    let width = shares
        .iter()
        .map(|s| s.category.label().len())
        .max()
        .unwrap_or(0);

    shares
        .iter()
        .map(|s| {
            format!(
                "{:<width$}  {}  {:>3} ({}%)\n",
                s.category.label(),
                bar(s.percentage),
                s.count,
                s.percentage
            )
        })
        .collect()
}

/// Format location hotspots as a ranked list.
pub fn format_hotspots(hotspots: &[Hotspot]) -> String {
    if hotspots.is_empty() {
        return "No locations.\n".to_string();
    }

    hotspots
        .iter()
        .enumerate()
        .map(|(i, h)| {
            let noun = if h.reports == 1 { "report" } else { "reports" };
            format!("{:>2}. {} ({} {})\n", i + 1, h.address, h.reports, noun)
        })
        .collect()
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
