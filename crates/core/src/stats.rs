// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Aggregate statistics over a set of issues.
//!
//! All functions are pure: they take a slice of issues and return owned
//! results. Percentages are rounded half-up per item and are never
//! reconciled to sum to 100.

use std::collections::HashMap;

use serde::Serialize;

use crate::issue::{Category, Issue, Severity, Status};

/// Number of issues in each status. Every status is always present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct StatusCounts {
    pub reported: usize,
    pub assigned: usize,
    pub resolved: usize,
}

impl StatusCounts {
    /// Count for a single status.
    pub fn get(&self, status: Status) -> usize {
        match status {
            Status::Reported => self.reported,
            Status::Assigned => self.assigned,
            Status::Resolved => self.resolved,
        }
    }

    /// Sum over all statuses.
    pub fn total(&self) -> usize {
        self.reported + self.assigned + self.resolved
    }

    /// `(status, count)` pairs in lifecycle order.
    pub fn entries(&self) -> [(Status, usize); 3] {
        Status::ALL.map(|s| (s, self.get(s)))
    }

    fn bump(&mut self, status: Status) {
        match status {
            Status::Reported => self.reported += 1,
            Status::Assigned => self.assigned += 1,
            Status::Resolved => self.resolved += 1,
        }
    }
}

/// Number of issues at each severity. Every severity is always present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct SeverityCounts {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
}

impl SeverityCounts {
    /// Count for a single severity.
    pub fn get(&self, severity: Severity) -> usize {
        match severity {
            Severity::Low => self.low,
            Severity::Medium => self.medium,
            Severity::High => self.high,
        }
    }

    /// `(severity, count)` pairs, lowest first.
    pub fn entries(&self) -> [(Severity, usize); 3] {
        Severity::ALL.map(|s| (s, self.get(s)))
    }
}

/// One row of the category breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct CategoryShare {
    pub category: Category,
    pub count: usize,
    /// `round(100 * count / total)`, rounded half-up.
    pub percentage: u32,
}

/// A location ranked by number of reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Hotspot {
    pub address: String,
    pub reports: usize,
}

/// Headline numbers for a dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Summary {
    pub total: usize,
    pub status: StatusCounts,
    pub severity: SeverityCounts,
    /// Percent of issues resolved, rounded half-up. 0 when empty.
    pub resolution_rate: u32,
    /// Mean hours from report to assignment, over issues that were assigned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_response_hours: Option<f64>,
}

/// Integer percentage rounded half-up. Callers guarantee `total > 0`.
pub(crate) fn percent(count: usize, total: usize) -> u32 {
    let rounded = (200 * count + total) / (2 * total);
    u32::try_from(rounded).unwrap_or(u32::MAX)
}

/// Count issues per status.
pub fn status_counts(issues: &[Issue]) -> StatusCounts {
    let mut counts = StatusCounts::default();
    for issue in issues {
        counts.bump(issue.status);
    }
    counts
}

/// Count issues per severity.
pub fn severity_counts(issues: &[Issue]) -> SeverityCounts {
    let mut counts = SeverityCounts::default();
    for issue in issues {
        match issue.severity {
            Severity::Low => counts.low += 1,
            Severity::Medium => counts.medium += 1,
            Severity::High => counts.high += 1,
        }
    }
    counts
}

/// Group issues by category.
///
/// Only categories that occur are listed, ordered by count descending with
/// ties in category declaration order. Empty input yields an empty list.
pub fn category_breakdown(issues: &[Issue]) -> Vec<CategoryShare> {
    let total = issues.len();
    if total == 0 {
        return Vec::new();
    }

    let mut shares: Vec<CategoryShare> = Category::ALL
        .iter()
        .map(|&category| {
            let count = issues.iter().filter(|i| i.category == category).count();
            CategoryShare {
                category,
                count,
                percentage: percent(count, total),
            }
        })
        .filter(|share| share.count > 0)
        .collect();

    // Stable sort keeps declaration order for equal counts
    shares.sort_by(|a, b| b.count.cmp(&a.count));
    shares
}

/// Rank location addresses by number of reports.
///
/// Addresses are compared verbatim after trimming. Ties keep the order in
/// which the address first appeared.
pub fn location_hotspots(issues: &[Issue], limit: usize) -> Vec<Hotspot> {
    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for issue in issues {
        let address = issue.location.address.trim();
        if address.is_empty() {
            continue;
        }
        let count = counts.entry(address).or_insert(0);
        if *count == 0 {
            order.push(address);
        }
        *count += 1;
    }

    let mut hotspots: Vec<Hotspot> = order
        .into_iter()
        .map(|address| Hotspot {
            address: address.to_string(),
            reports: counts.get(address).copied().unwrap_or(0),
        })
        .collect();
    hotspots.sort_by(|a, b| b.reports.cmp(&a.reports));
    hotspots.truncate(limit);
    hotspots
}

/// Mean hours between report and assignment.
///
/// Issues without an `assigned_at` timestamp are ignored. Returns `None` if
/// no issue has one.
pub fn avg_response_hours(issues: &[Issue]) -> Option<f64> {
    let durations: Vec<i64> = issues
        .iter()
        .filter_map(|i| i.assigned_at.map(|at| (at - i.reported_at).num_seconds()))
        .collect();
    if durations.is_empty() {
        return None;
    }
    let total_secs: i64 = durations.iter().sum();
    Some(total_secs as f64 / durations.len() as f64 / 3600.0)
}

/// Build the dashboard summary.
pub fn summary(issues: &[Issue]) -> Summary {
    let total = issues.len();
    let status = status_counts(issues);
    let resolution_rate = if total == 0 {
        0
    } else {
        percent(status.resolved, total)
    };
    Summary {
        total,
        status,
        severity: severity_counts(issues),
        resolution_rate,
        avg_response_hours: avg_response_hours(issues),
    }
}

#[cfg(test)]
#[path = "stats_tests.rs"]
mod tests;
