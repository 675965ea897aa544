// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory issue registry.
//!
//! The [`Registry`] owns the canonical collection of issues. Queries return
//! owned copies in insertion order; the only mutations are intake
//! ([`Registry::insert`], [`Registry::report`]) and forward status changes
//! ([`Registry::update_status`]). Nothing is ever removed.

use std::cmp::Reverse;
use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::criteria::Criteria;
use crate::error::{Error, Result};
use crate::id::unique_tracking_id;
use crate::issue::{Category, Issue, Location, Severity, Status};
use crate::stats::{self, CategoryShare, Hotspot, SeverityCounts, StatusCounts, Summary};

/// A citizen report, before it has a tracking ID.
#[derive(Debug, Clone, PartialEq)]
pub struct NewReport {
    pub title: String,
    pub category: Category,
    pub severity: Severity,
    pub location: Location,
    pub reported_by: String,
    pub has_image: bool,
    pub reported_at: DateTime<Utc>,
}

impl NewReport {
    /// Creates a medium-severity report timestamped now.
    pub fn new(category: Category, title: impl Into<String>, location: Location) -> Self {
        NewReport {
            title: title.into(),
            category,
            severity: Severity::Medium,
            location,
            reported_by: String::new(),
            has_image: false,
            reported_at: Utc::now(),
        }
    }

    /// Sets the severity (builder pattern).
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Sets the reporter (builder pattern).
    pub fn reported_by(mut self, who: impl Into<String>) -> Self {
        self.reported_by = who.into();
        self
    }

    /// Sets the media flag (builder pattern).
    pub fn with_image(mut self, has_image: bool) -> Self {
        self.has_image = has_image;
        self
    }

    /// Sets a specific submission time.
    pub fn with_timestamp(mut self, reported_at: DateTime<Utc>) -> Self {
        self.reported_at = reported_at;
        self
    }
}

/// Owner of the issue collection.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    issues: Vec<Issue>,
    index: HashMap<String, usize>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Registry::default()
    }

    /// Creates a registry from existing records, keeping their order.
    ///
    /// # Errors
    ///
    /// Fails on the first record that is invalid or reuses an ID.
    pub fn from_issues<I>(issues: I) -> Result<Self>
    where
        I: IntoIterator<Item = Issue>,
    {
        let mut registry = Registry::new();
        for issue in issues {
            registry.insert(issue)?;
        }
        Ok(registry)
    }

    /// Adds an existing record to the end of the registry.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateId`] if the ID is taken, or the error from
    /// [`Issue::validate`] if the record breaks the assignment or timestamp invariants.
    pub fn insert(&mut self, issue: Issue) -> Result<&Issue> {
        issue.validate()?;
        if self.index.contains_key(&issue.id) {
            return Err(Error::DuplicateId(issue.id));
        }
        tracing::debug!(id = %issue.id, status = %issue.status, "insert issue");
        let position = self.issues.len();
        self.index.insert(issue.id.clone(), position);
        self.issues.push(issue);
        Ok(&self.issues[position])
    }

    /// Files a new report, assigning it a fresh tracking ID.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the title or address is blank.
    pub fn report(&mut self, report: NewReport) -> Result<Issue> {
        let title = report.title.trim();
        if title.is_empty() {
            return Err(Error::InvalidInput("title cannot be empty".to_string()));
        }
        if report.location.address.trim().is_empty() {
            return Err(Error::InvalidInput(
                "location address cannot be empty".to_string(),
            ));
        }

        let id = unique_tracking_id(title, &report.reported_at, |id| {
            self.index.contains_key(id)
        });
        let issue = Issue::new(
            id,
            title.to_string(),
            report.category,
            report.location,
            report.reported_at,
        )
        .with_severity(report.severity)
        .reported_by(report.reported_by)
        .with_image(report.has_image);

        tracing::debug!(id = %issue.id, category = %issue.category, "new report");
        self.insert(issue).cloned()
    }

    /// Looks up an issue by ID.
    pub fn get(&self, id: &str) -> Option<&Issue> {
        self.index.get(id).and_then(|&i| self.issues.get(i))
    }

    /// Looks up an issue by ID, failing if it does not exist.
    pub fn require(&self, id: &str) -> Result<&Issue> {
        self.get(id)
            .ok_or_else(|| Error::IssueNotFound(id.to_string()))
    }

    /// Number of issues.
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    /// Returns true if the registry holds no issues.
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Iterates issues in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Issue> {
        self.issues.iter()
    }

    /// Read-only view of every issue in insertion order.
    pub fn as_slice(&self) -> &[Issue] {
        &self.issues
    }

    /// Issues matching every constrained field, in insertion order.
    pub fn filter(&self, criteria: &Criteria) -> Vec<Issue> {
        self.issues
            .iter()
            .filter(|issue| criteria.matches(issue))
            .cloned()
            .collect()
    }

    /// Count of issues per status, with every status present.
    pub fn status_counts(&self) -> StatusCounts {
        stats::status_counts(&self.issues)
    }

    /// Count of issues per severity, with every severity present.
    pub fn severity_counts(&self) -> SeverityCounts {
        stats::severity_counts(&self.issues)
    }

    /// Category shares over the whole registry.
    pub fn category_breakdown(&self) -> Vec<CategoryShare> {
        stats::category_breakdown(&self.issues)
    }

    /// Most-reported locations, at most `limit` of them.
    pub fn location_hotspots(&self, limit: usize) -> Vec<Hotspot> {
        stats::location_hotspots(&self.issues, limit)
    }

    /// Dashboard headline numbers.
    pub fn summary(&self) -> Summary {
        stats::summary(&self.issues)
    }

    /// Issues currently with a crew, in insertion order.
    pub fn active_assignments(&self) -> Vec<Issue> {
        self.filter(&Criteria::any().status(Status::Assigned))
    }

    /// Unresolved issues in triage order: highest severity first, then oldest
    /// report first, then insertion order.
    pub fn open_queue(&self) -> Vec<Issue> {
        let mut queue: Vec<Issue> = self.issues.iter().filter(|i| i.is_open()).cloned().collect();
        queue.sort_by_key(|i| (Reverse(i.severity), i.reported_at));
        queue
    }

    /// Move an issue forward in its lifecycle, stamped with the current time.
    ///
    /// See [`Registry::update_status_at`].
    pub fn update_status(
        &mut self,
        id: &str,
        new_status: Status,
        assignee: Option<&str>,
    ) -> Result<Issue> {
        self.update_status_at(id, new_status, assignee, Utc::now())
    }

    /// Move an issue forward in its lifecycle.
    ///
    /// Leaving `reported` requires an assignee. Moving from `assigned` to
    /// `resolved` keeps the current assignee unless a new one is given. A
    /// blank assignee counts as none. The registry is left untouched on any
    /// error.
    ///
    /// # Errors
    ///
    /// - [`Error::IssueNotFound`] if no issue has this ID.
    /// - [`Error::InvalidTransition`] unless `new_status` is strictly after
    ///   the current status.
    /// - [`Error::AssigneeRequired`] if the issue has no assignee and none
    ///   was given.
    /// - [`Error::InvalidInput`] if `at` is earlier than the issue's
    ///   `reported_at` or `assigned_at`.
    pub fn update_status_at(
        &mut self,
        id: &str,
        new_status: Status,
        assignee: Option<&str>,
        at: DateTime<Utc>,
    ) -> Result<Issue> {
        let issue = self
            .index
            .get(id)
            .and_then(|&i| self.issues.get_mut(i))
            .ok_or_else(|| Error::IssueNotFound(id.to_string()))?;

        if !issue.status.can_transition_to(new_status) {
            tracing::debug!(id, from = %issue.status, to = %new_status, "rejected transition");
            return Err(Error::InvalidTransition {
                from: issue.status.to_string(),
                to: new_status.to_string(),
                valid_targets: issue.status.valid_targets(),
            });
        }

        let earliest = issue.assigned_at.unwrap_or(issue.reported_at);
        if at < earliest {
            return Err(Error::InvalidInput(format!(
                "status change for {id} at {at} predates {earliest}"
            )));
        }

        let assignee = match assignee.map(str::trim).filter(|a| !a.is_empty()) {
            Some(a) => a.to_string(),
            None => issue.assigned_to.clone().ok_or_else(|| Error::AssigneeRequired {
                id: id.to_string(),
                status: new_status.to_string(),
            })?,
        };

        if issue.status == Status::Reported {
            issue.assigned_at = Some(at);
        }
        if new_status == Status::Resolved {
            issue.resolved_at = Some(at);
        }
        tracing::debug!(id, from = %issue.status, to = %new_status, assignee = %assignee, "status change");
        issue.status = new_status;
        issue.assigned_to = Some(assignee);

        Ok(issue.clone())
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
