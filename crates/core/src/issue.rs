// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Core issue types for the SpotFix registry.
//!
//! This module contains the fundamental data types: Issue, Category, Status,
//! Severity and Location.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Kind of civic problem being reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Potholes and other road surface damage.
    Pothole,
    /// Overflowing bins, dumping, uncollected waste.
    Garbage,
    /// Street lighting and exposed wiring.
    Electricity,
    /// Leaks, flooding, blocked drains.
    Water,
    /// Damaged or missing traffic signs.
    Signage,
    /// Anything that fits no other category.
    Other,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Category; 6] = [
        Category::Pothole,
        Category::Garbage,
        Category::Electricity,
        Category::Water,
        Category::Signage,
        Category::Other,
    ];

    /// Returns the string representation used in storage and filters.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Pothole => "pothole",
            Category::Garbage => "garbage",
            Category::Electricity => "electricity",
            Category::Water => "water",
            Category::Signage => "signage",
            Category::Other => "other",
        }
    }

    /// Human-readable label for reports and dashboards.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Pothole => "Potholes",
            Category::Garbage => "Garbage",
            Category::Electricity => "Lighting",
            Category::Water => "Water/Drainage",
            Category::Signage => "Signage",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "pothole" | "potholes" | "road" | "roads" => Ok(Category::Pothole),
            "garbage" | "sanitation" | "waste" => Ok(Category::Garbage),
            "electricity" | "lighting" | "utilities" => Ok(Category::Electricity),
            "water" | "drainage" => Ok(Category::Water),
            "signage" | "signs" | "traffic" => Ok(Category::Signage),
            "other" => Ok(Category::Other),
            _ => Err(Error::InvalidCategory(s.to_string())),
        }
    }
}

/// Lifecycle state of an issue.
///
/// Ordered by progress: an issue only ever moves to a greater status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Submitted by a citizen, nobody has picked it up yet.
    Reported,
    /// Handed to a crew or team.
    Assigned,
    /// Fixed. Terminal.
    Resolved,
}

impl Status {
    /// Every status, in lifecycle order.
    pub const ALL: [Status; 3] = [Status::Reported, Status::Assigned, Status::Resolved];

    /// Returns the string representation used in storage and filters.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Reported => "reported",
            Status::Assigned => "assigned",
            Status::Resolved => "resolved",
        }
    }

    /// Check if a transition from this status to target is valid.
    ///
    /// Only strictly forward moves are allowed; skipping `assigned` counts
    /// as forward.
    pub fn can_transition_to(&self, target: Status) -> bool {
        target > *self
    }

    /// Get valid transition targets as a formatted string.
    pub fn valid_targets(&self) -> String {
        match self {
            Status::Reported => "assigned, resolved (both need an assignee)".to_string(),
            Status::Assigned => "resolved".to_string(),
            Status::Resolved => "(none, resolved is final)".to_string(),
        }
    }

    /// Returns true for statuses that require an assignee.
    pub fn requires_assignee(&self) -> bool {
        !matches!(self, Status::Reported)
    }

    /// Returns true if this is the terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Status::Resolved)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Status {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "reported" | "pending" => Ok(Status::Reported),
            "assigned" | "in-progress" | "in_progress" => Ok(Status::Assigned),
            "resolved" => Ok(Status::Resolved),
            _ => Err(Error::InvalidStatus(s.to_string())),
        }
    }
}

/// How urgently an issue needs attention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    /// Every severity, lowest first.
    pub const ALL: [Severity; 3] = [Severity::Low, Severity::Medium, Severity::High];

    /// Returns the string representation used in storage and filters.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Severity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Severity::Low),
            "medium" => Ok(Severity::Medium),
            "high" => Ok(Severity::High),
            _ => Err(Error::InvalidSeverity(s.to_string())),
        }
    }
}

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Where an issue was observed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Location {
    /// Free-text address as entered by the reporter.
    pub address: String,
    /// Optional map position.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
}

impl Location {
    /// Creates a location with an address and no coordinates.
    pub fn new(address: impl Into<String>) -> Self {
        Location {
            address: address.into(),
            coordinates: None,
        }
    }

    /// Attaches a coordinate pair (builder pattern).
    pub fn at(mut self, lat: f64, lng: f64) -> Self {
        self.coordinates = Some(Coordinates { lat, lng });
        self
    }
}

/// A reported civic problem tracked through its status lifecycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Issue {
    /// Tracking identifier (format: `SF-{hash}`).
    pub id: String,
    /// Short summary of the problem.
    pub title: String,
    /// Kind of problem.
    pub category: Category,
    /// Current lifecycle state.
    pub status: Status,
    /// How urgent the problem is.
    pub severity: Severity,
    /// Where the problem is.
    pub location: Location,
    /// Who submitted the report.
    pub reported_by: String,
    /// When the report was submitted.
    pub reported_at: DateTime<Utc>,
    /// Crew or team handling the issue. Set iff status is not `reported`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    /// Whether the report came with a photo.
    #[serde(default)]
    pub has_image: bool,
    /// When the issue left `reported`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_at: Option<DateTime<Utc>>,
    /// When the issue reached `resolved`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved_at: Option<DateTime<Utc>>,
}

impl Issue {
    /// Creates a freshly reported issue with medium severity and no image.
    pub fn new(
        id: String,
        title: String,
        category: Category,
        location: Location,
        reported_at: DateTime<Utc>,
    ) -> Self {
        Issue {
            id,
            title,
            category,
            status: Status::Reported,
            severity: Severity::Medium,
            location,
            reported_by: String::new(),
            reported_at,
            assigned_to: None,
            has_image: false,
            assigned_at: None,
            resolved_at: None,
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

    /// Returns true while the issue still needs work.
    pub fn is_open(&self) -> bool {
        !self.status.is_terminal()
    }

    /// Checks the record-level invariants that hold for every stored issue.
    ///
    /// `assigned_to` must be present (and non-blank) exactly when the status
    /// requires an assignee, and the lifecycle timestamps must agree with the
    /// status.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(Error::InvalidInput("issue id cannot be empty".to_string()));
        }
        let has_assignee = self
            .assigned_to
            .as_deref()
            .is_some_and(|a| !a.trim().is_empty());
        match (self.status.requires_assignee(), has_assignee) {
            (true, false) => {
                return Err(Error::AssigneeRequired {
                    id: self.id.clone(),
                    status: self.status.to_string(),
                });
            }
            (false, true) => {
                return Err(Error::InvalidInput(format!(
                    "issue {} is reported but already has an assignee",
                    self.id
                )));
            }
            _ => {}
        }
        self.validate_timestamps()
    }

    /// `assigned_at` only once the issue left `reported`, `resolved_at` only
    /// when `resolved`, and neither before `reported_at` or each other.
    fn validate_timestamps(&self) -> Result<()> {
        if self.status == Status::Reported && self.assigned_at.is_some() {
            return Err(Error::InvalidInput(format!(
                "issue {} is reported but has an assigned_at timestamp",
                self.id
            )));
        }
        if self.status != Status::Resolved && self.resolved_at.is_some() {
            return Err(Error::InvalidInput(format!(
                "issue {} is {} but has a resolved_at timestamp",
                self.id, self.status
            )));
        }
        let earliest = self.assigned_at.unwrap_or(self.reported_at);
        let out_of_order = self.assigned_at.is_some_and(|at| at < self.reported_at)
            || self.resolved_at.is_some_and(|at| at < earliest);
        if out_of_order {
            return Err(Error::InvalidInput(format!(
                "issue {} has lifecycle timestamps out of order\n  hint: reported_at <= assigned_at <= resolved_at",
                self.id
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "issue_tests.rs"]
mod tests;
