// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Filter criteria for registry queries.
//!
//! A [`Criteria`] holds one optional constraint per filterable field. Text
//! input uses the sentinel `all` for "no constraint":
//!
//! ```text
//! category=pothole,status=assigned
//! severity=high
//! status=all
//! ```
//!
//! Constrained fields are AND'd together.

use std::str::FromStr;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::issue::{Category, Issue, Severity, Status};

/// Text value meaning "no constraint".
pub const ANY_SENTINEL: &str = "all";

/// A single-field constraint: either unconstrained or an exact value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum Constraint<T> {
    #[default]
    Any,
    Only(T),
}

impl<T: PartialEq> Constraint<T> {
    /// Returns true if `value` satisfies this constraint.
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Constraint::Any => true,
            Constraint::Only(expected) => expected == value,
        }
    }

    /// Returns true if this constraint restricts anything.
    pub fn is_any(&self) -> bool {
        matches!(self, Constraint::Any)
    }
}

impl<T: FromStr<Err = Error>> Constraint<T> {
    /// Parse a text value, where `all` or an empty string means [`Constraint::Any`].
    pub fn parse(value: &str) -> Result<Self> {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case(ANY_SENTINEL) {
            return Ok(Constraint::Any);
        }
        value.parse().map(Constraint::Only)
    }
}

impl<T> From<Option<T>> for Constraint<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Constraint::Only(v),
            None => Constraint::Any,
        }
    }
}

/// Filter configuration for [`Registry::filter`](crate::Registry::filter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Criteria {
    pub category: Constraint<Category>,
    pub status: Constraint<Status>,
    pub severity: Constraint<Severity>,
}

impl Criteria {
    /// Criteria that match every issue.
    pub fn any() -> Self {
        Criteria::default()
    }

    /// Constrain the category (builder pattern).
    pub fn category(mut self, category: Category) -> Self {
        self.category = Constraint::Only(category);
        self
    }

    /// Constrain the status (builder pattern).
    pub fn status(mut self, status: Status) -> Self {
        self.status = Constraint::Only(status);
        self
    }

    /// Constrain the severity (builder pattern).
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = Constraint::Only(severity);
        self
    }

    /// Build criteria from `(field, value)` pairs.
    ///
    /// Recognized fields are `category`, `status` and `severity`. A later pair
    /// for the same field replaces an earlier one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCriteria`] for an unknown field or a value that
    /// does not parse for its field.
    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut criteria = Criteria::any();
        for (field, value) in pairs {
            let field = field.trim().to_lowercase();
            let invalid = |e: Error| Error::InvalidCriteria(format!("{field}: {e}"));
            match field.as_str() {
                "category" => criteria.category = Constraint::parse(value).map_err(invalid)?,
                "status" => criteria.status = Constraint::parse(value).map_err(invalid)?,
                "severity" | "priority" => {
                    criteria.severity = Constraint::parse(value).map_err(invalid)?
                }
                _ => {
                    return Err(Error::InvalidCriteria(format!(
                        "unknown field '{field}'"
                    )))
                }
            }
        }
        Ok(criteria)
    }

    /// Returns true if the issue satisfies every constrained field.
    pub fn matches(&self, issue: &Issue) -> bool {
        self.category.admits(&issue.category)
            && self.status.admits(&issue.status)
            && self.severity.admits(&issue.severity)
    }

    /// Returns true if no field is constrained.
    pub fn is_unconstrained(&self) -> bool {
        self.category.is_any() && self.status.is_any() && self.severity.is_any()
    }
}

impl FromStr for Criteria {
    type Err = Error;

    /// Parse `field=value` pairs separated by commas.
    fn from_str(s: &str) -> Result<Self> {
        let mut pairs = Vec::new();
        for part in s.split(',') {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }
            let (field, value) = part.split_once('=').ok_or_else(|| {
                Error::InvalidCriteria(format!("expected field=value, got '{part}'"))
            })?;
            pairs.push((field, value));
        }
        Criteria::from_pairs(pairs)
    }
}

#[cfg(test)]
#[path = "criteria_tests.rs"]
mod tests;
