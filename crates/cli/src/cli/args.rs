// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared argument structs for CLI commands.
//!
//! These structs are used with `#[command(flatten)]` to reduce duplication
//! across commands that share common option patterns.

use clap::Args;
use spotfix_core::{Constraint, Criteria};

use super::{non_empty_string, OutputFormat};

/// Filter arguments shared by query commands.
///
/// Each flag accepts `all` to leave its field unconstrained. Flags are
/// applied on top of `--query`, so `-s resolved` overrides `status=` there.
#[derive(Args, Clone, Debug, Default)]
pub struct FilterArgs {
    /// Filter by category (pothole, garbage, electricity, water, signage, other)
    #[arg(long, short)]
    pub category: Option<String>,

    /// Filter by status (reported, assigned, resolved)
    #[arg(long, short)]
    pub status: Option<String>,

    /// Filter by severity (low, medium, high)
    #[arg(long, short = 'S')]
    pub severity: Option<String>,

    /// Criteria expression, e.g. "category=water,status=reported"
    #[arg(long, short)]
    pub query: Option<String>,
}

impl FilterArgs {
    /// Build registry criteria from the parsed flags.
    pub fn criteria(&self) -> spotfix_core::Result<Criteria> {
        let mut criteria = match &self.query {
            Some(query) => query.parse()?,
            None => Criteria::any(),
        };

        let flags = [
            ("category", self.category.as_deref()),
            ("status", self.status.as_deref()),
            ("severity", self.severity.as_deref()),
        ];
        let overrides = Criteria::from_pairs(
            flags
                .iter()
                .filter_map(|(field, value)| value.map(|v| (*field, v))),
        )?;

        if self.category.is_some() {
            criteria.category = overrides.category;
        }
        if self.status.is_some() {
            criteria.status = overrides.status;
        }
        if self.severity.is_some() {
            criteria.severity = overrides.severity;
        }
        Ok(criteria)
    }

    /// Human-readable list of constraints that were applied.
    pub fn describe(criteria: &Criteria) -> Vec<String> {
        let mut applied = Vec::new();
        if let Constraint::Only(c) = criteria.category {
            applied.push(format!("category={c}"));
        }
        if let Constraint::Only(s) = criteria.status {
            applied.push(format!("status={s}"));
        }
        if let Constraint::Only(s) = criteria.severity {
            applied.push(format!("severity={s}"));
        }
        applied
    }
}

/// Output format selection.
#[derive(Args, Clone, Copy, Debug, Default)]
pub struct OutputArgs {
    /// Output format (text, json, id) [default: config output, else text]
    #[arg(long = "output", short = 'o', value_enum)]
    pub format: Option<OutputFormat>,
}

/// Arguments for submitting a report.
#[derive(Args, Clone, Debug)]
pub struct ReportArgs {
    /// Category (pothole, garbage, electricity, water, signage, other)
    pub category: String,

    /// Short summary of the problem
    #[arg(value_parser = non_empty_string)]
    pub title: String,

    /// Street address or landmark
    #[arg(long = "location", short = 'l', value_name = "ADDR", value_parser = non_empty_string)]
    pub location: String,

    /// Severity (low, medium, high)
    #[arg(long, short = 'S', default_value = "medium")]
    pub severity: String,

    /// Name of the person reporting
    #[arg(long = "by", value_name = "NAME", default_value = "anonymous")]
    pub reported_by: String,

    /// Latitude of the problem
    #[arg(long, allow_negative_numbers = true)]
    pub lat: Option<f64>,

    /// Longitude of the problem
    #[arg(long, allow_negative_numbers = true)]
    pub lng: Option<f64>,

    /// The report includes a photo
    #[arg(long)]
    pub image: bool,

    #[command(flatten)]
    pub output: OutputArgs,
}
