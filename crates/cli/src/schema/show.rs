// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema types for `spotfix show` JSON output.

use schemars::JsonSchema;
use serde::Serialize;
use spotfix_core::{Issue, Status};

/// A single issue with its lifecycle options.
///
/// Also printed by `update` and `report`.
#[derive(JsonSchema, Serialize)]
pub struct IssueDetails {
    #[serde(flatten)]
    pub issue: Issue,
    /// Statuses the issue may move to next.
    pub next_statuses: Vec<Status>,
}

impl IssueDetails {
    pub fn new(issue: Issue) -> Self {
        let next_statuses = Status::ALL
            .into_iter()
            .filter(|s| issue.status.can_transition_to(*s))
            .collect();
        IssueDetails {
            issue,
            next_statuses,
        }
    }
}
