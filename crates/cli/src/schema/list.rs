// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema types for `spotfix list` JSON output.

use schemars::JsonSchema;
use serde::Serialize;
use spotfix_core::Issue;

/// JSON output structure for the list, queue and assignments commands.
#[derive(JsonSchema, Serialize)]
pub struct ListOutputJson {
    /// Issues in result order.
    pub issues: Vec<Issue>,
    /// Constraints that were applied, e.g. `status=assigned`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters_applied: Option<Vec<String>>,
}
