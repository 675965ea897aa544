// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod list;
pub mod report;
pub mod schema;
pub mod show;
pub mod stats;
pub mod update;

use std::path::Path;

use serde::Serialize;
use spotfix_core::{dataset, Issue, Registry};

use crate::config::Config;
use crate::error::Result;

/// Load the registry for this invocation.
///
/// `--data` wins over the config's `data`; with neither, the built-in demo
/// records are used.
pub fn open_registry(data: Option<&Path>, config: &Config) -> Result<Registry> {
    match data.or(config.data.as_deref()) {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading dataset");
            Ok(dataset::load(path)?)
        }
        None => {
            tracing::debug!("no dataset configured, using demo records");
            Ok(dataset::demo())
        }
    }
}

/// Pretty-printed JSON followed by a newline.
pub(crate) fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(format!("{}\n", serde_json::to_string_pretty(value)?))
}

/// Space-separated issue IDs followed by a newline, or nothing if empty.
pub(crate) fn format_ids(issues: &[Issue]) -> String {
    if issues.is_empty() {
        return String::new();
    }
    let ids: Vec<&str> = issues.iter().map(|i| i.id.as_str()).collect();
    format!("{}\n", ids.join(" "))
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
