// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Dashboard statistics: summary, category breakdown and location hotspots.
//!
//! `-o id` has no natural meaning for aggregates; `stats` prints text for
//! it, while `categories` and `hotspots` print their keys one per line.

use spotfix_core::Registry;

use crate::cli::OutputFormat;
use crate::display::{format_breakdown, format_hotspots, format_summary};
use crate::error::Result;
use crate::schema::stats::{CategoriesOutputJson, HotspotsOutputJson, StatsOutputJson};

use super::to_json;

pub fn run(registry: &Registry, hotspot_limit: usize, format: OutputFormat) -> Result<()> {
    print!("{}", render(registry, hotspot_limit, format)?);
    Ok(())
}

pub fn run_categories(registry: &Registry, format: OutputFormat) -> Result<()> {
    print!("{}", render_categories(registry, format)?);
    Ok(())
}

pub fn run_hotspots(registry: &Registry, limit: usize, format: OutputFormat) -> Result<()> {
    print!("{}", render_hotspots(registry, limit, format)?);
    Ok(())
}

pub(crate) fn render(
    registry: &Registry,
    hotspot_limit: usize,
    format: OutputFormat,
) -> Result<String> {
    let summary = registry.summary();
    match format {
        OutputFormat::Json => to_json(&StatsOutputJson {
            summary,
            hotspots: registry.location_hotspots(hotspot_limit),
        }),
        OutputFormat::Text | OutputFormat::Id => {
            let mut out = format_summary(&summary);
            let hotspots = registry.location_hotspots(hotspot_limit);
            if !hotspots.is_empty() {
                out.push_str(&format!("\n{}\n", crate::colors::header("Hotspots:")));
                out.push_str(&format_hotspots(&hotspots));
            }
            Ok(out)
        }
    }
}

pub(crate) fn render_categories(registry: &Registry, format: OutputFormat) -> Result<String> {
    let categories = registry.category_breakdown();
    match format {
        OutputFormat::Text => Ok(format_breakdown(&categories)),
        OutputFormat::Id => Ok(categories
            .iter()
            .map(|s| format!("{}\n", s.category))
            .collect()),
        OutputFormat::Json => to_json(&CategoriesOutputJson {
            total: registry.len(),
            categories,
        }),
    }
}

pub(crate) fn render_hotspots(
    registry: &Registry,
    limit: usize,
    format: OutputFormat,
) -> Result<String> {
    let hotspots = registry.location_hotspots(limit);
    match format {
        OutputFormat::Text => Ok(format_hotspots(&hotspots)),
        OutputFormat::Id => Ok(hotspots
            .iter()
            .map(|h| format!("{}\n", h.address))
            .collect()),
        OutputFormat::Json => to_json(&HotspotsOutputJson { hotspots }),
    }
}

#[cfg(test)]
#[path = "stats_tests.rs"]
mod tests;
