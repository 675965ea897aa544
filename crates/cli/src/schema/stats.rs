// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema types for `spotfix stats`, `categories` and `hotspots` JSON output.

use schemars::JsonSchema;
use serde::Serialize;
use spotfix_core::{CategoryShare, Hotspot, Summary};

/// Dashboard statistics.
#[derive(JsonSchema, Serialize)]
pub struct StatsOutputJson {
    #[serde(flatten)]
    pub summary: Summary,
    /// Locations with the most reports.
    pub hotspots: Vec<Hotspot>,
}

/// Category breakdown.
#[derive(JsonSchema, Serialize)]
pub struct CategoriesOutputJson {
    /// Number of issues the percentages are taken over.
    pub total: usize,
    /// Categories that occur, most frequent first.
    pub categories: Vec<CategoryShare>,
}

/// Location ranking.
#[derive(JsonSchema, Serialize)]
pub struct HotspotsOutputJson {
    pub hotspots: Vec<Hotspot>,
}
