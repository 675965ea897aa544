// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Loading issue datasets.
//!
//! Datasets are JSON Lines files, one [`Issue`] per line. They are read
//! once to seed a [`Registry`]; nothing is written back.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use chrono::{DateTime, TimeZone, Utc};
use serde::de::DeserializeOwned;

use crate::error::{Error, Result};
use crate::issue::{Category, Issue, Location, Severity, Status};
use crate::registry::Registry;

/// Parses JSON Lines records from a reader.
///
/// Skips blank lines. A malformed line fails with [`Error::CorruptedData`]
/// naming its 1-based line number.
pub fn parse_lines<T: DeserializeOwned, R: BufRead>(reader: R) -> Result<Vec<T>> {
    let mut records = Vec::new();

    for (n, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let record: T = serde_json::from_str(&line)
            .map_err(|e| Error::CorruptedData(format!("line {}: {}", n + 1, e)))?;
        records.push(record);
    }

    Ok(records)
}

/// Reads all records from a JSON Lines file.
pub fn read_all<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let file = File::open(path)?;
    parse_lines(BufReader::new(file))
}

/// Loads a registry from a JSON Lines dataset.
pub fn load(path: &Path) -> Result<Registry> {
    let issues: Vec<Issue> = read_all(path)?;
    tracing::debug!(path = %path.display(), count = issues.len(), "loaded dataset");
    Registry::from_issues(issues)
}

fn at(day: u32, hour: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, day, hour, min, 0)
        .single()
        .unwrap_or_default()
}

/// The four reports shown on the live map, in map order.
pub fn demo_issues() -> Vec<Issue> {
    let mut pothole = Issue::new(
        "SF-ABC123".to_string(),
        "Large pothole on Main Street".to_string(),
        Category::Pothole,
        Location::new("Main Street & 5th Ave").at(40.7589, -73.9851),
        at(9, 10, 30),
    )
    .with_severity(Severity::High)
    .reported_by("John Doe")
    .with_image(true);
    pothole.status = Status::Assigned;
    pothole.assigned_to = Some("Road Crew #3".to_string());

    let mut garbage = Issue::new(
        "SF-DEF456".to_string(),
        "Overflowing garbage bin".to_string(),
        Category::Garbage,
        Location::new("Central Park East").at(40.7614, -73.9776),
        at(8, 14, 15),
    )
    .reported_by("Sarah Johnson")
    .with_image(true);
    garbage.status = Status::Resolved;
    garbage.assigned_to = Some("Sanitation Team A".to_string());

    let streetlight = Issue::new(
        "SF-GHI789".to_string(),
        "Broken streetlight".to_string(),
        Category::Electricity,
        Location::new("Oak Avenue").at(40.7505, -73.9934),
        at(9, 8, 45),
    )
    .reported_by("Mike Wilson");

    let mut sign = Issue::new(
        "SF-JKL012".to_string(),
        "Damaged stop sign".to_string(),
        Category::Signage,
        Location::new("Elm Street & 3rd Ave").at(40.7648, -73.9808),
        at(8, 16, 20),
    )
    .with_severity(Severity::High)
    .reported_by("Lisa Chen")
    .with_image(true);
    sign.status = Status::Assigned;
    sign.assigned_to = Some("Traffic Safety Unit".to_string());

    vec![pothole, garbage, streetlight, sign]
}

/// A registry seeded with [`demo_issues`].
pub fn demo() -> Registry {
    let mut registry = Registry::new();
    for issue in demo_issues() {
        // Demo records satisfy every invariant; insert cannot fail here.
        if let Err(e) = registry.insert(issue) {
            tracing::warn!("skipping demo record: {}", e);
        }
    }
    registry
}

#[cfg(test)]
#[path = "dataset_tests.rs"]
mod tests;
