// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use spotfix_core::{dataset, Category, Location, Registry, Status};
use yare::parameterized;

fn strip_ansi(s: &str) -> String {
    let mut out = String::new();
    let mut in_escape = false;
    for c in s.chars() {
        match (in_escape, c) {
            (false, '\x1b') => in_escape = true,
            (true, 'm') => in_escape = false,
            (true, _) => {}
            (false, c) => out.push(c),
        }
    }
    out
}

fn demo_issue(id: &str) -> Issue {
    dataset::demo().get(id).cloned().unwrap()
}

#[test]
fn issue_line_with_assignee() {
    let line = strip_ansi(&format_issue_line(&demo_issue("SF-ABC123")));
    assert_eq!(
        line,
        "- [pothole, high] (assigned, @Road Crew #3) SF-ABC123: Large pothole on Main Street"
    );
}

#[test]
fn issue_line_without_assignee() {
    let line = strip_ansi(&format_issue_line(&demo_issue("SF-GHI789")));
    assert_eq!(
        line,
        "- [electricity, medium] (reported) SF-GHI789: Broken streetlight"
    );
}

#[test]
fn details_include_location_and_next_steps() {
    let text = strip_ansi(&format_issue_details(&demo_issue("SF-GHI789")));
    assert!(text.starts_with("[electricity] SF-GHI789\n"));
    assert!(text.contains("Location: Oak Avenue (40.7505, -73.9934)\n"));
    assert!(text.contains("Reported: 2024-01-09 08:45 by Mike Wilson\n"));
    assert!(text.contains("Next: assigned, resolved"));
    assert!(!text.contains("Assigned:"));
    assert!(!text.contains("Photo:"));
}

#[test]
fn details_of_resolved_issue_have_no_next_step() {
    let text = strip_ansi(&format_issue_details(&demo_issue("SF-DEF456")));
    assert!(text.contains("Assigned: Sanitation Team A\n"));
    assert!(text.contains("Photo: attached\n"));
    assert!(!text.contains("Next:"));
}

#[test]
fn details_show_transition_timestamps() {
    let mut registry = dataset::demo();
    let at = chrono::DateTime::parse_from_rfc3339("2024-01-10T09:00:00Z")
        .unwrap()
        .with_timezone(&chrono::Utc);
    let issue = registry
        .update_status_at("SF-GHI789", Status::Resolved, Some("Lighting Crew"), at)
        .unwrap();

    let text = strip_ansi(&format_issue_details(&issue));
    assert!(text.contains("Assigned: Lighting Crew at 2024-01-10 09:00\n"));
    assert!(text.contains("Resolved: 2024-01-10 09:00\n"));
}

#[test]
fn details_without_coordinates_or_reporter() {
    let mut registry = Registry::new();
    let issue = registry
        .report(spotfix_core::NewReport::new(
            Category::Water,
            "Leak",
            Location::new("Pine Road"),
        ))
        .unwrap();
    let text = strip_ansi(&format_issue_details(&issue));
    assert!(text.contains("Location: Pine Road\n"));
    assert!(!text.contains(" by "));
}

#[test]
fn summary_lists_counts_and_rate() {
    let text = strip_ansi(&format_summary(&dataset::demo().summary()));
    assert!(text.contains("  total     4\n"));
    assert!(text.contains("  reported  1\n"));
    assert!(text.contains("  assigned  2\n"));
    assert!(text.contains("  resolved  1\n"));
    assert!(text.contains("  high      2\n"));
    assert!(text.contains("Resolution rate: 25%\n"));
}

#[test]
fn summary_of_empty_registry() {
    let text = strip_ansi(&format_summary(&Registry::new().summary()));
    assert!(text.contains("  total     0\n"));
    assert!(text.contains("Resolution rate: 0%\n"));
    assert!(text.contains("Avg response: n/a\n"));
}

#[parameterized(
    zero = { 0, 0 },
    quarter = { 25, 5 },
    rounds_up = { 33, 7 },
    half = { 50, 10 },
    full = { 100, 20 },
    over = { 150, 20 },
)]
fn bar_fills_proportionally(percentage: u32, filled: usize) {
    let b = bar(percentage);
    assert_eq!(b.len(), BAR_WIDTH);
    assert_eq!(b.chars().filter(|c| *c == '#').count(), filled);
}

#[test]
fn breakdown_rows_are_aligned() {
    let text = format_breakdown(&dataset::demo().category_breakdown());
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("Potholes "));
    assert!(lines.iter().all(|l| l.ends_with("  1 (25%)")));
    let bar_starts: Vec<usize> = lines.iter().map(|l| l.find(['#', '.']).unwrap()).collect();
    assert!(bar_starts.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn breakdown_of_nothing() {
    assert_eq!(format_breakdown(&[]), "No issues.\n");
}

#[test]
fn hotspots_are_numbered() {
    let hotspots = vec![
        Hotspot {
            address: "Main Street".to_string(),
            reports: 3,
        },
        Hotspot {
            address: "Oak Avenue".to_string(),
            reports: 1,
        },
    ];
    assert_eq!(
        format_hotspots(&hotspots),
        " 1. Main Street (3 reports)\n 2. Oak Avenue (1 report)\n"
    );
    assert_eq!(format_hotspots(&[]), "No locations.\n");
}
