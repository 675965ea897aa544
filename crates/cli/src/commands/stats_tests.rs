// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use spotfix_core::{dataset, Category, Location, NewReport};

fn json(out: &str) -> serde_json::Value {
    serde_json::from_str(out).unwrap()
}

/// Demo data plus two more reports at Main Street & 5th Ave.
fn busy_registry() -> Registry {
    let mut registry = dataset::demo();
    for title in ["Second pothole", "Third pothole"] {
        registry
            .report(NewReport::new(
                Category::Pothole,
                title,
                Location::new("Main Street & 5th Ave"),
            ))
            .unwrap();
    }
    registry
}

#[test]
fn stats_json_flattens_summary() {
    let value = json(&render(&dataset::demo(), 5, OutputFormat::Json).unwrap());
    assert_eq!(value["total"], 4);
    assert_eq!(value["status"]["assigned"], 2);
    assert_eq!(value["severity"]["high"], 2);
    assert_eq!(value["resolution_rate"], 25);
    assert_eq!(value["hotspots"].as_array().unwrap().len(), 4);
}

#[test]
fn stats_respects_hotspot_limit() {
    let value = json(&render(&busy_registry(), 1, OutputFormat::Json).unwrap());
    assert_eq!(
        value["hotspots"],
        serde_json::json!([{ "address": "Main Street & 5th Ave", "reports": 3 }])
    );
}

#[test]
fn stats_text_includes_hotspots() {
    let text = render(&busy_registry(), 2, OutputFormat::Text).unwrap();
    assert!(text.contains("Resolution rate:"));
    assert!(text.contains(" 1. Main Street & 5th Ave (3 reports)"));
    assert!(!text.contains(" 3. "));
}

#[test]
fn stats_of_empty_registry_has_no_hotspot_section() {
    let text = render(&Registry::new(), 5, OutputFormat::Text).unwrap();
    assert!(!text.contains("Hotspots:"));
}

#[test]
fn categories_text_and_ids() {
    let registry = busy_registry();
    let ids = render_categories(&registry, OutputFormat::Id).unwrap();
    assert_eq!(ids, "pothole\ngarbage\nelectricity\nsignage\n");

    let text = render_categories(&registry, OutputFormat::Text).unwrap();
    assert!(text.lines().next().unwrap().starts_with("Potholes"));
    assert!(text.contains("(50%)"));
}

#[test]
fn categories_json_has_total_and_shares() {
    let value = json(&render_categories(&busy_registry(), OutputFormat::Json).unwrap());
    assert_eq!(value["total"], 6);
    assert_eq!(value["categories"][0]["category"], "pothole");
    assert_eq!(value["categories"][0]["count"], 3);
    assert_eq!(value["categories"][0]["percentage"], 50);
    assert_eq!(value["categories"][1]["percentage"], 17);
}

#[test]
fn categories_of_empty_registry() {
    let value = json(&render_categories(&Registry::new(), OutputFormat::Json).unwrap());
    assert_eq!(value["total"], 0);
    assert_eq!(value["categories"], serde_json::json!([]));
}

#[test]
fn hotspots_limit_and_order() {
    let out = render_hotspots(&busy_registry(), 2, OutputFormat::Id).unwrap();
    assert_eq!(out, "Main Street & 5th Ave\nCentral Park East\n");
}

#[test]
fn hotspots_zero_limit_is_empty() {
    let out = render_hotspots(&busy_registry(), 0, OutputFormat::Text).unwrap();
    assert_eq!(out, "No locations.\n");
}
