// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use chrono::Duration;
use yare::parameterized;

fn sample(status: Status, assigned_to: Option<&str>) -> Issue {
    let mut issue = Issue::new(
        "SF-TEST01".to_string(),
        "Broken streetlight".to_string(),
        Category::Electricity,
        Location::new("Oak Avenue"),
        Utc::now(),
    );
    issue.status = status;
    issue.assigned_to = assigned_to.map(str::to_string);
    issue
}

// Category parsing tests
#[parameterized(
    pothole = { "pothole", Category::Pothole },
    roads_alias = { "Roads", Category::Pothole },
    garbage = { "garbage", Category::Garbage },
    sanitation_alias = { "Sanitation", Category::Garbage },
    electricity = { "electricity", Category::Electricity },
    lighting_alias = { "lighting", Category::Electricity },
    utilities_alias = { "UTILITIES", Category::Electricity },
    water = { "water", Category::Water },
    signage = { "signage", Category::Signage },
    traffic_alias = { "Traffic", Category::Signage },
    other = { "other", Category::Other },
)]
fn category_from_str_valid(input: &str, expected: Category) {
    assert_eq!(input.parse::<Category>().unwrap(), expected);
}

#[parameterized(
    invalid = { "volcano" },
    empty = { "" },
    all_sentinel = { "all" },
)]
fn category_from_str_invalid(input: &str) {
    assert!(matches!(
        input.parse::<Category>(),
        Err(Error::InvalidCategory(_))
    ));
}

// Status parsing tests
#[parameterized(
    reported = { "reported", Status::Reported },
    pending_alias = { "pending", Status::Reported },
    assigned = { "assigned", Status::Assigned },
    in_progress_alias = { "in-progress", Status::Assigned },
    in_progress_underscore = { "in_progress", Status::Assigned },
    resolved = { "RESOLVED", Status::Resolved },
)]
fn status_from_str_valid(input: &str, expected: Status) {
    assert_eq!(input.parse::<Status>().unwrap(), expected);
}

#[parameterized(
    invalid = { "closed" },
    empty = { "" },
)]
fn status_from_str_invalid(input: &str) {
    assert!(input.parse::<Status>().is_err());
}

#[parameterized(
    low = { "low", Severity::Low },
    medium = { "Medium", Severity::Medium },
    high = { "HIGH", Severity::High },
)]
fn severity_from_str_valid(input: &str, expected: Severity) {
    assert_eq!(input.parse::<Severity>().unwrap(), expected);
}

#[test]
fn severity_from_str_invalid() {
    assert!(matches!(
        "critical".parse::<Severity>(),
        Err(Error::InvalidSeverity(_))
    ));
}

// Valid status transitions
#[parameterized(
    reported_to_assigned = { Status::Reported, Status::Assigned },
    reported_to_resolved = { Status::Reported, Status::Resolved },
    assigned_to_resolved = { Status::Assigned, Status::Resolved },
)]
fn status_transition_valid(from: Status, to: Status) {
    assert!(
        from.can_transition_to(to),
        "{} -> {} should be valid",
        from,
        to
    );
}

// Invalid status transitions
#[parameterized(
    reported_to_reported = { Status::Reported, Status::Reported },
    assigned_to_assigned = { Status::Assigned, Status::Assigned },
    resolved_to_resolved = { Status::Resolved, Status::Resolved },
    assigned_to_reported = { Status::Assigned, Status::Reported },
    resolved_to_assigned = { Status::Resolved, Status::Assigned },
    resolved_to_reported = { Status::Resolved, Status::Reported },
)]
fn status_transition_invalid(from: Status, to: Status) {
    assert!(
        !from.can_transition_to(to),
        "{} -> {} should be invalid",
        from,
        to
    );
}

#[parameterized(
    reported = { Status::Reported, false },
    assigned = { Status::Assigned, false },
    resolved = { Status::Resolved, true },
)]
fn status_is_terminal(status: Status, expected: bool) {
    assert_eq!(status.is_terminal(), expected);
}

#[test]
fn severity_orders_low_to_high() {
    assert!(Severity::Low < Severity::Medium);
    assert!(Severity::Medium < Severity::High);
}

#[test]
fn category_labels_match_dashboard_wording() {
    assert_eq!(Category::Electricity.label(), "Lighting");
    assert_eq!(Category::Water.label(), "Water/Drainage");
    assert_eq!(Category::Pothole.label(), "Potholes");
}

#[test]
fn issue_new_defaults() {
    let now = Utc::now();
    let issue = Issue::new(
        "SF-1".to_string(),
        "Large pothole".to_string(),
        Category::Pothole,
        Location::new("Main Street").at(40.7589, -73.9851),
        now,
    )
    .with_severity(Severity::High)
    .reported_by("John Doe")
    .with_image(true);

    assert_eq!(issue.status, Status::Reported);
    assert_eq!(issue.severity, Severity::High);
    assert_eq!(issue.reported_by, "John Doe");
    assert_eq!(issue.reported_at, now);
    assert!(issue.has_image);
    assert!(issue.assigned_to.is_none());
    assert!(issue.is_open());
    assert_eq!(
        issue.location.coordinates,
        Some(Coordinates {
            lat: 40.7589,
            lng: -73.9851
        })
    );
}

#[parameterized(
    reported_unassigned = { Status::Reported, None },
    assigned_with_crew = { Status::Assigned, Some("Road Crew #3") },
    resolved_with_crew = { Status::Resolved, Some("Sanitation Team A") },
)]
fn issue_validate_ok(status: Status, assignee: Option<&str>) {
    assert!(sample(status, assignee).validate().is_ok());
}

#[parameterized(
    assigned_without_crew = { Status::Assigned, None },
    resolved_blank_crew = { Status::Resolved, Some("  ") },
)]
fn issue_validate_missing_assignee(status: Status, assignee: Option<&str>) {
    assert!(matches!(
        sample(status, assignee).validate(),
        Err(Error::AssigneeRequired { .. })
    ));
}

#[test]
fn issue_validate_reported_with_assignee() {
    assert!(matches!(
        sample(Status::Reported, Some("Road Crew #3")).validate(),
        Err(Error::InvalidInput(_))
    ));
}

fn stamped(status: Status, assigned_after: Option<i64>, resolved_after: Option<i64>) -> Issue {
    let crew = status.requires_assignee().then_some("Road Crew #3");
    let mut issue = sample(status, crew);
    let reported = issue.reported_at;
    issue.assigned_at = assigned_after.map(|h| reported + Duration::hours(h));
    issue.resolved_at = resolved_after.map(|h| reported + Duration::hours(h));
    issue
}

#[parameterized(
    reported_bare = { Status::Reported, None, None },
    assigned_stamped = { Status::Assigned, Some(2), None },
    assigned_legacy = { Status::Assigned, None, None },
    resolved_in_order = { Status::Resolved, Some(2), Some(5) },
    resolved_same_instant = { Status::Resolved, Some(0), Some(0) },
    resolved_without_assigned_at = { Status::Resolved, None, Some(4) },
)]
fn issue_validate_timestamps_ok(status: Status, assigned: Option<i64>, resolved: Option<i64>) {
    assert!(stamped(status, assigned, resolved).validate().is_ok());
}

#[parameterized(
    reported_with_assigned_at = { Status::Reported, Some(5), None },
    reported_with_resolved_at = { Status::Reported, None, Some(5) },
    assigned_with_resolved_at = { Status::Assigned, Some(1), Some(5) },
    assigned_before_report = { Status::Assigned, Some(-3), None },
    resolved_before_report = { Status::Resolved, None, Some(-1) },
    resolved_before_assigned = { Status::Resolved, Some(4), Some(2) },
)]
fn issue_validate_timestamps_rejected(
    status: Status,
    assigned: Option<i64>,
    resolved: Option<i64>,
) {
    assert!(matches!(
        stamped(status, assigned, resolved).validate(),
        Err(Error::InvalidInput(_))
    ));
}

#[test]
fn status_serialization() {
    let json = serde_json::to_string(&Status::Assigned).unwrap();
    assert_eq!(json, "\"assigned\"");
    let parsed: Status = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, Status::Assigned);
}

#[test]
fn issue_json_omits_empty_optionals() {
    let json = serde_json::to_value(sample(Status::Reported, None)).unwrap();
    assert!(json.get("assigned_to").is_none());
    assert!(json.get("resolved_at").is_none());
    assert!(json["location"].get("coordinates").is_none());
    assert_eq!(json["category"], "electricity");
}

#[test]
fn display_uses_storage_names() {
    assert_eq!(format!("{}", Category::Signage), "signage");
    assert_eq!(format!("{}", Status::Resolved), "resolved");
    assert_eq!(format!("{}", Severity::Medium), "medium");
}
