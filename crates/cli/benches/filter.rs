// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Benchmarks for criteria parsing, filtering and aggregation.

#![allow(clippy::expect_used)]

use chrono::{Duration, TimeZone, Utc};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use spotfix_core::{Category, Criteria, Issue, Location, Registry, Severity, Status};

fn criteria_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("criteria_parsing");

    let inputs = [
        ("single", "status=assigned"),
        ("all_fields", "category=pothole,status=reported,severity=high"),
        ("sentinels", "category=all,status=all,severity=all"),
        ("aliases", "category=roads,status=in-progress,priority=high"),
    ];

    for (name, input) in inputs {
        group.bench_with_input(BenchmarkId::new("from_str", name), input, |b, i| {
            b.iter(|| i.parse::<Criteria>())
        });
    }
    group.finish();
}

fn registry_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry_queries");

    for size in [100, 10_000] {
        let registry = build_registry(size);
        let narrow = Criteria::any()
            .category(Category::Water)
            .status(Status::Reported)
            .severity(Severity::High);

        group.bench_with_input(BenchmarkId::new("filter_any", size), &registry, |b, r| {
            b.iter(|| r.filter(&Criteria::any()))
        });
        group.bench_with_input(BenchmarkId::new("filter_narrow", size), &registry, |b, r| {
            b.iter(|| r.filter(&narrow))
        });
        group.bench_with_input(BenchmarkId::new("status_counts", size), &registry, |b, r| {
            b.iter(|| r.status_counts())
        });
        group.bench_with_input(
            BenchmarkId::new("category_breakdown", size),
            &registry,
            |b, r| b.iter(|| r.category_breakdown()),
        );
        group.bench_with_input(BenchmarkId::new("hotspots", size), &registry, |b, r| {
            b.iter(|| r.location_hotspots(5))
        });
    }
    group.finish();
}

/// A registry of `size` issues spread over every category, status and
/// severity, at 50 distinct addresses.
fn build_registry(size: usize) -> Registry {
    let start = Utc
        .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
        .single()
        .expect("valid date");

    let issues = (0..size).map(|n| {
        let status = Status::ALL[n % Status::ALL.len()];
        let mut issue = Issue::new(
            format!("SF-{n:06}"),
            format!("Issue {n}"),
            Category::ALL[n % Category::ALL.len()],
            Location::new(format!("{} Main Street", n % 50)),
            start + Duration::minutes(n as i64),
        )
        .with_severity(Severity::ALL[(n / 7) % Severity::ALL.len()]);
        issue.status = status;
        if status.requires_assignee() {
            issue.assigned_to = Some(format!("Crew {}", n % 7));
        }
        issue
    });

    Registry::from_issues(issues).expect("valid issues")
}

criterion_group!(benches, criteria_parsing, registry_queries);
criterion_main!(benches);
