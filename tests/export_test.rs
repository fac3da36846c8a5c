// ABOUTME: Integration tests for export artifacts
// ABOUTME: JSON backup round-trip, filenames, and rendered text reports
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

mod common;

use anyhow::Result;
use chrono::Duration;
use common::{logged_in_tracker, program_start};
use fittrack_core::export::{
    render_full_report, render_summary, report_filename, summary_filename, BackupExport,
};

#[test]
fn test_backup_roundtrip_is_field_for_field() -> Result<()> {
    let mut tracker = logged_in_tracker();
    tracker.log_workout()?;
    tracker.record_measurement_at(78.2, 175.0, program_start() + Duration::days(2))?;
    tracker.add_achievement_at("Early Bird", "Three morning workouts", program_start())?;

    let session = tracker.session().unwrap();
    let now = program_start() + Duration::days(6);
    let backup = BackupExport::new(session, now);

    let json = backup.to_json_pretty()?;
    let restored = BackupExport::from_json(&json)?;

    assert_eq!(restored.user, session.profile);
    assert_eq!(restored.progress, session.progress);
    assert_eq!(restored.export_date, now);
    assert_eq!(restored.day, 7);
    Ok(())
}

#[test]
fn test_backup_wire_keys() -> Result<()> {
    let tracker = logged_in_tracker();
    let backup = BackupExport::new(tracker.session().unwrap(), program_start());
    let value: serde_json::Value = serde_json::from_str(&backup.to_json_pretty()?)?;

    assert!(value.get("user").is_some());
    assert!(value.get("progress").is_some());
    assert!(value.get("exportDate").is_some());
    assert_eq!(value.get("day").and_then(serde_json::Value::as_i64), Some(1));
    Ok(())
}

#[test]
fn test_export_filenames() {
    let tracker = logged_in_tracker();
    let now = program_start() + Duration::days(9);
    let backup = BackupExport::new(tracker.session().unwrap(), now);

    assert_eq!(backup.filename(), "MyPersonalTracker_testuser_Day10.json");
    assert_eq!(summary_filename("testuser"), "28DaySummary_testuser.txt");
    assert_eq!(
        report_filename("testuser", 10),
        "FullReport_testuser_Day10.txt"
    );
}

#[test]
fn test_summary_contains_derived_metrics() -> Result<()> {
    let mut tracker = logged_in_tracker();
    for _ in 0..5 {
        tracker.log_workout()?;
    }
    for _ in 0..6 {
        tracker.log_meal()?;
    }
    tracker.record_measurement_at(78.2, 175.0, program_start() + Duration::days(2))?;

    let now = program_start() + Duration::days(6);
    let summary = render_summary(tracker.session().unwrap(), now);

    assert!(summary.contains("Days Completed: 7/28"));
    assert!(summary.contains("Workouts: 5"));
    assert!(summary.contains("Meals Logged: 6"));
    assert!(summary.contains("Consistency: 79%"));
    assert!(summary.contains("Initial Goal: Lose Fat"));
    assert!(summary.contains("Weight Change: -1.8 kg"));
    assert!(summary.contains("No achievements yet"));
    Ok(())
}

#[test]
fn test_full_report_lists_achievements() -> Result<()> {
    let mut tracker = logged_in_tracker();
    tracker.add_achievement_at(
        "Consistency Streak",
        "Seven days in a row",
        program_start() + Duration::days(7),
    )?;

    let now = program_start() + Duration::days(8);
    let report = render_full_report(tracker.session().unwrap(), now);

    assert!(report.contains("USER: testuser"));
    assert!(report.contains("START DATE: 2024-10-20"));
    assert!(report.contains("CURRENT DAY: 9 of 28"));
    assert!(report.contains("Consistency Streak - Seven days in a row (earned 2024-10-27)"));
    assert!(report.contains("Generated on: 2024-10-28"));
    Ok(())
}

#[test]
fn test_summary_defaults_without_measurements() -> Result<()> {
    let tracker = logged_in_tracker();
    let summary = render_summary(tracker.session().unwrap(), program_start());

    assert!(summary.contains("Weight Change: 0.0 kg"));
    assert!(summary.contains("BMI Change: 0.0"));
    Ok(())
}
