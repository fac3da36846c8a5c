// ABOUTME: Export artifacts for session data
// ABOUTME: Full-state JSON backup plus text summary and full-report rendering
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # Export
//!
//! Write-only artifacts the user can download: a JSON backup of the complete
//! session state, a short text summary, and a long-form report. The backup
//! round-trips (parsing it reproduces the profile and ledger field for
//! field); the text formats are for humans, not re-import.

use crate::intelligence::{facts, metrics};
use crate::models::{ProgressRecord, UserProfile};
use crate::session::SessionContext;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Full-state backup: profile, ledger, and export metadata
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BackupExport {
    /// The profile at export time
    pub user: UserProfile,
    /// The progress ledger at export time
    pub progress: ProgressRecord,
    /// When the export was generated
    pub export_date: DateTime<Utc>,
    /// Program day at export time
    pub day: i64,
}

impl BackupExport {
    /// Snapshot a session for export
    pub fn new(session: &SessionContext, now: DateTime<Utc>) -> Self {
        Self {
            user: session.profile.clone(),
            progress: session.progress.clone(),
            export_date: now,
            day: session.current_day(now),
        }
    }

    /// Pretty-printed JSON payload for download
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Parse a previously exported backup
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Download filename for this backup
    pub fn filename(&self) -> String {
        format!(
            "MyPersonalTracker_{}_Day{}.json",
            self.user.username, self.day
        )
    }
}

/// Download filename for the text summary
pub fn summary_filename(username: &str) -> String {
    format!("28DaySummary_{username}.txt")
}

/// Download filename for the full report
pub fn report_filename(username: &str, day: i64) -> String {
    format!("FullReport_{username}_Day{day}.txt")
}

/// Short human-readable summary of the journey so far
pub fn render_summary(session: &SessionContext, now: DateTime<Utc>) -> String {
    let profile = &session.profile;
    let progress = &session.progress;
    let day = session.current_day(now);

    let mut out = String::new();
    out.push_str("JOURNEY OVERVIEW\n");
    out.push_str(&format!("Days Completed: {day}/28\n"));
    out.push_str(&format!("Workouts: {}\n", progress.workouts_completed));
    out.push_str(&format!("Meals Logged: {}\n", progress.meals_logged));
    out.push_str(&format!(
        "Consistency: {}%\n",
        metrics::consistency_score(day, progress)
    ));
    out.push('\n');
    out.push_str("GOAL PROGRESS\n");
    out.push_str(&format!("Initial Goal: {}\n", profile.goal.display_name()));
    out.push_str(&format!(
        "Weight Change: {} kg\n",
        metrics::weight_change(profile, progress)
    ));
    out.push_str(&format!(
        "BMI Change: {}\n",
        metrics::bmi_change(profile, progress)
    ));
    out.push('\n');
    out.push_str("ACHIEVEMENTS\n");
    out.push_str(&achievements_block(progress));
    out
}

/// Long-form report with the same derived metrics plus per-achievement detail
pub fn render_full_report(session: &SessionContext, now: DateTime<Utc>) -> String {
    let profile = &session.profile;
    let progress = &session.progress;
    let day = session.current_day(now);

    let mut out = String::new();
    out.push_str("28 DAY JOURNEY REPORT\n\n");
    out.push_str(&format!("USER: {}\n", profile.username));
    out.push_str(&format!(
        "START DATE: {}\n",
        profile.start_date.format("%Y-%m-%d")
    ));
    out.push_str(&format!("CURRENT DAY: {day} of 28\n\n"));
    out.push_str("OVERVIEW:\n");
    out.push_str(&format!(
        "- Workouts Completed: {}\n",
        progress.workouts_completed
    ));
    out.push_str(&format!("- Meals Logged: {}\n", progress.meals_logged));
    out.push_str(&format!(
        "- Consistency Score: {}%\n\n",
        metrics::consistency_score(day, progress)
    ));
    out.push_str("GOAL PROGRESS:\n");
    out.push_str(&format!(
        "- Initial Goal: {}\n",
        profile.goal.display_name()
    ));
    out.push_str(&format!(
        "- Weight Change: {} kg\n",
        metrics::weight_change(profile, progress)
    ));
    out.push_str(&format!(
        "- BMI Change: {}\n\n",
        metrics::bmi_change(profile, progress)
    ));
    out.push_str("ACHIEVEMENTS:\n");
    out.push_str(&achievements_block(progress));
    out.push('\n');
    out.push_str(&format!("DAILY FACT: {}\n\n", facts::daily_fact(now)));
    out.push_str(&format!("Generated on: {}\n", now.format("%Y-%m-%d")));
    out
}

fn achievements_block(progress: &ProgressRecord) -> String {
    if progress.achievements.is_empty() {
        return "No achievements yet\n".into();
    }
    progress
        .achievements
        .iter()
        .map(|a| {
            format!(
                "- {} - {} (earned {})\n",
                a.title,
                a.description,
                a.date.format("%Y-%m-%d")
            )
        })
        .collect()
}
