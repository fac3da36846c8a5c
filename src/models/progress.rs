// ABOUTME: Progress ledger model with counters, measurements, and achievements
// ABOUTME: ProgressRecord, Measurement, and Achievement definitions
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// One dated body measurement sample
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Measurement {
    /// When the measurement was recorded
    pub date: DateTime<Utc>,
    /// Weight in kilograms
    pub weight: f64,
    /// BMI computed at recording time
    pub bmi: f64,
}

/// One earned milestone
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    /// Short title
    pub title: String,
    /// Longer description of what was achieved
    pub description: String,
    /// When the achievement was earned
    pub date: DateTime<Utc>,
}

/// The append-only record of logged actions, measurements, and achievements
///
/// Created together with the profile at account creation, counters zeroed and
/// sequences empty. Counters only ever increase; the sequences are append-only
/// in insertion order, which is chronological because no edits or deletes
/// exist. The `activities` and `food_log` maps are reserved placeholders for
/// per-day detail and are persisted but never consumed by the metrics layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRecord {
    /// Total workouts logged since day 1
    pub workouts_completed: u32,
    /// Total meals logged since day 1
    pub meals_logged: u32,
    /// Reserved per-day activity detail, keyed by date string
    #[serde(default)]
    pub activities: HashMap<String, Value>,
    /// Reserved per-day food detail, keyed by date string
    #[serde(default)]
    pub food_log: HashMap<String, Value>,
    /// Chronological weight/BMI samples; the last element is current
    #[serde(default)]
    pub measurements: Vec<Measurement>,
    /// Earned milestones in the order they were awarded
    #[serde(default)]
    pub achievements: Vec<Achievement>,
}

impl ProgressRecord {
    /// Fresh record with zeroed counters and empty sequences
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a measurement sample
    ///
    /// No de-duplication by date; multiple same-day entries are all retained.
    pub fn record_measurement(&mut self, date: DateTime<Utc>, weight: f64, bmi: f64) {
        self.measurements.push(Measurement { date, weight, bmi });
    }

    /// Count one completed workout
    pub fn increment_workouts(&mut self) {
        self.workouts_completed += 1;
    }

    /// Count one logged meal
    pub fn increment_meals(&mut self) {
        self.meals_logged += 1;
    }

    /// Award an achievement dated `now`
    pub fn add_achievement(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        now: DateTime<Utc>,
    ) {
        self.achievements.push(Achievement {
            title: title.into(),
            description: description.into(),
            date: now,
        });
    }

    /// The most recent measurement, if any exist
    pub fn latest_measurement(&self) -> Option<&Measurement> {
        self.measurements.last()
    }
}
