// ABOUTME: Core derived-metric calculations for the 28-day program
// ABOUTME: BMI, category bands, program day, consistency score, and trend detection
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Derived-metric calculations
//!
//! All functions operate over an immutable profile/ledger snapshot. Inputs the
//! ledger does not yet contain (no measurements, fewer than two samples) map
//! to the documented default output rather than an error.

use crate::constants::bmi::{NORMAL_MAX, OVERWEIGHT_MAX, UNDERWEIGHT_MAX};
use crate::constants::program::{ACTIONS_PER_DAY, PROGRAM_LENGTH_DAYS};
use crate::models::{ProgressRecord, UserProfile};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// WHO BMI classification band
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum BmiCategory {
    /// BMI below 18.5
    Underweight,
    /// BMI in [18.5, 25)
    Normal,
    /// BMI in [25, 30)
    Overweight,
    /// BMI of 30 or above
    Obese,
}

impl BmiCategory {
    /// Classify a BMI value into its WHO band
    ///
    /// Returns `None` for unusable input: non-finite values (the output of a
    /// zero or negative height) and non-positive values (the output of a zero
    /// or negative weight). Callers detect a degenerate measurement here
    /// instead of displaying a nonsense band.
    pub fn from_bmi(bmi: f64) -> Option<Self> {
        if !bmi.is_finite() || bmi <= 0.0 {
            return None;
        }
        let category = if bmi < UNDERWEIGHT_MAX {
            Self::Underweight
        } else if bmi < NORMAL_MAX {
            Self::Normal
        } else if bmi < OVERWEIGHT_MAX {
            Self::Overweight
        } else {
            Self::Obese
        };
        Some(category)
    }

    /// Human-readable label
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        }
    }
}

/// Direction of the most recent weight movement
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum WeightTrend {
    /// Latest measurement is lighter than the previous one
    Down,
    /// Latest measurement is heavier than the previous one
    Up,
    /// Latest two measurements are equal
    Same,
    /// Fewer than two measurements recorded
    InsufficientData,
}

impl WeightTrend {
    /// Wire/display tag for this trend
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Down => "down",
            Self::Up => "up",
            Self::Same => "same",
            Self::InsufficientData => "insufficient-data",
        }
    }
}

/// Body mass index from weight in kilograms and height in centimeters
///
/// `weight / (height / 100)^2`, with no plausibility guard: a zero height
/// yields a non-finite value that is surfaced as-is. Use
/// [`BmiCategory::from_bmi`] to detect unusable output.
pub fn bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Current day within the fixed program window
///
/// Day 1 is the start date itself. The result is clamped to [1, 28]: dates
/// before the start stay at day 1 and elapsed time past the window stays at
/// day 28.
pub fn current_day(start_date: DateTime<Utc>, today: DateTime<Utc>) -> i64 {
    let elapsed_days = (today - start_date).num_days();
    (elapsed_days + 1).clamp(1, PROGRAM_LENGTH_DAYS)
}

/// Percentage of expected daily actions actually performed since day 1
///
/// The denominator assumes two target actions per elapsed day (one workout,
/// one meal log). Deliberately not clamped: logging more than two actions a
/// day pushes the score past 100.
pub fn consistency_score(day: i64, progress: &ProgressRecord) -> i64 {
    let completed = f64::from(progress.workouts_completed + progress.meals_logged);
    let possible = (day * i64::from(ACTIONS_PER_DAY)) as f64;
    (completed / possible * 100.0).round() as i64
}

/// Weight delta against the initial baseline, formatted to one decimal place
///
/// `"0.0"` when no measurements exist yet, regardless of profile values.
pub fn weight_change(profile: &UserProfile, progress: &ProgressRecord) -> String {
    match progress.latest_measurement() {
        Some(latest) => format!("{:.1}", latest.weight - profile.initial_weight),
        None => "0.0".into(),
    }
}

/// BMI delta against the initial baseline, formatted to one decimal place
///
/// Both BMI values use the profile's current height. `"0.0"` when no
/// measurements exist yet.
pub fn bmi_change(profile: &UserProfile, progress: &ProgressRecord) -> String {
    match progress.latest_measurement() {
        Some(latest) => {
            let initial_bmi = bmi(profile.initial_weight, profile.height);
            let current_bmi = bmi(latest.weight, profile.height);
            format!("{:.1}", current_bmi - initial_bmi)
        }
        None => "0.0".into(),
    }
}

/// Direction of movement between the two most recent measurements
pub fn weight_trend(progress: &ProgressRecord) -> WeightTrend {
    let measurements = &progress.measurements;
    if measurements.len() < 2 {
        return WeightTrend::InsufficientData;
    }
    let latest = measurements[measurements.len() - 1].weight;
    let previous = measurements[measurements.len() - 2].weight;
    if latest < previous {
        WeightTrend::Down
    } else if latest > previous {
        WeightTrend::Up
    } else {
        WeightTrend::Same
    }
}

/// Share of the program window completed, as a percentage
pub fn program_progress_percent(day: i64) -> f64 {
    day as f64 / PROGRAM_LENGTH_DAYS as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn progress_with_weights(weights: &[f64]) -> ProgressRecord {
        let mut progress = ProgressRecord::new();
        for &weight in weights {
            progress.record_measurement(Utc::now(), weight, bmi(weight, 175.0));
        }
        progress
    }

    #[test]
    fn test_bmi_reference_value() {
        let value = bmi(70.0, 175.0);
        assert!((value - 22.86).abs() < 0.005);
    }

    #[test]
    fn test_bmi_zero_height_is_non_finite_and_flagged() {
        let value = bmi(70.0, 0.0);
        assert!(!value.is_finite());
        assert_eq!(BmiCategory::from_bmi(value), None);
    }

    #[test]
    fn test_bmi_zero_weight_is_flagged() {
        // Zero weight yields a finite 0.0, which is still not classifiable
        let value = bmi(0.0, 175.0);
        assert_eq!(value, 0.0);
        assert_eq!(BmiCategory::from_bmi(value), None);
        assert_eq!(BmiCategory::from_bmi(-3.2), None);
    }

    #[test]
    fn test_bmi_category_bands() {
        assert_eq!(BmiCategory::from_bmi(17.0), Some(BmiCategory::Underweight));
        assert_eq!(BmiCategory::from_bmi(18.5), Some(BmiCategory::Normal));
        assert_eq!(BmiCategory::from_bmi(24.9), Some(BmiCategory::Normal));
        assert_eq!(BmiCategory::from_bmi(25.0), Some(BmiCategory::Overweight));
        assert_eq!(BmiCategory::from_bmi(29.9), Some(BmiCategory::Overweight));
        assert_eq!(BmiCategory::from_bmi(30.0), Some(BmiCategory::Obese));
    }

    #[test]
    fn test_current_day_clamps_both_ends() {
        let start = Utc.with_ymd_and_hms(2024, 10, 20, 0, 0, 0).unwrap();
        assert_eq!(current_day(start, start), 1);
        assert_eq!(current_day(start, start - Duration::days(5)), 1);
        assert_eq!(current_day(start, start + Duration::days(6)), 7);
        assert_eq!(current_day(start, start + Duration::days(27)), 28);
        assert_eq!(current_day(start, start + Duration::days(400)), 28);
    }

    #[test]
    fn test_consistency_score_reference_value() {
        let mut progress = ProgressRecord::new();
        progress.workouts_completed = 5;
        progress.meals_logged = 6;
        // day 7: round(100 * 11 / 14)
        assert_eq!(consistency_score(7, &progress), 79);
    }

    #[test]
    fn test_consistency_score_unbounded_above_100() {
        let mut progress = ProgressRecord::new();
        progress.workouts_completed = 4;
        progress.meals_logged = 4;
        assert_eq!(consistency_score(1, &progress), 400);
    }

    #[test]
    fn test_weight_change_defaults_without_measurements() {
        let profile = UserProfile::new(
            "alex",
            80.0,
            175.0,
            crate::models::FitnessGoal::LoseFat,
            Utc::now(),
        );
        let progress = ProgressRecord::new();
        assert_eq!(weight_change(&profile, &progress), "0.0");
        assert_eq!(bmi_change(&profile, &progress), "0.0");
    }

    #[test]
    fn test_weight_change_one_decimal() {
        let profile = UserProfile::new(
            "alex",
            80.0,
            175.0,
            crate::models::FitnessGoal::LoseFat,
            Utc::now(),
        );
        let progress = progress_with_weights(&[79.4, 78.25]);
        assert_eq!(weight_change(&profile, &progress), "-1.8");
    }

    #[test]
    fn test_weight_trend_directions() {
        assert_eq!(
            weight_trend(&progress_with_weights(&[80.0, 78.0])),
            WeightTrend::Down
        );
        assert_eq!(
            weight_trend(&progress_with_weights(&[78.0, 80.0])),
            WeightTrend::Up
        );
        assert_eq!(
            weight_trend(&progress_with_weights(&[78.0, 78.0])),
            WeightTrend::Same
        );
    }

    #[test]
    fn test_weight_trend_needs_two_measurements() {
        assert_eq!(
            weight_trend(&progress_with_weights(&[])),
            WeightTrend::InsufficientData
        );
        assert_eq!(
            weight_trend(&progress_with_weights(&[80.0])),
            WeightTrend::InsufficientData
        );
    }

    #[test]
    fn test_program_progress_percent() {
        assert!((program_progress_percent(14) - 50.0).abs() < f64::EPSILON);
        assert!((program_progress_percent(28) - 100.0).abs() < f64::EPSILON);
    }
}
