// ABOUTME: User profile model with biometrics, goal, and program start date
// ABOUTME: UserProfile and the FitnessGoal enumeration
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The fitness goal selected at account creation
///
/// Closed set; serialized in kebab-case to match the persisted layout.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum FitnessGoal {
    /// Increase muscle mass
    BuildMuscle,
    /// Reduce body fat
    LoseFat,
    /// Improve cardiovascular endurance
    ImproveEndurance,
    /// General health and fitness
    GeneralFitness,
}

impl FitnessGoal {
    /// Human-readable label for summaries and reports
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::BuildMuscle => "Build Muscle",
            Self::LoseFat => "Lose Fat",
            Self::ImproveEndurance => "Improve Endurance",
            Self::GeneralFitness => "General Fitness",
        }
    }
}

/// The user's biometric and goal record
///
/// One instance per session. `initial_weight` and `initial_height` are
/// captured at creation and never change afterward; they are the baseline for
/// delta computations. `weight` tracks the most recent measurement.
///
/// # Examples
///
/// ```rust
/// use chrono::Utc;
/// use fittrack_core::models::{FitnessGoal, UserProfile};
///
/// let profile = UserProfile::new("runner123", 80.0, 175.0, FitnessGoal::LoseFat, Utc::now());
/// assert_eq!(profile.initial_weight, 80.0);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Display name; also used in export filenames. Not uniqueness-checked.
    pub username: String,
    /// Current weight in kilograms (most recent measurement)
    pub weight: f64,
    /// Current height in centimeters
    pub height: f64,
    /// Selected fitness goal
    pub goal: FitnessGoal,
    /// Day 1 of the 28-day program
    pub start_date: DateTime<Utc>,
    /// Weight at account creation (immutable baseline)
    pub initial_weight: f64,
    /// Height at account creation (immutable baseline)
    pub initial_height: f64,
}

impl UserProfile {
    /// Create a profile at program start
    ///
    /// The supplied weight and height become both the current values and the
    /// immutable baselines; `now` becomes day 1 of the program.
    pub fn new(
        username: impl Into<String>,
        weight: f64,
        height: f64,
        goal: FitnessGoal,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            username: username.into(),
            weight,
            height,
            goal,
            start_date: now,
            initial_weight: weight,
            initial_height: height,
        }
    }

    /// Overwrite the current weight after a new measurement
    ///
    /// Height and the initial baselines are untouched.
    pub fn update_weight(&mut self, weight: f64) {
        self.weight = weight;
    }
}
