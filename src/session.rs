// ABOUTME: Session lifecycle and mutation controller
// ABOUTME: Owns the current profile/ledger pair and persists every mutation
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # Session
//!
//! [`Tracker`] is the single owner of session state. Every user action flows
//! through it: validate input, mutate the in-memory [`SessionContext`],
//! persist through the store, done. Execution is synchronous and each
//! operation runs to completion before the next, so a mutation and its
//! persistence are atomic from the caller's point of view.

use crate::config::TrackerConfig;
use crate::constants::storage_keys::{CURRENT_USER, USER_PROGRESS};
use crate::errors::{AppError, AppResult};
use crate::intelligence::metrics;
use crate::models::{FitnessGoal, ProgressRecord, UserProfile};
use crate::storage::{FileStore, TrackerStore};
use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

/// The profile/ledger pair for the logged-in user
///
/// Passed explicitly to the metrics layer; there is no ambient session state.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionContext {
    /// Biometrics, goal, and program start date
    pub profile: UserProfile,
    /// Counters, measurements, and achievements
    pub progress: ProgressRecord,
}

impl SessionContext {
    /// Program day for this session at the given time, clamped to [1, 28]
    pub fn current_day(&self, today: DateTime<Utc>) -> i64 {
        metrics::current_day(self.profile.start_date, today)
    }
}

/// Top-level controller for one tracking session
///
/// Owns the storage backend and the current session, if any. All mutating
/// operations validate first and leave state untouched on rejection.
pub struct Tracker {
    store: Box<dyn TrackerStore>,
    session: Option<SessionContext>,
}

impl Tracker {
    /// Create a tracker over a storage backend, with no active session
    pub fn new(store: Box<dyn TrackerStore>) -> Self {
        Self {
            store,
            session: None,
        }
    }

    /// Create a tracker over a file store at the configured data directory
    pub fn from_config(config: &TrackerConfig) -> AppResult<Self> {
        let store = FileStore::new(&config.data_dir)?;
        Ok(Self::new(Box::new(store)))
    }

    /// The active session, if a user is logged in
    pub fn session(&self) -> Option<&SessionContext> {
        self.session.as_ref()
    }

    /// Load an existing session from the store
    ///
    /// Returns `true` when a stored profile was found. A missing progress
    /// blob next to an existing profile is treated as "no data yet" and
    /// replaced with a fresh record; a malformed blob is a serialization
    /// error.
    pub fn resume(&mut self) -> AppResult<bool> {
        let Some(profile_json) = self.store.get(CURRENT_USER)? else {
            return Ok(false);
        };
        let profile: UserProfile = serde_json::from_str(&profile_json)?;
        let progress = match self.store.get(USER_PROGRESS)? {
            Some(progress_json) => serde_json::from_str(&progress_json)?,
            None => {
                warn!("profile present without progress record, starting fresh");
                ProgressRecord::new()
            }
        };
        info!(username = %profile.username, "resumed session");
        self.session = Some(SessionContext { profile, progress });
        Ok(true)
    }

    /// Create a new profile and zeroed progress record, timestamped now
    pub fn login(
        &mut self,
        username: impl Into<String>,
        weight: f64,
        height: f64,
        goal: FitnessGoal,
    ) -> AppResult<()> {
        self.login_at(username, weight, height, goal, Utc::now())
    }

    /// Create a new profile with an explicit clock
    ///
    /// `now` becomes day 1 of the 28-day program. Both entities are persisted
    /// before this returns.
    pub fn login_at(
        &mut self,
        username: impl Into<String>,
        weight: f64,
        height: f64,
        goal: FitnessGoal,
        now: DateTime<Utc>,
    ) -> AppResult<()> {
        validate_biometrics(weight, height)?;
        let profile = UserProfile::new(username, weight, height, goal, now);
        let progress = ProgressRecord::new();
        info!(username = %profile.username, goal = ?goal, "created profile");
        self.session = Some(SessionContext { profile, progress });
        self.persist_profile()?;
        self.persist_progress()
    }

    /// Record a body measurement dated now
    pub fn record_measurement(&mut self, weight: f64, height: f64) -> AppResult<()> {
        self.record_measurement_at(weight, height, Utc::now())
    }

    /// Record a body measurement with an explicit clock
    ///
    /// Computes BMI from the supplied values, overwrites the profile's
    /// current weight, and appends to the measurement sequence. Invalid input
    /// aborts before any mutation.
    pub fn record_measurement_at(
        &mut self,
        weight: f64,
        height: f64,
        now: DateTime<Utc>,
    ) -> AppResult<()> {
        validate_biometrics(weight, height)?;
        let bmi = metrics::bmi(weight, height);
        let session = self.require_session()?;
        session.profile.update_weight(weight);
        session.progress.record_measurement(now, weight, bmi);
        debug!(weight, bmi, "recorded measurement");
        self.persist_profile()?;
        self.persist_progress()
    }

    /// Count one completed workout
    pub fn log_workout(&mut self) -> AppResult<()> {
        let session = self.require_session()?;
        session.progress.increment_workouts();
        debug!(
            workouts = session.progress.workouts_completed,
            "logged workout"
        );
        self.persist_progress()
    }

    /// Count one logged meal
    pub fn log_meal(&mut self) -> AppResult<()> {
        let session = self.require_session()?;
        session.progress.increment_meals();
        debug!(meals = session.progress.meals_logged, "logged meal");
        self.persist_progress()
    }

    /// Award an achievement dated now
    pub fn add_achievement(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> AppResult<()> {
        self.add_achievement_at(title, description, Utc::now())
    }

    /// Award an achievement with an explicit clock
    pub fn add_achievement_at(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        now: DateTime<Utc>,
    ) -> AppResult<()> {
        let session = self.require_session()?;
        session.progress.add_achievement(title, description, now);
        self.persist_progress()
    }

    /// End the session, removing only the stored profile
    ///
    /// The progress record stays in storage so a returning user's history
    /// survives the next login.
    pub fn logout(&mut self) -> AppResult<()> {
        if let Some(session) = &self.session {
            info!(username = %session.profile.username, "logged out");
        }
        self.session = None;
        self.store.remove(CURRENT_USER)
    }

    /// Remove both stored entities and end the session
    pub fn clear_all(&mut self) -> AppResult<()> {
        self.session = None;
        self.store.remove(CURRENT_USER)?;
        self.store.remove(USER_PROGRESS)
    }

    fn require_session(&mut self) -> AppResult<&mut SessionContext> {
        self.session
            .as_mut()
            .ok_or_else(|| AppError::resource_not_found("active session"))
    }

    fn persist_profile(&mut self) -> AppResult<()> {
        let Some(session) = &self.session else {
            return Err(AppError::resource_not_found("active session"));
        };
        let json = serde_json::to_string(&session.profile)?;
        self.store.put(CURRENT_USER, &json)
    }

    fn persist_progress(&mut self) -> AppResult<()> {
        let Some(session) = &self.session else {
            return Err(AppError::resource_not_found("active session"));
        };
        let json = serde_json::to_string(&session.progress)?;
        self.store.put(USER_PROGRESS, &json)
    }
}

/// Reject non-finite or non-positive weight/height before any mutation
///
/// Non-numeric values are invalid input; numeric but non-positive values are
/// out of range.
fn validate_biometrics(weight: f64, height: f64) -> AppResult<()> {
    for (name, value) in [("weight", weight), ("height", height)] {
        if !value.is_finite() {
            return Err(AppError::invalid_input(format!(
                "{name} must be a number, got {value}"
            )));
        }
        if value <= 0.0 {
            return Err(AppError::value_out_of_range(format!(
                "{name} must be positive, got {value}"
            )));
        }
    }
    Ok(())
}
