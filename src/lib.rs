// ABOUTME: Main library entry point for the fittrack 28-day tracking engine
// ABOUTME: Exposes the profile/ledger data model, metrics layer, storage, and exports
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![deny(unsafe_code)]

//! # FitTrack Core
//!
//! Engine for a single-user 28-day fitness tracking program. A user creates a
//! profile with basic biometrics and a goal, then records workouts, meals, and
//! body measurements over a fixed 28-day window. The crate derives summary
//! metrics (BMI, consistency score, weight trend, program day) from that state
//! and renders export artifacts (JSON backup, text summary, full report).
//!
//! The crate is a computation and persistence layer only: it produces plain
//! values and formatted strings for a presentation layer to display, and
//! exposes no network endpoints or CLI.
//!
//! ## Architecture
//!
//! - **models**: `UserProfile` and `ProgressRecord`, the two persisted entities
//! - **intelligence**: pure derived-metric functions over a session snapshot
//! - **storage**: key-value repository abstraction with memory and file backends
//! - **session**: the top-level controller owning the current session state
//! - **export**: JSON backup and human-readable report rendering
//!
//! ## Example
//!
//! ```rust
//! use fittrack_core::models::FitnessGoal;
//! use fittrack_core::session::Tracker;
//! use fittrack_core::storage::MemoryStore;
//!
//! let mut tracker = Tracker::new(Box::new(MemoryStore::new()));
//! tracker.login("runner123", 80.0, 175.0, FitnessGoal::LoseFat)?;
//! tracker.log_workout()?;
//! tracker.record_measurement(79.4, 175.0)?;
//! # Ok::<(), fittrack_core::errors::AppError>(())
//! ```

/// Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Tracker configuration and storage location resolution
pub mod config;

/// Persisted data models (`UserProfile`, `ProgressRecord`)
pub mod models;

/// Derived-metric computations (BMI, consistency, trends, daily facts)
pub mod intelligence;

/// Key-value repository abstraction with memory and file backends
pub mod storage;

/// Session lifecycle and mutation controller
pub mod session;

/// JSON backup and text report rendering
pub mod export;
