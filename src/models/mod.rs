// ABOUTME: Core data models for the tracking engine
// ABOUTME: Re-exports UserProfile, ProgressRecord, and related types
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # Data Models
//!
//! The two persisted entities of the tracking engine and their supporting
//! types. Both serialize to the camelCase key-value layout consumed by the
//! presentation layer and the export formats.
//!
//! ## Core Models
//!
//! - `UserProfile`: biometrics, goal, and program start date
//! - `ProgressRecord`: counters, measurements, and achievements
//! - `Measurement`: one dated weight/BMI sample
//! - `Achievement`: one earned milestone

mod profile;
mod progress;

pub use profile::{FitnessGoal, UserProfile};
pub use progress::{Achievement, Measurement, ProgressRecord};
