// ABOUTME: Derived-metric computations over the profile/ledger snapshot
// ABOUTME: Re-exports the metrics functions and the daily-fact rotation
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # Intelligence
//!
//! Pure functions deriving summary metrics from a profile and progress
//! snapshot. Nothing here mutates state or touches storage; every function is
//! a direct computation over its arguments. Missing data resolves to the
//! documented default value, never to an error.

pub mod facts;
pub mod metrics;

pub use facts::{daily_fact, fact_for_date};
pub use metrics::{
    bmi, bmi_change, consistency_score, current_day, program_progress_percent, weight_change,
    weight_trend, BmiCategory, WeightTrend,
};
