// ABOUTME: Daily fitness-fact selection
// ABOUTME: Deterministic rotation keyed by calendar day-of-month
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use crate::constants::facts::FITNESS_FACTS;
use chrono::{DateTime, Datelike, Utc};

/// Fact from `facts` for a given calendar date
///
/// Keyed by day-of-month (1-31) modulo the fact count, not by program day, so
/// the same date always yields the same fact. Empty lists yield `None`.
pub fn fact_for_date<'a>(date: DateTime<Utc>, facts: &[&'a str]) -> Option<&'a str> {
    if facts.is_empty() {
        return None;
    }
    Some(facts[date.day() as usize % facts.len()])
}

/// Fact shown for a given calendar date, from the built-in rotation
pub fn daily_fact(date: DateTime<Utc>) -> &'static str {
    // The built-in list is never empty
    fact_for_date(date, &FITNESS_FACTS).unwrap_or(FITNESS_FACTS[0])
}
