// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides logging init and pre-built tracker sessions
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
#![allow(dead_code)]

//! Shared test utilities for `fittrack_core`
//!
//! Common setup functions to reduce duplication across integration tests.

use chrono::{DateTime, TimeZone, Utc};
use fittrack_core::models::FitnessGoal;
use fittrack_core::session::Tracker;
use fittrack_core::storage::MemoryStore;
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG environment variable controls test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Fixed program start used across tests
pub fn program_start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 10, 20, 8, 0, 0).unwrap()
}

/// Tracker over an in-memory store with no session
pub fn empty_tracker() -> Tracker {
    init_test_logging();
    Tracker::new(Box::new(MemoryStore::new()))
}

/// Tracker with a logged-in user starting at `program_start()`
pub fn logged_in_tracker() -> Tracker {
    let mut tracker = empty_tracker();
    tracker
        .login_at(
            "testuser",
            80.0,
            175.0,
            FitnessGoal::LoseFat,
            program_start(),
        )
        .expect("login should succeed");
    tracker
}
