// ABOUTME: Tracker configuration and storage location resolution
// ABOUTME: Data directory settings for the file-backed store
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use std::path::PathBuf;

/// Application name used for the on-disk data directory
const APP_DIR_NAME: &str = "fittrack";

/// Configuration for a tracking session
///
/// Plain data with sensible defaults. The engine takes all configuration
/// explicitly; nothing is read from the environment.
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    /// Directory used by the file-backed store
    pub data_dir: PathBuf,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

impl TrackerConfig {
    /// Configuration rooted at a specific data directory
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }
}

/// Platform data directory for tracker state, falling back to the current
/// directory when the platform reports none
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
}
