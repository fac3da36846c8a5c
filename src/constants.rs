// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Program window, BMI bands, storage keys, and the fitness-fact rotation
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Constants module
//!
//! Application constants grouped into logical domains rather than scattered
//! through the code. All values here are pure data.

/// Program window constants
pub mod program {
    /// Length of the fixed tracking program in days
    pub const PROGRAM_LENGTH_DAYS: i64 = 28;
    /// Expected number of logged actions per day (one workout + one meal log)
    pub const ACTIONS_PER_DAY: u32 = 2;
}

/// WHO BMI classification cutoffs
pub mod bmi {
    /// Below this value: underweight
    pub const UNDERWEIGHT_MAX: f64 = 18.5;
    /// Below this value (and at or above `UNDERWEIGHT_MAX`): normal
    pub const NORMAL_MAX: f64 = 25.0;
    /// Below this value (and at or above `NORMAL_MAX`): overweight; above: obese
    pub const OVERWEIGHT_MAX: f64 = 30.0;
}

/// Storage keys for the two persisted entities
pub mod storage_keys {
    /// Key holding the serialized `UserProfile`
    pub const CURRENT_USER: &str = "currentUser";
    /// Key holding the serialized `ProgressRecord`
    pub const USER_PROGRESS: &str = "userProgress";
}

/// Daily fitness-fact rotation
pub mod facts {
    /// Interval between fact rotations on the login view, in seconds
    ///
    /// Exported for the presentation layer's carousel timer; nothing in this
    /// crate consumes it.
    pub const ROTATION_INTERVAL_SECS: u64 = 5;

    /// Fixed ordered fact list; indexed by calendar day-of-month modulo length
    pub const FITNESS_FACTS: [&str; 10] = [
        "Building muscle increases your resting metabolism, helping you burn more calories even at rest!",
        "Regular exercise can improve your mood and reduce symptoms of anxiety and depression.",
        "Protein is essential for muscle repair. Aim for 1.6-2.2g per kg of body weight when building muscle.",
        "Staying hydrated can improve exercise performance by up to 25%!",
        "Quality sleep is crucial for muscle recovery and growth. Aim for 7-9 hours per night.",
        "Consistency beats intensity. Regular moderate exercise is better than occasional intense workouts.",
        "Eating protein-rich foods after workouts helps maximize muscle protein synthesis.",
        "HIIT workouts can burn calories for up to 24 hours after your workout (afterburn effect).",
        "Stretching improves flexibility and can help prevent injuries during workouts.",
        "Tracking your progress increases motivation and helps you stay accountable to your goals.",
    ];
}
