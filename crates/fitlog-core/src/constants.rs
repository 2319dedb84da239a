// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for unit conversion, energy arithmetic, and calendar math
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 fitlog contributors

//! Constants module
//!
//! Application constants grouped into logical domains rather than a single
//! large file. Everything here is a fixed physical or dietary constant, not
//! tunable configuration; tunables live in [`crate::config`].

/// Unit conversion and measurement constants
pub mod units {
    /// Pounds to kilograms
    pub const LB_TO_KG: f64 = 0.453_592;
    /// Inches to centimeters
    pub const IN_TO_CM: f64 = 2.54;
    /// Inches per foot
    pub const INCHES_PER_FOOT: f64 = 12.0;
}

/// Dietary energy constants
pub mod energy {
    /// Calories per gram of protein
    pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
    /// Calories per gram of carbohydrate
    pub const KCAL_PER_G_CARBS: f64 = 4.0;
    /// Calories per gram of fat
    pub const KCAL_PER_G_FAT: f64 = 9.0;
    /// Calories stored in one pound of body fat
    pub const KCAL_PER_LB_BODY_FAT: f64 = 3500.0;
}

/// Calendar constants
pub mod time {
    /// Days in a calendar week
    pub const DAYS_PER_WEEK: u32 = 7;
    /// Days in a calendar week, as f64 for averaging
    pub const DAYS_PER_WEEK_F64: f64 = 7.0;
}
