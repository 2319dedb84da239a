// ABOUTME: Calculation engine for the fitlog tracking platform
// ABOUTME: Unit conversion, nutrition scaling, energy calculation, aggregation, and plan progression
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 fitlog contributors

#![deny(unsafe_code)]

//! # fitlog Intelligence
//!
//! The deterministic calculation cluster behind the fitlog meal and workout
//! tracker. Every function here is pure and synchronous: inputs in, values or
//! an [`fitlog_core::errors::AppError`] out, no I/O and no clock access.
//! Persistence and UI live in external layers that call into this crate.
//!
//! ## Modules
//!
//! - **units**: serving-unit to gram conversion
//! - **scaling**: per-serving nutrition scaled to consumed grams
//! - **entry**: meal entry construction with the derived-grams invariant
//! - **energy**: Mifflin-St Jeor BMR, TDEE, and calorie target recommendation
//! - **macros**: goal-based macronutrient split suggestion
//! - **aggregation**: daily and weekly nutrition and workout summaries
//! - **progression**: workout plan day cycling

/// Serving-unit to gram conversion
pub mod units;

/// Nutrition scaling from reference serving to consumed grams
pub mod scaling;

/// Meal entry construction
pub mod entry;

/// BMR, TDEE, and calorie target calculation
pub mod energy;

/// Macronutrient split suggestion
pub mod macros;

/// Daily and weekly aggregation over logged records
pub mod aggregation;

/// Workout plan progression
pub mod progression;

pub use aggregation::{
    daily_summary, daily_workout_summary, is_current_week, is_today, week_bounds, weekly_summary,
    weekly_workout_summary, DailySummary, DailyWorkoutSummary, WeeklySummary, WeeklyWorkoutSummary,
};
pub use energy::{
    calculate_bmr, calculate_for_profile, calculate_target_calories, calculate_tdee,
    TargetCalories,
};
pub use entry::create_meal_entry;
pub use macros::suggest_macros;
pub use progression::{complete_current_day, current_day_plan, plan_week, start_plan};
pub use scaling::{scale_nutrition, ScaledNutrition};
pub use units::convert_to_grams;
