// ABOUTME: Core data models for the tracking platform
// ABOUTME: Nutrition, profile, workout, and plan model definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 fitlog contributors

//! Core data models
//!
//! Plain serde-derived records shared by the calculation engine and the
//! (external) persistence and UI layers. Records created by users carry
//! string ids assigned at creation; reference records (foods, exercises,
//! plans) are immutable after construction.

/// Food, meal entry, and serving unit models
pub mod nutrition;

/// Workout plan models
pub mod plan;

/// User profile and derived calorie models
pub mod profile;

/// Workout session models
pub mod workout;

pub use nutrition::{FoodItem, MealEntry, MealType, ServingUnit};
pub use plan::{PlannedExercise, UserWorkoutPlan, WorkoutPlan, WorkoutPlanDay};
pub use profile::{
    ActivityLevel, CalorieCalculation, Gender, GoalDirection, MacroTargets, UserProfile,
};
pub use workout::{Difficulty, Exercise, ExerciseCategory, ExerciseSet, Workout, WorkoutExercise};
