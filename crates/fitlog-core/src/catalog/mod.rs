// ABOUTME: Built-in reference data for foods, exercises, and workout plans
// ABOUTME: Immutable catalog constructed once and handed out by reference
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 fitlog contributors

//! Built-in catalog
//!
//! Immutable reference data constructed once behind `LazyLock` and handed
//! out by reference; there is no process-wide mutable state. Catalog records
//! satisfy their model invariants by construction and are covered by tests.

/// Built-in exercise database
pub mod exercises;

/// Built-in common foods
pub mod foods;

/// Built-in workout plan templates
pub mod plans;

pub use exercises::{
    exercise_by_id, exercises, exercises_by_category, exercises_by_difficulty,
    exercises_for_level, search_exercises,
};
pub use foods::{common_foods, food_by_id, search_common_foods};
pub use plans::{plan_by_id, workout_plans};
