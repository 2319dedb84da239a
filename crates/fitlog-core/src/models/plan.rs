// ABOUTME: Workout plan models for pre-built cyclic training templates
// ABOUTME: WorkoutPlan, WorkoutPlanDay, PlannedExercise, and UserWorkoutPlan definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 fitlog contributors

use crate::models::workout::{Difficulty, Exercise};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An exercise prescription within a plan day
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannedExercise {
    /// The prescribed exercise
    pub exercise: Exercise,
    /// Target number of sets
    pub target_sets: u32,
    /// Target reps, as a display string ("8-10", "30 sec", "10 each")
    pub target_reps: String,
}

/// One day within a workout plan's cycle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutPlanDay {
    /// 1-based position within the plan cycle
    pub day_number: u32,
    /// Day name ("Push", "Rest Day", ...)
    pub name: String,
    /// Prescribed exercises; empty on rest days
    pub exercises: Vec<PlannedExercise>,
    /// Whether this is a rest day
    pub is_rest_day: bool,
}

/// Static, read-only training plan template
///
/// Describes a cyclic day-by-day schedule; not user-owned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutPlan {
    /// Stable catalog identifier
    pub id: String,
    /// Plan name
    pub name: String,
    /// Short description of who the plan is for
    pub description: String,
    /// Training days per week (rest days excluded)
    pub days_per_week: u32,
    /// The full day cycle, rest days included
    pub days: Vec<WorkoutPlanDay>,
    /// Difficulty tier
    pub difficulty: Difficulty,
}

impl WorkoutPlan {
    /// Look up a day by its 1-based day number
    #[must_use]
    pub fn day(&self, day_number: u32) -> Option<&WorkoutPlanDay> {
        self.days.iter().find(|day| day.day_number == day_number)
    }
}

/// A user's binding to one workout plan
///
/// `current_day` is 1-based, always within `[1, plan.days.len()]`, and wraps
/// to 1 after the last day. Mutated on each complete-day action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserWorkoutPlan {
    /// Unique identifier assigned at creation
    pub id: String,
    /// Owning user
    pub user_id: String,
    /// The bound plan (snapshot of the template)
    pub plan: WorkoutPlan,
    /// Date the user started the plan
    pub start_date: NaiveDate,
    /// 1-based index of the day the user is on
    pub current_day: u32,
    /// Day numbers completed so far, in completion order
    pub completed_days: Vec<u32>,
}
