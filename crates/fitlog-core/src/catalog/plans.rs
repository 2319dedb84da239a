// ABOUTME: Pre-built workout plans organized by difficulty
// ABOUTME: Beginner full body, push/pull/legs, and upper/lower split templates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 fitlog contributors

use crate::catalog::exercises::exercise_by_id;
use crate::models::{Difficulty, PlannedExercise, WorkoutPlan, WorkoutPlanDay};
use std::sync::LazyLock;

// Safe: plan definitions reference ids declared in the exercise table, and
// catalog tests resolve every prescription.
#[allow(clippy::expect_used)]
fn planned(id: &str, target_sets: u32, target_reps: &str) -> PlannedExercise {
    let exercise = exercise_by_id(id)
        .expect("plan references a known exercise id")
        .clone();
    PlannedExercise {
        exercise,
        target_sets,
        target_reps: target_reps.to_owned(),
    }
}

fn day(day_number: u32, name: &str, exercises: Vec<PlannedExercise>) -> WorkoutPlanDay {
    WorkoutPlanDay {
        day_number,
        name: name.to_owned(),
        exercises,
        is_rest_day: false,
    }
}

fn rest_day(day_number: u32) -> WorkoutPlanDay {
    WorkoutPlanDay {
        day_number,
        name: "Rest Day".to_owned(),
        exercises: Vec::new(),
        is_rest_day: true,
    }
}

fn beginner_full_body() -> WorkoutPlan {
    WorkoutPlan {
        id: "beginner-fullbody".to_owned(),
        name: "Beginner Full Body".to_owned(),
        description:
            "Perfect for beginners. Full body workout 3 days per week with rest days between."
                .to_owned(),
        days_per_week: 3,
        difficulty: Difficulty::Beginner,
        days: vec![
            day(
                1,
                "Full Body A",
                vec![
                    planned("legs-1", 3, "10-12"),
                    planned("chest-1", 3, "8-10"),
                    planned("back-3", 3, "10-12"),
                    planned("shoulders-2", 3, "12-15"),
                    planned("core-1", 3, "30 sec"),
                ],
            ),
            rest_day(2),
            day(
                3,
                "Full Body B",
                vec![
                    planned("legs-2", 3, "10-12"),
                    planned("chest-3", 3, "10-12"),
                    planned("back-1", 3, "10-12"),
                    planned("arms-1", 3, "10-12"),
                    planned("arms-2", 3, "10-12"),
                ],
            ),
            rest_day(4),
            day(
                5,
                "Full Body C",
                vec![
                    planned("legs-5", 3, "10 each"),
                    planned("back-2", 3, "10-12"),
                    planned("shoulders-1", 3, "10-12"),
                    planned("core-2", 3, "15-20"),
                    planned("cardio-1", 1, "15 min"),
                ],
            ),
            rest_day(6),
            rest_day(7),
        ],
    }
}

fn push_pull_legs() -> WorkoutPlan {
    WorkoutPlan {
        id: "intermediate-ppl".to_owned(),
        name: "Push Pull Legs".to_owned(),
        description:
            "Classic PPL split for intermediate lifters. 6 days per week for maximum gains."
                .to_owned(),
        days_per_week: 6,
        difficulty: Difficulty::Intermediate,
        days: vec![
            day(
                1,
                "Push (Chest, Shoulders, Triceps)",
                vec![
                    planned("chest-5", 4, "6-8"),
                    planned("chest-6", 3, "8-10"),
                    planned("shoulders-5", 3, "8-10"),
                    planned("shoulders-2", 3, "12-15"),
                    planned("arms-6", 3, "10-12"),
                    planned("arms-2", 3, "12-15"),
                ],
            ),
            day(
                2,
                "Pull (Back, Biceps)",
                vec![
                    planned("back-8", 4, "5-6"),
                    planned("back-5", 4, "6-8"),
                    planned("back-6", 3, "8-10"),
                    planned("shoulders-7", 3, "15-20"),
                    planned("arms-5", 3, "10-12"),
                    planned("arms-3", 3, "10-12"),
                ],
            ),
            day(
                3,
                "Legs",
                vec![
                    planned("legs-8", 4, "6-8"),
                    planned("legs-7", 4, "8-10"),
                    planned("legs-2", 3, "10-12"),
                    planned("legs-3", 3, "10-12"),
                    planned("legs-4", 3, "12-15"),
                    planned("core-6", 3, "10-15"),
                ],
            ),
            day(
                4,
                "Push (Chest, Shoulders, Triceps)",
                vec![
                    planned("chest-3", 4, "8-10"),
                    planned("chest-7", 3, "12-15"),
                    planned("shoulders-6", 3, "10-12"),
                    planned("shoulders-4", 3, "15-20"),
                    planned("arms-8", 3, "8-10"),
                ],
            ),
            day(
                5,
                "Pull (Back, Biceps)",
                vec![
                    planned("back-1", 4, "10-12"),
                    planned("back-7", 3, "8-10"),
                    planned("back-2", 3, "10-12"),
                    planned("arms-7", 3, "10-12"),
                    planned("arms-1", 3, "12-15"),
                ],
            ),
            day(
                6,
                "Legs",
                vec![
                    planned("legs-10", 4, "6-8"),
                    planned("legs-9", 3, "10 each"),
                    planned("legs-11", 4, "10-12"),
                    planned("legs-3", 3, "12-15"),
                    planned("core-5", 3, "20 each"),
                ],
            ),
            rest_day(7),
        ],
    }
}

fn upper_lower() -> WorkoutPlan {
    WorkoutPlan {
        id: "intermediate-upper-lower".to_owned(),
        name: "Upper Lower Split".to_owned(),
        description:
            "Great balance of volume and recovery. 4 days per week hitting each muscle twice."
                .to_owned(),
        days_per_week: 4,
        difficulty: Difficulty::Intermediate,
        days: vec![
            day(
                1,
                "Upper Body A",
                vec![
                    planned("chest-5", 4, "6-8"),
                    planned("back-5", 4, "6-8"),
                    planned("shoulders-5", 3, "8-10"),
                    planned("arms-5", 3, "10-12"),
                    planned("arms-6", 3, "10-12"),
                ],
            ),
            day(
                2,
                "Lower Body A",
                vec![
                    planned("legs-8", 4, "6-8"),
                    planned("legs-7", 4, "8-10"),
                    planned("legs-2", 3, "10-12"),
                    planned("legs-3", 3, "12-15"),
                    planned("core-1", 3, "45 sec"),
                ],
            ),
            rest_day(3),
            day(
                4,
                "Upper Body B",
                vec![
                    planned("chest-3", 4, "8-10"),
                    planned("back-6", 4, "6-10"),
                    planned("shoulders-2", 3, "12-15"),
                    planned("chest-4", 3, "12-15"),
                    planned("arms-3", 3, "10-12"),
                    planned("arms-2", 3, "12-15"),
                ],
            ),
            day(
                5,
                "Lower Body B",
                vec![
                    planned("legs-6", 4, "10-12"),
                    planned("legs-9", 3, "10 each"),
                    planned("legs-11", 4, "10-12"),
                    planned("legs-4", 3, "12-15"),
                    planned("core-6", 3, "10-15"),
                ],
            ),
            rest_day(6),
            rest_day(7),
        ],
    }
}

static WORKOUT_PLANS: LazyLock<Vec<WorkoutPlan>> =
    LazyLock::new(|| vec![beginner_full_body(), push_pull_legs(), upper_lower()]);

/// The built-in workout plan templates
#[must_use]
pub fn workout_plans() -> &'static [WorkoutPlan] {
    &WORKOUT_PLANS
}

/// Look up a plan by catalog id
#[must_use]
pub fn plan_by_id(id: &str) -> Option<&'static WorkoutPlan> {
    WORKOUT_PLANS.iter().find(|plan| plan.id == id)
}
