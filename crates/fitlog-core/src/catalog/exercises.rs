// ABOUTME: Built-in exercise database organized by muscle group and difficulty
// ABOUTME: Filter and search helpers over the immutable exercise table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 fitlog contributors

use crate::models::{Difficulty, Exercise, ExerciseCategory};
use std::sync::LazyLock;

use Difficulty::{Advanced, Beginner, Intermediate};
use ExerciseCategory::{Arms, Back, Cardio, Chest, Core, Legs, Shoulders};

type ExerciseRow = (
    &'static str,
    &'static str,
    ExerciseCategory,
    &'static str,
    Difficulty,
    &'static [&'static str],
);

// id, name, category, equipment, difficulty, muscle groups
#[rustfmt::skip]
const EXERCISE_ROWS: &[ExerciseRow] = &[
    // Chest
    ("chest-1", "Push-ups", Chest, "bodyweight", Beginner, &["chest", "triceps", "shoulders"]),
    ("chest-3", "Dumbbell Bench Press", Chest, "dumbbells", Beginner, &["chest", "triceps", "shoulders"]),
    ("chest-4", "Dumbbell Flyes", Chest, "dumbbells", Intermediate, &["chest"]),
    ("chest-5", "Barbell Bench Press", Chest, "barbell", Intermediate, &["chest", "triceps", "shoulders"]),
    ("chest-6", "Incline Barbell Press", Chest, "barbell", Intermediate, &["chest", "shoulders"]),
    ("chest-7", "Cable Crossovers", Chest, "cables", Intermediate, &["chest"]),
    // Back
    ("back-1", "Lat Pulldowns", Back, "cable machine", Beginner, &["lats", "biceps"]),
    ("back-2", "Seated Cable Rows", Back, "cable machine", Beginner, &["lats", "rhomboids", "biceps"]),
    ("back-3", "Dumbbell Rows", Back, "dumbbells", Beginner, &["lats", "rhomboids", "biceps"]),
    ("back-5", "Barbell Rows", Back, "barbell", Intermediate, &["lats", "rhomboids", "biceps"]),
    ("back-6", "Pull-ups", Back, "bodyweight", Intermediate, &["lats", "biceps"]),
    ("back-7", "T-Bar Rows", Back, "barbell", Intermediate, &["lats", "rhomboids"]),
    ("back-8", "Deadlifts", Back, "barbell", Advanced, &["lats", "lower back", "glutes", "hamstrings"]),
    // Shoulders
    ("shoulders-1", "Dumbbell Shoulder Press", Shoulders, "dumbbells", Beginner, &["shoulders", "triceps"]),
    ("shoulders-2", "Lateral Raises", Shoulders, "dumbbells", Beginner, &["shoulders"]),
    ("shoulders-4", "Rear Delt Flyes", Shoulders, "dumbbells", Beginner, &["shoulders"]),
    ("shoulders-5", "Barbell Overhead Press", Shoulders, "barbell", Intermediate, &["shoulders", "triceps"]),
    ("shoulders-6", "Arnold Press", Shoulders, "dumbbells", Intermediate, &["shoulders", "triceps"]),
    ("shoulders-7", "Face Pulls", Shoulders, "cables", Intermediate, &["shoulders", "upper back"]),
    // Arms
    ("arms-1", "Dumbbell Bicep Curls", Arms, "dumbbells", Beginner, &["biceps"]),
    ("arms-2", "Tricep Pushdowns", Arms, "cables", Beginner, &["triceps"]),
    ("arms-3", "Hammer Curls", Arms, "dumbbells", Beginner, &["biceps", "forearms"]),
    ("arms-5", "Barbell Curls", Arms, "barbell", Intermediate, &["biceps"]),
    ("arms-6", "Skull Crushers", Arms, "barbell", Intermediate, &["triceps"]),
    ("arms-7", "Preacher Curls", Arms, "barbell", Intermediate, &["biceps"]),
    ("arms-8", "Close-Grip Bench Press", Arms, "barbell", Advanced, &["triceps", "chest"]),
    // Legs
    ("legs-1", "Bodyweight Squats", Legs, "bodyweight", Beginner, &["quads", "glutes"]),
    ("legs-2", "Leg Press", Legs, "machine", Beginner, &["quads", "glutes"]),
    ("legs-3", "Leg Curls", Legs, "machine", Beginner, &["hamstrings"]),
    ("legs-4", "Leg Extensions", Legs, "machine", Beginner, &["quads"]),
    ("legs-5", "Lunges", Legs, "bodyweight", Beginner, &["quads", "glutes"]),
    ("legs-6", "Goblet Squats", Legs, "dumbbells", Intermediate, &["quads", "glutes"]),
    ("legs-7", "Romanian Deadlifts", Legs, "barbell", Intermediate, &["hamstrings", "glutes"]),
    ("legs-8", "Barbell Squats", Legs, "barbell", Intermediate, &["quads", "glutes", "hamstrings"]),
    ("legs-9", "Bulgarian Split Squats", Legs, "dumbbells", Intermediate, &["quads", "glutes"]),
    ("legs-10", "Front Squats", Legs, "barbell", Advanced, &["quads", "core"]),
    ("legs-11", "Hip Thrusts", Legs, "barbell", Intermediate, &["glutes", "hamstrings"]),
    // Core
    ("core-1", "Plank", Core, "bodyweight", Beginner, &["core"]),
    ("core-2", "Crunches", Core, "bodyweight", Beginner, &["abs"]),
    ("core-5", "Russian Twists", Core, "bodyweight", Intermediate, &["obliques"]),
    ("core-6", "Hanging Leg Raises", Core, "pull-up bar", Intermediate, &["abs", "hip flexors"]),
    // Cardio
    ("cardio-1", "Walking", Cardio, "none", Beginner, &[]),
    ("cardio-4", "Jogging", Cardio, "none", Intermediate, &["legs"]),
    ("cardio-8", "HIIT Sprints", Cardio, "none", Advanced, &["legs"]),
];

static EXERCISES: LazyLock<Vec<Exercise>> = LazyLock::new(|| {
    EXERCISE_ROWS
        .iter()
        .map(|(id, name, category, equipment, difficulty, muscles)| Exercise {
            id: (*id).to_owned(),
            name: (*name).to_owned(),
            category: *category,
            equipment: (*equipment).to_owned(),
            difficulty: *difficulty,
            muscle_groups: muscles.iter().map(|m| (*m).to_owned()).collect(),
        })
        .collect()
});

/// The full exercise database
#[must_use]
pub fn exercises() -> &'static [Exercise] {
    &EXERCISES
}

/// Look up an exercise by catalog id
#[must_use]
pub fn exercise_by_id(id: &str) -> Option<&'static Exercise> {
    EXERCISES.iter().find(|exercise| exercise.id == id)
}

/// Exercises in one muscle group category
#[must_use]
pub fn exercises_by_category(category: ExerciseCategory) -> Vec<&'static Exercise> {
    EXERCISES
        .iter()
        .filter(|exercise| exercise.category == category)
        .collect()
}

/// Exercises at one difficulty tier
#[must_use]
pub fn exercises_by_difficulty(difficulty: Difficulty) -> Vec<&'static Exercise> {
    EXERCISES
        .iter()
        .filter(|exercise| exercise.difficulty == difficulty)
        .collect()
}

/// Exercises in a category at or below a maximum difficulty
#[must_use]
pub fn exercises_for_level(
    category: ExerciseCategory,
    max_difficulty: Difficulty,
) -> Vec<&'static Exercise> {
    EXERCISES
        .iter()
        .filter(|exercise| {
            exercise.category == category && exercise.difficulty.rank() <= max_difficulty.rank()
        })
        .collect()
}

/// Case-insensitive name search over the exercise database
#[must_use]
pub fn search_exercises(query: &str) -> Vec<&'static Exercise> {
    let needle = query.to_lowercase();
    EXERCISES
        .iter()
        .filter(|exercise| exercise.name.to_lowercase().contains(&needle))
        .collect()
}
