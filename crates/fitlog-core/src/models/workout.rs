// ABOUTME: Workout tracking models for set/rep logging
// ABOUTME: Exercise, ExerciseSet, WorkoutExercise, and Workout definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 fitlog contributors

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Muscle group category of an exercise
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseCategory {
    /// Chest exercises
    Chest,
    /// Back exercises
    Back,
    /// Shoulder exercises
    Shoulders,
    /// Biceps and triceps exercises
    Arms,
    /// Leg exercises
    Legs,
    /// Core exercises
    Core,
    /// Cardiovascular work
    Cardio,
}

/// Difficulty tier of an exercise or plan
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    /// Suitable for new lifters
    Beginner,
    /// Requires established technique
    Intermediate,
    /// Requires significant training history
    Advanced,
}

impl Difficulty {
    /// Ordinal rank, beginner lowest
    #[must_use]
    pub const fn rank(&self) -> u8 {
        match self {
            Self::Beginner => 0,
            Self::Intermediate => 1,
            Self::Advanced => 2,
        }
    }
}

/// Immutable exercise reference record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exercise {
    /// Stable catalog identifier
    pub id: String,
    /// Exercise name
    pub name: String,
    /// Muscle group category
    pub category: ExerciseCategory,
    /// Required equipment
    pub equipment: String,
    /// Difficulty tier
    pub difficulty: Difficulty,
    /// Primary muscle groups worked
    pub muscle_groups: Vec<String>,
}

/// A single set within a workout exercise
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ExerciseSet {
    /// Repetitions performed
    pub reps: u32,
    /// Weight used (lbs); zero for bodyweight work
    pub weight_lbs: f64,
    /// Whether the set was completed
    pub completed: bool,
}

/// An exercise performed within a workout, with its ordered sets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutExercise {
    /// The exercise performed
    pub exercise: Exercise,
    /// Ordered sets, appended to during the session
    pub sets: Vec<ExerciseSet>,
}

/// A workout session
///
/// Created when a session starts, appended to during the session, persisted
/// as a single immutable record on finish.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workout {
    /// Unique identifier assigned at creation
    pub id: String,
    /// Owning user
    pub user_id: String,
    /// Session name
    pub name: String,
    /// Exercises performed
    pub exercises: Vec<WorkoutExercise>,
    /// Calendar date of the session
    pub date: NaiveDate,
    /// Session duration in minutes
    pub duration_minutes: u32,
    /// Timestamp the session was logged
    pub logged_at: DateTime<Utc>,
    /// Whether the session was finished
    pub completed: bool,
}

impl Workout {
    /// Number of completed sets across all exercises
    #[must_use]
    pub fn completed_set_count(&self) -> usize {
        self.exercises
            .iter()
            .flat_map(|we| we.sets.iter())
            .filter(|set| set.completed)
            .count()
    }

    /// Total volume over completed sets: sum of reps x weight (lbs)
    #[must_use]
    pub fn total_volume_lbs(&self) -> f64 {
        self.exercises
            .iter()
            .flat_map(|we| we.sets.iter())
            .filter(|set| set.completed)
            .map(|set| f64::from(set.reps) * set.weight_lbs)
            .sum()
    }
}
