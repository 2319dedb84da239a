// ABOUTME: Comprehensive tests for daily and weekly nutrition and workout aggregation
// ABOUTME: Covers record-date filtering, Sunday week bounds, and summation invariants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 fitlog contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(clippy::float_cmp)]
#![allow(missing_docs)]

use chrono::{Days, NaiveDate, Utc};
use fitlog_core::config::ConversionConfig;
use fitlog_core::models::{
    Difficulty, Exercise, ExerciseCategory, ExerciseSet, FoodItem, MealEntry, MealType,
    ServingUnit, Workout, WorkoutExercise,
};
use fitlog_intelligence::{
    create_meal_entry, daily_summary, daily_workout_summary, is_current_week, is_today,
    week_bounds, weekly_summary, weekly_workout_summary,
};

/// 500 kcal per 100 g reference serving
fn meal_replacement() -> FoodItem {
    FoodItem {
        id: "meal-replacement".to_owned(),
        name: "Meal Replacement".to_owned(),
        calories: 500.0,
        protein_g: 30.0,
        carbs_g: 50.0,
        fat_g: 15.0,
        serving_grams: 100.0,
        default_unit: ServingUnit::Gram,
        permitted_units: vec![ServingUnit::Gram],
        grams_per_cup: None,
    }
}

fn entry_on(date: NaiveDate, grams: f64, meal_type: MealType) -> MealEntry {
    create_meal_entry(
        "user-1",
        meal_replacement(),
        grams,
        ServingUnit::Gram,
        meal_type,
        date,
        &ConversionConfig::default(),
    )
    .unwrap()
}

// Sunday of a known week
fn sunday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
}

// ============================================================================
// Daily nutrition summaries
// ============================================================================

#[test]
fn daily_summary_filters_by_the_record_date() {
    let day = sunday();
    let other_day = day.checked_add_days(Days::new(1)).unwrap();
    let entries = vec![
        entry_on(day, 100.0, MealType::Breakfast),
        entry_on(day, 100.0, MealType::Dinner),
        entry_on(other_day, 100.0, MealType::Lunch),
    ];

    let summary = daily_summary(&entries, day).unwrap();
    assert_eq!(summary.entry_count, 2);
    assert_eq!(summary.total_calories, 1000);
    assert_eq!(summary.protein_g, 60.0);
}

#[test]
fn daily_summary_groups_calories_by_meal() {
    let day = sunday();
    let entries = vec![
        entry_on(day, 50.0, MealType::Breakfast),
        entry_on(day, 50.0, MealType::Breakfast),
        entry_on(day, 100.0, MealType::Snack),
    ];

    let summary = daily_summary(&entries, day).unwrap();
    assert_eq!(summary.calories_by_meal[&MealType::Breakfast], 500);
    assert_eq!(summary.calories_by_meal[&MealType::Snack], 500);
    assert!(!summary.calories_by_meal.contains_key(&MealType::Lunch));
}

#[test]
fn empty_day_summarizes_to_zero() {
    let summary = daily_summary(&[], sunday()).unwrap();
    assert_eq!(summary.total_calories, 0);
    assert_eq!(summary.entry_count, 0);
    assert!(summary.calories_by_meal.is_empty());
}

// ============================================================================
// Weekly nutrition summaries
// ============================================================================

#[test]
fn weekly_total_is_the_sum_of_seven_daily_totals() {
    // 500 kcal on each of the 7 days: 3500 weekly, 500 average
    let entries: Vec<MealEntry> = (0..7)
        .map(|offset| {
            let day = sunday().checked_add_days(Days::new(offset)).unwrap();
            entry_on(day, 100.0, MealType::Lunch)
        })
        .collect();

    // Any anchor inside the week selects the same window
    let wednesday = sunday().checked_add_days(Days::new(3)).unwrap();
    let summary = weekly_summary(&entries, wednesday).unwrap();

    assert_eq!(summary.week_start, sunday());
    assert_eq!(summary.days.len(), 7);
    assert_eq!(summary.total_calories, 3500);
    assert_eq!(summary.daily_average_calories, 500.0);
}

#[test]
fn weekly_average_stays_unrounded() {
    let entries = vec![entry_on(sunday(), 20.0, MealType::Snack)];
    let summary = weekly_summary(&entries, sunday()).unwrap();
    // 100 kcal over 7 days
    assert!((summary.daily_average_calories - 100.0 / 7.0).abs() < 1e-9);
}

#[test]
fn entries_outside_the_week_are_excluded() {
    let before = sunday().checked_sub_days(Days::new(1)).unwrap();
    let after = sunday().checked_add_days(Days::new(7)).unwrap();
    let entries = vec![
        entry_on(before, 100.0, MealType::Lunch),
        entry_on(sunday(), 100.0, MealType::Lunch),
        entry_on(after, 100.0, MealType::Lunch),
    ];

    let summary = weekly_summary(&entries, sunday()).unwrap();
    assert_eq!(summary.total_calories, 500);
}

// ============================================================================
// Date window helpers
// ============================================================================

#[test]
fn week_bounds_are_sunday_through_saturday() {
    let friday = NaiveDate::from_ymd_opt(2025, 6, 6).unwrap();
    let (start, end) = week_bounds(friday);
    assert_eq!(start, sunday());
    assert_eq!(end, NaiveDate::from_ymd_opt(2025, 6, 7).unwrap());
}

#[test]
fn today_and_current_week_take_the_clock_as_input() {
    let day = sunday();
    assert!(is_today(day, day));
    assert!(!is_today(day, day.checked_add_days(Days::new(1)).unwrap()));

    let saturday = day.checked_add_days(Days::new(6)).unwrap();
    let next_sunday = day.checked_add_days(Days::new(7)).unwrap();
    assert!(is_current_week(day, saturday));
    assert!(!is_current_week(day, next_sunday));
}

// ============================================================================
// Workout summaries
// ============================================================================

fn bench_press() -> Exercise {
    Exercise {
        id: "chest-5".to_owned(),
        name: "Barbell Bench Press".to_owned(),
        category: ExerciseCategory::Chest,
        equipment: "barbell".to_owned(),
        difficulty: Difficulty::Intermediate,
        muscle_groups: vec!["chest".to_owned()],
    }
}

fn workout_on(date: NaiveDate, duration_minutes: u32) -> Workout {
    Workout {
        id: "workout-1".to_owned(),
        user_id: "user-1".to_owned(),
        name: "Push Day".to_owned(),
        exercises: vec![WorkoutExercise {
            exercise: bench_press(),
            sets: vec![
                ExerciseSet {
                    reps: 10,
                    weight_lbs: 135.0,
                    completed: true,
                },
                ExerciseSet {
                    reps: 8,
                    weight_lbs: 155.0,
                    completed: true,
                },
                ExerciseSet {
                    reps: 8,
                    weight_lbs: 175.0,
                    completed: false,
                },
            ],
        }],
        date,
        duration_minutes,
        logged_at: Utc::now(),
        completed: true,
    }
}

#[test]
fn daily_workout_summary_counts_only_completed_sets() {
    let day = sunday();
    let summary = daily_workout_summary(&[workout_on(day, 45)], day);

    assert_eq!(summary.workout_count, 1);
    assert_eq!(summary.completed_sets, 2, "the failed third set is excluded");
    // 10 x 135 + 8 x 155 = 2590
    assert_eq!(summary.total_volume_lbs, 2590.0);
    assert_eq!(summary.total_duration_minutes, 45);
}

#[test]
fn weekly_workout_summary_spans_the_sunday_week() {
    let day = sunday();
    let tuesday = day.checked_add_days(Days::new(2)).unwrap();
    let next_week = day.checked_add_days(Days::new(9)).unwrap();
    let workouts = vec![
        workout_on(day, 45),
        workout_on(tuesday, 60),
        workout_on(next_week, 30),
    ];

    let summary = weekly_workout_summary(&workouts, day);
    assert_eq!(summary.workout_count, 2);
    assert_eq!(summary.total_volume_lbs, 5180.0);
    assert_eq!(summary.days.len(), 7);
}
