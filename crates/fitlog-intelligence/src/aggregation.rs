// ABOUTME: Daily and weekly aggregation over meal entries and workouts
// ABOUTME: Pure date-window arithmetic; the caller supplies today, never the clock
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 fitlog contributors

//! Aggregation
//!
//! Summaries are computed from each record's own `date` field, never from
//! timestamps or the current time, so a meal logged at 23:59 and one logged
//! at 00:01 land on different days regardless of when the summary runs.
//! Weeks are 7 consecutive days starting Sunday. Weekly averages stay
//! unrounded; rounding is a display concern.

use crate::scaling::{round1, scale_nutrition};
use chrono::{NaiveDate, Weekday};
use fitlog_core::constants::time::DAYS_PER_WEEK_F64;
use fitlog_core::errors::AppResult;
use fitlog_core::models::{MealEntry, MealType, Workout};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Nutrition totals for one calendar day
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailySummary {
    /// The day summarized
    pub date: NaiveDate,
    /// Total calories across all meals
    pub total_calories: i32,
    /// Total protein (grams), one decimal
    pub protein_g: f64,
    /// Total carbohydrates (grams), one decimal
    pub carbs_g: f64,
    /// Total fat (grams), one decimal
    pub fat_g: f64,
    /// Calories grouped by meal type; absent meals are omitted
    pub calories_by_meal: HashMap<MealType, i32>,
    /// Number of entries on this day
    pub entry_count: usize,
}

/// Nutrition totals for one Sunday-to-Saturday week
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklySummary {
    /// Sunday of the week
    pub week_start: NaiveDate,
    /// Saturday of the week
    pub week_end: NaiveDate,
    /// Exactly seven daily summaries, Sunday first
    pub days: Vec<DailySummary>,
    /// Sum of the seven daily calorie totals
    pub total_calories: i32,
    /// `total_calories / 7`, unrounded
    pub daily_average_calories: f64,
}

/// Workout totals for one calendar day
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyWorkoutSummary {
    /// The day summarized
    pub date: NaiveDate,
    /// Number of workout sessions
    pub workout_count: usize,
    /// Completed sets across all sessions
    pub completed_sets: usize,
    /// Total volume over completed sets (lbs)
    pub total_volume_lbs: f64,
    /// Total session time (minutes)
    pub total_duration_minutes: u32,
}

/// Workout totals for one Sunday-to-Saturday week
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyWorkoutSummary {
    /// Sunday of the week
    pub week_start: NaiveDate,
    /// Saturday of the week
    pub week_end: NaiveDate,
    /// Exactly seven daily summaries, Sunday first
    pub days: Vec<DailyWorkoutSummary>,
    /// Sessions across the week
    pub workout_count: usize,
    /// Volume across the week (lbs)
    pub total_volume_lbs: f64,
}

/// Sunday and Saturday of the week containing the given date
#[must_use]
pub fn week_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let week = date.week(Weekday::Sun);
    (week.first_day(), week.last_day())
}

/// Whether a record date falls on the given day
#[must_use]
pub fn is_today(date: NaiveDate, today: NaiveDate) -> bool {
    date == today
}

/// Whether the anchor date falls in the same Sunday-start week as `today`
#[must_use]
pub fn is_current_week(anchor: NaiveDate, today: NaiveDate) -> bool {
    week_bounds(anchor).0 == week_bounds(today).0
}

/// Nutrition totals for the given day
///
/// Entries dated to other days are ignored; nutrition comes from each
/// entry's stored `grams_consumed`, never re-derived from quantity and unit.
///
/// # Errors
///
/// Propagates scaling failures from malformed food records.
pub fn daily_summary(entries: &[MealEntry], date: NaiveDate) -> AppResult<DailySummary> {
    let mut total_calories = 0_i32;
    let mut protein_g = 0.0;
    let mut carbs_g = 0.0;
    let mut fat_g = 0.0;
    let mut calories_by_meal: HashMap<MealType, i32> = HashMap::new();
    let mut entry_count = 0_usize;

    for entry in entries.iter().filter(|entry| entry.date == date) {
        let scaled = scale_nutrition(&entry.food, entry.grams_consumed)?;
        total_calories += scaled.calories;
        protein_g += scaled.protein_g;
        carbs_g += scaled.carbs_g;
        fat_g += scaled.fat_g;
        *calories_by_meal.entry(entry.meal_type).or_insert(0) += scaled.calories;
        entry_count += 1;
    }

    Ok(DailySummary {
        date,
        total_calories,
        protein_g: round1(protein_g),
        carbs_g: round1(carbs_g),
        fat_g: round1(fat_g),
        calories_by_meal,
        entry_count,
    })
}

/// Nutrition totals for the Sunday-start week containing the anchor date
///
/// # Errors
///
/// Propagates scaling failures from malformed food records.
pub fn weekly_summary(entries: &[MealEntry], anchor_date: NaiveDate) -> AppResult<WeeklySummary> {
    let (week_start, week_end) = week_bounds(anchor_date);

    let days = week_start
        .iter_days()
        .take_while(|day| *day <= week_end)
        .map(|day| daily_summary(entries, day))
        .collect::<AppResult<Vec<_>>>()?;

    let total_calories: i32 = days.iter().map(|day| day.total_calories).sum();
    let daily_average_calories = f64::from(total_calories) / DAYS_PER_WEEK_F64;

    tracing::debug!(
        %week_start,
        %week_end,
        total_calories,
        "built weekly nutrition summary"
    );

    Ok(WeeklySummary {
        week_start,
        week_end,
        days,
        total_calories,
        daily_average_calories,
    })
}

/// Workout totals for the given day
#[must_use]
pub fn daily_workout_summary(workouts: &[Workout], date: NaiveDate) -> DailyWorkoutSummary {
    let mut summary = DailyWorkoutSummary {
        date,
        workout_count: 0,
        completed_sets: 0,
        total_volume_lbs: 0.0,
        total_duration_minutes: 0,
    };

    for workout in workouts.iter().filter(|workout| workout.date == date) {
        summary.workout_count += 1;
        summary.completed_sets += workout.completed_set_count();
        summary.total_volume_lbs += workout.total_volume_lbs();
        summary.total_duration_minutes += workout.duration_minutes;
    }

    summary
}

/// Workout totals for the Sunday-start week containing the anchor date
#[must_use]
pub fn weekly_workout_summary(
    workouts: &[Workout],
    anchor_date: NaiveDate,
) -> WeeklyWorkoutSummary {
    let (week_start, week_end) = week_bounds(anchor_date);

    let days: Vec<DailyWorkoutSummary> = week_start
        .iter_days()
        .take_while(|day| *day <= week_end)
        .map(|day| daily_workout_summary(workouts, day))
        .collect();

    let workout_count = days.iter().map(|day| day.workout_count).sum();
    let total_volume_lbs = days.iter().map(|day| day.total_volume_lbs).sum();

    WeeklyWorkoutSummary {
        week_start,
        week_end,
        days,
        workout_count,
        total_volume_lbs,
    }
}
