// ABOUTME: Workout plan progression: starting a plan and cycling through its days
// ABOUTME: current_day stays 1-based and wraps to 1 after the last plan day
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 fitlog contributors

//! Plan progression
//!
//! A user binds to a plan template and walks its day cycle one
//! complete-day action at a time. `current_day` is 1-based, always within
//! `[1, plan.days.len()]`, and wraps back to 1 after the last day so the
//! cycle repeats indefinitely.

use chrono::NaiveDate;
use fitlog_core::constants::time::DAYS_PER_WEEK;
use fitlog_core::errors::{AppError, AppResult};
use fitlog_core::models::{UserWorkoutPlan, WorkoutPlan, WorkoutPlanDay};
use uuid::Uuid;

/// Bind a user to a plan template, starting on day 1
///
/// # Errors
///
/// Returns `AppError::InvalidInput` if the plan has no days.
pub fn start_plan(
    user_id: impl Into<String>,
    plan: WorkoutPlan,
    start_date: NaiveDate,
) -> AppResult<UserWorkoutPlan> {
    if plan.days.is_empty() {
        return Err(AppError::invalid_input(format!(
            "plan '{}' has no days",
            plan.id
        )));
    }

    tracing::debug!(plan_id = %plan.id, %start_date, "starting workout plan");

    Ok(UserWorkoutPlan {
        id: Uuid::new_v4().to_string(),
        user_id: user_id.into(),
        plan,
        start_date,
        current_day: 1,
        completed_days: Vec::new(),
    })
}

/// Mark the current day complete and advance to the next day
///
/// The completed day number is appended to the history and `current_day`
/// advances, wrapping to 1 after the plan's last day. Returns the new
/// current day.
///
/// # Errors
///
/// Returns `AppError::InternalError` if `current_day` is outside the plan's
/// day range, which only happens if the record was mutated outside this
/// module.
pub fn complete_current_day(user_plan: &mut UserWorkoutPlan) -> AppResult<u32> {
    let day_count = u32::try_from(user_plan.plan.days.len())
        .map_err(|err| AppError::internal("plan day count exceeds u32").with_source(err))?;

    if user_plan.current_day == 0 || user_plan.current_day > day_count {
        return Err(AppError::internal(format!(
            "current_day {} outside [1, {day_count}] for plan '{}'",
            user_plan.current_day, user_plan.plan.id
        )));
    }

    user_plan.completed_days.push(user_plan.current_day);
    user_plan.current_day = if user_plan.current_day >= day_count {
        1
    } else {
        user_plan.current_day + 1
    };

    Ok(user_plan.current_day)
}

/// The plan day the user is currently on
///
/// # Errors
///
/// Returns `AppError::ResourceNotFound` if the plan has no day with the
/// current day number.
pub fn current_day_plan(user_plan: &UserWorkoutPlan) -> AppResult<&WorkoutPlanDay> {
    user_plan.plan.day(user_plan.current_day).ok_or_else(|| {
        AppError::not_found(format!(
            "day {} of plan '{}'",
            user_plan.current_day, user_plan.plan.id
        ))
    })
}

/// 1-based week of the cycle the user is in (`ceil(current_day / 7)`)
#[must_use]
pub fn plan_week(user_plan: &UserWorkoutPlan) -> u32 {
    user_plan.current_day.div_ceil(DAYS_PER_WEEK)
}
