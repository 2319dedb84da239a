// ABOUTME: Comprehensive tests for workout plan progression
// ABOUTME: Covers plan binding, day advancement, wrap-around, and completion bookkeeping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 fitlog contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::NaiveDate;
use fitlog_core::catalog::plan_by_id;
use fitlog_core::models::{Difficulty, WorkoutPlan};
use fitlog_intelligence::{complete_current_day, current_day_plan, plan_week, start_plan};

fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
}

fn beginner_plan() -> WorkoutPlan {
    plan_by_id("beginner-fullbody").unwrap().clone()
}

// ============================================================================
// Starting a plan
// ============================================================================

#[test]
fn starting_a_plan_begins_on_day_one() {
    let user_plan = start_plan("user-1", beginner_plan(), start_date()).unwrap();
    assert_eq!(user_plan.current_day, 1);
    assert!(user_plan.completed_days.is_empty());
    assert_eq!(user_plan.start_date, start_date());
    assert_eq!(plan_week(&user_plan), 1);
}

#[test]
fn a_plan_without_days_cannot_be_started() {
    let empty = WorkoutPlan {
        id: "empty".to_owned(),
        name: "Empty".to_owned(),
        description: String::new(),
        days_per_week: 0,
        days: Vec::new(),
        difficulty: Difficulty::Beginner,
    };
    assert!(start_plan("user-1", empty, start_date()).is_err());
}

// ============================================================================
// Day advancement and wrap-around
// ============================================================================

#[test]
fn completing_a_day_advances_and_records_it() {
    let mut user_plan = start_plan("user-1", beginner_plan(), start_date()).unwrap();

    let next = complete_current_day(&mut user_plan).unwrap();
    assert_eq!(next, 2);
    assert_eq!(user_plan.completed_days, vec![1]);

    let next = complete_current_day(&mut user_plan).unwrap();
    assert_eq!(next, 3);
    assert_eq!(user_plan.completed_days, vec![1, 2]);
}

#[test]
fn the_cycle_wraps_to_day_one_after_the_last_day() {
    let plan = beginner_plan();
    let day_count = u32::try_from(plan.days.len()).unwrap();
    let mut user_plan = start_plan("user-1", plan, start_date()).unwrap();

    for _ in 0..day_count {
        complete_current_day(&mut user_plan).unwrap();
    }

    assert_eq!(user_plan.current_day, 1, "cycle restarts after day {day_count}");
    assert_eq!(
        user_plan.completed_days,
        (1..=day_count).collect::<Vec<_>>()
    );
}

#[test]
fn current_day_stays_in_bounds_over_many_cycles() {
    let plan = beginner_plan();
    let day_count = u32::try_from(plan.days.len()).unwrap();
    let mut user_plan = start_plan("user-1", plan, start_date()).unwrap();

    for _ in 0..(day_count * 3 + 2) {
        complete_current_day(&mut user_plan).unwrap();
        assert!(
            (1..=day_count).contains(&user_plan.current_day),
            "current_day {} escaped [1, {day_count}]",
            user_plan.current_day
        );
    }
}

#[test]
fn completion_history_keeps_repeat_cycles() {
    let mut user_plan = start_plan("user-1", beginner_plan(), start_date()).unwrap();
    let day_count = user_plan.plan.days.len();

    for _ in 0..(day_count + 1) {
        complete_current_day(&mut user_plan).unwrap();
    }

    assert_eq!(user_plan.completed_days.len(), day_count + 1);
    assert_eq!(user_plan.completed_days.last(), Some(&1));
}

// ============================================================================
// Day lookup and week position
// ============================================================================

#[test]
fn current_day_plan_resolves_the_template_day() {
    let mut user_plan = start_plan("user-1", beginner_plan(), start_date()).unwrap();

    let day = current_day_plan(&user_plan).unwrap();
    assert_eq!(day.day_number, 1);
    assert!(!day.is_rest_day);

    complete_current_day(&mut user_plan).unwrap();
    let day = current_day_plan(&user_plan).unwrap();
    assert_eq!(day.day_number, 2);
    assert!(day.is_rest_day, "day 2 of the beginner plan is a rest day");
}

#[test]
fn plan_week_is_the_ceiling_of_current_day_over_seven() {
    let mut user_plan = start_plan("user-1", beginner_plan(), start_date()).unwrap();
    assert_eq!(plan_week(&user_plan), 1);

    user_plan.current_day = 7;
    assert_eq!(plan_week(&user_plan), 1);

    user_plan.current_day = 8;
    assert_eq!(plan_week(&user_plan), 2);
}

#[test]
fn out_of_range_current_day_is_reported_not_panicked() {
    let mut user_plan = start_plan("user-1", beginner_plan(), start_date()).unwrap();
    user_plan.current_day = 99;
    assert!(complete_current_day(&mut user_plan).is_err());
    assert!(current_day_plan(&user_plan).is_err());
}
