// ABOUTME: Energy calculations: Mifflin-St Jeor BMR, TDEE, and calorie target recommendation
// ABOUTME: Imperial inputs converted to metric internally, safety limits applied to targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 fitlog contributors

//! Energy calculation
//!
//! BMR via the Mifflin-St Jeor equation (Mifflin et al. 1990), TDEE via
//! standard activity multipliers, and a goal-based daily calorie target with
//! a clamped deficit/surplus band and an absolute floor. Inputs are imperial
//! (lbs, inches) because that is what the profile screens collect; conversion
//! to metric happens here and nowhere else.

use fitlog_core::config::{ActivityFactorsConfig, BmrConfig, SafetyLimitsConfig, TrackingConfig};
use fitlog_core::constants::energy::KCAL_PER_LB_BODY_FAT;
use fitlog_core::constants::time::DAYS_PER_WEEK_F64;
use fitlog_core::constants::units::{IN_TO_CM, LB_TO_KG};
use fitlog_core::errors::{AppError, AppResult};
use fitlog_core::models::{ActivityLevel, CalorieCalculation, Gender, UserProfile};
use serde::{Deserialize, Serialize};

const MAX_WEIGHT_LBS: f64 = 700.0;
const MAX_HEIGHT_INCHES: f64 = 110.0;
const MIN_AGE: u32 = 10;
const MAX_AGE: u32 = 120;

/// Goal-adjusted daily calorie target with its derived deficit
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TargetCalories {
    /// Recommended daily calories, floored at the configured minimum
    pub target_calories: u32,
    /// TDEE minus the final target (positive = deficit, negative = surplus)
    pub deficit: i32,
    /// Estimated weekly weight change at the clamped rate (lbs/week, one decimal)
    pub weekly_change_lbs: f64,
}

/// Basal Metabolic Rate via Mifflin-St Jeor (kcal/day, unrounded)
///
/// male: `10 x kg + 6.25 x cm - 5 x age + 5`;
/// female: `10 x kg + 6.25 x cm - 5 x age - 161`.
///
/// # Errors
///
/// Returns `AppError::ValueOutOfRange` for physiologically impossible
/// weight, height, or age.
pub fn calculate_bmr(
    weight_lbs: f64,
    height_inches: f64,
    age: u32,
    gender: Gender,
    config: &BmrConfig,
) -> AppResult<f64> {
    if weight_lbs <= 0.0 || weight_lbs > MAX_WEIGHT_LBS || !weight_lbs.is_finite() {
        return Err(AppError::value_out_of_range(format!(
            "weight must be in (0, {MAX_WEIGHT_LBS}] lbs, got {weight_lbs}"
        )));
    }
    if height_inches <= 0.0 || height_inches > MAX_HEIGHT_INCHES || !height_inches.is_finite() {
        return Err(AppError::value_out_of_range(format!(
            "height must be in (0, {MAX_HEIGHT_INCHES}] inches, got {height_inches}"
        )));
    }
    if !(MIN_AGE..=MAX_AGE).contains(&age) {
        return Err(AppError::value_out_of_range(format!(
            "age must be in [{MIN_AGE}, {MAX_AGE}], got {age}"
        )));
    }

    let weight_kg = weight_lbs * LB_TO_KG;
    let height_cm = height_inches * IN_TO_CM;
    let gender_constant = match gender {
        Gender::Male => config.msj_male_constant,
        Gender::Female => config.msj_female_constant,
    };

    let bmr = config.msj_weight_coef.mul_add(
        weight_kg,
        config.msj_height_coef.mul_add(
            height_cm,
            config.msj_age_coef.mul_add(f64::from(age), gender_constant),
        ),
    );

    tracing::debug!(weight_kg, height_cm, age, bmr, "calculated BMR");

    Ok(bmr)
}

/// Total Daily Energy Expenditure: BMR times the activity multiplier,
/// rounded to the nearest kcal
#[must_use]
pub fn calculate_tdee(
    bmr: f64,
    activity_level: ActivityLevel,
    config: &ActivityFactorsConfig,
) -> u32 {
    let multiplier = match activity_level {
        ActivityLevel::Sedentary => config.sedentary,
        ActivityLevel::Light => config.light,
        ActivityLevel::Moderate => config.moderate,
        ActivityLevel::Active => config.active,
        ActivityLevel::VeryActive => config.very_active,
    };
    (bmr * multiplier).round() as u32
}

/// Daily calorie target for reaching a goal weight in a given number of weeks
///
/// The required daily change is `(goal - current) x 3500 / (weeks x 7)`,
/// clamped into the configured deficit/surplus band before being applied, and
/// the resulting target never drops below the configured daily floor. The
/// weekly change reflects the clamped rate, not the requested one.
///
/// # Errors
///
/// Returns `AppError::ValueOutOfRange` if a weight is not positive or
/// `goal_weeks` is zero.
pub fn calculate_target_calories(
    tdee: u32,
    current_weight_lbs: f64,
    goal_weight_lbs: f64,
    goal_weeks: u32,
    config: &SafetyLimitsConfig,
) -> AppResult<TargetCalories> {
    if current_weight_lbs <= 0.0 || goal_weight_lbs <= 0.0 {
        return Err(AppError::value_out_of_range(format!(
            "weights must be positive, got current {current_weight_lbs} and goal {goal_weight_lbs}"
        )));
    }
    if goal_weeks == 0 {
        return Err(AppError::value_out_of_range(
            "goal_weeks must be at least 1",
        ));
    }

    let total_change_kcal = (goal_weight_lbs - current_weight_lbs) * KCAL_PER_LB_BODY_FAT;
    let requested_daily = total_change_kcal / (f64::from(goal_weeks) * DAYS_PER_WEEK_F64);
    let clamped_daily = requested_daily.clamp(-config.max_daily_deficit, config.max_daily_surplus);

    if (requested_daily - clamped_daily).abs() > f64::EPSILON {
        tracing::warn!(
            requested_daily,
            clamped_daily,
            "requested rate outside the safe band, clamping"
        );
    }

    let raw_target = (f64::from(tdee) + clamped_daily).round();
    let target_calories = raw_target.max(config.min_daily_calories) as u32;
    let deficit = (i64::from(tdee) - i64::from(target_calories)) as i32;
    let weekly_change_lbs =
        crate::scaling::round1(clamped_daily * DAYS_PER_WEEK_F64 / KCAL_PER_LB_BODY_FAT);

    Ok(TargetCalories {
        target_calories,
        deficit,
        weekly_change_lbs,
    })
}

/// Full calorie recommendation for a profile
///
/// Returns `Ok(None)` when weight, height, age, gender, or activity level is
/// missing: an incomplete profile is an absence, not an error. When the
/// profile carries no goal weight or goal weeks, the target is maintenance
/// (target = TDEE, zero deficit and weekly change).
///
/// # Errors
///
/// Propagates range failures from the underlying calculations.
pub fn calculate_for_profile(
    profile: &UserProfile,
    config: &TrackingConfig,
) -> AppResult<Option<CalorieCalculation>> {
    let (Some(weight_lbs), Some(height_inches), Some(age), Some(gender), Some(activity_level)) = (
        profile.weight_lbs,
        profile.height_total_inches(),
        profile.age,
        profile.gender,
        profile.activity_level,
    ) else {
        tracing::debug!(user_id = %profile.user_id, "profile incomplete, no recommendation");
        return Ok(None);
    };

    let bmr = calculate_bmr(weight_lbs, height_inches, age, gender, &config.bmr)?;
    let tdee = calculate_tdee(bmr, activity_level, &config.activity_factors);

    let target = match (profile.goal_weight_lbs, profile.goal_weeks) {
        (Some(goal_weight), Some(goal_weeks)) => calculate_target_calories(
            tdee,
            weight_lbs,
            goal_weight,
            goal_weeks,
            &config.safety_limits,
        )?,
        _ => TargetCalories {
            target_calories: tdee,
            deficit: 0,
            weekly_change_lbs: 0.0,
        },
    };

    Ok(Some(CalorieCalculation {
        bmr: bmr.round() as u32,
        tdee,
        target_calories: target.target_calories,
        deficit: target.deficit,
        weekly_change_lbs: target.weekly_change_lbs,
    }))
}
