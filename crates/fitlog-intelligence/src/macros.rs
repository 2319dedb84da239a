// ABOUTME: Goal-based macronutrient split suggestion
// ABOUTME: Protein anchored to body weight, fat as a calorie share, carbs take the remainder
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 fitlog contributors

//! Macro suggestion
//!
//! Protein is anchored to body weight (higher when cutting to preserve
//! muscle), fat is a fixed share of target calories, and carbohydrates take
//! whatever calories remain. Carbs floor at zero: a very low target with a
//! heavy body weight can exhaust the calorie budget on protein and fat alone.

use fitlog_core::config::MacroSplitConfig;
use fitlog_core::constants::energy::{KCAL_PER_G_CARBS, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN};
use fitlog_core::errors::{AppError, AppResult};
use fitlog_core::models::{GoalDirection, MacroTargets};

/// Suggest daily macro targets for a calorie target, body weight, and goal
///
/// # Errors
///
/// Returns `AppError::ValueOutOfRange` if the body weight is not positive.
pub fn suggest_macros(
    target_calories: u32,
    weight_lbs: f64,
    goal: GoalDirection,
    config: &MacroSplitConfig,
) -> AppResult<MacroTargets> {
    if weight_lbs <= 0.0 || !weight_lbs.is_finite() {
        return Err(AppError::value_out_of_range(format!(
            "weight must be positive, got {weight_lbs}"
        )));
    }

    let protein_per_lb = match goal {
        GoalDirection::Lose => config.protein_g_per_lb_lose,
        GoalDirection::Gain => config.protein_g_per_lb_gain,
        GoalDirection::Maintain => config.protein_g_per_lb_maintain,
    };
    let fat_share = match goal {
        GoalDirection::Lose => config.fat_percent_lose,
        GoalDirection::Gain | GoalDirection::Maintain => config.fat_percent_default,
    };

    let protein_g = (weight_lbs * protein_per_lb).round();
    let protein_calories = protein_g * KCAL_PER_G_PROTEIN;

    let fat_calories = f64::from(target_calories) * fat_share;
    let fat_g = (fat_calories / KCAL_PER_G_FAT).round();

    let carb_calories = f64::from(target_calories) - protein_calories - fat_calories;
    let carbs_g = (carb_calories / KCAL_PER_G_CARBS).round().max(0.0);

    tracing::debug!(
        target_calories,
        ?goal,
        protein_g,
        fat_g,
        carbs_g,
        "suggested macro split"
    );

    Ok(MacroTargets {
        protein_g: protein_g as u32,
        carbs_g: carbs_g as u32,
        fat_g: fat_g as u32,
    })
}
