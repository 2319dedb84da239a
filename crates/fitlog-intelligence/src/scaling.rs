// ABOUTME: Nutrition scaling from a food's reference serving to consumed grams
// ABOUTME: ScaledNutrition value object with display-grade rounding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 fitlog contributors

//! Nutrition scaling
//!
//! A food record carries nutrition per reference serving; a meal entry
//! carries consumed grams. Scaling is a single linear ratio. Calories round
//! to the nearest integer, macros to one decimal, matching what the log
//! screens display.

use fitlog_core::errors::{AppError, AppResult};
use fitlog_core::models::FoodItem;
use serde::{Deserialize, Serialize};

/// Nutrition for an actual consumed amount
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ScaledNutrition {
    /// Calories, rounded to the nearest integer
    pub calories: i32,
    /// Protein (grams), one decimal
    pub protein_g: f64,
    /// Carbohydrates (grams), one decimal
    pub carbs_g: f64,
    /// Fat (grams), one decimal
    pub fat_g: f64,
}

/// Round to one decimal place
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Scale a food's per-serving nutrition to the given consumed grams
///
/// # Errors
///
/// Returns `AppError::ValueOutOfRange` if the food's reference serving mass
/// is not positive, or `AppError::InvalidInput` if `grams_consumed` is
/// negative or not finite.
pub fn scale_nutrition(food: &FoodItem, grams_consumed: f64) -> AppResult<ScaledNutrition> {
    if food.serving_grams <= 0.0 || !food.serving_grams.is_finite() {
        return Err(AppError::value_out_of_range(format!(
            "{}: serving_grams must be positive, got {}",
            food.id, food.serving_grams
        )));
    }
    if grams_consumed < 0.0 || !grams_consumed.is_finite() {
        return Err(AppError::invalid_input(format!(
            "grams_consumed must be non-negative, got {grams_consumed}"
        )));
    }

    let ratio = grams_consumed / food.serving_grams;

    Ok(ScaledNutrition {
        calories: (food.calories * ratio).round() as i32,
        protein_g: round1(food.protein_g * ratio),
        carbs_g: round1(food.carbs_g * ratio),
        fat_g: round1(food.fat_g * ratio),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use fitlog_core::catalog::food_by_id;

    #[test]
    fn scaling_is_linear_in_grams() {
        let food = food_by_id("chicken-breast").unwrap();
        let single = scale_nutrition(food, 100.0).unwrap();
        let double = scale_nutrition(food, 200.0).unwrap();
        assert_eq!(double.calories, single.calories * 2);
        assert!((double.protein_g - single.protein_g * 2.0).abs() < 1e-9);
    }

    #[test]
    fn zero_grams_scales_to_zero() {
        let food = food_by_id("banana").unwrap();
        let scaled = scale_nutrition(food, 0.0).unwrap();
        assert_eq!(scaled.calories, 0);
        assert!(scaled.protein_g.abs() < f64::EPSILON);
    }

    #[test]
    fn negative_grams_are_rejected() {
        let food = food_by_id("banana").unwrap();
        assert!(scale_nutrition(food, -10.0).is_err());
    }

    #[test]
    fn macros_round_to_one_decimal() {
        let food = food_by_id("egg").unwrap();
        // 73 g of a 50 g serving: protein 6.3 * 1.46 = 9.198 -> 9.2
        let scaled = scale_nutrition(food, 73.0).unwrap();
        assert!((scaled.protein_g - 9.2).abs() < f64::EPSILON);
    }
}
