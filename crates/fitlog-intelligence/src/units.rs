// ABOUTME: Serving-unit to gram conversion for logged food quantities
// ABOUTME: Fixed gram factors plus food-specific piece, slice, and cup resolution
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 fitlog contributors

//! Unit conversion
//!
//! Every logged quantity is reduced to grams exactly once, at entry creation.
//! Gram, ounce, tablespoon, teaspoon, and milliliter carry global factors
//! from [`ConversionConfig`]; piece and slice resolve through the food's
//! reference serving mass; cup prefers the food's own grams-per-cup override
//! and falls back to the configured default.

use fitlog_core::config::ConversionConfig;
use fitlog_core::errors::{AppError, AppResult};
use fitlog_core::models::{FoodItem, ServingUnit};

/// Convert a quantity in the given unit to grams of the given food
///
/// # Errors
///
/// Returns `AppError::InvalidInput` if the quantity is not a positive finite
/// number.
pub fn convert_to_grams(
    quantity: f64,
    unit: ServingUnit,
    food: &FoodItem,
    config: &ConversionConfig,
) -> AppResult<f64> {
    if quantity <= 0.0 || !quantity.is_finite() {
        return Err(AppError::invalid_input(format!(
            "quantity must be a positive number, got {quantity}"
        )));
    }

    let grams = match unit {
        ServingUnit::Gram => quantity,
        ServingUnit::Ounce => quantity * config.ounce_grams,
        ServingUnit::Tablespoon => quantity * config.tablespoon_grams,
        ServingUnit::Teaspoon => quantity * config.teaspoon_grams,
        ServingUnit::Milliliter => quantity * config.milliliter_grams,
        ServingUnit::Piece | ServingUnit::Slice => quantity * food.serving_grams,
        ServingUnit::Cup => quantity * food.grams_per_cup.unwrap_or(config.default_cup_grams),
    };

    tracing::debug!(
        food_id = %food.id,
        quantity,
        unit = %unit,
        grams,
        "converted quantity to grams"
    );

    Ok(grams)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use fitlog_core::catalog::food_by_id;

    fn config() -> ConversionConfig {
        ConversionConfig::default()
    }

    #[test]
    fn gram_is_identity() {
        let food = food_by_id("chicken-breast").unwrap();
        let grams = convert_to_grams(150.0, ServingUnit::Gram, food, &config()).unwrap();
        assert!((grams - 150.0).abs() < f64::EPSILON);
    }

    #[test]
    fn fixed_factors_ignore_the_food() {
        let chicken = food_by_id("chicken-breast").unwrap();
        let salmon = food_by_id("salmon").unwrap();
        let cfg = config();
        for unit in [
            ServingUnit::Ounce,
            ServingUnit::Tablespoon,
            ServingUnit::Teaspoon,
            ServingUnit::Milliliter,
        ] {
            let a = convert_to_grams(2.0, unit, chicken, &cfg).unwrap();
            let b = convert_to_grams(2.0, unit, salmon, &cfg).unwrap();
            assert!(
                (a - b).abs() < f64::EPSILON,
                "{unit} should not depend on the food"
            );
        }
    }

    #[test]
    fn zero_and_negative_quantities_are_rejected() {
        let food = food_by_id("egg").unwrap();
        let cfg = config();
        assert!(convert_to_grams(0.0, ServingUnit::Gram, food, &cfg).is_err());
        assert!(convert_to_grams(-1.0, ServingUnit::Gram, food, &cfg).is_err());
        assert!(convert_to_grams(f64::NAN, ServingUnit::Gram, food, &cfg).is_err());
    }
}
