// ABOUTME: Meal entry construction enforcing the derived-grams invariant
// ABOUTME: The only path through which MealEntry records come into existence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 fitlog contributors

//! Meal entry construction
//!
//! `grams_consumed` is derived from (quantity, unit, food) exactly once, here,
//! and is the single source of truth afterwards. Entries are created and
//! deleted, never updated in place, so the derivation never reruns against a
//! food record whose conversion factors may have changed.

use crate::units::convert_to_grams;
use chrono::{NaiveDate, Utc};
use fitlog_core::config::ConversionConfig;
use fitlog_core::errors::{AppError, AppResult};
use fitlog_core::models::{FoodItem, MealEntry, MealType, ServingUnit};
use uuid::Uuid;

/// Build a meal entry from user input
///
/// The food is snapshotted into the entry so later catalog or lookup changes
/// cannot alter a logged meal.
///
/// # Errors
///
/// Returns `AppError::InvalidInput` if the unit is not permitted for the food
/// or the quantity is not positive, and propagates the food's own validation
/// failures.
pub fn create_meal_entry(
    user_id: impl Into<String>,
    food: FoodItem,
    quantity: f64,
    unit: ServingUnit,
    meal_type: MealType,
    date: NaiveDate,
    config: &ConversionConfig,
) -> AppResult<MealEntry> {
    food.validate()?;

    if !food.permits(unit) {
        return Err(AppError::invalid_input(format!(
            "{} cannot be logged in {unit}; permitted units: {}",
            food.name,
            food.permitted_units
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        )));
    }

    let grams_consumed = convert_to_grams(quantity, unit, &food, config)?;

    tracing::debug!(
        food_id = %food.id,
        meal_type = ?meal_type,
        grams_consumed,
        "created meal entry"
    );

    Ok(MealEntry {
        id: Uuid::new_v4().to_string(),
        user_id: user_id.into(),
        food,
        quantity,
        unit,
        grams_consumed,
        meal_type,
        date,
        logged_at: Utc::now(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use fitlog_core::catalog::food_by_id;

    fn cfg() -> ConversionConfig {
        ConversionConfig::default()
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()
    }

    #[test]
    fn entry_stores_converter_output() {
        let food = food_by_id("egg").unwrap().clone();
        let entry = create_meal_entry(
            "user-1",
            food,
            2.0,
            ServingUnit::Piece,
            MealType::Breakfast,
            date(),
            &cfg(),
        )
        .unwrap();
        // 2 pieces x 50 g reference serving
        assert!((entry.grams_consumed - 100.0).abs() < f64::EPSILON);
        assert_eq!(entry.quantity, 2.0);
        assert_eq!(entry.unit, ServingUnit::Piece);
    }

    #[test]
    fn unpermitted_unit_is_rejected() {
        let food = food_by_id("olive-oil").unwrap().clone();
        let result = create_meal_entry(
            "user-1",
            food,
            1.0,
            ServingUnit::Cup,
            MealType::Dinner,
            date(),
            &cfg(),
        );
        assert!(result.is_err(), "olive oil does not permit cup entry");
    }

    #[test]
    fn entries_get_unique_ids() {
        let food = food_by_id("banana").unwrap().clone();
        let a = create_meal_entry(
            "user-1",
            food.clone(),
            1.0,
            ServingUnit::Piece,
            MealType::Snack,
            date(),
            &cfg(),
        )
        .unwrap();
        let b = create_meal_entry(
            "user-1",
            food,
            1.0,
            ServingUnit::Piece,
            MealType::Snack,
            date(),
            &cfg(),
        )
        .unwrap();
        assert_ne!(a.id, b.id);
    }
}
