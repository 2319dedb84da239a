// ABOUTME: Comprehensive tests for unit conversion, nutrition scaling, and entry creation
// ABOUTME: Covers fixed factors, food-specific units, cup overrides, and the stored-grams invariant
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 fitlog contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(clippy::float_cmp)]
#![allow(missing_docs)]

use chrono::NaiveDate;
use fitlog_core::config::ConversionConfig;
use fitlog_core::models::{FoodItem, MealType, ServingUnit};
use fitlog_intelligence::{convert_to_grams, create_meal_entry, scale_nutrition};

fn config() -> ConversionConfig {
    ConversionConfig::default()
}

/// A food with a cup override: 110 kcal per 100 g reference serving,
/// 150 g per cup.
fn granola() -> FoodItem {
    FoodItem {
        id: "granola".to_owned(),
        name: "Granola".to_owned(),
        calories: 110.0,
        protein_g: 3.0,
        carbs_g: 18.0,
        fat_g: 3.5,
        serving_grams: 100.0,
        default_unit: ServingUnit::Cup,
        permitted_units: vec![ServingUnit::Cup, ServingUnit::Gram, ServingUnit::Ounce],
        grams_per_cup: Some(150.0),
    }
}

fn plain_food() -> FoodItem {
    FoodItem {
        id: "plain".to_owned(),
        name: "Plain Food".to_owned(),
        calories: 100.0,
        protein_g: 10.0,
        carbs_g: 5.0,
        fat_g: 2.0,
        serving_grams: 40.0,
        default_unit: ServingUnit::Gram,
        permitted_units: vec![
            ServingUnit::Gram,
            ServingUnit::Ounce,
            ServingUnit::Cup,
            ServingUnit::Tablespoon,
            ServingUnit::Teaspoon,
            ServingUnit::Piece,
            ServingUnit::Slice,
            ServingUnit::Milliliter,
        ],
        grams_per_cup: None,
    }
}

// ============================================================================
// Fixed-factor units
// ============================================================================

#[test]
fn fixed_factors_match_the_configured_table() {
    let food = plain_food();
    let cfg = config();
    let cases = [
        (ServingUnit::Gram, 1.0),
        (ServingUnit::Ounce, 28.35),
        (ServingUnit::Tablespoon, 15.0),
        (ServingUnit::Teaspoon, 5.0),
        (ServingUnit::Milliliter, 1.0),
    ];
    for (unit, factor) in cases {
        let grams = convert_to_grams(3.0, unit, &food, &cfg).unwrap();
        assert_eq!(grams, 3.0 * factor, "wrong factor for {unit}");
    }
}

#[test]
fn piece_and_slice_scale_the_reference_serving() {
    let food = plain_food();
    let cfg = config();
    let pieces = convert_to_grams(2.5, ServingUnit::Piece, &food, &cfg).unwrap();
    let slices = convert_to_grams(2.5, ServingUnit::Slice, &food, &cfg).unwrap();
    assert_eq!(pieces, 100.0, "2.5 pieces of a 40 g serving");
    assert_eq!(slices, 100.0, "slice behaves like piece");
}

// ============================================================================
// Cup resolution
// ============================================================================

#[test]
fn cup_prefers_the_food_override() {
    let grams = convert_to_grams(2.0, ServingUnit::Cup, &granola(), &config()).unwrap();
    assert_eq!(grams, 300.0, "2 cups at 150 g/cup");
}

#[test]
fn cup_falls_back_to_the_default() {
    let grams = convert_to_grams(1.0, ServingUnit::Cup, &plain_food(), &config()).unwrap();
    assert_eq!(grams, 240.0);
}

#[test]
fn cup_round_trip_reproduces_nutrition_from_stored_grams() {
    let food = granola();
    let cfg = config();

    let grams = convert_to_grams(2.0, ServingUnit::Cup, &food, &cfg).unwrap();
    assert_eq!(grams, 300.0);

    // Nutrition computed from the stored grams, as the aggregator does
    let scaled = scale_nutrition(&food, grams).unwrap();
    assert_eq!(scaled.calories, 330, "110 kcal x 300/100");
    assert_eq!(scaled.protein_g, 9.0);
    assert_eq!(scaled.carbs_g, 54.0);
    assert_eq!(scaled.fat_g, 10.5);

    // Recomputing from the same stored grams gives the same answer
    let again = scale_nutrition(&food, grams).unwrap();
    assert_eq!(scaled, again);
}

// ============================================================================
// Scaling
// ============================================================================

#[test]
fn scaling_calories_round_to_integers_and_macros_to_one_decimal() {
    let food = plain_food();
    // 33 g of a 40 g serving: ratio 0.825
    let scaled = scale_nutrition(&food, 33.0).unwrap();
    assert_eq!(scaled.calories, 83, "100 x 0.825 = 82.5 rounds to 83");
    assert_eq!(scaled.protein_g, 8.3, "10 x 0.825 = 8.25 rounds to 8.3");
    assert_eq!(scaled.carbs_g, 4.1);
    assert_eq!(scaled.fat_g, 1.7, "2 x 0.825 = 1.65 rounds to 1.7");
}

#[test]
fn scaling_rejects_bad_serving_mass() {
    let mut food = plain_food();
    food.serving_grams = 0.0;
    assert!(scale_nutrition(&food, 100.0).is_err());
}

// ============================================================================
// Entry creation
// ============================================================================

#[test]
fn entry_grams_equal_converter_output() {
    let food = granola();
    let cfg = config();
    let date = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();

    let expected = convert_to_grams(2.0, ServingUnit::Cup, &food, &cfg).unwrap();
    let entry = create_meal_entry(
        "user-1",
        food,
        2.0,
        ServingUnit::Cup,
        MealType::Breakfast,
        date,
        &cfg,
    )
    .unwrap();

    assert_eq!(entry.grams_consumed, expected);
    assert_eq!(entry.date, date);
    assert_eq!(entry.meal_type, MealType::Breakfast);
}

#[test]
fn entry_rejects_units_the_food_does_not_permit() {
    let mut food = granola();
    food.permitted_units = vec![ServingUnit::Gram];
    food.default_unit = ServingUnit::Gram;
    let date = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();

    let result = create_meal_entry(
        "user-1",
        food,
        1.0,
        ServingUnit::Cup,
        MealType::Lunch,
        date,
        &config(),
    );
    assert!(result.is_err());
}

#[test]
fn entry_rejects_invalid_food_records() {
    let mut food = plain_food();
    food.calories = -5.0;
    let date = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();

    let result = create_meal_entry(
        "user-1",
        food,
        1.0,
        ServingUnit::Gram,
        MealType::Dinner,
        date,
        &config(),
    );
    assert!(result.is_err());
}
