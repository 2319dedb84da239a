// ABOUTME: Built-in common foods for quick logging without a nutrition lookup
// ABOUTME: Reference servings, permitted units, and cup overrides per food
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 fitlog contributors

use crate::models::{FoodItem, ServingUnit};
use std::sync::LazyLock;

use ServingUnit::{Cup, Gram, Milliliter, Ounce, Piece, Slice, Tablespoon, Teaspoon};

/// Raw catalog row: id, name, [calories, protein, carbs, fat] per reference
/// serving, serving grams, grams per cup override, default unit, permitted
/// units.
struct FoodRow {
    id: &'static str,
    name: &'static str,
    per_serving: [f64; 4],
    serving_grams: f64,
    grams_per_cup: Option<f64>,
    default_unit: ServingUnit,
    permitted: &'static [ServingUnit],
}

const FOOD_ROWS: &[FoodRow] = &[
    FoodRow {
        id: "egg",
        name: "Egg (large)",
        per_serving: [72.0, 6.3, 0.4, 5.0],
        serving_grams: 50.0,
        grams_per_cup: None,
        default_unit: Piece,
        permitted: &[Piece, Gram, Ounce],
    },
    FoodRow {
        id: "chicken-breast",
        name: "Chicken Breast",
        per_serving: [165.0, 31.0, 0.0, 3.6],
        serving_grams: 100.0,
        grams_per_cup: None,
        default_unit: Gram,
        permitted: &[Gram, Ounce, Piece],
    },
    FoodRow {
        id: "white-rice",
        name: "White Rice (cooked)",
        per_serving: [130.0, 2.7, 28.0, 0.3],
        serving_grams: 100.0,
        grams_per_cup: Some(158.0),
        default_unit: Cup,
        permitted: &[Cup, Gram, Ounce],
    },
    FoodRow {
        id: "banana",
        name: "Banana (medium)",
        per_serving: [105.0, 1.3, 27.0, 0.4],
        serving_grams: 118.0,
        grams_per_cup: None,
        default_unit: Piece,
        permitted: &[Piece, Gram],
    },
    FoodRow {
        id: "oatmeal",
        name: "Oatmeal (cooked)",
        per_serving: [150.0, 5.0, 27.0, 3.0],
        serving_grams: 234.0,
        grams_per_cup: Some(234.0),
        default_unit: Cup,
        permitted: &[Cup, Gram],
    },
    FoodRow {
        id: "salmon",
        name: "Salmon",
        per_serving: [208.0, 20.0, 0.0, 13.0],
        serving_grams: 100.0,
        grams_per_cup: None,
        default_unit: Gram,
        permitted: &[Gram, Ounce],
    },
    FoodRow {
        id: "broccoli",
        name: "Broccoli",
        per_serving: [55.0, 3.7, 11.0, 0.6],
        serving_grams: 91.0,
        grams_per_cup: Some(91.0),
        default_unit: Cup,
        permitted: &[Cup, Gram],
    },
    FoodRow {
        id: "apple",
        name: "Apple (medium)",
        per_serving: [95.0, 0.5, 25.0, 0.3],
        serving_grams: 182.0,
        grams_per_cup: None,
        default_unit: Piece,
        permitted: &[Piece, Gram],
    },
    FoodRow {
        id: "wheat-bread",
        name: "Whole Wheat Bread",
        per_serving: [81.0, 4.0, 13.8, 1.1],
        serving_grams: 28.0,
        grams_per_cup: None,
        default_unit: Slice,
        permitted: &[Slice, Gram],
    },
    FoodRow {
        id: "peanut-butter",
        name: "Peanut Butter",
        per_serving: [94.0, 4.0, 3.5, 8.0],
        serving_grams: 16.0,
        grams_per_cup: None,
        default_unit: Tablespoon,
        permitted: &[Tablespoon, Teaspoon, Gram],
    },
    FoodRow {
        id: "olive-oil",
        name: "Olive Oil",
        per_serving: [119.0, 0.0, 0.0, 13.5],
        serving_grams: 13.5,
        grams_per_cup: None,
        default_unit: Tablespoon,
        permitted: &[Tablespoon, Teaspoon],
    },
    FoodRow {
        id: "milk-2pct",
        name: "Milk (2%)",
        per_serving: [122.0, 8.1, 11.7, 4.8],
        serving_grams: 244.0,
        grams_per_cup: Some(244.0),
        default_unit: Cup,
        permitted: &[Cup, Milliliter, Gram],
    },
];

static COMMON_FOODS: LazyLock<Vec<FoodItem>> = LazyLock::new(|| {
    FOOD_ROWS
        .iter()
        .map(|row| FoodItem {
            id: row.id.to_owned(),
            name: row.name.to_owned(),
            calories: row.per_serving[0],
            protein_g: row.per_serving[1],
            carbs_g: row.per_serving[2],
            fat_g: row.per_serving[3],
            serving_grams: row.serving_grams,
            default_unit: row.default_unit,
            permitted_units: row.permitted.to_vec(),
            grams_per_cup: row.grams_per_cup,
        })
        .collect()
});

/// Common foods for quick add
#[must_use]
pub fn common_foods() -> &'static [FoodItem] {
    &COMMON_FOODS
}

/// Look up a common food by catalog id
#[must_use]
pub fn food_by_id(id: &str) -> Option<&'static FoodItem> {
    COMMON_FOODS.iter().find(|food| food.id == id)
}

/// Case-insensitive name search over the common foods
#[must_use]
pub fn search_common_foods(query: &str) -> Vec<&'static FoodItem> {
    let needle = query.to_lowercase();
    COMMON_FOODS
        .iter()
        .filter(|food| food.name.to_lowercase().contains(&needle))
        .collect()
}
