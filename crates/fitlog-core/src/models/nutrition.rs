// ABOUTME: Nutrition tracking models for food intake logging
// ABOUTME: ServingUnit, MealType, FoodItem, and MealEntry definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 fitlog contributors

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Serving unit a food quantity can be entered in
///
/// The set is closed: invalid units are unrepresentable rather than
/// runtime-checked. Gram, ounce, tablespoon, teaspoon, and milliliter carry
/// global conversion factors; piece and slice resolve through the food's
/// reference serving mass; cup prefers the food's own grams-per-cup override.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ServingUnit {
    /// Grams
    Gram,
    /// Ounces (28.35 g)
    Ounce,
    /// Cups (food-specific, default 240 g)
    Cup,
    /// Tablespoons (15 g)
    Tablespoon,
    /// Teaspoons (5 g)
    Teaspoon,
    /// Pieces of the food's reference serving
    Piece,
    /// Slices of the food's reference serving
    Slice,
    /// Milliliters (1 g at unit density)
    Milliliter,
}

impl ServingUnit {
    /// Short label for display next to a quantity field
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Gram => "g",
            Self::Ounce => "oz",
            Self::Cup => "cup",
            Self::Tablespoon => "tbsp",
            Self::Teaspoon => "tsp",
            Self::Piece => "piece",
            Self::Slice => "slice",
            Self::Milliliter => "ml",
        }
    }
}

impl fmt::Display for ServingUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ServingUnit {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "g" | "gram" | "grams" => Ok(Self::Gram),
            "oz" | "ounce" | "ounces" => Ok(Self::Ounce),
            "cup" | "cups" => Ok(Self::Cup),
            "tbsp" | "tablespoon" | "tablespoons" => Ok(Self::Tablespoon),
            "tsp" | "teaspoon" | "teaspoons" => Ok(Self::Teaspoon),
            "piece" | "pieces" => Ok(Self::Piece),
            "slice" | "slices" => Ok(Self::Slice),
            "ml" | "milliliter" | "milliliters" => Ok(Self::Milliliter),
            other => Err(AppError::invalid_input(format!(
                "Unknown serving unit: '{other}'. Valid options: gram, ounce, cup, tablespoon, teaspoon, piece, slice, milliliter"
            ))),
        }
    }
}

/// Type of meal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    /// Breakfast meal
    Breakfast,
    /// Lunch meal
    Lunch,
    /// Dinner meal
    Dinner,
    /// Snack between meals
    Snack,
}

impl MealType {
    /// Parse meal type from string, defaulting unrecognized tags to snack
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "breakfast" => Self::Breakfast,
            "lunch" => Self::Lunch,
            "dinner" => Self::Dinner,
            _ => Self::Snack,
        }
    }

    /// All meal types in chronological display order
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Breakfast, Self::Lunch, Self::Dinner, Self::Snack]
    }
}

/// Immutable food reference record
///
/// Holds per-reference-serving nutrition and the serving geometry needed for
/// unit conversion. Created by the static catalog or an external nutrition
/// lookup; never mutated after retrieval.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodItem {
    /// Stable identifier (catalog slug or external product code)
    pub id: String,
    /// Food name
    pub name: String,
    /// Calories per reference serving
    pub calories: f64,
    /// Protein per reference serving (grams)
    pub protein_g: f64,
    /// Carbohydrates per reference serving (grams)
    pub carbs_g: f64,
    /// Fat per reference serving (grams)
    pub fat_g: f64,
    /// Mass of one reference serving (grams), always positive
    pub serving_grams: f64,
    /// Unit the quantity field defaults to
    pub default_unit: ServingUnit,
    /// Units this food may be entered in
    pub permitted_units: Vec<ServingUnit>,
    /// Food-specific grams per cup, overriding the global default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grams_per_cup: Option<f64>,
}

impl FoodItem {
    /// Check the record's construction invariants
    ///
    /// # Errors
    ///
    /// Returns `AppError::ValueOutOfRange` if the reference serving mass or a
    /// cup override is not positive, or if a macro value is negative;
    /// `AppError::InvalidInput` if the default unit is not permitted.
    pub fn validate(&self) -> AppResult<()> {
        if self.serving_grams <= 0.0 || !self.serving_grams.is_finite() {
            return Err(AppError::value_out_of_range(format!(
                "{}: serving_grams must be positive, got {}",
                self.id, self.serving_grams
            )));
        }
        if let Some(cup) = self.grams_per_cup {
            if cup <= 0.0 || !cup.is_finite() {
                return Err(AppError::value_out_of_range(format!(
                    "{}: grams_per_cup must be positive, got {cup}",
                    self.id
                )));
            }
        }
        let macros = [
            ("calories", self.calories),
            ("protein_g", self.protein_g),
            ("carbs_g", self.carbs_g),
            ("fat_g", self.fat_g),
        ];
        for (name, value) in macros {
            if value < 0.0 || !value.is_finite() {
                return Err(AppError::value_out_of_range(format!(
                    "{}: {name} must be non-negative, got {value}",
                    self.id
                )));
            }
        }
        if !self.permitted_units.contains(&self.default_unit) {
            return Err(AppError::invalid_input(format!(
                "{}: default unit {} is not in the permitted set",
                self.id, self.default_unit
            )));
        }
        Ok(())
    }

    /// Whether this food may be entered in the given unit
    #[must_use]
    pub fn permits(&self, unit: ServingUnit) -> bool {
        self.permitted_units.contains(&unit)
    }
}

/// A user's consumption event
///
/// `grams_consumed` is derived from (quantity, unit, food) exactly once at
/// creation time and is the single source of truth afterwards; it is never
/// re-derived, since the food's conversion factors could change between
/// sessions. Entries are created and deleted, never updated in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealEntry {
    /// Unique identifier assigned at creation
    pub id: String,
    /// Owning user
    pub user_id: String,
    /// Food consumed (snapshot of the reference record at log time)
    pub food: FoodItem,
    /// Quantity as entered by the user
    pub quantity: f64,
    /// Unit as entered by the user
    pub unit: ServingUnit,
    /// Derived gram quantity, the single source of truth for nutrition math
    pub grams_consumed: f64,
    /// Meal this entry belongs to
    pub meal_type: MealType,
    /// Calendar date the meal was eaten
    pub date: NaiveDate,
    /// Timestamp the entry was logged
    pub logged_at: DateTime<Utc>,
}
