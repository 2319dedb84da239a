// ABOUTME: Nutrition configuration groups for conversion, BMR, TDEE, macros, and safety limits
// ABOUTME: Scientific defaults with validation for every tunable the calculators consume
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 fitlog contributors

//! Nutrition calculation configuration
//!
//! # Scientific References
//!
//! - BMR: Mifflin, M.D., et al. (1990). A new predictive equation for resting
//!   energy expenditure. *American Journal of Clinical Nutrition*, 51(2),
//!   241-247. DOI: 10.1093/ajcn/51.2.241
//! - Activity factors: `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010).
//!   Exercise Physiology.

use super::ConfigError;
use serde::{Deserialize, Serialize};

/// Serving-unit to gram conversion factors
///
/// Piece and slice have no global factor; they are inherently food-specific
/// and resolve through the food's reference serving mass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionConfig {
    /// Grams per ounce: 28.35
    pub ounce_grams: f64,
    /// Grams per tablespoon: 15
    pub tablespoon_grams: f64,
    /// Grams per teaspoon: 5
    pub teaspoon_grams: f64,
    /// Grams per milliliter: 1 (unit density)
    pub milliliter_grams: f64,
    /// Grams per cup when the food carries no cup override: 240
    pub default_cup_grams: f64,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            ounce_grams: 28.35,
            tablespoon_grams: 15.0,
            teaspoon_grams: 5.0,
            milliliter_grams: 1.0,
            default_cup_grams: 240.0,
        }
    }
}

impl ConversionConfig {
    /// Validate that every factor is positive
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` if any factor is not positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let factors = [
            ("ounce_grams", self.ounce_grams),
            ("tablespoon_grams", self.tablespoon_grams),
            ("teaspoon_grams", self.teaspoon_grams),
            ("milliliter_grams", self.milliliter_grams),
            ("default_cup_grams", self.default_cup_grams),
        ];

        for (name, value) in factors {
            if value <= 0.0 || !value.is_finite() {
                return Err(ConfigError::ValueOutOfRange(format!(
                    "{name} must be a positive gram factor, got {value}"
                )));
            }
        }

        Ok(())
    }
}

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Reference: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor female constant (-161)
    pub msj_female_constant: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
        }
    }
}

/// Activity factor multipliers for TDEE calculation
///
/// Reference: `McArdle` et al. (2010) - Exercise Physiology
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Little or no exercise, desk job: 1.2
    pub sedentary: f64,
    /// Light exercise 1-3 days/week: 1.375
    pub light: f64,
    /// Moderate exercise 3-5 days/week: 1.55
    pub moderate: f64,
    /// Hard exercise 6-7 days/week: 1.725
    pub active: f64,
    /// Very intense exercise, physical job: 1.9
    pub very_active: f64,
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            light: 1.375,
            moderate: 1.55,
            active: 1.725,
            very_active: 1.9,
        }
    }
}

impl ActivityFactorsConfig {
    /// Validate that multipliers are positive and monotonically increasing
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if any multiplier is non-positive or the
    /// sequence sedentary..very_active is not strictly increasing.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ordered = [
            self.sedentary,
            self.light,
            self.moderate,
            self.active,
            self.very_active,
        ];

        if ordered.iter().any(|factor| *factor <= 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "activity factors must be positive".into(),
            ));
        }

        if ordered.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(ConfigError::InvalidSplit(
                "activity factors must increase from sedentary to very_active".into(),
            ));
        }

        Ok(())
    }
}

/// Macronutrient split factors for goal-based suggestions
///
/// Protein: 0.8-1 g per lb of body weight for muscle preservation.
/// Fat: 25-30% of target calories. Carbs take the remainder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacroSplitConfig {
    /// Protein grams per lb of body weight when losing: 1.0
    pub protein_g_per_lb_lose: f64,
    /// Protein grams per lb of body weight when gaining: 0.9
    pub protein_g_per_lb_gain: f64,
    /// Protein grams per lb of body weight when maintaining: 0.8
    pub protein_g_per_lb_maintain: f64,
    /// Fat share of target calories when losing: 0.25
    pub fat_percent_lose: f64,
    /// Fat share of target calories otherwise: 0.30
    pub fat_percent_default: f64,
}

impl Default for MacroSplitConfig {
    fn default() -> Self {
        Self {
            protein_g_per_lb_lose: 1.0,
            protein_g_per_lb_gain: 0.9,
            protein_g_per_lb_maintain: 0.8,
            fat_percent_lose: 0.25,
            fat_percent_default: 0.30,
        }
    }
}

impl MacroSplitConfig {
    /// Validate protein factors and fat percentages
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a protein factor is non-positive or a fat
    /// share falls outside (0, 1).
    pub fn validate(&self) -> Result<(), ConfigError> {
        let protein_factors = [
            self.protein_g_per_lb_lose,
            self.protein_g_per_lb_gain,
            self.protein_g_per_lb_maintain,
        ];
        if protein_factors.iter().any(|factor| *factor <= 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "protein g/lb factors must be positive".into(),
            ));
        }

        for (name, share) in [
            ("fat_percent_lose", self.fat_percent_lose),
            ("fat_percent_default", self.fat_percent_default),
        ] {
            if !(0.0..1.0).contains(&share) || share == 0.0 {
                return Err(ConfigError::ValueOutOfRange(format!(
                    "{name} must be a fraction in (0, 1), got {share}"
                )));
            }
        }

        Ok(())
    }
}

/// Calorie safety limits for target recommendations
///
/// Safe weight loss is 0.5-2 lbs per week, safe gain 0.5-1 lb per week.
/// 1400 kcal/day splits the difference between the common 1200 (women) and
/// 1500 (men) floors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SafetyLimitsConfig {
    /// Absolute daily calorie floor for any recommendation: 1400
    pub min_daily_calories: f64,
    /// Largest allowed daily deficit relative to TDEE: 1000
    pub max_daily_deficit: f64,
    /// Largest allowed daily surplus relative to TDEE: 500
    pub max_daily_surplus: f64,
}

impl Default for SafetyLimitsConfig {
    fn default() -> Self {
        Self {
            min_daily_calories: 1400.0,
            max_daily_deficit: 1000.0,
            max_daily_surplus: 500.0,
        }
    }
}

impl SafetyLimitsConfig {
    /// Validate that all limits are positive
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` if any limit is not positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let limits = [
            ("min_daily_calories", self.min_daily_calories),
            ("max_daily_deficit", self.max_daily_deficit),
            ("max_daily_surplus", self.max_daily_surplus),
        ];

        for (name, value) in limits {
            if value <= 0.0 {
                return Err(ConfigError::ValueOutOfRange(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }

        Ok(())
    }
}
