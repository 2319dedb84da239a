// ABOUTME: User profile models for body stats, goals, and derived calorie results
// ABOUTME: Gender, ActivityLevel, GoalDirection, UserProfile, CalorieCalculation, MacroTargets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 fitlog contributors

use crate::constants::units::INCHES_PER_FOOT;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Gender for BMR calculations
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male gender (higher BMR)
    Male,
    /// Female gender (lower BMR)
    Female,
}

/// Activity level for TDEE calculation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise, desk job
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    Moderate,
    /// Hard exercise 6-7 days/week
    Active,
    /// Very intense exercise, physical job
    VeryActive,
}

impl ActivityLevel {
    /// Human-readable description shown next to the setting
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Sedentary => "Little or no exercise, desk job",
            Self::Light => "Light exercise 1-3 days/week",
            Self::Moderate => "Moderate exercise 3-5 days/week",
            Self::Active => "Hard exercise 6-7 days/week",
            Self::VeryActive => "Very intense exercise, physical job",
        }
    }
}

/// Direction of a weight goal, derived by comparing goal weight to current
/// weight
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GoalDirection {
    /// Goal weight below current weight
    Lose,
    /// Goal weight equal to current weight
    Maintain,
    /// Goal weight above current weight
    Gain,
}

impl GoalDirection {
    /// Derive the direction from current and goal weight
    #[must_use]
    pub fn from_weights(current_lbs: f64, goal_lbs: f64) -> Self {
        if goal_lbs < current_lbs {
            Self::Lose
        } else if goal_lbs > current_lbs {
            Self::Gain
        } else {
            Self::Maintain
        }
    }
}

/// Daily macronutrient targets in integer grams
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MacroTargets {
    /// Daily protein target (grams)
    pub protein_g: u32,
    /// Daily carbohydrate target (grams)
    pub carbs_g: u32,
    /// Daily fat target (grams)
    pub fat_g: u32,
}

/// User body stats and goals
///
/// Created at first sign-in with every stat unset; the user fills fields in
/// through settings. Missing stats mean the energy calculator yields no
/// recommendation, not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// Owning user
    pub user_id: String,
    /// Display name
    pub display_name: String,
    /// Current body weight (lbs)
    pub weight_lbs: Option<f64>,
    /// Height, feet component
    pub height_ft: Option<u32>,
    /// Height, inches component (0-11)
    pub height_in: Option<u32>,
    /// Age in years
    pub age: Option<u32>,
    /// Gender for BMR calculation
    pub gender: Option<Gender>,
    /// Activity level for TDEE calculation
    pub activity_level: Option<ActivityLevel>,
    /// Goal body weight (lbs)
    pub goal_weight_lbs: Option<f64>,
    /// Weeks allotted to reach the goal weight
    pub goal_weeks: Option<u32>,
    /// Daily calorie goal the user accepted
    pub calorie_goal: Option<u32>,
    /// Daily macro targets the user accepted
    pub macro_targets: Option<MacroTargets>,
    /// Profile creation timestamp
    pub created_at: DateTime<Utc>,
}

impl UserProfile {
    /// New profile with defaults, as created at first sign-in
    #[must_use]
    pub fn new(user_id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            display_name: display_name.into(),
            weight_lbs: None,
            height_ft: None,
            height_in: None,
            age: None,
            gender: None,
            activity_level: None,
            goal_weight_lbs: None,
            goal_weeks: None,
            calorie_goal: None,
            macro_targets: None,
            created_at: Utc::now(),
        }
    }

    /// Total height in inches, if the feet component is set
    ///
    /// The inches component is optional and defaults to zero, matching how
    /// the settings screen collects height.
    #[must_use]
    pub fn height_total_inches(&self) -> Option<f64> {
        self.height_ft.map(|ft| {
            f64::from(ft).mul_add(INCHES_PER_FOOT, f64::from(self.height_in.unwrap_or(0)))
        })
    }

    /// Whether every field the energy calculator requires is present
    #[must_use]
    pub const fn has_body_stats(&self) -> bool {
        self.weight_lbs.is_some()
            && self.height_ft.is_some()
            && self.age.is_some()
            && self.gender.is_some()
            && self.activity_level.is_some()
    }

    /// Goal direction, when both current and goal weight are known
    #[must_use]
    pub fn goal_direction(&self) -> Option<GoalDirection> {
        match (self.weight_lbs, self.goal_weight_lbs) {
            (Some(current), Some(goal)) => Some(GoalDirection::from_weights(current, goal)),
            _ => None,
        }
    }
}

/// Derived calorie recommendation bundle
///
/// Never persisted; recomputed whenever the relevant profile fields change.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CalorieCalculation {
    /// Basal Metabolic Rate (kcal/day), rounded
    pub bmr: u32,
    /// Total Daily Energy Expenditure (kcal/day), rounded
    pub tdee: u32,
    /// Recommended daily calorie target, floored at the safety minimum
    pub target_calories: u32,
    /// TDEE minus the final target (positive = deficit)
    pub deficit: i32,
    /// Estimated weekly weight change (lbs/week, one decimal)
    pub weekly_change_lbs: f64,
}
