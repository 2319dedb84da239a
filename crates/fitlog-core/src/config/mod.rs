// ABOUTME: Tracking configuration with process-wide immutable access
// ABOUTME: TrackingConfig aggregate, ConfigError, and the OnceLock-backed global accessor
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 fitlog contributors

//! Tracking configuration
//!
//! Every tunable number in the calculation cluster lives here: unit gram
//! factors, Mifflin-St Jeor coefficients, activity multipliers, macro split
//! factors, and calorie safety limits. All of it is immutable configuration
//! loaded once and passed by reference to the calculators; nothing here
//! mutates after startup.

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use thiserror::Error;

/// Nutrition calculation configuration groups
pub mod nutrition;

pub use nutrition::{
    ActivityFactorsConfig, BmrConfig, ConversionConfig, MacroSplitConfig, SafetyLimitsConfig,
};

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A configured value is outside its valid range
    #[error("configuration value out of range: {0}")]
    ValueOutOfRange(String),
    /// A configured split or factor set is inconsistent
    #[error("invalid configuration split: {0}")]
    InvalidSplit(String),
}

impl From<ConfigError> for crate::errors::AppError {
    fn from(err: ConfigError) -> Self {
        Self::config(err.to_string())
    }
}

/// Complete tracking configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrackingConfig {
    /// Serving-unit to gram conversion factors
    pub conversion: ConversionConfig,
    /// Basal Metabolic Rate calculation coefficients
    pub bmr: BmrConfig,
    /// Activity factor multipliers for TDEE calculation
    pub activity_factors: ActivityFactorsConfig,
    /// Macronutrient split factors for goal-based suggestions
    pub macro_split: MacroSplitConfig,
    /// Calorie safety limits for target recommendations
    pub safety_limits: SafetyLimitsConfig,
}

static TRACKING_CONFIG: OnceLock<TrackingConfig> = OnceLock::new();

impl TrackingConfig {
    /// Get the process-wide configuration, initializing defaults on first use
    #[must_use]
    pub fn global() -> &'static Self {
        TRACKING_CONFIG.get_or_init(|| {
            tracing::debug!("initializing tracking configuration with defaults");
            Self::default()
        })
    }

    /// Validate every configuration group
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` describing the first invalid group encountered.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.conversion.validate()?;
        self.activity_factors.validate()?;
        self.macro_split.validate()?;
        self.safety_limits.validate()?;
        Ok(())
    }
}
