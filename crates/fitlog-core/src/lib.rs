// ABOUTME: Core types and constants for the fitlog tracking platform
// ABOUTME: Foundation crate with error handling, domain models, configuration, and the static catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 fitlog contributors

#![deny(unsafe_code)]

//! # fitlog Core
//!
//! Foundation crate providing shared types and constants for the fitlog meal
//! and workout tracking core. This crate is designed to change infrequently,
//! enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Conversion factors and energy constants organized by domain
//! - **config**: Tracking configuration with scientific defaults and validation
//! - **models**: Domain models (`FoodItem`, `MealEntry`, `UserProfile`, `Workout`, plans)
//! - **catalog**: Built-in foods, exercises, and workout plans

/// Unified error handling system with standard error codes
pub mod errors;

/// Conversion factors and energy constants organized by domain
pub mod constants;

/// Tracking configuration (unit factors, BMR coefficients, safety limits)
pub mod config;

/// Core data models (nutrition, profile, workout, plan)
pub mod models;

/// Built-in foods, exercises, and workout plans
pub mod catalog;
