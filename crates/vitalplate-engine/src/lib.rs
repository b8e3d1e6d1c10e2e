// ABOUTME: Lab-driven nutrition recommendation engine
// ABOUTME: Deficit detection, supplement advice, recipe plans, shopping lists, and dish ranking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalplate

#![deny(unsafe_code)]

//! # Vitalplate Engine
//!
//! Pure, synchronous scoring over immutable inputs. Callers fetch catalog snapshots
//! first and pass them in; nothing here performs I/O, logs, or caches across calls,
//! so every operation is safe to run concurrently and returns the same output for the
//! same input.
//!
//! ## Components
//!
//! - [`DeficitAnalyzer`]: lab panel + rules → severity-ranked deficits
//! - [`SupplementAdvisor`]: deficits → supplement suggestions and disclaimer
//! - [`RecipeSelector`]: deficits + recipes → diverse meal plan
//! - [`ShoppingListBuilder`]: plan → prioritized shopping list
//! - [`DishRecommender`]: deficits + restaurants + location → ranked dishes
//! - [`NutritionEngine`]: all of the above wired from one [`EngineConfig`]

/// Scoring weights, limits, and their validation
pub mod config;
/// Deficit detection from lab values
pub mod deficits;
/// Restaurant dish ranking
pub mod dishes;
/// Facade wiring every component from one configuration
pub mod engine;
/// Haversine distance helpers
pub mod geo;
/// Recipe scoring and plan selection
pub mod recipes;
/// Shopping list aggregation
pub mod shopping;
/// Supplement lookup table
pub mod supplements;

pub use config::{ConfigError, DishScoringConfig, EngineConfig, RecipeScoringConfig, SupplementConfig};
pub use deficits::DeficitAnalyzer;
pub use dishes::DishRecommender;
pub use engine::NutritionEngine;
pub use recipes::RecipeSelector;
pub use shopping::ShoppingListBuilder;
pub use supplements::SupplementAdvisor;
