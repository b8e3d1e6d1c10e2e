// ABOUTME: Core data models for the Vitalplate recommendation engine
// ABOUTME: Re-exports biomarker rules, deficits, recipes, restaurants, and recommendation outputs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalplate

//! # Data Models
//!
//! Value types shared by the engine, the catalogs, and the orchestrating service.
//!
//! ## Design Principles
//!
//! - **Validated at the boundary**: a [`BiomarkerRule`] can only be built through
//!   validation, so the engine never sees an unknown operator or a zero threshold
//! - **Immutable inputs**: scoring reads catalog entities and produces new output values
//! - **Serializable**: every model round-trips through serde for JSON catalogs and reports
//!
//! ## Core Models
//!
//! - `BiomarkerRule` / `Deficit`: lab thresholds and the deficits they detect
//! - `Recipe` / `PlanItem` / `ShoppingItem`: meal planning
//! - `Restaurant` / `Dish` / `ScoredDish`: eating out
//! - `Recommendation`: supplement suggestions plus the terminal disclaimer

mod biomarker;
mod deficit;
mod preferences;
mod priority;
mod recipe;
mod recommendation;
mod restaurant;

// Biomarker domain
pub use biomarker::{BiomarkerRule, BiomarkerRuleRecord, ComparisonOperator, LabPanel};

// Deficit domain
pub use deficit::Deficit;

// Planning preferences
pub use preferences::Preferences;

// Shared priority levels
pub use priority::Priority;

// Recipe domain
pub use recipe::{Ingredient, PlanItem, Recipe, ShoppingItem};

// Restaurant domain
pub use restaurant::{Dish, GeoPoint, Restaurant, ScoredDish};

// Supplement domain
pub use recommendation::{Recommendation, SupplementRecommendation};
