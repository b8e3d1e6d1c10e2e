// ABOUTME: Main library entry point for the Vitalplate nutrition recommendation service
// ABOUTME: Wires catalogs, configuration, and logging around the pure recommendation engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalplate

// deny(unsafe_code): zero-tolerance unsafe policy across the workspace
#![deny(unsafe_code)]

//! # Vitalplate
//!
//! Turns a blood-biomarker panel into nutrition guidance: detected deficits,
//! supplement suggestions, a diverse meal plan with its shopping list, and
//! ranked restaurant dishes near a location.
//!
//! ## Architecture
//!
//! - **`vitalplate_core`**: error types, domain models, shared constants
//! - **`vitalplate_engine`**: pure scoring and selection, no I/O, no logging
//! - **Catalogs**: async read contracts plus in-memory and JSON file implementations
//! - **Service**: per-request orchestration over catalog snapshots
//! - **Config / Logging**: environment-driven setup, loaded once by the binary
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use vitalplate::catalog::MemoryCatalog;
//! use vitalplate::service::{GenerateRequest, NutritionService};
//! use vitalplate_engine::EngineConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let catalog = Arc::new(MemoryCatalog::seeded()?);
//!     let service = NutritionService::from_catalog(catalog, EngineConfig::default());
//!
//!     let labs = [("ferritin".to_owned(), 20.0)].into_iter().collect();
//!     let report = service.generate(GenerateRequest::new("diy", labs)).await?;
//!     println!("{}", serde_json::to_string_pretty(&report)?);
//!     Ok(())
//! }
//! ```

/// Rule, recipe, and restaurant catalogs
pub mod catalog;

/// Environment configuration
pub mod config;

/// Structured logging setup
pub mod logging;

/// Request orchestration
pub mod service;

pub use vitalplate_core;
pub use vitalplate_engine;
