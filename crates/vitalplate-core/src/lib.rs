// ABOUTME: Core types and constants for the Vitalplate nutrition engine
// ABOUTME: Foundation crate with error handling, domain models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalplate

#![deny(unsafe_code)]

//! # Vitalplate Core
//!
//! Foundation crate providing shared types and constants for the Vitalplate
//! recommendation engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and the typed
//!   `InvalidRuleError` / `ValidationError` taxonomy
//! - **constants**: Display names, pantry staples, and other shared constants
//! - **models**: Biomarker rules, deficits, recipes, restaurants, and recommendation outputs

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (rules, deficits, recipes, restaurants, plan outputs)
pub mod models;
