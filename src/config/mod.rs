// ABOUTME: Process configuration assembled from environment variables
// ABOUTME: Engine scoring config, catalog file locations, and logging settings in one ServerConfig
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalplate

//! Configuration module for Vitalplate
//!
//! Environment-only configuration. [`ServerConfig::from_env`] is called once at
//! startup; the result is passed explicitly to whatever needs it.
//!
//! | Variable | Meaning |
//! |---|---|
//! | `VITALPLATE_RULES_PATH` | JSON rule catalog (default: built-in rules) |
//! | `VITALPLATE_RECIPES_PATH` | JSON recipe catalog (default: built-in recipes) |
//! | `VITALPLATE_RESTAURANTS_PATH` | JSON restaurant catalog (default: built-in restaurants) |
//! | `VITALPLATE_*` scoring overrides | see [`EngineConfig::from_env`] |
//! | `RUST_LOG`, `LOG_FORMAT`, `ENVIRONMENT` | see [`LoggingConfig::from_env`] |

use std::env;
use std::path::PathBuf;

use tracing::debug;
use vitalplate_engine::{ConfigError, EngineConfig};

use crate::catalog::CatalogPaths;
use crate::logging::LoggingConfig;

/// Environment variable naming the rule catalog file
pub const RULES_PATH_ENV: &str = "VITALPLATE_RULES_PATH";
/// Environment variable naming the recipe catalog file
pub const RECIPES_PATH_ENV: &str = "VITALPLATE_RECIPES_PATH";
/// Environment variable naming the restaurant catalog file
pub const RESTAURANTS_PATH_ENV: &str = "VITALPLATE_RESTAURANTS_PATH";

/// Complete process configuration
#[derive(Debug, Clone, Default)]
pub struct ServerConfig {
    /// Scoring weights and limits
    pub engine: EngineConfig,
    /// Catalog file locations
    pub catalogs: CatalogPaths,
    /// Logging setup
    pub logging: LoggingConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a scoring override cannot be parsed or the resulting engine
    /// configuration fails validation
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self {
            engine: EngineConfig::from_env()?,
            catalogs: CatalogPaths {
                rules: path_from_env(RULES_PATH_ENV),
                recipes: path_from_env(RECIPES_PATH_ENV),
                restaurants: path_from_env(RESTAURANTS_PATH_ENV),
            },
            logging: LoggingConfig::from_env(),
        };
        debug!(catalogs = ?config.catalogs, "Loaded configuration from environment");
        Ok(config)
    }
}

fn path_from_env(name: &str) -> Option<PathBuf> {
    env::var(name)
        .ok()
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}
