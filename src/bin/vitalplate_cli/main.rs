// ABOUTME: Vitalplate CLI - run the nutrition engine against lab values from the command line
// ABOUTME: Analyze labs, build meal plans with shopping lists, and rank nearby restaurant dishes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalplate
//!
//! Usage:
//! ```bash
//! # Deficits and supplement suggestions
//! vitalplate-cli analyze --labs '{"ferritin": 20, "vitamin_d": 18}'
//!
//! # Seven-day plan plus shopping list, lab values from a file
//! vitalplate-cli plan --labs @labs.json --available spinach,lentils --count 5
//!
//! # Dishes within 3 km
//! vitalplate-cli dishes --labs @labs.json --lat 52.52 --lon 13.405 --max-distance 3
//!
//! # Any request mode from a full JSON request
//! vitalplate-cli generate --request @request.json
//!
//! # Custom catalogs instead of the built-in data
//! vitalplate-cli --recipes recipes.json plan --labs @labs.json
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use vitalplate::catalog::{CatalogPaths, JsonFileCatalog, MemoryCatalog};
use vitalplate::config::ServerConfig;
use vitalplate::service::NutritionService;

#[derive(Parser)]
#[command(
    name = "vitalplate-cli",
    about = "Vitalplate nutrition recommendations from lab values",
    long_about = "Turns a blood-biomarker panel into deficits, supplement suggestions, meal plans with shopping lists, and ranked restaurant dishes. Results are printed as JSON."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Rule catalog JSON file (default: built-in rules)
    #[arg(long, global = true)]
    rules: Option<PathBuf>,

    /// Recipe catalog JSON file (default: built-in recipes)
    #[arg(long, global = true)]
    recipes: Option<PathBuf>,

    /// Restaurant catalog JSON file (default: built-in restaurants)
    #[arg(long, global = true)]
    restaurants: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Detect deficits and suggest supplements
    Analyze {
        /// Lab values as a JSON object, or @path to a JSON file
        #[arg(long)]
        labs: String,
    },

    /// Build a meal plan and its shopping list
    Plan {
        /// Lab values as a JSON object, or @path to a JSON file
        #[arg(long)]
        labs: String,

        /// Ingredients on hand (comma-separated)
        #[arg(long)]
        available: Option<String>,

        /// Number of recipes in the plan
        #[arg(long)]
        count: Option<usize>,

        /// Include recipes owned by this user
        #[arg(long)]
        user: Option<String>,
    },

    /// Rank restaurant dishes near a location
    Dishes {
        /// Lab values as a JSON object, or @path to a JSON file
        #[arg(long)]
        labs: String,

        /// Latitude in decimal degrees
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        /// Longitude in decimal degrees
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,

        /// Search radius in kilometers
        #[arg(long)]
        max_distance: Option<f64>,

        /// Maximum number of dishes
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Run a full generate request (diy, restaurants, or pantry)
    Generate {
        /// Request as a JSON object, or @path to a JSON file
        #[arg(long)]
        request: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = ServerConfig::from_env()?;
    let logging = if cli.verbose {
        config.logging.clone().with_level("debug")
    } else {
        config.logging.clone()
    };
    logging.init()?;

    let paths = CatalogPaths {
        rules: cli.rules.or(config.catalogs.rules),
        recipes: cli.recipes.or(config.catalogs.recipes),
        restaurants: cli.restaurants.or(config.catalogs.restaurants),
    };

    let service = if paths.is_empty() {
        info!("Using built-in catalog");
        NutritionService::from_catalog(Arc::new(MemoryCatalog::seeded()?), config.engine)
    } else {
        info!(?paths, "Using JSON file catalog");
        let catalog = JsonFileCatalog::load(paths).await?;
        NutritionService::from_catalog(Arc::new(catalog), config.engine)
    };

    match cli.command {
        Command::Analyze { labs } => commands::analyze(&service, &labs).await?,
        Command::Plan {
            labs,
            available,
            count,
            user,
        } => commands::plan(&service, &labs, available.as_deref(), count, user).await?,
        Command::Dishes {
            labs,
            lat,
            lon,
            max_distance,
            limit,
        } => commands::dishes(&service, &labs, lat, lon, max_distance, limit).await?,
        Command::Generate { request } => commands::generate(&service, &request).await?,
    }

    Ok(())
}
