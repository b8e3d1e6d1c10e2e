// ABOUTME: Restaurant catalog models and ranked dish outputs
// ABOUTME: GeoPoint, Restaurant, Dish, and ScoredDish definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalplate

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::geo::{MAX_LATITUDE, MAX_LONGITUDE};
use crate::errors::ValidationError;

/// A location in decimal degrees
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GeoPoint {
    /// Latitude, -90..=90
    pub lat: f64,
    /// Longitude, -180..=180
    pub lon: f64,
}

impl GeoPoint {
    /// Create a point without range checks
    #[must_use]
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Create a point, rejecting coordinates outside decimal-degree bounds
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::CoordinatesOutOfRange`] for non-finite or
    /// out-of-range coordinates.
    pub fn validated(lat: f64, lon: f64) -> Result<Self, ValidationError> {
        let lat_ok = lat.is_finite() && lat.abs() <= MAX_LATITUDE;
        let lon_ok = lon.is_finite() && lon.abs() <= MAX_LONGITUDE;
        if lat_ok && lon_ok {
            Ok(Self { lat, lon })
        } else {
            Err(ValidationError::CoordinatesOutOfRange { lat, lon })
        }
    }
}

/// A dish served by a restaurant
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Dish {
    /// Dish name
    pub name: String,
    /// Nutrient name → amount per serving
    #[serde(default)]
    pub nutrients: BTreeMap<String, f64>,
}

/// A restaurant with its location and menu
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Restaurant {
    /// Stable identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Latitude
    pub lat: f64,
    /// Longitude
    pub lon: f64,
    /// Menu
    #[serde(default)]
    pub dishes: Vec<Dish>,
}

impl Restaurant {
    /// Restaurant location
    #[must_use]
    pub const fn location(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lon)
    }
}

/// A dish ranked against a user's deficits and location
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoredDish {
    /// Restaurant display name
    pub restaurant: String,
    /// Restaurant identifier
    pub restaurant_id: String,
    /// Restaurant latitude
    pub restaurant_lat: f64,
    /// Restaurant longitude
    pub restaurant_lon: f64,
    /// Dish name
    pub dish: String,
    /// Dish nutrients
    pub nutrients: BTreeMap<String, f64>,
    /// Distance from the user, rounded to 2 decimals
    pub distance_km: f64,
    /// Score, rounded to 2 decimals
    pub score: f64,
    /// Display explanation
    pub match_reason: String,
}
