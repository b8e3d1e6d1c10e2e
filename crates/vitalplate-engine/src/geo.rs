// ABOUTME: Great-circle distance between two coordinates
// ABOUTME: Haversine formula over a spherical Earth
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalplate

use vitalplate_core::constants::geo::EARTH_RADIUS_KM;
use vitalplate_core::models::GeoPoint;

/// Haversine distance in kilometers using the mean Earth radius
#[must_use]
pub fn haversine_km(from: GeoPoint, to: GeoPoint) -> f64 {
    haversine_km_with_radius(from, to, EARTH_RADIUS_KM)
}

/// Haversine distance in kilometers on a sphere of the given radius
#[must_use]
pub fn haversine_km_with_radius(from: GeoPoint, to: GeoPoint, radius_km: f64) -> f64 {
    let lat1 = from.lat.to_radians();
    let lat2 = to.lat.to_radians();
    let d_lat = (to.lat - from.lat).to_radians();
    let d_lon = (to.lon - from.lon).to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    // Rounding can push `a` a hair past 1 for antipodal points
    let c = 2.0 * a.clamp(0.0, 1.0).sqrt().asin();
    radius_km * c
}

/// Round to 2 decimal places
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
