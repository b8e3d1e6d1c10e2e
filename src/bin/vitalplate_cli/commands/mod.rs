// ABOUTME: Subcommand handlers for vitalplate-cli
// ABOUTME: Each handler builds a service request, runs it, and prints the result as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalplate

use anyhow::Result;
use vitalplate::service::{GenerateRequest, NutritionService};
use vitalplate_core::constants::modes;
use vitalplate_core::models::GeoPoint;

use crate::helpers::display::print_json;
use crate::helpers::input::{parse_labs, parse_list, read_json_arg};

/// `analyze`: deficits and supplement suggestions
pub async fn analyze(service: &NutritionService, labs: &str) -> Result<()> {
    let labs = parse_labs(labs).await?;
    let analysis = service.analyze(&labs).await?;
    print_json(&analysis)
}

/// `plan`: diy meal plan with shopping list
pub async fn plan(
    service: &NutritionService,
    labs: &str,
    available: Option<&str>,
    count: Option<usize>,
    user: Option<String>,
) -> Result<()> {
    let mut request = GenerateRequest::new(modes::DIY, parse_labs(labs).await?);
    request.available = available.map(parse_list).unwrap_or_default();
    request.plan_size = count;
    request.user_id = user;

    let report = service.generate(request).await?;
    print_json(&report)
}

/// `dishes`: ranked restaurant dishes around a point
pub async fn dishes(
    service: &NutritionService,
    labs: &str,
    lat: f64,
    lon: f64,
    max_distance_km: Option<f64>,
    limit: Option<usize>,
) -> Result<()> {
    let mut request = GenerateRequest::new(modes::RESTAURANTS, parse_labs(labs).await?);
    request.location = Some(GeoPoint::new(lat, lon));
    request.max_distance_km = max_distance_km;
    request.limit = limit;

    let report = service.generate(request).await?;
    print_json(&report)
}

/// `generate`: arbitrary request document
pub async fn generate(service: &NutritionService, request: &str) -> Result<()> {
    let request: GenerateRequest = read_json_arg(request).await?;
    let report = service.generate(request).await?;
    print_json(&report)
}
