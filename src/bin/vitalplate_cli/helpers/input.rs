// ABOUTME: Argument parsing helpers for vitalplate-cli
// ABOUTME: Reads inline JSON or @file arguments and splits comma-separated lists
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalplate

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use tokio::fs;
use vitalplate_core::models::LabPanel;

/// Parse an inline JSON document, or read one from `@path`
pub async fn read_json_arg<T: DeserializeOwned>(arg: &str) -> Result<T> {
    let text = match arg.strip_prefix('@') {
        Some(path) => fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read {path}"))?,
        None => arg.to_owned(),
    };
    serde_json::from_str(&text).context("argument is not valid JSON for this command")
}

/// Lab values from `--labs`
pub async fn parse_labs(arg: &str) -> Result<LabPanel> {
    read_json_arg(arg).await
}

/// Split `a, b,,c` into `["a", "b", "c"]`
pub fn parse_list(arg: &str) -> Vec<String> {
    arg.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_owned)
        .collect()
}
