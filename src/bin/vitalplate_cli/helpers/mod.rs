// ABOUTME: Re-exports helper modules for vitalplate-cli
// ABOUTME: Provides argument parsing and JSON output utilities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalplate

pub mod display;
pub mod input;
