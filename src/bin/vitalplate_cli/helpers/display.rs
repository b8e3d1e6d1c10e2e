// ABOUTME: Output formatting helpers for vitalplate-cli
// ABOUTME: Writes results to stdout as pretty-printed JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalplate

use std::io::{self, Write};

use anyhow::Result;
use serde::Serialize;

/// Print `value` as pretty JSON followed by a newline
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
