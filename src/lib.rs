// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier
// Modifications (c) 2026 Peter Carlton

pub mod analyzer;
pub mod errors;
pub mod report;
mod runner;

use crate::errors::DnascopeError;

pub fn run() -> Result<(), DnascopeError> {
    runner::run()
}
