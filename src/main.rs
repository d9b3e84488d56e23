// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier
// Modifications (c) 2026 Peter Carlton

use std::process::exit;

fn main() {
    if let Err(e) = dnascope::run() {
        eprintln!("{}", e);
        exit(1);
    }
}
