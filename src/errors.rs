// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier
// Modifications (c) 2026 Peter Carlton

use std::{fmt, io};

#[derive(Debug)]
pub enum DnascopeError {
    Io(io::Error),
    Json(serde_json::Error),
    InvalidArgument(String),
}

// These allow conversion to DnascopeError, required for main() to return Result<()> and for '?' to
// work.

impl From<io::Error> for DnascopeError {
    fn from(e: io::Error) -> Self {
        DnascopeError::Io(e)
    }
}

impl From<serde_json::Error> for DnascopeError {
    fn from(e: serde_json::Error) -> Self {
        DnascopeError::Json(e)
    }
}

impl From<String> for DnascopeError {
    fn from(s: String) -> Self {
        DnascopeError::InvalidArgument(s)
    }
}

impl fmt::Display for DnascopeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DnascopeError::Io(e) => write!(f, "I/O error: {}", e),
            DnascopeError::Json(e) => write!(f, "JSON error: {}", e),
            DnascopeError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
        }
    }
}
