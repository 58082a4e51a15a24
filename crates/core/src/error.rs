// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for lingo-core operations.

use thiserror::Error;

/// All possible errors that can occur in lingo-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid difficulty: '{0}'\n  hint: valid levels are: beginner, intermediate, advanced")]
    InvalidDifficulty(String),

    #[error("invalid change kind: '{0}'\n  hint: valid kinds are: session_save, progress_update, card_create, card_update")]
    InvalidChangeKind(String),

    #[error("{field} cannot be empty")]
    FieldEmpty { field: &'static str },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for lingo-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
