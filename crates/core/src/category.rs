// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Card categories. Read-only from the client's point of view.

use serde::{Deserialize, Serialize};

/// A group of cards shown together on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: u64,
    pub name: String,
    pub description: String,
    /// A [`Difficulty`](crate::Difficulty) label, or "mixed" for categories
    /// spanning several levels.
    pub difficulty: String,
    pub card_count: u32,
    pub completed_count: u32,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub color: String,
}

impl Category {
    /// Fraction of cards completed, in `0.0..=1.0`.
    pub fn completion(&self) -> f64 {
        if self.card_count == 0 {
            return 0.0;
        }
        (f64::from(self.completed_count) / f64::from(self.card_count)).min(1.0)
    }
}
