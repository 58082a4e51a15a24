// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The authenticated user's profile.

use serde::{Deserialize, Serialize};

use crate::progress::SessionStats;

/// Identity and learning preferences of the signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: u64,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub preferences: Preferences,
}

/// Per-user learning preferences and running totals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub native_language: String,
    pub study_streak: u32,
    pub total_words_learned: u32,
    pub mastered_words: u32,
}

impl Preferences {
    /// Folds a finished study session into the running totals.
    ///
    /// Every reviewed card counts as learned; the streak grows only when at
    /// least one answer was correct.
    pub fn record_session(&mut self, stats: &SessionStats) {
        self.total_words_learned = self.total_words_learned.saturating_add(stats.total);
        if stats.correct > 0 {
            self.study_streak = self.study_streak.saturating_add(1);
        }
    }
}
