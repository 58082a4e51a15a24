// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Flashcard types.
//!
//! A [`FlashCard`] is either seeded from the catalog or created by the user.
//! User-created cards always land in the custom cards category. Cards are
//! never deleted; edits are expressed as a [`CardUpdate`] that is shallow
//! merged into the stored card.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Category id that holds every user-created card.
pub const CUSTOM_CATEGORY_ID: u64 = 6;

/// Difficulty level of a card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "beginner" => Ok(Difficulty::Beginner),
            "intermediate" => Ok(Difficulty::Intermediate),
            "advanced" => Ok(Difficulty::Advanced),
            _ => Err(Error::InvalidDifficulty(s.to_string())),
        }
    }
}

/// A vocabulary flashcard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlashCard {
    pub id: u64,
    pub category_id: u64,
    pub word: String,
    pub definition: String,
    pub example: String,
    /// Language code to translation.
    #[serde(default)]
    pub translations: BTreeMap<String, String>,
    pub difficulty: Difficulty,
    pub mastered: bool,
    pub review_count: u32,
    pub last_reviewed: Option<DateTime<Utc>>,
    /// True when the card was created without connectivity.
    #[serde(default)]
    pub created_offline: bool,
}

impl FlashCard {
    /// Builds a fresh custom card from user input.
    ///
    /// The category is always [`CUSTOM_CATEGORY_ID`] and review state starts
    /// empty regardless of what the input carried.
    pub fn from_new(id: u64, input: NewCard, created_offline: bool) -> Self {
        FlashCard {
            id,
            category_id: CUSTOM_CATEGORY_ID,
            word: input.word,
            definition: input.definition,
            example: input.example,
            translations: input.translations,
            difficulty: input.difficulty,
            mastered: false,
            review_count: 0,
            last_reviewed: None,
            created_offline,
        }
    }

    /// Shallow-merges the set fields of `update` into this card.
    pub fn apply(&mut self, update: &CardUpdate) {
        if let Some(ref word) = update.word {
            self.word = word.clone();
        }
        if let Some(ref definition) = update.definition {
            self.definition = definition.clone();
        }
        if let Some(ref example) = update.example {
            self.example = example.clone();
        }
        if let Some(ref translations) = update.translations {
            self.translations = translations.clone();
        }
        if let Some(difficulty) = update.difficulty {
            self.difficulty = difficulty;
        }
        if let Some(mastered) = update.mastered {
            self.mastered = mastered;
        }
        if let Some(review_count) = update.review_count {
            self.review_count = review_count;
        }
        if let Some(last_reviewed) = update.last_reviewed {
            self.last_reviewed = Some(last_reviewed);
        }
    }
}

/// Input for creating a custom card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCard {
    pub word: String,
    #[serde(default)]
    pub definition: String,
    #[serde(default)]
    pub example: String,
    #[serde(default)]
    pub translations: BTreeMap<String, String>,
    #[serde(default)]
    pub difficulty: Difficulty,
}

impl NewCard {
    /// Creates input with only the word set.
    pub fn word(word: impl Into<String>) -> Self {
        NewCard { word: word.into(), ..Default::default() }
    }

    /// Rejects input without a word.
    pub fn validate(&self) -> Result<()> {
        if self.word.trim().is_empty() {
            return Err(Error::FieldEmpty { field: "word" });
        }
        Ok(())
    }
}

/// Partial update to a card. Unset fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translations: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mastered: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_reviewed: Option<DateTime<Utc>>,
}

impl CardUpdate {
    /// Returns true if no field is set.
    pub fn is_empty(&self) -> bool {
        *self == CardUpdate::default()
    }
}

#[cfg(test)]
#[path = "card_tests.rs"]
mod tests;
