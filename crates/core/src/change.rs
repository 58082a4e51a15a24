// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pending changes awaiting replay to the backend.
//!
//! Every local write made without connectivity is captured as a
//! [`PendingChange`]. Changes are replayed in the order they were recorded.
//! Each payload overwrites the whole entity on the backend, so replaying
//! several changes to the same entity leaves the last one in effect.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::card::{CardUpdate, FlashCard};
use crate::error::{Error, Result};
use crate::progress::{StudySessionRecord, UserProgress};

/// A local mutation waiting to be sent to the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingChange {
    /// The mutation being replayed.
    pub payload: ChangePayload,
    /// When the change was recorded locally.
    pub enqueued_at: DateTime<Utc>,
}

impl PendingChange {
    /// Creates a new pending change.
    pub fn new(payload: ChangePayload, enqueued_at: DateTime<Utc>) -> Self {
        PendingChange { payload, enqueued_at }
    }

    /// Returns the kind of mutation.
    pub fn kind(&self) -> ChangeKind {
        self.payload.kind()
    }
}

/// Kind-specific payload of a pending change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum ChangePayload {
    /// A study session was saved.
    SessionSave(StudySessionRecord),

    /// Progress was overwritten.
    ProgressUpdate(UserProgress),

    /// A custom card was created.
    CardCreate(FlashCard),

    /// An existing card was edited.
    CardUpdate {
        card_id: u64,
        update: CardUpdate,
    },
}

impl ChangePayload {
    /// Returns the kind of this payload.
    pub fn kind(&self) -> ChangeKind {
        match self {
            ChangePayload::SessionSave(_) => ChangeKind::SessionSave,
            ChangePayload::ProgressUpdate(_) => ChangeKind::ProgressUpdate,
            ChangePayload::CardCreate(_) => ChangeKind::CardCreate,
            ChangePayload::CardUpdate { .. } => ChangeKind::CardUpdate,
        }
    }

    /// Returns the card id touched by this payload, if any.
    pub fn card_id(&self) -> Option<u64> {
        match self {
            ChangePayload::CardCreate(card) => Some(card.id),
            ChangePayload::CardUpdate { card_id, .. } => Some(*card_id),
            ChangePayload::SessionSave(_) | ChangePayload::ProgressUpdate(_) => None,
        }
    }
}

/// Discriminant of [`ChangePayload`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    SessionSave,
    ProgressUpdate,
    CardCreate,
    CardUpdate,
}

impl ChangeKind {
    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeKind::SessionSave => "session_save",
            ChangeKind::ProgressUpdate => "progress_update",
            ChangeKind::CardCreate => "card_create",
            ChangeKind::CardUpdate => "card_update",
        }
    }
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ChangeKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "session_save" => Ok(ChangeKind::SessionSave),
            "progress_update" => Ok(ChangeKind::ProgressUpdate),
            "card_create" => Ok(ChangeKind::CardCreate),
            "card_update" => Ok(ChangeKind::CardUpdate),
            _ => Err(Error::InvalidChangeKind(s.to_string())),
        }
    }
}

#[cfg(test)]
#[path = "change_tests.rs"]
mod tests;
