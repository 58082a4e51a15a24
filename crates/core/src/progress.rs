// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Study sessions and aggregate learning progress.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Maximum number of study sessions kept in history.
pub const MAX_SESSIONS: usize = 100;

/// Number of days kept in the recent-activity list.
pub const RECENT_ACTIVITY_DAYS: usize = 7;

/// Outcome counters of a single study session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStats {
    pub correct: u32,
    pub incorrect: u32,
    pub total: u32,
    /// Time spent in the session, in minutes.
    #[serde(default)]
    pub minutes: u32,
}

impl SessionStats {
    /// Builds stats from answer counts.
    pub fn new(correct: u32, incorrect: u32) -> Self {
        SessionStats { correct, incorrect, total: correct.saturating_add(incorrect), minutes: 0 }
    }
}

/// A completed study session as stored in history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudySessionRecord {
    pub category_id: u64,
    pub category_name: String,
    pub correct: u32,
    pub incorrect: u32,
    pub total: u32,
    /// Calendar day the session took place.
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
    /// True once the backend has acknowledged this record.
    #[serde(default)]
    pub synced: bool,
}

/// Append-only session history capped at [`MAX_SESSIONS`] entries.
///
/// Pushing past the cap evicts the oldest record first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionHistory {
    records: Vec<StudySessionRecord>,
}

impl SessionHistory {
    /// Builds a history from stored records, trimming the oldest if over cap.
    pub fn from_records(mut records: Vec<StudySessionRecord>) -> Self {
        if records.len() > MAX_SESSIONS {
            let excess = records.len() - MAX_SESSIONS;
            records.drain(..excess);
        }
        SessionHistory { records }
    }

    /// Appends a record, returning the evicted record if the cap was hit.
    pub fn push(&mut self, record: StudySessionRecord) -> Option<StudySessionRecord> {
        self.records.push(record);
        if self.records.len() > MAX_SESSIONS {
            Some(self.records.remove(0))
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in insertion order, oldest first.
    pub fn records(&self) -> &[StudySessionRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<StudySessionRecord> {
        self.records
    }

    /// Number of records not yet acknowledged by the backend.
    pub fn unsynced_count(&self) -> usize {
        self.records.iter().filter(|r| !r.synced).count()
    }

    /// Flags every record as synced except those `still_pending` selects.
    /// Returns how many changed.
    pub fn mark_synced_unless<F>(&mut self, still_pending: F) -> usize
    where
        F: Fn(&StudySessionRecord) -> bool,
    {
        let mut changed = 0;
        for record in self.records.iter_mut().filter(|r| !r.synced && !still_pending(r)) {
            record.synced = true;
            changed += 1;
        }
        changed
    }
}

/// One day of study activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEntry {
    pub date: NaiveDate,
    pub cards_studied: u32,
    /// Minutes spent studying.
    pub time_spent: u32,
}

/// Aggregate learning progress for the signed-in user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProgress {
    pub total_cards: u32,
    pub mastered_cards: u32,
    pub study_streak: u32,
    pub weekly_goal: u32,
    pub weekly_progress: u32,
    /// Most recent day first.
    #[serde(default)]
    pub recent_activity: Vec<ActivityEntry>,
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
    #[serde(default)]
    pub synced: bool,
}

impl UserProgress {
    /// Folds a finished study session into the aggregate.
    pub fn record_session(&mut self, stats: &SessionStats, date: NaiveDate) {
        self.weekly_progress = self.weekly_progress.saturating_add(stats.total);
        if stats.correct > 0 {
            self.study_streak = self.study_streak.saturating_add(1);
        }

        match self.recent_activity.first_mut() {
            Some(entry) if entry.date == date => {
                entry.cards_studied = entry.cards_studied.saturating_add(stats.total);
                entry.time_spent = entry.time_spent.saturating_add(stats.minutes);
            }
            _ => {
                self.recent_activity.insert(
                    0,
                    ActivityEntry { date, cards_studied: stats.total, time_spent: stats.minutes },
                );
                self.recent_activity.truncate(RECENT_ACTIVITY_DAYS);
            }
        }
    }

    /// True once the weekly goal has been reached.
    pub fn weekly_goal_met(&self) -> bool {
        self.weekly_goal > 0 && self.weekly_progress >= self.weekly_goal
    }
}

#[cfg(test)]
#[path = "progress_tests.rs"]
mod tests;
