// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Study session and progress operations.

use chrono::Local;
use lingo_core::{
    catalog, ChangePayload, SessionHistory, SessionStats, StudySessionRecord, UserProgress,
};

use super::{OfflineRepository, WriteOutcome};
use crate::error::Result;
use crate::store::keys;
use crate::sync::Backend;

impl<B: Backend> OfflineRepository<B> {
    /// Stored session history, oldest first.
    pub fn study_sessions(&self) -> Vec<StudySessionRecord> {
        self.session_history().into_records()
    }

    /// Aggregate progress.
    ///
    /// Online reads refresh the cache unless a progress update is still
    /// queued, in which case the newest queued value wins.
    pub async fn user_progress(&self) -> UserProgress {
        if self.monitor.is_online() {
            match self.backend.fetch_progress().await {
                Ok(fetched) => {
                    let progress = self.pending_progress().unwrap_or(fetched);
                    self.storage.set_or_warn(keys::USER_PROGRESS, &progress);
                    return progress;
                }
                Err(e) => tracing::warn!(error = %e, "failed to fetch progress, using cache"),
            }
        }
        self.cached_progress()
    }

    /// Replaces aggregate progress. Returns the stored value.
    pub async fn update_user_progress(&self, mut progress: UserProgress) -> Result<UserProgress> {
        progress.last_updated = Some(self.now());
        progress.synced = false;
        self.storage.set(keys::USER_PROGRESS, &progress)?;

        let outcome = self.push_or_queue(ChangePayload::ProgressUpdate(progress.clone())).await;
        if outcome == WriteOutcome::Sent {
            progress.synced = true;
            self.storage.set_or_warn(keys::USER_PROGRESS, &progress);
        }
        Ok(progress)
    }

    /// Appends a finished session to history, evicting the oldest past the cap.
    pub async fn save_study_session(
        &self,
        category_id: u64,
        category_name: &str,
        stats: &SessionStats,
    ) -> Result<StudySessionRecord> {
        let now = self.now();
        let mut record = StudySessionRecord {
            category_id,
            category_name: category_name.to_string(),
            correct: stats.correct,
            incorrect: stats.incorrect,
            total: stats.total,
            date: now.with_timezone(&Local).date_naive(),
            created_at: now,
            synced: false,
        };

        let mut history = self.session_history();
        if let Some(evicted) = history.push(record.clone()) {
            tracing::debug!(date = %evicted.date, "evicted oldest session");
        }
        self.storage.set(keys::STUDY_SESSIONS, &history)?;

        let outcome = self.push_or_queue(ChangePayload::SessionSave(record.clone())).await;
        if outcome == WriteOutcome::Sent {
            record.synced = true;
            let mut records = history.into_records();
            if let Some(last) = records.last_mut() {
                last.synced = true;
            }
            self.storage.set_or_warn(keys::STUDY_SESSIONS, &records);
        }
        Ok(record)
    }

    /// Records a finished session everywhere it counts.
    ///
    /// Saves the session, folds it into the cached profile and aggregate
    /// progress, and announces the streak when any answer was correct.
    pub async fn complete_study_session(
        &self,
        category_id: u64,
        stats: &SessionStats,
    ) -> Result<StudySessionRecord> {
        let category_name = self
            .cached_categories()
            .into_iter()
            .find(|c| c.id == category_id)
            .map(|c| c.name)
            .unwrap_or_else(|| format!("Category {category_id}"));
        let record = self.save_study_session(category_id, &category_name, stats).await?;

        if let Some(mut user) = self.current_user() {
            user.preferences.record_session(stats);
            self.storage.set(keys::USER, &user)?;
        }

        let mut progress = self.cached_progress();
        progress.record_session(stats, record.date);
        let progress = self.update_user_progress(progress).await?;

        if stats.correct > 0 {
            self.notifier.schedule_streak(progress.study_streak);
        }
        Ok(record)
    }

    fn session_history(&self) -> SessionHistory {
        self.storage
            .get_or_warn::<Vec<StudySessionRecord>>(keys::STUDY_SESSIONS)
            .map(SessionHistory::from_records)
            .unwrap_or_default()
    }

    fn cached_progress(&self) -> UserProgress {
        self.storage.get_or_warn(keys::USER_PROGRESS).unwrap_or_else(catalog::default_progress)
    }

    fn pending_progress(&self) -> Option<UserProgress> {
        self.queue.peek_all().into_iter().rev().find_map(|change| match change.payload {
            ChangePayload::ProgressUpdate(progress) => Some(progress),
            _ => None,
        })
    }
}
