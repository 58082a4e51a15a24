// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sync coordinator: replays queued changes once connectivity returns.
//!
//! Provides a high-level interface for:
//! - Draining the pending queue in FIFO order
//! - Reporting aggregate sync stats for display
//! - Running a background task that drains on every reconnect

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use lingo_core::{ChangeKind, ChangePayload, SessionHistory, StudySessionRecord, UserProgress};
use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use super::backend::{dispatch, Backend, CatalogBackend};
use super::queue::PendingQueue;
use crate::connectivity::{Connectivity, ConnectivityMonitor};
use crate::store::{keys, CachedCards, Storage};

/// Why a drain did not dispatch anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Connectivity is currently offline.
    Offline,
    /// Nothing was queued.
    Empty,
}

/// A queued change whose dispatch failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedDispatch {
    pub kind: ChangeKind,
    pub enqueued_at: DateTime<Utc>,
    pub error: String,
}

/// Outcome of one drain pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DrainReport {
    /// Changes taken from the queue and sent.
    pub attempted: usize,
    /// Changes the backend accepted.
    pub dispatched: usize,
    /// Changes the backend refused or never received.
    pub failures: Vec<FailedDispatch>,
    /// Failed changes put back on the queue.
    pub requeued: usize,
    pub skipped: Option<SkipReason>,
}

impl DrainReport {
    fn skipped(reason: SkipReason) -> Self {
        DrainReport { skipped: Some(reason), ..Default::default() }
    }

    /// Returns true if every attempted change was dispatched.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Aggregate sync state for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncStats {
    pub is_online: bool,
    pub pending_sync_count: usize,
    pub unsynced_sessions: usize,
    /// When progress was last updated.
    pub last_sync: Option<DateTime<Utc>>,
    pub total_cached_cards: usize,
    /// When the last non-skipped drain finished.
    pub last_drain: Option<DateTime<Utc>>,
}

/// Replays the pending queue against a backend.
pub struct SyncCoordinator<B: Backend = CatalogBackend> {
    backend: Arc<B>,
    queue: Arc<PendingQueue>,
    monitor: Arc<ConnectivityMonitor>,
    storage: Storage,
    /// Put failed changes back at the head of the queue instead of dropping them.
    requeue_failed: bool,
    /// Serializes drains so replay order holds across concurrent callers.
    draining: tokio::sync::Mutex<()>,
    last_drain: Mutex<Option<DateTime<Utc>>>,
}

impl<B: Backend> SyncCoordinator<B> {
    pub fn new(
        backend: Arc<B>,
        queue: Arc<PendingQueue>,
        monitor: Arc<ConnectivityMonitor>,
        storage: Storage,
    ) -> Self {
        SyncCoordinator {
            backend,
            queue,
            monitor,
            storage,
            requeue_failed: false,
            draining: tokio::sync::Mutex::new(()),
            last_drain: Mutex::new(None),
        }
    }

    /// Keep failed changes queued for the next drain.
    pub fn with_requeue_failed(mut self, requeue: bool) -> Self {
        self.requeue_failed = requeue;
        self
    }

    /// Number of changes waiting to be replayed.
    pub fn pending_count(&self) -> usize {
        self.queue.len()
    }

    /// Replays every queued change in enqueue order.
    ///
    /// Does nothing while offline or when the queue is empty. The queue is
    /// emptied up front; a failed dispatch is logged and reported, and only
    /// goes back on the queue when requeueing is enabled. Changes queued
    /// while a drain is in flight wait for the next one.
    ///
    /// Afterwards every stored session and the progress record are flagged
    /// synced unless a change for them is still queued.
    pub async fn drain(&self) -> DrainReport {
        let _guard = self.draining.lock().await;

        if !self.monitor.is_online() {
            tracing::debug!("drain skipped: offline");
            return DrainReport::skipped(SkipReason::Offline);
        }

        let batch = self.queue.take_all();
        if batch.is_empty() {
            return DrainReport::skipped(SkipReason::Empty);
        }

        let mut report = DrainReport { attempted: batch.len(), ..Default::default() };
        let mut failed = Vec::new();

        for change in batch {
            match dispatch(self.backend.as_ref(), &change.payload).await {
                Ok(()) => {
                    report.dispatched += 1;
                    tracing::debug!(kind = %change.kind(), "dispatched queued change");
                }
                Err(e) => {
                    tracing::warn!(kind = %change.kind(), error = %e, "failed to sync queued change");
                    report.failures.push(FailedDispatch {
                        kind: change.kind(),
                        enqueued_at: change.enqueued_at,
                        error: e.to_string(),
                    });
                    if self.requeue_failed {
                        failed.push(change);
                    }
                }
            }
        }

        report.requeued = failed.len();
        self.queue.restore_front(failed);
        self.mark_synced();
        *self.lock_last_drain() = Some(Utc::now());

        tracing::info!(
            attempted = report.attempted,
            dispatched = report.dispatched,
            failed = report.failures.len(),
            requeued = report.requeued,
            "drained pending queue"
        );
        report
    }

    /// Snapshot of sync state for display.
    pub fn stats(&self) -> SyncStats {
        let sessions: Vec<StudySessionRecord> =
            self.storage.get_or_warn(keys::STUDY_SESSIONS).unwrap_or_default();
        let progress: Option<UserProgress> = self.storage.get_or_warn(keys::USER_PROGRESS);
        let cached: Option<CachedCards> = self.storage.get_or_warn(keys::FLASHCARDS);

        SyncStats {
            is_online: self.monitor.is_online(),
            pending_sync_count: self.queue.len(),
            unsynced_sessions: sessions.iter().filter(|s| !s.synced).count(),
            last_sync: progress.and_then(|p| p.last_updated),
            total_cached_cards: cached.map(|c| c.cards.len()).unwrap_or(0),
            last_drain: *self.lock_last_drain(),
        }
    }

    /// Flags stored sessions and progress as synced once their changes have
    /// left the queue. Records whose change is still queued stay unsynced.
    fn mark_synced(&self) {
        let mut pending_sessions = HashSet::new();
        let mut progress_pending = false;
        for change in self.queue.peek_all() {
            match change.payload {
                ChangePayload::SessionSave(record) => {
                    pending_sessions.insert((record.category_id, record.created_at));
                }
                ChangePayload::ProgressUpdate(_) => progress_pending = true,
                ChangePayload::CardCreate(_) | ChangePayload::CardUpdate { .. } => {}
            }
        }

        if let Some(records) = self.storage.get_or_warn(keys::STUDY_SESSIONS) {
            let mut history = SessionHistory::from_records(records);
            let changed = history
                .mark_synced_unless(|r| pending_sessions.contains(&(r.category_id, r.created_at)));
            if changed > 0 {
                self.storage.set_or_warn(keys::STUDY_SESSIONS, &history);
            }
        }
        if progress_pending {
            return;
        }
        if let Some(mut progress) = self.storage.get_or_warn::<UserProgress>(keys::USER_PROGRESS) {
            if !progress.synced {
                progress.synced = true;
                self.storage.set_or_warn(keys::USER_PROGRESS, &progress);
            }
        }
    }

    fn lock_last_drain(&self) -> std::sync::MutexGuard<'_, Option<DateTime<Utc>>> {
        self.last_drain.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl<B: Backend + 'static> SyncCoordinator<B> {
    /// Spawns a task that drains the queue on every offline to online
    /// transition until `cancel` fires.
    pub fn spawn_auto_sync(self: &Arc<Self>, cancel: CancellationToken) -> JoinHandle<()> {
        let coordinator = Arc::clone(self);
        let mut events = self.monitor.subscribe();

        tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = cancel.cancelled() => break,
                    event = events.recv() => match event {
                        Ok(Connectivity::Online) => {
                            coordinator.drain().await;
                        }
                        Ok(Connectivity::Offline) => {}
                        Err(RecvError::Lagged(skipped)) => {
                            tracing::debug!(skipped, "connectivity events lagged");
                            if coordinator.monitor.is_online() {
                                coordinator.drain().await;
                            }
                        }
                        Err(RecvError::Closed) => break,
                    },
                }
            }
            tracing::debug!("auto-sync stopped");
        })
    }
}
