// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Offline-first domain repository.
//!
//! Every read prefers fresh backend data while online and refreshes the
//! local cache with it; offline reads come from the cache and fall back to
//! the bundled catalog on first run. Every write lands in the local store
//! first, then goes straight to the backend when online or onto the
//! pending queue when not.
//!
//! Operations are split by concern:
//! - `auth`: login, registration, logout and the cached session
//! - `cards`: flashcards and categories
//! - `progress`: study sessions and aggregate progress

mod auth;
mod cards;
mod progress;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use lingo_core::{ChangePayload, ClockSource, IdGenerator, PendingChange};

use crate::config::ReminderSettings;
use crate::connectivity::ConnectivityMonitor;
use crate::notify::{LogNotifier, Notifier};
use crate::store::Storage;
use crate::sync::{dispatch, Backend, CatalogBackend, PendingQueue};

/// Where a write ended up after the local store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// Accepted by the backend.
    Sent,
    /// Waiting in the pending queue.
    Queued,
}

/// Connectivity-aware access to user, card and progress data.
pub struct OfflineRepository<B: Backend = CatalogBackend> {
    storage: Storage,
    queue: Arc<PendingQueue>,
    monitor: Arc<ConnectivityMonitor>,
    backend: Arc<B>,
    notifier: Arc<dyn Notifier>,
    ids: IdGenerator,
    reminder: ReminderSettings,
}

impl<B: Backend> OfflineRepository<B> {
    /// Creates a repository that logs notifications instead of showing them.
    pub fn new(
        storage: Storage,
        queue: Arc<PendingQueue>,
        monitor: Arc<ConnectivityMonitor>,
        backend: Arc<B>,
    ) -> Self {
        OfflineRepository {
            storage,
            queue,
            monitor,
            backend,
            notifier: Arc::new(LogNotifier),
            ids: IdGenerator::new(),
            reminder: ReminderSettings::default(),
        }
    }

    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn with_reminder(mut self, reminder: ReminderSettings) -> Self {
        self.reminder = reminder;
        self
    }

    /// Returns true if connectivity is currently online.
    pub fn is_online(&self) -> bool {
        self.monitor.is_online()
    }

    fn now(&self) -> DateTime<Utc> {
        self.ids.clock().now()
    }

    /// Sends a change to the backend when online, otherwise queues it.
    ///
    /// A failed online dispatch is queued too, so the change is retried on
    /// the next drain instead of being lost. A queue that cannot be
    /// persisted still holds the change in memory, so that is only logged.
    async fn push_or_queue(&self, payload: ChangePayload) -> WriteOutcome {
        if self.monitor.is_online() {
            match dispatch(self.backend.as_ref(), &payload).await {
                Ok(()) => {
                    tracing::debug!(kind = %payload.kind(), "change synced");
                    return WriteOutcome::Sent;
                }
                Err(e) => {
                    tracing::warn!(kind = %payload.kind(), error = %e, "sync failed, queueing change");
                }
            }
        }
        match self.queue.enqueue(PendingChange::new(payload, self.now())) {
            Ok(pending) => tracing::debug!(pending, "change queued"),
            Err(e) => tracing::warn!(error = %e, "change queued for this session only"),
        }
        WriteOutcome::Queued
    }
}



#[cfg(test)]
mod progress_tests;

#[cfg(test)]
mod test_support;
