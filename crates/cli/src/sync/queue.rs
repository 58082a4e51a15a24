// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pending-sync queue for changes made while disconnected.
//!
//! Changes are appended in the order they happen and replayed in that same
//! order. Nothing is deduplicated: three offline edits to one card are three
//! queued changes. When persistence is enabled the queue is mirrored under
//! the `pendingSync` store key after every change, so a restart while
//! offline does not lose queued work.

use std::collections::VecDeque;
use std::sync::Mutex;

use lingo_core::PendingChange;

use crate::store::{keys, Storage, StoreError};

/// Error type for queue operations.
#[derive(Debug, thiserror::Error)]
pub enum QueueError {
    /// The change is queued in memory but could not be persisted.
    #[error("queued change not persisted: {0}")]
    NotPersisted(#[from] StoreError),
}

/// Result type for queue operations.
pub type QueueResult<T> = Result<T, QueueError>;

/// Ordered buffer of changes awaiting replay.
pub struct PendingQueue {
    items: Mutex<VecDeque<PendingChange>>,
    /// Where the queue is mirrored, if persistence is enabled.
    storage: Option<Storage>,
}

impl PendingQueue {
    /// Creates a queue held only in process memory.
    pub fn in_memory() -> Self {
        PendingQueue { items: Mutex::new(VecDeque::new()), storage: None }
    }

    /// Creates a queue mirrored to `storage`, reloading anything already there.
    ///
    /// An unreadable stored queue is logged and treated as empty.
    pub fn persistent(storage: Storage) -> Self {
        let restored: Vec<PendingChange> =
            storage.get_or_warn(keys::PENDING_SYNC).unwrap_or_default();
        if !restored.is_empty() {
            tracing::info!(count = restored.len(), "restored pending changes");
        }
        PendingQueue { items: Mutex::new(restored.into()), storage: Some(storage) }
    }

    /// Returns true if the queue is mirrored to storage.
    pub fn is_persistent(&self) -> bool {
        self.storage.is_some()
    }

    /// Appends a change. Returns the new queue length.
    ///
    /// On error the change is still queued for this process; only the
    /// persisted copy is missing it.
    pub fn enqueue(&self, change: PendingChange) -> QueueResult<usize> {
        let mut items = self.lock();
        tracing::debug!(kind = %change.kind(), "queued change for later sync");
        items.push_back(change);
        let len = items.len();
        self.persist(&items)?;
        Ok(len)
    }

    /// Number of queued changes.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns true if nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Copies every queued change, oldest first, without removing them.
    pub fn peek_all(&self) -> Vec<PendingChange> {
        self.lock().iter().cloned().collect()
    }

    /// Removes and returns every queued change, oldest first.
    ///
    /// The snapshot and the clear happen under one lock, so a change queued
    /// concurrently lands either in the returned batch or in the queue.
    pub fn take_all(&self) -> Vec<PendingChange> {
        let mut items = self.lock();
        let taken: Vec<PendingChange> = items.drain(..).collect();
        self.persist_or_warn(&items);
        taken
    }

    /// Puts changes back at the head of the queue, preserving their order
    /// ahead of anything queued since they were taken.
    pub fn restore_front(&self, changes: Vec<PendingChange>) {
        if changes.is_empty() {
            return;
        }
        let mut items = self.lock();
        for change in changes.into_iter().rev() {
            items.push_front(change);
        }
        self.persist_or_warn(&items);
    }

    /// Drops every queued change.
    pub fn clear(&self) {
        let mut items = self.lock();
        items.clear();
        self.persist_or_warn(&items);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, VecDeque<PendingChange>> {
        self.items.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn persist(&self, items: &VecDeque<PendingChange>) -> Result<(), StoreError> {
        let Some(ref storage) = self.storage else {
            return Ok(());
        };
        if items.is_empty() {
            storage.remove(keys::PENDING_SYNC)
        } else {
            storage.set(keys::PENDING_SYNC, items)
        }
    }

    fn persist_or_warn(&self, items: &VecDeque<PendingChange>) {
        if let Err(e) = self.persist(items) {
            tracing::warn!(error = %e, "failed to persist pending queue");
        }
    }
}

impl std::fmt::Debug for PendingQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingQueue")
            .field("len", &self.len())
            .field("persistent", &self.is_persistent())
            .finish()
    }
}
