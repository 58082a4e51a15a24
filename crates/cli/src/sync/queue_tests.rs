// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for the pending queue module.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::test_helpers::{make_session_change, make_update_change};
use super::*;
use crate::store::{keys, FileStore, MemoryStore, Storage};
use lingo_core::{ChangeKind, PendingChange};
use tempfile::tempdir;

fn category_ids(changes: &[PendingChange]) -> Vec<u64> {
    changes
        .iter()
        .map(|c| match &c.payload {
            lingo_core::ChangePayload::SessionSave(r) => r.category_id,
            _ => 0,
        })
        .collect()
}

#[test]
fn test_queue_starts_empty() {
    let queue = PendingQueue::in_memory();
    assert!(queue.is_empty());
    assert_eq!(queue.len(), 0);
    assert!(queue.take_all().is_empty());
    assert!(!queue.is_persistent());
}

#[test]
fn test_enqueue_returns_new_length() {
    let queue = PendingQueue::in_memory();
    assert_eq!(queue.enqueue(make_session_change(1, 0)).unwrap(), 1);
    assert_eq!(queue.enqueue(make_session_change(2, 1)).unwrap(), 2);
    assert_eq!(queue.len(), 2);
}

#[test]
fn test_take_all_preserves_enqueue_order_and_empties() {
    let queue = PendingQueue::in_memory();
    for id in [3, 1, 2] {
        queue.enqueue(make_session_change(id, id as i64)).unwrap();
    }

    let taken = queue.take_all();
    assert_eq!(category_ids(&taken), vec![3, 1, 2]);
    assert!(queue.is_empty());
}

#[test]
fn test_repeated_updates_are_not_coalesced() {
    let queue = PendingQueue::in_memory();
    queue.enqueue(make_update_change(7, "one")).unwrap();
    queue.enqueue(make_update_change(7, "two")).unwrap();
    queue.enqueue(make_update_change(7, "three")).unwrap();

    let kinds: Vec<ChangeKind> = queue.peek_all().iter().map(PendingChange::kind).collect();
    assert_eq!(kinds, vec![ChangeKind::CardUpdate; 3]);
}

#[test]
fn test_peek_all_leaves_queue_intact() {
    let queue = PendingQueue::in_memory();
    queue.enqueue(make_session_change(1, 0)).unwrap();
    assert_eq!(queue.peek_all().len(), 1);
    assert_eq!(queue.len(), 1);
}

#[test]
fn test_restore_front_goes_ahead_of_newer_items() {
    let queue = PendingQueue::in_memory();
    queue.enqueue(make_session_change(1, 0)).unwrap();
    queue.enqueue(make_session_change(2, 1)).unwrap();
    let taken = queue.take_all();

    queue.enqueue(make_session_change(3, 2)).unwrap();
    queue.restore_front(taken);

    assert_eq!(category_ids(&queue.peek_all()), vec![1, 2, 3]);
}

#[test]
fn test_clear_drops_everything() {
    let queue = PendingQueue::in_memory();
    queue.enqueue(make_session_change(1, 0)).unwrap();
    queue.clear();
    assert!(queue.is_empty());
}

#[test]
fn test_persistent_queue_mirrors_to_store() {
    let storage = Storage::memory();
    let queue = PendingQueue::persistent(storage.clone());
    queue.enqueue(make_session_change(1, 0)).unwrap();

    let stored: Vec<PendingChange> = storage.get(keys::PENDING_SYNC).unwrap().unwrap();
    assert_eq!(stored.len(), 1);

    queue.take_all();
    assert!(storage.get::<Vec<PendingChange>>(keys::PENDING_SYNC).unwrap().is_none());
}

#[test]
fn test_persistent_queue_survives_restart() {
    let dir = tempdir().unwrap();
    {
        let storage = Storage::new(FileStore::open(dir.path()).unwrap());
        let queue = PendingQueue::persistent(storage);
        queue.enqueue(make_session_change(1, 0)).unwrap();
        queue.enqueue(make_session_change(2, 1)).unwrap();
    }

    let storage = Storage::new(FileStore::open(dir.path()).unwrap());
    let queue = PendingQueue::persistent(storage);
    assert_eq!(category_ids(&queue.peek_all()), vec![1, 2]);
}

#[test]
fn test_corrupt_stored_queue_starts_empty() {
    let storage = Storage::memory();
    storage.backend().set_raw(keys::PENDING_SYNC, "{not json").unwrap();

    let queue = PendingQueue::persistent(storage);
    assert!(queue.is_empty());
}

#[test]
fn test_enqueue_keeps_item_when_persist_fails() {
    let storage = Storage::new(MemoryStore::with_quota(16));
    let queue = PendingQueue::persistent(storage);

    let err = queue.enqueue(make_session_change(1, 0)).unwrap_err();
    assert!(matches!(err, QueueError::NotPersisted(_)));
    assert_eq!(queue.len(), 1);
}
