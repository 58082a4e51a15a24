// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for sync and repository tests.

#![allow(clippy::unwrap_used)]

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use chrono::{NaiveDate, TimeZone, Utc};
use lingo_core::{
    CardUpdate, Category, ChangeKind, ChangePayload, FlashCard, PendingChange, StudySessionRecord,
    UserProfile, UserProgress,
};

use super::backend::{Backend, BackendError, BackendFuture, CatalogBackend, Registration};

/// Backend that records every push and can be told to fail.
///
/// Pushes that succeed are forwarded to an inner [`CatalogBackend`].
pub struct RecordingBackend {
    inner: CatalogBackend,
    pushed: Mutex<Vec<ChangePayload>>,
    failing_kinds: Mutex<HashSet<ChangeKind>>,
    failing_cards: Mutex<HashSet<u64>>,
    reads_unreachable: AtomicBool,
    reject_login: AtomicBool,
    fetches: AtomicUsize,
}

impl RecordingBackend {
    pub fn new() -> Self {
        RecordingBackend {
            inner: CatalogBackend::new(),
            pushed: Mutex::new(Vec::new()),
            failing_kinds: Mutex::new(HashSet::new()),
            failing_cards: Mutex::new(HashSet::new()),
            reads_unreachable: AtomicBool::new(false),
            reject_login: AtomicBool::new(false),
            fetches: AtomicUsize::new(0),
        }
    }

    /// Every push attempt, in call order, including failed ones.
    pub fn pushed(&self) -> Vec<ChangePayload> {
        self.pushed.lock().unwrap().clone()
    }

    pub fn pushed_kinds(&self) -> Vec<ChangeKind> {
        self.pushed().iter().map(ChangePayload::kind).collect()
    }

    /// Make every push of `kind` fail.
    pub fn fail_kind(&self, kind: ChangeKind) {
        self.failing_kinds.lock().unwrap().insert(kind);
    }

    /// Make pushes touching card `id` fail.
    pub fn fail_card(&self, id: u64) {
        self.failing_cards.lock().unwrap().insert(id);
    }

    /// Stop failing anything.
    pub fn heal(&self) {
        self.failing_kinds.lock().unwrap().clear();
        self.failing_cards.lock().unwrap().clear();
        self.reads_unreachable.store(false, Ordering::SeqCst);
    }

    pub fn set_reads_unreachable(&self, unreachable: bool) {
        self.reads_unreachable.store(unreachable, Ordering::SeqCst);
    }

    pub fn set_reject_login(&self, reject: bool) {
        self.reject_login.store(reject, Ordering::SeqCst);
    }

    /// Number of read calls made.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    pub fn inner(&self) -> &CatalogBackend {
        &self.inner
    }

    fn record(&self, payload: ChangePayload) -> Result<(), BackendError> {
        let fails = self.failing_kinds.lock().unwrap().contains(&payload.kind())
            || payload
                .card_id()
                .is_some_and(|id| self.failing_cards.lock().unwrap().contains(&id));
        self.pushed.lock().unwrap().push(payload);
        if fails {
            Err(BackendError::Unreachable("mock failure".into()))
        } else {
            Ok(())
        }
    }

    fn read(&self) -> Result<(), BackendError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if self.reads_unreachable.load(Ordering::SeqCst) {
            Err(BackendError::Unreachable("mock read failure".into()))
        } else {
            Ok(())
        }
    }
}

impl Backend for RecordingBackend {
    fn login<'a>(&'a self, email: &'a str, password: &'a str) -> BackendFuture<'a, UserProfile> {
        if self.reject_login.load(Ordering::SeqCst) {
            return Box::pin(async { Err(BackendError::InvalidCredentials) });
        }
        self.inner.login(email, password)
    }

    fn register<'a>(&'a self, registration: &'a Registration) -> BackendFuture<'a, UserProfile> {
        self.inner.register(registration)
    }

    fn fetch_flashcards(&self) -> BackendFuture<'_, Vec<FlashCard>> {
        Box::pin(async move {
            self.read()?;
            self.inner.fetch_flashcards().await
        })
    }

    fn fetch_categories(&self) -> BackendFuture<'_, Vec<Category>> {
        Box::pin(async move {
            self.read()?;
            self.inner.fetch_categories().await
        })
    }

    fn fetch_progress(&self) -> BackendFuture<'_, UserProgress> {
        Box::pin(async move {
            self.read()?;
            self.inner.fetch_progress().await
        })
    }

    fn save_session(&self, record: StudySessionRecord) -> BackendFuture<'_, ()> {
        Box::pin(async move {
            self.record(ChangePayload::SessionSave(record.clone()))?;
            self.inner.save_session(record).await
        })
    }

    fn save_progress(&self, progress: UserProgress) -> BackendFuture<'_, ()> {
        Box::pin(async move {
            self.record(ChangePayload::ProgressUpdate(progress.clone()))?;
            self.inner.save_progress(progress).await
        })
    }

    fn create_card(&self, card: FlashCard) -> BackendFuture<'_, ()> {
        Box::pin(async move {
            self.record(ChangePayload::CardCreate(card.clone()))?;
            self.inner.create_card(card).await
        })
    }

    fn update_card(&self, card_id: u64, update: CardUpdate) -> BackendFuture<'_, ()> {
        Box::pin(async move {
            self.record(ChangePayload::CardUpdate { card_id, update: update.clone() })?;
            self.inner.update_card(card_id, update).await
        })
    }
}

/// A session record for category `category_id` dated 2025-01-15.
pub fn make_session(category_id: u64, correct: u32, incorrect: u32) -> StudySessionRecord {
    StudySessionRecord {
        category_id,
        category_name: format!("Category {category_id}"),
        correct,
        incorrect,
        total: correct + incorrect,
        date: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
        created_at: Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap(),
        synced: false,
    }
}

/// A queued session save enqueued `secs` seconds after a fixed epoch.
pub fn make_session_change(category_id: u64, secs: i64) -> PendingChange {
    PendingChange::new(
        ChangePayload::SessionSave(make_session(category_id, 3, 1)),
        Utc.timestamp_opt(1_736_942_400 + secs, 0).unwrap(),
    )
}

/// A queued edit setting the definition of card `card_id`.
pub fn make_update_change(card_id: u64, definition: &str) -> PendingChange {
    let update = CardUpdate { definition: Some(definition.to_string()), ..Default::default() };
    PendingChange::new(ChangePayload::CardUpdate { card_id, update }, Utc::now())
}
