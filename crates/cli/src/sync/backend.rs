// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Backend abstraction for authoritative data and change replay.
//!
//! Provides a trait-based boundary that enables:
//! - An in-memory catalog backend standing in for the real service
//! - Recording and failing backends for unit testing
//!
//! Sync calls are one-way: the core only looks at success or failure.

use std::future::Future;
use std::pin::Pin;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use lingo_core::{
    catalog, CardUpdate, Category, ChangePayload, FlashCard, StudySessionRecord, UserProfile,
    UserProgress,
};

use crate::store::Storage;

/// Store key holding a persisted [`CatalogBackend`] state.
const CATALOG_KEY: &str = "catalog";

/// Error type for backend operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BackendError {
    /// The service could not be reached.
    #[error("backend unreachable: {0}")]
    Unreachable(String),

    /// The service refused the request.
    #[error("request rejected: {0}")]
    Rejected(String),

    /// Email or password did not match.
    #[error("invalid credentials")]
    InvalidCredentials,
}

/// Result type for backend operations.
pub type BackendResult<T> = Result<T, BackendError>;

/// Boxed future returned by [`Backend`] methods.
pub type BackendFuture<'a, T> = Pin<Box<dyn Future<Output = BackendResult<T>> + Send + 'a>>;

/// Details for creating a new account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub native_language: String,
}

/// The remote service the offline layer reads from and replays changes to.
pub trait Backend: Send + Sync {
    /// Checks credentials and returns the matching profile.
    fn login<'a>(&'a self, email: &'a str, password: &'a str) -> BackendFuture<'a, UserProfile>;

    /// Creates an account and returns its profile.
    fn register<'a>(&'a self, registration: &'a Registration) -> BackendFuture<'a, UserProfile>;

    /// Fetches the full card list.
    fn fetch_flashcards(&self) -> BackendFuture<'_, Vec<FlashCard>>;

    /// Fetches all categories.
    fn fetch_categories(&self) -> BackendFuture<'_, Vec<Category>>;

    /// Fetches the user's progress.
    fn fetch_progress(&self) -> BackendFuture<'_, UserProgress>;

    /// Records a finished study session.
    fn save_session(&self, record: StudySessionRecord) -> BackendFuture<'_, ()>;

    /// Overwrites the user's progress.
    fn save_progress(&self, progress: UserProgress) -> BackendFuture<'_, ()>;

    /// Stores a newly created card.
    fn create_card(&self, card: FlashCard) -> BackendFuture<'_, ()>;

    /// Applies an edit to an existing card.
    fn update_card(&self, card_id: u64, update: CardUpdate) -> BackendFuture<'_, ()>;
}

/// Sends a change to the endpoint matching its kind.
pub async fn dispatch<B: Backend + ?Sized>(backend: &B, payload: &ChangePayload) -> BackendResult<()> {
    match payload {
        ChangePayload::SessionSave(record) => backend.save_session(record.clone()).await,
        ChangePayload::ProgressUpdate(progress) => backend.save_progress(progress.clone()).await,
        ChangePayload::CardCreate(card) => backend.create_card(card.clone()).await,
        ChangePayload::CardUpdate { card_id, update } => {
            backend.update_card(*card_id, update.clone()).await
        }
    }
}

/// In-memory backend seeded from the bundled catalog.
///
/// Accepts any non-empty credentials. Replayed changes are applied to the
/// catalog with last-write-wins semantics, so later reads reflect them.
/// A persistent backend keeps that state in its own store so it outlives
/// the process, standing in for a remote service between CLI runs.
pub struct CatalogBackend {
    state: Mutex<CatalogState>,
    storage: Option<Storage>,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CatalogState {
    cards: Vec<FlashCard>,
    categories: Vec<Category>,
    progress: UserProgress,
    sessions: Vec<StudySessionRecord>,
}

impl CatalogBackend {
    /// Creates a backend holding the bundled catalog.
    pub fn new() -> Self {
        CatalogBackend { state: Mutex::new(CatalogState::seeded()), storage: None }
    }

    /// Creates a backend whose state is kept in `storage`.
    ///
    /// Starts from the bundled catalog when nothing usable is stored yet.
    pub fn persistent(storage: Storage) -> Self {
        let state = storage.get_or_warn(CATALOG_KEY).unwrap_or_else(CatalogState::seeded);
        CatalogBackend { state: Mutex::new(state), storage: Some(storage) }
    }

    /// Cards currently held by the backend.
    pub fn cards(&self) -> Vec<FlashCard> {
        self.lock().cards.clone()
    }

    /// Sessions received so far.
    pub fn sessions(&self) -> Vec<StudySessionRecord> {
        self.lock().sessions.clone()
    }

    /// Progress currently held by the backend.
    pub fn progress(&self) -> UserProgress {
        self.lock().progress.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, CatalogState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Applies `f` to the state and persists the result.
    fn mutate<T>(&self, f: impl FnOnce(&mut CatalogState) -> BackendResult<T>) -> BackendResult<T> {
        let mut state = self.lock();
        let value = f(&mut *state)?;
        if let Some(ref storage) = self.storage {
            storage
                .set(CATALOG_KEY, &*state)
                .map_err(|e| BackendError::Unreachable(format!("catalog not saved: {e}")))?;
        }
        Ok(value)
    }
}

impl CatalogState {
    fn seeded() -> Self {
        CatalogState {
            cards: catalog::flashcards(),
            categories: catalog::categories(),
            progress: catalog::default_progress(),
            sessions: Vec::new(),
        }
    }
}

impl Default for CatalogBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl Backend for CatalogBackend {
    fn login<'a>(&'a self, email: &'a str, password: &'a str) -> BackendFuture<'a, UserProfile> {
        Box::pin(async move {
            if email.trim().is_empty() || password.is_empty() {
                return Err(BackendError::InvalidCredentials);
            }
            Ok(catalog::mock_user())
        })
    }

    fn register<'a>(&'a self, registration: &'a Registration) -> BackendFuture<'a, UserProfile> {
        Box::pin(async move {
            if registration.email.trim().is_empty() || registration.password.is_empty() {
                return Err(BackendError::Rejected("email and password are required".into()));
            }
            let mut user = catalog::mock_user();
            user.name = registration.name.clone();
            user.email = registration.email.clone();
            user.preferences.native_language = registration.native_language.clone();
            Ok(user)
        })
    }

    fn fetch_flashcards(&self) -> BackendFuture<'_, Vec<FlashCard>> {
        Box::pin(async move { Ok(self.cards()) })
    }

    fn fetch_categories(&self) -> BackendFuture<'_, Vec<Category>> {
        Box::pin(async move { Ok(self.lock().categories.clone()) })
    }

    fn fetch_progress(&self) -> BackendFuture<'_, UserProgress> {
        Box::pin(async move { Ok(self.progress()) })
    }

    fn save_session(&self, record: StudySessionRecord) -> BackendFuture<'_, ()> {
        Box::pin(async move {
            tracing::info!(category = record.category_id, total = record.total, "session synced");
            let mut record = record;
            record.synced = true;
            self.mutate(|state| {
                state.sessions.push(record);
                Ok(())
            })
        })
    }

    fn save_progress(&self, progress: UserProgress) -> BackendFuture<'_, ()> {
        Box::pin(async move {
            tracing::info!(weekly_progress = progress.weekly_progress, "progress synced");
            let mut progress = progress;
            progress.synced = true;
            self.mutate(|state| {
                state.progress = progress;
                Ok(())
            })
        })
    }

    fn create_card(&self, card: FlashCard) -> BackendFuture<'_, ()> {
        Box::pin(async move {
            tracing::info!(card = card.id, word = %card.word, "card synced");
            self.mutate(|state| {
                match state.cards.iter_mut().find(|c| c.id == card.id) {
                    Some(existing) => *existing = card,
                    None => state.cards.push(card),
                }
                Ok(())
            })
        })
    }

    fn update_card(&self, card_id: u64, update: CardUpdate) -> BackendFuture<'_, ()> {
        Box::pin(async move {
            self.mutate(|state| {
                let card = state
                    .cards
                    .iter_mut()
                    .find(|c| c.id == card_id)
                    .ok_or_else(|| BackendError::Rejected(format!("card {card_id} not found")))?;
                card.apply(&update);
                tracing::info!(card = card_id, "card update synced");
                Ok(())
            })
        })
    }
}
