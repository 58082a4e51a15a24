// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Local key-value persistence.
//!
//! The store is an opaque, string-keyed namespace of JSON documents. Backends
//! implement [`KeyValueStore`] over serialized strings; [`Storage`] is the
//! typed facade the rest of the crate uses.
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  Repository  │────►│   Storage    │────►│ KeyValueStore│
//! │    Queue     │     │ (typed JSON) │     │ Memory│File  │
//! └──────────────┘     └──────────────┘     └──────────────┘
//! ```
//!
//! Callers must treat every read as possibly returning nothing: a key may
//! never have been written, may have been removed, or may hold a value that
//! no longer deserializes.

mod file;
mod memory;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use lingo_core::FlashCard;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub use file::FileStore;
pub use memory::MemoryStore;

/// Well-known keys used by the offline data layer.
pub mod keys {
    pub const USER: &str = "user";
    pub const IS_AUTHENTICATED: &str = "isAuthenticated";
    pub const FLASHCARDS: &str = "flashcards";
    pub const CATEGORIES: &str = "categories";
    pub const USER_PROGRESS: &str = "userProgress";
    pub const STUDY_SESSIONS: &str = "studySessions";
    pub const PENDING_SYNC: &str = "pendingSync";
}

/// Error type for store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The value could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The stored value exists but does not deserialize.
    #[error("corrupt value under '{key}': {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Writing would exceed the store's capacity.
    #[error("storage quota exceeded: need {needed} bytes, limit is {limit}")]
    QuotaExceeded { needed: usize, limit: usize },

    /// The key cannot be represented by this backend.
    #[error("invalid key '{0}'\n  hint: keys use letters, digits, '_', '-' and '.'")]
    InvalidKey(String),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// A string-keyed namespace of serialized values.
///
/// Implementations must be safe to share between tasks; all methods take
/// `&self`.
pub trait KeyValueStore: Send + Sync {
    /// Returns the raw value under `key`, or `None` if absent.
    fn get_raw(&self, key: &str) -> StoreResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set_raw(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Deletes `key`. Removing an absent key succeeds.
    fn remove(&self, key: &str) -> StoreResult<()>;

    /// Deletes every key in the namespace.
    fn clear(&self) -> StoreResult<()>;

    /// Lists the keys currently present, in no particular order.
    fn keys(&self) -> StoreResult<Vec<String>>;
}

/// Typed JSON facade over a shared [`KeyValueStore`].
#[derive(Clone)]
pub struct Storage {
    inner: Arc<dyn KeyValueStore>,
}

impl Storage {
    /// Wraps a store backend.
    pub fn new(store: impl KeyValueStore + 'static) -> Self {
        Storage { inner: Arc::new(store) }
    }

    /// Wraps an already shared store backend.
    pub fn from_arc(inner: Arc<dyn KeyValueStore>) -> Self {
        Storage { inner }
    }

    /// Creates storage backed by a fresh in-memory store.
    pub fn memory() -> Self {
        Self::new(MemoryStore::new())
    }

    /// Returns the underlying backend.
    pub fn backend(&self) -> &Arc<dyn KeyValueStore> {
        &self.inner
    }

    /// Reads and deserializes the value under `key`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> StoreResult<Option<T>> {
        let Some(raw) = self.inner.get_raw(key)? else {
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StoreError::Corrupt { key: key.to_string(), source })
    }

    /// Serializes and stores `value` under `key`.
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> StoreResult<()> {
        let raw = serde_json::to_string(value)?;
        self.inner.set_raw(key, &raw)
    }

    /// Deletes `key`.
    pub fn remove(&self, key: &str) -> StoreResult<()> {
        self.inner.remove(key)
    }

    /// Deletes every key.
    pub fn clear(&self) -> StoreResult<()> {
        self.inner.clear()
    }

    /// Reads `key`, logging and treating any failure as absent.
    pub fn get_or_warn<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        match self.get(key) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key, error = %e, "storage read failed, treating as absent");
                None
            }
        }
    }

    /// Writes `key`, logging any failure. Returns whether the write landed.
    pub fn set_or_warn<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> bool {
        match self.set(key, value) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(key, error = %e, "storage write failed");
                false
            }
        }
    }
}

/// Card list as cached under [`keys::FLASHCARDS`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CachedCards {
    pub cards: Vec<FlashCard>,
    pub last_updated: DateTime<Utc>,
}

impl std::fmt::Debug for Storage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Storage").field("inner", &"<store>").finish()
    }
}
