// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! lingo-core: Shared data model for the lingo vocabulary client.
//!
//! This crate provides the entities cached by the offline data layer
//! (profiles, flashcards, categories, study sessions, progress), the pending
//! change records replayed on reconnect, and the bundled catalog used as the
//! first-run offline fallback. It performs no I/O.

pub mod card;
pub mod catalog;
pub mod category;
pub mod change;
pub mod clock;
pub mod error;
pub mod progress;
pub mod user;

pub use card::{CardUpdate, Difficulty, FlashCard, NewCard, CUSTOM_CATEGORY_ID};
pub use category::Category;
pub use change::{ChangeKind, ChangePayload, PendingChange};
pub use clock::{ClockSource, IdGenerator, SystemClock};
pub use error::{Error, Result};
pub use progress::{
    ActivityEntry, SessionHistory, SessionStats, StudySessionRecord, UserProgress, MAX_SESSIONS,
};
pub use user::{Preferences, UserProfile};
