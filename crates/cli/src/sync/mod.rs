// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Offline change replay.
//!
//! Writes made while offline are queued here and replayed against the
//! backend once connectivity returns.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌─────────────┐     ┌─────────────┐
//! │ Coordinator  │────►│   Backend   │────►│   Remote    │
//! │(SyncCoord.)  │     │   (trait)   │     │   Service   │
//! └──────────────┘     └─────────────┘     └─────────────┘
//!        │   ▲
//!        ▼   │ online transitions
//! ┌─────────────┐     ┌──────────────┐
//! │   Queue     │     │ Connectivity │
//! │(PendingQ.)  │     │   Monitor    │
//! └─────────────┘     └──────────────┘
//! ```
//!
//! # Features
//!
//! - FIFO queue, optionally mirrored to the key-value store
//! - Atomic snapshot on drain so concurrent enqueues are never lost
//! - Failed dispatches reported, optionally requeued
//! - Background auto-sync on reconnect
//! - Injectable backend trait for testing

mod backend;
mod coordinator;
mod queue;

pub use backend::{
    dispatch, Backend, BackendError, BackendFuture, BackendResult, CatalogBackend, Registration,
};
pub use coordinator::{DrainReport, FailedDispatch, SkipReason, SyncCoordinator, SyncStats};
pub use queue::{PendingQueue, QueueError, QueueResult};

#[cfg(test)]
pub(crate) mod test_helpers;

#[cfg(test)]
mod backend_tests;



#[cfg(test)]
mod queue_tests;
