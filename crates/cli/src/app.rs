// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Service wiring.
//!
//! [`App`] builds each service exactly once and hands out shared handles,
//! so tests can swap any collaborator without process-wide state.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::config::Config;
use crate::connectivity::ConnectivityMonitor;
use crate::notify::Notifier;
use crate::repository::OfflineRepository;
use crate::store::Storage;
use crate::sync::{Backend, CatalogBackend, PendingQueue, SyncCoordinator};

/// The assembled offline data layer.
pub struct App<B: Backend = CatalogBackend> {
    config: Config,
    storage: Storage,
    monitor: Arc<ConnectivityMonitor>,
    queue: Arc<PendingQueue>,
    repository: OfflineRepository<B>,
    coordinator: Arc<SyncCoordinator<B>>,
}

impl<B: Backend + 'static> App<B> {
    pub fn new(
        config: Config,
        storage: Storage,
        backend: Arc<B>,
        notifier: Arc<dyn Notifier>,
        online: bool,
    ) -> Self {
        let monitor = Arc::new(ConnectivityMonitor::new(online));
        let queue = Arc::new(if config.sync.persist_queue {
            PendingQueue::persistent(storage.clone())
        } else {
            PendingQueue::in_memory()
        });

        let repository = OfflineRepository::new(
            storage.clone(),
            Arc::clone(&queue),
            Arc::clone(&monitor),
            Arc::clone(&backend),
        )
        .with_notifier(notifier)
        .with_reminder(config.reminder.clone());

        let coordinator = Arc::new(
            SyncCoordinator::new(backend, Arc::clone(&queue), Arc::clone(&monitor), storage.clone())
                .with_requeue_failed(config.sync.requeue_failed),
        );

        tracing::debug!(online, pending = queue.len(), "services ready");
        App { config, storage, monitor, queue, repository, coordinator }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    pub fn monitor(&self) -> &Arc<ConnectivityMonitor> {
        &self.monitor
    }

    pub fn queue(&self) -> &Arc<PendingQueue> {
        &self.queue
    }

    pub fn repository(&self) -> &OfflineRepository<B> {
        &self.repository
    }

    pub fn coordinator(&self) -> &Arc<SyncCoordinator<B>> {
        &self.coordinator
    }

    /// Starts draining on reconnect if auto-sync is enabled.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start_auto_sync(&self, cancel: CancellationToken) -> Option<JoinHandle<()>> {
        if !self.config.sync.auto_sync {
            return None;
        }
        Some(self.coordinator.spawn_auto_sync(cancel))
    }
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
