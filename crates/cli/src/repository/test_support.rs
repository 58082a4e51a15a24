// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Fixture shared by repository tests.

use std::sync::Arc;

use super::OfflineRepository;
use crate::config::ReminderSettings;
use crate::connectivity::ConnectivityMonitor;
use crate::store::Storage;
use crate::sync::test_helpers::RecordingBackend;
use crate::sync::PendingQueue;
use crate::test_helpers::RecordingNotifier;

pub struct Fixture {
    pub storage: Storage,
    pub queue: Arc<PendingQueue>,
    pub monitor: Arc<ConnectivityMonitor>,
    pub backend: Arc<RecordingBackend>,
    pub notifier: Arc<RecordingNotifier>,
    pub repo: OfflineRepository<RecordingBackend>,
}

impl Fixture {
    pub fn new(online: bool) -> Self {
        Self::with_storage(online, Storage::memory())
    }

    pub fn with_storage(online: bool, storage: Storage) -> Self {
        let queue = Arc::new(PendingQueue::persistent(storage.clone()));
        let monitor = Arc::new(ConnectivityMonitor::new(online));
        let backend = Arc::new(RecordingBackend::new());
        let notifier = Arc::new(RecordingNotifier::default());
        let repo = OfflineRepository::new(
            storage.clone(),
            Arc::clone(&queue),
            Arc::clone(&monitor),
            Arc::clone(&backend),
        )
        .with_notifier(notifier.clone())
        .with_reminder(ReminderSettings::default());
        Fixture { storage, queue, monitor, backend, notifier, repo }
    }

    pub fn go_offline(&self) {
        self.monitor.set_online(false);
    }

    pub fn go_online(&self) {
        self.monitor.set_online(true);
    }
}
