// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test doubles for crate-level tests.

#![allow(clippy::unwrap_used)]

use std::sync::Mutex;

use chrono::NaiveDateTime;

use crate::notify::Notifier;

/// A notifier request as seen by [`RecordingNotifier`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Reminder(NaiveDateTime),
    Streak(u32),
    CancelAll,
}

/// Notifier that records every request.
#[derive(Default)]
pub struct RecordingNotifier {
    calls: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn calls(&self) -> Vec<Notification> {
        self.calls.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn schedule_study_reminder(&self, at: NaiveDateTime) {
        self.calls.lock().unwrap().push(Notification::Reminder(at));
    }

    fn schedule_streak(&self, streak: u32) {
        self.calls.lock().unwrap().push(Notification::Streak(streak));
    }

    fn cancel_all(&self) {
        self.calls.lock().unwrap().push(Notification::CancelAll);
    }
}
