// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Local notification scheduling.
//!
//! Reminders are device-side only; the offline layer asks for them on
//! login and after study sessions, and cancels them on logout.

use chrono::{Duration, NaiveDateTime, NaiveTime};

/// Schedules and cancels local reminders.
pub trait Notifier: Send + Sync {
    /// Schedules the daily study reminder, replacing any previous one.
    fn schedule_study_reminder(&self, at: NaiveDateTime);

    /// Announces the user's current study streak.
    fn schedule_streak(&self, streak: u32);

    /// Cancels every outstanding reminder.
    fn cancel_all(&self);
}

/// Notifier that only records requests in the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn schedule_study_reminder(&self, at: NaiveDateTime) {
        tracing::info!(%at, "study reminder scheduled");
    }

    fn schedule_streak(&self, streak: u32) {
        tracing::info!(streak, "streak notification scheduled");
    }

    fn cancel_all(&self) {
        tracing::info!("all notifications cancelled");
    }
}

/// Next occurrence of `hour:minute` strictly after `now`.
///
/// Returns `None` if the time of day is invalid.
pub fn next_reminder_at(now: NaiveDateTime, hour: u32, minute: u32) -> Option<NaiveDateTime> {
    let time = NaiveTime::from_hms_opt(hour, minute, 0)?;
    let today = now.date().and_time(time);
    if today > now {
        Some(today)
    } else {
        Some(today + Duration::days(1))
    }
}

#[cfg(test)]
#[path = "notify_tests.rs"]
mod tests;
