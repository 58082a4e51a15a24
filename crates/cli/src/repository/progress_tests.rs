// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for session and progress operations.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::test_support::Fixture;
use crate::store::keys;
use crate::test_helpers::Notification;
use lingo_core::{catalog, ChangeKind, SessionStats, UserProfile, UserProgress, MAX_SESSIONS};

#[tokio::test]
async fn test_offline_session_is_unsynced_and_queued() {
    let fx = Fixture::new(false);

    let record = fx.repo.save_study_session(1, "Programming Basics", &SessionStats::new(4, 1)).await.unwrap();

    assert!(!record.synced);
    assert_eq!(record.total, 5);
    assert_eq!(fx.repo.study_sessions(), vec![record]);
    assert_eq!(fx.queue.len(), 1);
}

#[tokio::test]
async fn test_online_session_is_synced() {
    let fx = Fixture::new(true);

    let record = fx.repo.save_study_session(1, "Programming Basics", &SessionStats::new(4, 1)).await.unwrap();

    assert!(record.synced);
    assert!(fx.repo.study_sessions()[0].synced);
    assert!(fx.queue.is_empty());
}

#[tokio::test]
async fn test_failed_online_session_stays_unsynced() {
    let fx = Fixture::new(true);
    fx.backend.fail_kind(ChangeKind::SessionSave);

    let record = fx.repo.save_study_session(1, "Programming Basics", &SessionStats::new(1, 0)).await.unwrap();

    assert!(!record.synced);
    assert!(!fx.repo.study_sessions()[0].synced);
    assert_eq!(fx.queue.len(), 1);
}

#[tokio::test]
async fn test_session_history_is_capped() {
    let fx = Fixture::new(false);
    for i in 0..=MAX_SESSIONS as u32 {
        fx.repo.save_study_session(1, "Basics", &SessionStats::new(i, 0)).await.unwrap();
    }

    let sessions = fx.repo.study_sessions();
    assert_eq!(sessions.len(), MAX_SESSIONS);
    assert_eq!(sessions[0].correct, 1);
    assert_eq!(sessions[MAX_SESSIONS - 1].correct, MAX_SESSIONS as u32);
}

#[tokio::test]
async fn test_user_progress_offline_defaults() {
    let fx = Fixture::new(false);
    assert_eq!(fx.repo.user_progress().await, catalog::default_progress());
}

#[tokio::test]
async fn test_update_user_progress_stamps_fields() {
    let fx = Fixture::new(false);
    let mut progress = catalog::default_progress();
    progress.weekly_goal = 30;

    let stored = fx.repo.update_user_progress(progress).await.unwrap();

    assert!(stored.last_updated.is_some());
    assert!(!stored.synced);
    assert_eq!(fx.repo.user_progress().await.weekly_goal, 30);
}

#[tokio::test]
async fn test_online_progress_read_prefers_queued_update() {
    let fx = Fixture::new(false);
    let mut progress = catalog::default_progress();
    progress.weekly_goal = 42;
    fx.repo.update_user_progress(progress).await.unwrap();

    fx.go_online();
    assert_eq!(fx.repo.user_progress().await.weekly_goal, 42);
}

#[tokio::test]
async fn test_complete_session_updates_user_progress_and_streak() {
    let fx = Fixture::new(false);
    fx.storage.set(keys::USER, &catalog::mock_user()).unwrap();
    let before = catalog::default_progress();

    let record = fx.repo.complete_study_session(1, &SessionStats::new(3, 2)).await.unwrap();

    assert_eq!(record.category_name, "Programming Basics");
    let user: UserProfile = fx.storage.get(keys::USER).unwrap().unwrap();
    assert_eq!(user.preferences.total_words_learned, catalog::mock_user().preferences.total_words_learned + 5);
    let progress: UserProgress = fx.storage.get(keys::USER_PROGRESS).unwrap().unwrap();
    assert_eq!(progress.weekly_progress, before.weekly_progress + 5);
    assert_eq!(progress.study_streak, before.study_streak + 1);
    assert_eq!(fx.notifier.calls(), vec![Notification::Streak(before.study_streak + 1)]);
}

#[tokio::test]
async fn test_complete_session_without_correct_answers_skips_streak() {
    let fx = Fixture::new(false);
    fx.repo.complete_study_session(1, &SessionStats::new(0, 4)).await.unwrap();
    assert!(fx.notifier.calls().is_empty());
}
