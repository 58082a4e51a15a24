// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for the backend module.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::test_helpers::{make_session, RecordingBackend};
use super::*;
use lingo_core::{catalog, CardUpdate, ChangeKind, ChangePayload, FlashCard, NewCard};
use yare::parameterized;

#[parameterized(
    empty_email = { "", "pw" },
    blank_email = { "   ", "pw" },
    empty_password = { "a@b.com", "" },
)]
fn test_catalog_login_rejects_missing_credentials(email: &str, password: &str) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let backend = CatalogBackend::new();
    let err = rt.block_on(backend.login(email, password)).unwrap_err();
    assert_eq!(err, BackendError::InvalidCredentials);
}

#[tokio::test]
async fn test_catalog_login_returns_mock_user() {
    let backend = CatalogBackend::new();
    let user = backend.login("a@b.com", "pw").await.unwrap();
    assert_eq!(user, catalog::mock_user());
}

#[tokio::test]
async fn test_catalog_register_uses_registration_details() {
    let backend = CatalogBackend::new();
    let registration = Registration {
        name: "Dana".into(),
        email: "dana@example.com".into(),
        password: "secret".into(),
        native_language: "polish".into(),
    };

    let user = backend.register(&registration).await.unwrap();
    assert_eq!(user.name, "Dana");
    assert_eq!(user.email, "dana@example.com");
    assert_eq!(user.preferences.native_language, "polish");
}

#[tokio::test]
async fn test_catalog_serves_bundled_data() {
    let backend = CatalogBackend::new();
    assert_eq!(backend.fetch_flashcards().await.unwrap(), catalog::flashcards());
    assert_eq!(backend.fetch_categories().await.unwrap(), catalog::categories());
    assert_eq!(backend.fetch_progress().await.unwrap(), catalog::default_progress());
}

#[tokio::test]
async fn test_catalog_applies_created_card() {
    let backend = CatalogBackend::new();
    let card = FlashCard::from_new(42, NewCard::word("Cache"), true);

    backend.create_card(card.clone()).await.unwrap();
    backend.create_card(card).await.unwrap();

    let cards = backend.fetch_flashcards().await.unwrap();
    assert_eq!(cards.iter().filter(|c| c.id == 42).count(), 1);
}

#[tokio::test]
async fn test_catalog_update_unknown_card_is_rejected() {
    let backend = CatalogBackend::new();
    let err = backend.update_card(9_999, CardUpdate::default()).await.unwrap_err();
    assert!(matches!(err, BackendError::Rejected(_)));
}

#[tokio::test]
async fn test_catalog_update_merges_fields() {
    let backend = CatalogBackend::new();
    let update = CardUpdate { mastered: Some(false), ..Default::default() };
    backend.update_card(1, update).await.unwrap();

    let card = backend.cards().into_iter().find(|c| c.id == 1).unwrap();
    assert!(!card.mastered);
    assert_eq!(card.word, "Algorithm");
}

#[tokio::test]
async fn test_catalog_marks_pushed_records_synced() {
    let backend = CatalogBackend::new();
    backend.save_session(make_session(1, 2, 2)).await.unwrap();
    let mut progress = catalog::default_progress();
    progress.synced = false;
    progress.weekly_progress = 3;
    backend.save_progress(progress).await.unwrap();

    assert!(backend.sessions()[0].synced);
    assert!(backend.progress().synced);
    assert_eq!(backend.progress().weekly_progress, 3);
}

#[tokio::test]
async fn test_dispatch_routes_each_kind() {
    let backend = RecordingBackend::new();
    let payloads = vec![
        ChangePayload::SessionSave(make_session(1, 1, 0)),
        ChangePayload::ProgressUpdate(catalog::default_progress()),
        ChangePayload::CardCreate(FlashCard::from_new(50, NewCard::word("Heap"), false)),
        ChangePayload::CardUpdate { card_id: 50, update: CardUpdate::default() },
    ];

    for payload in &payloads {
        dispatch(&backend, payload).await.unwrap();
    }

    assert_eq!(
        backend.pushed_kinds(),
        vec![
            ChangeKind::SessionSave,
            ChangeKind::ProgressUpdate,
            ChangeKind::CardCreate,
            ChangeKind::CardUpdate
        ]
    );
}

#[tokio::test]
async fn test_dispatch_surfaces_failure() {
    let backend = RecordingBackend::new();
    backend.fail_kind(ChangeKind::SessionSave);

    let result = dispatch(&backend, &ChangePayload::SessionSave(make_session(1, 1, 0))).await;
    assert!(matches!(result, Err(BackendError::Unreachable(_))));
    assert_eq!(backend.pushed().len(), 1);
}

#[tokio::test]
async fn test_persistent_catalog_outlives_instance() {
    let storage = crate::store::Storage::memory();
    {
        let backend = CatalogBackend::persistent(storage.clone());
        let card = FlashCard::from_new(77, NewCard::word("Queue"), false);
        backend.create_card(card).await.unwrap();
    }

    let backend = CatalogBackend::persistent(storage);
    let cards = backend.fetch_flashcards().await.unwrap();
    assert!(cards.iter().any(|c| c.id == 77 && c.word == "Queue"));
}

#[tokio::test]
async fn test_persistent_catalog_starts_from_bundled_data() {
    let backend = CatalogBackend::persistent(crate::store::Storage::memory());
    assert_eq!(backend.cards(), catalog::flashcards());
}
