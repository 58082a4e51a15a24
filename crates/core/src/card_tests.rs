// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

fn sample_card() -> FlashCard {
    FlashCard {
        id: 1,
        category_id: 1,
        word: "Algorithm".into(),
        definition: "A step-by-step procedure".into(),
        example: "The sorting algorithm is fast.".into(),
        translations: BTreeMap::from([("polish".to_string(), "Algorytm".to_string())]),
        difficulty: Difficulty::Beginner,
        mastered: true,
        review_count: 8,
        last_reviewed: None,
        created_offline: false,
    }
}

#[parameterized(
    beginner = { "beginner", Difficulty::Beginner },
    intermediate = { "intermediate", Difficulty::Intermediate },
    advanced_upper = { "ADVANCED", Difficulty::Advanced },
)]
fn difficulty_parse(input: &str, expected: Difficulty) {
    assert_eq!(input.parse::<Difficulty>().unwrap(), expected);
}

#[test]
fn difficulty_parse_rejects_unknown() {
    let err = "mixed".parse::<Difficulty>().unwrap_err();
    assert!(matches!(err, Error::InvalidDifficulty(ref s) if s == "mixed"));
}

#[test]
fn from_new_resets_review_state() {
    let input = NewCard {
        word: "Cache".into(),
        definition: "Fast storage".into(),
        difficulty: Difficulty::Advanced,
        ..Default::default()
    };

    let card = FlashCard::from_new(42, input, true);

    assert_eq!(card.id, 42);
    assert_eq!(card.category_id, CUSTOM_CATEGORY_ID);
    assert_eq!(card.word, "Cache");
    assert_eq!(card.difficulty, Difficulty::Advanced);
    assert!(!card.mastered);
    assert_eq!(card.review_count, 0);
    assert!(card.last_reviewed.is_none());
    assert!(card.created_offline);
}

#[test]
fn apply_merges_only_set_fields() {
    let mut card = sample_card();
    let update = CardUpdate {
        definition: Some("Updated".into()),
        mastered: Some(false),
        ..Default::default()
    };

    card.apply(&update);

    assert_eq!(card.word, "Algorithm");
    assert_eq!(card.definition, "Updated");
    assert!(!card.mastered);
    assert_eq!(card.review_count, 8);
    assert_eq!(card.translations.get("polish").unwrap(), "Algorytm");
}

#[test]
fn empty_update_is_noop() {
    let mut card = sample_card();
    let update = CardUpdate::default();
    assert!(update.is_empty());

    card.apply(&update);
    assert_eq!(card, sample_card());
}

#[test]
fn new_card_requires_word() {
    assert!(NewCard::word("Cache").validate().is_ok());
    let err = NewCard::word("   ").validate().unwrap_err();
    assert!(matches!(err, Error::FieldEmpty { field: "word" }));
}

#[test]
fn card_json_uses_camel_case() {
    let json = serde_json::to_value(sample_card()).unwrap();
    assert_eq!(json["categoryId"], 1);
    assert_eq!(json["reviewCount"], 8);
    assert_eq!(json["lastReviewed"], serde_json::Value::Null);
    assert_eq!(json["difficulty"], "beginner");
}

#[test]
fn card_without_created_offline_defaults_false() {
    let json = r#"{"id":3,"categoryId":1,"word":"Function","definition":"d","example":"e",
        "translations":{},"difficulty":"beginner","mastered":false,"reviewCount":3,
        "lastReviewed":"2025-01-13T09:20:00Z"}"#;
    let card: FlashCard = serde_json::from_str(json).unwrap();
    assert!(!card.created_offline);
    assert!(card.last_reviewed.is_some());
}

#[test]
fn update_json_skips_unset_fields() {
    let update = CardUpdate { mastered: Some(true), ..Default::default() };
    let json = serde_json::to_string(&update).unwrap();
    assert_eq!(json, r#"{"mastered":true}"#);
}
