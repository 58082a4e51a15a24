// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Bundled catalog of categories, cards, and a demo profile.
//!
//! Serves two roles: the seed of the in-memory backend, and the fallback
//! returned by offline reads before anything has been cached.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::card::{Difficulty, FlashCard, CUSTOM_CATEGORY_ID};
use crate::category::Category;
use crate::progress::{ActivityEntry, UserProgress};
use crate::user::{Preferences, UserProfile};

/// Languages cards may carry translations for.
pub const SUPPORTED_LANGUAGES: &[&str] = &["ukrainian", "polish", "english"];

/// The demo profile returned by the mocked login.
pub fn mock_user() -> UserProfile {
    UserProfile {
        id: 1,
        name: "Alex Developer".to_string(),
        email: "alex@example.com".to_string(),
        avatar: None,
        preferences: Preferences {
            native_language: "ukrainian".to_string(),
            study_streak: 7,
            total_words_learned: 145,
            mastered_words: 89,
        },
    }
}

/// All card categories, including the custom cards category.
pub fn categories() -> Vec<Category> {
    vec![
        category(1, "Programming Basics", "Essential programming terms and concepts", "beginner", 45, 32, "💻", "from-blue-500 to-cyan-500"),
        category(2, "Web Development", "Frontend and backend development terminology", "intermediate", 38, 18, "🌐", "from-purple-500 to-pink-500"),
        category(3, "Database Systems", "Database and SQL related vocabulary", "intermediate", 29, 15, "🗄️", "from-green-500 to-teal-500"),
        category(4, "DevOps & Cloud", "Cloud computing and deployment terms", "advanced", 33, 8, "☁️", "from-orange-500 to-red-500"),
        category(5, "AI & Machine Learning", "Artificial intelligence and ML terminology", "advanced", 41, 5, "🤖", "from-indigo-500 to-purple-500"),
        category(CUSTOM_CATEGORY_ID, "My Custom Cards", "Your personally created vocabulary cards", "mixed", 12, 11, "📝", "from-gray-500 to-slate-500"),
    ]
}

/// Seed flashcards.
pub fn flashcards() -> Vec<FlashCard> {
    vec![
        card(
            1,
            1,
            "Algorithm",
            "A step-by-step procedure for calculations, data processing, and automated reasoning tasks",
            "The sorting algorithm efficiently organizes the data in ascending order.",
            &[("ukrainian", "Алгоритм"), ("polish", "Algorytm")],
            Difficulty::Beginner,
            (true, 8),
            reviewed(2025, 1, 15, 10, 30),
        ),
        card(
            2,
            1,
            "Variable",
            "A storage location with an associated name that contains data that can be modified during program execution",
            "Declare a variable to store the user's age: let age = 25;",
            &[("ukrainian", "Змінна"), ("polish", "Zmienna")],
            Difficulty::Beginner,
            (true, 12),
            reviewed(2025, 1, 14, 15, 45),
        ),
        card(
            3,
            1,
            "Function",
            "A reusable block of code that performs a specific task and can accept input parameters",
            "Create a function to calculate the area: function calculateArea(width, height) { return width * height; }",
            &[("ukrainian", "Функція"), ("polish", "Funkcja")],
            Difficulty::Beginner,
            (false, 3),
            reviewed(2025, 1, 13, 9, 20),
        ),
        card(
            4,
            2,
            "API",
            "Application Programming Interface - a set of protocols and tools for building software applications",
            "The REST API allows the frontend to communicate with the backend server.",
            &[
                ("ukrainian", "API (Інтерфейс програмування додатків)"),
                ("polish", "API (Interfejs programowania aplikacji)"),
            ],
            Difficulty::Intermediate,
            (false, 5),
            reviewed(2025, 1, 12, 14, 10),
        ),
        card(
            5,
            2,
            "Framework",
            "A platform for developing software applications that provides a foundation with predefined classes and functions",
            "React is a popular JavaScript framework for building user interfaces.",
            &[("ukrainian", "Фреймворк"), ("polish", "Framework")],
            Difficulty::Intermediate,
            (true, 7),
            reviewed(2025, 1, 11, 11, 30),
        ),
    ]
}

/// Default progress snapshot.
pub fn default_progress() -> UserProgress {
    let activity = [
        (15, 8, 25),
        (14, 12, 32),
        (13, 6, 18),
        (12, 15, 45),
        (11, 9, 28),
        (10, 11, 35),
        (9, 7, 22),
    ];

    UserProgress {
        total_cards: 186,
        mastered_cards: 89,
        study_streak: 7,
        weekly_goal: 20,
        weekly_progress: 14,
        recent_activity: activity
            .iter()
            .filter_map(|&(day, cards_studied, time_spent)| {
                NaiveDate::from_ymd_opt(2025, 1, day).map(|date| ActivityEntry {
                    date,
                    cards_studied,
                    time_spent,
                })
            })
            .collect(),
        last_updated: None,
        synced: true,
    }
}

#[allow(clippy::too_many_arguments)]
fn category(
    id: u64,
    name: &str,
    description: &str,
    difficulty: &str,
    card_count: u32,
    completed_count: u32,
    icon: &str,
    color: &str,
) -> Category {
    Category {
        id,
        name: name.to_string(),
        description: description.to_string(),
        difficulty: difficulty.to_string(),
        card_count,
        completed_count,
        icon: icon.to_string(),
        color: color.to_string(),
    }
}

#[allow(clippy::too_many_arguments)]
fn card(
    id: u64,
    category_id: u64,
    word: &str,
    definition: &str,
    example: &str,
    translations: &[(&str, &str)],
    difficulty: Difficulty,
    (mastered, review_count): (bool, u32),
    last_reviewed: Option<DateTime<Utc>>,
) -> FlashCard {
    FlashCard {
        id,
        category_id,
        word: word.to_string(),
        definition: definition.to_string(),
        example: example.to_string(),
        translations: translations
            .iter()
            .map(|(lang, text)| (lang.to_string(), text.to_string()))
            .collect::<BTreeMap<_, _>>(),
        difficulty,
        mastered,
        review_count,
        last_reviewed,
        created_offline: false,
    }
}

fn reviewed(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Option<DateTime<Utc>> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0).single()
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
