// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::{DateTime, Utc};
use lingo_core::{Category, FlashCard, StudySessionRecord, UserProfile, UserProgress};

use crate::sync::{DrainReport, SkipReason, SyncStats};

/// Format a card as a single list line.
///
/// Format: `- [id] word (difficulty) *` where the star marks mastered cards
/// and `(offline)` marks cards created without connectivity.
pub fn format_card_line(card: &FlashCard) -> String {
    let mut line = format!("- [{}] {} ({})", card.id, card.word, card.difficulty);
    if card.mastered {
        line.push_str(" *");
    }
    if card.created_offline {
        line.push_str(" (offline)");
    }
    line
}

/// Format a category with its completion percentage.
pub fn format_category_line(category: &Category) -> String {
    format!(
        "- [{}] {} {}/{} ({:.0}%)",
        category.id,
        category.name,
        category.completed_count,
        category.card_count,
        category.completion() * 100.0
    )
}

pub fn format_user(user: &UserProfile) -> String {
    format!(
        "{} <{}>\nNative language: {}\nStreak: {} days\nWords learned: {}\nMastered: {}",
        user.name,
        user.email,
        user.preferences.native_language,
        user.preferences.study_streak,
        user.preferences.total_words_learned,
        user.preferences.mastered_words
    )
}

pub fn format_session_line(record: &StudySessionRecord) -> String {
    let marker = if record.synced { "" } else { " (unsynced)" };
    format!(
        "- {} {}: {}/{} correct{}",
        record.date, record.category_name, record.correct, record.total, marker
    )
}

pub fn format_progress(progress: &UserProgress) -> String {
    let mut out = format!(
        "Cards: {} ({} mastered)\nStreak: {} days\nWeekly goal: {}/{}{}",
        progress.total_cards,
        progress.mastered_cards,
        progress.study_streak,
        progress.weekly_progress,
        progress.weekly_goal,
        if progress.weekly_goal_met() { " (met)" } else { "" }
    );
    for entry in &progress.recent_activity {
        out.push_str(&format!(
            "\n  {}: {} cards, {} min",
            entry.date, entry.cards_studied, entry.time_spent
        ));
    }
    out
}

fn format_time(ts: Option<DateTime<Utc>>) -> String {
    ts.map(|t| t.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| "never".to_string())
}

pub fn format_stats(stats: &SyncStats) -> String {
    format!(
        "Status: {}\nPending changes: {}\nUnsynced sessions: {}\nCached cards: {}\nLast update: {}",
        if stats.is_online { "online" } else { "offline" },
        stats.pending_sync_count,
        stats.unsynced_sessions,
        stats.total_cached_cards,
        format_time(stats.last_sync)
    )
}

/// One-line summary of a drain.
pub fn format_drain(report: &DrainReport, pending: usize) -> String {
    match report.skipped {
        Some(SkipReason::Offline) => format!("Offline: {pending} change(s) waiting to sync"),
        Some(SkipReason::Empty) => "Nothing to sync".to_string(),
        None => {
            let mut line = format!("Synced {} of {} change(s)", report.dispatched, report.attempted);
            if !report.failures.is_empty() {
                line.push_str(&format!(", {} failed", report.failures.len()));
            }
            if report.requeued > 0 {
                line.push_str(&format!(", {} requeued", report.requeued));
            }
            line
        }
    }
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
