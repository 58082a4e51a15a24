// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sync commands.

use serde::Serialize;

use crate::app::App;
use crate::cli::OutputFormat;
use crate::display::{format_drain, format_stats};
use crate::error::Result;
use crate::sync::{Backend, SyncStats};

use super::emit;

/// JSON representation of sync status.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StatusJson {
    is_online: bool,
    pending_sync_count: usize,
    unsynced_sessions: usize,
    last_sync: Option<String>,
    total_cached_cards: usize,
}

impl From<&SyncStats> for StatusJson {
    fn from(stats: &SyncStats) -> Self {
        StatusJson {
            is_online: stats.is_online,
            pending_sync_count: stats.pending_sync_count,
            unsynced_sessions: stats.unsynced_sessions,
            last_sync: stats.last_sync.map(|t| t.to_rfc3339()),
            total_cached_cards: stats.total_cached_cards,
        }
    }
}

pub fn status<B: Backend + 'static>(app: &App<B>, output: OutputFormat) -> Result<()> {
    let stats = app.coordinator().stats();
    emit(output, &StatusJson::from(&stats), [format_stats(&stats)])
}

pub async fn run<B: Backend + 'static>(app: &App<B>) -> Result<()> {
    let coordinator = app.coordinator();
    let report = coordinator.drain().await;
    println!("{}", format_drain(&report, coordinator.pending_count()));
    for failure in &report.failures {
        eprintln!("warning: {} from {} not synced: {}", failure.kind, failure.enqueued_at, failure.error);
    }
    Ok(())
}
