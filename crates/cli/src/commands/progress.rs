// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Study session and progress commands.

use lingo_core::SessionStats;

use crate::app::App;
use crate::cli::OutputFormat;
use crate::display::{format_progress, format_session_line};
use crate::error::Result;
use crate::sync::Backend;

use super::emit;

pub async fn study<B: Backend + 'static>(app: &App<B>, category: u64, stats: SessionStats) -> Result<()> {
    let record = app.repository().complete_study_session(category, &stats).await?;
    println!("Recorded {}", format_session_line(&record).trim_start_matches("- "));
    Ok(())
}

pub fn sessions<B: Backend + 'static>(app: &App<B>, output: OutputFormat) -> Result<()> {
    let sessions = app.repository().study_sessions();
    if sessions.is_empty() && output == OutputFormat::Text {
        println!("No sessions");
        return Ok(());
    }
    emit(output, &sessions, sessions.iter().map(format_session_line))
}

pub async fn show<B: Backend + 'static>(app: &App<B>, output: OutputFormat) -> Result<()> {
    let progress = app.repository().user_progress().await;
    emit(output, &progress, [format_progress(&progress)])
}
