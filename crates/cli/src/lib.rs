// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! lingo - an offline-first vocabulary flashcard client.
//!
//! This crate provides the data layer and the `lingo` CLI on top of it.
//! Reads prefer fresh backend data and fall back to a local cache; writes
//! land locally first and are queued for replay while offline.
//!
//! # Main Components
//!
//! - [`store`] - Key-value persistence ([`Storage`], [`MemoryStore`], [`FileStore`])
//! - [`ConnectivityMonitor`] - Online/offline state with transition listeners
//! - [`OfflineRepository`] - Connectivity-aware reads and writes
//! - [`sync`] - Pending queue, backend trait and [`SyncCoordinator`]
//! - [`App`] - Wires the services together
//! - [`Config`] - Client configuration (`config.toml`)
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use lingo::{App, CatalogBackend, Config, LogNotifier, Storage};
//!
//! let app = App::new(Config::default(), Storage::memory(),
//!     Arc::new(CatalogBackend::new()), Arc::new(LogNotifier), false);
//! let card = app.repository().create_card(NewCard::word("Cache")).await?;
//! app.monitor().set_online(true);
//! let report = app.coordinator().drain().await;
//! ```

pub mod app;
mod cli;
mod commands;
pub mod config;
pub mod connectivity;
mod display;
pub mod error;
pub mod notify;
pub mod repository;
pub mod store;
pub mod sync;

#[cfg(test)]
mod test_helpers;

use std::path::PathBuf;
use std::sync::Arc;

pub use app::App;
pub use cli::{Cli, Command, OutputFormat};
pub use config::Config;
pub use connectivity::{Connectivity, ConnectivityMonitor};
pub use error::{AuthError, Error, Result};
pub use notify::{LogNotifier, Notifier};
pub use repository::OfflineRepository;
pub use store::{FileStore, MemoryStore, Storage};
pub use sync::{CatalogBackend, PendingQueue, SyncCoordinator};

use lingo_core::{CardUpdate, NewCard, SessionStats};
use sync::Registration;

/// Subdirectory of the data dir holding the local store.
const STORE_DIR: &str = "store";
/// Subdirectory of the data dir holding the simulated remote catalog.
const REMOTE_DIR: &str = "remote";

/// Resolve the data directory from the CLI flag or the platform default.
pub fn resolve_data_dir(flag: Option<PathBuf>) -> Result<PathBuf> {
    match flag {
        Some(dir) => Ok(dir),
        None => config::default_data_dir(),
    }
}

/// Build the application for a data directory.
pub fn open_app(data_dir: &std::path::Path, online: bool) -> Result<App> {
    let config = Config::load_or_default(data_dir)?;
    let storage = Storage::new(FileStore::open(&data_dir.join(STORE_DIR))?);
    let remote = Storage::new(FileStore::open(&data_dir.join(REMOTE_DIR))?);
    let backend = Arc::new(CatalogBackend::persistent(remote));
    Ok(App::new(config, storage, backend, Arc::new(LogNotifier), online))
}

/// Execute a CLI invocation. This is the main entry point for library users
/// and provides a testable way to run commands without process execution.
pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_data_dir(cli.data_dir)?;
    let app = open_app(&data_dir, !cli.offline)?;

    let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;
    runtime.block_on(async {
        if app.config().sync.auto_sync && !matches!(cli.command, Command::Sync) {
            let report = app.coordinator().drain().await;
            if report.skipped.is_none() {
                tracing::info!(dispatched = report.dispatched, "auto-synced pending changes");
            }
        }
        execute(&app, cli.command).await
    })
}

async fn execute(app: &App, command: Command) -> Result<()> {
    match command {
        Command::Login { email, password } => commands::auth::login(app, &email, &password).await,
        Command::Register { name, email, password, language } => {
            let registration = Registration { name, email, password, native_language: language };
            commands::auth::register(app, registration).await
        }
        Command::Logout => commands::auth::logout(app),
        Command::Whoami { output } => commands::auth::whoami(app, output.output),
        Command::Cards { category, output } => {
            commands::cards::list(app, category, output.output).await
        }
        Command::Categories { output } => commands::cards::categories(app, output.output).await,
        Command::NewCard { word, definition, example, difficulty, translation, output } => {
            let input = NewCard {
                word,
                definition,
                example,
                translations: translation.into_iter().collect(),
                difficulty,
            };
            commands::cards::create(app, input, output.output).await
        }
        Command::EditCard { id, word, definition, example, difficulty } => {
            let update = CardUpdate { word, definition, example, difficulty, ..Default::default() };
            commands::cards::edit(app, id, update).await
        }
        Command::Review { id, incorrect } => commands::cards::review(app, id, !incorrect).await,
        Command::Study { category, correct, incorrect, minutes } => {
            let stats = SessionStats { minutes, ..SessionStats::new(correct, incorrect) };
            commands::progress::study(app, category, stats).await
        }
        Command::Sessions { output } => commands::progress::sessions(app, output.output),
        Command::Progress { output } => commands::progress::show(app, output.output).await,
        Command::Status { output } => commands::sync::status(app, output.output),
        Command::Sync => commands::sync::run(app).await,
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
