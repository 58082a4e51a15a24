// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use lingo_core::Difficulty;

/// Parse a string that must not be empty or whitespace-only.
fn non_empty_string(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("cannot be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

/// Parse a `language=text` translation pair.
fn translation_pair(s: &str) -> Result<(String, String), String> {
    let (lang, text) = s
        .split_once('=')
        .ok_or_else(|| format!("expected LANGUAGE=TEXT, got '{s}'"))?;
    if lang.trim().is_empty() || text.trim().is_empty() {
        return Err("language and text cannot be empty".to_string());
    }
    Ok((lang.trim().to_string(), text.trim().to_string()))
}

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

const QUICKSTART_HELP: &str = "\
Get started:
  lingo login you@example.com -p secret   Log in (caches your session)
  lingo cards                             List flashcards
  lingo --offline new-card Cache          Create a card while offline
  lingo sync                              Push offline changes";

#[derive(Parser)]
#[command(name = "lingo")]
#[command(version)]
#[command(about = "Offline-first vocabulary flashcards")]
#[command(after_help = QUICKSTART_HELP)]
pub struct Cli {
    /// Directory holding the local store and config
    #[arg(long, global = true, env = "LINGO_DATA_DIR", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Work without network access; writes are queued for later sync
    #[arg(long, global = true, env = "LINGO_OFFLINE")]
    pub offline: bool,

    /// Log debug output to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output flag shared by listing commands.
#[derive(Args, Clone, Copy, Debug, Default)]
pub struct OutputArgs {
    /// Output format (text, json)
    #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(Subcommand)]
pub enum Command {
    /// Log in and cache the session for offline use
    Login {
        #[arg(value_parser = non_empty_string)]
        email: String,

        #[arg(long, short)]
        password: String,
    },

    /// Create an account (requires connectivity)
    Register {
        #[arg(long, value_parser = non_empty_string)]
        name: String,

        #[arg(long, value_parser = non_empty_string)]
        email: String,

        #[arg(long, short)]
        password: String,

        /// Native language used for translations
        #[arg(long, default_value = "ukrainian")]
        language: String,
    },

    /// Forget the cached session and cancel reminders
    Logout,

    /// Show the cached profile
    Whoami {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// List flashcards
    Cards {
        /// Only cards in this category
        #[arg(long, short)]
        category: Option<u64>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// List categories
    Categories {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Create a custom flashcard
    NewCard {
        #[arg(value_parser = non_empty_string)]
        word: String,

        #[arg(long, short, default_value = "")]
        definition: String,

        #[arg(long, short, default_value = "")]
        example: String,

        /// beginner, intermediate or advanced
        #[arg(long, default_value = "beginner")]
        difficulty: Difficulty,

        /// Translation as LANGUAGE=TEXT (repeatable)
        #[arg(long, short, value_parser = translation_pair)]
        translation: Vec<(String, String)>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Edit fields of an existing flashcard
    EditCard {
        id: u64,

        #[arg(long, value_parser = non_empty_string)]
        word: Option<String>,

        #[arg(long, short)]
        definition: Option<String>,

        #[arg(long, short)]
        example: Option<String>,

        #[arg(long)]
        difficulty: Option<Difficulty>,
    },

    /// Record a review of a flashcard
    Review {
        id: u64,

        /// The answer was wrong
        #[arg(long)]
        incorrect: bool,
    },

    /// Record a finished study session
    Study {
        /// Category studied
        category: u64,

        #[arg(long, default_value_t = 0)]
        correct: u32,

        #[arg(long, default_value_t = 0)]
        incorrect: u32,

        /// Minutes spent
        #[arg(long, default_value_t = 0)]
        minutes: u32,
    },

    /// Show study session history
    Sessions {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Show learning progress
    Progress {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Show sync status
    Status {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Push queued offline changes to the server
    Sync,
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
