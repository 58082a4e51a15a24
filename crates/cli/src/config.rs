// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Client configuration management.
//!
//! Configuration is stored in `<data_dir>/config.toml` and includes:
//! - `[sync]`: whether to drain automatically on reconnect, whether the
//!   pending queue survives restarts, and what to do with failed dispatches
//! - `[reminder]`: the daily study reminder time

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

const CONFIG_FILE_NAME: &str = "config.toml";
const APP_DIR_NAME: &str = "lingo";

/// Client configuration stored in `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub sync: SyncSettings,
    #[serde(default)]
    pub reminder: ReminderSettings,
}

/// Offline sync behaviour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncSettings {
    /// Drain the pending queue on every offline to online transition.
    #[serde(default = "default_true")]
    pub auto_sync: bool,
    /// Mirror the pending queue to the store so it survives restarts.
    #[serde(default = "default_true")]
    pub persist_queue: bool,
    /// Keep changes whose dispatch failed queued for the next drain.
    #[serde(default)]
    pub requeue_failed: bool,
}

impl Default for SyncSettings {
    fn default() -> Self {
        SyncSettings { auto_sync: true, persist_queue: true, requeue_failed: false }
    }
}

/// Daily study reminder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderSettings {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Local hour of day, 0-23.
    #[serde(default = "default_reminder_hour")]
    pub hour: u32,
    #[serde(default)]
    pub minute: u32,
}

impl Default for ReminderSettings {
    fn default() -> Self {
        ReminderSettings { enabled: true, hour: default_reminder_hour(), minute: 0 }
    }
}

fn default_true() -> bool {
    true
}

fn default_reminder_hour() -> u32 {
    20
}

impl Config {
    /// Loads configuration from `data_dir`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the file is missing, unreadable or invalid.
    pub fn load(data_dir: &Path) -> Result<Self> {
        let config_path = data_dir.join(CONFIG_FILE_NAME);
        let content = fs::read_to_string(&config_path)
            .map_err(|e| Error::Config(format!("failed to read config: {}", e)))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from `data_dir`, falling back to defaults when
    /// no config file exists.
    pub fn load_or_default(data_dir: &Path) -> Result<Self> {
        if data_dir.join(CONFIG_FILE_NAME).exists() {
            Self::load(data_dir)
        } else {
            Ok(Config::default())
        }
    }

    /// Saves configuration to `data_dir`, creating it if needed.
    pub fn save(&self, data_dir: &Path) -> Result<()> {
        fs::create_dir_all(data_dir)?;
        let config_path = data_dir.join(CONFIG_FILE_NAME);
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))?;
        fs::write(&config_path, content)?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.reminder.hour > 23 {
            return Err(Error::Config(format!(
                "reminder.hour must be 0-23, got {}",
                self.reminder.hour
            )));
        }
        if self.reminder.minute > 59 {
            return Err(Error::Config(format!(
                "reminder.minute must be 0-59, got {}",
                self.reminder.minute
            )));
        }
        Ok(())
    }
}

/// Default data directory: the platform data dir plus `lingo`.
pub fn default_data_dir() -> Result<PathBuf> {
    dirs::data_dir()
        .map(|d| d.join(APP_DIR_NAME))
        .ok_or_else(|| Error::Config("could not determine data directory".to_string()))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
