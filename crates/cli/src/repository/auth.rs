// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Session operations. Identity lives in the local store so it stays
//! available offline once established.

use chrono::Local;
use lingo_core::UserProfile;

use super::OfflineRepository;
use crate::error::{AuthError, Result};
use crate::notify::next_reminder_at;
use crate::store::keys;
use crate::sync::{Backend, BackendError, Registration};

impl<B: Backend> OfflineRepository<B> {
    /// Returns true if a session flag is cached.
    pub fn is_authenticated(&self) -> bool {
        self.storage.get_or_warn::<bool>(keys::IS_AUTHENTICATED).unwrap_or(false)
    }

    /// The cached profile, if any.
    pub fn current_user(&self) -> Option<UserProfile> {
        self.storage.get_or_warn(keys::USER)
    }

    /// Logs in.
    ///
    /// Online, the backend checks the credentials and the profile is cached.
    /// Offline, or when the backend cannot be reached, login succeeds only
    /// if a previous session left both a cached profile and the
    /// authenticated flag behind.
    pub async fn login(&self, email: &str, password: &str) -> std::result::Result<UserProfile, AuthError> {
        if self.monitor.is_online() {
            match self.backend.login(email, password).await {
                Ok(user) => {
                    self.cache_session(&user)?;
                    tracing::info!(user = user.id, "logged in");
                    self.schedule_reminder();
                    return Ok(user);
                }
                Err(BackendError::Unreachable(reason)) => {
                    tracing::warn!(%reason, "auth service unreachable, trying offline login");
                }
                Err(e) => return Err(e.into()),
            }
        }
        self.offline_login()
    }

    /// Creates an account. Requires connectivity.
    pub async fn register(
        &self,
        registration: &Registration,
    ) -> std::result::Result<UserProfile, AuthError> {
        if !self.monitor.is_online() {
            return Err(AuthError::OfflineRegistrationUnavailable);
        }
        let user = self.backend.register(registration).await?;
        self.cache_session(&user)?;
        tracing::info!(user = user.id, "registered");
        self.schedule_reminder();
        Ok(user)
    }

    /// Forgets the cached session and cancels reminders.
    pub fn logout(&self) -> Result<()> {
        self.storage.remove(keys::USER)?;
        self.storage.remove(keys::IS_AUTHENTICATED)?;
        self.notifier.cancel_all();
        tracing::info!("logged out");
        Ok(())
    }

    fn offline_login(&self) -> std::result::Result<UserProfile, AuthError> {
        match (self.current_user(), self.is_authenticated()) {
            (Some(user), true) => {
                tracing::info!(user = user.id, "logged in from cached session");
                Ok(user)
            }
            _ => Err(AuthError::OfflineLoginUnavailable),
        }
    }

    fn cache_session(&self, user: &UserProfile) -> std::result::Result<(), AuthError> {
        self.storage.set(keys::USER, user)?;
        self.storage.set(keys::IS_AUTHENTICATED, &true)?;
        Ok(())
    }

    fn schedule_reminder(&self) {
        if !self.reminder.enabled {
            return;
        }
        let now = Local::now().naive_local();
        match next_reminder_at(now, self.reminder.hour, self.reminder.minute) {
            Some(at) => self.notifier.schedule_study_reminder(at),
            None => tracing::warn!(
                hour = self.reminder.hour,
                minute = self.reminder.minute,
                "invalid reminder time, not scheduling"
            ),
        }
    }
}
