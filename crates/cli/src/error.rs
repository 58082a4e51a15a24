// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

use crate::store::StoreError;
use crate::sync::{BackendError, QueueError};

/// Reasons a login or registration can fail.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("no offline login data available\n  hint: log in once while online to enable offline login")]
    OfflineLoginUnavailable,

    #[error("registration requires a network connection")]
    OfflineRegistrationUnavailable,

    #[error("authentication service error: {0}")]
    Backend(BackendError),

    #[error("failed to cache session: {0}")]
    Store(#[from] StoreError),
}

impl From<BackendError> for AuthError {
    fn from(err: BackendError) -> Self {
        match err {
            BackendError::InvalidCredentials => AuthError::InvalidCredentials,
            other => AuthError::Backend(other),
        }
    }
}

/// All possible errors that can occur in the lingo library.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("storage error: {0}")]
    Store(#[from] StoreError),

    #[error("backend error: {0}")]
    Backend(#[from] BackendError),

    #[error(transparent)]
    Core(#[from] lingo_core::Error),

    #[error("not logged in\n  hint: run 'lingo login' first")]
    NotAuthenticated,

    #[error("card not found: {0}")]
    CardNotFound(u64),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),
}

impl From<QueueError> for Error {
    fn from(err: QueueError) -> Self {
        match err {
            QueueError::NotPersisted(e) => Error::Store(e),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
