// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Wall clock access and time-derived identifiers.
//!
//! Card ids are derived from the wall clock in milliseconds, matching the ids
//! the catalog already uses. Two cards created within the same millisecond,
//! or after the clock stepped backwards, still receive distinct ids because
//! the generator never hands out a value at or below the last one.

use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{DateTime, Utc};

/// Trait for getting the current wall clock time.
///
/// This allows injecting a mock clock for testing.
pub trait ClockSource: Send + Sync {
    /// Returns the current time in milliseconds since Unix epoch.
    fn now_ms(&self) -> u64;

    /// Returns the current time as a UTC timestamp.
    fn now(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(self.now_ms() as i64).unwrap_or_default()
    }
}

/// System clock implementation using `std::time::SystemTime`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl ClockSource for SystemClock {
    fn now_ms(&self) -> u64 {
        SystemTime::now().duration_since(UNIX_EPOCH).map(|d| d.as_millis() as u64).unwrap_or(0)
    }
}

impl<C: ClockSource> ClockSource for &C {
    fn now_ms(&self) -> u64 {
        (*self).now_ms()
    }
}

impl<C: ClockSource + ?Sized> ClockSource for std::sync::Arc<C> {
    fn now_ms(&self) -> u64 {
        (**self).now_ms()
    }
}

/// Produces strictly increasing, time-derived identifiers.
pub struct IdGenerator<C: ClockSource = SystemClock> {
    clock: C,
    last: Mutex<u64>,
}

impl IdGenerator<SystemClock> {
    /// Creates a generator backed by the system clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for IdGenerator<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: ClockSource> IdGenerator<C> {
    /// Creates a generator with a custom clock source.
    pub fn with_clock(clock: C) -> Self {
        IdGenerator { clock, last: Mutex::new(0) }
    }

    /// Records an id that is already in use so later ids stay above it.
    pub fn observe(&self, id: u64) {
        let mut last = self.last.lock().unwrap_or_else(|e| e.into_inner());
        if id > *last {
            *last = id;
        }
    }

    /// Returns the next identifier.
    pub fn next_id(&self) -> u64 {
        let physical = self.clock.now_ms();
        let mut last = self.last.lock().unwrap_or_else(|e| e.into_inner());
        let id = if physical > *last { physical } else { last.saturating_add(1) };
        *last = id;
        id
    }

    /// Returns the clock backing this generator.
    pub fn clock(&self) -> &C {
        &self.clock
    }
}

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;
