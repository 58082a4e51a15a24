// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use std::sync::atomic::{AtomicU64, Ordering};

/// Mock clock for testing with controllable time.
struct MockClock {
    time_ms: AtomicU64,
}

impl MockClock {
    fn new(initial_ms: u64) -> Self {
        MockClock { time_ms: AtomicU64::new(initial_ms) }
    }

    fn set(&self, ms: u64) {
        self.time_ms.store(ms, Ordering::SeqCst);
    }
}

impl ClockSource for MockClock {
    fn now_ms(&self) -> u64 {
        self.time_ms.load(Ordering::SeqCst)
    }
}

#[test]
fn ids_follow_wall_clock() {
    let ids = IdGenerator::with_clock(MockClock::new(1_000));
    assert_eq!(ids.next_id(), 1_000);

    ids.clock().set(5_000);
    assert_eq!(ids.next_id(), 5_000);
}

#[test]
fn ids_unique_within_same_millisecond() {
    let ids = IdGenerator::with_clock(MockClock::new(1_000));
    let a = ids.next_id();
    let b = ids.next_id();
    let c = ids.next_id();
    assert_eq!((a, b, c), (1_000, 1_001, 1_002));
}

#[test]
fn ids_monotonic_when_clock_goes_backwards() {
    let ids = IdGenerator::with_clock(MockClock::new(10_000));
    let first = ids.next_id();

    ids.clock().set(2_000);
    let second = ids.next_id();
    assert!(second > first);
}

#[test]
fn observe_raises_floor() {
    let ids = IdGenerator::with_clock(MockClock::new(100));
    ids.observe(9_999);
    assert_eq!(ids.next_id(), 10_000);

    // Lower observations are ignored
    ids.observe(5);
    assert_eq!(ids.next_id(), 10_001);
}

#[test]
fn clock_now_converts_millis() {
    let clock = MockClock::new(1_700_000_000_000);
    assert_eq!(clock.now().timestamp_millis(), 1_700_000_000_000);
}

#[test]
fn system_clock_is_after_2020() {
    assert!(SystemClock.now_ms() > 1_577_836_800_000);
}
