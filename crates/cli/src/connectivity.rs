// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Online/offline state tracking.
//!
//! The platform's reachability signal is fed in through
//! [`ConnectivityMonitor::set_online`]. Consumers either read the current
//! state, register a callback listener, or subscribe to a broadcast stream of
//! transitions. There is no debouncing: a flapping link fires once per
//! transition, so listeners must be idempotent.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use tokio::sync::broadcast;

/// Capacity of the transition broadcast channel.
const EVENT_BUFFER: usize = 64;

/// Network reachability state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connectivity {
    Online,
    Offline,
}

impl Connectivity {
    /// Maps a reachability flag to a state.
    pub fn from_online(online: bool) -> Self {
        if online {
            Connectivity::Online
        } else {
            Connectivity::Offline
        }
    }

    pub fn is_online(self) -> bool {
        self == Connectivity::Online
    }
}

impl std::fmt::Display for Connectivity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Connectivity::Online => write!(f, "online"),
            Connectivity::Offline => write!(f, "offline"),
        }
    }
}

/// Handle returned by [`ConnectivityMonitor::add_listener`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Arc<dyn Fn(Connectivity) + Send + Sync>;

/// Tracks the current connectivity state and notifies on transitions.
pub struct ConnectivityMonitor {
    online: AtomicBool,
    next_listener: AtomicU64,
    listeners: Mutex<Vec<(ListenerId, Listener)>>,
    events: broadcast::Sender<Connectivity>,
}

impl ConnectivityMonitor {
    /// Creates a monitor with the given initial state.
    pub fn new(online: bool) -> Self {
        let (events, _) = broadcast::channel(EVENT_BUFFER);
        ConnectivityMonitor {
            online: AtomicBool::new(online),
            next_listener: AtomicU64::new(1),
            listeners: Mutex::new(Vec::new()),
            events,
        }
    }

    /// Returns true if currently online.
    pub fn is_online(&self) -> bool {
        self.online.load(Ordering::Acquire)
    }

    /// Returns the current state.
    pub fn state(&self) -> Connectivity {
        Connectivity::from_online(self.is_online())
    }

    /// Feeds a reachability reading into the monitor.
    ///
    /// Listeners and subscribers are notified only when the state actually
    /// changes. Returns true if a transition happened.
    pub fn set_online(&self, online: bool) -> bool {
        let previous = self.online.swap(online, Ordering::AcqRel);
        if previous == online {
            return false;
        }

        let state = Connectivity::from_online(online);
        tracing::info!(%state, "connectivity changed");

        // Invoke outside the lock so listeners may add or remove listeners.
        let listeners: Vec<Listener> = {
            let guard = self.listeners.lock().unwrap_or_else(|e| e.into_inner());
            guard.iter().map(|(_, l)| Arc::clone(l)).collect()
        };
        for listener in listeners {
            listener(state);
        }

        // No receivers is fine
        let _ = self.events.send(state);
        true
    }

    /// Registers a callback invoked on every transition.
    pub fn add_listener<F>(&self, listener: F) -> ListenerId
    where
        F: Fn(Connectivity) + Send + Sync + 'static,
    {
        let id = ListenerId(self.next_listener.fetch_add(1, Ordering::Relaxed));
        let mut guard = self.listeners.lock().unwrap_or_else(|e| e.into_inner());
        guard.push((id, Arc::new(listener)));
        id
    }

    /// Unregisters a callback. Unknown ids are ignored.
    ///
    /// Returns true if a listener was removed.
    pub fn remove_listener(&self, id: ListenerId) -> bool {
        let mut guard = self.listeners.lock().unwrap_or_else(|e| e.into_inner());
        let before = guard.len();
        guard.retain(|(existing, _)| *existing != id);
        guard.len() != before
    }

    /// Number of registered callback listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    /// Subscribes to the stream of transitions.
    pub fn subscribe(&self) -> broadcast::Receiver<Connectivity> {
        self.events.subscribe()
    }
}

impl std::fmt::Debug for ConnectivityMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectivityMonitor")
            .field("state", &self.state())
            .field("listeners", &self.listener_count())
            .finish()
    }
}

#[cfg(test)]
#[path = "connectivity_tests.rs"]
mod tests;
