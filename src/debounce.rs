// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Cancellable quiescence timer as a plain state machine.
//!
//! Time is whatever the caller says it is: every call takes `now` as a
//! `Duration` since some epoch the caller picked (`performance.now()` in a
//! browser, `Instant::elapsed` natively, a counter in tests). Nothing here
//! sleeps or spawns, so the same code drives the WASM bindings, the tokio
//! wrapper in `runtime`, and deterministic unit tests.
//!
//! At most one dispatch is pending. A new input replaces it and restarts the
//! window; there is no queue.

use std::time::Duration;

/// Quiescence window used when the caller does not pick one.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(150);

/// The text to query, released once input has been quiet for a full window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatch {
    pub text: String,
    /// Number of inputs seen when this dispatch was scheduled.
    pub generation: u64,
}

#[derive(Debug, Clone)]
struct Pending {
    text: String,
    deadline: Duration,
}

#[derive(Debug, Clone)]
pub struct Debouncer {
    window: Duration,
    pending: Option<Pending>,
    generation: u64,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
            generation: 0,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Record an input change at `now`, discarding any pending dispatch.
    ///
    /// Returns the generation of the newly scheduled dispatch.
    pub fn input(&mut self, text: impl Into<String>, now: Duration) -> u64 {
        self.generation += 1;
        self.pending = Some(Pending {
            text: text.into(),
            deadline: now.saturating_add(self.window),
        });
        self.generation
    }

    /// Drop the pending dispatch, if any.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending dispatch fires, if there is one.
    pub fn deadline(&self) -> Option<Duration> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    /// Release the pending dispatch if its window has elapsed by `now`.
    pub fn poll(&mut self, now: Duration) -> Option<Dispatch> {
        match &self.pending {
            Some(pending) if now >= pending.deadline => {
                let pending = self.pending.take()?;
                Some(Dispatch {
                    text: pending.text,
                    generation: self.generation,
                })
            }
            _ => None,
        }
    }
}
