// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Interactive search: keystrokes in, one result set per settled burst out.
//!
//! A `SearchSession` is what a search box holds. It owns a handle to the
//! current index, a [`Debouncer`], and the last committed results. The host
//! calls [`SearchSession::input`] on every change and [`SearchSession::poll`]
//! when its timer fires (or on every frame; polling early is harmless).
//!
//! ```text
//!   input("r") ──▶ Searching ──┐
//!   input("ro") ─▶ Searching ──┤ window restarts each time
//!   input("rob") ▶ Searching ──┘
//!                     │ 150 ms quiet
//!                     ▼
//!   poll() ──────▶ Resolved { count } with results for "rob"
//! ```
//!
//! Blank input never waits: it clears results and goes straight to `Idle`.

use crate::config::SearchConfig;
use crate::debounce::Debouncer;
use crate::index::GlossaryIndex;
use crate::search::query;
use crate::types::{GlossaryEntry, QueryOutcome, SearchHit, SearchState};
use std::sync::Arc;
use std::time::Duration;
use tracing::trace;

#[derive(Debug)]
pub struct SearchSession {
    /// `None` until the host has built an index. Queries then resolve empty.
    index: Option<Arc<GlossaryIndex>>,
    limit: usize,
    debouncer: Debouncer,
    /// Text of the last committed query.
    committed: String,
    results: Vec<SearchHit>,
    state: SearchState,
}

impl SearchSession {
    pub fn new(config: &SearchConfig) -> Self {
        Self {
            index: None,
            limit: config.limit,
            debouncer: Debouncer::new(config.debounce_window()),
            committed: String::new(),
            results: Vec::new(),
            state: SearchState::Idle,
        }
    }

    pub fn with_index(index: Arc<GlossaryIndex>, config: &SearchConfig) -> Self {
        let mut session = Self::new(config);
        session.index = Some(index);
        session
    }

    /// Swap in a rebuilt index. A resolved query is re-run against it at once.
    pub fn set_index(&mut self, index: Arc<GlossaryIndex>) {
        self.index = Some(index);
        if matches!(self.state, SearchState::Resolved { .. }) {
            let text = std::mem::take(&mut self.committed);
            self.commit(text);
        }
    }

    pub fn index(&self) -> Option<&Arc<GlossaryIndex>> {
        self.index.as_ref()
    }

    /// Record the search box contents at `now`.
    pub fn input(&mut self, text: &str, now: Duration) -> SearchState {
        if text.trim().is_empty() {
            self.debouncer.cancel();
            self.committed.clear();
            self.results.clear();
            self.state = SearchState::Idle;
        } else {
            let generation = self.debouncer.input(text, now);
            trace!(text, generation, "input scheduled");
            self.state = SearchState::Searching;
        }
        self.state
    }

    /// Dispatch the pending query if the window has elapsed.
    ///
    /// Returns `true` when new results were committed.
    pub fn poll(&mut self, now: Duration) -> bool {
        match self.debouncer.poll(now) {
            Some(dispatch) => {
                trace!(text = %dispatch.text, generation = dispatch.generation, "dispatch");
                self.commit(dispatch.text);
                true
            }
            None => false,
        }
    }

    /// When the host should call [`SearchSession::poll`] next.
    pub fn deadline(&self) -> Option<Duration> {
        self.debouncer.deadline()
    }

    /// Equivalent to the clear button: blank input.
    pub fn clear(&mut self) {
        self.input("", Duration::ZERO);
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    /// Text the current results were computed from.
    pub fn committed_query(&self) -> &str {
        &self.committed
    }

    pub fn results(&self) -> &[SearchHit] {
        &self.results
    }

    /// Committed results mapped back to entries.
    pub fn entries(&self) -> Vec<&GlossaryEntry> {
        let Some(index) = self.index.as_deref() else {
            return Vec::new();
        };
        self.results
            .iter()
            .filter_map(|hit| index.get(&hit.id))
            .collect()
    }

    fn commit(&mut self, text: String) {
        let outcome = match self.index.as_deref() {
            Some(index) => query(index, &text, self.limit),
            None => QueryOutcome::Hits(Vec::new()),
        };
        self.results = match outcome {
            QueryOutcome::EmptyQuery => Vec::new(),
            QueryOutcome::Hits(hits) => hits,
        };
        self.state = SearchState::Resolved {
            count: self.results.len(),
        };
        self.committed = text;
    }
}
