// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Debounced search as a tokio task.
//!
//! The task owns the index handle and watches the latest input through a
//! `watch` channel, so intermediate keystrokes are overwritten rather than
//! queued. Each change re-arms a `sleep`; when one finally elapses the task
//! queries with whatever text is current and sends one [`SearchBatch`].
//!
//! Dropping the [`DebouncedSearch`] handle stops the task and discards any
//! pending dispatch.

use crate::config::SearchConfig;
use crate::index::GlossaryIndex;
use crate::search::query;
use crate::types::QueryOutcome;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::trace;

/// One committed result set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBatch {
    pub query: String,
    pub outcome: QueryOutcome,
}

pub struct DebouncedSearch {
    input: watch::Sender<String>,
    batches: mpsc::Receiver<SearchBatch>,
    task: JoinHandle<()>,
}

impl DebouncedSearch {
    /// Spawn the debounce task on the current tokio runtime.
    pub fn spawn(index: Arc<GlossaryIndex>, config: &SearchConfig) -> Self {
        let (input, input_rx) = watch::channel(String::new());
        let (batch_tx, batches) = mpsc::channel(8);
        let task = tokio::spawn(run(
            index,
            config.limit,
            config.debounce_window(),
            input_rx,
            batch_tx,
        ));
        Self {
            input,
            batches,
            task,
        }
    }

    /// Replace the current input.
    pub fn input(&self, text: &str) {
        self.input.send_replace(text.to_string());
    }

    /// Wait for the next committed result set.
    ///
    /// Returns `None` once the task has stopped.
    pub async fn next(&mut self) -> Option<SearchBatch> {
        self.batches.recv().await
    }

    /// Stop accepting input and wait for the task to finish.
    pub async fn close(self) {
        let Self { input, task, .. } = self;
        drop(input);
        let _ = task.await;
    }
}

async fn run(
    index: Arc<GlossaryIndex>,
    limit: usize,
    window: Duration,
    mut input: watch::Receiver<String>,
    batches: mpsc::Sender<SearchBatch>,
) {
    loop {
        if input.changed().await.is_err() {
            return;
        }

        // Settle: every further change restarts the window.
        loop {
            tokio::select! {
                changed = input.changed() => {
                    if changed.is_err() {
                        return;
                    }
                }
                () = tokio::time::sleep(window) => break,
            }
        }

        let text = input.borrow_and_update().clone();
        trace!(text = %text, "debounced dispatch");
        let outcome = query(&index, &text, limit);
        let batch = SearchBatch {
            query: text,
            outcome,
        };
        if batches.send(batch).await.is_err() {
            return;
        }
    }
}
