// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly bindings for the glossary search box.
//!
//! The browser owns the clock. Feed keystrokes to `input` with
//! `performance.now()`, arm a `setTimeout` for `deadlineMs()`, and call `poll`
//! when it fires. Committed results go to the `onResults` callback if one is
//! set, and are always readable through `results()`.
//!
//! ```js
//! const searcher = new GlossarySearcher(glossary, { limit: 10, debounceMs: 150 });
//! searcher.setOnResults((entries, state) => render(entries, state));
//! input.addEventListener("input", (e) => {
//!     searcher.input(e.target.value, performance.now());
//!     const at = searcher.deadlineMs();
//!     if (at !== undefined) setTimeout(() => searcher.poll(performance.now()), at - performance.now());
//! });
//! ```

use crate::build::entries_from_value;
use crate::config::SearchConfig;
use crate::index::GlossaryIndex;
use crate::search::search_entries;
use crate::session::SearchSession;
use crate::types::GlossaryEntry;
use js_sys::Function;
use serde::Serialize;
use serde_wasm_bindgen::{from_value, to_value};
use std::sync::Arc;
use std::time::Duration;
use wasm_bindgen::prelude::*;

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    to_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// `performance.now()` milliseconds to a `Duration`. Negative or NaN clamps to zero.
fn millis(now_ms: f64) -> Duration {
    Duration::try_from_secs_f64(now_ms.max(0.0) / 1000.0).unwrap_or_default()
}

#[wasm_bindgen]
pub struct GlossarySearcher {
    index: Arc<GlossaryIndex>,
    session: SearchSession,
    on_results: Option<Function>,
}

#[wasm_bindgen]
impl GlossarySearcher {
    /// Build from an entry array or a `{ terms: [...] }` object.
    #[wasm_bindgen(constructor)]
    pub fn new(glossary: JsValue, options: JsValue) -> Result<GlossarySearcher, JsValue> {
        let config = if options.is_undefined() || options.is_null() {
            SearchConfig::default()
        } else {
            let config: SearchConfig =
                from_value(options).map_err(|e| JsValue::from_str(&format!("Invalid options: {}", e)))?;
            config
                .validate()
                .map_err(|e| JsValue::from_str(&e.to_string()))?;
            config
        };

        let value: serde_json::Value = from_value(glossary)
            .map_err(|e| JsValue::from_str(&format!("Invalid glossary: {}", e)))?;
        let entries = entries_from_value(value).map_err(|e| JsValue::from_str(&e.to_string()))?;

        let index = Arc::new(GlossaryIndex::build_with(entries, config.fields));
        let session = SearchSession::with_index(Arc::clone(&index), &config);
        Ok(GlossarySearcher {
            index,
            session,
            on_results: None,
        })
    }

    #[wasm_bindgen(js_name = entryCount)]
    pub fn entry_count(&self) -> usize {
        self.index.len()
    }

    #[wasm_bindgen(js_name = tokenCount)]
    pub fn token_count(&self) -> usize {
        self.index.token_count()
    }

    /// Immediate, undebounced search. Returns matching entries.
    #[wasm_bindgen]
    pub fn search(&self, query: &str, limit: usize) -> Result<JsValue, JsValue> {
        let entries: Vec<&GlossaryEntry> = search_entries(&self.index, query, limit);
        to_js(&entries)
    }

    #[wasm_bindgen(js_name = setOnResults)]
    pub fn set_on_results(&mut self, callback: Function) {
        self.on_results = Some(callback);
    }

    /// Record the search box contents. Returns the new state.
    #[wasm_bindgen]
    pub fn input(&mut self, text: &str, now_ms: f64) -> Result<JsValue, JsValue> {
        let state = self.session.input(text, millis(now_ms));
        to_js(&state)
    }

    /// Dispatch the pending query if due. Returns `true` when results changed.
    #[wasm_bindgen]
    pub fn poll(&mut self, now_ms: f64) -> Result<bool, JsValue> {
        if !self.session.poll(millis(now_ms)) {
            return Ok(false);
        }
        if let Some(callback) = &self.on_results {
            let entries = to_js(&self.session.entries())?;
            let state = to_js(&self.session.state())?;
            callback.call2(&JsValue::NULL, &entries, &state)?;
        }
        Ok(true)
    }

    #[wasm_bindgen(js_name = deadlineMs)]
    pub fn deadline_ms(&self) -> Option<f64> {
        self.session.deadline().map(|d| d.as_secs_f64() * 1000.0)
    }

    #[wasm_bindgen]
    pub fn state(&self) -> Result<JsValue, JsValue> {
        to_js(&self.session.state())
    }

    /// Entries of the last committed query.
    #[wasm_bindgen]
    pub fn results(&self) -> Result<JsValue, JsValue> {
        to_js(&self.session.entries())
    }
}
