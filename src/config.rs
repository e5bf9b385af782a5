//! Search tunables.
//!
//! Two knobs matter to callers: how many results a query returns and how long
//! input must be quiet before a query is dispatched. Field selection rides
//! along so a config file fully describes how an index is built.
//!
//! ```json
//! { "limit": 10, "debounceMs": 150, "fields": { "chapters": true } }
//! ```
//!
//! Every key is optional.

use crate::debounce::DEFAULT_DEBOUNCE;
use crate::error::{Error, Result};
use crate::search::DEFAULT_LIMIT;
use crate::types::IndexFields;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Upper bound on the quiescence window. Anything longer reads as a hang.
pub const MAX_DEBOUNCE_MS: u64 = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct SearchConfig {
    /// Maximum results per query.
    pub limit: usize,
    /// Quiescence window before an interactive query is dispatched.
    pub debounce_ms: u64,
    pub fields: IndexFields,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            debounce_ms: DEFAULT_DEBOUNCE.as_millis() as u64,
            fields: IndexFields::default(),
        }
    }
}

impl SearchConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|source| Error::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<()> {
        if self.debounce_ms > MAX_DEBOUNCE_MS {
            return Err(Error::Config(format!(
                "debounceMs {} exceeds maximum {}",
                self.debounce_ms, MAX_DEBOUNCE_MS
            )));
        }
        Ok(())
    }

    pub fn debounce_window(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_debounce_ms(mut self, debounce_ms: u64) -> Self {
        self.debounce_ms = debounce_ms;
        self
    }
}
