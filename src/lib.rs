//! Forward-prefix glossary search.
//!
//! Build an index once from a list of glossary entries, then answer prefix
//! queries as the user types. Every leading substring of every indexed word is
//! a key, so "rob" finds both the entry titled "Robot" and the one whose
//! definition mentions "robot software".
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │  types.rs   │────▶│ inverted.rs  │────▶│  index.rs   │
//! │ (Glossary-  │     │ (tokenize,   │     │ (Glossary-  │
//! │  Entry,     │     │  prefix keys)│     │  Index)     │
//! │  Field)     │     └──────────────┘     └─────────────┘
//! └─────────────┘                                 │
//!                                                 ▼
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │ runtime/    │◀────│ session.rs   │◀────│  search.rs  │
//! │ (tokio,     │     │ (debounce +  │     │ (query,     │
//! │  wasm)      │     │  UI state)   │     │  resolve)   │
//! └─────────────┘     └──────────────┘     └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use glossdex::{search, GlossaryEntry, GlossaryIndex, DEFAULT_LIMIT};
//!
//! let index = GlossaryIndex::build(vec![
//!     GlossaryEntry::new("robot", "Robot", "A machine capable of carrying out complex actions."),
//!     GlossaryEntry::new("ros", "ROS", "Robot Operating System."),
//! ]);
//!
//! let ids = search(&index, "rob", DEFAULT_LIMIT);
//! assert_eq!(ids.len(), 2);
//! assert!(search(&index, "", DEFAULT_LIMIT).is_empty());
//! ```

pub mod build;
pub mod config;
pub mod contracts;
pub mod debounce;
pub mod error;
mod index;
mod inverted;
pub mod runtime;
mod search;
pub mod session;
pub mod testing;
mod types;
mod utils;

pub use config::SearchConfig;
pub use debounce::{Debouncer, Dispatch, DEFAULT_DEBOUNCE};
pub use error::{Error, Result};
pub use index::GlossaryIndex;
pub use inverted::{build_token_index, build_token_index_parallel, tokenize_entry, Posting, TokenIndex};
pub use search::{query, resolve, search, search_entries, DEFAULT_LIMIT};
pub use session::SearchSession;
pub use types::{
    EntryId, Field, GlossaryEntry, IndexFields, QueryOutcome, SearchHit, SearchState,
};
pub use utils::{normalize, words};
