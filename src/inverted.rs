//! Forward-prefix inverted index construction.
//!
//! Every leading substring of every word becomes a key, so a prefix query is
//! a single hash lookup. At glossary scale (tens to hundreds of short entries)
//! the quadratic blow-up in word length is a few kilobytes.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **POSTING_LIST_SORTED**: each posting list is strictly ascending by ordinal
//! 2. **ONE_POSTING_PER_ENTRY**: an entry appears at most once per token, with its best field
//! 3. **NON_EMPTY**: every token has at least one posting
//! 4. **PREFIX_COMPLETE**: every non-empty prefix of every indexed word is a key

use crate::types::{Field, GlossaryEntry, IndexFields};
use crate::utils::{char_prefixes, words};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::collections::HashMap;

/// One entry's presence under a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Posting {
    /// Insertion ordinal of the entry in the owning index.
    pub ordinal: usize,
    /// Best (lowest-ranked) field the token occurs in for this entry.
    pub field: Field,
}

/// Token → postings map.
#[derive(Debug, Clone, Default)]
pub struct TokenIndex {
    pub(crate) terms: HashMap<String, Vec<Posting>>,
}

impl TokenIndex {
    pub fn get(&self, token: &str) -> Option<&[Posting]> {
        self.terms.get(token).map(Vec::as_slice)
    }

    /// Number of distinct keys (words and word prefixes).
    pub fn token_count(&self) -> usize {
        self.terms.len()
    }

    /// Total postings across all keys.
    pub fn posting_count(&self) -> usize {
        self.terms.values().map(Vec::len).sum()
    }

    /// Append the tokens of one entry. `ordinal` must exceed every ordinal
    /// already present, which keeps posting lists sorted without a re-sort.
    pub(crate) fn push_entry(&mut self, ordinal: usize, tokens: HashMap<String, Field>) {
        for (token, field) in tokens {
            self.terms
                .entry(token)
                .or_default()
                .push(Posting { ordinal, field });
        }
    }
}

/// Tokenize one entry into `token → best field`.
///
/// Fields are visited in ranking order, so the first field that produces a
/// token is the best one and later fields never overwrite it.
pub fn tokenize_entry(entry: &GlossaryEntry, fields: &IndexFields) -> HashMap<String, Field> {
    let mut tokens: HashMap<String, Field> = HashMap::new();

    for field in fields.enabled() {
        let Some(text) = entry.field_text(field) else {
            continue;
        };
        for word in words(&text) {
            for prefix in char_prefixes(&word) {
                tokens.entry(prefix.to_string()).or_insert(field);
            }
        }
    }

    tokens
}

/// Build the token index for `entries`, ordinals following slice order.
pub fn build_token_index(entries: &[GlossaryEntry], fields: &IndexFields) -> TokenIndex {
    let mut index = TokenIndex::default();
    for (ordinal, entry) in entries.iter().enumerate() {
        index.push_entry(ordinal, tokenize_entry(entry, fields));
    }
    index
}

/// Build the token index using parallel map-reduce.
///
/// 1. **Map phase**: tokenize entries in parallel
/// 2. **Reduce phase**: merge per-entry maps in ordinal order
///
/// Produces exactly what [`build_token_index`] produces.
#[cfg(feature = "parallel")]
pub fn build_token_index_parallel(entries: &[GlossaryEntry], fields: &IndexFields) -> TokenIndex {
    let per_entry: Vec<HashMap<String, Field>> = entries
        .par_iter()
        .map(|entry| tokenize_entry(entry, fields))
        .collect();

    let mut index = TokenIndex::default();
    for (ordinal, tokens) in per_entry.into_iter().enumerate() {
        index.push_entry(ordinal, tokens);
    }
    index
}

/// Sequential fallback for builds without rayon (WASM).
#[cfg(not(feature = "parallel"))]
pub fn build_token_index_parallel(entries: &[GlossaryEntry], fields: &IndexFields) -> TokenIndex {
    build_token_index(entries, fields)
}

/// Check if a token index is well-formed for `entry_count` entries.
#[cfg(any(debug_assertions, test))]
pub fn check_token_index_well_formed(index: &TokenIndex, entry_count: usize) -> bool {
    for (token, postings) in &index.terms {
        if token.is_empty() || postings.is_empty() {
            return false;
        }
        if postings.windows(2).any(|w| w[0].ordinal >= w[1].ordinal) {
            return false;
        }
        if postings.iter().any(|p| p.ordinal >= entry_count) {
            return false;
        }
    }
    true
}
