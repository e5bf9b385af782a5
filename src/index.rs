// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The glossary index value type.
//!
//! A `GlossaryIndex` owns its entries, the token map built from them, and an
//! id lookup table. It is built once per entry collection and is read-only
//! afterwards, apart from [`GlossaryIndex::insert`] which only ever appends.
//! Share it across threads or tasks behind an `Arc`.
//!
//! There is no global instance. Whoever holds the entry collection builds the
//! index and passes it by reference to [`crate::search`].

use crate::contracts::check_index_well_formed;
use crate::inverted::{build_token_index, build_token_index_parallel, tokenize_entry, Posting, TokenIndex};
use crate::types::{EntryId, GlossaryEntry, IndexFields};
use std::collections::HashMap;
use tracing::{debug, warn};

#[derive(Debug, Clone, Default)]
pub struct GlossaryIndex {
    entries: Vec<GlossaryEntry>,
    /// id → ordinal. Later duplicates overwrite earlier ones.
    by_id: HashMap<EntryId, usize>,
    tokens: TokenIndex,
    fields: IndexFields,
}

impl GlossaryIndex {
    /// An index with no entries. Every query against it returns nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build with the default field selection (term, acronym, related terms, definition).
    pub fn build(entries: Vec<GlossaryEntry>) -> Self {
        Self::build_with(entries, IndexFields::default())
    }

    pub fn build_with(entries: Vec<GlossaryEntry>, fields: IndexFields) -> Self {
        let tokens = build_token_index(&entries, &fields);
        Self::assemble(entries, tokens, fields)
    }

    /// Same result as [`GlossaryIndex::build_with`], tokenizing entries on the rayon pool.
    pub fn build_parallel(entries: Vec<GlossaryEntry>, fields: IndexFields) -> Self {
        let tokens = build_token_index_parallel(&entries, &fields);
        Self::assemble(entries, tokens, fields)
    }

    fn assemble(entries: Vec<GlossaryEntry>, tokens: TokenIndex, fields: IndexFields) -> Self {
        let by_id = id_table(&entries);
        if by_id.len() != entries.len() {
            warn!(
                entries = entries.len(),
                unique_ids = by_id.len(),
                "duplicate entry ids; the last entry with each id wins"
            );
        }

        let index = Self {
            entries,
            by_id,
            tokens,
            fields,
        };
        check_index_well_formed(&index);
        debug!(
            entries = index.entries.len(),
            tokens = index.tokens.token_count(),
            postings = index.tokens.posting_count(),
            "built glossary index"
        );
        index
    }

    /// Append one entry. Existing postings are untouched.
    pub fn insert(&mut self, entry: GlossaryEntry) {
        let ordinal = self.entries.len();
        if self.by_id.insert(entry.id.clone(), ordinal).is_some() {
            warn!(id = %entry.id, "entry id already indexed; new entry shadows it");
        }
        self.tokens
            .push_entry(ordinal, tokenize_entry(&entry, &self.fields));
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[GlossaryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn fields(&self) -> IndexFields {
        self.fields
    }

    pub fn token_count(&self) -> usize {
        self.tokens.token_count()
    }

    pub fn posting_count(&self) -> usize {
        self.tokens.posting_count()
    }

    /// Look up an entry by id. With duplicate ids this is the last one inserted.
    pub fn get(&self, id: &EntryId) -> Option<&GlossaryEntry> {
        self.by_id.get(id).and_then(|&ordinal| self.entries.get(ordinal))
    }

    pub(crate) fn entry_at(&self, ordinal: usize) -> Option<&GlossaryEntry> {
        self.entries.get(ordinal)
    }

    pub(crate) fn postings(&self, token: &str) -> &[Posting] {
        self.tokens.get(token).unwrap_or(&[])
    }

    #[cfg_attr(not(debug_assertions), allow(dead_code))]
    pub(crate) fn token_index(&self) -> &TokenIndex {
        &self.tokens
    }

    /// Ids that occur more than once, in first-seen order.
    pub fn duplicate_ids(&self) -> Vec<EntryId> {
        let mut seen: HashMap<&EntryId, usize> = HashMap::new();
        let mut duplicates = Vec::new();
        for entry in &self.entries {
            let count = seen.entry(&entry.id).or_insert(0);
            *count += 1;
            if *count == 2 {
                duplicates.push(entry.id.clone());
            }
        }
        duplicates
    }
}

/// id → ordinal, last duplicate wins.
pub(crate) fn id_table(entries: &[GlossaryEntry]) -> HashMap<EntryId, usize> {
    entries
        .iter()
        .enumerate()
        .map(|(ordinal, entry)| (entry.id.clone(), ordinal))
        .collect()
}
