// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query resolution: text in, ranked entry ids out.
//!
//! A query is normalized exactly like indexed text, split into words, and each
//! word is looked up as a forward-prefix key. Hits from multiple words are
//! unioned. Ranking is match presence only: the best field an entry matched
//! in, then insertion order. Same index and same text always give the same
//! list.

use crate::contracts::{check_hits_capped, check_hits_deduplicated, check_hits_ordered};
use crate::index::{id_table, GlossaryIndex};
use crate::types::{EntryId, Field, GlossaryEntry, QueryOutcome, SearchHit};
use crate::utils::words;
use std::collections::{HashMap, HashSet};
use tracing::trace;

/// Results returned when the caller does not pick a limit.
pub const DEFAULT_LIMIT: usize = 10;

/// Run a query, keeping "blank query" distinct from "nothing matched".
pub fn query(index: &GlossaryIndex, text: &str, limit: usize) -> QueryOutcome {
    if text.trim().is_empty() {
        return QueryOutcome::EmptyQuery;
    }

    let query_words = words(text);
    let hits = collect_hits(index, &query_words, limit);
    trace!(query = text, words = query_words.len(), hits = hits.len(), "query resolved");
    QueryOutcome::Hits(hits)
}

/// Matching entry ids, at most `limit` of them. Blank text yields no ids.
pub fn search(index: &GlossaryIndex, text: &str, limit: usize) -> Vec<EntryId> {
    query(index, text, limit).ids()
}

/// Like [`search`] but returns the matching entries themselves.
pub fn search_entries<'a>(index: &'a GlossaryIndex, text: &str, limit: usize) -> Vec<&'a GlossaryEntry> {
    match query(index, text, limit) {
        QueryOutcome::EmptyQuery => Vec::new(),
        QueryOutcome::Hits(hits) => hits
            .iter()
            .filter_map(|hit| index.get(&hit.id))
            .collect(),
    }
}

/// Map ids back to entries.
///
/// Ids with no entry are dropped. With duplicate ids in `entries`, the last
/// one wins.
pub fn resolve<'a>(ids: &[EntryId], entries: &'a [GlossaryEntry]) -> Vec<&'a GlossaryEntry> {
    let table = id_table(entries);
    ids.iter()
        .filter_map(|id| table.get(id).map(|&ordinal| &entries[ordinal]))
        .collect()
}

fn collect_hits(index: &GlossaryIndex, query_words: &[String], limit: usize) -> Vec<SearchHit> {
    if limit == 0 {
        return Vec::new();
    }

    // ordinal → best field across all query words
    let mut best: HashMap<usize, Field> = HashMap::new();
    let mut looked_up: HashSet<&str> = HashSet::new();
    for word in query_words {
        if !looked_up.insert(word.as_str()) {
            continue;
        }
        for posting in index.postings(word) {
            best.entry(posting.ordinal)
                .and_modify(|field| *field = (*field).min(posting.field))
                .or_insert(posting.field);
        }
    }

    let mut ranked: Vec<(Field, usize)> = best.into_iter().map(|(ordinal, field)| (field, ordinal)).collect();
    ranked.sort_unstable();

    let mut seen_ids: HashSet<&EntryId> = HashSet::new();
    let mut hits = Vec::with_capacity(limit.min(ranked.len()));
    for (field, ordinal) in ranked {
        let Some(entry) = index.entry_at(ordinal) else {
            continue;
        };
        if !seen_ids.insert(&entry.id) {
            continue;
        }
        hits.push(SearchHit {
            id: entry.id.clone(),
            field,
            ordinal,
        });
        if hits.len() == limit {
            break;
        }
    }

    check_hits_deduplicated(&hits);
    check_hits_capped(&hits, limit);
    check_hits_ordered(&hits);
    hits
}
