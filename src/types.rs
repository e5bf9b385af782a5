// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The records the index is built from and the shapes it answers with.
//!
//! A glossary entry is owned by whoever loaded it. The index copies what it
//! needs at build time and refers back to entries by insertion ordinal, so the
//! public surface only ever exposes `EntryId`s and borrowed entries.
//!
//! # Invariants
//!
//! - **EntryId**: unique within one build. Duplicates are tolerated but the
//!   last entry with a given id wins when resolving.
//! - **Field**: the declaration order *is* the ranking order. `Term` sorts
//!   before `Acronym`, which sorts before `RelatedTerms`, and so on.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// IDENTIFIERS
// =============================================================================

/// Opaque entry identifier.
///
/// Glossary files in the wild use both numeric and string ids, so both are
/// accepted and kept distinct: `Int(1)` and `Str("1")` are different ids.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntryId {
    Int(u64),
    Str(String),
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryId::Int(n) => write!(f, "{}", n),
            EntryId::Str(s) => f.write_str(s),
        }
    }
}

impl From<u64> for EntryId {
    fn from(id: u64) -> Self {
        EntryId::Int(id)
    }
}

impl From<&str> for EntryId {
    fn from(id: &str) -> Self {
        EntryId::Str(id.to_string())
    }
}

impl From<String> for EntryId {
    fn from(id: String) -> Self {
        EntryId::Str(id)
    }
}

// =============================================================================
// ENTRIES
// =============================================================================

/// One glossary record.
///
/// Missing `term` or `definition` deserialize as empty strings rather than
/// failing: an entry with nothing to index is still a valid entry, it just
/// never matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlossaryEntry {
    pub id: EntryId,
    #[serde(default)]
    pub term: String,
    #[serde(default)]
    pub definition: String,
    /// Short alias shown next to the term, e.g. "ROS".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acronym: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub related_terms: Vec<String>,
    /// Chapter labels. Display-only unless `IndexFields::chapters` is set.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub chapters: Vec<String>,
}

impl GlossaryEntry {
    pub fn new(id: impl Into<EntryId>, term: &str, definition: &str) -> Self {
        Self {
            id: id.into(),
            term: term.to_string(),
            definition: definition.to_string(),
            acronym: None,
            related_terms: Vec::new(),
            chapters: Vec::new(),
        }
    }

    /// Text of one field, with list fields joined by whitespace.
    ///
    /// Returns `None` when the entry has nothing in that field.
    pub fn field_text(&self, field: Field) -> Option<String> {
        let text = match field {
            Field::Term => self.term.clone(),
            Field::Acronym => self.acronym.clone().unwrap_or_default(),
            Field::RelatedTerms => self.related_terms.join(" "),
            Field::Definition => self.definition.clone(),
            Field::Chapters => self.chapters.join(" "),
        };
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

// =============================================================================
// FIELDS
// =============================================================================

/// An indexed field of an entry.
///
/// Derived `Ord` follows declaration order, which is the result ordering:
/// an entry whose term matched is listed before one that only matched in its
/// definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Term,
    Acronym,
    RelatedTerms,
    Definition,
    Chapters,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Term,
        Field::Acronym,
        Field::RelatedTerms,
        Field::Definition,
        Field::Chapters,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Term => "term",
            Field::Acronym => "acronym",
            Field::RelatedTerms => "relatedTerms",
            Field::Definition => "definition",
            Field::Chapters => "chapters",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which optional fields contribute tokens. `term` and `definition` always do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IndexFields {
    pub acronym: bool,
    pub related_terms: bool,
    pub chapters: bool,
}

impl Default for IndexFields {
    fn default() -> Self {
        Self {
            acronym: true,
            related_terms: true,
            chapters: false,
        }
    }
}

impl IndexFields {
    /// Only `term` and `definition`.
    pub fn minimal() -> Self {
        Self {
            acronym: false,
            related_terms: false,
            chapters: false,
        }
    }

    pub fn includes(&self, field: Field) -> bool {
        match field {
            Field::Term | Field::Definition => true,
            Field::Acronym => self.acronym,
            Field::RelatedTerms => self.related_terms,
            Field::Chapters => self.chapters,
        }
    }

    /// Fields to index, in ranking order.
    pub fn enabled(&self) -> impl Iterator<Item = Field> + '_ {
        Field::ALL.into_iter().filter(|f| self.includes(*f))
    }
}

// =============================================================================
// RESULTS
// =============================================================================

/// A matched entry together with the best field it matched in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    pub id: EntryId,
    pub field: Field,
    /// Insertion ordinal of the entry within its index. Tie-breaker.
    #[serde(skip)]
    pub ordinal: usize,
}

/// Outcome of a query.
///
/// The UI shows nothing for `EmptyQuery` but a "no terms found" message for
/// `Hits` with an empty list, so the two must stay distinguishable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutcome {
    EmptyQuery,
    Hits(Vec<SearchHit>),
}

impl QueryOutcome {
    /// Matched ids in result order. Empty for `EmptyQuery`.
    pub fn ids(&self) -> Vec<EntryId> {
        match self {
            QueryOutcome::EmptyQuery => Vec::new(),
            QueryOutcome::Hits(hits) => hits.iter().map(|h| h.id.clone()).collect(),
        }
    }

    pub fn is_empty_query(&self) -> bool {
        matches!(self, QueryOutcome::EmptyQuery)
    }
}

/// UI-facing state of an interactive search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum SearchState {
    /// No query typed, or the query is blank.
    Idle,
    /// Input changed and a dispatch is waiting for the quiescence window.
    Searching,
    /// Latest settled input has been answered with `count` results.
    Resolved { count: usize },
}
