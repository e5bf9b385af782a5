//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

use crate::types::{EntryId, GlossaryEntry};

/// Create an entry with just id, term and definition.
pub fn make_entry(id: impl Into<EntryId>, term: &str, definition: &str) -> GlossaryEntry {
    GlossaryEntry::new(id, term, definition)
}

/// Create an entry with an acronym and related terms.
pub fn make_entry_full(
    id: impl Into<EntryId>,
    term: &str,
    definition: &str,
    acronym: Option<&str>,
    related: &[&str],
) -> GlossaryEntry {
    GlossaryEntry {
        acronym: acronym.map(str::to_string),
        related_terms: related.iter().map(|s| s.to_string()).collect(),
        ..GlossaryEntry::new(id, term, definition)
    }
}

/// The two-entry robotics glossary used throughout the docs and tests.
pub fn robot_fixture() -> Vec<GlossaryEntry> {
    vec![
        make_entry(
            "robot",
            "Robot",
            "A machine capable of carrying out complex actions automatically.",
        ),
        make_entry(
            "ros",
            "ROS",
            "Robot Operating System - a flexible framework for writing robot software.",
        ),
    ]
}
