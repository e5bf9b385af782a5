//! Blank and odd queries, limits, duplicate ids, unicode.

use super::common::{assert_hits_well_formed, glossary_index, ids, make_entry, robot_index};
use glossdex::{
    query, resolve, search, search_entries, EntryId, GlossaryIndex, QueryOutcome, DEFAULT_LIMIT,
};

#[test]
fn test_blank_queries_are_empty_query() {
    let index = robot_index();
    for text in ["", " ", "   ", "\t", "\n", " \t \n "] {
        assert_eq!(
            query(&index, text, DEFAULT_LIMIT),
            QueryOutcome::EmptyQuery,
            "query {:?}",
            text
        );
        assert!(search(&index, text, DEFAULT_LIMIT).is_empty());
    }
}

#[test]
fn test_no_match_is_distinct_from_blank() {
    let index = robot_index();
    let outcome = query(&index, "zzz", DEFAULT_LIMIT);
    assert_eq!(outcome, QueryOutcome::Hits(vec![]));
    assert!(!outcome.is_empty_query());
}

#[test]
fn test_punctuation_only_query_matches_nothing() {
    let index = robot_index();
    assert_eq!(query(&index, "-- !?", DEFAULT_LIMIT), QueryOutcome::Hits(vec![]));
}

#[test]
fn test_surrounding_whitespace_ignored() {
    let index = robot_index();
    assert_eq!(
        search(&index, "  rob  ", DEFAULT_LIMIT),
        search(&index, "rob", DEFAULT_LIMIT)
    );
}

#[test]
fn test_limit_caps_results() {
    let index = glossary_index();
    // "a" starts words in most definitions
    let uncapped = search(&index, "a", 100);
    assert!(uncapped.len() > 3);

    for limit in [1, 2, 3] {
        let capped = search(&index, "a", limit);
        assert_eq!(capped.len(), limit);
        assert_eq!(capped[..], uncapped[..limit]);
    }
}

#[test]
fn test_default_limit_is_ten() {
    assert_eq!(DEFAULT_LIMIT, 10);
    let index = glossary_index();
    if let QueryOutcome::Hits(hits) = query(&index, "a", DEFAULT_LIMIT) {
        assert_eq!(hits.len(), DEFAULT_LIMIT);
        assert_hits_well_formed(&hits, DEFAULT_LIMIT, "a");
    } else {
        panic!("expected hits");
    }
}

#[test]
fn test_zero_limit_returns_no_hits() {
    let index = robot_index();
    assert_eq!(query(&index, "rob", 0), QueryOutcome::Hits(vec![]));
}

#[test]
fn test_empty_index() {
    let index = GlossaryIndex::empty();
    assert_eq!(query(&index, "rob", DEFAULT_LIMIT), QueryOutcome::Hits(vec![]));
    assert_eq!(query(&index, "", DEFAULT_LIMIT), QueryOutcome::EmptyQuery);
}

#[test]
fn test_duplicate_ids_appear_once() {
    let index = GlossaryIndex::build(vec![
        make_entry("arm", "Robot arm", "Serial manipulator"),
        make_entry("other", "Rover", "Wheeled robot"),
        make_entry("arm", "Robotic arm", "Same id, later entry"),
    ]);
    let found = search(&index, "rob", DEFAULT_LIMIT);
    assert_eq!(found, ids(&["arm", "other"]));
}

#[test]
fn test_duplicate_ids_resolve_to_last_entry() {
    let entries = vec![
        make_entry("arm", "Robot arm", "first"),
        make_entry("arm", "Robotic arm", "second"),
    ];
    let resolved = resolve(&[EntryId::from("arm")], &entries);
    assert_eq!(resolved.len(), 1);
    assert_eq!(resolved[0].definition, "second");

    let index = GlossaryIndex::build(entries);
    let found = search_entries(&index, "rob", DEFAULT_LIMIT);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].definition, "second");
}

#[test]
fn test_resolve_empty_inputs() {
    assert!(resolve(&[], &[]).is_empty());
    assert!(resolve(&[EntryId::from("x")], &[]).is_empty());
}

#[test]
fn test_integer_and_string_ids_are_distinct() {
    let index = GlossaryIndex::build(vec![
        make_entry(1u64, "Encoder", "Measures rotation"),
        make_entry("1", "Encoder", "Measures rotation"),
    ]);
    assert_eq!(
        search(&index, "enc", DEFAULT_LIMIT),
        vec![EntryId::from(1u64), EntryId::from("1")]
    );
}

#[cfg(feature = "unicode-normalization")]
#[test]
fn test_diacritics_folded() {
    let index = GlossaryIndex::build(vec![make_entry("cafe", "Café robot", "Serves coffee")]);
    assert_eq!(search(&index, "caf", DEFAULT_LIMIT), ids(&["cafe"]));
    assert_eq!(search(&index, "café", DEFAULT_LIMIT), ids(&["cafe"]));
    assert_eq!(search(&index, "CAFÉ", DEFAULT_LIMIT), ids(&["cafe"]));
}

#[test]
fn test_multibyte_prefixes() {
    let index = GlossaryIndex::build(vec![make_entry("ru", "Робот", "Машина")]);
    assert_eq!(search(&index, "р", DEFAULT_LIMIT), ids(&["ru"]));
    assert_eq!(search(&index, "РОБ", DEFAULT_LIMIT), ids(&["ru"]));
    assert!(search(&index, "обот", DEFAULT_LIMIT).is_empty());
}

#[test]
fn test_very_long_query() {
    let index = robot_index();
    let text = "rob ".repeat(1_000);
    assert_eq!(search(&index, &text, DEFAULT_LIMIT), ids(&["robot", "ros"]));
}
