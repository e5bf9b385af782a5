//! Which entries match and in what order.

use super::common::{
    assert_hits_well_formed, glossary_entries, glossary_index, ids, int_ids, robot_index,
};
use glossdex::{
    query, resolve, search, search_entries, EntryId, Field, GlossaryIndex, IndexFields, QueryOutcome,
    SearchHit, DEFAULT_LIMIT,
};

fn hits(index: &GlossaryIndex, text: &str) -> Vec<SearchHit> {
    match query(index, text, DEFAULT_LIMIT) {
        QueryOutcome::Hits(hits) => {
            assert_hits_well_formed(&hits, DEFAULT_LIMIT, text);
            hits
        }
        QueryOutcome::EmptyQuery => panic!("{:?} should not be an empty query", text),
    }
}

#[test]
fn test_rob_finds_term_and_definition_matches() {
    let index = robot_index();
    assert_eq!(search(&index, "rob", DEFAULT_LIMIT), ids(&["robot", "ros"]));
}

#[test]
fn test_rob_resolves_to_entries() {
    let index = robot_index();
    let entries = search_entries(&index, "rob", DEFAULT_LIMIT);
    let terms: Vec<&str> = entries.iter().map(|e| e.term.as_str()).collect();
    assert_eq!(terms, vec!["Robot", "ROS"]);
}

#[test]
fn test_every_prefix_of_a_word_matches() {
    let index = robot_index();
    for prefix in ["f", "fl", "fle", "flex", "flexi", "flexib", "flexibl", "flexible"] {
        assert_eq!(
            search(&index, prefix, DEFAULT_LIMIT),
            ids(&["ros"]),
            "prefix {:?}",
            prefix
        );
    }
}

#[test]
fn test_infix_does_not_match() {
    let index = robot_index();
    // "lexible" sits inside "flexible" but starts no word
    assert!(search(&index, "lexible", DEFAULT_LIMIT).is_empty());
}

#[test]
fn test_longer_than_word_does_not_match() {
    let index = robot_index();
    assert!(search(&index, "robots", DEFAULT_LIMIT).is_empty());
}

#[test]
fn test_term_matches_rank_before_related_and_definition() {
    let index = glossary_index();
    let found = hits(&index, "sim");

    // Simultaneous Localization..., Sim-to-Real (terms), Digital Twin
    // (related "Sim-to-Real Transfer"), Gazebo (definition "simulator")
    assert_eq!(
        found.iter().map(|h| h.id.clone()).collect::<Vec<_>>(),
        int_ids(&[7, 11, 10, 9])
    );
    assert_eq!(
        found.iter().map(|h| h.field).collect::<Vec<_>>(),
        vec![Field::Term, Field::Term, Field::RelatedTerms, Field::Definition]
    );
}

#[test]
fn test_best_field_wins_per_entry() {
    let index = glossary_index();
    let found = hits(&index, "robot");

    assert_eq!(
        found.iter().map(|h| h.id.clone()).collect::<Vec<_>>(),
        int_ids(&[8, 9, 7, 10, 12])
    );
    // Gazebo mentions robots in its definition too, but its related term ranks it
    assert_eq!(found[1].field, Field::RelatedTerms);
}

#[test]
fn test_acronym_matches() {
    let index = glossary_index();
    let found = hits(&index, "ros");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, EntryId::from(8u64));
    assert_eq!(found[0].field, Field::Acronym);

    let found = hits(&index, "ik");
    assert_eq!(found[0].id, EntryId::from(4u64));
    assert_eq!(found[0].field, Field::Acronym);
}

#[test]
fn test_acronym_ignored_when_disabled() {
    let index = GlossaryIndex::build_with(glossary_entries(), IndexFields::minimal());
    assert!(search(&index, "ik", DEFAULT_LIMIT).is_empty());
}

#[test]
fn test_multi_word_query_unions_matches() {
    let index = glossary_index();
    assert_eq!(
        search(&index, "lidar gazebo", DEFAULT_LIMIT),
        int_ids(&[5, 9, 7, 8, 10])
    );
}

#[test]
fn test_union_is_superset_of_each_word() {
    let index = glossary_index();
    let both = search(&index, "kin sensor", DEFAULT_LIMIT);
    for word in ["kin", "sensor"] {
        for id in search(&index, word, DEFAULT_LIMIT) {
            assert!(both.contains(&id), "{:?} from {:?} missing in union", id, word);
        }
    }
}

#[test]
fn test_chapters_indexed_only_when_enabled() {
    let default_index = glossary_index();
    assert!(search(&default_index, "chapter", DEFAULT_LIMIT).is_empty());

    let fields = IndexFields {
        chapters: true,
        ..IndexFields::default()
    };
    let index = GlossaryIndex::build_with(glossary_entries(), fields);
    let found = hits(&index, "chapter");
    assert_eq!(found.len(), DEFAULT_LIMIT);
    assert!(found.iter().all(|h| h.field == Field::Chapters));
}

#[test]
fn test_case_insensitive() {
    let index = glossary_index();
    assert_eq!(
        search(&index, "LIDAR", DEFAULT_LIMIT),
        search(&index, "lidar", DEFAULT_LIMIT)
    );
    assert_eq!(
        search(&index, "LiDaR", DEFAULT_LIMIT),
        search(&index, "lidar", DEFAULT_LIMIT)
    );
}

#[test]
fn test_hyphenated_terms_split_into_words() {
    let index = glossary_index();
    // "Vision-Language-Action Model"
    assert_eq!(search(&index, "lang", DEFAULT_LIMIT).first(), Some(&EntryId::from(12u64)));
    assert_eq!(search(&index, "action", DEFAULT_LIMIT).first(), Some(&EntryId::from(12u64)));
}

#[test]
fn test_resolve_preserves_id_order() {
    let entries = glossary_entries();
    let resolved = resolve(&int_ids(&[9, 1, 5]), &entries);
    let terms: Vec<&str> = resolved.iter().map(|e| e.term.as_str()).collect();
    assert_eq!(terms, vec!["Gazebo", "Actuator", "Lidar"]);
}

#[test]
fn test_resolve_drops_unknown_ids() {
    let entries = glossary_entries();
    let resolved = resolve(&int_ids(&[1, 99, 2]), &entries);
    assert_eq!(resolved.len(), 2);
}
