//! Typing sessions against the bundled glossary.

use super::common::{glossary_index, int_ids};
use glossdex::{EntryId, SearchConfig, SearchSession, SearchState};
use std::sync::Arc;
use std::time::Duration;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn session_with(config: &SearchConfig) -> SearchSession {
    SearchSession::with_index(Arc::new(glossary_index()), config)
}

fn result_ids(session: &SearchSession) -> Vec<EntryId> {
    session.results().iter().map(|h| h.id.clone()).collect()
}

/// Type `text` one character at a time, `gap` apart, starting at `start`.
/// Returns the time of the last keystroke.
fn type_out(session: &mut SearchSession, text: &str, start: Duration, gap: Duration) -> Duration {
    let mut now = start;
    for end in text.char_indices().map(|(i, c)| i + c.len_utf8()) {
        session.input(&text[..end], now);
        assert!(!session.poll(now), "dispatched mid-burst at {:?}", now);
        now += gap;
    }
    now - gap
}

#[test]
fn test_typing_burst_resolves_once() {
    let mut session = session_with(&SearchConfig::default());
    let last = type_out(&mut session, "lidar", ms(0), ms(60));

    assert_eq!(session.state(), SearchState::Searching);
    assert_eq!(session.deadline(), Some(last + ms(150)));
    assert!(!session.poll(last + ms(149)));
    assert!(session.poll(last + ms(150)));

    assert_eq!(session.committed_query(), "lidar");
    assert_eq!(result_ids(&session), int_ids(&[5, 7]));
    assert_eq!(session.state(), SearchState::Resolved { count: 2 });
    assert!(!session.poll(last + ms(10_000)));
}

#[test]
fn test_refining_query_replaces_results() {
    let mut session = session_with(&SearchConfig::default());
    session.input("kin", ms(0));
    assert!(session.poll(ms(150)));
    assert_eq!(result_ids(&session), int_ids(&[3, 4, 2]));

    session.input("kin inv", ms(400));
    // previous results stay visible while the refinement is pending
    assert_eq!(session.state(), SearchState::Searching);
    assert_eq!(session.results().len(), 3);

    assert!(session.poll(ms(550)));
    assert_eq!(session.committed_query(), "kin inv");
    assert_eq!(result_ids(&session), int_ids(&[3, 4, 2]));
}

#[test]
fn test_no_terms_found_then_clear() {
    let mut session = session_with(&SearchConfig::default());
    session.input("quaternion", ms(0));
    assert!(session.poll(ms(150)));
    assert_eq!(session.state(), SearchState::Resolved { count: 0 });

    session.clear();
    assert_eq!(session.state(), SearchState::Idle);
    assert!(session.results().is_empty());
    assert_eq!(session.committed_query(), "");
}

#[test]
fn test_backspace_to_blank_goes_idle_immediately() {
    let mut session = session_with(&SearchConfig::default());
    session.input("g", ms(0));
    session.input("", ms(50));
    assert_eq!(session.state(), SearchState::Idle);
    assert!(session.deadline().is_none());
    assert!(!session.poll(ms(1_000)));
}

#[test]
fn test_custom_window_and_limit() {
    let config = SearchConfig::default().with_debounce_ms(20).with_limit(2);
    let mut session = session_with(&config);

    session.input("a", ms(0));
    assert!(!session.poll(ms(19)));
    assert!(session.poll(ms(20)));
    assert_eq!(session.state(), SearchState::Resolved { count: 2 });
}

#[test]
fn test_zero_window_dispatches_on_first_poll() {
    let config = SearchConfig::default().with_debounce_ms(0);
    let mut session = session_with(&config);
    session.input("gaz", ms(5));
    assert!(session.poll(ms(5)));
    assert_eq!(result_ids(&session), int_ids(&[9, 8, 10]));
}

#[test]
fn test_entries_follow_results() {
    let mut session = session_with(&SearchConfig::default());
    session.input("twin", ms(0));
    session.poll(ms(150));

    let terms: Vec<&str> = session.entries().iter().map(|e| e.term.as_str()).collect();
    assert_eq!(terms, vec!["Digital Twin", "Gazebo", "Sim-to-Real Transfer"]);
}
