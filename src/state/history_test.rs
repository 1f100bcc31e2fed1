use super::*;
use crate::net::types::AnalysisKind;

fn summary(id: &str) -> AnalysisSummary {
    AnalysisSummary {
        id: id.to_owned(),
        analysis_type: AnalysisKind::WhitePixel,
        image_name: format!("{id}.png"),
        timestamp: "2025-01-15T10:30:00+00:00".to_owned(),
        summary: "White Pixels: 15.0%".to_owned(),
    }
}

// =============================================================
// Defaults and phases
// =============================================================

#[test]
fn history_state_defaults_to_loading_and_empty() {
    let state = HistoryState::default();
    assert!(state.is_loading());
    assert!(state.entries.is_empty());
    assert!(!state.is_empty()); // not yet Loaded
}

#[test]
fn finish_moves_to_loaded() {
    let mut state = HistoryState::default();
    let req = state.begin_load();
    assert!(state.is_loading());

    assert!(state.finish(req, vec![summary("a-1")]));
    assert!(!state.is_loading());
    assert_eq!(state.entries.len(), 1);
}

#[test]
fn empty_response_is_the_empty_state() {
    let mut state = HistoryState::default();
    let req = state.begin_load();
    assert!(state.finish(req, Vec::new()));
    assert!(state.is_empty());
}

#[test]
fn failure_degrades_to_empty_list() {
    let mut state = HistoryState::default();
    let req = state.begin_load();
    state.finish(req, vec![summary("a-1")]);

    let req = state.begin_load();
    assert!(state.finish_error(req));
    assert!(state.is_empty());
}

// =============================================================
// Overlapping refreshes
// =============================================================

#[test]
fn begin_load_issues_increasing_sequence_numbers() {
    let mut state = HistoryState::default();
    let first = state.begin_load();
    let second = state.begin_load();
    assert!(second > first);
}

#[test]
fn stale_success_is_discarded() {
    let mut state = HistoryState::default();
    let first = state.begin_load();
    let second = state.begin_load();

    // The later-issued request resolves first and wins.
    assert!(state.finish(second, vec![summary("new")]));
    // The earlier request's slower response must not overwrite it.
    assert!(!state.finish(first, vec![summary("old")]));

    assert_eq!(state.entries.len(), 1);
    assert_eq!(state.entries[0].id, "new");
}

#[test]
fn stale_error_is_discarded() {
    let mut state = HistoryState::default();
    let first = state.begin_load();
    let second = state.begin_load();

    assert!(state.finish(second, vec![summary("new")]));
    assert!(!state.finish_error(first));
    assert_eq!(state.entries.len(), 1);
}

#[test]
fn refresh_while_pending_keeps_loading_until_latest_resolves() {
    let mut state = HistoryState::default();
    let first = state.begin_load();
    let second = state.begin_load();

    // First response arrives while the second is still pending: ignored,
    // still loading.
    assert!(!state.finish(first, vec![summary("old")]));
    assert!(state.is_loading());

    assert!(state.finish(second, Vec::new()));
    assert!(!state.is_loading());
}
