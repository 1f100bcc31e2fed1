use super::*;
use crate::net::types::{AnalysisReport, WhitePixelReport};

fn record(id: &str) -> AnalysisRecord {
    AnalysisRecord {
        id: id.to_owned(),
        image_name: "scan.png".to_owned(),
        timestamp: "2025-01-15T10:30:00+00:00".to_owned(),
        report: AnalysisReport::WhitePixel(WhitePixelReport {
            white_pixel_count: 150,
            total_pixels: 1000,
            percentage: 15.0,
            analysis_result: "Low white pixel concentration (15.0%).".to_owned(),
        }),
    }
}

// =============================================================
// Fetch lifecycle
// =============================================================

#[test]
fn default_renders_nothing() {
    let state = DetailState::default();
    assert!(state.record.is_none());
    assert!(!state.loading);
}

#[test]
fn begin_fetch_clears_prior_record() {
    let mut state = DetailState::default();
    let req = state.begin_fetch();
    assert!(state.finish(req, record("a-1")));

    state.begin_fetch();
    assert!(state.loading);
    assert!(state.record.is_none());
}

#[test]
fn finish_renders_the_record() {
    let mut state = DetailState::default();
    let req = state.begin_fetch();

    assert!(state.finish(req, record("a-1")));
    assert!(!state.loading);
    assert_eq!(state.record.as_ref().map(|r| r.id.as_str()), Some("a-1"));
}

#[test]
fn fail_renders_nothing() {
    let mut state = DetailState::default();
    let req = state.begin_fetch();

    assert!(state.fail(req));
    assert!(!state.loading);
    assert!(state.record.is_none());
}

// =============================================================
// Supersession guard
// =============================================================

#[test]
fn response_after_invalidate_is_discarded() {
    let mut state = DetailState::default();
    let req = state.begin_fetch();

    // Unmount (or the id disappeared) before the response landed.
    state.invalidate();

    assert!(!state.finish(req, record("a-1")));
    assert!(!state.fail(req));
    assert!(state.record.is_none());
    assert!(!state.loading);
}

#[test]
fn response_for_a_previous_route_is_discarded() {
    let mut state = DetailState::default();
    let old = state.begin_fetch();
    let new = state.begin_fetch();

    assert!(!state.finish(old, record("old")));
    assert!(state.finish(new, record("new")));
    assert_eq!(state.record.as_ref().map(|r| r.id.as_str()), Some("new"));
}
