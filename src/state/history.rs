//! History list state with stale-response protection.
//!
//! DESIGN
//! ======
//! `refresh()` may be clicked while a previous load is still pending, and
//! responses are not guaranteed to resolve in issue order. Each load draws a
//! sequence number from [`HistoryState::begin_load`]; a response only
//! applies when its number is still the latest issued, so the last-issued
//! request's data is what ends up displayed.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use crate::net::types::AnalysisSummary;

/// Load phase of the history list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HistoryPhase {
    #[default]
    Loading,
    Loaded,
}

/// Dashboard history state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HistoryState {
    pub entries: Vec<AnalysisSummary>,
    pub phase: HistoryPhase,
    latest_req: u64,
}

impl HistoryState {
    /// Start a load and return its sequence number.
    pub fn begin_load(&mut self) -> u64 {
        self.latest_req += 1;
        self.phase = HistoryPhase::Loading;
        self.latest_req
    }

    /// Apply a successful response. Returns `false` (and changes nothing) if
    /// a newer load was issued since `req`.
    pub fn finish(&mut self, req: u64, entries: Vec<AnalysisSummary>) -> bool {
        if req != self.latest_req {
            return false;
        }
        self.entries = entries;
        self.phase = HistoryPhase::Loaded;
        true
    }

    /// Apply a failed response: the listing degrades to empty rather than
    /// blocking the page. Returns `false` if the response was stale.
    pub fn finish_error(&mut self, req: u64) -> bool {
        if req != self.latest_req {
            return false;
        }
        self.entries.clear();
        self.phase = HistoryPhase::Loaded;
        true
    }

    pub fn is_loading(&self) -> bool {
        self.phase == HistoryPhase::Loading
    }

    /// Loaded with zero entries — the empty-state call-to-action case.
    pub fn is_empty(&self) -> bool {
        self.phase == HistoryPhase::Loaded && self.entries.is_empty()
    }
}
