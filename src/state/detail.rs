//! Detail view state with an unmount/route-change guard.
//!
//! Uses the same sequence-number scheme as the history list: a fetch only
//! applies its outcome while its number is still current. Route changes and
//! unmount call [`DetailState::invalidate`], so a response landing after
//! navigation is discarded instead of writing to a dead view.

#[cfg(test)]
#[path = "detail_test.rs"]
mod detail_test;

use crate::net::types::AnalysisRecord;

/// State for one analysis-detail page instance.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DetailState {
    pub record: Option<AnalysisRecord>,
    pub loading: bool,
    latest_req: u64,
}

impl DetailState {
    /// Start a fetch for the routed identifier and return its sequence
    /// number. Clears any previously rendered record.
    pub fn begin_fetch(&mut self) -> u64 {
        self.latest_req += 1;
        self.loading = true;
        self.record = None;
        self.latest_req
    }

    /// Invalidate all in-flight fetches (no identifier present, route
    /// change, unmount). Nothing is rendered and nothing is pending.
    pub fn invalidate(&mut self) {
        self.latest_req += 1;
        self.loading = false;
        self.record = None;
    }

    /// Apply a fetched record. Returns `false` if the fetch was superseded.
    pub fn finish(&mut self, req: u64, record: AnalysisRecord) -> bool {
        if req != self.latest_req {
            return false;
        }
        self.loading = false;
        self.record = Some(record);
        true
    }

    /// Apply a fetch failure: the page renders nothing and the caller
    /// navigates back to the history view. Returns `false` if superseded.
    pub fn fail(&mut self, req: u64) -> bool {
        if req != self.latest_req {
            return false;
        }
        self.loading = false;
        self.record = None;
        true
    }
}
