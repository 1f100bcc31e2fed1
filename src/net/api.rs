//! HTTP client for the analysis backend.
//!
//! Browser builds (`csr`): real calls via `gloo-net`. Native builds: stubs
//! returning [`ApiError::Unavailable`], since the endpoints are only
//! meaningful in the browser — the URL builders and error mapping stay
//! testable either way.
//!
//! ERROR HANDLING
//! ==============
//! Every call resolves to `Result<_, ApiError>`; callers surface failures as
//! toasts at the component that issued the call, so nothing here propagates
//! as an uncaught fault into the application shell.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{AnalysisKind, AnalysisRecord, AnalysisSummary};

#[cfg(feature = "csr")]
use super::types::ErrorBody;

/// What the HTTP boundary can produce.
#[derive(Clone, Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never completed (network failure, CORS, aborted).
    #[error("request failed: {0}")]
    Transport(String),
    /// The backend answered with a non-2xx status, optionally carrying a
    /// `detail` message in the body.
    #[error("server returned status {status}")]
    Status { status: u16, detail: Option<String> },
    /// The response body did not match the data contract.
    #[error("malformed response payload: {0}")]
    Decode(String),
    /// Stub result on native (non-browser) builds.
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// Message to surface to the user: the backend-provided `detail` when
    /// present, otherwise the given fallback.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Status {
                detail: Some(detail),
                ..
            } => detail.clone(),
            _ => fallback.to_owned(),
        }
    }
}

/// Client for the analysis backend, bound to an explicit base URL so tests
/// and deployments can point it anywhere.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Submission endpoint for an analysis kind.
    pub fn submit_url(&self, kind: AnalysisKind) -> String {
        let path = match kind {
            AnalysisKind::WhitePixel => "/api/analyze/white-pixels",
            AnalysisKind::Bonnet => "/api/analyze/bonnet",
        };
        format!("{}{path}", self.base_url)
    }

    pub fn analysis_url(&self, id: &str) -> String {
        format!("{}/api/analysis/{id}", self.base_url)
    }

    pub fn history_url(&self) -> String {
        format!("{}/api/analysis/history", self.base_url)
    }

    /// Submit an image for analysis as a multipart body with a single `file`
    /// field. Exactly one call per invocation; the caller's state machine is
    /// responsible for not invoking this twice for one draft.
    #[cfg(feature = "csr")]
    pub async fn submit(
        &self,
        kind: AnalysisKind,
        file: &web_sys::File,
    ) -> Result<AnalysisRecord, ApiError> {
        let form = web_sys::FormData::new()
            .map_err(|_| ApiError::Transport("failed to build form data".to_owned()))?;
        form.append_with_blob_and_filename("file", file, &file.name())
            .map_err(|_| ApiError::Transport("failed to attach file".to_owned()))?;

        let request = gloo_net::http::Request::post(&self.submit_url(kind))
            .body(form)
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let resp = request
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Self::decode(resp).await
    }

    /// Fetch one analysis record by identifier.
    pub async fn fetch_analysis(&self, id: &str) -> Result<AnalysisRecord, ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::get(&self.analysis_url(id))
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            Self::decode(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = id;
            Err(ApiError::Unavailable)
        }
    }

    /// Fetch the full history listing. Ordering is the backend's
    /// (most-recent-first); the client does not re-sort.
    pub async fn fetch_history(&self) -> Result<Vec<AnalysisSummary>, ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::get(&self.history_url())
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            Self::decode(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    #[cfg(feature = "csr")]
    async fn decode<T: serde::de::DeserializeOwned>(
        resp: gloo_net::http::Response,
    ) -> Result<T, ApiError> {
        if !resp.ok() {
            let status = resp.status();
            let detail = resp
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.detail);
            return Err(ApiError::Status { status, detail });
        }
        resp.json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}
