//! Upload workflow state machine.
//!
//! DESIGN
//! ======
//! One draft lives from "pick an analysis type" to "navigate to the result or
//! give up". The phases are a closed enum rather than a set of booleans, so
//! invalid combinations ("analyzing with no file selected") are
//! unrepresentable and re-entrant submission is impossible by construction:
//! [`UploadDraft::begin_submit`] only yields a request from `FileSelected`.
//!
//! The machine sees file *metadata* only; the page holds the actual browser
//! `File` handle next to it. Both explicit selection and drop gestures feed
//! the same [`UploadDraft::select_file`] admission path.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use crate::net::types::AnalysisKind;

/// Declared name and MIME type of a candidate file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileMeta {
    pub name: String,
    pub content_type: String,
}

impl FileMeta {
    /// Local admission rule: the declared content type must indicate an
    /// image. Checked before any network round trip.
    pub fn is_image(&self) -> bool {
        self.content_type.starts_with("image/")
    }
}

/// Outcome of offering a candidate file to the draft.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileSelection {
    Accepted,
    /// Declared MIME type is not `image/*`; draft unchanged.
    NotAnImage,
    /// No analysis type chosen yet, or a submission is in flight.
    WrongPhase,
}

/// The draft for a single in-flight submission.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum UploadDraft {
    #[default]
    Idle,
    TypeSelected {
        kind: AnalysisKind,
    },
    FileSelected {
        kind: AnalysisKind,
        file: FileMeta,
    },
    Submitting {
        kind: AnalysisKind,
        file: FileMeta,
    },
    /// Submission failed; kind and file are retained so the user can retry
    /// without re-selecting.
    Failed {
        kind: AnalysisKind,
        file: FileMeta,
        message: String,
    },
    /// Terminal for this draft; the caller navigates to the detail route.
    Succeeded {
        analysis_id: String,
    },
}

impl UploadDraft {
    /// Choose the analysis workflow. Only valid from `Idle`.
    pub fn select_type(&mut self, kind: AnalysisKind) -> bool {
        if matches!(self, Self::Idle) {
            *self = Self::TypeSelected { kind };
            true
        } else {
            false
        }
    }

    /// Offer a candidate file. Valid from `TypeSelected`, `FileSelected`
    /// (replacing the prior selection), or `Failed` (retrying with a new
    /// file). Non-image candidates are rejected with no state change.
    pub fn select_file(&mut self, candidate: FileMeta) -> FileSelection {
        if !candidate.is_image() {
            return FileSelection::NotAnImage;
        }
        match self {
            Self::TypeSelected { kind }
            | Self::FileSelected { kind, .. }
            | Self::Failed { kind, .. } => {
                *self = Self::FileSelected {
                    kind: *kind,
                    file: candidate,
                };
                FileSelection::Accepted
            }
            Self::Idle | Self::Submitting { .. } | Self::Succeeded { .. } => {
                FileSelection::WrongPhase
            }
        }
    }

    /// Remove the selected file, returning to `TypeSelected`.
    pub fn clear_file(&mut self) -> bool {
        if let Self::FileSelected { kind, .. } = self {
            *self = Self::TypeSelected { kind: *kind };
            true
        } else {
            false
        }
    }

    /// Return a previously failed draft to `FileSelected` with its file
    /// intact.
    pub fn retry(&mut self) -> bool {
        if let Self::Failed { kind, file, .. } = self {
            *self = Self::FileSelected {
                kind: *kind,
                file: file.clone(),
            };
            true
        } else {
            false
        }
    }

    /// Start the submission. Yields the kind to submit (the caller issues
    /// exactly one network call per `Some`) and moves to `Submitting`. From
    /// any other phase — including `Submitting` itself — this is a no-op
    /// returning `None`.
    pub fn begin_submit(&mut self) -> Option<AnalysisKind> {
        if let Self::FileSelected { kind, file } = self {
            let kind = *kind;
            *self = Self::Submitting {
                kind,
                file: file.clone(),
            };
            Some(kind)
        } else {
            None
        }
    }

    /// Record a successful submission. Only valid from `Submitting`.
    pub fn resolve_success(&mut self, analysis_id: &str) -> bool {
        if matches!(self, Self::Submitting { .. }) {
            *self = Self::Succeeded {
                analysis_id: analysis_id.to_owned(),
            };
            true
        } else {
            false
        }
    }

    /// Record a failed submission, keeping kind and file for retry. Only
    /// valid from `Submitting`.
    pub fn resolve_failure(&mut self, message: impl Into<String>) -> bool {
        if let Self::Submitting { kind, file } = self {
            *self = Self::Failed {
                kind: *kind,
                file: file.clone(),
                message: message.into(),
            };
            true
        } else {
            false
        }
    }

    /// Discard the draft. Refused while a submission is in flight — there is
    /// no cancellation of an in-flight call, so the modal blocks its close
    /// affordance instead.
    pub fn close(&mut self) -> bool {
        if matches!(self, Self::Submitting { .. }) {
            false
        } else {
            *self = Self::Idle;
            true
        }
    }

    /// Whether the upload modal is visible.
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Idle | Self::Succeeded { .. })
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting { .. })
    }

    pub fn kind(&self) -> Option<AnalysisKind> {
        match self {
            Self::TypeSelected { kind }
            | Self::FileSelected { kind, .. }
            | Self::Submitting { kind, .. }
            | Self::Failed { kind, .. } => Some(*kind),
            Self::Idle | Self::Succeeded { .. } => None,
        }
    }

    pub fn file(&self) -> Option<&FileMeta> {
        match self {
            Self::FileSelected { file, .. }
            | Self::Submitting { file, .. }
            | Self::Failed { file, .. } => Some(file),
            Self::Idle | Self::TypeSelected { .. } | Self::Succeeded { .. } => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        if let Self::Failed { message, .. } = self {
            Some(message)
        } else {
            None
        }
    }
}
