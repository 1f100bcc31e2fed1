use super::*;

fn image() -> FileMeta {
    FileMeta {
        name: "bonnet.jpg".to_owned(),
        content_type: "image/jpeg".to_owned(),
    }
}

fn pdf() -> FileMeta {
    FileMeta {
        name: "report.pdf".to_owned(),
        content_type: "application/pdf".to_owned(),
    }
}

fn draft_with_file() -> UploadDraft {
    let mut draft = UploadDraft::default();
    assert!(draft.select_type(AnalysisKind::WhitePixel));
    assert_eq!(draft.select_file(image()), FileSelection::Accepted);
    draft
}

// =============================================================
// Type and file selection
// =============================================================

#[test]
fn default_is_idle_and_closed() {
    let draft = UploadDraft::default();
    assert_eq!(draft, UploadDraft::Idle);
    assert!(!draft.is_open());
    assert!(draft.kind().is_none());
    assert!(draft.file().is_none());
}

#[test]
fn select_type_only_from_idle() {
    let mut draft = UploadDraft::default();
    assert!(draft.select_type(AnalysisKind::Bonnet));
    assert_eq!(draft.kind(), Some(AnalysisKind::Bonnet));
    assert!(draft.is_open());

    // Already typed; a second selection is refused.
    assert!(!draft.select_type(AnalysisKind::WhitePixel));
    assert_eq!(draft.kind(), Some(AnalysisKind::Bonnet));
}

#[test]
fn non_image_candidate_leaves_draft_unchanged() {
    let mut draft = UploadDraft::default();
    draft.select_type(AnalysisKind::WhitePixel);
    let before = draft.clone();

    assert_eq!(draft.select_file(pdf()), FileSelection::NotAnImage);
    assert_eq!(draft, before);
    assert!(draft.file().is_none());
}

#[test]
fn select_file_replaces_prior_selection() {
    let mut draft = draft_with_file();
    let other = FileMeta {
        name: "second.png".to_owned(),
        content_type: "image/png".to_owned(),
    };
    assert_eq!(draft.select_file(other.clone()), FileSelection::Accepted);
    assert_eq!(draft.file(), Some(&other));
}

#[test]
fn select_file_requires_a_chosen_type() {
    let mut draft = UploadDraft::default();
    assert_eq!(draft.select_file(image()), FileSelection::WrongPhase);
    assert_eq!(draft, UploadDraft::Idle);
}

#[test]
fn clear_file_returns_to_type_selected() {
    let mut draft = draft_with_file();
    assert!(draft.clear_file());
    assert_eq!(
        draft,
        UploadDraft::TypeSelected {
            kind: AnalysisKind::WhitePixel
        }
    );
}

// =============================================================
// Submission
// =============================================================

#[test]
fn begin_submit_requires_a_selected_file() {
    let mut draft = UploadDraft::default();
    assert!(draft.begin_submit().is_none());

    draft.select_type(AnalysisKind::WhitePixel);
    assert!(draft.begin_submit().is_none());
}

#[test]
fn begin_submit_yields_exactly_one_request() {
    let mut draft = draft_with_file();

    assert_eq!(draft.begin_submit(), Some(AnalysisKind::WhitePixel));
    assert!(draft.is_submitting());

    // Repeated calls while in flight are no-ops.
    assert!(draft.begin_submit().is_none());
    assert!(draft.begin_submit().is_none());
    assert!(draft.is_submitting());
}

#[test]
fn file_selection_is_refused_while_submitting() {
    let mut draft = draft_with_file();
    draft.begin_submit();
    assert_eq!(draft.select_file(image()), FileSelection::WrongPhase);
}

#[test]
fn success_is_terminal_and_carries_the_identifier() {
    let mut draft = draft_with_file();
    draft.begin_submit();

    assert!(draft.resolve_success("a-42"));
    assert_eq!(
        draft,
        UploadDraft::Succeeded {
            analysis_id: "a-42".to_owned()
        }
    );
    assert!(!draft.is_open());
    assert!(draft.begin_submit().is_none());
}

#[test]
fn failure_retains_file_and_type() {
    let mut draft = draft_with_file();
    draft.begin_submit();

    assert!(draft.resolve_failure("Unsupported format"));
    assert_eq!(draft.error_message(), Some("Unsupported format"));
    assert_eq!(draft.kind(), Some(AnalysisKind::WhitePixel));
    assert_eq!(draft.file(), Some(&image()));
}

#[test]
fn resolutions_require_an_inflight_submission() {
    let mut draft = draft_with_file();
    assert!(!draft.resolve_success("a-1"));
    assert!(!draft.resolve_failure("boom"));
    assert_eq!(draft, draft_with_file());
}

#[test]
fn retry_returns_failed_draft_to_file_selected() {
    let mut draft = draft_with_file();
    draft.begin_submit();
    draft.resolve_failure("boom");

    assert!(draft.retry());
    assert_eq!(
        draft,
        UploadDraft::FileSelected {
            kind: AnalysisKind::WhitePixel,
            file: image()
        }
    );
    // And the retry can submit again.
    assert_eq!(draft.begin_submit(), Some(AnalysisKind::WhitePixel));
}

#[test]
fn failed_draft_accepts_a_replacement_file() {
    let mut draft = draft_with_file();
    draft.begin_submit();
    draft.resolve_failure("boom");

    assert_eq!(draft.select_file(image()), FileSelection::Accepted);
    assert!(draft.error_message().is_none());
}

// =============================================================
// Close
// =============================================================

#[test]
fn close_discards_the_draft() {
    let mut draft = draft_with_file();
    assert!(draft.close());
    assert_eq!(draft, UploadDraft::Idle);

    let mut draft = UploadDraft::default();
    draft.select_type(AnalysisKind::Bonnet);
    assert!(draft.close());
    assert_eq!(draft, UploadDraft::Idle);
}

#[test]
fn close_is_refused_while_submitting() {
    let mut draft = draft_with_file();
    draft.begin_submit();

    assert!(!draft.close());
    assert!(draft.is_submitting());
}
