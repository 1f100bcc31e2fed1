//! Upload modal: dropzone, file selection, and submission.
//!
//! The modal drives a [`UploadDraft`] owned by the landing page. The state
//! machine sees file metadata only; the actual `web_sys::File` handle is kept
//! in a browser-gated stored value beside it and is read exactly once per
//! accepted submission.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::api::ApiClient;
use crate::net::types::AnalysisKind;
use crate::state::toast::ToastState;
use crate::state::upload::UploadDraft;

#[cfg(feature = "csr")]
use leptos_router::NavigateOptions;

#[cfg(feature = "csr")]
use crate::state::toast::{ToastLevel, notify};

#[cfg(feature = "csr")]
use crate::state::upload::{FileMeta, FileSelection};

/// Modal dialog for one in-flight analysis submission.
#[component]
pub fn UploadModal(draft: RwSignal<UploadDraft>) -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let drag_over = RwSignal::new(false);
    let file_input: NodeRef<leptos::html::Input> = NodeRef::new();

    #[cfg(feature = "csr")]
    let file_handle = StoredValue::new_local(None::<web_sys::File>);

    // Single admission path for both explicit selection and drop gestures.
    #[cfg(feature = "csr")]
    let accept_file = move |file: web_sys::File| {
        let meta = FileMeta {
            name: file.name(),
            content_type: file.type_(),
        };
        let outcome = draft
            .try_update(|d| d.select_file(meta))
            .unwrap_or(FileSelection::WrongPhase);
        match outcome {
            FileSelection::Accepted => file_handle.set_value(Some(file)),
            FileSelection::NotAnImage => {
                notify(toasts, ToastLevel::Error, "Please select an image file");
            }
            FileSelection::WrongPhase => {}
        }
    };

    let on_input_change = move |_| {
        #[cfg(feature = "csr")]
        if let Some(input) = file_input.get() {
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                accept_file(file);
            }
            // Allow re-selecting the same file to fire change again.
            input.set_value("");
        }
    };

    let on_dropzone_click = move |_| {
        #[cfg(feature = "csr")]
        if let Some(input) = file_input.get() {
            input.click();
        }
    };

    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        drag_over.set(false);
        #[cfg(feature = "csr")]
        if let Some(file) = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|files| files.get(0))
        {
            accept_file(file);
        }
    };

    let on_remove_file = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        draft.update(|d| {
            let _ = d.clear_file();
        });
        #[cfg(feature = "csr")]
        file_handle.set_value(None);
    };

    let on_close = move |_| {
        // Refused while submitting; there is no in-flight cancellation.
        draft.update(|d| {
            let _ = d.close();
        });
    };

    let on_submit = move |_| {
        // A failed draft retries with its retained file; begin_submit is the
        // structural guard against duplicate in-flight calls.
        let Some(kind) = draft
            .try_update(|d| {
                let _ = d.retry();
                d.begin_submit()
            })
            .flatten()
        else {
            return;
        };

        #[cfg(feature = "csr")]
        {
            let Some(file) = file_handle.get_value() else {
                draft.update(|d| {
                    let _ = d.resolve_failure("Please select a file first");
                });
                return;
            };
            let api = api.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match api.submit(kind, &file).await {
                    Ok(record) => {
                        let applied = draft
                            .try_update(|d| d.resolve_success(&record.id))
                            .unwrap_or(false);
                        if applied {
                            notify(
                                toasts,
                                ToastLevel::Success,
                                "Analysis completed successfully!",
                            );
                            navigate(
                                &format!("/analysis/{}", record.id),
                                NavigateOptions::default(),
                            );
                        }
                    }
                    Err(e) => {
                        log::error!("analysis submission failed: {e}");
                        let message = e.user_message("Analysis failed. Please try again.");
                        draft.try_update(|d| d.resolve_failure(message.clone()));
                        notify(toasts, ToastLevel::Error, message);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (kind, &api, &navigate, toasts);
        }
    };

    let title = move || {
        draft
            .read()
            .kind()
            .map(AnalysisKind::card_title)
            .unwrap_or_default()
    };
    let subtitle = move || {
        draft
            .read()
            .kind()
            .map(AnalysisKind::modal_subtitle)
            .unwrap_or_default()
    };
    let file_name = move || draft.read().file().map(|f| f.name.clone());
    let submitting = move || draft.read().is_submitting();
    let can_submit = move || draft.read().file().is_some() && !submitting();
    let error_message = move || draft.read().error_message().map(ToOwned::to_owned);

    let dropzone_class = move || {
        if drag_over.get() {
            "dropzone dropzone--drag-over"
        } else {
            "dropzone"
        }
    };

    view! {
        <div class="upload-overlay" on:click=on_close>
            <div class="upload-modal" on:click=move |ev| ev.stop_propagation()>
                <button
                    class="upload-modal__close"
                    prop:disabled=submitting
                    on:click=on_close
                >
                    "×"
                </button>

                <h2 class="upload-modal__title">{title}</h2>
                <p class="upload-modal__subtitle">{subtitle}</p>

                <div
                    class=dropzone_class
                    on:click=on_dropzone_click
                    on:drop=on_drop
                    on:dragover=move |ev: leptos::ev::DragEvent| {
                        ev.prevent_default();
                        drag_over.set(true);
                    }
                    on:dragleave=move |_| drag_over.set(false)
                >
                    <p class="dropzone__text">"Drag & drop your image here"</p>
                    <p class="dropzone__subtext">"or click to browse"</p>
                    <input
                        node_ref=file_input
                        class="dropzone__input"
                        type="file"
                        accept="image/*"
                        on:change=on_input_change
                    />
                </div>

                <Show when=move || file_name().is_some()>
                    <div class="selected-file">
                        <span class="selected-file__name">
                            {move || file_name().unwrap_or_default()}
                        </span>
                        <button class="selected-file__remove" on:click=on_remove_file>
                            "×"
                        </button>
                    </div>
                </Show>

                <Show when=move || error_message().is_some()>
                    <p class="upload-modal__error">
                        {move || error_message().unwrap_or_default()}
                    </p>
                </Show>

                <button
                    class="analyze-button"
                    prop:disabled=move || !can_submit()
                    on:click=on_submit
                >
                    {move || if submitting() { "Analyzing..." } else { "Analyze Image" }}
                </button>
            </div>
        </div>
    }
}
