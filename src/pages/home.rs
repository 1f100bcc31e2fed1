//! Landing page: analysis-type cards and the upload modal.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::upload_modal::UploadModal;
use crate::net::types::AnalysisKind;
use crate::state::upload::UploadDraft;

/// Landing page. Clicking a card opens the upload modal for that analysis
/// kind; the draft lives here so it is discarded on navigation away.
#[component]
pub fn HomePage() -> impl IntoView {
    let navigate = use_navigate();
    let draft = RwSignal::new(UploadDraft::default());

    let open_modal = Callback::new(move |kind: AnalysisKind| {
        draft.update(|d| {
            let _ = d.select_type(kind);
        });
    });

    view! {
        <div class="landing-hero">
            <div class="hero-content">
                <h1 class="hero-title">"Car Analysis AI"</h1>
                <p class="hero-subtitle">
                    "Advanced AI-powered image analysis for automotive inspection and diagnostics"
                </p>

                <div class="analysis-cards">
                    <AnalysisTypeCard kind=AnalysisKind::WhitePixel on_select=open_modal/>
                    <AnalysisTypeCard kind=AnalysisKind::Bonnet on_select=open_modal/>
                </div>

                <button
                    class="nav-button nav-button--secondary hero-history"
                    on:click=move |_| navigate("/dashboard", NavigateOptions::default())
                >
                    "View Analysis History"
                </button>
            </div>

            <Show when=move || draft.read().is_open()>
                <UploadModal draft=draft/>
            </Show>
        </div>
    }
}

/// One of the two workflow entry cards.
#[component]
fn AnalysisTypeCard(kind: AnalysisKind, on_select: Callback<AnalysisKind>) -> impl IntoView {
    view! {
        <div class="analysis-card" on:click=move |_| on_select.run(kind)>
            <span class="analysis-card__icon">{kind.icon()}</span>
            <h2 class="analysis-card__title">{kind.card_title()}</h2>
            <p class="analysis-card__description">{kind.card_description()}</p>
        </div>
    }
}
