//! Dashboard page listing past analyses.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::history_card::HistoryCard;
use crate::components::nav_bar::NavBar;
use crate::net::api::ApiClient;
use crate::state::history::HistoryState;
use crate::state::toast::ToastState;

#[cfg(feature = "csr")]
use crate::state::toast::{ToastLevel, notify};

/// History browser. Fetches on mount; Refresh re-issues the fetch and is
/// safe to click while a previous load is pending — stale responses are
/// discarded by the sequence guard in [`HistoryState`].
#[component]
pub fn DashboardPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();
    let history = RwSignal::new(HistoryState::default());

    let load = {
        let api = api.clone();
        move || {
            let req = history.try_update(HistoryState::begin_load).unwrap_or(0);
            #[cfg(feature = "csr")]
            {
                let api = api.clone();
                leptos::task::spawn_local(async move {
                    match api.fetch_history().await {
                        Ok(entries) => {
                            history.try_update(|h| h.finish(req, entries));
                        }
                        Err(e) => {
                            log::error!("history fetch failed: {e}");
                            let applied = history
                                .try_update(|h| h.finish_error(req))
                                .unwrap_or(false);
                            if applied {
                                notify(
                                    toasts,
                                    ToastLevel::Error,
                                    "Failed to load analysis history",
                                );
                            }
                        }
                    }
                });
            }
            #[cfg(not(feature = "csr"))]
            {
                let _ = (req, &api, toasts);
            }
        }
    };

    load();
    let on_refresh = {
        let load = load.clone();
        move |_| load()
    };

    let go_home = {
        let navigate = navigate.clone();
        move |_| navigate("/", NavigateOptions::default())
    };
    let start_analysis = move |_| navigate("/", NavigateOptions::default());

    view! {
        <div>
            <NavBar>
                <button class="nav-button nav-button--secondary" on:click=go_home>
                    "Home"
                </button>
                <button class="nav-button" on:click=on_refresh>
                    "Refresh"
                </button>
            </NavBar>

            <div class="dashboard-container">
                <div class="dashboard-header">
                    <h1 class="dashboard-title">"Analysis History"</h1>
                    <p class="dashboard-subtitle">
                        "View all your previous image analyses and reports"
                    </p>
                </div>

                {move || {
                    let state = history.read();
                    if state.is_loading() {
                        view! {
                            <div class="loading-spinner">
                                <div class="spinner"></div>
                                <p class="loading-text">"Loading history..."</p>
                            </div>
                        }
                            .into_any()
                    } else if state.is_empty() {
                        view! {
                            <div class="empty-state">
                                <div class="empty-state__icon">"📊"</div>
                                <h3 class="empty-state__title">"No Analysis Yet"</h3>
                                <p class="empty-state__text">
                                    "Start by analyzing your first image from the home page"
                                </p>
                                <button class="nav-button" on:click=start_analysis.clone()>
                                    "Start Analysis"
                                </button>
                            </div>
                        }
                            .into_any()
                    } else {
                        view! {
                            <div class="history-grid">
                                {state
                                    .entries
                                    .iter()
                                    .cloned()
                                    .map(|entry| view! { <HistoryCard entry=entry/> })
                                    .collect::<Vec<_>>()}
                            </div>
                        }
                            .into_any()
                    }
                }}
            </div>
        </div>
    }
}
