//! Detail page for one analysis record.
//!
//! Fetches the routed identifier on mount and renders exhaustively over the
//! record's variant. Any fetch failure — not found, transport, or a payload
//! that violates the data contract — aborts to the dashboard with a toast;
//! a partial detail view is never rendered.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::nav_bar::NavBar;
use crate::net::api::ApiClient;
use crate::net::types::{AnalysisRecord, AnalysisReport, BonnetReport, WhitePixelReport};
use crate::state::detail::DetailState;
use crate::state::toast::ToastState;

#[cfg(feature = "csr")]
use crate::state::toast::{ToastLevel, notify};
use crate::util::format::{format_timestamp, group_thousands};

/// Analysis detail viewer.
#[component]
pub fn AnalysisDetailPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();
    let params = use_params_map();
    let detail = RwSignal::new(DetailState::default());

    Effect::new({
        let api = api.clone();
        let navigate = navigate.clone();
        move || {
            // No identifier: render nothing and fetch nothing.
            let Some(id) = params.read().get("id") else {
                detail.update(DetailState::invalidate);
                return;
            };
            let req = detail.try_update(DetailState::begin_fetch).unwrap_or(0);

            #[cfg(feature = "csr")]
            {
                let api = api.clone();
                let navigate = navigate.clone();
                leptos::task::spawn_local(async move {
                    match api.fetch_analysis(&id).await {
                        Ok(record) => {
                            detail.try_update(|d| d.finish(req, record));
                        }
                        Err(e) => {
                            log::error!("analysis fetch failed for {id}: {e}");
                            let applied =
                                detail.try_update(|d| d.fail(req)).unwrap_or(false);
                            if applied {
                                notify(
                                    toasts,
                                    ToastLevel::Error,
                                    "Failed to load analysis details",
                                );
                                navigate("/dashboard", NavigateOptions::default());
                            }
                        }
                    }
                });
            }
            #[cfg(not(feature = "csr"))]
            {
                let _ = (req, &id, &api, &navigate, toasts);
            }
        }
    });

    // Responses landing after unmount are discarded.
    on_cleanup(move || {
        detail.try_update(DetailState::invalidate);
    });

    let go_dashboard = move |_| navigate("/dashboard", NavigateOptions::default());
    let go_dashboard_nav = go_dashboard.clone();

    view! {
        <div>
            <NavBar>
                <button class="nav-button nav-button--secondary" on:click=go_dashboard_nav.clone()>
                    "View All Analyses"
                </button>
            </NavBar>

            <div class="detail-container">
                <button class="back-button" on:click=go_dashboard.clone()>
                    "← Back"
                </button>

                {move || {
                    let state = detail.read();
                    if state.loading {
                        view! {
                            <div class="loading-spinner">
                                <div class="spinner"></div>
                                <p class="loading-text">"Loading analysis..."</p>
                            </div>
                        }
                            .into_any()
                    } else if let Some(record) = state.record.clone() {
                        view! { <DetailCard record=record/> }.into_any()
                    } else {
                        ().into_any()
                    }
                }}
            </div>
        </div>
    }
}

/// The full record card: shared metadata header plus variant sections.
#[component]
fn DetailCard(record: AnalysisRecord) -> impl IntoView {
    let kind = record.kind();
    let AnalysisRecord {
        id,
        image_name,
        timestamp,
        report,
    } = record;
    let date = format_timestamp(&timestamp);

    view! {
        <div class="detail-card">
            <div class="detail-card__header">
                <h1 class="detail-card__title">{kind.detail_title()}</h1>
                <div class="detail-meta">
                    <MetaItem label="Image Name" value=image_name/>
                    <MetaItem label="Analysis Date" value=date/>
                    <MetaItem label="Analysis ID" value=id/>
                </div>
            </div>

            {match report {
                AnalysisReport::WhitePixel(report) => {
                    view! { <WhitePixelSections report=report/> }.into_any()
                }
                AnalysisReport::Bonnet(report) => {
                    view! { <BonnetSections report=report/> }.into_any()
                }
            }}
        </div>
    }
}

#[component]
fn MetaItem(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="meta-item">
            <span class="meta-item__label">{label}</span>
            <span class="meta-item__value">{value}</span>
        </div>
    }
}

#[component]
fn InfoCard(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="info-card">
            <div class="info-card__label">{label}</div>
            <div class="info-card__value">{value}</div>
        </div>
    }
}

#[component]
fn WhitePixelSections(report: WhitePixelReport) -> impl IntoView {
    view! {
        <div class="detail-section">
            <h2 class="section-title">"📊 Pixel Analysis"</h2>
            <div class="info-grid">
                <InfoCard label="White Pixels" value=group_thousands(report.white_pixel_count)/>
                <InfoCard label="Total Pixels" value=group_thousands(report.total_pixels)/>
                <InfoCard label="Percentage" value=format!("{}%", report.percentage)/>
            </div>
        </div>

        <div class="detail-section">
            <h2 class="section-title">"📝 Analysis Result"</h2>
            <div class="report-text">{report.analysis_result}</div>
        </div>
    }
}

#[component]
fn BonnetSections(report: BonnetReport) -> impl IntoView {
    let issues = report.issues;
    let recommendations = report.recommendations;

    view! {
        <div class="detail-section">
            <h2 class="section-title">"🎨 Car Information"</h2>
            <div class="info-grid">
                <InfoCard label="Car Color" value=report.car_color/>
                <InfoCard label="Condition" value=report.condition/>
                <InfoCard label="Recommendation" value=report.wash_or_repaint/>
            </div>
        </div>

        // Each list section is independently suppressed when empty.
        <Show when={
            let issues = issues.clone();
            move || !issues.is_empty()
        }>
            <div class="detail-section">
                <h2 class="section-title">"⚠️ Identified Issues"</h2>
                <ul class="issue-list">
                    {issues
                        .clone()
                        .into_iter()
                        .map(|issue| view! { <li class="issue-list__item">{issue}</li> })
                        .collect::<Vec<_>>()}
                </ul>
            </div>
        </Show>

        <Show when={
            let recommendations = recommendations.clone();
            move || !recommendations.is_empty()
        }>
            <div class="detail-section">
                <h2 class="section-title">"✓ Recommendations"</h2>
                <ul class="recommendation-list">
                    {recommendations
                        .clone()
                        .into_iter()
                        .map(|rec| {
                            view! { <li class="recommendation-list__item">{rec}</li> }
                        })
                        .collect::<Vec<_>>()}
                </ul>
            </div>
        </Show>

        <div class="detail-section">
            <h2 class="section-title">"📄 Detailed Diagnostic Report"</h2>
            <div class="report-text">{report.detailed_report}</div>
        </div>
    }
}
