//! Summary card for one history entry.

use leptos::prelude::*;

use crate::net::types::AnalysisSummary;
use crate::util::format::format_timestamp;

/// A clickable card for one past analysis, navigating to its detail page.
#[component]
pub fn HistoryCard(entry: AnalysisSummary) -> impl IntoView {
    let href = format!("/analysis/{}", entry.id);
    let kind = entry.analysis_type;
    let date = format_timestamp(&entry.timestamp);

    view! {
        <a class="history-card" href=href>
            <div class="history-card__header">
                <span class="history-card__type">
                    {format!("{} {}", kind.icon(), kind.short_label())}
                </span>
                <span class="history-card__date">{date}</span>
            </div>
            <div class="history-card__content">
                <h3 class="history-card__name">{entry.image_name}</h3>
                <p class="history-card__summary">{entry.summary}</p>
            </div>
        </a>
    }
}
