//! Top navigation bar shared by the dashboard and detail pages.

use leptos::prelude::*;

/// Navigation bar with the app logo on the left and page-specific actions on
/// the right.
#[component]
pub fn NavBar(children: Children) -> impl IntoView {
    view! {
        <nav class="dashboard-nav">
            <div class="nav-logo">"Car Analysis AI"</div>
            <div class="nav-actions">{children()}</div>
        </nav>
    }
}
