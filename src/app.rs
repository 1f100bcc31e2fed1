//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toaster::Toaster;
use crate::net::api::ApiClient;
use crate::pages::{
    analysis_detail::AnalysisDetailPage, dashboard::DashboardPage, home::HomePage,
};
use crate::state::toast::ToastState;

/// Backend origin for the API client. The client is served from the same
/// origin as the backend, so relative URLs resolve correctly; deployments
/// with a separate API host construct the client with that host instead.
const BACKEND_BASE_URL: &str = "";

/// Root application component.
///
/// Provides the API client and toast state as context and sets up
/// client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(ApiClient::new(BACKEND_BASE_URL));
    provide_context(RwSignal::new(ToastState::default()));

    view! {
        <Title text="Car Analysis AI"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=(StaticSegment("analysis"), ParamSegment("id")) view=AnalysisDetailPage/>
            </Routes>
        </Router>

        <Toaster/>
    }
}
