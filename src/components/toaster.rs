//! Toast stack rendered top-right, above all routes.

use leptos::prelude::*;

use crate::state::toast::{ToastLevel, ToastState};

/// Renders the toast stack from context. Pages push toasts via
/// [`crate::state::toast::notify`]; clicking a toast dismisses it early.
#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toaster">
            <For
                each=move || toasts.read().toasts().to_vec()
                key=|toast| toast.id
                children=move |toast| {
                    let class = match toast.level {
                        ToastLevel::Success => "toast toast--success",
                        ToastLevel::Error => "toast toast--error",
                    };
                    let id = toast.id;
                    view! {
                        <div class=class on:click=move |_| {
                            toasts.update(|t| t.dismiss(id));
                        }>
                            {toast.message.clone()}
                        </div>
                    }
                }
            />
        </div>
    }
}
