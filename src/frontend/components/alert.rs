use leptos::prelude::*;

use crate::web::handlers::{Toast, ToastKind};

#[component]
fn ToastItem(toast: Toast) -> impl IntoView {
    let (icon, classes) = match toast.kind {
        ToastKind::Success => ("✓", "toast toast--success"),
        ToastKind::Error => ("✕", "toast toast--error"),
    };

    view! {
        <div class=classes role="status">
            <span class="toast__icon">{icon}</span>
            <span>{toast.message}</span>
        </div>
    }
}

/// Stack of transient notifications. Removal is driven by the page timers.
#[component]
pub fn ToastHost(toasts: Signal<Vec<Toast>>) -> impl IntoView {
    view! {
        <div id="toasts" class="toasts" aria-live="polite">
            <For
                each=move || toasts.get()
                key=|toast: &Toast| toast.id
                children=move |toast: Toast| view! { <ToastItem toast/> }
            />
        </div>
    }
}
