//! Transient toast notifications.

use leptos::prelude::*;

use crate::state::toast::{ToastState, ToastVariant};

#[cfg(feature = "hydrate")]
const AUTO_DISMISS_MS: u64 = 4000;

/// Push a toast and schedule its auto-dismissal.
pub fn show_toast(toasts: RwSignal<ToastState>, title: &str, description: &str, variant: ToastVariant) {
    let mut id = 0;
    toasts.update(|t| id = t.push(title, description, variant));

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(AUTO_DISMISS_MS)).await;
        toasts.update(|t| t.dismiss(id));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}

/// Fixed-position stack rendering the active toasts.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-host">
            {move || {
                toasts
                    .get()
                    .toasts
                    .into_iter()
                    .map(|toast| {
                        let class = match toast.variant {
                            ToastVariant::Info => "toast",
                            ToastVariant::Error => "toast toast--error",
                        };
                        let id = toast.id;
                        view! {
                            <div class=class on:click=move |_| toasts.update(|t| t.dismiss(id))>
                                <span class="toast__title">{toast.title}</span>
                                <span class="toast__description">{toast.description}</span>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
