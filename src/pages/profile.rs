//! Profile editor for the authenticated administrator.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::layout::AdminLayout;
use crate::components::toast::show_toast;
use crate::net::types::ProfilePayload;
use crate::state::session::Session;
use crate::state::toast::{ToastState, ToastVariant};
use crate::util::session_guard::install_unauth_redirect;

/// First name, last name, and email. Saving also refreshes the session user
/// so the sidebar name updates immediately.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    install_unauth_redirect(session, use_navigate());

    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let seeded = RwSignal::new(false);
    let saving = RwSignal::new(false);

    // Seed the form once from the session user.
    Effect::new(move || {
        let Some(user) = session.get().user else {
            return;
        };
        if seeded.get() {
            return;
        }
        seeded.set(true);
        first_name.set(user.first_name);
        last_name.set(user.last_name);
        email.set(user.email);
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let Some(token) = session.get_untracked().token else {
            return;
        };
        saving.set(true);

        let payload = ProfilePayload {
            first_name: first_name.get_untracked().trim().to_owned(),
            last_name: last_name.get_untracked().trim().to_owned(),
            email: email.get_untracked().trim().to_owned(),
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::update_profile(&token, &payload).await {
                Ok(()) => {
                    session.update(|s| {
                        if let Some(user) = &mut s.user {
                            user.first_name.clone_from(&payload.first_name);
                            user.last_name.clone_from(&payload.last_name);
                            user.email.clone_from(&payload.email);
                        }
                    });
                    show_toast(toasts, "Profile saved", "Profile updated successfully", ToastVariant::Info);
                }
                Err(e) => {
                    leptos::logging::warn!("profile update failed: {e}");
                    show_toast(toasts, "Error", "Failed to update profile", ToastVariant::Error);
                }
            }
            saving.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (token, payload);
    };

    view! {
        <AdminLayout>
            <div class="page-header">
                <h1>"Profile"</h1>
            </div>

            <form class="survey-form" on:submit=on_submit>
                <label class="survey-form__label">
                    "First Name"
                    <input
                        class="survey-form__input"
                        type="text"
                        prop:value=move || first_name.get()
                        on:input=move |ev| first_name.set(event_target_value(&ev))
                    />
                </label>

                <label class="survey-form__label">
                    "Last Name"
                    <input
                        class="survey-form__input"
                        type="text"
                        prop:value=move || last_name.get()
                        on:input=move |ev| last_name.set(event_target_value(&ev))
                    />
                </label>

                <label class="survey-form__label">
                    "Email"
                    <input
                        class="survey-form__input"
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>

                <div class="survey-form__actions">
                    <button class="btn btn--primary" type="submit" disabled=move || saving.get()>
                        {move || if saving.get() { "Saving..." } else { "Save Profile" }}
                    </button>
                </div>
            </form>
        </AdminLayout>
    }
}
