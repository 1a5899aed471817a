//! Survey creation form.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::layout::AdminLayout;
use crate::components::toast::show_toast;
use crate::net::types::SurveyPayload;
use crate::state::session::Session;
use crate::state::toast::{ToastState, ToastVariant};
use crate::util::session_guard::install_unauth_redirect;

/// New-survey form. A successful create forwards to the edit screen so
/// questions can be added immediately.
#[component]
pub fn SurveyCreatePage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();
    install_unauth_redirect(session, navigate.clone());

    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let is_active = RwSignal::new(true);
    let submitting = RwSignal::new(false);

    let can_submit = move || !submitting.get() && !title.get().trim().is_empty();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !can_submit() {
            return;
        }
        let Some(token) = session.get_untracked().token else {
            return;
        };
        submitting.set(true);

        let payload = SurveyPayload {
            title: title.get_untracked().trim().to_owned(),
            description: description.get_untracked().trim().to_owned(),
            is_active: is_active.get_untracked(),
        };
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::create_survey(&token, &payload).await {
                    Ok(created) => {
                        show_toast(toasts, "Survey created", "Survey created successfully", ToastVariant::Info);
                        navigate(
                            &format!("/surveys/{}/edit", created.id),
                            NavigateOptions::default(),
                        );
                    }
                    Err(e) => {
                        leptos::logging::warn!("survey create failed: {e}");
                        show_toast(toasts, "Error", "Failed to create survey", ToastVariant::Error);
                        submitting.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (token, payload, &navigate);
    };

    view! {
        <AdminLayout>
            <div class="page-header">
                <h1>"Create Survey"</h1>
            </div>

            <form class="survey-form" on:submit=on_submit>
                <label class="survey-form__label">
                    "Title *"
                    <input
                        class="survey-form__input"
                        type="text"
                        placeholder="Survey title"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                </label>

                <label class="survey-form__label">
                    "Description"
                    <textarea
                        class="survey-form__input survey-form__input--multiline"
                        rows="4"
                        placeholder="What is this survey about?"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                </label>

                <label class="survey-form__checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || is_active.get()
                        on:change=move |ev| is_active.set(event_target_checked(&ev))
                    />
                    "Active (accepting responses)"
                </label>

                <div class="survey-form__actions">
                    <button class="btn btn--primary" type="submit" disabled=move || !can_submit()>
                        {move || if submitting.get() { "Creating..." } else { "Create Survey" }}
                    </button>
                    <a class="btn" href="/surveys">
                        "Cancel"
                    </a>
                </div>
            </form>
        </AdminLayout>
    }
}
