//! Survey edit screen: metadata form plus the question builder.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::layout::AdminLayout;
use crate::components::question_builder::QuestionBuilder;
use crate::components::toast::show_toast;
use crate::net::types::SurveyPayload;
use crate::state::session::Session;
use crate::state::toast::{ToastState, ToastVariant};
use crate::util::session_guard::install_unauth_redirect;

/// Edit an existing survey. The metadata form and the question list are
/// saved independently; a failed survey fetch bounces back to the list.
#[component]
pub fn SurveyEditPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();
    install_unauth_redirect(session, navigate.clone());

    let params = use_params_map();
    let survey_id = Memo::new(move |_| {
        params
            .get()
            .get("id")
            .and_then(|raw| raw.parse::<i64>().ok())
    });

    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let is_active = RwSignal::new(false);
    let loaded_for = RwSignal::new(None::<i64>);
    let ready = RwSignal::new(false);
    let saving = RwSignal::new(false);

    {
        let navigate = navigate.clone();
        Effect::new(move || {
            let Some(id) = survey_id.get() else {
                return;
            };
            let Some(token) = session.get().token else {
                return;
            };
            if loaded_for.get() == Some(id) {
                return;
            }
            loaded_for.set(Some(id));

            #[cfg(feature = "hydrate")]
            {
                let navigate = navigate.clone();
                leptos::task::spawn_local(async move {
                    match crate::net::api::fetch_survey(&token, id).await {
                        Ok(survey) => {
                            title.set(survey.title);
                            description.set(survey.description);
                            is_active.set(survey.is_active);
                            ready.set(true);
                        }
                        Err(e) => {
                            leptos::logging::warn!("survey fetch failed: {e}");
                            show_toast(toasts, "Error", "Survey not found", ToastVariant::Error);
                            navigate("/surveys", NavigateOptions::default());
                        }
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            let _ = (token, &navigate);
        });
    }

    let can_save = move || ready.get() && !saving.get() && !title.get().trim().is_empty();

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !can_save() {
            return;
        }
        let Some(id) = survey_id.get_untracked() else {
            return;
        };
        let Some(token) = session.get_untracked().token else {
            return;
        };
        saving.set(true);

        let payload = SurveyPayload {
            title: title.get_untracked().trim().to_owned(),
            description: description.get_untracked().trim().to_owned(),
            is_active: is_active.get_untracked(),
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::update_survey(&token, id, &payload).await {
                Ok(_) => {
                    show_toast(toasts, "Survey saved", "Changes saved successfully", ToastVariant::Info);
                }
                Err(e) => {
                    leptos::logging::warn!("survey update failed: {e}");
                    show_toast(toasts, "Error", "Failed to save survey", ToastVariant::Error);
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
                <h1>"Edit Survey"</h1>
                <a class="btn btn--ghost" href="/surveys">
                    "Back to Surveys"
                </a>
            </div>

            <form class="survey-form" on:submit=on_save>
                <label class="survey-form__label">
                    "Title *"
                    <input
                        class="survey-form__input"
                        type="text"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                </label>

                <label class="survey-form__label">
                    "Description"
                    <textarea
                        class="survey-form__input survey-form__input--multiline"
                        rows="4"
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
                    <button class="btn btn--primary" type="submit" disabled=move || !can_save()>
                        {move || if saving.get() { "Saving..." } else { "Save Changes" }}
                    </button>
                </div>
            </form>

            {move || {
                survey_id
                    .get()
                    .map(|id| view! { <QuestionBuilder survey_id=id/> })
            }}
        </AdminLayout>
    }
}
