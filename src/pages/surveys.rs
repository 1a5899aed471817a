//! Survey list with per-card activation toggle.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::layout::AdminLayout;
use crate::components::survey_card::SurveyCard;
use crate::components::toast::show_toast;
use crate::net::types::{Survey, SurveyPayload};
use crate::state::session::Session;
use crate::state::toast::{ToastState, ToastVariant};
use crate::util::session_guard::install_unauth_redirect;

#[component]
pub fn SurveysPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    install_unauth_redirect(session, use_navigate());

    let surveys = RwSignal::new(None::<Vec<Survey>>);
    let toggling = RwSignal::new(None::<i64>);
    let loaded = RwSignal::new(false);

    Effect::new(move || {
        let Some(token) = session.get().token else {
            return;
        };
        if loaded.get() {
            return;
        }
        loaded.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_surveys(&token).await {
                Ok(list) => surveys.set(Some(list)),
                Err(e) => {
                    leptos::logging::warn!("survey list failed: {e}");
                    surveys.set(Some(crate::net::fallback::surveys()));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = token;
    });

    // Flip one survey's active flag; only the toggled entry changes.
    let on_toggle = Callback::new(move |id: i64| {
        let Some(token) = session.get_untracked().token else {
            return;
        };
        let Some(target) = surveys
            .get_untracked()
            .and_then(|list| list.into_iter().find(|s| s.id == id))
        else {
            return;
        };
        let payload = SurveyPayload {
            title: target.title,
            description: target.description,
            is_active: !target.is_active,
        };
        toggling.set(Some(id));

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::update_survey(&token, id, &payload).await {
                Ok(updated) => {
                    surveys.update(|list| {
                        if let Some(list) = list {
                            if let Some(entry) = list.iter_mut().find(|s| s.id == id) {
                                entry.is_active = updated.is_active;
                            }
                        }
                    });
                    let detail = if updated.is_active {
                        "Survey activated"
                    } else {
                        "Survey deactivated"
                    };
                    show_toast(toasts, "Survey updated", detail, ToastVariant::Info);
                }
                Err(e) => {
                    leptos::logging::warn!("survey toggle failed: {e}");
                    show_toast(toasts, "Error", "Failed to update survey", ToastVariant::Error);
                }
            }
            toggling.set(None);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (token, payload);
    });

    view! {
        <AdminLayout>
            <div class="page-header">
                <h1>"Surveys"</h1>
                <a class="btn btn--primary" href="/surveys/create">
                    "+ Create Survey"
                </a>
            </div>

            {move || match surveys.get() {
                None => view! {
                    <div class="survey-grid survey-grid--loading">
                        <div class="skeleton-card"></div>
                        <div class="skeleton-card"></div>
                    </div>
                }
                .into_any(),
                Some(list) if list.is_empty() => view! {
                    <p class="survey-grid__empty">
                        "No surveys yet. Create your first survey to get started."
                    </p>
                }
                .into_any(),
                Some(list) => view! {
                    <div class="survey-grid">
                        {list
                            .into_iter()
                            .map(|survey| {
                                let busy = toggling.get() == Some(survey.id);
                                view! { <SurveyCard survey=survey on_toggle=on_toggle busy=busy/> }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                }
                .into_any(),
            }}
        </AdminLayout>
    }
}
