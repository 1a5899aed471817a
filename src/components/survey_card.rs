//! Card for one survey in the survey list grid.

use leptos::prelude::*;

use crate::net::types::Survey;

/// A survey card with status badge, activate toggle, and navigation links.
///
/// Toggling reports the survey id upward; the list owns the update so only
/// the toggled survey's state changes.
#[component]
pub fn SurveyCard(survey: Survey, on_toggle: Callback<i64>, #[prop(optional)] busy: bool) -> impl IntoView {
    let id = survey.id;
    let badge = if survey.is_active {
        view! { <span class="badge badge--active">"Active"</span> }.into_any()
    } else {
        view! { <span class="badge badge--inactive">"Inactive"</span> }.into_any()
    };
    let toggle_label = if survey.is_active { "Deactivate" } else { "Activate" };
    let response_count = survey.response_count.unwrap_or(0);

    view! {
        <div class="survey-card">
            <div class="survey-card__header">
                <span class="survey-card__title">{survey.title}</span>
                {badge}
            </div>
            <p class="survey-card__description">{survey.description}</p>
            <div class="survey-card__meta">
                <span>{format!("{response_count} responses")}</span>
            </div>
            <div class="survey-card__actions">
                <a class="btn btn--ghost" href=format!("/responses/{id}")>
                    "View Responses"
                </a>
                <a class="btn btn--ghost" href=format!("/analytics/{id}")>
                    "Analytics"
                </a>
                <a class="btn" href=format!("/surveys/{id}/edit")>
                    "Edit"
                </a>
                <button
                    class="btn btn--outline"
                    disabled=busy
                    on:click=move |_| on_toggle.run(id)
                >
                    {toggle_label}
                </button>
            </div>
        </div>
    }
}
