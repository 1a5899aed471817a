//! Per-survey response viewer.

#[cfg(test)]
#[path = "responses_test.rs"]
mod responses_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::layout::AdminLayout;
use crate::components::toast::show_toast;
use crate::net::types::{QuestionType, ResponseAnswer, SurveyResponse};
use crate::state::session::Session;
use crate::state::toast::{ToastState, ToastVariant};
use crate::util::download::{export_filename, save_blob};
use crate::util::session_guard::install_unauth_redirect;

#[component]
pub fn ResponsesPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    install_unauth_redirect(session, use_navigate());

    let params = use_params_map();
    let survey_id = Memo::new(move |_| {
        params
            .get()
            .get("surveyId")
            .and_then(|raw| raw.parse::<i64>().ok())
    });

    let responses = RwSignal::new(None::<Vec<SurveyResponse>>);
    let loaded_for = RwSignal::new(None::<i64>);
    let exporting = RwSignal::new(false);

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
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_responses(&token, id).await {
                Ok(list) => responses.set(Some(list)),
                Err(e) => {
                    leptos::logging::warn!("response list failed: {e}");
                    responses.set(Some(crate::net::fallback::responses()));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = token;
    });

    let on_export = move |_| {
        let Some(id) = survey_id.get_untracked() else {
            return;
        };
        let Some(token) = session.get_untracked().token else {
            return;
        };
        exporting.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::export_responses(&token, id, true).await {
                Ok(bytes) => save_blob(&bytes, &export_filename(id, "responses")),
                Err(e) => {
                    leptos::logging::warn!("export failed: {e}");
                    show_toast(toasts, "Error", "Failed to export responses", ToastVariant::Error);
                }
            }
            exporting.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (token, id);
    };

    view! {
        <AdminLayout>
            <div class="page-header">
                <h1>"Responses"</h1>
                <div class="page-header__actions">
                    <button class="btn btn--outline" disabled=move || exporting.get() on:click=on_export>
                        {move || if exporting.get() { "Exporting..." } else { "Export CSV" }}
                    </button>
                    <a class="btn btn--ghost" href="/surveys">
                        "Back to Surveys"
                    </a>
                </div>
            </div>

            {move || match responses.get() {
                None => view! {
                    <div class="response-list response-list--loading">
                        <div class="skeleton-card"></div>
                        <div class="skeleton-card"></div>
                    </div>
                }
                .into_any(),
                Some(list) if list.is_empty() => view! {
                    <p class="response-list__empty">"No responses received yet."</p>
                }
                .into_any(),
                Some(list) => view! {
                    <div class="response-summary">
                        <div class="stat-card">
                            <span class="stat-card__value">{list.len()}</span>
                            <span class="stat-card__label">"Total Responses"</span>
                        </div>
                        <div class="stat-card">
                            <span class="stat-card__value">
                                {latest_submission(&list).unwrap_or_else(|| "-".to_owned())}
                            </span>
                            <span class="stat-card__label">"Latest Response"</span>
                        </div>
                    </div>

                    <div class="response-list">
                        {list
                            .into_iter()
                            .map(|response| view! { <ResponseCard response=response/> })
                            .collect::<Vec<_>>()}
                    </div>
                }
                .into_any(),
            }}
        </AdminLayout>
    }
}

#[component]
fn ResponseCard(response: SurveyResponse) -> impl IntoView {
    let respondent = response
        .respondent_name
        .filter(|n| !n.is_empty())
        .or(response.respondent_email.filter(|e| !e.is_empty()))
        .unwrap_or_else(|| "Anonymous".to_owned());

    view! {
        <div class="response-card">
            <div class="response-card__header">
                <span class="response-card__respondent">{respondent}</span>
                <span class="response-card__timestamp">{response.submitted_at}</span>
            </div>
            <dl class="response-card__answers">
                {response
                    .answers
                    .into_iter()
                    .map(|answer| {
                        view! {
                            <div class="response-card__answer">
                                <dt>{answer.question.clone()}</dt>
                                <dd>{render_answer(&answer)}</dd>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </dl>
        </div>
    }
}

/// Answer display text. Ratings render as filled/hollow stars; everything
/// else is shown verbatim, with a dash for blanks.
fn render_answer(answer: &ResponseAnswer) -> String {
    if answer.answer.trim().is_empty() {
        return "-".to_owned();
    }
    if answer.question_type == QuestionType::Rating {
        if let Ok(rating) = answer.answer.trim().parse::<usize>() {
            if (1..=5).contains(&rating) {
                return format!("{}{}", "★".repeat(rating), "☆".repeat(5 - rating));
            }
        }
    }
    answer.answer.clone()
}

/// Most recent submission timestamp; ISO-8601 strings order lexically.
fn latest_submission(responses: &[SurveyResponse]) -> Option<String> {
    responses
        .iter()
        .map(|r| r.submitted_at.clone())
        .max()
}
