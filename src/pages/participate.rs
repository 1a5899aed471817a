//! Public participation form reached through a tokenized link.
//!
//! SYSTEM CONTEXT
//! ==============
//! This route is unauthenticated and renders outside the admin layout. The
//! page load moves through `ParticipationPhase`: the token resolves to a
//! survey definition, answers accumulate in a draft, and submission ships
//! the full answer set followed by one upload per attached file. Upload
//! failures never fail an already-accepted submission.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::question_input::QuestionInput;
use crate::components::toast::{ToastHost, show_toast};
use crate::net::api::TokenLookupError;
use crate::net::types::ParticipationSurvey;
use crate::state::participation::{
    AnswerDraft, FileSelections, ParticipationPhase, build_answers, first_unanswered_required,
    validation_message,
};
use crate::state::toast::{ToastState, ToastVariant};

#[component]
pub fn ParticipatePage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    let params = use_params_map();
    let token = Memo::new(move |_| params.get().get("token").unwrap_or_default());

    let phase = RwSignal::new(ParticipationPhase::Loading);
    let survey = RwSignal::new(None::<ParticipationSurvey>);
    let error_message = RwSignal::new(String::new());
    let draft = RwSignal::new(AnswerDraft::default());
    let files = RwSignal::new(FileSelections::default());
    let resolved_for = RwSignal::new(None::<String>);

    Effect::new(move || {
        let token = token.get();
        if token.is_empty() {
            return;
        }
        if resolved_for.get().as_deref() == Some(token.as_str()) {
            return;
        }
        resolved_for.set(Some(token.clone()));

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::resolve_participation_token(&token).await {
                Ok(resolved) => {
                    survey.set(Some(resolved));
                    phase.set(ParticipationPhase::Ready);
                }
                Err(TokenLookupError::NotFound) => {
                    error_message
                        .set("This survey link is invalid or has expired.".to_owned());
                    phase.set(ParticipationPhase::Error);
                }
                Err(TokenLookupError::BadStatus(status)) => {
                    // The server answered and rejected the lookup; showing
                    // the fixture here would invite answers against
                    // question ids that do not exist.
                    leptos::logging::warn!("token lookup failed: {status}");
                    error_message.set("Failed to load survey. Please try again later.".to_owned());
                    phase.set(ParticipationPhase::Error);
                }
                Err(TokenLookupError::Transport(e)) => {
                    // Backend unreachable: degrade to the fixture survey
                    // like the admin screens.
                    leptos::logging::warn!("token lookup failed: {e}");
                    survey.set(Some(crate::net::fallback::participation_survey()));
                    phase.set(ParticipationPhase::Ready);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = token;
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if phase.get_untracked() != ParticipationPhase::Ready {
            return;
        }
        let Some(current) = survey.get_untracked() else {
            return;
        };

        // Required-field check happens before any network traffic; only the
        // first unmet question is reported.
        if let Some(missing) = first_unanswered_required(&current.questions, &draft.get_untracked())
        {
            show_toast(toasts, "Missing answer", &validation_message(missing), ToastVariant::Error);
            return;
        }

        phase.set(ParticipationPhase::Submitting);
        let customer_token = token.get_untracked();
        let payload = crate::net::types::ResponsePayload {
            customer_token: customer_token.clone(),
            answers: build_answers(&current.questions, &draft.get_untracked()),
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::submit_response(&payload).await {
                Ok(()) => {
                    // Uploads ride separately; the answer set is already
                    // accepted, so a failed upload only gets logged.
                    let attached = files.get_untracked();
                    for (question_id, file) in attached.iter() {
                        if let Err(e) = crate::net::api::upload_answer_file(
                            &customer_token,
                            question_id,
                            file,
                        )
                        .await
                        {
                            leptos::logging::warn!(
                                "file upload failed for question {question_id}: {e}"
                            );
                        }
                    }
                    phase.set(ParticipationPhase::Submitted);
                }
                Err(e) => {
                    leptos::logging::warn!("response submit failed: {e}");
                    show_toast(toasts, "Error", "Failed to submit your response", ToastVariant::Error);
                    phase.set(ParticipationPhase::Ready);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (customer_token, payload);
    };

    view! {
        <div class="participate-page">
            {move || match phase.get() {
                ParticipationPhase::Loading => view! {
                    <div class="participate-page__card">
                        <p class="participate-page__loading">"Loading survey..."</p>
                    </div>
                }
                .into_any(),
                ParticipationPhase::Error => view! {
                    <div class="participate-page__card participate-page__card--error">
                        <h1>"Survey Unavailable"</h1>
                        <p>{error_message.get()}</p>
                    </div>
                }
                .into_any(),
                ParticipationPhase::Submitted => view! {
                    <div class="participate-page__card participate-page__card--done">
                        <h1>"Thank You!"</h1>
                        <p>"Your response has been recorded."</p>
                    </div>
                }
                .into_any(),
                ParticipationPhase::Ready | ParticipationPhase::Submitting => {
                    let submitting = phase.get() == ParticipationPhase::Submitting;
                    survey
                        .get()
                        .map(|current| {
                            view! {
                                <form class="participate-page__card" on:submit=on_submit>
                                    <h1>{current.title.clone()}</h1>
                                    <p class="participate-page__description">
                                        {current.description.clone()}
                                    </p>

                                    {current
                                        .questions
                                        .iter()
                                        .cloned()
                                        .map(|question| {
                                            view! {
                                                <div class="participate-page__question">
                                                    <label class="participate-page__question-label">
                                                        {question.question_text.clone()}
                                                        {question.is_required.then_some(" *")}
                                                    </label>
                                                    <QuestionInput
                                                        question=question
                                                        draft=draft
                                                        files=files
                                                    />
                                                </div>
                                            }
                                        })
                                        .collect::<Vec<_>>()}

                                    <button
                                        class="btn btn--primary participate-page__submit"
                                        type="submit"
                                        disabled=submitting
                                    >
                                        {if submitting { "Submitting..." } else { "Submit Response" }}
                                    </button>
                                </form>
                            }
                        })
                        .into_any()
                }
            }}
            <ToastHost/>
        </div>
    }
}
