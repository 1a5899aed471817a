//! Question builder: list, inline editor, and option sub-editor for a
//! survey's questions.

use leptos::prelude::*;

use crate::components::toast::show_toast;
use crate::net::types::{Question, QuestionType};
use crate::state::question_editor::{QuestionDraft, apply_saved, remove_question};
use crate::state::session::Session;
use crate::state::toast::{ToastState, ToastVariant};

/// Question list with create/edit/delete. Saving decides create-vs-update
/// by identifier presence; questions are managed independently of the
/// owning survey's own edit form.
#[component]
pub fn QuestionBuilder(survey_id: i64) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let questions = RwSignal::new(None::<Vec<Question>>);
    let editing = RwSignal::new(None::<QuestionDraft>);
    let loaded_for = RwSignal::new(None::<i64>);

    // Fetch once per survey; falls back to fixture data when unreachable.
    Effect::new(move || {
        let Some(token) = session.get().token else {
            return;
        };
        if loaded_for.get() == Some(survey_id) {
            return;
        }
        loaded_for.set(Some(survey_id));

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_questions(&token, survey_id).await {
                Ok(list) => questions.set(Some(list)),
                Err(e) => {
                    leptos::logging::warn!("question list failed: {e}");
                    questions.set(Some(crate::net::fallback::questions()));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = token;
    });

    let on_add = move |_| {
        let next_order = questions
            .get_untracked()
            .map_or(1, |list| i64::try_from(list.len()).unwrap_or(0) + 1);
        editing.set(Some(QuestionDraft::new(next_order)));
    };

    let on_cancel = Callback::new(move |()| editing.set(None));

    let on_save = Callback::new(move |draft: QuestionDraft| {
        let Some(token) = session.get_untracked().token else {
            return;
        };
        let payload = draft.to_payload(survey_id);
        let is_new = draft.is_new();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::save_question(&token, draft.id, &payload).await {
                Ok(saved) => {
                    questions.update(|list| {
                        if let Some(list) = list {
                            apply_saved(list, saved);
                        }
                    });
                    editing.set(None);
                    let detail = if is_new {
                        "Question added successfully"
                    } else {
                        "Question updated successfully"
                    };
                    show_toast(toasts, "Question saved", detail, ToastVariant::Info);
                }
                Err(e) => {
                    leptos::logging::warn!("question save failed: {e}");
                    show_toast(toasts, "Error", "Failed to save question", ToastVariant::Error);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (token, payload, is_new);
    });

    let on_delete = Callback::new(move |id: i64| {
        let Some(token) = session.get_untracked().token else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_question(&token, id).await {
                Ok(()) => {
                    questions.update(|list| {
                        if let Some(list) = list {
                            remove_question(list, id);
                        }
                    });
                    show_toast(toasts, "Question deleted", "Question removed successfully", ToastVariant::Info);
                }
                Err(e) => {
                    leptos::logging::warn!("question delete failed: {e}");
                    show_toast(toasts, "Error", "Failed to delete question", ToastVariant::Error);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (token, id);
    });

    view! {
        <div class="question-builder">
            <div class="question-builder__header">
                <h2>"Questions"</h2>
                <button class="btn btn--primary" on:click=on_add>
                    "+ Add Question"
                </button>
            </div>

            {move || match questions.get() {
                None => view! {
                    <div class="question-builder__skeleton">
                        <div class="skeleton-row"></div>
                        <div class="skeleton-row"></div>
                    </div>
                }
                .into_any(),
                Some(list) if list.is_empty() => view! {
                    <p class="question-builder__empty">
                        "No questions added yet. Click \"Add Question\" to get started."
                    </p>
                }
                .into_any(),
                Some(list) => list
                    .into_iter()
                    .map(|question| {
                        let type_label = question.question_type.label();
                        let required = question.is_required;
                        let id = question.id;
                        let edit_source = question.clone();
                        view! {
                            <div class="question-builder__item">
                                <div class="question-builder__item-body">
                                    <h4>{question.question_text.clone()}</h4>
                                    <p class="question-builder__item-meta">
                                        {type_label}
                                        {required.then_some(" (Required)")}
                                    </p>
                                </div>
                                <div class="question-builder__item-actions">
                                    <button
                                        class="btn btn--outline"
                                        on:click=move |_| {
                                            editing.set(Some(QuestionDraft::from_question(&edit_source)));
                                        }
                                    >
                                        "Edit"
                                    </button>
                                    {id
                                        .map(|id| {
                                            view! {
                                                <button
                                                    class="btn btn--outline btn--danger"
                                                    on:click=move |_| on_delete.run(id)
                                                >
                                                    "Delete"
                                                </button>
                                            }
                                        })}
                                </div>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
                    .into_any(),
            }}

            <Show when=move || editing.get().is_some()>
                <QuestionEditor editing=editing on_save=on_save on_cancel=on_cancel/>
            </Show>
        </div>
    }
}

/// Inline editor for one question draft, including the option sub-editor
/// shown for choice-bearing types.
#[component]
fn QuestionEditor(
    editing: RwSignal<Option<QuestionDraft>>,
    on_save: Callback<QuestionDraft>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let title = move || {
        if editing.get().is_some_and(|d| d.is_new()) {
            "Add Question"
        } else {
            "Edit Question"
        }
    };

    let question_text = move || editing.get().map(|d| d.question_text).unwrap_or_default();
    let question_type = move || {
        editing
            .get()
            .map_or(QuestionType::Text, |d| d.question_type)
    };
    let is_required = move || editing.get().is_some_and(|d| d.is_required);
    let needs_options = move || question_type().needs_options();
    let options = move || editing.get().map(|d| d.options).unwrap_or_default();
    let can_save = move || editing.get().is_some_and(|d| d.can_save());

    let update_draft = move |f: &dyn Fn(&mut QuestionDraft)| {
        editing.update(|opt| {
            if let Some(draft) = opt {
                f(draft);
            }
        });
    };

    let submit = move |_| {
        if let Some(draft) = editing.get_untracked() {
            if draft.can_save() {
                on_save.run(draft);
            }
        }
    };

    view! {
        <div class="question-editor">
            <h3>{title}</h3>

            <label class="question-editor__label">
                "Question Text *"
                <textarea
                    class="question-editor__input"
                    placeholder="Enter your question"
                    prop:value=question_text
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        update_draft(&move |d| d.question_text.clone_from(&value));
                    }
                ></textarea>
            </label>

            <label class="question-editor__label">
                "Question Type"
                <select
                    class="question-editor__select"
                    prop:value=move || question_type().as_str().to_owned()
                    on:change=move |ev| {
                        if let Some(qtype) = QuestionType::parse(&event_target_value(&ev)) {
                            update_draft(&move |d| d.question_type = qtype);
                        }
                    }
                >
                    {QuestionType::ALL
                        .into_iter()
                        .map(|t| view! { <option value=t.as_str()>{t.label()}</option> })
                        .collect::<Vec<_>>()}
                </select>
            </label>

            <Show when=needs_options>
                <div class="question-editor__options">
                    <span class="question-editor__label">"Options"</span>
                    {move || {
                        options()
                            .into_iter()
                            .enumerate()
                            .map(|(index, option)| {
                                view! {
                                    <div class="question-editor__option-row">
                                        <input
                                            class="question-editor__input"
                                            type="text"
                                            placeholder=format!("Option {}", index + 1)
                                            prop:value=option
                                            on:input=move |ev| {
                                                let value = event_target_value(&ev);
                                                update_draft(&move |d| d.set_option(index, value.clone()));
                                            }
                                        />
                                        <button
                                            class="btn btn--outline btn--danger"
                                            on:click=move |_| update_draft(&move |d| d.remove_option(index))
                                        >
                                            "Remove"
                                        </button>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                    <button
                        class="btn btn--outline"
                        on:click=move |_| update_draft(&QuestionDraft::add_option)
                    >
                        "+ Add Option"
                    </button>
                </div>
            </Show>

            <label class="question-editor__checkbox">
                <input
                    type="checkbox"
                    prop:checked=is_required
                    on:change=move |ev| {
                        let checked = event_target_checked(&ev);
                        update_draft(&move |d| d.is_required = checked);
                    }
                />
                "Required field"
            </label>

            <div class="question-editor__actions">
                <button class="btn btn--primary" disabled=move || !can_save() on:click=submit>
                    "Save Question"
                </button>
                <button class="btn" on:click=move |_| on_cancel.run(())>
                    "Cancel"
                </button>
            </div>
        </div>
    }
}
