//! Dynamic input control for the participation form.
//!
//! DESIGN
//! ======
//! A fixed dispatch table from question type to control; there is no
//! extensibility point. `mcq` and `dropdown` both render a select here and
//! validate identically; they differ only in the admin-side builder. File
//! selections bypass the answer draft entirely.

use leptos::prelude::*;

use crate::net::types::{Question, QuestionType};
use crate::state::participation::{AnswerDraft, FileSelections};

/// One input control bound to the shared answer draft.
#[component]
pub fn QuestionInput(
    question: Question,
    draft: RwSignal<AnswerDraft>,
    files: RwSignal<FileSelections>,
) -> impl IntoView {
    // Token-resolved questions always carry server ids.
    let id = question.id.unwrap_or_default();

    match question.question_type {
        QuestionType::Text => view! {
            <input
                class="question-input__field"
                type="text"
                placeholder="Enter your answer"
                prop:value=move || draft.get().value(id).to_owned()
                on:input=move |ev| draft.update(|d| d.set(id, event_target_value(&ev)))
            />
        }
        .into_any(),

        QuestionType::Textarea => view! {
            <textarea
                class="question-input__field question-input__field--multiline"
                rows="4"
                placeholder="Enter your answer"
                prop:value=move || draft.get().value(id).to_owned()
                on:input=move |ev| draft.update(|d| d.set(id, event_target_value(&ev)))
            ></textarea>
        }
        .into_any(),

        QuestionType::Mcq | QuestionType::Dropdown => {
            let options = question.options.clone().unwrap_or_default();
            view! {
                <select
                    class="question-input__select"
                    prop:value=move || draft.get().value(id).to_owned()
                    on:change=move |ev| draft.update(|d| d.set(id, event_target_value(&ev)))
                >
                    <option value="" disabled=true>
                        "Select an option"
                    </option>
                    {options
                        .into_iter()
                        .map(|option| {
                            view! { <option value=option.clone()>{option.clone()}</option> }
                        })
                        .collect::<Vec<_>>()}
                </select>
            }
            .into_any()
        }

        QuestionType::Checkbox => {
            let options = question.options.clone().unwrap_or_default();
            view! {
                <div class="question-input__checkboxes">
                    {options
                        .into_iter()
                        .map(|option| {
                            let checked = {
                                let option = option.clone();
                                move || draft.get().checkbox_selected(id, &option)
                            };
                            let toggle = {
                                let option = option.clone();
                                move |_| draft.update(|d| d.toggle_checkbox(id, &option))
                            };
                            view! {
                                <label class="question-input__checkbox">
                                    <input type="checkbox" prop:checked=checked on:change=toggle/>
                                    <span>{option}</span>
                                </label>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            }
            .into_any()
        }

        QuestionType::Rating => view! {
            <div class="question-input__rating">
                {(1_u8..=5)
                    .map(|rating| {
                        let label = rating.to_string();
                        let class = {
                            let label = label.clone();
                            move || {
                                if draft.get().value(id) == label {
                                    "btn question-input__rating-btn question-input__rating-btn--selected"
                                } else {
                                    "btn btn--outline question-input__rating-btn"
                                }
                            }
                        };
                        view! {
                            <button
                                type="button"
                                class=class
                                on:click=move |_| draft.update(|d| d.select_rating(id, rating))
                            >
                                {label.clone()}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        }
        .into_any(),

        QuestionType::File => {
            let on_change = move |ev: leptos::ev::Event| {
                #[cfg(feature = "hydrate")]
                {
                    use wasm_bindgen::JsCast;
                    let input = ev
                        .target()
                        .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());
                    if let Some(input) = input {
                        let file = input.files().and_then(|list| list.get(0));
                        files.update(|f| f.set(id, file));
                    }
                }
                #[cfg(not(feature = "hydrate"))]
                let _ = (ev, files);
            };
            view! {
                <input class="question-input__file" type="file" on:change=on_change/>
            }
            .into_any()
        }
    }
}
