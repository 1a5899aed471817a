//! Per-survey analytics: one chart card per question, plus CSV export.

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::layout::AdminLayout;
use crate::components::stat_chart::StatChart;
use crate::components::toast::show_toast;
use crate::net::types::SurveyStats;
use crate::state::session::Session;
use crate::state::toast::{ToastState, ToastVariant};
use crate::util::download::{export_filename, save_blob};
use crate::util::session_guard::install_unauth_redirect;

#[component]
pub fn AnalyticsPage() -> impl IntoView {
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

    let stats = RwSignal::new(None::<SurveyStats>);
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
            match crate::net::api::fetch_survey_stats(&token, id).await {
                Ok(data) => stats.set(Some(data)),
                Err(e) => {
                    leptos::logging::warn!("stats fetch failed: {e}");
                    stats.set(Some(crate::net::fallback::survey_stats()));
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
                Ok(bytes) => save_blob(&bytes, &export_filename(id, "analytics")),
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
                <h1>"Analytics"</h1>
                <div class="page-header__actions">
                    <button class="btn btn--outline" disabled=move || exporting.get() on:click=on_export>
                        {move || if exporting.get() { "Exporting..." } else { "Export CSV" }}
                    </button>
                    <a class="btn btn--ghost" href="/surveys">
                        "Back to Surveys"
                    </a>
                </div>
            </div>

            {move || match stats.get() {
                None => view! {
                    <div class="chart-grid chart-grid--loading">
                        <div class="skeleton-card"></div>
                        <div class="skeleton-card"></div>
                    </div>
                }
                .into_any(),
                Some(data) if data.questions.is_empty() => view! {
                    <p class="chart-grid__empty">"No analytics available for this survey yet."</p>
                }
                .into_any(),
                Some(data) => view! {
                    <p class="chart-grid__total">
                        {format!("{} total responses", data.total_responses)}
                    </p>
                    <div class="chart-grid">
                        {data
                            .questions
                            .into_iter()
                            .map(|question| view! { <StatChart stats=question/> })
                            .collect::<Vec<_>>()}
                    </div>
                }
                .into_any(),
            }}
        </AdminLayout>
    }
}
