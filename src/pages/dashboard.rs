//! Dashboard overview: aggregate counts and recent activity.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::layout::AdminLayout;
use crate::net::types::DashboardSummary;
use crate::state::session::Session;
use crate::util::session_guard::install_unauth_redirect;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    install_unauth_redirect(session, use_navigate());

    let summary = RwSignal::new(None::<DashboardSummary>);
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
            match crate::net::api::fetch_dashboard_summary(&token).await {
                Ok(data) => summary.set(Some(data)),
                Err(e) => {
                    leptos::logging::warn!("summary fetch failed: {e}");
                    summary.set(Some(crate::net::fallback::dashboard_summary()));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = token;
    });

    view! {
        <AdminLayout>
            <div class="page-header">
                <h1>"Dashboard"</h1>
                <p class="page-header__subtitle">"Overview of your survey activity"</p>
            </div>

            {move || match summary.get() {
                None => view! {
                    <div class="stat-grid stat-grid--loading">
                        <div class="skeleton-card"></div>
                        <div class="skeleton-card"></div>
                        <div class="skeleton-card"></div>
                    </div>
                }
                .into_any(),
                Some(data) => view! {
                    <div class="stat-grid">
                        <StatCard label="Total Surveys" value=data.total_surveys/>
                        <StatCard label="Total Responses" value=data.total_responses/>
                        <StatCard label="Active Surveys" value=data.active_surveys/>
                    </div>

                    <div class="activity-feed">
                        <h2>"Recent Activity"</h2>
                        {if data.recent_activity.is_empty() {
                            view! { <p class="activity-feed__empty">"No recent activity."</p> }
                                .into_any()
                        } else {
                            data.recent_activity
                                .into_iter()
                                .map(|item| {
                                    view! {
                                        <div class="activity-feed__item">
                                            <span class="activity-feed__kind">{item.kind}</span>
                                            <span class="activity-feed__description">
                                                {item.description}
                                            </span>
                                            <span class="activity-feed__timestamp">
                                                {item.timestamp}
                                            </span>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()
                                .into_any()
                        }}
                    </div>
                }
                .into_any(),
            }}
        </AdminLayout>
    }
}

#[component]
fn StatCard(label: &'static str, value: i64) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-card__value">{value}</span>
            <span class="stat-card__label">{label}</span>
        </div>
    }
}
