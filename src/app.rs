//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
    hooks::use_navigate,
};

use crate::pages::{
    analytics::AnalyticsPage, dashboard::DashboardPage, login::LoginPage,
    participate::ParticipatePage, profile::ProfilePage, responses::ResponsesPage,
    survey_create::SurveyCreatePage, survey_edit::SurveyEditPage, surveys::SurveysPage,
};
use crate::state::session::Session;
use crate::state::toast::ToastState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session and toast contexts, restores a stored session token
/// on startup, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(Session::default());
    let toasts = RwSignal::new(ToastState::default());
    provide_context(session);
    provide_context(toasts);

    // Restore the stored token once, validating it against the API so a
    // stale token still lands on the login form.
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            match crate::util::auth_token::load() {
                Some(token) => {
                    let user = crate::net::api::fetch_current_user(&token).await;
                    session.set(Session {
                        token: Some(token),
                        user,
                        loading: false,
                    });
                }
                None => session.update(|s| s.loading = false),
            }
        });
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/openport-client.css"/>
        <Title text="OpenPort"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomeRedirect/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=StaticSegment("surveys") view=SurveysPage/>
                <Route
                    path=(StaticSegment("surveys"), StaticSegment("create"))
                    view=SurveyCreatePage
                />
                <Route
                    path=(StaticSegment("surveys"), ParamSegment("id"), StaticSegment("edit"))
                    view=SurveyEditPage
                />
                <Route
                    path=(StaticSegment("responses"), ParamSegment("surveyId"))
                    view=ResponsesPage
                />
                <Route
                    path=(StaticSegment("analytics"), ParamSegment("surveyId"))
                    view=AnalyticsPage
                />
                <Route path=StaticSegment("profile") view=ProfilePage/>
                <Route
                    path=(StaticSegment("participate"), ParamSegment("token"))
                    view=ParticipatePage
                />
            </Routes>
        </Router>
    }
}

/// The bare root path always forwards to the dashboard.
#[component]
fn HomeRedirect() -> impl IntoView {
    let navigate = use_navigate();
    Effect::new(move || {
        navigate("/dashboard", leptos_router::NavigateOptions::default());
    });
    view! { <div class="page-redirect"></div> }
}
