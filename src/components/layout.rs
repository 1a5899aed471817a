//! Dashboard shell: sidebar navigation, header, and content slot.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::toast::ToastHost;
use crate::state::session::Session;

/// Layout wrapper for every authenticated admin page.
///
/// Renders the brand sidebar, the current user's name, a logout control,
/// and the page content. The unauthenticated redirect itself is installed
/// per-page via `util::session_guard`.
#[component]
pub fn AdminLayout(children: Children) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        crate::util::auth_token::clear();
        session.set(Session {
            token: None,
            user: None,
            loading: false,
        });
        navigate("/login", NavigateOptions::default());
    };

    let display_name = move || session.get().display_name();

    view! {
        <div class="admin-layout">
            <aside class="admin-layout__sidebar">
                <div class="admin-layout__brand">
                    <span class="admin-layout__brand-name">"OpenPort"</span>
                    <span class="admin-layout__brand-tag">"Survey Platform"</span>
                </div>
                <nav class="admin-layout__nav">
                    <a class="admin-layout__nav-link" href="/dashboard">"Dashboard"</a>
                    <a class="admin-layout__nav-link" href="/surveys">"Surveys"</a>
                    <a class="admin-layout__nav-link" href="/profile">"Profile"</a>
                </nav>
                <div class="admin-layout__footer">
                    <span class="admin-layout__user">{display_name}</span>
                    <button class="btn admin-layout__logout" on:click=on_logout>
                        "Sign Out"
                    </button>
                </div>
            </aside>
            <main class="admin-layout__content">{children()}</main>
            <ToastHost/>
        </div>
    }
}
