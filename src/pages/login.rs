//! Administrator login form.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::toast::{ToastHost, show_toast};
use crate::state::session::Session;
use crate::state::toast::{ToastState, ToastVariant};

/// Username/password login. A successful login stores the token, fills the
/// session context, and forwards to the dashboard. Already-authenticated
/// visitors are forwarded straight away.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);

    {
        let navigate = navigate.clone();
        Effect::new(move || {
            if session.get().is_authenticated() {
                navigate("/dashboard", NavigateOptions::default());
            }
        });
    }

    let can_submit = move || {
        !submitting.get()
            && !username.get().trim().is_empty()
            && !password.get().is_empty()
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !can_submit() {
            return;
        }
        submitting.set(true);

        let user = username.get_untracked();
        let pass = password.get_untracked();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::login(user.trim(), &pass).await {
                Ok(issued) => {
                    crate::util::auth_token::store(&issued.token);
                    session.set(Session {
                        token: Some(issued.token),
                        user: Some(issued.user),
                        loading: false,
                    });
                }
                Err(e) => {
                    leptos::logging::warn!("login failed: {e}");
                    show_toast(toasts, "Login failed", "Invalid username or password", ToastVariant::Error);
                    submitting.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (user, pass);
    };

    view! {
        <div class="login-page">
            <form class="login-page__card" on:submit=on_submit>
                <h1 class="login-page__brand">"OpenPort"</h1>
                <p class="login-page__tag">"Sign in to manage your surveys"</p>

                <label class="login-page__label">
                    "Username"
                    <input
                        class="login-page__input"
                        type="text"
                        autocomplete="username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                </label>

                <label class="login-page__label">
                    "Password"
                    <input
                        class="login-page__input"
                        type="password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>

                <button class="btn btn--primary login-page__submit" type="submit" disabled=move || !can_submit()>
                    {move || if submitting.get() { "Signing in..." } else { "Sign In" }}
                </button>
            </form>
            <ToastHost/>
        </div>
    }
}
