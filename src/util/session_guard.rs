//! Shared auth redirect behavior for admin routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every admin page applies identical unauthenticated redirect behavior;
//! the participation page is public and never installs this guard.

#[cfg(test)]
#[path = "session_guard_test.rs"]
mod session_guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::Session;

/// True once session restoration has finished with no token present.
pub fn should_redirect_unauth(session: &Session) -> bool {
    !session.loading && !session.is_authenticated()
}

/// Redirect to `/login` whenever the session has loaded without a token.
pub fn install_unauth_redirect<F>(session: RwSignal<Session>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&session.get()) {
            navigate("/login", NavigateOptions::default());
        }
    });
}
