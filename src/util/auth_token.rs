//! localStorage persistence for the admin session token.
//!
//! SYSTEM CONTEXT
//! ==============
//! Storage is touched only at session boundaries: restore on startup, store
//! on login, clear on logout. Everything else receives the token through the
//! `Session` context, never from ambient storage.

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "openport_auth_token";

/// Read the stored session token, if any. Browser only.
pub fn load() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(STORAGE_KEY).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist the session token after a successful login.
pub fn store(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(STORAGE_KEY, token);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Drop the stored token on logout.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(STORAGE_KEY);
        }
    }
}
