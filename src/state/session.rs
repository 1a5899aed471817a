#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::User;

/// Authenticated session provided via context to every admin page.
///
/// The token is carried here explicitly rather than read from browser
/// storage at call sites; `util::auth_token` touches storage only at the
/// login/logout/restore boundaries.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<User>,
    /// True while the stored token is still being validated on startup.
    pub loading: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            token: None,
            user: None,
            loading: true,
        }
    }
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Display name for the header: full name, else username, else email.
    pub fn display_name(&self) -> String {
        let Some(user) = &self.user else {
            return String::new();
        };
        let full = format!("{} {}", user.first_name, user.last_name);
        let full = full.trim();
        if !full.is_empty() {
            return full.to_owned();
        }
        if !user.username.is_empty() {
            return user.username.clone();
        }
        user.email.clone()
    }
}
