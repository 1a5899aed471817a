use super::*;

fn user(first: &str, last: &str, username: &str, email: &str) -> User {
    User {
        id: 1,
        username: username.to_owned(),
        first_name: first.to_owned(),
        last_name: last.to_owned(),
        email: email.to_owned(),
        is_staff: true,
    }
}

#[test]
fn default_session_is_loading_and_unauthenticated() {
    let s = Session::default();
    assert!(s.loading);
    assert!(!s.is_authenticated());
}

#[test]
fn token_presence_decides_authentication() {
    let s = Session {
        token: Some("tok".to_owned()),
        user: None,
        loading: false,
    };
    assert!(s.is_authenticated());
}

#[test]
fn display_name_prefers_full_name_then_username_then_email() {
    let mut s = Session {
        token: Some("tok".to_owned()),
        user: Some(user("Ada", "Lovelace", "ada", "ada@example.com")),
        loading: false,
    };
    assert_eq!(s.display_name(), "Ada Lovelace");

    s.user = Some(user("", "", "ada", "ada@example.com"));
    assert_eq!(s.display_name(), "ada");

    s.user = Some(user("", "", "", "ada@example.com"));
    assert_eq!(s.display_name(), "ada@example.com");

    s.user = None;
    assert_eq!(s.display_name(), "");
}
