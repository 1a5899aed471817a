use super::*;

#[test]
fn should_redirect_when_loaded_without_token() {
    let session = Session {
        token: None,
        user: None,
        loading: false,
    };
    assert!(should_redirect_unauth(&session));
}

#[test]
fn should_not_redirect_while_loading() {
    assert!(!should_redirect_unauth(&Session::default()));
}

#[test]
fn should_not_redirect_with_token() {
    let session = Session {
        token: Some("tok".to_owned()),
        user: None,
        loading: false,
    };
    assert!(!should_redirect_unauth(&session));
}
