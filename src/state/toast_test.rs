use super::*;

#[test]
fn push_assigns_monotonic_ids() {
    let mut state = ToastState::default();
    let a = state.info("Saved", "ok");
    let b = state.error("Error", "boom");
    assert!(b > a);
    assert_eq!(state.toasts.len(), 2);
    assert_eq!(state.toasts[0].variant, ToastVariant::Info);
    assert_eq!(state.toasts[1].variant, ToastVariant::Error);
}

#[test]
fn dismiss_removes_only_matching_toast() {
    let mut state = ToastState::default();
    let a = state.info("One", "");
    let b = state.info("Two", "");
    state.dismiss(a);

    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].id, b);

    // Unknown id is a no-op.
    state.dismiss(999);
    assert_eq!(state.toasts.len(), 1);
}
