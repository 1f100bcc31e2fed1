use super::*;

// =============================================================
// ToastState
// =============================================================

#[test]
fn toast_state_default_is_empty() {
    let state = ToastState::default();
    assert!(state.toasts().is_empty());
}

#[test]
fn push_appends_newest_last() {
    let mut state = ToastState::default();
    state.push(ToastLevel::Success, "first");
    state.push(ToastLevel::Error, "second");

    let toasts = state.toasts();
    assert_eq!(toasts.len(), 2);
    assert_eq!(toasts[0].message, "first");
    assert_eq!(toasts[1].message, "second");
    assert_eq!(toasts[1].level, ToastLevel::Error);
}

#[test]
fn push_assigns_unique_ids() {
    let mut state = ToastState::default();
    let a = state.push(ToastLevel::Success, "a");
    let b = state.push(ToastLevel::Success, "b");
    assert_ne!(a, b);
}

#[test]
fn dismiss_removes_only_the_target() {
    let mut state = ToastState::default();
    let a = state.push(ToastLevel::Success, "a");
    let b = state.push(ToastLevel::Error, "b");

    state.dismiss(a);
    assert_eq!(state.toasts().len(), 1);
    assert_eq!(state.toasts()[0].id, b);

    // Dismissing again is a no-op.
    state.dismiss(a);
    assert_eq!(state.toasts().len(), 1);
}
