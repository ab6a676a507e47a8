use super::*;

// =============================================================
// ToastState queue
// =============================================================

#[test]
fn toast_state_default_is_empty() {
    let state = ToastState::default();
    assert!(state.toasts().is_empty());
}

#[test]
fn push_appends_in_arrival_order() {
    let mut state = ToastState::default();
    state.push(ToastKind::Success, "Data anggota berhasil diperbarui".to_owned());
    state.push(ToastKind::Error, "Jumlah tidak valid".to_owned());

    let toasts = state.toasts();
    assert_eq!(toasts.len(), 2);
    assert_eq!(toasts[0].kind, ToastKind::Success);
    assert_eq!(toasts[1].kind, ToastKind::Error);
}

#[test]
fn push_assigns_unique_ids() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Success, "a".to_owned());
    let b = state.push(ToastKind::Success, "b".to_owned());
    assert_ne!(a, b);
}

#[test]
fn dismiss_removes_only_the_named_toast() {
    let mut state = ToastState::default();
    let first = state.push(ToastKind::Success, "first".to_owned());
    let second = state.push(ToastKind::Error, "second".to_owned());

    state.dismiss(first);

    assert_eq!(state.toasts().len(), 1);
    assert_eq!(state.toasts()[0].id, second);
}

#[test]
fn dismiss_with_unknown_id_is_a_no_op() {
    let mut state = ToastState::default();
    state.push(ToastKind::Success, "keep".to_owned());
    state.dismiss(Uuid::new_v4());
    assert_eq!(state.toasts().len(), 1);
}
