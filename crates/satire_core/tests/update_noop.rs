use satire_core::{update, AppState, Msg};

#[test]
fn noop_changes_nothing() {
    let state = AppState::new();
    let (mut next, effects) = update(state, Msg::NoOp);
    assert!(effects.is_empty());
    assert!(!next.consume_dirty());
    assert_eq!(next, AppState::new());
}
