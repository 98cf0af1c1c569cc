use super::*;

#[test]
fn ui_state_defaults() {
    let state = UiState::default();
    assert!(state.flash.is_none());
}
