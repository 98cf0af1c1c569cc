#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Cross-page UI state.
///
/// `flash` is a transient success message shown after a mutation and
/// auto-dismissed a moment later.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub flash: Option<String>,
}
