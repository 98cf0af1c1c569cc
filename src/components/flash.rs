//! Transient success banner shown after mutations.

use leptos::prelude::*;

use crate::state::ui::UiState;

/// Renders the current flash message, if any.
#[component]
pub fn FlashMessage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        {move || {
            ui.get()
                .flash
                .map(|message| view! { <div class="flash flash--success">{message}</div> })
        }}
    }
}
