//! Application header with the title and page navigation.

use leptos::prelude::*;

/// Top bar shown on every page.
#[component]
pub fn TopBar() -> impl IntoView {
    view! {
        <header class="top-bar">
            <h1 class="top-bar__title">"Inventory Manager"</h1>
            <nav class="top-bar__nav">
                <a class="top-bar__link" href="/">"Products"</a>
                <a class="top-bar__link" href="/categories">"Categories"</a>
            </nav>
        </header>
    }
}
