//! Categories page: listing plus the create dialog.

use leptos::prelude::*;

use crate::components::category_form::CategoryFormDialog;
use crate::components::category_table::CategoryTable;
use crate::components::flash::FlashMessage;
use crate::components::top_bar::TopBar;
use crate::state::actions;
use crate::state::categories::CategoriesState;

/// Categories page.
#[component]
pub fn CategoriesPage() -> impl IntoView {
    let categories = expect_context::<RwSignal<CategoriesState>>();

    let create_open = RwSignal::new(false);

    Effect::new(move || {
        leptos::task::spawn_local(async move {
            actions::reload_categories(categories).await;
        });
    });

    view! {
        <div class="categories-page">
            <TopBar/>
            <FlashMessage/>

            {move || {
                categories
                    .get()
                    .error
                    .map(|message| view! { <div class="banner banner--error">{message}</div> })
            }}

            <div class="categories-page__toolbar">
                <button class="btn btn--primary" on:click=move |_| create_open.set(true)>
                    "+ Create Category"
                </button>
            </div>

            {move || {
                categories
                    .get()
                    .loading
                    .then(|| view! { <p class="categories-page__loading">"Loading categories..."</p> })
            }}

            <CategoryTable/>

            {move || {
                create_open
                    .get()
                    .then(|| {
                        view! {
                            <CategoryFormDialog
                                title="Create Category"
                                initial=None
                                on_close=Callback::new(move |()| create_open.set(false))
                            />
                        }
                    })
            }}
        </div>
    }
}
