//! Products page: filter bar, listing table, and the metrics summary.

use leptos::prelude::*;

use crate::components::flash::FlashMessage;
use crate::components::metrics_panel::MetricsPanel;
use crate::components::product_filter::ProductFilter;
use crate::components::product_form::ProductFormDialog;
use crate::components::product_table::ProductTable;
use crate::components::top_bar::TopBar;
use crate::state::actions;
use crate::state::categories::CategoriesState;
use crate::state::products::ProductsState;
use crate::state::query::ProductQuery;

/// Products page.
///
/// Owns the listing lifecycle: categories and metrics load on mount, and the
/// listing request re-issues whenever the composed query changes. The fetch
/// itself is deduplicated by the query's serialized signature, so redundant
/// signal writes cost nothing.
#[component]
pub fn ProductsPage() -> impl IntoView {
    let products = expect_context::<RwSignal<ProductsState>>();
    let categories = expect_context::<RwSignal<CategoriesState>>();
    let query = expect_context::<RwSignal<ProductQuery>>();

    let create_open = RwSignal::new(false);

    // Initial loads for the filter options and the metrics table.
    Effect::new(move || {
        leptos::task::spawn_local(async move {
            actions::reload_categories(categories).await;
            actions::reload_metrics(products).await;
        });
    });

    // Listing fetch, re-run on every query change, deduplicated by signature.
    Effect::new(move || {
        let current = query.get();
        leptos::task::spawn_local(async move {
            actions::sync_products(products, current).await;
        });
    });

    // Pull the page back into range when the total shrinks (e.g. after a
    // delete on the last page). Going through the query signal re-issues the
    // listing request on the clamped page.
    Effect::new(move || {
        let total = products.get().total;
        let current = query.get_untracked();
        let mut clamped = current.clone();
        clamped.clamp_page(total);
        if clamped != current {
            query.set(clamped);
        }
    });

    view! {
        <div class="products-page">
            <TopBar/>
            <FlashMessage/>

            {move || {
                products
                    .get()
                    .error
                    .map(|message| view! { <div class="banner banner--error">{message}</div> })
            }}

            <div class="products-page__toolbar">
                <ProductFilter/>
                <button class="btn btn--primary" on:click=move |_| create_open.set(true)>
                    "+ New Product"
                </button>
            </div>

            {move || {
                products
                    .get()
                    .loading
                    .then(|| view! { <p class="products-page__loading">"Loading products..."</p> })
            }}

            <ProductTable/>
            <MetricsPanel/>

            {move || {
                create_open
                    .get()
                    .then(|| {
                        view! {
                            <ProductFormDialog
                                title="Create Product"
                                initial=None
                                on_close=Callback::new(move |()| create_open.set(false))
                            />
                        }
                    })
            }}
        </div>
    }
}
