//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{categories::CategoriesPage, products::ProductsPage};
use crate::state::categories::CategoriesState;
use crate::state::products::ProductsState;
use crate::state::query::ProductQuery;
use crate::state::ui::UiState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provide reactive state contexts for all child components.
    let products = RwSignal::new(ProductsState::default());
    let categories = RwSignal::new(CategoriesState::default());
    let query = RwSignal::new(ProductQuery::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(products);
    provide_context(categories);
    provide_context(query);
    provide_context(ui);

    view! {
        <Stylesheet id="leptos" href="/pkg/inventory-ui.css"/>
        <Title text="Inventory Manager"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=ProductsPage/>
                <Route path=StaticSegment("categories") view=CategoriesPage/>
            </Routes>
        </Router>
    }
}
