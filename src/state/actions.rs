//! Async operations driving the shared state signals.
//!
//! MUTATION-THEN-REFRESH
//! =====================
//! Every create/update/stock-toggle/delete performs the remote call, then
//! refreshes the dependent read state (listing and/or metrics) before
//! resolving, so the UI never shows stale aggregates after a write. When the
//! remote call fails the refresh is skipped, the owning state keeps its data,
//! and the error is stored as a display string.

use leptos::prelude::{GetUntracked, RwSignal, Update};

use crate::net::api::{self, ApiError};
use crate::net::types::{Category, CategoryDraft, Product, ProductDraft};
use crate::state::categories::CategoriesState;
use crate::state::products::ProductsState;
use crate::state::query::ProductQuery;
use crate::state::ui::UiState;

/// How long a flash message stays visible.
#[cfg(feature = "hydrate")]
const FLASH_MILLIS: u64 = 2500;

/// Fetch the product listing for `query` unless an identical request was the
/// last one issued.
pub async fn sync_products(products: RwSignal<ProductsState>, query: ProductQuery) {
    let signature = query.signature();
    if products.get_untracked().last_signature.as_deref() == Some(signature.as_str()) {
        return;
    }
    reload_products(products, &query).await;
}

/// Fetch the product listing for `query` unconditionally, recording its
/// signature for the dedup check above.
pub async fn reload_products(products: RwSignal<ProductsState>, query: &ProductQuery) {
    products.update(|state| {
        state.loading = true;
        state.last_signature = Some(query.signature());
    });

    match api::fetch_products(&query.to_params()).await {
        Ok(page) => products.update(|state| {
            state.apply_page(page);
            state.loading = false;
        }),
        Err(err) => {
            leptos::logging::warn!("product listing fetch failed: {err}");
            products.update(|state| {
                state.loading = false;
                state.error = Some("Failed to fetch products".to_owned());
            });
        }
    }
}

/// Fetch the per-category metrics table.
pub async fn reload_metrics(products: RwSignal<ProductsState>) {
    match api::fetch_metrics().await {
        Ok(metrics) => products.update(|state| state.metrics = metrics),
        Err(err) => {
            leptos::logging::warn!("metrics fetch failed: {err}");
            products.update(|state| state.error = Some("Failed to fetch metrics".to_owned()));
        }
    }
}

/// Create a product, then refresh the listing and the metrics.
pub async fn create_product(
    products: RwSignal<ProductsState>,
    query: ProductQuery,
    draft: ProductDraft,
) -> Result<Product, ApiError> {
    match api::create_product(&draft).await {
        Ok(created) => {
            reload_products(products, &query).await;
            reload_metrics(products).await;
            Ok(created)
        }
        Err(err) => {
            products.update(|state| state.error = Some(err.to_string()));
            Err(err)
        }
    }
}

/// Update a product, swap it into the current page, and refresh the metrics.
pub async fn update_product(
    products: RwSignal<ProductsState>,
    id: i64,
    draft: ProductDraft,
) -> Result<Product, ApiError> {
    match api::update_product(id, &draft).await {
        Ok(updated) => {
            products.update(|state| state.replace(updated.clone()));
            reload_metrics(products).await;
            Ok(updated)
        }
        Err(err) => {
            products.update(|state| state.error = Some(err.to_string()));
            Err(err)
        }
    }
}

/// Flip a product between in-stock and out-of-stock, swap the returned row
/// into the current page, and refresh the metrics.
pub async fn toggle_stock(
    products: RwSignal<ProductsState>,
    product: &Product,
) -> Result<Product, ApiError> {
    let result = if product.is_out_of_stock() {
        api::set_product_in_stock(product.id).await
    } else {
        api::set_product_out_of_stock(product.id).await
    };

    match result {
        Ok(updated) => {
            products.update(|state| state.replace(updated.clone()));
            reload_metrics(products).await;
            Ok(updated)
        }
        Err(err) => {
            products.update(|state| state.error = Some(err.to_string()));
            Err(err)
        }
    }
}

/// Delete a product, then refresh the listing and the metrics.
pub async fn delete_product(
    products: RwSignal<ProductsState>,
    query: ProductQuery,
    id: i64,
) -> Result<(), ApiError> {
    match api::delete_product(id).await {
        Ok(()) => {
            reload_products(products, &query).await;
            reload_metrics(products).await;
            Ok(())
        }
        Err(err) => {
            products.update(|state| state.error = Some(err.to_string()));
            Err(err)
        }
    }
}

/// Fetch all categories.
pub async fn reload_categories(categories: RwSignal<CategoriesState>) {
    categories.update(|state| state.loading = true);

    match api::fetch_categories().await {
        Ok(items) => categories.update(|state| {
            state.items = items;
            state.loading = false;
            state.error = None;
        }),
        Err(err) => {
            leptos::logging::warn!("category fetch failed: {err}");
            categories.update(|state| {
                state.loading = false;
                state.error = Some("Failed to fetch categories".to_owned());
            });
        }
    }
}

/// Create a category, then refresh the category list plus the product
/// listing and metrics that embed category names.
pub async fn create_category(
    categories: RwSignal<CategoriesState>,
    products: RwSignal<ProductsState>,
    query: ProductQuery,
    draft: CategoryDraft,
) -> Result<Category, ApiError> {
    match api::create_category(&draft).await {
        Ok(created) => {
            refresh_after_category_change(categories, products, &query).await;
            Ok(created)
        }
        Err(err) => {
            categories.update(|state| state.error = Some(err.to_string()));
            Err(err)
        }
    }
}

/// Rename a category, then refresh dependent state.
pub async fn update_category(
    categories: RwSignal<CategoriesState>,
    products: RwSignal<ProductsState>,
    query: ProductQuery,
    id: i64,
    draft: CategoryDraft,
) -> Result<Category, ApiError> {
    match api::update_category(id, &draft).await {
        Ok(updated) => {
            refresh_after_category_change(categories, products, &query).await;
            Ok(updated)
        }
        Err(err) => {
            categories.update(|state| state.error = Some(err.to_string()));
            Err(err)
        }
    }
}

/// Delete a category, then refresh dependent state.
pub async fn delete_category(
    categories: RwSignal<CategoriesState>,
    products: RwSignal<ProductsState>,
    query: ProductQuery,
    id: i64,
) -> Result<(), ApiError> {
    match api::delete_category(id).await {
        Ok(()) => {
            refresh_after_category_change(categories, products, &query).await;
            Ok(())
        }
        Err(err) => {
            categories.update(|state| state.error = Some(err.to_string()));
            Err(err)
        }
    }
}

/// Product rows and metrics embed category names, so any category change
/// refreshes all three collections.
async fn refresh_after_category_change(
    categories: RwSignal<CategoriesState>,
    products: RwSignal<ProductsState>,
    query: &ProductQuery,
) {
    reload_categories(categories).await;
    reload_products(products, query).await;
    reload_metrics(products).await;
}

/// Show a transient success message, auto-dismissed unless a newer flash
/// replaced it in the meantime.
pub fn flash(ui: RwSignal<UiState>, message: &str) {
    ui.update(|state| state.flash = Some(message.to_owned()));

    #[cfg(feature = "hydrate")]
    {
        let message = message.to_owned();
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(FLASH_MILLIS)).await;
            ui.update(|state| {
                if state.flash.as_deref() == Some(message.as_str()) {
                    state.flash = None;
                }
            });
        });
    }
}
