//! Create/edit product dialog with field validation.

use leptos::prelude::*;

use crate::components::category_form::CategoryFormDialog;
use crate::net::types::{Category, Product, ProductDraft};
use crate::state::actions;
use crate::state::categories::CategoriesState;
use crate::state::products::ProductsState;
use crate::state::query::ProductQuery;
use crate::state::ui::UiState;
use crate::util::validate;

/// Modal dialog for creating (`initial: None`) or editing a product.
///
/// Name and category are required; stock and price must parse as numbers
/// ≥ 0. The category selector carries an inline entry that opens the
/// category dialog and selects the newly created category on success.
#[component]
pub fn ProductFormDialog(
    title: &'static str,
    initial: Option<Product>,
    on_close: Callback<()>,
) -> impl IntoView {
    let products = expect_context::<RwSignal<ProductsState>>();
    let categories = expect_context::<RwSignal<CategoriesState>>();
    let query = expect_context::<RwSignal<ProductQuery>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let edit_id = initial.as_ref().map(|p| p.id);

    // Creating defaults to the first category, matching the listing order.
    let initial_category = initial.as_ref().map(|p| p.category.id).or_else(|| {
        categories
            .get_untracked()
            .items
            .first()
            .map(|category| category.id)
    });

    let name = RwSignal::new(
        initial
            .as_ref()
            .map(|p| p.name.clone())
            .unwrap_or_default(),
    );
    let category_id = RwSignal::new(initial_category);
    let stock = RwSignal::new(
        initial
            .as_ref()
            .map(|p| p.stock.to_string())
            .unwrap_or_default(),
    );
    let price = RwSignal::new(
        initial
            .as_ref()
            .map(|p| p.price.to_string())
            .unwrap_or_default(),
    );
    let expiration = RwSignal::new(
        initial
            .as_ref()
            .and_then(|p| p.expiration_date.as_deref())
            .map(|date| date.get(..10).unwrap_or(date).to_owned())
            .unwrap_or_default(),
    );

    let attempted = RwSignal::new(false);
    let form_error = RwSignal::new(None::<String>);
    let create_category_open = RwSignal::new(false);

    let name_error = move || attempted.get().then(|| validate::required(&name.get())).flatten();
    let category_error = move || {
        attempted
            .get()
            .then(|| category_id.get().is_none().then_some("This field is required"))
            .flatten()
    };
    let stock_error = move || {
        attempted
            .get()
            .then(|| validate::non_negative(&stock.get()))
            .flatten()
    };
    let price_error = move || {
        attempted
            .get()
            .then(|| validate::non_negative(&price.get()))
            .flatten()
    };

    let on_save = move |_| {
        attempted.set(true);

        let name_value = name.get();
        let stock_value = stock.get();
        let price_value = price.get();

        let invalid = validate::required(&name_value).is_some()
            || category_id.get().is_none()
            || validate::non_negative(&stock_value).is_some()
            || validate::non_negative(&price_value).is_some();
        if invalid {
            form_error.set(Some("Please fix the highlighted fields.".to_owned()));
            return;
        }
        form_error.set(None);

        let Some(category_value) = category_id.get() else {
            return;
        };
        let (Ok(stock_number), Ok(price_number)) = (
            stock_value.trim().parse::<f64>(),
            price_value.trim().parse::<f64>(),
        ) else {
            return;
        };

        let expiration_value = expiration.get();
        let draft = ProductDraft {
            name: name_value.trim().to_owned(),
            category_id: category_value,
            stock: stock_number,
            price: price_number,
            expiration_date: {
                let trimmed = expiration_value.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_owned())
            },
        };

        leptos::task::spawn_local(async move {
            let result = match edit_id {
                Some(id) => actions::update_product(products, id, draft).await,
                None => {
                    actions::create_product(products, query.get_untracked(), draft).await
                }
            };
            match result {
                Ok(_) => {
                    let message = if edit_id.is_some() {
                        "Product updated successfully!"
                    } else {
                        "Product created successfully!"
                    };
                    actions::flash(ui, message);
                    on_close.run(());
                }
                Err(err) => form_error.set(Some(err.to_string())),
            }
        });
    };

    let on_category_change = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        if value == "__create__" {
            create_category_open.set(true);
        } else {
            category_id.set(value.parse::<i64>().ok());
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog dialog--form" on:click=move |ev| ev.stop_propagation()>
                <h2>{title}</h2>

                {move || {
                    form_error
                        .get()
                        .map(|message| view! { <div class="dialog__error">{message}</div> })
                }}

                <label class="dialog__label">
                    "Name *"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    {move || name_error().map(|msg| view! { <span class="dialog__field-error">{msg}</span> })}
                </label>

                <label class="dialog__label">
                    "Category *"
                    <select class="dialog__input" on:change=on_category_change
                        prop:value=move || {
                            category_id.get().map(|id| id.to_string()).unwrap_or_default()
                        }
                    >
                        <option value="">"Select a category"</option>
                        {move || {
                            categories
                                .get()
                                .items
                                .into_iter()
                                .map(|category| {
                                    view! {
                                        <option value=category.id.to_string()>{category.name}</option>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                        <option value="__create__">"+ Create new category"</option>
                    </select>
                    {move || category_error().map(|msg| view! { <span class="dialog__field-error">{msg}</span> })}
                </label>

                <label class="dialog__label">
                    "Stock *"
                    <input
                        class="dialog__input"
                        type="number"
                        prop:value=move || stock.get()
                        on:input=move |ev| stock.set(event_target_value(&ev))
                    />
                    {move || stock_error().map(|msg| view! { <span class="dialog__field-error">{msg}</span> })}
                </label>

                <label class="dialog__label">
                    "Unit Price *"
                    <input
                        class="dialog__input"
                        type="number"
                        prop:value=move || price.get()
                        on:input=move |ev| price.set(event_target_value(&ev))
                    />
                    {move || price_error().map(|msg| view! { <span class="dialog__field-error">{msg}</span> })}
                </label>

                <label class="dialog__label">
                    "Expiration Date"
                    <input
                        class="dialog__input"
                        type="date"
                        prop:value=move || expiration.get()
                        on:input=move |ev| expiration.set(event_target_value(&ev))
                    />
                </label>

                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=on_save>
                        "Save"
                    </button>
                </div>
            </div>
        </div>

        {move || {
            create_category_open
                .get()
                .then(|| {
                    view! {
                        <CategoryFormDialog
                            title="Create Category"
                            initial=None
                            on_close=Callback::new(move |()| create_category_open.set(false))
                            on_saved=Callback::new(move |category: Category| {
                                category_id.set(Some(category.id));
                            })
                        />
                    }
                })
        }}
    }
}
