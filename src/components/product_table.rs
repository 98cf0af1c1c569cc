//! Product table with two-level sortable headers, row actions, and
//! pagination controls.

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::product_form::ProductFormDialog;
use crate::components::product_row::ProductRow;
use crate::net::types::Product;
use crate::state::actions;
use crate::state::products::ProductsState;
use crate::state::query::{PAGE_SIZE_OPTIONS, ProductQuery, SortColumn, SortDirection, SortSlot};
use crate::state::ui::UiState;

/// The product listing table.
///
/// Header clicks rotate the shared query's sort state; pagination writes the
/// page and page size. Every change flows through the listing query signal,
/// so the page effect re-issues the request exactly once per distinct query.
#[component]
pub fn ProductTable() -> impl IntoView {
    let products = expect_context::<RwSignal<ProductsState>>();
    let query = expect_context::<RwSignal<ProductQuery>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let edit_target = RwSignal::new(None::<Product>);
    let delete_target = RwSignal::new(None::<Product>);

    let on_edit = Callback::new(move |product: Product| edit_target.set(Some(product)));
    let on_delete = Callback::new(move |product: Product| delete_target.set(Some(product)));
    let on_toggle = Callback::new(move |product: Product| {
        leptos::task::spawn_local(async move {
            if let Err(err) = actions::toggle_stock(products, &product).await {
                leptos::logging::warn!("stock toggle failed: {err}");
            }
        });
    });

    // The delete call happens here and only here, after the explicit confirm.
    let on_delete_confirm = Callback::new(move |()| {
        let Some(product) = delete_target.get_untracked() else {
            return;
        };
        delete_target.set(None);
        leptos::task::spawn_local(async move {
            let deleted =
                actions::delete_product(products, query.get_untracked(), product.id).await;
            if deleted.is_ok() {
                actions::flash(ui, "Product deleted successfully!");
            }
        });
    });
    let on_delete_cancel = Callback::new(move |()| delete_target.set(None));

    let page_count = move || query.get().page_count(products.get().total);
    let current_page = move || query.get().page;

    view! {
        <div class="product-table">
            <table class="product-table__table">
                <thead>
                    <tr>
                        {move || {
                            let current = query.get();
                            SortColumn::ALL
                                .into_iter()
                                .map(|column| {
                                    let sort = current.sort_of(column);
                                    let icon = match sort {
                                        Some((_, SortDirection::Asc)) => "▲",
                                        Some((_, SortDirection::Desc)) => "▼",
                                        None => "↕",
                                    };
                                    let class = match sort.map(|(slot, _)| slot) {
                                        Some(SortSlot::Primary) => {
                                            "product-table__header product-table__header--primary"
                                        }
                                        Some(SortSlot::Secondary) => {
                                            "product-table__header product-table__header--secondary"
                                        }
                                        None => "product-table__header",
                                    };
                                    view! {
                                        <th
                                            class=class
                                            on:click=move |_| query.update(|q| q.toggle_sort(column))
                                        >
                                            <span>{column.label()}</span>
                                            <span class="product-table__sort-icon">{icon}</span>
                                        </th>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                        <th class="product-table__header">"Toggle Stock"</th>
                        <th class="product-table__header">"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let items = products.get().items;
                        if items.is_empty() {
                            return view! {
                                <tr>
                                    <td class="product-table__empty" colspan="7">
                                        "No products found"
                                    </td>
                                </tr>
                            }
                                .into_any();
                        }

                        items
                            .into_iter()
                            .map(|product| {
                                view! {
                                    <ProductRow
                                        product=product
                                        on_edit=on_edit
                                        on_delete=on_delete
                                        on_toggle=on_toggle
                                    />
                                }
                            })
                            .collect::<Vec<_>>()
                            .into_any()
                    }}
                </tbody>
            </table>

            <div class="product-table__footer">
                <div class="product-table__pager">
                    <button
                        class="btn btn--small"
                        disabled=move || current_page() == 0
                        on:click=move |_| query.update(|q| q.page = 0)
                    >
                        "«"
                    </button>
                    <button
                        class="btn btn--small"
                        disabled=move || current_page() == 0
                        on:click=move |_| query.update(|q| q.page = q.page.saturating_sub(1))
                    >
                        "‹"
                    </button>
                    {move || {
                        let count = page_count();
                        let current = current_page();
                        (0..count)
                            .map(|page| {
                                let class = if page == current {
                                    "btn btn--small btn--page btn--page-active"
                                } else {
                                    "btn btn--small btn--page"
                                };
                                view! {
                                    <button class=class on:click=move |_| query.update(|q| q.page = page)>
                                        {(page + 1).to_string()}
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                    <button
                        class="btn btn--small"
                        disabled=move || current_page() + 1 >= page_count()
                        on:click=move |_| {
                            query
                                .update(|q| {
                                    let last = q.page_count(products.get_untracked().total) - 1;
                                    if q.page < last {
                                        q.page += 1;
                                    }
                                });
                        }
                    >
                        "›"
                    </button>
                    <button
                        class="btn btn--small"
                        disabled=move || current_page() + 1 >= page_count()
                        on:click=move |_| {
                            query
                                .update(|q| {
                                    q.page = q.page_count(products.get_untracked().total) - 1;
                                });
                        }
                    >
                        "»"
                    </button>
                </div>

                <label class="product-table__page-size">
                    "Rows per page"
                    <select
                        prop:value=move || query.get().page_size.to_string()
                        on:change=move |ev| {
                            if let Ok(size) = event_target_value(&ev).parse::<u32>() {
                                query.update(|q| q.set_page_size(size));
                            }
                        }
                    >
                        {PAGE_SIZE_OPTIONS
                            .into_iter()
                            .map(|size| {
                                view! { <option value=size.to_string()>{size.to_string()}</option> }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
            </div>
        </div>

        {move || {
            edit_target
                .get()
                .map(|product| {
                    view! {
                        <ProductFormDialog
                            title="Edit Product"
                            initial=Some(product)
                            on_close=Callback::new(move |()| edit_target.set(None))
                        />
                    }
                })
        }}

        {move || {
            delete_target
                .get()
                .map(|product| {
                    view! {
                        <ConfirmDialog
                            title="Delete Product"
                            message=format!("Are you sure you want to delete {}?", product.name)
                            confirm_label="Delete"
                            on_confirm=on_delete_confirm
                            on_cancel=on_delete_cancel
                        />
                    }
                })
        }}
    }
}
