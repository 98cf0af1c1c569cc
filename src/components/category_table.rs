//! Category table with rename and delete actions.

use leptos::prelude::*;

use crate::components::category_form::CategoryFormDialog;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::net::types::Category;
use crate::state::actions;
use crate::state::categories::CategoriesState;
use crate::state::products::ProductsState;
use crate::state::query::ProductQuery;
use crate::state::ui::UiState;

/// The category listing table. Deletion is guarded by a confirmation dialog.
#[component]
pub fn CategoryTable() -> impl IntoView {
    let products = expect_context::<RwSignal<ProductsState>>();
    let categories = expect_context::<RwSignal<CategoriesState>>();
    let query = expect_context::<RwSignal<ProductQuery>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let edit_target = RwSignal::new(None::<Category>);
    let delete_target = RwSignal::new(None::<Category>);

    let on_delete_confirm = Callback::new(move |()| {
        let Some(category) = delete_target.get_untracked() else {
            return;
        };
        delete_target.set(None);
        leptos::task::spawn_local(async move {
            let deleted = actions::delete_category(
                categories,
                products,
                query.get_untracked(),
                category.id,
            )
            .await;
            if deleted.is_ok() {
                actions::flash(ui, "Category deleted successfully!");
            }
        });
    });
    let on_delete_cancel = Callback::new(move |()| delete_target.set(None));

    view! {
        <div class="category-table">
            <table class="category-table__table">
                <thead>
                    <tr>
                        <th class="category-table__header">"Category Name"</th>
                        <th class="category-table__header category-table__header--actions">
                            "Actions"
                        </th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let items = categories.get().items;
                        if items.is_empty() {
                            return view! {
                                <tr>
                                    <td class="category-table__empty" colspan="2">
                                        "No categories yet"
                                    </td>
                                </tr>
                            }
                                .into_any();
                        }

                        items
                            .into_iter()
                            .map(|category| {
                                let edit_item = category.clone();
                                let delete_item = category.clone();
                                view! {
                                    <tr class="category-table__row">
                                        <td>{category.name.clone()}</td>
                                        <td class="category-table__actions">
                                            <button
                                                class="btn btn--small"
                                                on:click=move |_| edit_target.set(Some(edit_item.clone()))
                                            >
                                                "Edit"
                                            </button>
                                            <button
                                                class="btn btn--small btn--danger"
                                                on:click=move |_| delete_target.set(Some(delete_item.clone()))
                                            >
                                                "Delete"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>()
                            .into_any()
                    }}
                </tbody>
            </table>
        </div>

        {move || {
            edit_target
                .get()
                .map(|category| {
                    view! {
                        <CategoryFormDialog
                            title="Edit Category"
                            initial=Some(category)
                            on_close=Callback::new(move |()| edit_target.set(None))
                        />
                    }
                })
        }}

        {move || {
            delete_target
                .get()
                .map(|category| {
                    view! {
                        <ConfirmDialog
                            title="Delete Category"
                            message=format!("Are you sure you want to delete {}?", category.name)
                            confirm_label="Delete"
                            on_confirm=on_delete_confirm
                            on_cancel=on_delete_cancel
                        />
                    }
                })
        }}
    }
}
