//! Create/edit category dialog with the duplicate-name guard.

use leptos::prelude::*;

use crate::net::types::{Category, CategoryDraft};
use crate::state::actions;
use crate::state::categories::{CategoriesState, is_duplicate_name};
use crate::state::products::ProductsState;
use crate::state::query::ProductQuery;
use crate::state::ui::UiState;
use crate::util::validate;

/// Modal dialog for creating (`initial: None`) or renaming a category.
///
/// The name is trimmed before submission and rejected client-side when blank
/// or when it collides case-insensitively with another category. `on_saved`
/// receives the saved category, letting the product form select a category
/// created inline.
#[component]
pub fn CategoryFormDialog(
    title: &'static str,
    initial: Option<Category>,
    on_close: Callback<()>,
    #[prop(into, optional)] on_saved: Option<Callback<Category>>,
) -> impl IntoView {
    let products = expect_context::<RwSignal<ProductsState>>();
    let categories = expect_context::<RwSignal<CategoriesState>>();
    let query = expect_context::<RwSignal<ProductQuery>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let edit_id = initial.as_ref().map(|c| c.id);
    let name = RwSignal::new(initial.map(|c| c.name).unwrap_or_default());
    let form_error = RwSignal::new(None::<String>);

    let submit = Callback::new(move |()| {
        let trimmed = name.get().trim().to_owned();
        if validate::required(&trimmed).is_some() {
            form_error.set(Some("Name is required.".to_owned()));
            return;
        }
        if is_duplicate_name(&categories.get_untracked().items, &trimmed, edit_id) {
            form_error.set(Some("A category with this name already exists.".to_owned()));
            return;
        }
        form_error.set(None);

        let draft = CategoryDraft { name: trimmed };
        leptos::task::spawn_local(async move {
            let result = match edit_id {
                Some(id) => {
                    actions::update_category(categories, products, query.get_untracked(), id, draft)
                        .await
                }
                None => {
                    actions::create_category(categories, products, query.get_untracked(), draft)
                        .await
                }
            };
            match result {
                Ok(category) => {
                    let message = if edit_id.is_some() {
                        "Category updated successfully!"
                    } else {
                        "Category created successfully!"
                    };
                    actions::flash(ui, message);
                    if let Some(saved) = on_saved {
                        saved.run(category);
                    }
                    on_close.run(());
                }
                Err(err) => form_error.set(Some(err.to_string())),
            }
        });
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
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
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit.run(());
                            }
                        }
                    />
                </label>

                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| submit.run(())>
                        "Save"
                    </button>
                </div>
            </div>
        </div>
    }
}
