//! Filter bar for the product listing: name search, category selection, and
//! availability.

use leptos::prelude::*;

use crate::state::categories::CategoriesState;
use crate::state::query::{Availability, ProductFilters, ProductQuery};

/// Collects filter inputs and writes them into the shared listing query on
/// search. Writing the filters resets the page to 0; the listing effect picks
/// the change up from there.
#[component]
pub fn ProductFilter() -> impl IntoView {
    let categories = expect_context::<RwSignal<CategoriesState>>();
    let query = expect_context::<RwSignal<ProductQuery>>();

    let name = RwSignal::new(String::new());
    let selected = RwSignal::new(Vec::<i64>::new());
    let availability = RwSignal::new(Availability::Any);

    let apply = move || {
        query.update(|q| {
            q.set_filters(ProductFilters {
                name: name.get(),
                categories: selected.get(),
                availability: availability.get(),
            });
        });
    };

    let on_search = move |_| apply();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            apply();
        }
    };

    let on_availability = move |ev: leptos::ev::Event| {
        availability.set(match event_target_value(&ev).as_str() {
            "instock" => Availability::InStock,
            "outofstock" => Availability::OutOfStock,
            _ => Availability::Any,
        });
    };

    view! {
        <div class="product-filter">
            <label class="product-filter__field">
                "Name"
                <input
                    class="product-filter__input"
                    type="text"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
            </label>

            <fieldset class="product-filter__categories">
                <legend>"Categories"</legend>
                {move || {
                    let items = categories.get().items;
                    if items.is_empty() {
                        return view! {
                            <span class="product-filter__empty">"No categories yet"</span>
                        }
                            .into_any();
                    }

                    items
                        .into_iter()
                        .map(|category| {
                            let id = category.id;
                            let checked = move || selected.get().contains(&id);
                            view! {
                                <label class="product-filter__category">
                                    <input
                                        type="checkbox"
                                        prop:checked=checked
                                        on:change=move |_| {
                                            selected
                                                .update(|ids| {
                                                    if let Some(pos) = ids.iter().position(|i| *i == id) {
                                                        ids.remove(pos);
                                                    } else {
                                                        ids.push(id);
                                                    }
                                                });
                                        }
                                    />
                                    {category.name}
                                </label>
                            }
                        })
                        .collect::<Vec<_>>()
                        .into_any()
                }}
            </fieldset>

            <label class="product-filter__field">
                "Availability"
                <select class="product-filter__input" on:change=on_availability>
                    <option value="">"All"</option>
                    <option value="instock">"In Stock"</option>
                    <option value="outofstock">"Out of Stock"</option>
                </select>
            </label>

            <button class="btn btn--primary" on:click=on_search>
                "Search"
            </button>
        </div>
    }
}
